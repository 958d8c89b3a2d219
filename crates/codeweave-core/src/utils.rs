/// Convert snake_case, kebab-case, dotted or camelCase words to PascalCase.
///
/// Words are split on `_`, `-`, `.` and whitespace. The first letter of each
/// word is uppercased; the rest of the word keeps its case, so camel humps
/// survive (`depositoCotejable` becomes `DepositoCotejable`).
///
/// # Examples
/// ```
/// use codeweave_core::utils::to_pascal_case;
/// assert_eq!(to_pascal_case("transaccion"), "Transaccion");
/// assert_eq!(to_pascal_case("mi-perfil"), "MiPerfil");
/// assert_eq!(to_pascal_case("FooBar"), "FooBar");  // idempotent
/// ```
pub fn to_pascal_case(s: &str) -> String {
    fn is_separator(c: char) -> bool {
        matches!(c, '_' | '-' | '.') || c.is_whitespace()
    }

    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;
    for c in s.chars() {
        if is_separator(c) {
            capitalize_next = true;
            continue;
        }
        if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Derive the singular form the way schema declarations do: a plain name
/// is treated as plural and loses one trailing `s`.
///
/// ```
/// use codeweave_core::utils::singularize;
/// assert_eq!(singularize("usuarios"), "usuario");
/// assert_eq!(singularize("staff"), "staff");
/// ```
pub fn singularize(plural: &str) -> String {
    plural.strip_suffix('s').unwrap_or(plural).to_string()
}

/// Whether `s` can be written as a bare TypeScript property name.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Quote `s` as a single-quoted TypeScript string literal.
pub fn quote_single(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Last segment of a dotted alias path (`cuenta.entidad` → `entidad`).
pub fn last_segment(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}
