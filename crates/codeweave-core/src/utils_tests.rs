use crate::utils::{is_identifier, last_segment, quote_single, singularize, to_pascal_case};

#[test]
fn pascal_case_from_snake() {
    assert_eq!(to_pascal_case("foo_bar"), "FooBar");
    assert_eq!(to_pascal_case("foo"), "Foo");
    assert_eq!(to_pascal_case("_foo"), "Foo");
    assert_eq!(to_pascal_case("foo_"), "Foo");
}

#[test]
fn pascal_case_keeps_humps() {
    assert_eq!(to_pascal_case("depositoCotejable"), "DepositoCotejable");
    assert_eq!(to_pascal_case("FooBar"), "FooBar");
}

#[test]
fn pascal_case_from_kebab_and_dotted() {
    assert_eq!(to_pascal_case("mi-perfil"), "MiPerfil");
    assert_eq!(to_pascal_case("transacciones.remesas"), "TransaccionesRemesas");
}

#[test]
fn singular_drops_one_s() {
    assert_eq!(singularize("idiomas"), "idioma");
    assert_eq!(singularize("ss"), "s");
    assert_eq!(singularize(""), "");
}

#[test]
fn identifiers() {
    assert!(is_identifier("idreg"));
    assert!(is_identifier("$tag"));
    assert!(is_identifier("_x1"));
    assert!(!is_identifier("1x"));
    assert!(!is_identifier("foo-bar"));
    assert!(!is_identifier(""));
}

#[test]
fn single_quotes() {
    assert_eq!(quote_single("dev"), "'dev'");
    assert_eq!(quote_single("it's"), r"'it\'s'");
    assert_eq!(quote_single("a\\b"), r"'a\\b'");
}

#[test]
fn last_alias_segment() {
    assert_eq!(last_segment("cuenta.entidad"), "entidad");
    assert_eq!(last_segment("cuenta"), "cuenta");
    assert_eq!(last_segment(""), "");
}
