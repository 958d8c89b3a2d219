//! Interface text rendering.

use codeweave_core::utils::{is_identifier, quote_single};

use super::RenderConfig;
use super::types::{Interface, Member, TsType};

/// Render `export interface Name { … }`, preceded by the documentation
/// comment when the config asks for it.
pub fn render_interface(interface: &Interface, config: &RenderConfig) -> String {
    let mut out = String::new();
    if config.export {
        out.push_str("export ");
    }
    out.push_str("interface ");
    out.push_str(&interface.name);
    out.push_str(" {\n");
    for member in &interface.members {
        render_member(member, 1, config, &mut out);
    }
    out.push('}');

    if config.commented {
        return format!("{}{}", doc_comment(&out), out);
    }
    out
}

/// Render a type expression as it appears at `level` indentation.
pub fn render_type(ty: &TsType, level: usize, config: &RenderConfig) -> String {
    let mut out = String::new();
    write_type(ty, level, config, &mut out);
    out
}

/// Parenthesize unions where they would otherwise bind wrongly.
pub fn wrap_if_union(ty: &TsType, rendered: String) -> String {
    if ty.is_union() {
        format!("({})", rendered)
    } else {
        rendered
    }
}

fn render_member(member: &Member, level: usize, config: &RenderConfig, out: &mut String) {
    indent(level, config, out);
    out.push_str(&property_name(&member.name));
    if member.optional {
        out.push('?');
    }
    out.push_str(": ");
    write_type(&member.ty, level, config, out);
    out.push_str(";\n");
}

fn write_type(ty: &TsType, level: usize, config: &RenderConfig, out: &mut String) {
    match ty {
        TsType::Keyword(keyword) => out.push_str(keyword),
        TsType::Reference(name) => out.push_str(name),
        TsType::Array(inner) => {
            let rendered = render_type(inner, level, config);
            out.push_str(&wrap_if_union(inner, rendered));
            out.push_str("[]");
        }
        TsType::Union(variants) => {
            let parts: Vec<String> = variants
                .iter()
                .map(|v| wrap_if_union(v, render_type(v, level, config)))
                .collect();
            out.push_str(&parts.join(" | "));
        }
        TsType::Object(members) if members.is_empty() => out.push_str("{}"),
        TsType::Object(members) => {
            out.push_str("{\n");
            for member in members {
                render_member(member, level + 1, config, out);
            }
            indent(level, config, out);
            out.push('}');
        }
        TsType::Index { key, value } => {
            out.push_str("{\n");
            indent(level + 1, config, out);
            out.push_str(&format!("[{}: string]: ", key));
            write_type(value, level + 1, config, out);
            out.push_str(";\n");
            indent(level, config, out);
            out.push('}');
        }
    }
}

fn indent(level: usize, config: &RenderConfig, out: &mut String) {
    out.extend(std::iter::repeat_n(' ', level * config.indent));
}

fn property_name(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        quote_single(name)
    }
}

/// ```` /** ```typescript … ``` */ ```` block repeating `declaration`.
fn doc_comment(declaration: &str) -> String {
    let mut comment = String::from("/**\n * ```typescript\n");
    for line in declaration.lines() {
        comment.push_str(" * ");
        comment.push_str(line);
        comment.push('\n');
    }
    comment.push_str(" * ```\n */\n");
    comment
}
