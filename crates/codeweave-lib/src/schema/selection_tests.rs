use std::path::Path;

use codeweave_core::EntityName;
use indexmap::IndexMap;
use indoc::indoc;

use super::{MapSchema, SchemaError, Selection, View, declarations, entity_name};
use crate::session::{MemoryStore, Workspace};
use crate::value::Value;

fn parse(source: &str) -> Result<Vec<super::SchemaDeclaration>, SchemaError> {
    let workspace = Workspace::new(Box::new(MemoryStore::new().with_file("a.schema.ts", source)));
    declarations(&workspace, Path::new("a.schema.ts"))
}

#[test]
fn only_annotated_declarations_count() {
    let decls = parse(indoc! {"
        const helper = { name: 'x' };
        export const Usuarios: EntitySchema = { name: 'usuarios' };
        let other: Record<string, unknown> = { name: 'y' };
    "})
    .unwrap();

    assert_eq!(decls.len(), 1);
    assert_eq!(decls[0].variable, "Usuarios");
    assert_eq!(decls[0].name, EntityName::new("usuario", "usuarios"));
    assert_eq!(decls[0].backend, decls[0].name);
    assert!(decls[0].generate_types_file);
    assert_eq!(decls[0].selections().count(), 0);
}

#[test]
fn selection_entries() {
    let decls = parse(indoc! {"
        export const Usuarios: EntitySchema = {
          name: { singular: 'persona', plural: 'gente' },
          backend: 'users',
          generateTypesFile: 0,
          detail: {
            fields: ['id', 'nombre'],
            relations: 'cuenta',
            params: ['deep=1'],
            mapSchema: 'byName',
          },
          list: { fields: '*', mapSchema: function (s) { return s; } },
        };
    "})
    .unwrap();
    let decl = &decls[0];

    assert_eq!(decl.name, EntityName::new("persona", "gente"));
    assert_eq!(decl.backend, EntityName::new("user", "users"));
    assert!(!decl.generate_types_file);

    let detail = decl.detail.as_ref().unwrap();
    assert_eq!(detail.fields, "id,nombre");
    assert_eq!(detail.relations, "cuenta");
    assert_eq!(detail.params, "&deep=1");
    assert_eq!(detail.map_schema, Some(MapSchema::Named("byName".to_string())));
    assert_eq!(detail.query("user"), "schema/user?fields=id,nombre&rel=cuenta&deep=1");

    let list = decl.list.as_ref().unwrap();
    assert_eq!(list.query("users"), "schema/users?fields=*&rel=");
    assert!(matches!(list.map_schema, Some(MapSchema::Source(ref code)) if code.starts_with("function")));
}

#[test]
fn missing_name_is_an_error() {
    let err = parse("export const Broken: EntitySchema = { detail: {} };").unwrap_err();
    insta::assert_snapshot!(err, @"`Broken` has no `name`");
}

#[test]
fn name_must_be_a_string_or_pair() {
    let err = parse("export const Broken: EntitySchema = { name: 42 };").unwrap_err();
    insta::assert_snapshot!(err, @"`Broken.name` must be a string or { singular, plural }");
}

#[test]
fn views_pick_singular_or_plural() {
    let name = EntityName::new("cuenta", "cuentas");
    assert_eq!(View::Detail.pick(&name), "cuenta");
    assert_eq!(View::List.pick(&name), "cuentas");
    assert_eq!(View::List.to_string(), "list");
}

#[test]
fn entity_names_from_values() {
    assert_eq!(
        entity_name(&Value::String("pedidos".into())),
        Some(EntityName::new("pedido", "pedidos"))
    );

    let mut partial = IndexMap::new();
    partial.insert("singular".to_string(), Value::String("a".into()));
    assert_eq!(entity_name(&Value::Object(partial)), None);
    assert_eq!(entity_name(&Value::Bool(true)), None);
}

#[test]
fn empty_selection_query() {
    let selection = Selection {
        view: View::Detail,
        fields: String::new(),
        relations: String::new(),
        params: String::new(),
        map_schema: None,
    };
    assert_eq!(selection.query("x"), "schema/x?fields=&rel=");
}
