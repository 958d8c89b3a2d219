use codeweave_core::{EntitySchema, FieldSchema};
use serde_json::json;

use super::{DeclarativeMapper, MapError, MapOp, MapperRegistry, SchemaMapper};

fn pedido() -> EntitySchema {
    serde_json::from_value(json!({
        "tableAlias": "pedido",
        "fields": [
            { "Field": "idPedido", "Type": "int" },
            { "Field": "total", "Type": "decimal(10,2)" }
        ],
        "parentTables": [{
            "tableAlias": "pedido.cliente",
            "fields": [{ "Field": "nombre", "Type": "varchar(50)" }]
        }],
        "childTables": [{
            "tableAlias": "pedido.lineas",
            "fields": [{ "Field": "cantidad", "Type": "int" }]
        }]
    }))
    .unwrap()
}

fn field_names(schema: &EntitySchema) -> Vec<&str> {
    schema.fields.iter().map(|f| f.field.as_str()).collect()
}

#[test]
fn ops_from_configuration() {
    let mapper: DeclarativeMapper = serde_json::from_value(json!({
        "ops": [
            { "op": "add-field", "field": { "Field": "nota", "Type": "text", "Null": "YES" } },
            { "op": "remove-field", "relation": "cliente", "field": "nombre" },
            { "op": "rename-alias", "relation": "lineas", "alias": "items" }
        ]
    }))
    .unwrap();

    let mapped = mapper.map(pedido()).unwrap();

    assert_eq!(field_names(&mapped), ["idPedido", "total", "nota"]);
    assert!(mapped.parent_tables[0].fields.is_empty());
    assert_eq!(mapped.child_tables[0].table_alias, "pedido.items");
}

#[test]
fn add_field_to_nested_relation() {
    let mapper = DeclarativeMapper::new(vec![MapOp::AddField {
        relation: "lineas".to_string(),
        field: FieldSchema::new("precio", "float"),
    }]);

    let mapped = mapper.map(pedido()).unwrap();

    assert_eq!(field_names(&mapped.child_tables[0]), ["cantidad", "precio"]);
}

#[test]
fn op_errors() {
    let duplicate = DeclarativeMapper::new(vec![MapOp::AddField {
        relation: String::new(),
        field: FieldSchema::new("total", "int"),
    }]);
    assert_eq!(
        duplicate.map(pedido()).unwrap_err(),
        MapError::DuplicateField {
            relation: String::new(),
            field: "total".to_string(),
        }
    );

    let unknown_field = DeclarativeMapper::new(vec![MapOp::RemoveField {
        relation: "cliente".to_string(),
        field: "email".to_string(),
    }]);
    insta::assert_snapshot!(unknown_field.map(pedido()).unwrap_err(), @"no field `email` in `cliente`");

    let unknown_relation = DeclarativeMapper::new(vec![MapOp::RenameAlias {
        relation: "cliente.direccion".to_string(),
        alias: "dir".to_string(),
    }]);
    insta::assert_snapshot!(unknown_relation.map(pedido()).unwrap_err(), @"no relation `cliente.direccion`");
}

#[test]
fn closures_are_mappers() {
    let registry = MapperRegistry::new()
        .with("sinTotal", |mut schema: EntitySchema| -> Result<EntitySchema, MapError> {
            schema.fields.retain(|f| f.field != "total");
            Ok(schema)
        })
        .with("falla", |_: EntitySchema| -> Result<EntitySchema, MapError> {
            Err(MapError::Custom("no".to_string()))
        });

    assert_eq!(registry.len(), 2);
    let mapped = registry.get("sinTotal").unwrap().map(pedido()).unwrap();
    assert_eq!(field_names(&mapped), ["idPedido"]);
    assert!(registry.get("falla").unwrap().map(pedido()).is_err());
    assert!(registry.get("otro").is_none());
    insta::assert_snapshot!(format!("{:?}", registry), @r#"MapperRegistry { mappers: ["falla", "sinTotal"] }"#);
}
