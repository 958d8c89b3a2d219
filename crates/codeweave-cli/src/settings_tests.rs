use std::time::Duration;

use codeweave_core::EntitySchema;
use indoc::indoc;
use serde_json::json;

use crate::settings::Settings;

fn load(toml: &str) -> Settings {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("codeweave.toml");
    std::fs::write(&path, toml).unwrap();
    Settings::load(Some(&path)).unwrap()
}

#[test]
fn api_and_flags() {
    let settings = load(indoc! {r#"
        fixtures = "schemas"
        commented = true

        [api]
        base_url = "https://api.example.com"
        user_id = "12"
        timeout_secs = 5
    "#});

    assert_eq!(settings.api.base_url.as_deref(), Some("https://api.example.com"));
    assert_eq!(settings.api.user_id.as_deref(), Some("12"));
    assert_eq!(settings.api.timeout(), Some(Duration::from_secs(5)));
    assert_eq!(settings.fixtures.as_deref(), Some(std::path::Path::new("schemas")));
    assert!(settings.commented);
    assert!(settings.mappers.is_empty());
}

#[test]
fn declarative_mappers() {
    let settings = load(indoc! {r#"
        [mappers."UsuariosSchema.detail"]
        ops = [
          { op = "remove-field", field = "password" },
          { op = "add-field", field = { Field = "fullName", Type = "varchar(200)" } },
        ]
    "#});
    let registry = settings.mapper_registry();
    let mapper = registry.get("UsuariosSchema.detail").unwrap();

    let schema: EntitySchema = serde_json::from_value(json!({
        "tableAlias": "usuario",
        "fields": [
            { "Field": "idUsuario", "Type": "int" },
            { "Field": "password", "Type": "varchar(64)" }
        ]
    }))
    .unwrap();
    let mapped = mapper.map(schema).unwrap();

    let names: Vec<&str> = mapped.fields.iter().map(|f| f.field.as_str()).collect();
    assert_eq!(names, ["idUsuario", "fullName"]);
}

#[test]
fn explicit_file_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(Settings::load(Some(&missing)).is_err());
}

#[test]
fn empty_file_gives_defaults() {
    let settings = load("");
    assert!(settings.api.base_url.is_none());
    assert!(!settings.commented);
    assert_eq!(settings.api.timeout(), None);
}
