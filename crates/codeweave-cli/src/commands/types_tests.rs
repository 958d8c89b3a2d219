use std::fs;
use std::path::{Path, PathBuf};

use codeweave_core::Colors;
use codeweave_lib::schema::FixtureSchemaProvider;
use codeweave_lib::{
    GenerateOptions, GenerateReport, GeneratedInterface, SchemaFailure, SchemaGenerator, Workspace,
};
use indoc::indoc;

use super::types::{TypesError, discover, summary};

fn touch(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn discovers_schema_files_in_path_order() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(root, "b/users.schema.ts", "");
    touch(root, "a/orders.schema.ts", "");
    touch(root, "a/orders.types.ts", "");
    touch(root, "node_modules/pkg/x.schema.ts", "");

    let files: Vec<PathBuf> = discover(root)
        .unwrap()
        .into_iter()
        .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
        .collect();

    assert_eq!(
        files,
        [
            PathBuf::from("a/orders.schema.ts"),
            PathBuf::from("b/users.schema.ts")
        ]
    );
}

#[test]
fn single_file_is_taken_as_is() {
    let dir = tempfile::tempdir().unwrap();
    let file = touch(dir.path(), "models.ts", "");
    assert_eq!(discover(&file).unwrap(), [file]);
}

#[test]
fn missing_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = discover(&dir.path().join("nope")).unwrap_err();
    assert!(matches!(err, TypesError::MissingPath(_)));
}

#[test]
fn summary_lists_outputs_and_errors() {
    let reports = vec![
        GenerateReport {
            file: PathBuf::from("src/users.schema.ts"),
            interfaces: vec![
                GeneratedInterface {
                    name: "User".to_string(),
                    content: String::new(),
                },
                GeneratedInterface {
                    name: "Users".to_string(),
                    content: String::new(),
                },
            ],
            failures: vec![SchemaFailure {
                file: PathBuf::from("src/users.schema.ts"),
                interface: "Account".to_string(),
                message: "Unrecognized database type 'geometry'.".to_string(),
            }],
            skipped: vec!["Hidden".to_string()],
            written: Some(PathBuf::from("src/users.types.ts")),
            indexed: true,
        },
        GenerateReport {
            file: PathBuf::from("src/empty.schema.ts"),
            ..GenerateReport::default()
        },
    ];

    insta::assert_snapshot!(summary(&reports, Colors::OFF), @r"
    skipped Hidden in src/users.schema.ts
    generated src/users.types.ts (User, Users)

    ERRORS:
      src/users.schema.ts Account: Unrecognized database type 'geometry'.
    ");
}

#[test]
fn summary_colors() {
    let report = GenerateReport {
        file: PathBuf::from("a.schema.ts"),
        written: Some(PathBuf::from("a.types.ts")),
        ..GenerateReport::default()
    };
    let out = summary(&[report], Colors::ON);
    assert!(out.starts_with("\x1b[32mgenerated\x1b[0m"));
}

#[tokio::test]
async fn generates_on_disk_from_fixtures() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    touch(
        root,
        "fixtures/usuario.json",
        r#"{ "tableAlias": "usuario", "fields": [{ "Field": "id", "Type": "int" }] }"#,
    );
    let schema = touch(
        root,
        "src/usuarios.schema.ts",
        indoc! {"
            export const UsuariosSchema: EntitySchema = {
              name: 'usuarios',
              detail: { fields: 'id' },
            };
        "},
    );
    touch(root, "src/index.ts", "export * from './other';\n");

    let generator = SchemaGenerator::new(
        Workspace::default(),
        Box::new(FixtureSchemaProvider::new(root.join("fixtures"))),
    )
    .options(GenerateOptions::new().commented(false));
    let files = discover(&root.join("src")).unwrap();
    let reports = generator.process_files(&files).await.unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].file, schema);
    insta::assert_snapshot!(fs::read_to_string(root.join("src/usuarios.types.ts")).unwrap(), @r"
    export interface Usuario {
      id: number;
    }
    ");
    insta::assert_snapshot!(fs::read_to_string(root.join("src/index.ts")).unwrap(), @r"
    export * from './other';
    export { Usuario } from './usuarios.types';
    ");
}
