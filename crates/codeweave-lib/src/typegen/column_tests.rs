use super::{ColumnType, RenderConfig, SynthError, render_type};

fn ts(raw: &str) -> String {
    let ty = ColumnType::classify(raw).unwrap().to_ts();
    render_type(&ty, 0, &RenderConfig::default())
}

#[test]
fn booleans_before_numbers() {
    assert_eq!(ColumnType::classify("tinyint(1)"), Ok(ColumnType::Boolean));
    assert_eq!(ColumnType::classify("tinyint(4)"), Ok(ColumnType::Number));
    assert_eq!(ColumnType::classify("tinyint"), Ok(ColumnType::Number));
    assert_eq!(ColumnType::classify("boolean"), Ok(ColumnType::Boolean));
}

#[test]
fn prefixes() {
    assert_eq!(ColumnType::classify("varchar(255)"), Ok(ColumnType::String));
    assert_eq!(ColumnType::classify("char(2)"), Ok(ColumnType::String));
    assert_eq!(ColumnType::classify("text"), Ok(ColumnType::String));
    assert_eq!(ColumnType::classify("datetime"), Ok(ColumnType::Datetime));
    assert_eq!(ColumnType::classify("timestamp"), Ok(ColumnType::Datetime));
    assert_eq!(ColumnType::classify("int(11) unsigned"), Ok(ColumnType::Number));
    assert_eq!(ColumnType::classify("decimal(10,2)"), Ok(ColumnType::Number));
    assert_eq!(ColumnType::classify("longtext"), Ok(ColumnType::Json));
    assert_eq!(ColumnType::classify(""), Ok(ColumnType::Any));
}

#[test]
fn unknown_type() {
    let err = ColumnType::classify("geometry").unwrap_err();
    assert_eq!(err, SynthError::UnrecognizedType("geometry".into()));
    insta::assert_snapshot!(err, @"Unrecognized database type 'geometry'.");

    // Nested failures surface the inner type.
    assert_eq!(
        ColumnType::classify("[blob]"),
        Err(SynthError::UnrecognizedType("blob".into()))
    );
}

#[test]
fn embedded_arrays() {
    assert_eq!(ts("[int]"), "number[]");
    assert_eq!(ts("[[varchar]]"), "string[][]");
    assert_eq!(ts("[]"), "any[]");
}

#[test]
fn rendered_keywords() {
    assert_eq!(ts("date"), "string");
    assert_eq!(ts("bool"), "boolean");
    assert_eq!(ts(""), "any");
    insta::assert_snapshot!(ts("longtext"), @r"
    string | {
      [key: string]: any;
    }
    ");
    insta::assert_snapshot!(ts("[longtext]"), @r"
    (string | {
      [key: string]: any;
    })[]
    ");
}
