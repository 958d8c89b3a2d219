//! Database column type classification.

use super::SynthError;
use super::types::TsType;

/// TypeScript-facing category of a raw database column type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnType {
    /// `[T]`: an embedded array of `T` values.
    Array(Box<ColumnType>),
    Boolean,
    String,
    /// Dates and times travel as strings.
    Datetime,
    Number,
    /// `longtext` holding either raw text or a decoded JSON object.
    Json,
    /// Empty type.
    Any,
}

impl ColumnType {
    /// Classify a raw type such as `varchar(255)` or `tinyint(1)`.
    ///
    /// Prefix checks run in a fixed order, so `tinyint(1)` is a boolean
    /// while any other `tinyint` is a number, and `datetime` never reaches
    /// the `date` check.
    pub fn classify(raw: &str) -> Result<Self, SynthError> {
        if let Some(inner) = raw.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            return Ok(ColumnType::Array(Box::new(Self::classify(inner)?)));
        }
        let starts = |prefixes: &[&str]| prefixes.iter().any(|p| raw.starts_with(p));

        let ty = if starts(&["tinyint(1)", "bool", "boolean"]) {
            ColumnType::Boolean
        } else if starts(&["varchar", "char", "text"]) {
            ColumnType::String
        } else if starts(&["datetime", "date", "time"]) {
            ColumnType::Datetime
        } else if starts(&[
            "int",
            "integer",
            "smallint",
            "mediumint",
            "bigint",
            "float",
            "double",
            "decimal",
            "dec",
            "numeric",
            "tinyint",
        ]) {
            ColumnType::Number
        } else if starts(&["longtext"]) {
            ColumnType::Json
        } else if raw.is_empty() {
            ColumnType::Any
        } else {
            return Err(SynthError::UnrecognizedType(raw.to_string()));
        };
        Ok(ty)
    }

    pub fn to_ts(&self) -> TsType {
        match self {
            ColumnType::Array(inner) => TsType::Array(Box::new(inner.to_ts())),
            ColumnType::Boolean => TsType::Keyword("boolean"),
            ColumnType::String | ColumnType::Datetime => TsType::Keyword("string"),
            ColumnType::Number => TsType::Keyword("number"),
            ColumnType::Json => TsType::Union(vec![
                TsType::Keyword("string"),
                TsType::Index {
                    key: "key".to_string(),
                    value: Box::new(TsType::Keyword("any")),
                },
            ]),
            ColumnType::Any => TsType::Keyword("any"),
        }
    }
}
