//! Replace a literal value in place.

use std::path::PathBuf;

use codeweave_lib::Value;

use super::{exit_with, save_all, workspace};

pub struct SetArgs {
    pub file: PathBuf,
    pub property_path: String,
    /// Raw JSON text.
    pub value: String,
    pub dry_run: bool,
}

pub fn run(args: SetArgs) {
    let value = parse_value(&args.value).unwrap_or_else(|e| exit_with(e));

    let workspace = workspace(args.dry_run);
    if let Err(e) = workspace.set_property_value(&args.file, &args.property_path, &value) {
        exit_with(e);
    }
    save_all(&workspace, args.dry_run);
}

/// JSON text as a literal value.
pub fn parse_value(text: &str) -> Result<Value, String> {
    serde_json::from_str::<serde_json::Value>(text)
        .map(Value::from)
        .map_err(|e| format!("invalid JSON value `{}`: {}", text, e))
}
