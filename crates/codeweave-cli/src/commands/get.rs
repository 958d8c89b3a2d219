//! Print a property value as JSON.

use std::path::PathBuf;

use codeweave_lib::Workspace;

use super::exit_with;

pub struct GetArgs {
    pub file: PathBuf,
    pub property_path: String,
}

pub fn run(args: GetArgs) {
    let workspace = Workspace::default();
    let value = match workspace.get_property_value(&args.file, &args.property_path) {
        Ok(Some(value)) => value,
        Ok(None) => exit_with(format!("property `{}` not found", args.property_path)),
        Err(e) => exit_with(e),
    };

    match serde_json::to_string_pretty(&value.to_json()) {
        Ok(json) => println!("{}", json),
        Err(e) => exit_with(e),
    }
}
