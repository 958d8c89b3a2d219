//! Delete a property.

use std::path::PathBuf;

use super::{exit_with, save_all, workspace};

pub struct RemoveArgs {
    pub file: PathBuf,
    pub property_path: String,
    pub dry_run: bool,
}

pub fn run(args: RemoveArgs) {
    let workspace = workspace(args.dry_run);
    if let Err(e) = workspace.remove_property(&args.file, &args.property_path) {
        exit_with(e);
    }
    save_all(&workspace, args.dry_run);
}
