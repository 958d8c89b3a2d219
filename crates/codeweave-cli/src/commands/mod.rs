pub mod ast;
pub mod get;
pub mod remove;
pub mod set;
pub mod types;

#[cfg(test)]
mod ast_tests;
#[cfg(test)]
mod types_tests;

use std::fmt::Display;
use std::path::Path;

use codeweave_lib::{FileStore, FsStore, SessionError, Workspace};

/// Print `error: {err}` to stderr and exit with status 1.
pub fn exit_with(err: impl Display) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}

/// Reads from disk; writes go to stdout instead of the file.
struct PreviewStore;

impl FileStore for PreviewStore {
    fn read(&self, path: &Path) -> Result<String, SessionError> {
        FsStore.read(path)
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), SessionError> {
        println!("// {}", path.display());
        print!("{}", content);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        FsStore.exists(path)
    }
}

/// Workspace on disk, or one whose saves are only printed.
fn workspace(dry_run: bool) -> Workspace {
    if dry_run {
        Workspace::new(Box::new(PreviewStore))
    } else {
        Workspace::default()
    }
}

/// Commit every pending edit and report the files written.
fn save_all(workspace: &Workspace, dry_run: bool) {
    let saved = workspace.save_all().unwrap_or_else(|e| exit_with(e));
    if !dry_run {
        for path in saved {
            eprintln!("updated {}", path.display());
        }
    }
}
