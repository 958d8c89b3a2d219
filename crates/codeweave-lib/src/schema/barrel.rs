//! `index.ts` re-export maintenance.

use std::path::Path;

use crate::kinds;
use crate::query::named_children;
use crate::session::{SessionError, Workspace};

pub const INDEX_FILE: &str = "index.ts";

/// Make `dir/index.ts` re-export `names` from `./{module}`.
///
/// An existing `export { … } from './{module}'` has its clause replaced;
/// otherwise a new export line goes after the last export statement, or at
/// the top of the file. Returns `false` when the directory has no index.
pub fn update_barrel(
    workspace: &Workspace,
    dir: &Path,
    module: &str,
    names: &[&str],
) -> Result<bool, SessionError> {
    let index = dir.join(INDEX_FILE);
    if !workspace.exists(&index) {
        return Ok(false);
    }

    let session = workspace.reload(&index)?;
    let specifier = format!("./{}", module);
    let clause = format!("{{ {} }}", names.join(", "));
    let exports = session.export_declarations();

    let existing = exports
        .iter()
        .filter(|e| session.module_specifier(**e).as_deref() == Some(specifier.as_str()))
        .find_map(|e| {
            named_children(*e)
                .into_iter()
                .find(|n| n.kind() == kinds::EXPORT_CLAUSE)
        });

    match (existing, exports.last()) {
        (Some(existing), _) => session.replace_node(existing, clause),
        (None, Some(last)) => {
            session.insert_after(*last, format!("\nexport {} from '{}';", clause, specifier))
        }
        (None, None) => session.insert(
            0,
            format!("export {} from '{}';\n", clause, specifier),
            0,
        ),
    }

    workspace.save(&index)?;
    tracing::info!(index = %index.display(), module, "barrel updated");
    Ok(true)
}
