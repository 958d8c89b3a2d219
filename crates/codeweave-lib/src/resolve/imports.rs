//! One-hop import following.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use arborium_tree_sitter as tree_sitter;
use tree_sitter::Node;

use super::{Binding, ResolveError, Walker, property};
use crate::kinds;
use crate::query::named_children;
use crate::session::{NodeRef, Session, normalize_path};

/// What an import statement binds to a local name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum Imported {
    /// `import { name }` / `import { name as local }`
    Named(String),
    /// `import * as local`
    Namespace,
    /// `import local from …`
    Default,
}

#[derive(Clone, Debug)]
pub(super) struct ImportBinding {
    pub specifier: String,
    pub imported: Imported,
    /// Node that introduces the local name.
    pub local: NodeRef,
}

/// Import in `session` that binds `name`, if any.
pub(super) fn find_import(session: &Session, name: &str) -> Option<ImportBinding> {
    for statement in session.import_declarations() {
        let Some(specifier) = session.module_specifier(statement) else {
            continue;
        };
        if let Some((imported, local)) = clause_binding(session, statement, name) {
            return Some(ImportBinding {
                specifier,
                imported,
                local: NodeRef::of(local),
            });
        }
    }
    None
}

fn clause_binding<'s>(
    session: &'s Session,
    statement: Node<'s>,
    name: &str,
) -> Option<(Imported, Node<'s>)> {
    let clause = named_children(statement)
        .into_iter()
        .find(|n| n.kind() == kinds::IMPORT_CLAUSE)?;

    for child in named_children(clause) {
        match child.kind() {
            kinds::IDENTIFIER if session.text(child) == name => {
                return Some((Imported::Default, child));
            }
            kinds::NAMESPACE_IMPORT => {
                let bound = named_children(child)
                    .into_iter()
                    .any(|n| n.kind() == kinds::IDENTIFIER && session.text(n) == name);
                if bound {
                    return Some((Imported::Namespace, child));
                }
            }
            kinds::NAMED_IMPORTS => {
                for spec in named_children(child) {
                    if spec.kind() != kinds::IMPORT_SPECIFIER {
                        continue;
                    }
                    let Some(imported) = spec.child_by_field_name("name") else {
                        continue;
                    };
                    let local = spec.child_by_field_name("alias").unwrap_or(imported);
                    if session.text(local) == name {
                        let imported = session.text(imported).to_string();
                        return Some((Imported::Named(imported), spec));
                    }
                }
            }
            _ => {}
        }
    }
    None
}

/// Candidate file paths for a relative module specifier, in lookup order.
pub(super) fn module_candidates(importer: &Path, specifier: &str) -> Vec<PathBuf> {
    if !specifier.starts_with('.') {
        return Vec::new();
    }
    let dir = importer.parent().unwrap_or(Path::new(""));
    let base = dir.join(specifier);
    if specifier.ends_with(".ts") || specifier.ends_with(".tsx") {
        return vec![normalize_path(&base)];
    }
    vec![
        normalize_path(&PathBuf::from(format!("{}.ts", base.display()))),
        normalize_path(&base.join("index.ts")),
    ]
}

impl Walker<'_> {
    /// Follow the import that binds `name` in `session`, at most once per walk.
    pub(super) fn import_binding(
        &mut self,
        session: &Rc<Session>,
        name: &str,
    ) -> Result<Option<Binding>, ResolveError> {
        let Some(import) = find_import(session, name) else {
            return Ok(None);
        };
        if self.hop_used {
            tracing::debug!(name, specifier = %import.specifier, "second import hop refused");
            return Ok(None);
        }

        let Some(path) = module_candidates(session.path(), &import.specifier)
            .into_iter()
            .find(|p| self.workspace.exists(p))
        else {
            tracing::debug!(name, specifier = %import.specifier, "import not resolvable");
            return Ok(None);
        };

        self.hop_used = true;
        let module = self.workspace.session(&path)?;
        tracing::debug!(name, module = %path.display(), "following import");

        let binding = match import.imported {
            Imported::Named(imported) => module.top_level_declarator(&imported).map(|decl| {
                Binding::Property(property(
                    &module,
                    name,
                    decl,
                    decl.child_by_field_name("value"),
                ))
            }),
            Imported::Namespace => Some(Binding::Namespace {
                import: super::ResolvedProperty {
                    key: name.to_string(),
                    session: Rc::clone(session),
                    holder: import.local,
                    value: None,
                },
                module,
            }),
            Imported::Default => default_export(&module).map(|(statement, value)| {
                Binding::Property(property(&module, name, statement, Some(value)))
            }),
        };
        Ok(binding)
    }
}

/// `export default <expr>` of a module.
fn default_export(module: &Session) -> Option<(Node<'_>, Node<'_>)> {
    module
        .export_declarations()
        .into_iter()
        .find_map(|statement| Some((statement, statement.child_by_field_name("value")?)))
}
