//! Property path resolution over configuration literals.
//!
//! A path such as `AppConfig.api.port` names a top-level variable (or an
//! imported one) and then descends through object literal keys. Identifiers
//! and member-access chains met on the way are followed to their
//! declarations, so
//!
//! ```ts
//! const api = { port: 8080 };
//! export const AppConfig = { api };
//! ```
//!
//! resolves `AppConfig.api.port` to `8080`. At most one import is followed
//! per walk, and alias chains are bounded by a step budget.

mod imports;


use std::ops::Range;
use std::path::Path;
use std::rc::Rc;

use arborium_tree_sitter as tree_sitter;
use tree_sitter::Node;

use crate::kinds;
use crate::session::{NodeRef, Session, SessionError, Workspace};
use crate::value::{Value, unwrap_transparent};

/// Resolution steps allowed per walk before giving up.
const MAX_STEPS: usize = 64;

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("property `{path}` not found: no `{segment}`")]
    NotFound { path: String, segment: String },

    #[error("`{path}` holds a {kind}, which cannot be replaced")]
    NotReplaceable { path: String, kind: String },

    #[error("`{path}` is not an object property")]
    NotAProperty { path: String },

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// The declaration or property a path ends at.
#[derive(Clone, Debug)]
pub struct ResolvedProperty {
    /// Last path segment.
    pub key: String,
    /// Session owning `holder`; an imported module when the walk crossed an import.
    pub session: Rc<Session>,
    /// Variable declarator, pair, shorthand property, method or import.
    pub holder: NodeRef,
    /// Initializer or pair value as written, wrappers included.
    pub value: Option<NodeRef>,
}

#[derive(Clone, Debug)]
pub enum Resolution {
    Found(ResolvedProperty),
    NotFound { segment: String },
}

impl Resolution {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }
}

enum Binding {
    Property(ResolvedProperty),
    Namespace {
        import: ResolvedProperty,
        module: Rc<Session>,
    },
}

impl Binding {
    fn into_property(self) -> ResolvedProperty {
        match self {
            Binding::Property(property) | Binding::Namespace { import: property, .. } => property,
        }
    }
}

/// What a binding evaluates to after aliases are followed.
enum Target {
    Expr { session: Rc<Session>, node: NodeRef },
    Module(Rc<Session>),
}

enum Walk {
    Found(Binding),
    /// Index of the first segment that did not resolve.
    Missing(usize),
}

struct Walker<'w> {
    workspace: &'w Workspace,
    hop_used: bool,
    steps: usize,
    exhausted: bool,
}

impl<'w> Walker<'w> {
    fn new(workspace: &'w Workspace) -> Self {
        Self {
            workspace,
            hop_used: false,
            steps: 0,
            exhausted: false,
        }
    }

    fn tick(&mut self) -> bool {
        self.steps += 1;
        if self.steps > MAX_STEPS && !self.exhausted {
            tracing::debug!(steps = self.steps, "resolution step budget exhausted");
            self.exhausted = true;
        }
        !self.exhausted
    }

    fn walk<S: AsRef<str>>(
        &mut self,
        session: &Rc<Session>,
        segments: &[S],
    ) -> Result<Walk, ResolveError> {
        let Some((first, rest)) = segments.split_first() else {
            return Ok(Walk::Missing(0));
        };
        let Some(mut binding) = self.lookup(session, first.as_ref())? else {
            return Ok(Walk::Missing(0));
        };
        for (i, segment) in rest.iter().enumerate() {
            let next = match self.deref(binding)? {
                Some(target) => self.member(target, segment.as_ref())?,
                None => None,
            };
            binding = match next {
                Some(next) => next,
                None => return Ok(Walk::Missing(i + 1)),
            };
        }
        Ok(Walk::Found(binding))
    }

    /// Binding of a top-level name: a local variable, else an import.
    fn lookup(&mut self, session: &Rc<Session>, name: &str) -> Result<Option<Binding>, ResolveError> {
        if !self.tick() {
            return Ok(None);
        }
        if let Some(decl) = session.top_level_declarator(name) {
            return Ok(Some(Binding::Property(property(
                session,
                name,
                decl,
                decl.child_by_field_name("value"),
            ))));
        }
        self.import_binding(session, name)
    }

    fn deref(&mut self, binding: Binding) -> Result<Option<Target>, ResolveError> {
        let property = match binding {
            Binding::Namespace { module, .. } => return Ok(Some(Target::Module(module))),
            Binding::Property(property) => property,
        };
        match property.value {
            Some(value) => self.deref_expr(property.session, value),
            None if property.holder.kind == kinds::SHORTHAND_PROPERTY => {
                match self.lookup(&property.session, &property.key)? {
                    Some(binding) => self.deref(binding),
                    None => Ok(Some(Target::Expr {
                        session: property.session,
                        node: property.holder,
                    })),
                }
            }
            None => Ok(Some(Target::Expr {
                session: property.session,
                node: property.holder,
            })),
        }
    }

    /// Follow identifiers and member chains until a non-alias expression.
    /// Unbound names stay as they are.
    fn deref_expr(
        &mut self,
        session: Rc<Session>,
        value: NodeRef,
    ) -> Result<Option<Target>, ResolveError> {
        if !self.tick() {
            return Ok(None);
        }
        let Some(node) = session.node(&value) else {
            return Ok(None);
        };
        let node = unwrap_transparent(node);
        let expr = NodeRef::of(node);

        let followed = match node.kind() {
            kinds::IDENTIFIER => {
                let name = session.text(node).to_string();
                self.lookup(&session, &name)?
            }
            kinds::MEMBER_EXPRESSION => match member_path(&session, node) {
                Some(path) => match self.walk(&session, path.as_slice())? {
                    Walk::Found(binding) => Some(binding),
                    Walk::Missing(_) => None,
                },
                None => None,
            },
            _ => None,
        };

        match followed {
            Some(binding) => self.deref(binding),
            None if self.exhausted => Ok(None),
            None => Ok(Some(Target::Expr {
                session,
                node: expr,
            })),
        }
    }

    /// Property `name` of an object literal or exported variable of a module.
    fn member(&mut self, target: Target, name: &str) -> Result<Option<Binding>, ResolveError> {
        if !self.tick() {
            return Ok(None);
        }
        let binding = match target {
            Target::Module(module) => module.top_level_declarator(name).map(|decl| {
                Binding::Property(property(
                    &module,
                    name,
                    decl,
                    decl.child_by_field_name("value"),
                ))
            }),
            Target::Expr { session, node } => {
                let Some(object) = session.node(&node).filter(|n| n.kind() == kinds::OBJECT) else {
                    return Ok(None);
                };
                session.find_property(object, name).map(|prop| {
                    let value = match prop.kind() {
                        kinds::PAIR => prop.child_by_field_name("value"),
                        _ => None,
                    };
                    Binding::Property(property(&session, name, prop, value))
                })
            }
        };
        Ok(binding)
    }

    fn leaf_value(&mut self, binding: Binding) -> Result<Option<Value>, ResolveError> {
        if let Binding::Namespace { import, .. } = &binding {
            return Ok(Some(Value::Code {
                kind: kinds::NAMESPACE_IMPORT.to_string(),
                text: import.session.text(&import.holder).to_string(),
            }));
        }
        let value = match self.deref(binding)? {
            _ if self.exhausted => None,
            None => None,
            Some(Target::Module(module)) => Some(Value::Code {
                kind: kinds::NAMESPACE_IMPORT.to_string(),
                text: module.path().display().to_string(),
            }),
            Some(Target::Expr { session, node }) => session
                .node(&node)
                .map(|n| Value::from_node(n, session.content())),
        };
        Ok(value)
    }
}

fn property(
    session: &Rc<Session>,
    key: &str,
    holder: Node<'_>,
    value: Option<Node<'_>>,
) -> ResolvedProperty {
    ResolvedProperty {
        key: key.to_string(),
        session: Rc::clone(session),
        holder: NodeRef::of(holder),
        value: value.map(NodeRef::of),
    }
}

/// `a.b.c` as `["a", "b", "c"]`; `None` unless the chain starts at an identifier.
fn member_path(session: &Session, node: Node<'_>) -> Option<Vec<String>> {
    let mut segments = Vec::new();
    let mut current = node;
    loop {
        match current.kind() {
            kinds::MEMBER_EXPRESSION => {
                let prop = current.child_by_field_name("property")?;
                segments.push(session.text(prop).to_string());
                current = unwrap_transparent(current.child_by_field_name("object")?);
            }
            kinds::IDENTIFIER => {
                segments.push(session.text(current).to_string());
                break;
            }
            _ => return None,
        }
    }
    segments.reverse();
    Some(segments)
}

impl Workspace {
    /// Resolve `path` starting at the top-level declarations of `file`.
    pub fn resolve(&self, file: impl AsRef<Path>, path: &str) -> Result<Resolution, ResolveError> {
        let session = self.session(file)?;
        let segments: Vec<&str> = path.split('.').collect();
        let resolution = match Walker::new(self).walk(&session, segments.as_slice())? {
            Walk::Found(binding) => Resolution::Found(binding.into_property()),
            Walk::Missing(i) => Resolution::NotFound {
                segment: segments.get(i).copied().unwrap_or_default().to_string(),
            },
        };
        tracing::debug!(path, found = resolution.is_found(), "resolved");
        Ok(resolution)
    }

    /// Value at `path`, with aliases followed. `None` when the path does not
    /// resolve; a JavaScript `null` is `Some(Value::Null)`.
    pub fn get_property_value(
        &self,
        file: impl AsRef<Path>,
        path: &str,
    ) -> Result<Option<Value>, ResolveError> {
        let session = self.session(file)?;
        let segments: Vec<&str> = path.split('.').collect();
        let mut walker = Walker::new(self);
        match walker.walk(&session, segments.as_slice())? {
            Walk::Found(binding) => walker.leaf_value(binding),
            Walk::Missing(_) => Ok(None),
        }
    }

    pub fn exists_property_path(
        &self,
        file: impl AsRef<Path>,
        path: &str,
    ) -> Result<bool, ResolveError> {
        Ok(self.resolve(file, path)?.is_found())
    }

    /// Replace the literal at `path` with `value`. The edit is pending on the
    /// session owning the literal until saved.
    pub fn set_property_value(
        &self,
        file: impl AsRef<Path>,
        path: &str,
        value: &Value,
    ) -> Result<(), ResolveError> {
        let property = self.resolve_found(file, path)?;
        let Some(value_ref) = &property.value else {
            return Err(ResolveError::NotReplaceable {
                path: path.to_string(),
                kind: property.holder.kind.to_string(),
            });
        };
        let session = &property.session;
        let node = session.node(value_ref).ok_or_else(|| not_found(path, &property.key))?;
        replace_literal(session, node, value, path)
    }

    /// Delete the object property at `path`, including its separator.
    pub fn remove_property(&self, file: impl AsRef<Path>, path: &str) -> Result<(), ResolveError> {
        let property = self.resolve_found(file, path)?;
        let session = &property.session;
        let node = session
            .node(&property.holder)
            .ok_or_else(|| not_found(path, &property.key))?;
        delete_property(session, node, path)
    }

    fn resolve_found(
        &self,
        file: impl AsRef<Path>,
        path: &str,
    ) -> Result<ResolvedProperty, ResolveError> {
        match self.resolve(file, path)? {
            Resolution::Found(property) => Ok(property),
            Resolution::NotFound { segment } => Err(not_found(path, &segment)),
        }
    }
}

/// Value of a pair (or declarator) the caller already holds. No aliases are
/// followed.
pub fn property_value(session: &Session, property: Node<'_>) -> Option<Value> {
    let value = property.child_by_field_name("value")?;
    Some(Value::from_node(value, session.content()))
}

/// Replace the value of `pair` with `value`.
pub fn set_pair_value(session: &Session, pair: Node<'_>, value: &Value) -> Result<(), ResolveError> {
    let key = session.property_key(pair).unwrap_or_default();
    let node = pair.child_by_field_name("value").ok_or_else(|| {
        ResolveError::NotReplaceable {
            path: key.clone(),
            kind: pair.kind().to_string(),
        }
    })?;
    replace_literal(session, node, value, &key)
}

/// Delete `property` from its object literal.
pub fn remove_pair(session: &Session, property: Node<'_>) -> Result<(), ResolveError> {
    let key = session.property_key(property).unwrap_or_default();
    delete_property(session, property, &key)
}

fn replace_literal(
    session: &Session,
    node: Node<'_>,
    value: &Value,
    path: &str,
) -> Result<(), ResolveError> {
    let literal = unwrap_transparent(node);
    if !kinds::LITERALS.contains(&literal.kind()) {
        return Err(ResolveError::NotReplaceable {
            path: path.to_string(),
            kind: literal.kind().to_string(),
        });
    }
    let source = value.to_source();
    tracing::debug!(path, file = %session.path().display(), value = %source, "set");
    session.replace_node(literal, source);
    Ok(())
}

fn delete_property(session: &Session, node: Node<'_>, path: &str) -> Result<(), ResolveError> {
    if !matches!(
        node.kind(),
        kinds::PAIR | kinds::SHORTHAND_PROPERTY | kinds::METHOD_DEFINITION
    ) {
        return Err(ResolveError::NotAProperty {
            path: path.to_string(),
        });
    }
    let Range { start, end } = removal_range(session.content(), node);
    tracing::debug!(path, file = %session.path().display(), start, end, "remove");
    session.delete(start, end);
    Ok(())
}

/// Byte range covering `node`, one adjacent comma and, when nothing else
/// remains on the line, the whole line.
fn removal_range(content: &str, node: Node<'_>) -> Range<usize> {
    let mut start = node.start_byte();
    let mut end = node.end_byte();

    match (node.next_sibling(), node.prev_sibling()) {
        (Some(next), _) if next.kind() == "," => {
            end = next.end_byte();
            end += content[end..]
                .bytes()
                .take_while(|b| *b == b' ' || *b == b'\t')
                .count();
        }
        (_, Some(prev)) if prev.kind() == "," => start = prev.start_byte(),
        _ => {}
    }

    let line_start = content[..start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = content[end..].find('\n').map(|i| end + i);
    let blank_before = content[line_start..start].trim().is_empty();
    let blank_after = match line_end {
        Some(line_end) => content[end..line_end].trim().is_empty(),
        None => content[end..].trim().is_empty(),
    };
    if blank_before && blank_after {
        start = line_start;
        end = line_end.map_or(content.len(), |i| i + 1);
    }
    start..end
}

fn not_found(path: &str, segment: &str) -> ResolveError {
    ResolveError::NotFound {
        path: path.to_string(),
        segment: segment.to_string(),
    }
}
