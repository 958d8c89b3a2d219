//! Declaration lookups over a session's tree.

use arborium_tree_sitter as tree_sitter;
use tree_sitter::Node;

use super::Session;
use crate::kinds;
use crate::query::{self, NodeFilter, QueryOptions};
use crate::value;

impl Session {
    /// First `variable_declarator` named `name`, at any depth.
    pub fn find_variable_declaration(&self, name: &str) -> Option<Node<'_>> {
        let filter = NodeFilter::predicate(|node| {
            node.kind() == kinds::VARIABLE_DECLARATOR && self.field_text(node, "name") == Some(name)
        });
        self.find(&filter, None, QueryOptions::default())
    }

    /// Declarator of a top-level `const`/`let`/`var`, exported or not.
    pub fn top_level_declarator(&self, name: &str) -> Option<Node<'_>> {
        self.top_level_declarators()
            .into_iter()
            .find(|d| self.field_text(*d, "name") == Some(name))
    }

    /// Every declarator of the top-level variable statements, in order.
    pub fn top_level_declarators(&self) -> Vec<Node<'_>> {
        let mut declarators = Vec::new();
        for statement in self.statements() {
            let declaration = match statement.kind() {
                kinds::EXPORT_STATEMENT => match statement.child_by_field_name("declaration") {
                    Some(decl) => decl,
                    None => continue,
                },
                _ => statement,
            };
            if matches!(
                declaration.kind(),
                kinds::LEXICAL_DECLARATION | kinds::VARIABLE_DECLARATION
            ) {
                declarators.extend(
                    query::named_children(declaration)
                        .into_iter()
                        .filter(|n| n.kind() == kinds::VARIABLE_DECLARATOR),
                );
            }
        }
        declarators
    }

    pub fn find_class_declaration(&self, name: &str) -> Option<Node<'_>> {
        let filter = NodeFilter::predicate(|node| {
            node.kind() == kinds::CLASS_DECLARATION && self.field_text(node, "name") == Some(name)
        });
        self.find(&filter, None, QueryOptions::default())
    }

    /// Node that declares `name` as its identifier or key, searching
    /// `parent` (or the whole file) in document order.
    ///
    /// Returns the owner of the identifier: a declarator, pair, class,
    /// method, or the shorthand property itself.
    pub fn find_identifier<'s>(&'s self, name: &str, parent: Option<Node<'s>>) -> Option<Node<'s>> {
        let filter = NodeFilter::predicate(|node| {
            matches!(
                node.kind(),
                kinds::IDENTIFIER
                    | kinds::PROPERTY_IDENTIFIER
                    | kinds::SHORTHAND_PROPERTY
                    | kinds::TYPE_IDENTIFIER
            ) && self.text(node) == name
        });
        let found = self.find(&filter, parent, QueryOptions::default())?;
        if found.kind() == kinds::SHORTHAND_PROPERTY {
            return Some(found);
        }
        found.parent()
    }

    /// Property named `name` directly inside the object literal `object`.
    pub fn find_property<'s>(&'s self, object: Node<'s>, name: &str) -> Option<Node<'s>> {
        query::named_children(object)
            .into_iter()
            .filter(|n| {
                matches!(
                    n.kind(),
                    kinds::PAIR | kinds::SHORTHAND_PROPERTY | kinds::METHOD_DEFINITION
                )
            })
            .find(|n| self.property_key(*n).as_deref() == Some(name))
    }

    /// Key of a pair, shorthand property or method, with string quotes removed.
    pub fn property_key(&self, property: Node<'_>) -> Option<String> {
        value::property_key(property, self.content())
    }

    pub fn import_declarations(&self) -> Vec<Node<'_>> {
        self.filter(
            &NodeFilter::kind(kinds::IMPORT_STATEMENT),
            None,
            QueryOptions::shallow(),
        )
    }

    /// Local names an import statement binds: default, named (after `as`)
    /// and namespace imports.
    pub fn import_clause_names(&self, import: Node<'_>) -> Vec<String> {
        let Some(clause) = query::named_children(import)
            .into_iter()
            .find(|n| n.kind() == kinds::IMPORT_CLAUSE)
        else {
            return Vec::new();
        };

        let mut names = Vec::new();
        for child in query::named_children(clause) {
            match child.kind() {
                kinds::IDENTIFIER => names.push(self.text(child).to_string()),
                kinds::NAMESPACE_IMPORT => {
                    if let Some(id) = query::named_children(child)
                        .into_iter()
                        .find(|n| n.kind() == kinds::IDENTIFIER)
                    {
                        names.push(self.text(id).to_string());
                    }
                }
                kinds::NAMED_IMPORTS => {
                    for spec in query::named_children(child)
                        .into_iter()
                        .filter(|n| n.kind() == kinds::IMPORT_SPECIFIER)
                    {
                        let local = spec
                            .child_by_field_name("alias")
                            .or_else(|| spec.child_by_field_name("name"));
                        if let Some(local) = local {
                            names.push(self.text(local).to_string());
                        }
                    }
                }
                _ => {}
            }
        }
        names
    }

    /// Module specifier of an import or re-export statement, unquoted.
    pub fn module_specifier(&self, statement: Node<'_>) -> Option<String> {
        let source = statement.child_by_field_name("source")?;
        value::string_literal(source, self.content())
    }

    pub fn export_declarations(&self) -> Vec<Node<'_>> {
        self.filter(
            &NodeFilter::kind(kinds::EXPORT_STATEMENT),
            None,
            QueryOptions::shallow(),
        )
    }

    /// Text of the named field of `node`.
    pub fn field_text(&self, node: Node<'_>, field: &str) -> Option<&str> {
        node.child_by_field_name(field).map(|n| self.text(n))
    }
}
