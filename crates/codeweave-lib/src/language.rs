//! Grammar selection and parsing.

use std::path::Path;

use arborium_tree_sitter as tree_sitter;

/// TypeScript dialect a source file is parsed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lang {
    TypeScript,
    Tsx,
}

impl Lang {
    /// `.tsx` files use the TSX grammar, everything else plain TypeScript.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("tsx") => Lang::Tsx,
            _ => Lang::TypeScript,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Lang::TypeScript => "typescript",
            Lang::Tsx => "tsx",
        }
    }

    pub fn ts_language(&self) -> tree_sitter::Language {
        match self {
            Lang::TypeScript => arborium_typescript::language().into(),
            Lang::Tsx => arborium_tsx::language().into(),
        }
    }

    /// Parse source code into a tree.
    ///
    /// Returns `None` only when the grammar cannot be loaded (ABI mismatch)
    /// or parsing was cancelled; syntax errors still produce a tree.
    pub fn parse(&self, source: &str) -> Option<tree_sitter::Tree> {
        let mut parser = tree_sitter::Parser::new();
        parser.set_language(&self.ts_language()).ok()?;
        parser.parse(source, None)
    }
}
