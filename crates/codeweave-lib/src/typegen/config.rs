//! Configuration for interface rendering.

/// How rendered interfaces look.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Whether to prefix declarations with `export`
    pub(crate) export: bool,
    /// Whether to prepend a doc comment repeating the declaration
    pub(crate) commented: bool,
    /// Spaces per indentation level
    pub(crate) indent: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            export: true,
            commented: false,
            indent: 2,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to export interfaces.
    pub fn export(mut self, value: bool) -> Self {
        self.export = value;
        self
    }

    /// Set whether to prepend the documentation comment.
    pub fn commented(mut self, value: bool) -> Self {
        self.commented = value;
        self
    }

    /// Set the indentation width.
    pub fn indent(mut self, width: usize) -> Self {
        self.indent = width;
        self
    }
}
