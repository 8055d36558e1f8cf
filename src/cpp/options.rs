pub const DEFAULT_INDENT_WIDTH: usize = 4;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DeobfOptions {
    pub(crate) reformat:        bool,
    pub(crate) indent_width:    usize
}

impl Default for DeobfOptions {
    fn default() -> Self {
        Self {
            reformat: false,
            indent_width: DEFAULT_INDENT_WIDTH
        }
    }
}

impl DeobfOptions {
    /// Expansion plus the readability pass.
    pub fn pretty() -> Self {
        Self { reformat: true, ..Self::default() }
    }

    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }
}
