use thiserror::Error;
use crate::cpp::MacroName;

/// Non-fatal findings surfaced alongside the output. Nothing here aborts
/// a run; the engine always produces best-effort text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    #[error("Circular reference detected for macro: {0}")]
    CircularReference(MacroName),
}

impl Diagnostic {
    #[inline]
    pub fn macro_name(&self) -> &str {
        match self {
            Diagnostic::CircularReference(name) => name
        }
    }
}
