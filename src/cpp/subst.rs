use indexmap::IndexMap;
use crate::core::substitute_tokens;
use crate::cpp::{MacroName, MacroValue};

pub type ExpansionMap = IndexMap<MacroName, MacroValue>;

/// Replaces every whole-word macro reference in the body with its fully
/// expanded text. One tokenization pass: each identifier is looked up
/// once against already-resolved expansions, so replaced text is never
/// re-scanned and the result cannot depend on table iteration order.
pub fn substitute(body: &str, expansions: &ExpansionMap) -> String {
    substitute_tokens(body, |token| expansions.get(token).map(String::as_str))
}
