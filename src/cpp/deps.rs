use indexmap::IndexMap;
use crate::core::identifiers;
use crate::cpp::{MacroName, MacroTable};

pub type DependencyMap = IndexMap<MacroName, Vec<MacroName>>;

/// For each macro, the other table keys its raw value references, in
/// order of first appearance. Advisory only; the expander performs the
/// same token match itself.
pub fn dependencies(table: &MacroTable) -> DependencyMap {
    let mut map = DependencyMap::with_capacity(table.len());
    for entry in table.iter() {
        let mut referenced: Vec<MacroName> = Vec::new();
        for token in identifiers(entry.value()) {
            if table.contains(token) && !referenced.iter().any(|seen| seen.as_str() == token) {
                referenced.push(token.to_string());
            }
        }
        map.insert(entry.name().to_string(), referenced);
    }
    map
}
