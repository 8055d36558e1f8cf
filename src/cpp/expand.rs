use std::collections::HashMap;
use log::warn;
use crate::core::{identifiers, replace_word};
use crate::cpp::{Diagnostic, MacroName, MacroTable, MacroValue};

type ExpansionCache = HashMap<MacroName, MacroValue>;

/// Names currently being expanded on the active recursion path. Fresh per
/// top-level `expand` call, threaded through nested frames of that call.
#[derive(Default)]
struct VisitPath {
    names:    Vec<MacroName>
}

impl VisitPath {
    #[inline]
    fn contains(&self, name: &str) -> bool { self.names.iter().any(|visited| visited.as_str() == name) }

    #[inline]
    fn enter(&mut self, name: &str) { self.names.push(name.to_string()) }

    #[inline]
    fn leave(&mut self) { self.names.pop(); }
}

/// Resolves macros against a read-only table, memoizing each completed
/// expansion so no macro is expanded more than once per run.
pub struct Expander<'a> {
    table:          &'a MacroTable,
    cache:          ExpansionCache,
    diagnostics:    Vec<Diagnostic>
}

pub fn circular_marker(name: &str) -> String {
    format!("[CIRCULAR: {name}]")
}

impl<'a> Expander<'a> {
    pub fn new(table: &'a MacroTable) -> Self {
        Self {
            table,
            cache: ExpansionCache::with_capacity(table.len()),
            diagnostics: Vec::new()
        }
    }

    /// Fully expands one macro. Unknown names come back as literal text;
    /// a reference that closes a cycle comes back as a circular marker.
    pub fn expand(&mut self, name: &str) -> MacroValue {
        let mut path = VisitPath::default();
        self.resolve(name, &mut path)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] { &self.diagnostics }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    fn resolve(&mut self, name: &str, path: &mut VisitPath) -> MacroValue {
        if let Some(done) = self.cache.get(name) {
            return done.clone();
        }
        if path.contains(name) {
            warn!("Circular reference detected for macro: {name}");
            self.diagnostics.push(Diagnostic::CircularReference(name.to_string()));
            // Only this reference occurrence gets the marker; the name is
            // not cached as circular for independent top-level calls.
            return circular_marker(name);
        }
        let Some(entry) = self.table.get(name) else {
            return name.to_string();
        };
        let raw = entry.value().to_string();

        path.enter(name);
        let mut resolved = raw.clone();
        let mut handled: Vec<&str> = Vec::new();
        // Tokens come from the raw value in first-appearance order; each
        // distinct token is substituted once per frame, so text a
        // replacement introduces is never re-expanded here.
        for token in identifiers(&raw) {
            if !self.table.contains(token) || handled.contains(&token) {
                continue;
            }
            handled.push(token);
            let replacement = self.resolve(token, path);
            resolved = replace_word(&resolved, token, &replacement);
        }
        path.leave();

        self.cache.insert(name.to_string(), resolved.clone());
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(entries: &[(&str, &str)]) -> MacroTable {
        let mut table = MacroTable::new();
        for (name, value) in entries {
            table.define(name, value);
        }
        table
    }

    #[test]
    fn leaf_macro_expands_to_its_value() {
        let table = table(&[("WIDTH", "10")]);
        let mut expander = Expander::new(&table);
        assert_eq!(expander.expand("WIDTH"), "10");
    }

    #[test]
    fn nested_references_expand_recursively() {
        let table = table(&[("WIDTH", "10"), ("AREA", "WIDTH*WIDTH")]);
        let mut expander = Expander::new(&table);
        assert_eq!(expander.expand("AREA"), "10*10");
    }

    #[test]
    fn chains_expand_to_a_fixed_point() {
        let table = table(&[("A", "B + 1"), ("B", "C * 2"), ("C", "7")]);
        let mut expander = Expander::new(&table);
        assert_eq!(expander.expand("A"), "7 * 2 + 1");
    }

    #[test]
    fn unknown_name_is_returned_literally() {
        let table = table(&[("A", "1")]);
        let mut expander = Expander::new(&table);
        assert_eq!(expander.expand("missing"), "missing");
        assert!(expander.diagnostics().is_empty());
    }

    #[test]
    fn unknown_references_stay_literal() {
        let table = table(&[("A", "B + extern_value")]);
        let mut expander = Expander::new(&table);
        assert_eq!(expander.expand("A"), "B + extern_value");
    }

    #[test]
    fn direct_self_reference_is_circular() {
        let table = table(&[("A", "A + 1")]);
        let mut expander = Expander::new(&table);
        assert_eq!(expander.expand("A"), "[CIRCULAR: A] + 1");
        assert_eq!(expander.diagnostics(), &[Diagnostic::CircularReference("A".to_string())]);
    }

    #[test]
    fn two_macro_cycle_is_cut_at_the_closure_point() {
        let table = table(&[("A", "B"), ("B", "A")]);
        let mut expander = Expander::new(&table);
        assert_eq!(expander.expand("A"), "[CIRCULAR: A]");
        assert_eq!(expander.expand("B"), "[CIRCULAR: A]");
    }

    #[test]
    fn macros_off_the_cycle_still_expand() {
        let table = table(&[("A", "B"), ("B", "A"), ("N", "10"), ("M", "N + A")]);
        let mut expander = Expander::new(&table);
        assert_eq!(expander.expand("N"), "10");
        assert_eq!(expander.expand("M"), "10 + [CIRCULAR: A]");
    }

    #[test]
    fn diamond_reference_is_expanded_once() {
        let table = table(&[("D", "1"), ("L", "D"), ("R", "D"), ("TOP", "L + R")]);
        let mut expander = Expander::new(&table);
        assert_eq!(expander.expand("TOP"), "1 + 1");
        assert!(expander.diagnostics().is_empty());
    }

    #[test]
    fn shared_macro_after_a_sibling_branch_is_not_circular() {
        // B is visited under A's frame, then again as a sibling; only the
        // active path counts, so the second visit hits the cache.
        let table = table(&[("A", "B + B"), ("B", "2")]);
        let mut expander = Expander::new(&table);
        assert_eq!(expander.expand("A"), "2 + 2");
        assert!(expander.diagnostics().is_empty());
    }

    #[test]
    fn duplicate_tokens_substitute_once_per_frame() {
        // Every occurrence is replaced in one pass; the marker text the
        // replacement introduces is not expanded again.
        let table = table(&[("A", "A A")]);
        let mut expander = Expander::new(&table);
        assert_eq!(expander.expand("A"), "[CIRCULAR: A] [CIRCULAR: A]");
    }

    #[test]
    fn long_cycle_terminates() {
        let table = table(&[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")]);
        let mut expander = Expander::new(&table);
        assert_eq!(expander.expand("A"), "[CIRCULAR: A]");
        assert_eq!(expander.diagnostics().len(), 1);
    }

    #[test]
    fn partial_names_are_never_substituted() {
        let table = table(&[("FOO", "1"), ("X", "FOOBAR + FOO")]);
        let mut expander = Expander::new(&table);
        assert_eq!(expander.expand("X"), "FOOBAR + 1");
    }
}
