pub mod define;  pub use define::*;
pub mod error;   pub use error::*;
pub mod extract; pub use extract::*;
pub mod deps;    pub use deps::*;
pub mod expand;  pub use expand::*;
pub mod subst;   pub use subst::*;
pub mod format;  pub use format::*;
pub mod options; pub use options::*;

/// One deobfuscation run: a macro table and body extracted from one
/// source blob, expanded on demand. State is exclusively owned; separate
/// inputs get separate `Deobfuscator` values.
pub struct Deobfuscator {
    table:      MacroTable,
    body:       String,
    options:    DeobfOptions
}

/// The expanded text plus any non-fatal findings from the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeobfOutput {
    pub text:           String,
    pub diagnostics:    Vec<Diagnostic>
}

impl Deobfuscator {
    pub fn new(source: &str) -> Self {
        Self::with_options(source, DeobfOptions::default())
    }

    pub fn with_options(source: &str, options: DeobfOptions) -> Self {
        let (table, body) = extract(source);
        Self { table, body, options }
    }

    #[inline]
    pub fn macros(&self) -> &MacroTable { &self.table }

    #[inline]
    pub fn body(&self) -> &str { &self.body }

    /// Advisory reference map; see [`dependencies`].
    pub fn dependencies(&self) -> DependencyMap {
        dependencies(&self.table)
    }

    /// Expands every macro, substitutes the body, and optionally runs the
    /// readability pass. Never fails; cycles surface as markers in the
    /// text and as diagnostics.
    pub fn run(&self) -> DeobfOutput {
        let mut expander = Expander::new(&self.table);
        let mut expansions = ExpansionMap::with_capacity(self.table.len());
        for name in self.table.names() {
            let expanded = expander.expand(name);
            expansions.insert(name.to_string(), expanded);
        }
        let mut text = substitute(&self.body, &expansions);
        if self.options.reformat {
            text = reformat(&text, self.options.indent_width);
        }
        DeobfOutput {
            text,
            diagnostics: expander.take_diagnostics()
        }
    }
}

/// Expands every macro reference in `source`, keeping the body layout.
pub fn deobfuscate(source: &str) -> String {
    Deobfuscator::new(source).run().text
}

/// Expansion followed by the readability pass.
pub fn deobfuscate_pretty(source: &str) -> String {
    Deobfuscator::with_options(source, DeobfOptions::pretty()).run().text
}
