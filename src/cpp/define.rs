use indexmap::IndexMap;

pub type MacroValue = String;
pub type MacroName  = MacroValue;

/// One `#define NAME VALUE` binding. Immutable once extraction completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Macro {
    name:     MacroName,
    value:    MacroValue
}

impl Macro {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str { &self.name }

    #[inline]
    pub fn value(&self) -> &str { &self.value }
}

/// The macros of one deobfuscation run, keyed by name in document order.
/// Redefinition overwrites the value but keeps the original position, so
/// iteration stays deterministic.
#[derive(Debug, Default, Clone)]
pub struct MacroTable {
    macros:   IndexMap<MacroName, Macro>
}

impl MacroTable {
    pub fn new() -> Self { Self::default() }

    /// Inserts a binding; a later define for the same name wins.
    pub fn define(&mut self, name: &str, value: &str) -> Option<Macro> {
        self.macros.insert(name.to_string(), Macro::new(name, value))
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Macro> { self.macros.get(name) }

    #[inline]
    pub fn contains(&self, name: &str) -> bool { self.macros.contains_key(name) }

    #[inline]
    pub fn len(&self) -> usize { self.macros.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.macros.is_empty() }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.macros.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Macro> {
        self.macros.values()
    }
}
