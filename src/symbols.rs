use miette::SourceSpan;

use crate::ast::BecValue;

/// A constant binding recorded by the parser, with the span of the name at
/// its declaration site.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolEntry {
    pub name: String,
    pub value: BecValue,
    pub span: SourceSpan,
}

/// The constants declared before `begin`, in declaration order.
///
/// Constants are bound once and never reassigned, so a plain vector is
/// enough; documents hold a handful of bindings and lookups happen during a
/// single parse.
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a binding. The parser checks for redeclaration before calling
    /// this, so `name` is known to be fresh.
    pub fn declare(&mut self, name: String, value: BecValue, span: SourceSpan) {
        self.entries.push(SymbolEntry { name, value, span });
    }

    pub fn lookup(&self, name: &str) -> Option<&BecValue> {
        self.entry(name).map(|e| &e.value)
    }

    pub fn entry(&self, name: &str) -> Option<&SymbolEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
