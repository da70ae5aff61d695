use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// The outcome of looking up a free identifier.
///
/// `UndefinedSymbol` and `UndefinedVariable` are distinct failure kinds so a
/// host can separate an unknown name from a known-but-unavailable data
/// channel; the compiler maps them to different diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolLookup {
    /// The identifier resolved to a value.
    Resolved(Value),
    /// The identifier is not known at all.
    UndefinedSymbol,
    /// The identifier names a data variable whose data is not available.
    UndefinedVariable,
}

/// Resolves free identifiers encountered while compiling an expression.
///
/// The host implements this trait to supply values for names like `x` or
/// `pi`. The resolver is invoked once per occurrence and owns no state in
/// this crate; implementations must be safe for concurrent use if
/// expressions are evaluated from multiple threads.
pub trait SymbolResolver {
    /// Looks up `name` and reports the outcome.
    fn resolve(&self, name: &str) -> SymbolLookup;
}

/// A resolver backed by a name → value table.
///
/// # Example
/// ```
/// use numera::interpreter::{
///     symbol::{MapResolver, SymbolLookup, SymbolResolver},
///     value::core::Value,
/// };
///
/// let mut resolver = MapResolver::new();
/// resolver.insert("x", Value::Scalar(2.0));
///
/// assert_eq!(resolver.resolve("x"), SymbolLookup::Resolved(Value::Scalar(2.0)));
/// assert_eq!(resolver.resolve("y"), SymbolLookup::UndefinedSymbol);
/// ```
#[derive(Debug, Default)]
pub struct MapResolver {
    symbols: HashMap<String, Value>,
}

impl MapResolver {
    /// Creates an empty resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn insert(&mut self, name: &str, value: Value) {
        self.symbols.insert(name.to_string(), value);
    }
}

impl SymbolResolver for MapResolver {
    fn resolve(&self, name: &str) -> SymbolLookup {
        self.symbols
            .get(name)
            .map_or(SymbolLookup::UndefinedSymbol, |v| SymbolLookup::Resolved(v.clone()))
    }
}

/// A resolver that knows no symbols.
///
/// Useful for expressions built only from literals and function calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyResolver;

impl SymbolResolver for EmptyResolver {
    fn resolve(&self, _name: &str) -> SymbolLookup {
        SymbolLookup::UndefinedSymbol
    }
}
