//! Locale message catalogs and label formatting for bookspine.
//!
//! The numbering engine renders display labels ("Chapter 3.", "Appendix A.")
//! through a lookup capability rather than an ambient global table. This
//! crate defines that capability ([`MessageLookup`]), the substitution
//! values it accepts ([`MessageArg`]), and the shipped implementation
//! ([`Catalog`]): built-in locale tables plus TOML locale files layered on
//! top of them.

pub mod catalog;
pub mod format;

// Re-export key types for easier usage
pub use catalog::{Catalog, LocaleError};

/// A positional substitution value for a message template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageArg<'a> {
    /// A numeric value; directives may convert it (decimal, alphabetic, roman).
    Number(u32),
    /// A literal string, rendered verbatim under any directive.
    Text(&'a str),
}

impl From<u32> for MessageArg<'static> {
    fn from(n: u32) -> Self {
        MessageArg::Number(n)
    }
}

impl<'a> From<&'a str> for MessageArg<'a> {
    fn from(s: &'a str) -> Self {
        MessageArg::Text(s)
    }
}

/// Capability for resolving message keys into locale-appropriate strings.
///
/// The numbering engine only ever talks to this trait, so tests can drive it
/// with a stub table and applications can swap catalogs per run. Lookup is
/// treated as a pure function; callers perform no caching or fallback of
/// their own.
pub trait MessageLookup {
    /// Resolve `key` into a display string, substituting `args` positionally
    /// into the template's `%`-directives.
    fn message(&self, key: &str, args: &[MessageArg<'_>]) -> String;
}
