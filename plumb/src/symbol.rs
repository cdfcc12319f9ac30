use std::cmp::Ordering;
use std::fmt;

use once_cell::sync::Lazy;

static INTERNER: Lazy<lasso::ThreadedRodeo> = Lazy::new(|| lasso::ThreadedRodeo::new());

/// An interned identifier.
///
/// Syntax tree nodes never own the text of their names: they hold a `Symbol`
/// into the process-wide interner, which outlives every tree that names into
/// it. Resolution is therefore free to hand out `&'static str`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(lasso::Spur);

impl Symbol {
    pub fn intern(sym: impl AsRef<str>) -> Self {
        Self(INTERNER.get_or_intern(sym))
    }

    pub fn intern_static(sym: &'static str) -> Self {
        Self(INTERNER.get_or_intern_static(sym))
    }

    pub fn resolve(self) -> &'static str {
        INTERNER.resolve(&self.0)
    }
}

impl Ord for Symbol {
    // Ordered by resolved text, not by interner index, so that keyed
    // collections iterate in identifier order.
    fn cmp(&self, other: &Self) -> Ordering {
        if self.0 == other.0 {
            Ordering::Equal
        } else {
            self.resolve().cmp(other.resolve())
        }
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        self.resolve()
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resolve())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resolve())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_deduplicates() {
        assert_eq!(Symbol::intern("alert"), Symbol::intern("alert"));
        assert_ne!(Symbol::intern("alert"), Symbol::intern("handshake"));
    }

    #[test]
    fn resolve_round_trip() {
        assert_eq!(Symbol::intern("uint8").resolve(), "uint8");
        assert_eq!(Symbol::intern_static("opaque").resolve(), "opaque");
    }

    #[test]
    fn ordered_by_text() {
        // Interned in reverse order on purpose: ordering must not depend on
        // interner indices.
        let banana = Symbol::intern("banana");
        let apple = Symbol::intern("apple");
        assert!(apple < banana);
        assert_eq!(apple.cmp(&apple), Ordering::Equal);
    }
}
