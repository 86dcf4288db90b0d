//! Frozen-or-live field values.
//!
//! A displayed field is either a value captured when the row was built, or an
//! accessor evaluated against the bound item on every read. Assigning a value
//! replaces the variant wholesale, so the last write (value or accessor) wins.

use std::fmt;
use std::sync::Arc;

/// Accessor computing a field value from the bound item.
pub type Accessor<T, V> = Arc<dyn Fn(&T) -> V + Send + Sync>;

/// A field value that is either frozen or computed from an item.
pub enum Field<T, V> {
    /// Value captured at construction or pinned by assignment.
    Frozen(V),
    /// Accessor re-evaluated on every read.
    Live(Accessor<T, V>),
}

impl<T, V: Clone> Field<T, V> {
    /// Wrap an accessor.
    pub fn live<F>(accessor: F) -> Self
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        Self::Live(Arc::new(accessor))
    }

    /// Resolve the current value against `item`.
    pub fn resolve(&self, item: &T) -> V {
        match self {
            Self::Frozen(value) => value.clone(),
            Self::Live(accessor) => accessor(item),
        }
    }

    /// Whether reads go through an accessor.
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }
}

impl<T, V: Default> Default for Field<T, V> {
    fn default() -> Self {
        Self::Frozen(V::default())
    }
}

// Manual impl: the accessor is an Arc, so T needs no Clone bound.
impl<T, V: Clone> Clone for Field<T, V> {
    fn clone(&self) -> Self {
        match self {
            Self::Frozen(value) => Self::Frozen(value.clone()),
            Self::Live(accessor) => Self::Live(Arc::clone(accessor)),
        }
    }
}

impl<T, V: fmt::Debug> fmt::Debug for Field<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frozen(value) => f.debug_tuple("Frozen").field(value).finish(),
            Self::Live(_) => f.write_str("Live(<accessor>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frozen_ignores_item() {
        let field: Field<u32, String> = Field::Frozen("fixed".to_string());
        assert_eq!(field.resolve(&1), "fixed");
        assert_eq!(field.resolve(&2), "fixed");
        assert!(!field.is_live());
    }

    #[test]
    fn live_reads_item_each_time() {
        let field: Field<u32, String> = Field::live(|n| format!("n={n}"));
        assert_eq!(field.resolve(&1), "n=1");
        assert_eq!(field.resolve(&5), "n=5");
        assert!(field.is_live());
    }

    #[test]
    fn default_is_frozen_default_value() {
        let field: Field<(), Vec<u8>> = Field::default();
        assert!(field.resolve(&()).is_empty());
    }

    #[test]
    fn clone_shares_accessor() {
        let field: Field<i32, i32> = Field::live(|n| n * 2);
        let cloned = field.clone();
        assert_eq!(cloned.resolve(&21), 42);
    }

    #[test]
    fn debug_hides_accessor() {
        let field: Field<(), i32> = Field::live(|_| 0);
        assert_eq!(format!("{field:?}"), "Live(<accessor>)");
        let frozen: Field<(), i32> = Field::Frozen(3);
        assert_eq!(format!("{frozen:?}"), "Frozen(3)");
    }
}
