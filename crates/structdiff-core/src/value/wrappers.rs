//! Wrappers for states plain Rust types cannot express.

use super::{Inspect, Kind, Value};
use std::fmt;

/// A container that may be nil as a whole.
///
/// Rust collections are always present, so an absent sequence or mapping has
/// to be spelled out. `Nilable(None)` over a sequence type inspects as an
/// absent sequence, over a mapping type as an absent mapping, and over any
/// other type as an absent reference. `Nilable(Some(v))` is `v` itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Nilable<T>(pub Option<T>);

impl<T> Nilable<T> {
    pub fn nil() -> Self {
        Self(None)
    }

    pub fn new(value: T) -> Self {
        Self(Some(value))
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_none()
    }
}

impl<T> From<Option<T>> for Nilable<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T: Inspect> Inspect for Nilable<T> {
    fn inspect(&self) -> Value<'_> {
        match &self.0 {
            Some(inner) => inner.inspect(),
            None => match T::static_kind() {
                Kind::Sequence => Value::Sequence(None),
                Kind::Mapping => Value::Mapping(None),
                _ => Value::Optional(None),
            },
        }
    }

    fn static_kind() -> Kind {
        T::static_kind()
    }
}

/// A value the engines never decompose.
///
/// Inspects as [`Kind::Unknown`]: it is skipped by comparison and rendered
/// through its `Debug` output.
#[derive(Clone, Default, PartialEq)]
pub struct Opaque<T>(pub T);

impl<T: fmt::Debug> fmt::Debug for Opaque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: fmt::Debug> Inspect for Opaque<T> {
    fn inspect(&self) -> Value<'_> {
        Value::Unknown(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_nil_sequence_and_mapping() {
        let tags: Nilable<Vec<String>> = Nilable::nil();
        assert!(matches!(tags.inspect(), Value::Sequence(None)));

        let map: Nilable<HashMap<String, i32>> = Nilable::nil();
        assert!(matches!(map.inspect(), Value::Mapping(None)));

        let scalar: Nilable<i32> = Nilable::nil();
        assert!(matches!(scalar.inspect(), Value::Optional(None)));
    }

    #[test]
    fn test_nil_container_behind_pointer() {
        let boxed: Nilable<Box<Vec<u8>>> = Nilable::nil();
        assert!(matches!(boxed.inspect(), Value::Sequence(None)));

        let shared: Nilable<std::rc::Rc<HashMap<u8, u8>>> = Nilable::nil();
        assert!(matches!(shared.inspect(), Value::Mapping(None)));
    }

    #[test]
    fn test_present_nilable_is_the_inner_value() {
        let tags = Nilable::new(Vec::<String>::new());
        assert!(matches!(tags.inspect(), Value::Sequence(Some(ref v)) if v.is_empty()));
        assert!(!tags.is_nil());
    }

    #[test]
    fn test_opaque_is_unknown() {
        let handle = Opaque(42u8);
        assert_eq!(handle.inspect().kind(), Kind::Unknown);
    }
}
