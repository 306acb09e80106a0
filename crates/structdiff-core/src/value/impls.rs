//! `Inspect` for standard library types.

use super::{Entry, Float, Inspect, Kind, Value};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

impl Inspect for str {
    fn inspect(&self) -> Value<'_> {
        Value::String(self)
    }
}

impl Inspect for String {
    fn inspect(&self) -> Value<'_> {
        Value::String(self.as_str())
    }

    fn static_kind() -> Kind {
        Kind::String
    }
}

impl Inspect for bool {
    fn inspect(&self) -> Value<'_> {
        Value::Bool(*self)
    }

    fn static_kind() -> Kind {
        Kind::Bool
    }
}

macro_rules! inspect_signed {
    ($($t:ty),*) => {$(
        impl Inspect for $t {
            fn inspect(&self) -> Value<'_> {
                Value::Int(i64::from(*self))
            }

            fn static_kind() -> Kind {
                Kind::Int
            }
        }
    )*};
}

macro_rules! inspect_unsigned {
    ($($t:ty),*) => {$(
        impl Inspect for $t {
            fn inspect(&self) -> Value<'_> {
                Value::Uint(u64::from(*self))
            }

            fn static_kind() -> Kind {
                Kind::Uint
            }
        }
    )*};
}

inspect_signed!(i8, i16, i32, i64);
inspect_unsigned!(u8, u16, u32, u64);

// Pointer-sized integers are at most 64 bits wide on every supported target.
#[allow(clippy::cast_possible_truncation)]
impl Inspect for isize {
    fn inspect(&self) -> Value<'_> {
        Value::Int(*self as i64)
    }

    fn static_kind() -> Kind {
        Kind::Int
    }
}

#[allow(clippy::cast_possible_truncation)]
impl Inspect for usize {
    fn inspect(&self) -> Value<'_> {
        Value::Uint(*self as u64)
    }

    fn static_kind() -> Kind {
        Kind::Uint
    }
}

impl Inspect for f32 {
    fn inspect(&self) -> Value<'_> {
        Value::Float(Float::Single(*self))
    }

    fn static_kind() -> Kind {
        Kind::Float
    }
}

impl Inspect for f64 {
    fn inspect(&self) -> Value<'_> {
        Value::Float(Float::Double(*self))
    }

    fn static_kind() -> Kind {
        Kind::Float
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn inspect(&self) -> Value<'_> {
        Value::Optional(self.as_ref().map(|v| v as &dyn Inspect))
    }

    fn static_kind() -> Kind {
        Kind::Optional
    }
}

// Owning and shared pointers are transparent: they never add a level, and
// report the kind of what they point to.
macro_rules! inspect_transparent {
    ($($ptr:ident),*) => {$(
        impl<T: Inspect> Inspect for $ptr<T> {
            fn inspect(&self) -> Value<'_> {
                (**self).inspect()
            }

            fn static_kind() -> Kind {
                T::static_kind()
            }
        }

        impl Inspect for $ptr<str> {
            fn inspect(&self) -> Value<'_> {
                Value::String(self)
            }

            fn static_kind() -> Kind {
                Kind::String
            }
        }

        impl<T: Inspect> Inspect for $ptr<[T]> {
            fn inspect(&self) -> Value<'_> {
                Value::sequence(self.iter())
            }

            fn static_kind() -> Kind {
                Kind::Sequence
            }
        }
    )*};
}

inspect_transparent!(Box, Rc, Arc);

impl<T: Inspect> Inspect for &T {
    fn inspect(&self) -> Value<'_> {
        (**self).inspect()
    }

    fn static_kind() -> Kind {
        T::static_kind()
    }
}

impl Inspect for &str {
    fn inspect(&self) -> Value<'_> {
        Value::String(self)
    }

    fn static_kind() -> Kind {
        Kind::String
    }
}

impl<T: Inspect> Inspect for &[T] {
    fn inspect(&self) -> Value<'_> {
        Value::sequence(self.iter())
    }

    fn static_kind() -> Kind {
        Kind::Sequence
    }
}

impl Inspect for &dyn Inspect {
    fn inspect(&self) -> Value<'_> {
        (**self).inspect()
    }
}

impl<T: Inspect> Inspect for [T] {
    fn inspect(&self) -> Value<'_> {
        Value::sequence(self)
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn inspect(&self) -> Value<'_> {
        Value::sequence(self)
    }

    fn static_kind() -> Kind {
        Kind::Sequence
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn inspect(&self) -> Value<'_> {
        Value::sequence(self)
    }

    fn static_kind() -> Kind {
        Kind::Sequence
    }
}

impl<T: Inspect> Inspect for VecDeque<T> {
    fn inspect(&self) -> Value<'_> {
        Value::sequence(self)
    }

    fn static_kind() -> Kind {
        Kind::Sequence
    }
}

impl<K: Inspect, V: Inspect, S> Inspect for HashMap<K, V, S> {
    fn inspect(&self) -> Value<'_> {
        Value::mapping(self)
    }

    fn static_kind() -> Kind {
        Kind::Mapping
    }
}

impl<K: Inspect, V: Inspect> Inspect for BTreeMap<K, V> {
    fn inspect(&self) -> Value<'_> {
        Value::Mapping(Some(
            self.iter().map(|(k, v)| Entry::new(k, v)).collect(),
        ))
    }

    fn static_kind() -> Kind {
        Kind::Mapping
    }
}
