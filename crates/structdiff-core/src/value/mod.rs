//! Structural view of inspectable values.
//!
//! Anything that implements [`Inspect`] can hand out a borrowed [`Value`]: a
//! closed tagged union with one variant per structural [`Kind`]. Both the
//! difference engine and the renderer walk values exclusively through this
//! view, so neither needs to know the concrete Rust types involved.
//!
//! Records are usually produced by `#[derive(Inspect)]`; the standard
//! scalars, strings, `Option`, sequences, maps and `serde_json::Value` are
//! implemented here.

use serde::Serialize;
use std::fmt;

mod impls;
mod json;
mod wrappers;

pub use wrappers::{Nilable, Opaque};

/// Structural category of a value.
///
/// `Int` and `Uint` are distinct kinds: a signed and an unsigned field never
/// compare equal, even when they hold the same number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// Aggregate of named fields
    Record,
    /// Ordered elements, fixed-length or growable
    Sequence,
    /// Key to value association
    Mapping,
    /// A reference that may be absent
    Optional,
    String,
    Bool,
    /// Signed integer
    Int,
    /// Unsigned integer
    Uint,
    Float,
    /// Anything the engines do not decompose; never compared
    Unknown,
}

impl Kind {
    /// Stable lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Record => "record",
            Kind::Sequence => "sequence",
            Kind::Mapping => "mapping",
            Kind::Optional => "optional",
            Kind::String => "string",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::Unknown => "unknown",
        }
    }

    /// True for kinds the engines recurse into
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            Kind::Record | Kind::Sequence | Kind::Mapping | Kind::Optional
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value whose structure can be inspected.
pub trait Inspect {
    /// Borrowed structural view of `self`.
    fn inspect(&self) -> Value<'_>;

    /// Kind of this type when no instance is at hand.
    ///
    /// Only [`Nilable`] consults it, to decide whether an absent container is
    /// an absent sequence, an absent mapping, or an absent reference.
    fn static_kind() -> Kind
    where
        Self: Sized,
    {
        Kind::Unknown
    }
}

/// Determine the structural kind of a value.
pub fn classify(value: &dyn Inspect) -> Kind {
    value.inspect().kind()
}

/// Borrowed structural view of a value.
///
/// `Sequence(None)` and `Mapping(None)` are the "nil container" states, which
/// are distinct from present-but-empty containers.
pub enum Value<'a> {
    Record(Record<'a>),
    Sequence(Option<Vec<&'a dyn Inspect>>),
    Mapping(Option<Vec<Entry<'a>>>),
    Optional(Option<&'a dyn Inspect>),
    String(&'a str),
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(Float),
    Unknown(&'a dyn fmt::Debug),
}

impl<'a> Value<'a> {
    /// The kind tag of this view
    pub fn kind(&self) -> Kind {
        match self {
            Value::Record(_) => Kind::Record,
            Value::Sequence(_) => Kind::Sequence,
            Value::Mapping(_) => Kind::Mapping,
            Value::Optional(_) => Kind::Optional,
            Value::String(_) => Kind::String,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Uint(_) => Kind::Uint,
            Value::Float(_) => Kind::Float,
            Value::Unknown(_) => Kind::Unknown,
        }
    }

    /// Build a present sequence view from borrowed elements
    pub fn sequence<T: Inspect + 'a>(items: impl IntoIterator<Item = &'a T>) -> Self {
        Value::Sequence(Some(
            items.into_iter().map(|v| v as &dyn Inspect).collect(),
        ))
    }

    /// Build a present mapping view from borrowed pairs
    pub fn mapping<K: Inspect + 'a, V: Inspect + 'a>(
        entries: impl IntoIterator<Item = (&'a K, &'a V)>,
    ) -> Self {
        Value::Mapping(Some(
            entries.into_iter().map(|(k, v)| Entry::new(k, v)).collect(),
        ))
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Record(record) => write!(f, "Record({})", record.type_name()),
            Value::Sequence(Some(items)) => write!(f, "Sequence(len={})", items.len()),
            Value::Mapping(Some(entries)) => write!(f, "Mapping(len={})", entries.len()),
            Value::Sequence(None) | Value::Mapping(None) | Value::Optional(None) => {
                write!(f, "{}(nil)", self.kind())
            }
            Value::Optional(Some(_)) => f.write_str("Optional(..)"),
            Value::String(s) => write!(f, "String({:?})", s),
            Value::Bool(b) => write!(f, "Bool({})", b),
            Value::Int(i) => write!(f, "Int({})", i),
            Value::Uint(u) => write!(f, "Uint({})", u),
            Value::Float(x) => write!(f, "Float({})", x.to_f64()),
            Value::Unknown(inner) => write!(f, "Unknown({:?})", inner),
        }
    }
}

/// A floating-point scalar, keeping the width it was stored with.
#[derive(Debug, Clone, Copy)]
pub enum Float {
    Single(f32),
    Double(f64),
}

impl Float {
    /// Widened value; lossless for both widths
    pub fn to_f64(self) -> f64 {
        match self {
            Float::Single(x) => f64::from(x),
            Float::Double(x) => x,
        }
    }
}

/// Exact `==` on the widened value: no tolerance, and `NaN` is never equal.
impl PartialEq for Float {
    fn eq(&self, other: &Self) -> bool {
        self.to_f64() == other.to_f64()
    }
}

/// One named field of a record.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    pub name: &'a str,
    pub value: &'a dyn Inspect,
    /// Hidden fields are carried in the descriptor but never visited
    pub visible: bool,
}

/// Stand-in value for hidden fields, whose types need not be inspectable.
struct Hidden;

impl Inspect for Hidden {
    fn inspect(&self) -> Value<'_> {
        Value::Unknown(&"<hidden>")
    }
}

static HIDDEN: Hidden = Hidden;

/// Aggregate of named fields in declaration order.
#[derive(Clone)]
pub struct Record<'a> {
    type_name: &'a str,
    fields: Vec<Field<'a>>,
}

impl<'a> Record<'a> {
    pub fn new(type_name: &'a str) -> Self {
        Self {
            type_name,
            fields: Vec::new(),
        }
    }

    /// Append a visible field
    pub fn field(mut self, name: &'a str, value: &'a dyn Inspect) -> Self {
        self.fields.push(Field {
            name,
            value,
            visible: true,
        });
        self
    }

    /// Append a hidden field
    pub fn hidden(mut self, name: &'a str) -> Self {
        self.fields.push(Field {
            name,
            value: &HIDDEN,
            visible: false,
        });
        self
    }

    pub fn type_name(&self) -> &'a str {
        self.type_name
    }

    /// All field descriptors, hidden ones included
    pub fn fields(&self) -> &[Field<'a>] {
        &self.fields
    }

    /// Fields both engines visit, in declaration order
    pub fn visible_fields(&self) -> impl Iterator<Item = &Field<'a>> {
        self.fields.iter().filter(|f| f.visible)
    }

    /// Look up a visible field by name
    pub fn visible_field(&self, name: &str) -> Option<&Field<'a>> {
        self.visible_fields().find(|f| f.name == name)
    }
}

/// One key/value pair of a mapping.
#[derive(Clone, Copy)]
pub struct Entry<'a> {
    pub key: &'a dyn Inspect,
    pub value: &'a dyn Inspect,
}

impl<'a> Entry<'a> {
    pub fn new(key: &'a dyn Inspect, value: &'a dyn Inspect) -> Self {
        Self { key, value }
    }
}
