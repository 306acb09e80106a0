//! `Inspect` for JSON documents.
//!
//! `null` is an absent reference, objects are mappings keyed by string,
//! arrays are sequences. Numbers are integers when they fit `i64`, unsigned
//! above `i64::MAX`, and floats otherwise, so `1` and `1.0` differ in kind.

use super::{Entry, Float, Inspect, Value};
use serde_json::{Number, Value as Json};

fn number_value(n: &Number) -> Value<'static> {
    if let Some(i) = n.as_i64() {
        Value::Int(i)
    } else if let Some(u) = n.as_u64() {
        Value::Uint(u)
    } else {
        Value::Float(Float::Double(n.as_f64().unwrap_or(f64::NAN)))
    }
}

impl Inspect for Json {
    fn inspect(&self) -> Value<'_> {
        match self {
            Json::Null => Value::Optional(None),
            Json::Bool(b) => Value::Bool(*b),
            Json::Number(n) => number_value(n),
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::sequence(items),
            Json::Object(map) => Value::Mapping(Some(
                map.iter().map(|(k, v)| Entry::new(k, v)).collect(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{classify, Kind};
    use serde_json::json;

    #[test]
    fn test_json_kinds() {
        assert_eq!(classify(&json!(null)), Kind::Optional);
        assert_eq!(classify(&json!(true)), Kind::Bool);
        assert_eq!(classify(&json!(-1)), Kind::Int);
        assert_eq!(classify(&json!(u64::MAX)), Kind::Uint);
        assert_eq!(classify(&json!(1.5)), Kind::Float);
        assert_eq!(classify(&json!("s")), Kind::String);
        assert_eq!(classify(&json!([1, 2])), Kind::Sequence);
        assert_eq!(classify(&json!({"a": 1})), Kind::Mapping);
    }

    #[test]
    fn test_small_unsigned_is_int() {
        assert!(matches!(json!(5).inspect(), Value::Int(5)));
    }
}
