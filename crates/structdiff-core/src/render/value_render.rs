use crate::config::RenderOptions;
use crate::render::format_float;
use crate::value::{Inspect, Value};

/// How string scalars are written.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Quoting {
    /// Double quotes around the raw text
    Plain,
    /// Rust string-literal escaping, so embedded quotes stay distinguishable
    Escaped,
}

/// Render a value with the default options (mapping keys sorted).
///
/// # Example
///
/// ```
/// use structdiff_core::render;
///
/// assert_eq!(render("hello"), "\"hello\"");
/// assert_eq!(render(&vec![1, 2, 3]), "[1, 2, 3]");
/// ```
pub fn render<T: Inspect + ?Sized>(value: &T) -> String {
    render_with(value, &RenderOptions::default())
}

/// Render a value with explicit options.
pub fn render_with<T: Inspect + ?Sized>(value: &T, options: &RenderOptions) -> String {
    render_as(value, options, Quoting::Plain)
}

fn render_as<T: Inspect + ?Sized>(value: &T, options: &RenderOptions, quoting: Quoting) -> String {
    let mut out = String::new();
    write_value(&mut out, value.inspect(), options, quoting);
    out
}

/// Text of a mapping key as it appears inside a path step.
///
/// Strings appear bare (`[key1]`, not `["key1"]`); every other kind uses its
/// rendering.
pub fn key_text<T: Inspect + ?Sized>(key: &T) -> String {
    match key.inspect() {
        Value::String(s) => s.to_string(),
        other => {
            let mut out = String::new();
            write_value(&mut out, other, &RenderOptions::default(), Quoting::Plain);
            out
        }
    }
}

/// Identity of a mapping key, used to pair entries across two mappings.
///
/// Two keys share an identity only when they have the same kind and the same
/// escaped rendering, so composite keys whose plain [`key_text`] coincides
/// stay apart.
pub fn key_identity<T: Inspect + ?Sized>(key: &T) -> String {
    let value = key.inspect();
    let mut out = format!("{}:", value.kind());
    write_value(&mut out, value, &RenderOptions::default(), Quoting::Escaped);
    out
}

fn write_value(out: &mut String, value: Value<'_>, options: &RenderOptions, quoting: Quoting) {
    match value {
        Value::Record(record) => {
            out.push('{');
            for (i, field) in record.visible_fields().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(field.name);
                out.push_str(": ");
                write_value(out, field.value.inspect(), options, quoting);
            }
            out.push('}');
        }
        Value::String(s) if quoting == Quoting::Escaped => out.push_str(&format!("{:?}", s)),
        Value::String(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        Value::Bool(b) => out.push_str(if b { "true" } else { "false" }),
        Value::Int(i) => out.push_str(&i.to_string()),
        Value::Uint(u) => out.push_str(&u.to_string()),
        Value::Float(x) => out.push_str(&format_float(x)),
        Value::Optional(None) | Value::Sequence(None) | Value::Mapping(None) => {
            out.push_str("nil");
        }
        Value::Optional(Some(inner)) => write_value(out, inner.inspect(), options, quoting),
        Value::Sequence(Some(items)) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, item.inspect(), options, quoting);
            }
            out.push(']');
        }
        Value::Mapping(Some(entries)) => {
            let mut pairs: Vec<(String, String)> = entries
                .iter()
                .map(|e| {
                    (
                        render_as(e.key, options, quoting),
                        render_as(e.value, options, quoting),
                    )
                })
                .collect();
            if options.sort_map_keys {
                pairs.sort();
            }
            out.push_str("map[");
            for (i, (key, value)) in pairs.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(key);
                out.push_str(": ");
                out.push_str(value);
            }
            out.push(']');
        }
        Value::Unknown(inner) => out.push_str(&format!("{:?}", inner)),
    }
}
