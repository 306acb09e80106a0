//! Canonical value renderer.
//!
//! Turns any inspectable value into a deterministic, human-readable string:
//!
//! | Kind | Rendering |
//! |---|---|
//! | Record | `{name: value, ...}` over visible fields, declaration order |
//! | String | the text in double quotes, unescaped |
//! | Bool / Int / Uint | `true`, `-3`, `42` |
//! | Float | shortest round-trip digits, scientific outside `[1e-4, 1e21)` |
//! | Optional | `nil`, or the referenced value |
//! | Sequence | `nil`, `[]`, or `[a, b, c]` |
//! | Mapping | `nil`, `map[]`, or `map[k: v, ...]` |
//! | Unknown | the value's `Debug` output |
//!
//! Rendering never fails.

mod float;
mod value_render;

pub use float::format_float;
pub use value_render::{key_identity, key_text, render, render_with};
