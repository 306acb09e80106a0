//! Human-readable difference reports.
//!
//! A [`DiffReport`] is an owned snapshot of a difference list with both sides
//! already formatted, so it outlives the compared values and serializes to
//! JSON. [`render_report`] prints it one line per difference.

use crate::config::RenderOptions;
use crate::diff::model::{Difference, Reason};
use crate::errors::{Result, StructDiffError};
use crate::render::{format_float, render_with};
use crate::value::{Inspect, Value};
use serde::{Deserialize, Serialize};

/// Placeholder shown for an empty (root) path.
const ROOT_PATH_LABEL: &str = "(root)";

/// Format one side of a difference for display.
///
/// Strings are quoted with escapes, booleans and numbers are printed plain,
/// the absent marker is `<nil>`, and anything else goes through the value
/// renderer.
pub fn format_diff_value(value: Option<&dyn Inspect>) -> String {
    format_diff_value_with(value, &RenderOptions::default())
}

/// [`format_diff_value`] with explicit renderer options for composites.
pub fn format_diff_value_with(value: Option<&dyn Inspect>, options: &RenderOptions) -> String {
    let Some(value) = value else {
        return "<nil>".to_string();
    };
    match value.inspect() {
        Value::String(s) => format!("{:?}", s),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Uint(u) => u.to_string(),
        Value::Float(x) => format_float(x),
        _ => render_with(value, options),
    }
}

/// One formatted difference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiffLine {
    pub path: String,
    pub expected: String,
    pub actual: String,
    pub reason: Reason,
}

impl DiffLine {
    pub fn new(diff: &Difference<'_>, options: &RenderOptions) -> Self {
        Self {
            path: diff.path.clone(),
            expected: format_diff_value_with(diff.expected, options),
            actual: format_diff_value_with(diff.actual, options),
            reason: diff.reason,
        }
    }
}

impl From<&Difference<'_>> for DiffLine {
    fn from(diff: &Difference<'_>) -> Self {
        Self::new(diff, &RenderOptions::default())
    }
}

/// A titled, formatted difference list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiffReport {
    pub title: String,
    pub differences: Vec<DiffLine>,
}

impl DiffReport {
    pub fn new(title: impl Into<String>, differences: &[Difference<'_>]) -> Self {
        Self::with_options(title, differences, &RenderOptions::default())
    }

    pub fn with_options(
        title: impl Into<String>,
        differences: &[Difference<'_>],
        options: &RenderOptions,
    ) -> Self {
        Self {
            title: title.into(),
            differences: differences
                .iter()
                .map(|diff| DiffLine::new(diff, options))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.differences.is_empty()
    }

    pub fn len(&self) -> usize {
        self.differences.len()
    }

    /// Pretty-printed JSON form of the report.
    ///
    /// # Errors
    ///
    /// - `Serialization` — serde_json failed to encode the report
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| StructDiffError::Serialization {
            reason: e.to_string(),
        })
    }
}

/// Render a report as text.
///
/// ```text
/// Person:
///   Found 1 difference(s):
///   └─ name: "Alice" ≠ "Bob"
/// ```
pub fn render_report(report: &DiffReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}:\n", report.title));

    if report.is_empty() {
        out.push_str("  No differences found!\n");
        return out;
    }

    out.push_str(&format!("  Found {} difference(s):\n", report.len()));
    for line in &report.differences {
        let path = if line.path.is_empty() {
            ROOT_PATH_LABEL
        } else {
            line.path.as_str()
        };
        out.push_str(&format!(
            "  └─ {}: {} ≠ {}\n",
            path, line.expected, line.actual
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::find_differences;
    use std::collections::BTreeMap;

    #[test]
    fn test_format_scalars() {
        assert_eq!(format_diff_value(Some(&"a\"b")), "\"a\\\"b\"");
        assert_eq!(format_diff_value(Some(&true)), "true");
        assert_eq!(format_diff_value(Some(&-7i32)), "-7");
        assert_eq!(format_diff_value(Some(&7u64)), "7");
        assert_eq!(format_diff_value(Some(&3.15f32)), "3.15");
        assert_eq!(format_diff_value(None), "<nil>");
    }

    #[test]
    fn test_format_composites_use_renderer() {
        assert_eq!(format_diff_value(Some(&vec!["x"])), "[\"x\"]");
        assert_eq!(format_diff_value(Some(&None::<u8>)), "nil");

        let map: BTreeMap<&str, i32> = [("b", 2), ("a", 1)].into_iter().collect();
        assert_eq!(format_diff_value(Some(&map)), "map[\"a\": 1, \"b\": 2]");
    }

    #[test]
    fn test_report_lines() {
        let a: BTreeMap<&str, &str> = [("k1", "v1"), ("k2", "v2")].into_iter().collect();
        let b: BTreeMap<&str, &str> = [("k1", "v1"), ("k3", "v3")].into_iter().collect();
        let diffs = find_differences(&a, &b);
        let report = DiffReport::new("Map Comparison", &diffs);

        assert_eq!(
            render_report(&report),
            "Map Comparison:\n  Found 1 difference(s):\n  └─ [k2]: \"v2\" ≠ <nil>\n"
        );
        assert_eq!(report.differences[0].reason, Reason::MissingKey);
    }

    #[test]
    fn test_empty_report() {
        let report = DiffReport::new("Nothing", &[]);
        assert_eq!(render_report(&report), "Nothing:\n  No differences found!\n");
    }

    #[test]
    fn test_root_path_label() {
        let diffs = find_differences(&1i32, &2i32);
        let report = DiffReport::new("Root", &diffs);
        assert!(render_report(&report).contains("└─ (root): 1 ≠ 2"));
    }

    #[test]
    fn test_json_round_trip() {
        let diffs = find_differences(&"x", &"y");
        let report = DiffReport::new("Json", &diffs);
        let json = report.to_json().unwrap();
        let back: DiffReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
        assert!(json.contains("\"value_mismatch\""));
    }
}
