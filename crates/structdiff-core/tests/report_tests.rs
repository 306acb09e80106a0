#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::*;
use structdiff_core::diff::{format_diff_value, render_report, DiffReport};
use structdiff_core::{find_differences, Nilable, Reason};

#[test]
fn test_report_for_complex_person() {
    let expected = Person {
        emails: Nilable::new(strings(&["alice@company.com", "alice@personal.com"])),
        ..alice()
    };
    let mut actual = alice();
    actual.name = "Alice Johnson".to_string();
    actual.emails = Nilable::new(strings(&["alice@company.com", "alice@gmail.com"]));
    actual.profile.tags = strings(&["go", "frontend"]);
    actual.profile.address.city = "Rio de Janeiro".to_string();

    let diffs = find_differences(&expected, &actual);
    let report = DiffReport::new("Person Comparison", &diffs);

    assert_eq!(
        render_report(&report),
        "Person Comparison:\n\
         \x20 Found 4 difference(s):\n\
         \x20 └─ Name: \"Alice\" ≠ \"Alice Johnson\"\n\
         \x20 └─ Emails.[1]: \"alice@personal.com\" ≠ \"alice@gmail.com\"\n\
         \x20 └─ Profile.Tags.[1]: \"backend\" ≠ \"frontend\"\n\
         \x20 └─ Profile.Address.City: \"São Paulo\" ≠ \"Rio de Janeiro\"\n"
    );
}

#[test]
fn test_report_shows_composites_and_absent_marker() {
    let expected = MapContainer {
        string_map: Nilable::new(string_map(&[("key1", "v1"), ("key2", "v2")])),
        ..Default::default()
    };
    let actual = MapContainer {
        string_map: Nilable::new(string_map(&[("key1", "v1"), ("key3", "v3")])),
        int_map: [("n".to_string(), 1)].into_iter().collect(),
    };

    let diffs = find_differences(&expected, &actual);
    let report = DiffReport::new("Maps", &diffs);

    assert_eq!(report.len(), 2);
    assert_eq!(report.differences[0].path, "StringMap.[key2]");
    assert_eq!(report.differences[0].actual, "<nil>");
    assert_eq!(report.differences[0].reason, Reason::MissingKey);
    assert_eq!(report.differences[1].path, "IntMap");
    assert_eq!(report.differences[1].expected, "map[]");
    assert_eq!(report.differences[1].actual, "map[\"n\": 1]");
}

#[test]
fn test_report_outlives_compared_values() {
    let report = {
        let expected = items(&[(1, "a")]);
        let actual = items(&[(1, "b")]);
        let diffs = find_differences(&expected, &actual);
        DiffReport::new("Items", &diffs)
    };

    assert_eq!(report.differences[0].path, "Items.[0].Value");
    assert_eq!(report.differences[0].expected, "\"a\"");
}

#[test]
fn test_report_json_shape() {
    let (expected, actual) = (items(&[(1, "a")]), items(&[(2, "a")]));
    let report = DiffReport::new("Items", &find_differences(&expected, &actual));

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "title": "Items",
            "differences": [{
                "path": "Items.[0].ID",
                "expected": "1",
                "actual": "2",
                "reason": "value_mismatch"
            }]
        })
    );
}

#[test]
fn test_format_diff_value_quotes_strings_with_escapes() {
    let text = "tab\there".to_string();
    assert_eq!(format_diff_value(Some(&text)), "\"tab\\there\"");
    assert_eq!(
        format_diff_value(Some(&alice().profile.address)),
        "{City: \"São Paulo\", Country: \"Brasil\"}"
    );
}
