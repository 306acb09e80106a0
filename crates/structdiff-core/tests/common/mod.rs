//! Record fixtures shared by the integration tests.
//!
//! Field names are exposed in the capitalized form used by the report
//! examples (`Profile.Tags.[1]`, `StringMap.[key1]`).

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::HashMap;
use structdiff_core::{Inspect, Nilable, Opaque};

#[derive(Debug, Clone, Default, PartialEq, Inspect)]
pub struct Address {
    #[inspect(rename = "City")]
    pub city: String,
    #[inspect(rename = "Country")]
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Inspect)]
pub struct Profile {
    #[inspect(rename = "Bio")]
    pub bio: String,
    #[inspect(rename = "Tags")]
    pub tags: Vec<String>,
    #[inspect(rename = "Address")]
    pub address: Address,
}

#[derive(Debug, Clone, Default, PartialEq, Inspect)]
pub struct Person {
    #[inspect(rename = "ID")]
    pub id: i32,
    #[inspect(rename = "Name")]
    pub name: String,
    #[inspect(rename = "Emails")]
    pub emails: Nilable<Vec<String>>,
    #[inspect(rename = "Profile")]
    pub profile: Profile,
}

/// One field of every scalar kind, plus an optional reference, an opaque
/// value, and a hidden field.
#[derive(Debug, Default, Inspect)]
pub struct DataTypes {
    #[inspect(rename = "Int")]
    pub int: i32,
    #[inspect(rename = "Int64")]
    pub int64: i64,
    #[inspect(rename = "Uint")]
    pub uint: u32,
    #[inspect(rename = "Uint64")]
    pub uint64: u64,
    #[inspect(rename = "Float32")]
    pub float32: f32,
    #[inspect(rename = "Float64")]
    pub float64: f64,
    #[inspect(rename = "Bool")]
    pub flag: bool,
    #[inspect(rename = "String")]
    pub text: String,
    #[inspect(rename = "Pointer")]
    pub pointer: Option<Box<i32>>,
    #[inspect(rename = "Handle")]
    pub handle: Opaque<u32>,
    #[inspect(skip)]
    pub hits: Cell<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Inspect)]
pub struct MapContainer {
    #[inspect(rename = "StringMap")]
    pub string_map: Nilable<HashMap<String, String>>,
    #[inspect(rename = "IntMap")]
    pub int_map: HashMap<String, i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Inspect)]
pub struct Item {
    #[inspect(rename = "ID")]
    pub id: i32,
    #[inspect(rename = "Value")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Inspect)]
pub struct ItemCollection {
    #[inspect(rename = "Items")]
    pub items: Vec<Item>,
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn string_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn alice() -> Person {
    Person {
        id: 1,
        name: "Alice".to_string(),
        emails: Nilable::new(strings(&["alice@company.com", "alice@personal.com"])),
        profile: Profile {
            bio: "Engineer".to_string(),
            tags: strings(&["go", "backend"]),
            address: Address {
                city: "São Paulo".to_string(),
                country: "Brasil".to_string(),
            },
        },
    }
}

pub fn items(pairs: &[(i32, &str)]) -> ItemCollection {
    ItemCollection {
        items: pairs
            .iter()
            .map(|(id, value)| Item {
                id: *id,
                value: value.to_string(),
            })
            .collect(),
    }
}
