//! Canned scenarios over a small country to capital data set.

use crate::proto::{Command, Record};
use crate::script::Script;

pub const NAMES: [&str; 8] = [
    "entries", "values", "keys", "remove", "contains", "insert", "lookup", "create",
];

fn five_countries() -> Vec<Record> {
    vec![
        Record::put("India", "New Delhi"),
        Record::put("US", "Washington DC"),
        Record::put("UK", "London"),
        Record::put("India", "New Delhi"),
        Record::put("Canada", "Ottawa"),
    ]
}

/// Returns the scenario registered under `name`.
pub fn scenario(name: &str) -> Option<Script> {
    let records = match name {
        "entries" => with_five(vec![Record::new(Command::Entries)]),
        "values" => with_five(vec![Record::new(Command::Values)]),
        "keys" => with_five(vec![Record::new(Command::Keys)]),
        "remove" => with_five(vec![
            Record::with_key(Command::Remove, "US"),
            Record::new(Command::Print),
        ]),
        "contains" => with_five(vec![
            Record::with_key(Command::Get, "UK"),
            Record::with_value(Command::ContainsValue, "Ottawa"),
        ]),
        "insert" => with_five(vec![Record::new(Command::Print)]),
        "lookup" => vec![
            Record::put("India", "New Delhi"),
            Record::put("Nepal", "Kathmandu"),
            Record::put("US", "Washington DC"),
            Record::with_key(Command::Get, "US"),
        ],
        "create" => vec![
            Record::put("India", "New Delhi"),
            Record::put("India", "New Delhi"),
            Record::new(Command::Print),
        ],
        _ => return None,
    };
    Some(Script::from_records(records))
}

fn with_five(tail: Vec<Record>) -> Vec<Record> {
    let mut records = five_countries();
    records.extend(tail);
    records
}
