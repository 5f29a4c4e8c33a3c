//! Dataset profiling: how often each key, status, category and relationship
//! kind occurs across a GRID file.
//!
//! Works on raw JSON rather than the typed model so it shows the shape of the
//! data as it is, including keys the converter ignores.

use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::error::{Grid2VivoError, Result};

/// Occurrence counts keyed by value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<String, usize>,
}

impl FrequencyTable {
    pub fn add(&mut self, key: &str) {
        *self.counts.entry(key.to_string()).or_insert(0) += 1;
    }

    pub fn get(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries by descending count, ties by key.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<_> = self.counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

/// Summary of one GRID file.
#[derive(Debug, Clone)]
pub struct DatasetProfile {
    pub version: String,
    pub institute_count: usize,
    pub first: Option<JsonValue>,
    pub last: Option<JsonValue>,
    pub keys: FrequencyTable,
    pub statuses: FrequencyTable,
    pub types: FrequencyTable,
    pub relationship_types: FrequencyTable,
}

/// Label used when an institute has no string `status`.
pub const MISSING_STATUS: &str = "(none)";

/// Tabulate a parsed GRID document.
pub fn profile_dataset(doc: &JsonValue) -> Result<DatasetProfile> {
    let version = doc
        .get("version")
        .and_then(JsonValue::as_str)
        .ok_or_else(|| Grid2VivoError::InvalidInput("missing 'version'".to_string()))?
        .to_string();
    let institutes = doc
        .get("institutes")
        .and_then(JsonValue::as_array)
        .ok_or_else(|| Grid2VivoError::InvalidInput("missing 'institutes' list".to_string()))?;

    let mut keys = FrequencyTable::default();
    let mut statuses = FrequencyTable::default();
    let mut types = FrequencyTable::default();
    let mut relationship_types = FrequencyTable::default();

    for institute in institutes {
        if let Some(map) = institute.as_object() {
            for key in map.keys() {
                keys.add(key);
            }
        }

        statuses.add(
            institute
                .get("status")
                .and_then(JsonValue::as_str)
                .unwrap_or(MISSING_STATUS),
        );

        for tag in list(institute, "types") {
            if let Some(tag) = tag.as_str() {
                types.add(tag);
            }
        }

        // Relationships without a type are not counted.
        for relationship in list(institute, "relationships") {
            if let Some(kind) = relationship.get("type").and_then(JsonValue::as_str) {
                relationship_types.add(kind);
            }
        }
    }

    Ok(DatasetProfile {
        version,
        institute_count: institutes.len(),
        first: institutes.first().cloned(),
        last: institutes.last().cloned(),
        keys,
        statuses,
        types,
        relationship_types,
    })
}

fn list<'a>(value: &'a JsonValue, key: &str) -> &'a [JsonValue] {
    value
        .get(key)
        .and_then(JsonValue::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Plain-text report of a profile.
pub fn render_report(profile: &DatasetProfile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Grid {}", profile.version);
    let _ = writeln!(out, "{} institutes", profile.institute_count);

    if let Some(first) = &profile.first {
        let _ = writeln!(out, "\nFirst institute in the data");
        let _ = writeln!(out, "{}", pretty(first));
    }
    if let Some(last) = &profile.last {
        let _ = writeln!(out, "\nLast institute in the data");
        let _ = writeln!(out, "{}", pretty(last));
    }

    let tables = [
        ("keys", "Key", &profile.keys),
        ("statuses", "Status", &profile.statuses),
        ("types", "Type", &profile.types),
        ("types of relationships", "Type", &profile.relationship_types),
    ];
    for (title, column, table) in tables {
        let _ = writeln!(
            out,
            "\nFrequency of {} in Grid data for {} institutes",
            title, profile.institute_count
        );
        let _ = writeln!(out, "{:<30} {:>10}", column, "Count");
        let _ = writeln!(out, "{:-<41}", "");
        for (key, count) in table.sorted() {
            let _ = writeln!(out, "{:<30} {:>10}", key, count);
        }
    }

    out
}

fn pretty(value: &JsonValue) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
