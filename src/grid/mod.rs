//! GRID institute records as they appear in the dataset JSON.
//!
//! The `institutes` list is kept as raw [`InstituteRecord`]s. Redirected and
//! obsolete entries are often just `{id, status, redirect}`, so only records
//! whose status is active are parsed into the typed [`Institute`], where `id`,
//! `name` and `status` are required and every other attribute group is
//! optional and may also be `null`.

mod dataset;

pub use dataset::{compute_fingerprint, load_dataset, parse_dataset, LoadedDataset};

use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;
use std::str::FromStr;

use crate::error::{Grid2VivoError, Result};

/// Status value of institutes that get converted.
pub const ACTIVE_STATUS: &str = "active";

/// Top-level GRID document.
#[derive(Debug, Clone, Deserialize)]
pub struct GridDataset {
    pub version: String,
    pub institutes: Vec<InstituteRecord>,
}

/// One untyped entry of the `institutes` list.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct InstituteRecord(JsonValue);

impl InstituteRecord {
    /// GRID id, or `""` when the entry has none.
    pub fn id(&self) -> &str {
        self.0.get("id").and_then(JsonValue::as_str).unwrap_or("")
    }

    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(JsonValue::as_str)
    }

    pub fn is_active(&self) -> bool {
        self.status() == Some(ACTIVE_STATUS)
    }

    /// Parse into the typed model. Meant for active records only.
    pub fn parse(&self) -> Result<Institute> {
        Institute::deserialize(&self.0).map_err(|e| {
            Grid2VivoError::InvalidInput(format!("institute {}: {}", self.id(), e))
        })
    }
}

impl From<JsonValue> for InstituteRecord {
    fn from(value: JsonValue) -> Self {
        Self(value)
    }
}

/// One organization entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Institute {
    pub id: String,
    pub name: String,
    pub status: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub types: Vec<String>,
    #[serde(default)]
    pub established: Option<i64>,
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub acronyms: Vec<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub aliases: Vec<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub relationships: Vec<Relationship>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub wikipedia_url: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub links: Vec<Option<String>>,
}

impl Institute {
    pub fn is_active(&self) -> bool {
        self.status == ACTIVE_STATUS
    }
}

/// External identifier sets. Keys other than ISNI and FundRef are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalIds {
    #[serde(rename = "ISNI", default)]
    pub isni: Option<IdList>,
    #[serde(rename = "FundRef", default)]
    pub fund_ref: Option<IdList>,
}

/// An identifier set, either a bare list or the `{ "preferred", "all" }` form.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IdList {
    Plain(Vec<String>),
    Detailed {
        #[serde(default)]
        preferred: Option<String>,
        #[serde(default)]
        all: Vec<String>,
    },
}

impl IdList {
    /// All identifiers in the set, in file order.
    pub fn values(&self) -> Vec<&str> {
        match self {
            IdList::Plain(ids) => ids.iter().map(String::as_str).collect(),
            IdList::Detailed { preferred, all } => {
                let mut values: Vec<&str> = all.iter().map(String::as_str).collect();
                if let Some(p) = preferred {
                    if !values.contains(&p.as_str()) {
                        values.insert(0, p);
                    }
                }
                values
            }
        }
    }
}

/// A typed link to another institute.
#[derive(Debug, Clone, Deserialize)]
pub struct Relationship {
    /// GRID id of the related institute.
    pub id: String,
    /// Raw kind name; checked against [`RelationshipKind`] during mapping.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Closed set of relationship kinds GRID uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    Affiliated,
    Related,
    Child,
    Parent,
    Other,
}

impl FromStr for RelationshipKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Affiliated" => Ok(RelationshipKind::Affiliated),
            "Related" => Ok(RelationshipKind::Related),
            "Child" => Ok(RelationshipKind::Child),
            "Parent" => Ok(RelationshipKind::Parent),
            "Other" => Ok(RelationshipKind::Other),
            other => Err(other.to_string()),
        }
    }
}

/// Postal address with optional coordinates.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub line_1: Option<String>,
    #[serde(default)]
    pub line_2: Option<String>,
    #[serde(default)]
    pub line_3: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    /// Raw JSON: string coordinates pass through untouched, numbers are
    /// reprinted by serde_json (`29.64363250` becomes `29.6436325`).
    #[serde(default)]
    pub lat: Option<JsonValue>,
    #[serde(default)]
    pub lng: Option<JsonValue>,
}

impl Address {
    /// Street lines that are present and non-empty, in order.
    pub fn street_lines(&self) -> Vec<&str> {
        [&self.line_1, &self.line_2, &self.line_3]
            .into_iter()
            .filter_map(|line| non_empty(line))
            .collect()
    }

    /// `(lat, lng)` text when both coordinates are present and non-empty.
    pub fn coordinates(&self) -> Option<(String, String)> {
        let lat = coordinate_text(self.lat.as_ref())?;
        let lng = coordinate_text(self.lng.as_ref())?;
        Some((lat, lng))
    }
}

/// `Some(text)` for a present, non-empty string field.
pub fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn coordinate_text(value: Option<&JsonValue>) -> Option<String> {
    match value? {
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn null_to_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
