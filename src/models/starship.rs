//! Starship records.

use serde::{Deserialize, Serialize};

/// A single starship.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Starship {
    pub name: String,
    pub model: String,
    #[serde(rename = "starship_class")]
    pub class: String,
    pub manufacturer: String,
    pub cost_in_credits: String,
    pub length: String,
    pub crew: String,
    pub passengers: String,
    pub max_atmosphering_speed: String,
    pub hyperdrive_rating: String,
    /// Megalights per hour. Upstream spells it in capitals.
    #[serde(rename = "MGLT")]
    pub mglt: String,
    pub cargo_capacity: String,
    pub consumables: String,
    #[serde(default)]
    pub films: Vec<String>,
    /// `None` when upstream omitted the field; serializes as `null`.
    #[serde(default)]
    pub pilots: Option<Vec<String>>,
}

/// A page of starships as reported by upstream.
///
/// `count` is upstream's total and is not checked against `results`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Starships {
    pub count: i64,
    #[serde(default)]
    pub results: Vec<Starship>,
}
