//! Helpers for distance labels such as "5 км" or "21.1 км".
//!
//! Races store their distance list as JSON text; results carry a free-text
//! label that doubles as a grouping key.

use serde::{Deserialize, Serialize};

/// Label prefixes in display priority order. A label matching none of them
/// sorts after all that do.
pub const DISTANCE_PRIORITY_PREFIXES: [&str; 4] = ["5", "10", "21", "42"];

/// The distances of a race as they appear in a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Distances {
    /// The stored JSON, decoded.
    Decoded(serde_json::Value),
    /// An empty stored value, passed through as-is.
    Raw(String),
}

/// Decodes the stored distances column.
///
/// A missing value stays missing and an empty string is passed through
/// unchanged; neither becomes an empty list. Text that is not valid JSON
/// yields `None`.
pub fn decode_distances(raw: Option<String>) -> Option<Distances> {
    let raw = raw?;
    if raw.is_empty() {
        return Some(Distances::Raw(raw));
    }

    match serde_json::from_str(&raw) {
        Ok(value) => Some(Distances::Decoded(value)),
        Err(e) => {
            tracing::warn!(error = %e, stored = %raw, "Unreadable distances value");
            None
        }
    }
}

/// Priority bucket of a distance label: 1 for "5…", 2 for "10…", 3 for
/// "21…", 4 for "42…", 5 for anything else. Prefixes are tested in that
/// order, so "50 км" lands in the first bucket.
pub fn distance_priority(distance: &str) -> usize {
    DISTANCE_PRIORITY_PREFIXES
        .iter()
        .position(|prefix| distance.starts_with(prefix))
        .map_or(DISTANCE_PRIORITY_PREFIXES.len() + 1, |index| index + 1)
}

/// SQL `CASE` expression computing [`distance_priority`] for `column`.
pub(crate) fn distance_priority_sql(column: &str) -> String {
    let mut sql = String::from("CASE");
    for (index, prefix) in DISTANCE_PRIORITY_PREFIXES.iter().enumerate() {
        sql.push_str(&format!(" WHEN {} LIKE '{}%' THEN {}", column, prefix, index + 1));
    }
    sql.push_str(&format!(" ELSE {} END", DISTANCE_PRIORITY_PREFIXES.len() + 1));
    sql
}
