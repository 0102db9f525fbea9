//! Column type normalization.
//!
//! Maps the schema source's native type identifiers to the fixed display
//! vocabulary used in rendered documentation.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Sentinel for a missing or empty type name.
pub const UNKNOWN_TYPE: &str = "unknown";

static TYPE_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("string", "varchar"),
        ("text", "text"),
        ("integer", "int"),
        ("smallint", "smallint"),
        ("bigint", "bigint"),
        ("boolean", "tinyint"),
        ("decimal", "decimal"),
        ("date", "date"),
        ("time", "time"),
        ("datetime", "datetime"),
        ("datetimetz", "datetime"),
        ("float", "float"),
        ("json", "json"),
    ])
});

/// Normalize a native column type name to the display vocabulary.
///
/// Total: names absent from the table pass through unchanged, and an empty
/// input yields [`UNKNOWN_TYPE`].
pub fn normalize(raw_type: &str) -> String {
    if raw_type.is_empty() {
        return UNKNOWN_TYPE.to_string();
    }
    TYPE_MAP
        .get(raw_type)
        .map_or_else(|| raw_type.to_string(), |mapped| (*mapped).to_string())
}
