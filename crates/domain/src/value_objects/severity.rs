//! Severity classes for persisted statuses.

use serde::{Deserialize, Serialize};

/// Display class for a status record. Consumers use this to pick the color
/// and urgency a status line renders with; the threshold tables in
/// [`crate::classification`] decide which class a weighted mean falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Low,
    Guarded,
    Stable,
    Peak,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_snake_case() {
        let json = serde_json::to_string(&Severity::Critical).expect("serializes");
        assert_eq!(json, "\"critical\"");
    }
}
