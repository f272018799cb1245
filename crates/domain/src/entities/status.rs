//! The persisted aggregate status record.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::CharacterId;
use crate::value_objects::Severity;

/// The persisted, displayable aggregate result for one character and one
/// metric domain.
///
/// At most one record exists per `(character_id, identifier)` pair. The
/// status component owning the identifier is its only writer; everything
/// else reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    character_id: CharacterId,
    identifier: String,
    name: String,
    #[serde(rename = "type")]
    severity: Severity,
    value: f64,
}

impl Status {
    /// Create a status record. `value` must be within `[0, 1]`.
    pub fn new(
        character_id: CharacterId,
        identifier: impl Into<String>,
        name: impl Into<String>,
        severity: Severity,
        value: f64,
    ) -> Result<Self, DomainError> {
        validate_value(value)?;
        Ok(Self {
            character_id,
            identifier: identifier.into(),
            name: name.into(),
            severity,
            value,
        })
    }

    pub fn character_id(&self) -> CharacterId {
        self.character_id
    }

    /// Domain key, e.g. `"Status.Magical"`.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Display phrase, e.g. `"Diminished"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Weighted mean in `[0, 1]`.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Replace the display phrase, severity and value in place. Used when a
    /// recompute updates an existing record rather than creating one.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        severity: Severity,
        value: f64,
    ) -> Result<(), DomainError> {
        validate_value(value)?;
        self.name = name.into();
        self.severity = severity;
        self.value = value;
        Ok(())
    }
}

fn validate_value(value: f64) -> Result<(), DomainError> {
    // NaN fails the containment check as well.
    if !(0.0..=1.0).contains(&value) {
        return Err(DomainError::validation(format!(
            "status value must be within [0, 1], got {value}"
        )));
    }
    Ok(())
}
