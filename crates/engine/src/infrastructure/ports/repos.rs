//! Repository port traits for keyed record access.

use async_trait::async_trait;

use statline_domain::{CharacterId, SpellSlot, Status, TrackedFeature};

use super::error::RepoError;

/// Keyed persistence for status records.
///
/// At most one record exists per `(character_id, identifier)`. `upsert` must
/// be atomic on that key, so a concurrent writer can overwrite but never
/// duplicate.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusRepo: Send + Sync {
    /// Locate the unique record for a character and domain identifier.
    async fn find(
        &self,
        character_id: CharacterId,
        identifier: &str,
    ) -> Result<Option<Status>, RepoError>;

    /// Insert or replace the record keyed by the status's character and
    /// identifier, returning the committed value.
    async fn upsert(&self, status: &Status) -> Result<Status, RepoError>;

    /// Remove the record if present. Returns whether a record existed.
    async fn delete(
        &self,
        character_id: CharacterId,
        identifier: &str,
    ) -> Result<bool, RepoError>;
}

/// Read access to a character's spell slot rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpellSlotRepo: Send + Sync {
    async fn list(&self, character_id: CharacterId) -> Result<Vec<SpellSlot>, RepoError>;
}

/// Read access to a character's tracked feature rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrackedFeatureRepo: Send + Sync {
    async fn list_tracked(
        &self,
        character_id: CharacterId,
    ) -> Result<Vec<TrackedFeature>, RepoError>;
}
