//! In-memory character-sheet attribute store.
//!
//! Stands in for the external data collaborators that own spell slot and
//! tracked-feature records. Mutators only write; whoever mutates is expected
//! to publish the matching data-changed topic afterwards (see
//! [`crate::app::App`]). There is no self-notification on mutation.

use async_trait::async_trait;
use dashmap::DashMap;

use statline_domain::{CharacterId, SpellSlot, TrackedFeature};

use crate::infrastructure::ports::{RepoError, SpellSlotRepo, TrackedFeatureRepo};

/// In-memory per-character attribute rows.
pub struct MemorySheetStore {
    spell_slots: DashMap<CharacterId, Vec<SpellSlot>>,
    tracked_features: DashMap<CharacterId, Vec<TrackedFeature>>,
}

impl MemorySheetStore {
    pub fn new() -> Self {
        Self {
            spell_slots: DashMap::new(),
            tracked_features: DashMap::new(),
        }
    }

    /// Replace a character's spell slot rows.
    pub fn set_spell_slots(&self, character_id: CharacterId, slots: Vec<SpellSlot>) {
        self.spell_slots.insert(character_id, slots);
    }

    /// Replace a character's tracked feature rows.
    pub fn set_tracked_features(&self, character_id: CharacterId, features: Vec<TrackedFeature>) {
        self.tracked_features.insert(character_id, features);
    }
}

impl Default for MemorySheetStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpellSlotRepo for MemorySheetStore {
    async fn list(&self, character_id: CharacterId) -> Result<Vec<SpellSlot>, RepoError> {
        Ok(self
            .spell_slots
            .get(&character_id)
            .map(|slots| slots.clone())
            .unwrap_or_default())
    }
}

#[async_trait]
impl TrackedFeatureRepo for MemorySheetStore {
    async fn list_tracked(
        &self,
        character_id: CharacterId,
    ) -> Result<Vec<TrackedFeature>, RepoError> {
        Ok(self
            .tracked_features
            .get(&character_id)
            .map(|features| features.clone())
            .unwrap_or_default())
    }
}
