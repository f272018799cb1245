//! Session context shared by every status runner.

use std::sync::{Arc, RwLock};

use statline_domain::CharacterId;

use crate::infrastructure::event_bus::NotificationBus;
use crate::infrastructure::ports::StatusRepo;

/// Explicit session context: the active character plus the collaborators
/// every status component works against.
///
/// Constructed once per session and passed by `Arc` into each runner at
/// construction time - nothing here is reached through ambient global
/// lookup.
pub struct StatusContext {
    active_character: RwLock<CharacterId>,
    bus: Arc<NotificationBus>,
    statuses: Arc<dyn StatusRepo>,
}

impl StatusContext {
    pub fn new(
        active_character: CharacterId,
        bus: Arc<NotificationBus>,
        statuses: Arc<dyn StatusRepo>,
    ) -> Self {
        Self {
            active_character: RwLock::new(active_character),
            bus,
            statuses,
        }
    }

    /// The character all recomputations currently target.
    pub fn active_character(&self) -> CharacterId {
        *self
            .active_character
            .read()
            .expect("active character lock poisoned")
    }

    /// Switch the session to a different character. Callers publish the
    /// data-changed topics afterwards so components re-evaluate against the
    /// new character.
    pub fn set_active_character(&self, character_id: CharacterId) {
        *self
            .active_character
            .write()
            .expect("active character lock poisoned") = character_id;
    }

    pub fn bus(&self) -> &NotificationBus {
        &self.bus
    }

    pub fn statuses(&self) -> &dyn StatusRepo {
        self.statuses.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::MemoryStatusStore;

    #[test]
    fn test_active_character_is_switchable() {
        let first = CharacterId::new();
        let second = CharacterId::new();
        let ctx = StatusContext::new(
            first,
            Arc::new(NotificationBus::new()),
            Arc::new(MemoryStatusStore::new()),
        );

        assert_eq!(ctx.active_character(), first);
        ctx.set_active_character(second);
        assert_eq!(ctx.active_character(), second);
    }
}
