//! Application composition.

use std::sync::Arc;

use statline_domain::{CharacterId, SpellSlot, TrackedFeature};

use crate::infrastructure::event_bus::{NotificationBus, Topic};
use crate::infrastructure::memory::{MemorySheetStore, MemoryStatusStore};
use crate::use_cases::status::{
    MagicalComponent, StatusContext, StatusService, TrackedComponent,
};

/// Fully-wired in-memory application.
///
/// A hosting process constructs one `App` per session, calls
/// [`initialize`](Self::initialize), then drives it through the mutation
/// helpers. Every helper writes through the sheet store and publishes the
/// matching data-changed topic as its last step - mutation and notification
/// are both explicit, there is no self-notifying field magic.
pub struct App {
    pub bus: Arc<NotificationBus>,
    pub statuses: Arc<MemoryStatusStore>,
    pub sheet: Arc<MemorySheetStore>,
    pub ctx: Arc<StatusContext>,
    pub status_service: StatusService,
}

impl App {
    /// Wire the bus, stores, context and both status components for the
    /// given active character.
    pub fn new(active_character: CharacterId) -> Self {
        let bus = Arc::new(NotificationBus::new());
        let statuses = Arc::new(MemoryStatusStore::new());
        let sheet = Arc::new(MemorySheetStore::new());

        let ctx = Arc::new(StatusContext::new(
            active_character,
            Arc::clone(&bus),
            statuses.clone(),
        ));

        let mut status_service = StatusService::new(Arc::clone(&ctx));
        status_service.register(Arc::new(MagicalComponent::new(sheet.clone())));
        status_service.register(Arc::new(TrackedComponent::new(sheet.clone())));

        Self {
            bus,
            statuses,
            sheet,
            ctx,
            status_service,
        }
    }

    /// Subscribe all status components and schedule their first evaluation.
    pub fn initialize(&self) {
        self.status_service.initialize_all();
    }

    /// Replace a character's spell slot rows, then publish the change.
    pub fn set_spell_slots(&self, character_id: CharacterId, slots: Vec<SpellSlot>) {
        self.sheet.set_spell_slots(character_id, slots);
        self.bus.publish(Topic::SpellSlotsChanged);
    }

    /// Replace a character's tracked features, then publish the change.
    pub fn set_tracked_features(&self, character_id: CharacterId, features: Vec<TrackedFeature>) {
        self.sheet.set_tracked_features(character_id, features);
        self.bus.publish(Topic::TrackedFeaturesChanged);
    }
}
