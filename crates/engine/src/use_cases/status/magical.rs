//! Magical status component.
//!
//! Aggregates the character's spell slots into one "magical potential"
//! status. Each slot is weighed by its tier with the linear formula
//! `1 + 1.5 x level`, so higher-tier slots dominate the aggregate more than
//! low-tier ones.

use std::sync::Arc;

use async_trait::async_trait;

use statline_domain::{
    magical_thresholds, CharacterId, SpellSlot, StatusDomain, ThresholdTable, WeightedMetric,
};

use super::component::StatusComponent;
use super::error::StatusError;
use crate::infrastructure::event_bus::Topic;
use crate::infrastructure::ports::SpellSlotRepo;

/// Weight growth per spell slot level.
const WEIGHT_SLOPE: f64 = 1.5;

const DATA_TOPICS: &[Topic] = &[Topic::SpellSlotsChanged];

pub struct MagicalComponent {
    spell_slots: Arc<dyn SpellSlotRepo>,
    thresholds: ThresholdTable,
}

impl MagicalComponent {
    pub fn new(spell_slots: Arc<dyn SpellSlotRepo>) -> Self {
        Self {
            spell_slots,
            thresholds: magical_thresholds(),
        }
    }

    /// Linear weight for a slot tier.
    fn slot_weight(level: u8) -> f64 {
        1.0 + WEIGHT_SLOPE * f64::from(level)
    }

    /// Map slot rows to weighted metrics. Rows without a tier are skipped
    /// entirely - they contribute neither value nor weight.
    pub fn to_weighted_metrics(slots: &[SpellSlot]) -> Vec<WeightedMetric> {
        slots
            .iter()
            .filter_map(|slot| {
                let level = slot.level()?;
                Some(WeightedMetric::new(
                    slot.remaining_fraction(),
                    Self::slot_weight(level),
                ))
            })
            .collect()
    }
}

#[async_trait]
impl StatusComponent for MagicalComponent {
    fn domain(&self) -> StatusDomain {
        StatusDomain::Magical
    }

    fn data_topics(&self) -> &'static [Topic] {
        DATA_TOPICS
    }

    async fn weighted_metrics(
        &self,
        character_id: CharacterId,
    ) -> Result<Vec<WeightedMetric>, StatusError> {
        let slots = self.spell_slots.list(character_id).await?;
        Ok(Self::to_weighted_metrics(&slots))
    }

    fn thresholds(&self) -> &ThresholdTable {
        &self.thresholds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(level: Option<u8>, max: u32, used: u32) -> SpellSlot {
        SpellSlot::new(level, max, used).expect("valid slot")
    }

    #[test]
    fn test_weight_is_strictly_increasing_in_level() {
        for level in 0..20 {
            assert!(MagicalComponent::slot_weight(level + 1) > MagicalComponent::slot_weight(level));
        }
    }

    #[test]
    fn test_reference_weights() {
        assert_eq!(MagicalComponent::slot_weight(1), 2.5);
        assert_eq!(MagicalComponent::slot_weight(3), 5.5);
    }

    #[test]
    fn test_reference_scenario_mapping() {
        let metrics =
            MagicalComponent::to_weighted_metrics(&[slot(Some(1), 4, 1), slot(Some(3), 2, 2)]);

        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics[0].value(), 0.75);
        assert_eq!(metrics[0].weight(), 2.5);
        assert_eq!(metrics[1].value(), 0.0);
        assert_eq!(metrics[1].weight(), 5.5);
    }

    #[test]
    fn test_level_less_rows_are_excluded_not_zero_weighted() {
        let metrics = MagicalComponent::to_weighted_metrics(&[
            slot(None, 4, 0),
            slot(Some(2), 3, 1),
            slot(None, 2, 2),
        ]);

        // Exactly one metric: the level-less rows contribute neither value
        // nor weight, rather than dragging the mean with weight zero.
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics[0].weight(), 4.0);
    }

    #[test]
    fn test_all_rows_level_less_maps_to_empty() {
        let metrics = MagicalComponent::to_weighted_metrics(&[slot(None, 4, 1), slot(None, 2, 0)]);
        assert!(metrics.is_empty());
    }

    #[test]
    fn test_zero_capacity_slot_contributes_zero_value() {
        let metrics = MagicalComponent::to_weighted_metrics(&[slot(Some(1), 0, 0)]);
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics[0].value(), 0.0);
    }
}
