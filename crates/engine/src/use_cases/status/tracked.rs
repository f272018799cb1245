//! Tracked status component.
//!
//! Aggregates the character's limited-use features into one "tracked
//! resources" status. Features are peers - there is no tier hierarchy
//! between them the way spell slots have levels - so every eligible feature
//! carries the same weight.

use std::sync::Arc;

use async_trait::async_trait;

use statline_domain::{
    tracked_thresholds, CharacterId, StatusDomain, ThresholdTable, TrackedFeature, WeightedMetric,
};

use super::component::StatusComponent;
use super::error::StatusError;
use crate::infrastructure::event_bus::Topic;
use crate::infrastructure::ports::TrackedFeatureRepo;

const FEATURE_WEIGHT: f64 = 1.0;

const DATA_TOPICS: &[Topic] = &[Topic::TrackedFeaturesChanged];

pub struct TrackedComponent {
    features: Arc<dyn TrackedFeatureRepo>,
    thresholds: ThresholdTable,
}

impl TrackedComponent {
    pub fn new(features: Arc<dyn TrackedFeatureRepo>) -> Self {
        Self {
            features,
            thresholds: tracked_thresholds(),
        }
    }

    /// Map feature rows to weighted metrics. Features that were never
    /// granted uses are skipped entirely.
    pub fn to_weighted_metrics(features: &[TrackedFeature]) -> Vec<WeightedMetric> {
        features
            .iter()
            .filter(|feature| feature.max_uses() > 0)
            .map(|feature| WeightedMetric::new(feature.remaining_fraction(), FEATURE_WEIGHT))
            .collect()
    }
}

#[async_trait]
impl StatusComponent for TrackedComponent {
    fn domain(&self) -> StatusDomain {
        StatusDomain::Tracked
    }

    fn data_topics(&self) -> &'static [Topic] {
        DATA_TOPICS
    }

    async fn weighted_metrics(
        &self,
        character_id: CharacterId,
    ) -> Result<Vec<WeightedMetric>, StatusError> {
        let features = self.features.list_tracked(character_id).await?;
        Ok(Self::to_weighted_metrics(&features))
    }

    fn thresholds(&self) -> &ThresholdTable {
        &self.thresholds
    }
}
