//! The per-domain status component contract.

use async_trait::async_trait;

use statline_domain::{CharacterId, StatusDomain, ThresholdTable, WeightedMetric};

use super::error::StatusError;
use crate::infrastructure::event_bus::Topic;

/// One implementation per metric domain.
///
/// The trait carries only what varies between domains - which topics
/// trigger recomputation, how raw rows become weighted metrics, and which
/// severity bands apply. The subscribe/recompute lifecycle lives in
/// [`StatusRunner`](super::StatusRunner) and is implemented once.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusComponent: Send + Sync {
    /// The metric domain this component computes.
    fn domain(&self) -> StatusDomain;

    /// Data-changed topics that trigger recomputation.
    fn data_topics(&self) -> &'static [Topic];

    /// Read the character's current raw rows and map them to weighted
    /// metrics. Ineligible rows contribute neither value nor weight.
    async fn weighted_metrics(
        &self,
        character_id: CharacterId,
    ) -> Result<Vec<WeightedMetric>, StatusError>;

    /// The domain's severity band table.
    fn thresholds(&self) -> &ThresholdTable;
}
