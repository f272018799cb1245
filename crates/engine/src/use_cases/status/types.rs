//! Status recompute result types.

/// What a single recompute cycle did to the persisted record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecomputeOutcome {
    /// The record was created or updated with the given weighted mean.
    Updated { value: f64 },
    /// The metric source was empty and an existing record was removed.
    Removed,
    /// The metric source was empty and no record existed.
    Unchanged,
}
