//! Port traits for infrastructure boundaries.
//!
//! These are the only abstractions in the engine. Ports exist for:
//! - Status record persistence (the in-memory store could be swapped for a
//!   database-backed one)
//! - Character-sheet attribute reads (the records are owned by external data
//!   collaborators; the engine never writes them)

mod error;
mod repos;

pub use error::RepoError;
pub use repos::{SpellSlotRepo, StatusRepo, TrackedFeatureRepo};

// =============================================================================
// Test-Only Mock Repositories (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::{MockSpellSlotRepo, MockStatusRepo, MockTrackedFeatureRepo};
