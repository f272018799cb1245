//! Derived-status computation.
//!
//! One [`StatusComponent`] per metric domain plugs a raw-data read and a
//! classification table into the generic [`StatusRunner`], which owns the
//! whole subscribe/recompute lifecycle: it listens on the component's
//! data-changed topics, re-aggregates on every trigger, upserts or removes
//! the persisted record, and publishes the status-changed topics.
//!
//! Adding a metric domain means implementing `StatusComponent` once and
//! registering it with the [`StatusService`]; no orchestration code is
//! duplicated per domain.

mod component;
mod context;
mod error;
mod magical;
mod runner;
mod service;
mod tracked;
mod types;

pub use component::StatusComponent;
pub use context::StatusContext;
pub use error::StatusError;
pub use magical::MagicalComponent;
pub use runner::StatusRunner;
pub use service::StatusService;
pub use tracked::TrackedComponent;
pub use types::RecomputeOutcome;

#[cfg(test)]
pub use component::MockStatusComponent;
