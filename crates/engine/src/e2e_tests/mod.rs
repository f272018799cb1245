//! In-process integration tests for the status computation flow.
//!
//! These wire the full [`App`](crate::App) - bus, runners, in-memory stores -
//! and drive it the way a hosting process would: mutate sheet data, publish
//! the data-changed topic, and observe the persisted record plus the
//! status-changed signals.
