//! Generic status component orchestration.
//!
//! One runner per registered component owns the whole lifecycle:
//! `Uninitialized -> Subscribed` (after [`StatusRunner::initialize`]), then
//! `Idle <-> Recomputing` until process shutdown. There is no error state -
//! a failed cycle logs and leaves the previously persisted record untouched.

use std::sync::{Arc, Mutex};

use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, instrument, warn};

use statline_domain::{aggregation, Status, StatusDomain};

use super::component::StatusComponent;
use super::context::StatusContext;
use super::error::StatusError;
use super::types::RecomputeOutcome;
use crate::infrastructure::event_bus::Topic;

/// Single-flight state: at most one recompute cycle runs at a time per
/// runner, and triggers landing mid-flight coalesce into one follow-up run.
/// Two overlapping cycles could otherwise interleave their find/decide/write
/// sequences and lose an update.
#[derive(Default)]
struct Flight {
    running: bool,
    pending: bool,
}

/// Owns one component's subscriptions and recompute lifecycle.
pub struct StatusRunner {
    component: Arc<dyn StatusComponent>,
    ctx: Arc<StatusContext>,
    flight: Mutex<Flight>,
}

impl StatusRunner {
    pub fn new(component: Arc<dyn StatusComponent>, ctx: Arc<StatusContext>) -> Arc<Self> {
        Arc::new(Self {
            component,
            ctx,
            flight: Mutex::new(Flight::default()),
        })
    }

    /// The metric domain this runner computes.
    pub fn domain(&self) -> StatusDomain {
        self.component.domain()
    }

    /// Subscribe a listener task per data topic, then schedule the eager
    /// first evaluation. Subscriptions live for the rest of the process.
    pub fn initialize(self: &Arc<Self>) {
        for topic in self.component.data_topics() {
            let mut rx = self.ctx.bus().subscribe(*topic);
            let runner = Arc::clone(self);
            tokio::spawn(async move {
                loop {
                    match rx.recv().await {
                        Ok(_) => runner.recompute().await,
                        // A lagged receiver missed some notifications; one
                        // recompute catches the state up.
                        Err(RecvError::Lagged(_)) => runner.recompute().await,
                        Err(RecvError::Closed) => break,
                    }
                }
            });
        }

        let runner = Arc::clone(self);
        tokio::spawn(async move { runner.recompute().await });
    }

    /// Recompute the domain's status for the active character.
    ///
    /// Idempotent and re-entrant-safe: a call landing while a cycle is in
    /// flight marks it pending and returns; the in-flight cycle runs once
    /// more when it finishes, collapsing any number of queued triggers into
    /// a single follow-up. Failures are logged, never returned - the
    /// notification trigger has no return channel.
    #[instrument(skip(self), fields(domain = %self.component.domain()))]
    pub async fn recompute(&self) {
        {
            let mut flight = self.flight.lock().expect("flight lock poisoned");
            if flight.running {
                flight.pending = true;
                return;
            }
            flight.running = true;
        }

        loop {
            match self.recompute_once().await {
                Ok(outcome) => debug!(?outcome, "status recompute finished"),
                Err(error) => {
                    warn!(%error, "status recompute failed; keeping previous record");
                }
            }

            let run_again = {
                let mut flight = self.flight.lock().expect("flight lock poisoned");
                if flight.pending {
                    flight.pending = false;
                    true
                } else {
                    flight.running = false;
                    false
                }
            };
            if !run_again {
                break;
            }
        }
    }

    /// One read-aggregate-write cycle.
    async fn recompute_once(&self) -> Result<RecomputeOutcome, StatusError> {
        let character_id = self.ctx.active_character();
        let domain = self.component.domain();
        let identifier = domain.identifier();

        let metrics = self.component.weighted_metrics(character_id).await?;

        if metrics.is_empty() {
            // Empty source: remove any stale record rather than writing
            // degenerate values.
            let removed = self.ctx.statuses().delete(character_id, identifier).await?;
            if removed {
                self.publish_changed(domain);
                return Ok(RecomputeOutcome::Removed);
            }
            return Ok(RecomputeOutcome::Unchanged);
        }

        let value = aggregation::aggregate(&metrics)?;
        let band = self.component.thresholds().classify(value);

        let status = match self.ctx.statuses().find(character_id, identifier).await? {
            Some(mut existing) => {
                existing.update(band.label(), band.severity(), value)?;
                existing
            }
            None => Status::new(character_id, identifier, band.label(), band.severity(), value)?,
        };

        self.ctx.statuses().upsert(&status).await?;
        self.publish_changed(domain);

        Ok(RecomputeOutcome::Updated { value })
    }

    fn publish_changed(&self, domain: StatusDomain) {
        let bus = self.ctx.bus();
        bus.publish(Topic::StatusChanged);
        bus.publish(Topic::DomainStatusChanged(domain));
    }
}
