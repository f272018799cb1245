//! Status service - the runner registry for a session.

use std::sync::Arc;

use statline_domain::StatusDomain;

use super::component::StatusComponent;
use super::context::StatusContext;
use super::runner::StatusRunner;

/// Owns one [`StatusRunner`] per registered component.
///
/// The hosting process registers every domain's component once at startup,
/// then calls [`initialize_all`](Self::initialize_all) to subscribe them and
/// schedule their eager first evaluations.
pub struct StatusService {
    ctx: Arc<StatusContext>,
    runners: Vec<Arc<StatusRunner>>,
}

impl StatusService {
    pub fn new(ctx: Arc<StatusContext>) -> Self {
        Self {
            ctx,
            runners: Vec::new(),
        }
    }

    /// Register a component. Nothing subscribes until `initialize_all`.
    pub fn register(&mut self, component: Arc<dyn StatusComponent>) {
        self.runners
            .push(StatusRunner::new(component, Arc::clone(&self.ctx)));
    }

    /// Subscribe every registered runner and schedule first evaluations.
    pub fn initialize_all(&self) {
        for runner in &self.runners {
            runner.initialize();
        }
    }

    /// The runner for a domain, if one is registered.
    pub fn runner(&self, domain: StatusDomain) -> Option<&Arc<StatusRunner>> {
        self.runners.iter().find(|runner| runner.domain() == domain)
    }
}
