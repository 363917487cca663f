use crate::application::handlers::RequestHandler;
use crate::application::runner::Runner;
use crate::application::service::{BudgetService, DuplicatePolicy};
use crate::infrastructure::http::HttpRollup;
use crate::infrastructure::in_memory::InMemoryBudgetStore;
use std::time::Duration;
use url::Url;

/// Runtime settings of the budget backend.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the rollup coordinator.
    pub rollup_url: Url,
    /// Sleep between empty polls.
    pub poll_interval: Duration,
    pub duplicates: DuplicatePolicy,
}

impl Config {
    pub fn new(rollup_url: Url) -> Self {
        Self {
            rollup_url,
            poll_interval: Duration::ZERO,
            duplicates: DuplicatePolicy::default(),
        }
    }

    /// Wires an in-memory store and the HTTP coordinator client into a runner.
    pub fn runner(&self) -> Runner {
        let store = Box::new(InMemoryBudgetStore::new());
        let service = BudgetService::with_policy(store, self.duplicates);
        let rollup = Box::new(HttpRollup::new(self.rollup_url.clone()));

        Runner::new(RequestHandler::new(service), rollup).with_poll_interval(self.poll_interval)
    }
}
