use super::budget::Budget;
use super::rollup::{FinishStatus, RollupRequest};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;

#[async_trait]
pub trait BudgetStore: Send + Sync {
    /// Inserts or replaces the budget of `user_id`, returning the previous one.
    async fn store(&self, user_id: &str, budget: Budget) -> Result<Option<Budget>>;
    async fn get(&self, user_id: &str) -> Result<Option<Budget>>;
    async fn contains(&self, user_id: &str) -> Result<bool>;
    async fn all_budgets(&self) -> Result<BTreeMap<String, Budget>>;
}

/// The coordinator that hands out requests and collects their outputs.
#[async_trait]
pub trait Rollup: Send + Sync {
    /// Reports `status` for the previous request and waits for the next one.
    /// Returns `None` when no request is pending.
    async fn finish(&self, status: FinishStatus) -> Result<Option<RollupRequest>>;
    /// Emits a notice (advance output) with a hex-encoded payload.
    async fn add_notice(&self, payload: &str) -> Result<()>;
    /// Emits a report (inspect output) with a hex-encoded payload.
    async fn add_report(&self, payload: &str) -> Result<()>;
}

pub type BudgetStoreBox = Box<dyn BudgetStore>;
pub type RollupBox = Box<dyn Rollup>;
