use crate::domain::budget::{Amount, Budget, BudgetCreated, CategoryUpdated};
use crate::domain::ports::BudgetStoreBox;
use crate::error::{BudgetError, Result};
use std::collections::BTreeMap;
use tracing::warn;

/// What `create_budget` does when the user already has a budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Replace the existing budget.
    #[default]
    Overwrite,
    /// Refuse with an "already exists" error.
    Reject,
}

/// Budget operations on top of a `BudgetStore`.
///
/// `BudgetService` is the only writer of the store. Requests are handled one
/// at a time by the poll loop, so a read-check-write sequence here is never
/// interleaved with another one.
pub struct BudgetService {
    store: BudgetStoreBox,
    duplicates: DuplicatePolicy,
}

impl BudgetService {
    /// Creates a new `BudgetService` that overwrites duplicate budgets.
    pub fn new(store: BudgetStoreBox) -> Self {
        Self::with_policy(store, DuplicatePolicy::default())
    }

    pub fn with_policy(store: BudgetStoreBox, duplicates: DuplicatePolicy) -> Self {
        Self { store, duplicates }
    }

    pub async fn create_budget(
        &self,
        user_id: &str,
        income: Amount,
        categories: BTreeMap<String, Amount>,
    ) -> Result<BudgetCreated> {
        let budget = Budget::new(income, categories)?;

        if self.duplicates == DuplicatePolicy::Reject && self.store.contains(user_id).await? {
            return Err(BudgetError::AlreadyExists {
                user_id: user_id.to_string(),
            });
        }

        let created = BudgetCreated::for_budget(&budget);
        if self.store.store(user_id, budget).await?.is_some() {
            warn!(user_id, "Existing budget overwritten");
        }
        Ok(created)
    }

    pub async fn get_budget(&self, user_id: &str) -> Result<Budget> {
        self.store
            .get(user_id)
            .await?
            .ok_or_else(|| BudgetError::NotFound {
                user_id: user_id.to_string(),
            })
    }

    pub async fn update_category(
        &self,
        user_id: &str,
        category: &str,
        amount: Amount,
    ) -> Result<CategoryUpdated> {
        let mut budget = self.get_budget(user_id).await?;
        let updated = budget.update_category(category, amount)?;
        self.store.store(user_id, budget).await?;
        Ok(updated)
    }

    pub async fn all_budgets(&self) -> Result<BTreeMap<String, Budget>> {
        self.store.all_budgets().await
    }
}
