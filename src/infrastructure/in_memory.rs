use crate::domain::budget::Budget;
use crate::domain::ports::BudgetStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

/// An in-memory store for user budgets, keyed by user id.
///
/// Uses `Arc<RwLock<HashMap<String, Budget>>>` so clones share the same
/// records. Nothing survives a restart.
#[derive(Default, Clone)]
pub struct InMemoryBudgetStore {
    budgets: Arc<RwLock<HashMap<String, Budget>>>,
}

impl InMemoryBudgetStore {
    /// Creates a new, empty in-memory budget store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BudgetStore for InMemoryBudgetStore {
    async fn store(&self, user_id: &str, budget: Budget) -> Result<Option<Budget>> {
        let mut budgets = self.budgets.write().await;
        Ok(budgets.insert(user_id.to_string(), budget))
    }

    async fn get(&self, user_id: &str) -> Result<Option<Budget>> {
        let budgets = self.budgets.read().await;
        Ok(budgets.get(user_id).cloned())
    }

    async fn contains(&self, user_id: &str) -> Result<bool> {
        let budgets = self.budgets.read().await;
        Ok(budgets.contains_key(user_id))
    }

    async fn all_budgets(&self) -> Result<BTreeMap<String, Budget>> {
        let budgets = self.budgets.read().await;
        Ok(budgets
            .iter()
            .map(|(user_id, budget)| (user_id.clone(), budget.clone()))
            .collect())
    }
}
