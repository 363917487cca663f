use super::service::BudgetService;
use crate::domain::command::{AdvanceCommand, InspectRoute};
use crate::domain::ports::Rollup;
use crate::domain::rollup::{AdvanceData, FinishStatus, InspectData, RollupRequest};
use crate::error::Result;
use crate::interfaces::hex;
use serde_json::{Value, json};
use tracing::{debug, info, warn};

/// Turns the outcome of a handler into the hex payload sent to the coordinator.
///
/// Failures become `{"error": message}` and travel through the same channel as
/// successful results.
pub fn output_payload(result: Result<Value>) -> String {
    let value = match result {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "Request failed");
            json!({ "error": e.to_string() })
        }
    };
    hex::encode(&value.to_string())
}

/// Routes coordinator requests to the advance and inspect handlers.
///
/// Every handler error is reported through the output payload, and both
/// handlers always finish with `accept`.
pub struct RequestHandler {
    service: BudgetService,
}

impl RequestHandler {
    pub fn new(service: BudgetService) -> Self {
        Self { service }
    }

    pub async fn dispatch(&self, rollup: &dyn Rollup, request: RollupRequest) -> FinishStatus {
        match request {
            RollupRequest::AdvanceState(data) => self.handle_advance(rollup, &data).await,
            RollupRequest::InspectState(data) => self.handle_inspect(rollup, &data).await,
        }
    }

    pub async fn handle_advance(&self, rollup: &dyn Rollup, data: &AdvanceData) -> FinishStatus {
        let metadata = data.metadata.clone().unwrap_or_default();
        info!(
            input_index = ?metadata.input_index,
            msg_sender = ?metadata.msg_sender,
            "Received advance request"
        );

        let payload = output_payload(self.execute_advance(&data.payload).await);
        if let Err(e) = rollup.add_notice(&payload).await {
            warn!(error = %e, "Notice submission failed, result dropped");
        }
        FinishStatus::Accept
    }

    pub async fn handle_inspect(&self, rollup: &dyn Rollup, data: &InspectData) -> FinishStatus {
        info!("Received inspect request");

        let payload = output_payload(self.execute_inspect(&data.payload).await);
        if let Err(e) = rollup.add_report(&payload).await {
            warn!(error = %e, "Report submission failed, result dropped");
        }
        FinishStatus::Accept
    }

    /// Decodes and runs an advance payload, returning the JSON result.
    pub async fn execute_advance(&self, payload: &str) -> Result<Value> {
        let text = hex::decode(payload)?;
        debug!(payload = %text, "Converted payload");

        let result = match text.parse::<AdvanceCommand>()? {
            AdvanceCommand::CreateBudget {
                user_id,
                income,
                categories,
            } => serde_json::to_value(
                self.service
                    .create_budget(&user_id, income, categories)
                    .await?,
            )?,
            AdvanceCommand::GetBudget { user_id } => {
                serde_json::to_value(self.service.get_budget(&user_id).await?)?
            }
            AdvanceCommand::UpdateCategory {
                user_id,
                category,
                amount,
            } => serde_json::to_value(
                self.service
                    .update_category(&user_id, &category, amount)
                    .await?,
            )?,
        };
        Ok(result)
    }

    /// Decodes and runs an inspect route, returning the JSON result.
    pub async fn execute_inspect(&self, payload: &str) -> Result<Value> {
        let route = hex::decode(payload)?;
        debug!(route = %route, "Converted route");

        let result = match route.parse::<InspectRoute>()? {
            InspectRoute::ListAllBudgets => serde_json::to_value(self.service.all_budgets().await?)?,
            InspectRoute::BudgetDetails { user_id } => {
                serde_json::to_value(self.service.get_budget(&user_id).await?)?
            }
        };
        Ok(result)
    }
}
