use crate::domain::ports::Rollup;
use crate::domain::rollup::{FinishStatus, RollupRequest};
use crate::error::{BudgetError, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use tracing::debug;
use url::Url;

#[derive(Debug, Serialize)]
struct FinishBody {
    status: FinishStatus,
}

#[derive(Debug, Serialize)]
struct OutputBody<'a> {
    payload: &'a str,
}

/// Coordinator client speaking the rollup HTTP contract.
///
/// No timeouts are configured: a coordinator that never answers stalls the
/// poll loop, which only ever has one call in flight.
#[derive(Clone)]
pub struct HttpRollup {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpRollup {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), name)
    }

    async fn post_output(&self, name: &str, payload: &str) -> Result<()> {
        let response = self
            .client
            .post(self.endpoint(name))
            .json(&OutputBody { payload })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BudgetError::Coordinator(format!(
                "/{name} answered with status {status}"
            )));
        }
        debug!(endpoint = name, status = status.as_u16(), "Output submitted");
        Ok(())
    }
}

#[async_trait]
impl Rollup for HttpRollup {
    async fn finish(&self, status: FinishStatus) -> Result<Option<RollupRequest>> {
        let response = self
            .client
            .post(self.endpoint("finish"))
            .json(&FinishBody { status })
            .send()
            .await?;

        let code = response.status();
        debug!(status = code.as_u16(), "Received finish status");

        if code == StatusCode::ACCEPTED {
            return Ok(None);
        }
        if !code.is_success() {
            return Err(BudgetError::Coordinator(format!(
                "/finish answered with status {code}"
            )));
        }

        let body = response.text().await?;
        let request = serde_json::from_str(&body).map_err(|e| {
            BudgetError::Coordinator(format!("malformed /finish response: {e}"))
        })?;
        Ok(Some(request))
    }

    async fn add_notice(&self, payload: &str) -> Result<()> {
        self.post_output("notice", payload).await
    }

    async fn add_report(&self, payload: &str) -> Result<()> {
        self.post_output("report", payload).await
    }
}
