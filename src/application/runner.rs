use super::handlers::RequestHandler;
use crate::domain::ports::RollupBox;
use crate::domain::rollup::FinishStatus;
use crate::error::Result;
use std::time::Duration;
use tracing::{debug, info};

/// Whether a poll handed out a request or came back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Poll {
    Idle,
    Handled(FinishStatus),
}

/// The poll/dispatch loop.
///
/// Each iteration reports the status of the previous request, waits for the
/// next one and handles it to completion before polling again. Requests are
/// therefore never processed concurrently.
pub struct Runner {
    handler: RequestHandler,
    rollup: RollupBox,
    poll_interval: Duration,
    status: FinishStatus,
}

impl Runner {
    pub fn new(handler: RequestHandler, rollup: RollupBox) -> Self {
        Self {
            handler,
            rollup,
            poll_interval: Duration::ZERO,
            status: FinishStatus::Accept,
        }
    }

    /// Sleep applied after an empty poll. Zero polls again immediately.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// The status the next `/finish` call will carry.
    pub fn status(&self) -> FinishStatus {
        self.status
    }

    /// Runs a single poll/dispatch iteration.
    ///
    /// Only coordinator failures are returned as errors; handler failures are
    /// already reported through the request's output.
    pub async fn step(&mut self) -> Result<Poll> {
        match self.rollup.finish(self.status).await? {
            None => {
                debug!("No pending rollup request, trying again");
                Ok(Poll::Idle)
            }
            Some(request) => {
                self.status = self.handler.dispatch(&*self.rollup, request).await;
                info!(status = ?self.status, "Request handled");
                Ok(Poll::Handled(self.status))
            }
        }
    }

    /// Polls forever. Returns only when the coordinator cannot be reached or
    /// answers with something that is not a request.
    pub async fn run(mut self) -> Result<()> {
        loop {
            if self.step().await? == Poll::Idle && !self.poll_interval.is_zero() {
                tokio::time::sleep(self.poll_interval).await;
            }
        }
    }
}
