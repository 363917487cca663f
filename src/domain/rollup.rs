use serde::{Deserialize, Serialize};

/// Status reported to the coordinator when asking for the next request.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum FinishStatus {
    #[default]
    Accept,
    Reject,
}

/// Input metadata attached to advance requests. Only used for logging.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
pub struct AdvanceMetadata {
    pub msg_sender: Option<String>,
    pub epoch_index: Option<u64>,
    pub input_index: Option<u64>,
    pub block_number: Option<u64>,
    pub timestamp: Option<u64>,
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct AdvanceData {
    /// Hex-encoded JSON command.
    pub payload: String,
    #[serde(default)]
    pub metadata: Option<AdvanceMetadata>,
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct InspectData {
    /// Hex-encoded route string.
    pub payload: String,
}

/// A pending request handed out by the coordinator's `/finish` endpoint.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(tag = "request_type", content = "data", rename_all = "snake_case")]
pub enum RollupRequest {
    AdvanceState(AdvanceData),
    InspectState(InspectData),
}
