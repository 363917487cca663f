//! Conversion between plain text and the `0x`-prefixed hex strings the
//! coordinator uses for every payload.

use crate::error::{BudgetError, Result};

/// Encodes the UTF-8 bytes of `text` as lower-case hex with a `0x` prefix.
pub fn encode(text: &str) -> String {
    format!("0x{}", ::hex::encode(text.as_bytes()))
}

/// Decodes a hex payload back into text. The `0x` prefix is optional.
pub fn decode(payload: &str) -> Result<String> {
    let digits = payload
        .strip_prefix("0x")
        .or_else(|| payload.strip_prefix("0X"))
        .unwrap_or(payload);

    let bytes = ::hex::decode(digits).map_err(|e| BudgetError::Decode(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| BudgetError::Decode(e.to_string()))
}
