#![allow(dead_code)]

use budget_rollup::interfaces::hex;
use serde_json::{Value, json};
use wiremock::Request;

/// Body of a `/finish` response carrying an advance request.
pub fn advance_request(command: Value) -> Value {
    json!({
        "request_type": "advance_state",
        "data": {
            "payload": hex::encode(&command.to_string()),
            "metadata": {
                "msg_sender": "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
                "epoch_index": 0,
                "input_index": 0,
                "block_number": 11,
                "timestamp": 1700000000
            }
        }
    })
}

/// Body of a `/finish` response carrying an inspect request.
pub fn inspect_request(route: &str) -> Value {
    json!({
        "request_type": "inspect_state",
        "data": { "payload": hex::encode(route) }
    })
}

/// Decodes the hex payload posted to `/notice` or `/report`.
pub fn decoded_output(request: &Request) -> Value {
    let body: Value = request.body_json().unwrap();
    let text = hex::decode(body["payload"].as_str().unwrap()).unwrap();
    serde_json::from_str(&text).unwrap()
}

/// Outputs posted to `endpoint` (e.g. "/notice"), in order, decoded.
pub fn outputs(requests: &[Request], endpoint: &str) -> Vec<Value> {
    requests
        .iter()
        .filter(|r| r.url.path() == endpoint)
        .map(decoded_output)
        .collect()
}
