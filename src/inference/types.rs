use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body sent to the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationPayload {
    pub inputs: Vec<String>,
}

/// Body returned by the endpoint. Predictions are passed through untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct InvocationOutput {
    pub predictions: Value,
}
