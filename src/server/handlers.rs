use super::types::{ApiResponse, ErrorResponse, PredictionResponse};
use crate::{
    Error, Result,
    inference::{InferenceClient, get_predictions},
};
use axum::{
    body::Bytes,
    extract::State,
    http::{Method, Uri},
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn InferenceClient>,
    pub endpoint_name: Arc<str>,
}

impl AppState {
    pub fn new(client: Arc<dyn InferenceClient>, endpoint_name: impl Into<Arc<str>>) -> Self {
        Self {
            client,
            endpoint_name: endpoint_name.into(),
        }
    }
}

pub async fn demo(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> ApiResponse {
    info!(
        method = %method,
        uri = %uri,
        body = %String::from_utf8_lossy(&body),
        "Received event"
    );

    handle(&state, &body).await
}

/// Validates the body, forwards `inputs` to the endpoint and shapes the
/// response. Classified client errors become 400 with no body; every other
/// failure becomes 500 carrying the error message.
pub async fn handle(state: &AppState, body: &[u8]) -> ApiResponse {
    match predict(state, body).await {
        Ok(predictions) => ApiResponse::Success(PredictionResponse::new(predictions)),
        Err(Error::BadRequest(reason)) => {
            error!("{}", reason);
            ApiResponse::BadRequest
        }
        Err(e) => {
            error!(server_error = %e, "Internal Server Error");
            ApiResponse::ServerError(ErrorResponse {
                error: e.to_string(),
            })
        }
    }
}

async fn predict(state: &AppState, body: &[u8]) -> Result<Value> {
    let body = match std::str::from_utf8(body) {
        Ok(body) if !body.is_empty() => body,
        _ => return Err(Error::bad_request("missing body")),
    };

    // Malformed JSON is not a classified client error; it surfaces as a 500.
    let request: Value = serde_json::from_str(body)?;

    let Some(inputs) = request.get("inputs") else {
        return Err(Error::bad_request("request body needs to have inputs set"));
    };
    let inputs = Vec::<String>::deserialize(inputs)?;
    if inputs.is_empty() {
        return Err(Error::bad_request(
            "inputs needs to have at least one element",
        ));
    }

    get_predictions(state.client.as_ref(), &state.endpoint_name, inputs).await
}
