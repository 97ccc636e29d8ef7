use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

pub const SUCCESS_MESSAGE: &str = "Request successful.";
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub msg: String,
    pub body: PredictionBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionBody {
    pub predictions: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl PredictionResponse {
    pub fn new(predictions: Value) -> Self {
        Self {
            msg: SUCCESS_MESSAGE.to_string(),
            body: PredictionBody { predictions },
        }
    }
}

/// Outcome of one request. Bad requests carry no body.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Success(PredictionResponse),
    BadRequest,
    ServerError(ErrorResponse),
}

impl ApiResponse {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Success(_) => StatusCode::OK,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::ServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status = self.status();
        let headers = [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)];

        let body = match &self {
            Self::Success(response) => serde_json::to_vec(response),
            Self::ServerError(response) => serde_json::to_vec(response),
            Self::BadRequest => return (status, headers).into_response(),
        };

        match body {
            Ok(bytes) => (status, headers, bytes).into_response(),
            Err(e) => {
                error!("Failed to serialize response body: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, headers).into_response()
            }
        }
    }
}
