use async_trait::async_trait;
use sagemaker_demo::{Error, Result, inference::InferenceClient};
use std::sync::{Arc, Mutex};

/// A recorded call to the stub endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub endpoint_name: String,
    pub body: Vec<u8>,
}

/// Stub inference client that replays one fixed response and records calls.
#[derive(Debug)]
pub struct StubInferenceClient {
    pub response: Vec<u8>,
    pub invocations: Arc<Mutex<Vec<Invocation>>>,
    pub error: Option<String>,
}

impl StubInferenceClient {
    pub fn new() -> Self {
        Self {
            response: br#"{"predictions":[]}"#.to_vec(),
            invocations: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_predictions(mut self, predictions: serde_json::Value) -> Self {
        self.response = serde_json::to_vec(&serde_json::json!({ "predictions": predictions }))
            .expect("predictions serialize");
        self
    }

    pub fn with_raw_response(mut self, response: &[u8]) -> Self {
        self.response = response.to_vec();
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for StubInferenceClient {
    async fn invoke_endpoint(&self, endpoint_name: &str, body: Vec<u8>) -> Result<Vec<u8>> {
        self.invocations.lock().unwrap().push(Invocation {
            endpoint_name: endpoint_name.to_string(),
            body,
        });

        if let Some(ref error) = self.error {
            return Err(Error::inference(error.clone()));
        }

        Ok(self.response.clone())
    }
}

impl Default for StubInferenceClient {
    fn default() -> Self {
        Self::new()
    }
}
