use super::types::{InvocationOutput, InvocationPayload};
use crate::{Error, Result};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_sagemakerruntime::{Client, error::DisplayErrorContext, primitives::Blob};
use serde_json::Value;
use tracing::debug;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Invoke-by-name access to a remote inference endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn invoke_endpoint(&self, endpoint_name: &str, body: Vec<u8>) -> Result<Vec<u8>>;
}

pub struct SageMakerClient {
    client: Client,
}

impl SageMakerClient {
    /// Builds the SDK client from the default credential chain.
    pub async fn connect(region: &str) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;

        Self::from_client(Client::new(&sdk_config))
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InferenceClient for SageMakerClient {
    async fn invoke_endpoint(&self, endpoint_name: &str, body: Vec<u8>) -> Result<Vec<u8>> {
        debug!(
            "Invoking SageMaker endpoint {} with {} bytes",
            endpoint_name,
            body.len()
        );

        let output = self
            .client
            .invoke_endpoint()
            .endpoint_name(endpoint_name)
            .content_type(JSON_CONTENT_TYPE)
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| Error::inference(DisplayErrorContext(&e).to_string()))?;

        output
            .body
            .map(Blob::into_inner)
            .ok_or_else(|| Error::inference(format!("Endpoint {} returned no body", endpoint_name)))
    }
}

/// Sends `inputs` to the endpoint and returns its `predictions` field.
pub async fn get_predictions(
    client: &dyn InferenceClient,
    endpoint_name: &str,
    inputs: Vec<String>,
) -> Result<Value> {
    let payload = serde_json::to_vec(&InvocationPayload { inputs })?;
    let response = client.invoke_endpoint(endpoint_name, payload).await?;
    let output: InvocationOutput = serde_json::from_slice(&response)?;

    Ok(output.predictions)
}
