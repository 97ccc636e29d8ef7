use sagemaker_demo::{
    Result,
    stage::{AwsEnvironment, EndpointType, StageEnvironment},
};
use tempfile::TempDir;
use tokio::fs;

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Write `content` to `<dir>/<file_name>` and return the full path
pub async fn write_file(dir: &TempDir, file_name: &str, content: &str) -> Result<String> {
    let path = dir.path().join(file_name);
    fs::write(&path, content).await?;
    Ok(path.to_string_lossy().to_string())
}

/// A serverless stage as the setup wizard writes it
pub fn create_serverless_stage() -> StageEnvironment {
    StageEnvironment {
        env: AwsEnvironment {
            account: "123456789012".to_string(),
            region: "eu-central-1".to_string(),
        },
        model_name: "Sentiment".to_string(),
        endpoint_type: EndpointType::Serverless,
        instance_type: None,
        instance_count: None,
        endpoint_memory_size: Some(4096),
        endpoint_max_concurrency: Some(5),
        model_s3_path: None,
        hugging_face_tokenizer: Some("distilbert-base-uncased-finetuned-sst-2-english".to_string()),
        hugging_face_model: Some("distilbert-base-uncased-finetuned-sst-2-english".to_string()),
    }
}

/// An instance-backed stage loading its model from S3
pub fn create_instance_stage() -> StageEnvironment {
    StageEnvironment {
        env: AwsEnvironment {
            account: "210987654321".to_string(),
            region: "us-west-2".to_string(),
        },
        model_name: "classifier".to_string(),
        endpoint_type: EndpointType::Instance,
        instance_type: None,
        instance_count: None,
        endpoint_memory_size: None,
        endpoint_max_concurrency: None,
        model_s3_path: Some("s3://demo/model/model.tar.gz".to_string()),
        hugging_face_tokenizer: None,
        hugging_face_model: None,
    }
}

/// Stage file as produced by the setup wizard
pub const SAMPLE_STAGE_JSON: &str = r#"{
  "env": {
    "account": "123456789012",
    "region": "eu-west-1"
  },
  "modelName": "demo-model",
  "endpointMemorySize": 2048,
  "endpointMaxConcurrency": 5,
  "endpointType": "serverless",
  "huggingFaceTokenizer": "distilbert-base-uncased",
  "huggingFaceModel": "distilbert-base-uncased"
}"#;

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
endpoint:
  name: "demo-model-Endpoint"
  region: "eu-west-1"

server:
  host: "127.0.0.1"
  port: 3000
  mode: "local"
  logs:
    level: "debug"

stages:
  dir: "infra/stages"
"#;
