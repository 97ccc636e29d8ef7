use serde::{Deserialize, Serialize};

pub const DEFAULT_INSTANCE_TYPE: &str = "ml.m5.xlarge";
pub const DEFAULT_INSTANCE_COUNT: u32 = 1;
pub const DEFAULT_MAX_CONCURRENCY: u32 = 2;
pub const DEFAULT_MEMORY_SIZE_MB: u32 = 4096;

/// One deployment stage, as stored in `<stages dir>/<name>.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageEnvironment {
    pub env: AwsEnvironment,
    pub model_name: String,
    pub endpoint_type: EndpointType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<u32>,
    /// Serverless memory in MB: 1024, 2048, 3072, 4096, 5120 or 6144.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_memory_size: Option<u32>,
    /// Serverless concurrent invocation limit, 1 to 200.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_max_concurrency: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_s3_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hugging_face_tokenizer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hugging_face_model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsEnvironment {
    pub account: String,
    pub region: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointType {
    Serverless,
    Instance,
}

/// Capacity of the endpoint's production variant with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointCapacity {
    Serverless {
        memory_size_mb: u32,
        max_concurrency: u32,
    },
    Instance {
        instance_type: String,
        instance_count: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    S3 {
        path: String,
    },
    HuggingFace {
        tokenizer: Option<String>,
        model: Option<String>,
    },
}

impl StageEnvironment {
    pub fn docker_image_name(&self) -> String {
        format!("{}-docker-image", self.model_name.to_lowercase())
    }

    pub fn endpoint_name(&self) -> String {
        format!("{}-Endpoint", self.model_name)
    }

    pub fn image_uri(&self) -> String {
        format!(
            "{}.dkr.ecr.{}.amazonaws.com/{}:latest",
            self.env.account,
            self.env.region,
            self.docker_image_name()
        )
    }

    pub fn capacity(&self) -> EndpointCapacity {
        match self.endpoint_type {
            EndpointType::Serverless => EndpointCapacity::Serverless {
                memory_size_mb: self.endpoint_memory_size.unwrap_or(DEFAULT_MEMORY_SIZE_MB),
                max_concurrency: self
                    .endpoint_max_concurrency
                    .unwrap_or(DEFAULT_MAX_CONCURRENCY),
            },
            EndpointType::Instance => EndpointCapacity::Instance {
                instance_type: self
                    .instance_type
                    .clone()
                    .unwrap_or_else(|| DEFAULT_INSTANCE_TYPE.to_string()),
                instance_count: self.instance_count.unwrap_or(DEFAULT_INSTANCE_COUNT),
            },
        }
    }

    pub fn model_source(&self) -> ModelSource {
        match &self.model_s3_path {
            Some(path) => ModelSource::S3 { path: path.clone() },
            None => ModelSource::HuggingFace {
                tokenizer: self.hugging_face_tokenizer.clone(),
                model: self.hugging_face_model.clone(),
            },
        }
    }
}
