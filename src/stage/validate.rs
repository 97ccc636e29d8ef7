use super::types::{EndpointType, StageEnvironment};
use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid name pattern"));

static ACCOUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{12}$").expect("valid account pattern"));

static S3_PATH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^s3://([^/]+)/([\w\W]+)\.(.*)").expect("valid S3 path pattern")
});

pub const REGIONS: &[&str] = &[
    "us-east-2",
    "us-east-1",
    "us-west-1",
    "us-west-2",
    "af-south-1",
    "ap-southeast-3",
    "ap-south-1",
    "ap-northeast-3",
    "ap-northeast-2",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-northeast-1",
    "ca-central-1",
    "eu-central-1",
    "eu-west-1",
    "eu-west-2",
    "eu-south-1",
    "eu-west-3",
    "eu-north-1",
    "me-south-1",
    "me-central-1",
    "sa-east-1",
];

pub const MEMORY_SIZES_MB: &[u32] = &[1024, 2048, 3072, 4096, 5120, 6144];

pub fn validate_stage_name(name: &str) -> Result<()> {
    if !NAME_PATTERN.is_match(name) {
        return Err(Error::invalid_stage(
            "stageName",
            "only alphanumerics and - and _ are allowed",
        ));
    }
    Ok(())
}

impl StageEnvironment {
    pub fn validate(&self) -> Result<()> {
        if !ACCOUNT_PATTERN.is_match(&self.env.account) {
            return Err(Error::invalid_stage(
                "env.account",
                format!("'{}' is not a valid AWS account number", self.env.account),
            ));
        }

        if !REGIONS.contains(&self.env.region.as_str()) {
            return Err(Error::invalid_stage(
                "env.region",
                format!("unsupported region '{}'", self.env.region),
            ));
        }

        if !NAME_PATTERN.is_match(&self.model_name) {
            return Err(Error::invalid_stage(
                "modelName",
                "only alphanumerics and - and _ are allowed",
            ));
        }

        if let Some(path) = &self.model_s3_path {
            if !S3_PATH_PATTERN.is_match(path) {
                return Err(Error::invalid_stage(
                    "modelS3Path",
                    format!("'{}' is not a valid S3 path", path),
                ));
            }
        }

        match self.endpoint_type {
            EndpointType::Serverless => {
                if let Some(memory) = self.endpoint_memory_size {
                    if !MEMORY_SIZES_MB.contains(&memory) {
                        return Err(Error::invalid_stage(
                            "endpointMemorySize",
                            format!("{} MB is not one of {:?}", memory, MEMORY_SIZES_MB),
                        ));
                    }
                }
                if let Some(concurrency) = self.endpoint_max_concurrency {
                    if !(1..=200).contains(&concurrency) {
                        return Err(Error::invalid_stage(
                            "endpointMaxConcurrency",
                            "enter a value between 1 and 200",
                        ));
                    }
                }
            }
            EndpointType::Instance => {
                if let Some(count) = self.instance_count {
                    if !(1..=20).contains(&count) {
                        return Err(Error::invalid_stage(
                            "instanceCount",
                            "enter a value between 1 and 20",
                        ));
                    }
                }
            }
        }

        Ok(())
    }
}
