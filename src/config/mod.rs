mod types;

pub use types::*;

use crate::{Error, Result, stage};
use std::{env, path::Path};
use tracing::debug;

pub const ENDPOINT_NAME_VAR: &str = "SAGEMAKER_ENDPOINT_NAME";
pub const REGION_VAR: &str = "AWS_REGION";
pub const STAGE_VAR: &str = "STAGE";

/// Set by the Lambda execution environment.
pub const LAMBDA_RUNTIME_VAR: &str = "AWS_LAMBDA_RUNTIME_API";

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

impl RuntimeMode {
    pub fn runs_in_lambda(self) -> bool {
        match self {
            Self::Auto => env::var_os(LAMBDA_RUNTIME_VAR).is_some(),
            Self::Lambda => true,
            Self::Local => false,
        }
    }
}

/// Loads the process configuration once at start-up.
///
/// `CONFIG_PATH` points at a YAML file; without it `config.yaml` is used when
/// present and defaults otherwise. Environment overrides are applied last.
pub async fn load() -> Result<Config> {
    let mut config = match env::var("CONFIG_PATH") {
        Ok(path) => from_file(&path).await?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => from_file(DEFAULT_CONFIG_PATH).await?,
        Err(_) => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    config.apply_overrides(|key| env::var(key).ok());

    Ok(config)
}

pub async fn from_file(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    /// Overlays `SAGEMAKER_ENDPOINT_NAME`, `AWS_REGION` and `STAGE`.
    /// Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(name) = lookup(ENDPOINT_NAME_VAR) {
            self.endpoint.name = Some(name);
        }
        if let Some(region) = lookup(REGION_VAR) {
            self.endpoint.region = Some(region);
        }
        if let Some(stage) = lookup(STAGE_VAR) {
            self.stages.active = Some(stage);
        }
    }

    /// Resolves the endpoint to invoke. Explicit values win; anything missing
    /// is derived from the active stage file.
    pub async fn endpoint_target(&self) -> Result<EndpointTarget> {
        if let (Some(name), Some(region)) = (&self.endpoint.name, &self.endpoint.region) {
            return Ok(EndpointTarget {
                name: name.clone(),
                region: region.clone(),
            });
        }

        let Some(active) = &self.stages.active else {
            let available = stage::list(&self.stages.dir).await.unwrap_or_default();
            let available = if available.is_empty() {
                "none".to_string()
            } else {
                available.join(", ")
            };
            return Err(Error::config(format!(
                "SageMaker endpoint name and region are required: set {ENDPOINT_NAME_VAR} and {REGION_VAR}, \
                 or select a stage with {STAGE_VAR} (available stages: {available})"
            )));
        };

        debug!("Resolving endpoint from stage: {}", active);
        let stage = stage::load(&self.stages.dir, active).await?;

        Ok(EndpointTarget {
            name: self
                .endpoint
                .name
                .clone()
                .unwrap_or_else(|| stage.endpoint_name()),
            region: self
                .endpoint
                .region
                .clone()
                .unwrap_or_else(|| stage.env.region.clone()),
        })
    }
}
