//! Runtime configuration: which instruction names to hash and where the
//! secret key comes from.
//!
//! ```json
//! {
//!   "instructions": ["swap", "create_pool"],
//!   "secret_source": { "env": "SECRET_KEY" }
//! }
//! ```

use std::{fs, path::{Path, PathBuf}};

use serde::Deserialize;
use tracing::debug;

use crate::{
    constants::{DEFAULT_INSTRUCTIONS, DEFAULT_SECRET_ENV},
    types::ToolError,
};

/// Where the base58 secret key is read from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretSource {
    /// Name of an environment variable
    Env(String),
    /// Path of a file containing the base58 string
    File(PathBuf),
}

impl Default for SecretSource {
    fn default() -> Self {
        SecretSource::Env(DEFAULT_SECRET_ENV.to_string())
    }
}

impl SecretSource {
    /// Read the base58 secret, trimmed of surrounding whitespace
    pub fn resolve(&self) -> Result<String, ToolError> {
        let secret = match self {
            SecretSource::Env(var) => {
                debug!(var = %var, "reading secret key from environment");
                std::env::var(var)
                    .map_err(|_| ToolError::MissingSecret(format!("environment variable {} is not set", var)))?
            }
            SecretSource::File(path) => {
                debug!(path = %path.display(), "reading secret key from file");
                fs::read_to_string(path)
                    .map_err(|e| ToolError::SecretFile(format!("{}: {}", path.display(), e)))?
            }
        };

        let secret = secret.trim();
        if secret.is_empty() {
            return Err(ToolError::MissingSecret(format!("{:?} is empty", self)));
        }
        Ok(secret.to_string())
    }
}

fn default_instructions() -> Vec<String> {
    DEFAULT_INSTRUCTIONS.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_instructions")]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub secret_source: SecretSource,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            instructions: default_instructions(),
            secret_source: SecretSource::default(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ToolError> {
        let config: Config =
            serde_json::from_str(json).map_err(|e| ToolError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ToolError> {
        debug!(path = %path.display(), "loading config");
        let json = fs::read_to_string(path)
            .map_err(|e| ToolError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Load from `path` if given, otherwise fall back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ToolError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ToolError> {
        if self.instructions.is_empty() {
            return Err(ToolError::Config("instruction list is empty".to_string()));
        }
        if self.instructions.iter().any(|name| name.is_empty()) {
            return Err(ToolError::EmptyInstructionName);
        }
        Ok(())
    }
}
