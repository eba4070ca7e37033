//! Backend selection configuration.

use adledger_core::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env::{self, VarError};

const BACKEND_VAR: &str = "ADLEDGER_STORAGE";
const REMOTE_URL_VAR: &str = "ADLEDGER_REMOTE_URL";

/// Which record store the application persists to.
///
/// Defaults to the in-memory backend when nothing is configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StorageConfig {
    #[default]
    Memory,
    Remote {
        #[serde(rename = "baseUrl")]
        base_url: String,
    },
}

impl StorageConfig {
    /// Reads the backend selection from `ADLEDGER_STORAGE` ("memory" or
    /// "remote") and, for the remote backend, `ADLEDGER_REMOTE_URL`.
    pub fn from_env() -> Result<Self> {
        match env::var(BACKEND_VAR) {
            Ok(value) if value.eq_ignore_ascii_case("memory") => Ok(StorageConfig::Memory),
            Ok(value) if value.eq_ignore_ascii_case("remote") => {
                let base_url = env::var(REMOTE_URL_VAR).map_err(|_| {
                    Error::InvalidConfigValue(format!(
                        "{REMOTE_URL_VAR} must be set when {BACKEND_VAR}=remote"
                    ))
                })?;
                Ok(StorageConfig::Remote { base_url })
            }
            Ok(other) => Err(Error::InvalidConfigValue(format!(
                "{BACKEND_VAR} must be 'memory' or 'remote', got '{other}'"
            ))),
            Err(VarError::NotPresent) => Ok(StorageConfig::Memory),
            Err(e) => Err(Error::ConfigIO(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserializes_from_tagged_json() {
        let memory: StorageConfig = serde_json::from_str(r#"{"backend":"memory"}"#).unwrap();
        assert_eq!(memory, StorageConfig::Memory);

        let remote: StorageConfig =
            serde_json::from_str(r#"{"backend":"remote","baseUrl":"http://localhost:4000"}"#)
                .unwrap();
        assert_eq!(
            remote,
            StorageConfig::Remote {
                base_url: "http://localhost:4000".to_string()
            }
        );
    }

    #[test]
    fn test_default_is_memory() {
        assert_eq!(StorageConfig::default(), StorageConfig::Memory);
    }
}
