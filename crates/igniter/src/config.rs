use serde::{Deserialize, Serialize};

/// Igniter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IgniterConfig {
    /// Directory holding the stored collections
    pub data_dir: String,

    /// Key of the training catalogue
    pub trainings_key: String,

    /// Key of the registrations
    pub registrations_key: String,

    /// Log level
    pub log_level: String,
}

impl Default for IgniterConfig {
    fn default() -> Self {
        Self {
            data_dir: ".igniter".to_string(),
            trainings_key: "igniter_trainings".to_string(),
            registrations_key: "igniter_registrations".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl IgniterConfig {
    /// Load from configuration file
    pub fn load_from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

        serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))
    }
}
