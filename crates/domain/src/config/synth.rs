use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

/// Settings for the record synthesizer.
///
/// Shared read-only across all in-flight queries; never mutated after
/// startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SynthConfig {
    /// Domain under which generated forward names live, without leading or
    /// trailing dot (e.g. `"v6.example.com"`).
    #[serde(default)]
    pub suffix: String,

    /// TTL applied to every synthesized answer record.
    #[serde(default = "default_ttl")]
    pub ttl: u32,

    /// Static PTR answers keyed by the exact reverse-lookup name
    /// (lowercase, fully qualified). Consulted before the algorithmic
    /// transform.
    #[serde(default)]
    pub presets: HashMap<String, String>,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            suffix: String::new(),
            ttl: default_ttl(),
            presets: HashMap::new(),
        }
    }
}

fn default_ttl() -> u32 {
    3600
}

impl SynthConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.suffix.is_empty() {
            return Err(ConfigError::Validation(
                "synth suffix must be configured".to_string(),
            ));
        }
        if self.suffix.starts_with('.') || self.suffix.ends_with('.') {
            return Err(ConfigError::Validation(format!(
                "synth suffix '{}' must not have leading or trailing dots",
                self.suffix
            )));
        }

        for (name, target) in &self.presets {
            if !name.ends_with('.') {
                return Err(ConfigError::Validation(format!(
                    "preset name '{}' must be fully qualified (trailing dot)",
                    name
                )));
            }
            if !target.ends_with('.') {
                return Err(ConfigError::Validation(format!(
                    "preset target '{}' must be fully qualified (trailing dot)",
                    target
                )));
            }
        }

        Ok(())
    }
}
