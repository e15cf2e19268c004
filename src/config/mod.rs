use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const DEFAULT_IDLE_DELAY_MS: u64 = 1000;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Optional user dictionary (JSON object of misspelling -> replacement).
    pub dictionary_path: Option<PathBuf>,
    /// Whether autocorrect runs at all.
    pub enabled: bool,
    /// Idle time after the last edit before a correction pass fires.
    pub idle_delay_ms: u64,
    pub config_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/home/user".to_string());
        Self {
            dictionary_path: None,
            enabled: true,
            idle_delay_ms: DEFAULT_IDLE_DELAY_MS,
            config_path: PathBuf::from(&home).join(".config/mendpad/config.toml"),
        }
    }
}

impl Config {
    /// Load the config, tolerating a missing or unparseable file.
    pub fn load() -> Self {
        Self::load_from(Config::default().config_path)
    }

    pub fn load_from(config_path: PathBuf) -> Self {
        let mut config = Config {
            config_path,
            ..Config::default()
        };

        if let Ok(contents) = fs::read_to_string(&config.config_path) {
            if let Ok(parsed) = contents.parse::<toml_edit::DocumentMut>() {
                if let Some(path) = parsed.get("dictionary").and_then(|v| v.as_str()) {
                    config.dictionary_path = Some(PathBuf::from(path));
                }
                if let Some(enabled) = parsed.get("enabled").and_then(|v| v.as_bool()) {
                    config.enabled = enabled;
                }
                if let Some(delay) = parsed.get("idle_delay_ms").and_then(|v| v.as_integer()) {
                    if delay > 0 {
                        config.idle_delay_ms = delay as u64;
                    }
                }
            }
        }

        config
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut doc = toml_edit::DocumentMut::new();
        if let Some(ref path) = self.dictionary_path {
            doc["dictionary"] = toml_edit::value(path.to_string_lossy().to_string());
        }
        doc["enabled"] = toml_edit::value(self.enabled);
        doc["idle_delay_ms"] = toml_edit::value(self.idle_delay_ms as i64);

        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.config_path, doc.to_string())?;
        Ok(())
    }
}
