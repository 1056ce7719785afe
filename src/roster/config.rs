use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SCHOOL_NAME: &str = "School Management System";
const DEFAULT_EXPORT_FILE: &str = "students_export.csv";
const DEFAULT_REPORT_FILE: &str = "students_report.html";

/// Keys accepted by `roster config`.
pub const CONFIG_KEYS: [&str; 4] = [
    "school-name",
    "export-file",
    "report-file",
    "seed-sample-data",
];

/// Configuration for roster, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Heading of the printed report
    #[serde(default = "default_school_name")]
    pub school_name: String,

    /// Where `export` writes when no --output is given
    #[serde(default = "default_export_file")]
    pub export_file: String,

    /// Where `print` writes when no --output is given
    #[serde(default = "default_report_file")]
    pub report_file: String,

    /// Write the sample roster on first run
    #[serde(default = "default_seed")]
    pub seed_sample_data: bool,
}

fn default_school_name() -> String {
    DEFAULT_SCHOOL_NAME.to_string()
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

fn default_report_file() -> String {
    DEFAULT_REPORT_FILE.to_string()
}

fn default_seed() -> bool {
    true
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            school_name: default_school_name(),
            export_file: default_export_file(),
            report_file: default_report_file(),
            seed_sample_data: default_seed(),
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RosterError::Io)?;
        let config: RosterConfig =
            serde_json::from_str(&content).map_err(RosterError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RosterError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RosterError::Serialization)?;
        fs::write(config_path, content).map_err(RosterError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "school-name" => Some(self.school_name.clone()),
            "export-file" => Some(self.export_file.clone()),
            "report-file" => Some(self.report_file.clone()),
            "seed-sample-data" => Some(self.seed_sample_data.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        match key {
            "school-name" => self.school_name = non_empty(key, value)?,
            "export-file" => self.export_file = non_empty(key, value)?,
            "report-file" => self.report_file = non_empty(key, value)?,
            "seed-sample-data" => {
                self.seed_sample_data = match value.to_ascii_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    _ => return Err(format!("Invalid value for {}: {}", key, value)),
                }
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    /// All keys with their current values, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|v| (*key, v)))
            .collect()
    }
}

fn non_empty(key: &str, value: &str) -> std::result::Result<String, String> {
    if value.is_empty() {
        Err(format!("{} cannot be empty", key))
    } else {
        Ok(value.to_string())
    }
}
