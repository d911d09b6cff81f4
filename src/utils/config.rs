use crate::translation::MatchPolicy;
use crate::utils::errors::{FillError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CSV_FILE: &str = "app_translations.csv";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub files: FilesConfig,
    pub transform: TransformConfig,
    pub dictionary: DictionaryConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    pub input: PathBuf,
    /// Written in place over `input` when unset.
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    pub header_rows: usize,
    pub match_policy: MatchPolicy,
    pub strip_source_quotes: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Two-column `source,target` CSV layered over the builtin entries.
    pub extra_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_CSV_FILE),
            output: None,
        }
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            header_rows: 2,
            match_policy: MatchPolicy::Substring,
            strip_source_quotes: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl FilesConfig {
    pub fn output_path(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.input)
    }
}

impl AppConfig {
    pub fn load_from_file(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Err(FillError::FileNotFound(path.to_string()));
        }
        let content =
            std::fs::read_to_string(path).map_err(|e| FillError::ConfigError(e.to_string()))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FillError::ConfigError(e.to_string()))
    }

    /// Like [`load_from_file`](Self::load_from_file), but any failure yields
    /// the defaults together with the error that caused the fallback.
    pub fn load_or_default(path: &str) -> (Self, Option<FillError>) {
        match Self::load_from_file(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// `tracing` directive for this crate at the configured level.
    pub fn log_directive(&self) -> String {
        format!("l10n_csv_fill={}", self.logging.level)
    }
}
