//! Review tool configuration

use dsreview_core::relations::ClusterLimits;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{config_error, io_error, Result};

pub const DEFAULT_CONFIG_FILE: &str = "dsreview.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Directory holding the exports and the label file
    pub data_dir: PathBuf,

    /// Question export, relative to `data_dir`
    pub questions_file: String,

    /// Answer-option export, relative to `data_dir`
    pub answers_file: String,

    /// Label file, relative to `data_dir`; created on first label
    pub labels_file: String,

    pub page_size: usize,

    /// Characters kept in bulk-delete companion previews
    pub preview_chars: usize,

    /// HTTP listen address
    pub bind: String,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data/v0"),
            questions_file: "QuestionsGenerated_04_11.csv".to_string(),
            answers_file: "AnswerOptions_04_11.csv".to_string(),
            labels_file: "judge_prompts.csv".to_string(),
            page_size: dsreview_core::DEFAULT_PAGE_SIZE,
            preview_chars: 100,
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

impl ReviewConfig {
    /// Parse a TOML config file
    ///
    /// # Errors
    ///
    /// `Io` when the file cannot be read, `InvalidInput` when it is not valid TOML
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| io_error("load_config", e))?;
        toml::from_str(&content).map_err(|e| config_error(path, e))
    }

    /// Load `path` when it exists, otherwise use defaults
    ///
    /// # Errors
    ///
    /// Same as [`ReviewConfig::from_file`] for an existing file
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn questions_path(&self) -> PathBuf {
        self.data_dir.join(&self.questions_file)
    }

    pub fn answers_path(&self) -> PathBuf {
        self.data_dir.join(&self.answers_file)
    }

    pub fn labels_path(&self) -> PathBuf {
        self.data_dir.join(&self.labels_file)
    }

    pub fn cluster_limits(&self) -> ClusterLimits {
        ClusterLimits {
            preview_chars: self.preview_chars,
            ..ClusterLimits::default()
        }
    }
}
