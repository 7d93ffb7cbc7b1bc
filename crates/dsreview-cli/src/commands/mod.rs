//! Subcommands and the options they share

pub mod diff;
pub mod label;
pub mod list;
pub mod serve;
pub mod show;
pub mod stats;

use clap::Args;
use dsreview_core::logging_facility::{self, Profile};
use dsreview_core::ReviewDataset;
use dsreview_store::config::DEFAULT_CONFIG_FILE;
use dsreview_store::{load_dataset, ReviewConfig};
use std::path::PathBuf;

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Config file (TOML); defaults apply when it does not exist
    #[arg(long, global = true, env = "DSREVIEW_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Directory holding the exports, overriding the config file
    #[arg(long, global = true, env = "DSREVIEW_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Logging profile (dev, prod, test); logging is off when not given
    #[arg(long, global = true, env = "DSREVIEW_LOG")]
    pub log_profile: Option<Profile>,
}

impl GlobalArgs {
    pub fn init_logging(&self) {
        if let Some(profile) = self.log_profile {
            logging_facility::init(profile);
        }
    }

    /// Config file contents with command-line overrides applied
    pub fn review_config(&self) -> Result<ReviewConfig, Box<dyn std::error::Error>> {
        let mut config = ReviewConfig::load_or_default(&self.config)?;
        if let Some(data_dir) = &self.data_dir {
            config = config.with_data_dir(data_dir);
        }
        Ok(config)
    }

    pub fn dataset(&self) -> Result<(ReviewConfig, ReviewDataset), Box<dyn std::error::Error>> {
        let config = self.review_config()?;
        let dataset = load_dataset(&config)?;
        Ok((config, dataset))
    }
}

/// First `max` characters of `text` on one line, with an ellipsis when cut
pub fn one_line(text: &str, max: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max {
        flat
    } else {
        let cut: String = flat.chars().take(max).collect();
        format!("{}…", cut)
    }
}
