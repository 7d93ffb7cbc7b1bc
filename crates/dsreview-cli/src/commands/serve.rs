//! Serve command
//!
//! Usage: dsreview serve [--bind <ADDR>]

use clap::Args;
use dsreview_core::logging_facility::{self, Profile};

use super::{CmdResult, GlobalArgs};

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Listen address, overriding `bind` from the config
    #[arg(long, env = "DSREVIEW_BIND")]
    pub bind: Option<String>,
}

/// Execute serve command
pub fn execute(global: &GlobalArgs, args: ServeArgs) -> CmdResult {
    // Server logs are on unless a profile was chosen explicitly
    if global.log_profile.is_none() {
        logging_facility::init(Profile::Development);
    }

    let mut config = global.review_config()?;
    if let Some(bind) = args.bind {
        config.bind = bind;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(dsreview_server::serve(config))?;
    Ok(())
}
