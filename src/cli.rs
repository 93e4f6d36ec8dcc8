//! CLI argument parsing and dispatch

use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use ddply::defaults::CONFIG_ENV_VAR;
use ddply::deploy;
use ddply::error::{Error, Result};

/// Sets up modern PHP apps to work better when using Docker
#[derive(Parser, Debug)]
#[command(name = "ddply")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the application tree to deploy
    #[arg(value_name = "SOURCE")]
    source: Option<PathBuf>,

    /// Directory the application is deployed into
    #[arg(value_name = "DESTINATION")]
    destination: Option<PathBuf>,

    /// Load configuration from FILE instead of SOURCE/.ddply
    #[arg(short, long, value_name = "FILE", env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,

    /// Increase verbosity of running messages
    #[arg(short, long)]
    debug: bool,
}

impl Cli {
    /// Execute the deploy described by the parsed arguments.
    ///
    /// Missing positionals are reported here rather than by clap so the
    /// tool keeps its own exit code (1) for that case.
    pub fn execute(self) -> Result<()> {
        let default_level = if self.debug { "debug" } else { "info" };
        env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

        let (Some(source), Some(destination)) = (self.source, self.destination) else {
            return Err(Error::InvalidArguments);
        };

        deploy::run(&source, &destination, self.config.as_deref())
    }
}
