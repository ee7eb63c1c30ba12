use std::path::PathBuf;

use clap::Parser;
use verifyx::config::Overrides;

/// Interactive console for exercising the Todo REST API by hand.
///
/// Only configuration is taken from the command line; tests are always
/// chosen through the menus.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a verifyx.toml config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Base address of the Todo API, e.g. http://localhost:60157/api/todo
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Directory receiving the daily execution logs
    #[arg(long, value_name = "DIR")]
    pub logs_dir: Option<PathBuf>,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            base_url: self.base_url.clone(),
            logs_dir: self.logs_dir.clone(),
        }
    }
}
