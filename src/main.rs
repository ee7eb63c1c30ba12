mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use verifyx::config::{ConfigLoader, Overrides};
use verifyx::journal::Journal;
use verifyx::modules::default_registry;
use verifyx::runner::{InquirePrompter, TestRunner};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    verifyx::logger::init_logger();

    if let Err(e) = run(cli).await {
        println!("{} {:#}", "Critical error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let overrides = cli.overrides().or(Overrides::from_env());
    let config = ConfigLoader::load(cli.config.as_deref(), overrides)?;
    tracing::info!(
        base_url = %config.todo.base_url,
        logs_dir = %config.logs_dir.display(),
        "Configuration loaded"
    );

    let registry = default_registry(&config);
    let journal = Journal::new(config.logs_dir);
    let mut runner = TestRunner::new(registry, journal, InquirePrompter::new());

    runner.run().await?;
    Ok(())
}
