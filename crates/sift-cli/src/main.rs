//! Sift CLI - Classify search client failures from the command line

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{classify, codes, completions, config as config_cmd};
use config::Config;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "sift")]
#[command(author, version, about = "Map search engine failures onto data-access error categories")]
pub struct Cli {
    /// Output format: table, json (default from config)
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Config file path
    #[arg(short, long, global = true, env = "SIFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the config file path
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(config::config_file_path)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a failure chain and classify it
    Classify(classify::ClassifyArgs),
    /// List search engine status codes and their categories
    Codes,
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
    /// Manage configuration
    Config(config_cmd::ConfigArgs),
}

/// Application context with loaded configuration
pub struct AppContext {
    pub config: Config,
    pub format: OutputFormat,
}

impl AppContext {
    pub fn new(cli: &Cli) -> anyhow::Result<Self> {
        let path = cli.config_path();
        tracing::debug!("Using config at: {:?}", path);

        let config = Config::load(&path)?;
        let format = OutputFormat::from(cli.format.as_deref().unwrap_or(&config.format));

        Ok(Self { config, format })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting sift CLI");

    match &cli.command {
        Commands::Completions(args) => completions::run(args)?,
        Commands::Config(args) => config_cmd::run(args, &cli)?,
        Commands::Classify(args) => {
            let ctx = AppContext::new(&cli)?;
            classify::run(args, &ctx)?
        }
        Commands::Codes => {
            let ctx = AppContext::new(&cli)?;
            codes::run(&ctx)?
        }
    }

    Ok(())
}
