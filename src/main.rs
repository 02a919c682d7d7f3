use crate::{
    error::NextTagError,
    repo::git::GitCli,
    types::config::{Config, OutputFormat, Resolved},
    utils::{
        logger::{LogLevel, Logger},
        version::get_version_with_signature,
    },
};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod error;
mod pipeline;
mod repo;
mod types;
mod utils;
mod version;

#[derive(Parser)]
#[command(name = "nexttag")]
#[command(author)]
#[command(about = "Computes the next vMAJOR.MINOR.PATCH tag of a git repository")]
#[command(disable_version_flag = true)]
struct Cli {
    /// Path to the git repository
    #[arg(long)]
    path: Option<PathBuf>,

    /// Major version to release on
    #[arg(long)]
    major: Option<u64>,

    /// Minor version to release on
    #[arg(long)]
    minor: Option<u64>,

    #[arg(long, default_value_t = false)]
    /// Print latest and next tag as a JSON object
    json: bool,

    #[arg(short, long, default_value_t = false)]
    /// Report progress on stderr
    verbose: bool,

    #[arg(short = 'V', long = "version", default_value_t = false)]
    /// Print version
    show_version: bool,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            path: self.path,
            major: self.major,
            minor: self.minor,
            output: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Plain
            },
            verbose: self.verbose,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.show_version {
        println!("{}", get_version_with_signature());
        return ExitCode::SUCCESS;
    }

    let config = cli.into_config();
    let logger = Logger::with_verbose(config.verbose);

    match run(&config, &logger) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            logger.log_message(LogLevel::Error, &format!("{:#}", err));
            match err.downcast_ref::<NextTagError>() {
                Some(NextTagError::MissingArgument(_)) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(config: &Config, logger: &Logger) -> anyhow::Result<()> {
    let Resolved { path, request } = config.resolve()?;

    let git = GitCli::from_env();
    logger.log_message(
        LogLevel::Debug,
        &format!("Using git at {}", git.program().display()),
    );

    let outcome = pipeline::compute(&git, &path, request, logger)?;
    logger.log_message(
        LogLevel::Success,
        &format!("{} -> {}", outcome.latest, outcome.next),
    );

    match config.output {
        OutputFormat::Plain => println!("{}", outcome.next),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string(&outcome).context("Failed to encode result as JSON")?
        ),
    }

    Ok(())
}
