// src/main.rs
use std::path::PathBuf;
use std::process::exit;
use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use chrono::Utc;
use tracing::{info, debug, error};
use tracing_subscriber::EnvFilter;

use pwnfinder::config::Config;
use pwnfinder::core::resolve_targets;
use pwnfinder::osint::{BreachLookupClient, DumpLocator, DumpSource};
use pwnfinder::utils::HttpClient;
use pwnfinder::{renderer_for, LookupWorkflow, ReportFormat};

#[derive(Parser)]
#[command(name = "pwnfinder", version)]
#[command(about = "Find in which dumps the credentials (username/email) provided are pwned")]
#[command(group(ArgGroup::new("input").required(true).multiple(true).args(["target", "target_file"])))]
struct Args {
    /// List of targets to search for pwned credentials
    #[arg(short = 't', long, num_args = 1..)]
    target: Vec<String>,

    /// Load targets from a file, one per line (takes precedence over --target)
    #[arg(short = 'T', long)]
    target_file: Option<PathBuf>,

    /// Attempt to find a downloadable dump for every breach found
    #[arg(short = 'D', long)]
    find_dumps: bool,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "pwnfinder=debug" } else { "pwnfinder=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // Reports own stdout; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(args: Args) -> Result<()> {
    let config = Config::load(args.config.as_deref())
        .context("Failed to load configuration")?;

    let targets = resolve_targets(&args.target, args.target_file.as_deref())
        .await
        .context("Failed to resolve targets")?;

    let http = HttpClient::from_config(&config.global)
        .context("Failed to create HTTP client")?;
    info!("Using user agent {}", http.user_agent());

    let breaches = BreachLookupClient::new(http.clone(), config.breach_api.clone());
    let dumps: Option<Box<dyn DumpSource>> = if args.find_dumps {
        Some(Box::new(DumpLocator::new(http, config.dump_search.clone())))
    } else {
        None
    };

    let renderer = renderer_for(args.format, Utc::now());
    debug!("Rendering {:?} reports", renderer.supported_format());

    let workflow = LookupWorkflow::new(Box::new(breaches), dumps, renderer);
    let mut stdout = std::io::stdout();
    workflow.run(&targets, &mut stdout).await?;

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args).await {
        error!("{:#}", e);
        exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "pwnfinder", "-t", "alice", "bob@example.com", "-D", "--format", "json",
        ]).unwrap();

        assert_eq!(args.target, vec!["alice", "bob@example.com"]);
        assert!(args.find_dumps);
        assert_eq!(args.format, ReportFormat::Json);
        assert!(args.target_file.is_none());
    }

    #[test]
    fn test_requires_an_input() {
        assert!(Args::try_parse_from(["pwnfinder", "-D"]).is_err());
        assert!(Args::try_parse_from(["pwnfinder", "-T", "targets.txt"]).is_ok());
    }
}
