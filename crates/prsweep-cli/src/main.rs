//! prsweep - Pull Request hazard sweeper CLI
//!
//! The `prsweep` command scans the files changed in a pull request for
//! unresolved merge-conflict markers and leftover debug calls, posts a
//! report for each hazard class as a PR comment, and fails when anything
//! was found.
//!
//! ## Commands
//!
//! - `check`: Run the full check against a pull request and post reports
//! - `scan`: Scan files in a local working tree without talking to GitHub

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};

use prsweep_core::{
    analyze_files, build_conflict_report, build_debug_report, CheckPipeline, CheckVerdict,
    PullRequestRef,
};
use prsweep_github::{split_repository, GithubClient, GithubConfig};

#[derive(Parser)]
#[command(name = "prsweep")]
#[command(author = "Prsweep Maintainers")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Sweep pull requests for conflict markers and leftover debug calls", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a pull request and post hazard reports as comments
    Check {
        /// GitHub token (falls back to INPUT_TOKEN for action runs)
        #[arg(long, env = "GITHUB_TOKEN")]
        token: Option<String>,

        /// Repository as owner/repo
        #[arg(long, env = "GITHUB_REPOSITORY")]
        repo: Option<String>,

        /// Pull request number (default: read from the Actions event payload)
        #[arg(long)]
        pr: Option<u64>,

        /// GitHub API base URL (default: GITHUB_API_URL, then api.github.com)
        #[arg(long)]
        api_url: Option<String>,

        /// Working tree holding the changed files
        #[arg(long, default_value = ".")]
        workspace: PathBuf,
    },

    /// Scan local files without talking to GitHub
    Scan {
        /// Files to scan, relative to the workspace
        #[arg(required = true)]
        paths: Vec<String>,

        /// Working tree holding the files
        #[arg(long, default_value = ".")]
        workspace: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    prsweep_core::init_tracing(cli.json, level);

    match cli.command {
        Commands::Check {
            token,
            repo,
            pr,
            api_url,
            workspace,
        } => cmd_check(token, repo, pr, api_url.as_deref(), &workspace).await,
        Commands::Scan { paths, workspace } => cmd_scan(&paths, &workspace).await,
    }
}

/// Resolve the GitHub token.
///
/// The flag (or `GITHUB_TOKEN`, via clap) wins; `INPUT_TOKEN` covers runs
/// where the token arrives as an action input.
fn resolve_token(flag: Option<String>) -> Result<String> {
    flag.or_else(|| std::env::var("INPUT_TOKEN").ok())
        .context("A GitHub token is required (--token, GITHUB_TOKEN, or INPUT_TOKEN)")
}

/// Resolve the pull request number.
///
/// The flag wins; otherwise the Actions event payload named by
/// `GITHUB_EVENT_PATH` is consulted. `Ok(None)` means there is no pull
/// request to check.
async fn resolve_pr_number(flag: Option<u64>) -> Result<Option<u64>> {
    if flag.is_some() {
        return Ok(flag);
    }

    let Ok(event_path) = std::env::var("GITHUB_EVENT_PATH") else {
        return Ok(None);
    };

    let number = prsweep_github::pull_request_number(&event_path)
        .await
        .with_context(|| format!("Failed to resolve pull request from {}", event_path))?;
    Ok(number)
}

async fn cmd_check(
    token: Option<String>,
    repo: Option<String>,
    pr_number: Option<u64>,
    api_url: Option<&str>,
    workspace: &Path,
) -> Result<()> {
    let token = resolve_token(token)?;

    let Some(number) = resolve_pr_number(pr_number).await? else {
        info!("Not running in a pull request context, nothing to check");
        return Ok(());
    };

    let repo = repo.context("A repository is required (--repo or GITHUB_REPOSITORY)")?;
    let (owner, name) = split_repository(&repo)?;
    let pr = PullRequestRef::new(&owner, &name, number);

    let mut config = GithubConfig::new(token);
    if let Some(api_url) = api_url {
        config = config.with_api_url(api_url);
    }
    let host = Arc::new(GithubClient::new(config)?);

    println!("Checking {} for merge hazards", pr);
    println!("Workspace: {:?}", workspace);
    println!();

    let outcome = CheckPipeline::run(host, &pr, workspace)
        .await
        .context("Hazard check failed to run")?;

    println!("Run ID: {}", outcome.run_id);
    println!("Files listed: {}", outcome.files_listed);
    println!("Files scanned: {}", outcome.files_scanned);
    if outcome.files_skipped > 0 {
        println!("Files skipped: {}", outcome.files_skipped);
    }
    println!("Comments posted: {}", outcome.comments_posted);
    println!("Duration: {}ms", outcome.duration_ms);
    println!();

    match outcome.failure_message() {
        None => {
            println!("✓ No hazards found");
            Ok(())
        }
        Some(message) => {
            println!("✗ {}", message);
            anyhow::bail!("{}", message)
        }
    }
}

async fn cmd_scan(paths: &[String], workspace: &Path) -> Result<()> {
    let analyses = analyze_files(workspace, paths).await;

    if let Some(report) = build_conflict_report(&analyses) {
        println!("{}", report);
    }
    if let Some(report) = build_debug_report(&analyses) {
        println!("{}", report);
    }

    println!("Scanned {}/{} file(s)", analyses.len(), paths.len());

    let verdict = CheckVerdict::from_analyses(&analyses);
    match verdict.failure_message() {
        None => {
            println!("✓ No hazards found");
            Ok(())
        }
        Some(message) => {
            println!("✗ {}", message);
            anyhow::bail!("{}", message)
        }
    }
}
