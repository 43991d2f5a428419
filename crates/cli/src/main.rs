use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::{FetchEngine, FetchOutcome, TargetReport};
use manifest::{SoundManifest, SoundRequest};
use scoring::{Scorer, Verdict};
use sources::{CandidateSearch, YtDlpSearch};
use std::path::PathBuf;
use std::time::Instant;

/// SoundScout - batch audio clip acquisition
#[derive(Parser)]
#[command(name = "sound-scout")]
#[command(about = "Searches, scores, and downloads short audio clips", long_about = None)]
struct Cli {
    /// Path to a JSON sound manifest (uses the built-in set when omitted)
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Directory where downloaded artifacts are written
    #[arg(short, long, default_value = "assets/sounds")]
    output_dir: PathBuf,

    /// Number of search results to consider per request
    #[arg(long, default_value = "5")]
    limit: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search, score, and download every configured sound
    Fetch {
        /// Restrict the run to the named targets (repeatable)
        #[arg(long)]
        target: Vec<String>,
    },

    /// Search and score one ad-hoc query without downloading anything
    Probe {
        /// Free-text search query
        #[arg(long)]
        query: String,

        /// Soft duration bound in seconds used for scoring
        #[arg(long, default_value = "10")]
        max_duration: u32,
    },

    /// Show the configured request set
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let manifest = match &cli.manifest {
        Some(path) => SoundManifest::from_path(path)
            .with_context(|| format!("failed to load manifest {}", path.display()))?,
        None => SoundManifest::builtin(),
    };

    match cli.command {
        Commands::Fetch { target } => {
            handle_fetch(manifest, target, cli.output_dir, cli.limit).await?
        }
        Commands::Probe {
            query,
            max_duration,
        } => handle_probe(manifest, query, max_duration, cli.limit).await?,
        Commands::List => handle_list(&manifest),
    }

    Ok(())
}

/// Handle the 'fetch' command
async fn handle_fetch(
    manifest: SoundManifest,
    targets: Vec<String>,
    output_dir: PathBuf,
    limit: usize,
) -> Result<()> {
    let requests = if targets.is_empty() {
        manifest.requests.clone()
    } else {
        manifest.select_targets(&targets)?
    };

    let searcher = YtDlpSearch::default();
    // Missing yt-dlp is the one fatal condition; catch it before any request
    searcher
        .preflight()
        .await
        .context("yt-dlp is required but could not be executed")?;

    let scorer = Scorer::new(manifest.trusted_channels, manifest.weights);
    let acquirer = acquire::YtDlpAcquirer::default();
    let engine = FetchEngine::new(searcher, acquirer, scorer, limit, output_dir);

    println!("Fetching {} sound(s)...", requests.len());
    let start = Instant::now();
    let reports = engine.run(&requests).await?;
    println!(
        "{} Finished {} request(s) in {:?}",
        "✓".green(),
        reports.len(),
        start.elapsed()
    );

    print_summary(&reports);
    Ok(())
}

/// Handle the 'probe' command
async fn handle_probe(
    manifest: SoundManifest,
    query: String,
    max_duration: u32,
    limit: usize,
) -> Result<()> {
    let searcher = YtDlpSearch::default();
    searcher
        .preflight()
        .await
        .context("yt-dlp is required but could not be executed")?;

    let request = SoundRequest::new("probe", query.clone(), max_duration, "ad-hoc probe");
    let scorer = Scorer::new(manifest.trusted_channels, manifest.weights);

    let candidates = searcher
        .search(&query, limit)
        .await
        .context("candidate search failed")?;

    if candidates.is_empty() {
        println!("{} No results for '{}'", "∅".yellow(), query);
        return Ok(());
    }

    println!("{}", format!("Candidates for '{}':", query).bold());
    for candidate in &candidates {
        let verdict = match scorer.evaluate(candidate, &request) {
            Verdict::Accepted(score) => format!("score {:>2}", score).green(),
            Verdict::Rejected => "rejected".red(),
        };
        let followers = candidate
            .follower_count
            .map_or("?".to_string(), |n| n.to_string());
        let duration = candidate
            .duration_secs
            .map_or("?".to_string(), |d| format!("{}s", d));
        println!(
            "  [{}] {} — {} ({} followers, {})",
            verdict, candidate.title, candidate.channel_name, followers, duration
        );
    }
    Ok(())
}

/// Handle the 'list' command
fn handle_list(manifest: &SoundManifest) {
    println!("{}", "Configured sound requests:".bold());
    for request in &manifest.requests {
        println!(
            "  {} {} — \"{}\" (max {}s)",
            "•".cyan(),
            request.target_name.bold(),
            request.query,
            request.max_duration_secs
        );
        if !request.description.is_empty() {
            println!("      {}", request.description.dimmed());
        }
    }
    println!(
        "\nTrusted channels: {}",
        manifest.trusted_channels.entries().join(", ")
    );
}

/// Print the final per-target summary, bucketed by outcome.
fn print_summary(reports: &[TargetReport]) {
    let mut downloaded = 0;
    let mut no_candidate = 0;
    let mut failed = 0;

    println!("\n{}", "Summary".bold());
    for report in reports {
        match &report.outcome {
            FetchOutcome::Downloaded {
                title,
                channel,
                score,
                bytes,
            } => {
                downloaded += 1;
                println!(
                    "  {} {} — \"{}\" from {} (score {}, {} bytes)",
                    "✓".green(),
                    report.target_name.bold(),
                    title,
                    channel,
                    score,
                    bytes
                );
            }
            FetchOutcome::NoCandidate => {
                no_candidate += 1;
                println!(
                    "  {} {} — no suitable candidate found",
                    "∅".yellow(),
                    report.target_name.bold()
                );
            }
            FetchOutcome::DownloadFailed { reason } => {
                failed += 1;
                println!(
                    "  {} {} — download failed: {}",
                    "✗".red(),
                    report.target_name.bold(),
                    reason
                );
            }
        }
    }
    println!(
        "\n{} downloaded, {} without candidates, {} failed",
        downloaded.to_string().green(),
        no_candidate.to_string().yellow(),
        failed.to_string().red()
    );
}
