use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use kanoscope::analysis::{aggregate, feature};
use kanoscope::catalog::FeatureCatalog;
use kanoscope::config::Config;
use kanoscope::{corpus, output};

/// Kanoscope: interview-transcript evidence mining for Kano-model
/// feature research.
///
/// Merges folders of plain-text interview transcripts into per-source
/// corpora, then mines them for literal feature-keyword mentions,
/// producing structured quote evidence and a frequency-ranked summary.
#[derive(Parser)]
#[command(name = "kanoscope", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge transcript folders into plain-text corpora
    Extract {
        /// Folder of offline (in-person) interview transcripts
        #[arg(long)]
        offline: Option<PathBuf>,

        /// Folder of online interview transcripts
        #[arg(long)]
        online: Option<PathBuf>,

        /// Single folder merged without the offline/online split
        #[arg(long, conflicts_with_all = ["offline", "online"])]
        all: Option<PathBuf>,

        /// Output directory for the merged corpora
        #[arg(long, default_value = "./output")]
        out: PathBuf,
    },

    /// Mine merged corpora for feature keyword evidence
    Analyze {
        /// Feature catalog JSON file
        #[arg(long)]
        features: PathBuf,

        /// Merged offline corpus (merged_offline.txt)
        #[arg(long)]
        offline: Option<PathBuf>,

        /// Merged online corpus (merged_online.txt)
        #[arg(long)]
        online: Option<PathBuf>,

        /// Single merged corpus used as both sources
        #[arg(long, conflicts_with_all = ["offline", "online"])]
        all: Option<PathBuf>,

        /// Output directory for kano_evidence.json and summary.txt
        #[arg(long, default_value = "./output")]
        out: PathBuf,

        /// Context window size in characters (overrides KANOSCOPE_CONTEXT_CHARS)
        #[arg(long)]
        context_chars: Option<usize>,

        /// Max quotes kept per feature per source (overrides KANOSCOPE_MAX_QUOTES)
        #[arg(long)]
        max_quotes: Option<usize>,

        /// Print each feature's evidence quotes to the terminal
        #[arg(long)]
        details: bool,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kanoscope=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            offline,
            online,
            all,
            out,
        } => {
            if all.is_none() && offline.is_none() && online.is_none() {
                anyhow::bail!("provide --all, or at least one of --offline / --online");
            }

            fs::create_dir_all(&out)
                .with_context(|| format!("failed to create output directory: {}", out.display()))?;

            if let Some(folder) = all {
                merge_and_write(&folder, &out.join("merged_all.txt"))?;
            } else {
                for (label, folder) in [("offline", offline), ("online", online)] {
                    let Some(folder) = folder else { continue };
                    merge_and_write(&folder, &out.join(format!("merged_{label}.txt")))?;
                }
            }

            println!("\n{}", "Extraction complete.".bold());
        }

        Commands::Analyze {
            features,
            offline,
            online,
            all,
            out,
            context_chars,
            max_quotes,
            details,
        } => {
            let config = Config::load()?;
            let params = feature::AnalyzerParams {
                context_chars: context_chars.unwrap_or(config.context_chars),
                max_quotes_per_feature: max_quotes.unwrap_or(config.max_quotes_per_feature),
            };

            let catalog = FeatureCatalog::load(&features)?;
            if catalog.is_empty() {
                println!("Feature catalog is empty; nothing to analyze.");
                return Ok(());
            }
            info!(features = catalog.len(), "Loaded feature catalog");

            let (offline_text, online_text) = if all.is_some() {
                let text = corpus::read_merged(all.as_deref());
                (text.clone(), text)
            } else {
                (
                    corpus::read_merged(offline.as_deref()),
                    corpus::read_merged(online.as_deref()),
                )
            };

            println!(
                "Offline: {} chars | Online: {} chars\n",
                offline_text.chars().count(),
                online_text.chars().count()
            );

            let mut results = Vec::with_capacity(catalog.len());
            for def in catalog.features() {
                let result = feature::analyze_feature(def, &offline_text, &online_text, &params);
                println!(
                    "  [{}] off={} on={} total={}",
                    result.feature, result.offline_count, result.online_count, result.total_count
                );
                results.push(result);
            }

            fs::create_dir_all(&out)
                .with_context(|| format!("failed to create output directory: {}", out.display()))?;

            let evidence_path = out.join("kano_evidence.json");
            fs::write(&evidence_path, aggregate::evidence_json(&results)?)
                .with_context(|| format!("failed to write {}", evidence_path.display()))?;

            let summary_path = out.join("summary.txt");
            fs::write(&summary_path, aggregate::summary_table(&results))
                .with_context(|| format!("failed to write {}", summary_path.display()))?;

            output::terminal::display_summary(&results);

            if details {
                for result in &results {
                    output::terminal::display_feature_detail(result);
                }
            }

            println!("\n{}", "Analysis complete.".bold());
            println!("  Evidence: {}", evidence_path.display());
            println!("  Summary:  {}", summary_path.display());
        }
    }

    Ok(())
}

/// Merge one transcript folder and write the corpus file.
fn merge_and_write(folder: &Path, out_path: &Path) -> Result<()> {
    println!("Merging transcripts from {}...", folder.display());
    let text = corpus::merge_folder(folder);
    fs::write(out_path, &text)
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    println!(
        "  {} {} ({} chars)",
        "Wrote".green(),
        out_path.display(),
        text.chars().count()
    );
    Ok(())
}
