//! Command-line interface for the merger.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::catalog::SourceCatalog;
use crate::config::{is_remote, validate_platform_id, DEFAULT_PLATFORM, SOURCES_ENV};
use crate::error::{MergerError, Result};
use crate::injector::{inject_config, merge_locations};
use crate::merge::ConfMerger;

/// conf-merger - Merge injected settings into QuantumultX and Loon configurations.
#[derive(Parser)]
#[command(name = "conf-merger")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge an injected document into an original document.
    Merge {
        /// Original document (path or http(s) URL)
        #[arg(short = 'r', long)]
        original: String,

        /// Injected document (path or http(s) URL)
        #[arg(short, long)]
        inject: String,

        /// Platform identifier (quanx, loon)
        #[arg(short, long, default_value = DEFAULT_PLATFORM)]
        platform: String,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Resolve a platform/author pair through a source catalog, download and merge.
    Fetch {
        /// Platform identifier (quanx, loon)
        platform: String,

        /// Author of the original configuration
        author: String,

        /// Source catalog file (JSON, or YAML with .yaml/.yml extension)
        #[arg(short, long, env = SOURCES_ENV)]
        sources: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the canonical sections of a platform and their merge policies.
    Sections {
        /// Platform identifier (default: all platforms)
        platform: Option<String>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let merger = ConfMerger::default();

    match cli.command {
        Commands::Merge {
            original,
            inject,
            platform,
            output,
        } => merge_command(&merger, &original, &inject, &platform, output.as_deref()),
        Commands::Fetch {
            platform,
            author,
            sources,
            output,
        } => fetch_command(&merger, &platform, &author, sources.as_deref(), output.as_deref()),
        Commands::Sections { platform } => sections_command(&merger, platform.as_deref()),
    }
}

/// Execute the merge command.
fn merge_command(
    merger: &ConfMerger,
    original: &str,
    inject: &str,
    platform: &str,
    output: Option<&Path>,
) -> Result<()> {
    validate_platform_id(platform)?;

    let remote = is_remote(original) || is_remote(inject);
    let pb = remote.then(|| spinner("Downloading documents..."));

    let merged = match merge_locations(merger, original, inject, platform) {
        Ok(merged) => merged,
        Err(e) => {
            if let Some(pb) = &pb {
                pb.finish_and_clear();
            }
            return Err(e);
        }
    };
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    write_output(&merged, output)
}

/// Execute the fetch command.
fn fetch_command(
    merger: &ConfMerger,
    platform: &str,
    author: &str,
    sources: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    validate_platform_id(platform)?;
    let sources = sources.ok_or(MergerError::MissingCatalog(SOURCES_ENV))?;
    let catalog = SourceCatalog::from_path(sources)?;

    eprintln!(
        "{} {} for {}",
        style("Fetching").bold(),
        style(platform).cyan(),
        style(author).green()
    );

    let pb = spinner("Downloading original and injected documents...");
    let merged = match inject_config(merger, &catalog, platform, author) {
        Ok(merged) => merged,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };
    pb.finish_and_clear();

    write_output(&merged, output)
}

/// Execute the sections command.
fn sections_command(merger: &ConfMerger, platform: Option<&str>) -> Result<()> {
    let registry = merger.registry();
    let platforms: Vec<&str> = match platform {
        Some(platform) => vec![platform],
        None => registry.platform_ids().collect(),
    };

    for platform in platforms {
        if registry.get(platform).is_none() {
            eprintln!(
                "{} unknown platform '{}', showing the default platform",
                style("Note:").yellow().bold(),
                platform
            );
        }
        println!("{}", style(platform).bold());
        for section in registry.sections_for(platform) {
            let policy = registry.policy_for(platform, section);
            println!("  [{section}]  {}", style(policy).dim());
        }
    }

    Ok(())
}

/// Create a stderr spinner with a message.
fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(message);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Write the merged document to a file or stdout, with a trailing newline.
fn write_output(merged: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, format!("{merged}\n"))?;
            eprintln!(
                "{} {}",
                style("Saved to:").green().bold(),
                path.display()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{merged}")?;
        }
    }
    Ok(())
}
