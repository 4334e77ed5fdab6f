use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use crate::config::{
    DEFAULT_BRANCH, DEFAULT_DATABASE_EXTENSION, DEFAULT_EXTENSION, DEFAULT_REPOSITORY,
    IndexConfig, default_base_url,
};
use crate::indexer::{IndexReport, build_index, run_index};
use crate::utils::get_repo_root;

#[derive(Parser)]
#[command(name = "climbs-indexer")]
#[command(version = "0.1.0")]
#[command(about = "Build the index.json of a climb dataset directory tree", long_about = None)]
pub struct Cli {
    /// Directory to index [default: enclosing git repository, else current directory]
    pub root: Option<PathBuf>,

    /// Where to write the index [default: <ROOT>/index.json]
    #[arg(short, long, env = "INDEX_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Repository recorded in the index, as owner/name
    #[arg(long, env = "REPO_NAME", default_value = DEFAULT_REPOSITORY)]
    pub repository: String,

    /// Branch used to derive the default download base URL
    #[arg(long, env = "INDEX_BRANCH", default_value = DEFAULT_BRANCH)]
    pub branch: String,

    /// Prefix of every download URL [default: raw.githubusercontent.com/<REPOSITORY>/<BRANCH>]
    #[arg(long, env = "INDEX_BASE_URL")]
    pub base_url: Option<String>,

    /// Extension of dataset files
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Extension of the optional per-region companion database
    #[arg(long, default_value = DEFAULT_DATABASE_EXTENSION)]
    pub database_extension: String,

    /// Print the index to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log every parsed file
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve defaults into the settings for this run
    pub fn to_config(&self) -> Result<IndexConfig> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => get_repo_root()?,
        };
        let base_url =
            self.base_url.clone().unwrap_or_else(|| default_base_url(&self.repository, &self.branch));

        let mut config = IndexConfig::new(root)
            .with_repository(&self.repository)
            .with_base_url(&base_url)
            .with_extension(&self.extension)
            .with_database_extension(&self.database_extension);
        if let Some(output) = &self.output {
            config = config.with_output(output);
        }
        Ok(config)
    }

    fn log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_level()))
        .format_timestamp(None)
        .init();

    let config = cli.to_config()?;

    if cli.dry_run {
        let report = build_index(&config)?;
        let json = serde_json::to_string_pretty(&report.document)
            .context("Failed to serialize index")?;
        println!("{}", json);
    } else {
        let report = run_index(&config)?;
        print_report(&config, &report);
    }

    Ok(())
}

fn print_report(config: &IndexConfig, report: &IndexReport) {
    let summary = &report.document.summary;

    println!("Index created at {}", config.output.display());
    println!("  - Regions: {}", summary.total_regions);
    println!(
        "  - Files: {} ({} regions with split files)",
        summary.total_files, summary.regions_with_split_files
    );
    println!("  - Databases: {}", summary.total_sqlite_files);
    println!("  - Skipped files: {}", report.skipped.len());
    println!("  - Total size: {:.1} MB", summary.total_size_mb);

    if summary.total_regions == 0 {
        println!();
        println!("No dataset files found under {}.", config.root.display());
        println!("The index has been written but is empty.");
        return;
    }

    println!();
    println!("Regions indexed:");
    for (key, region) in &report.document.regions {
        let database = if region.database_file.is_some() { ", database" } else { "" };
        println!(
            "  - {} ({}): {} file(s){}",
            region.region_name, key, region.file_count, database
        );
    }
}
