use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use vat_panel::report::TOP_N;
use vat_panel::{
    CompanyReport, Comparison, GlobalAnalysis, PanelBuilder, PanelConfig, export_panel,
    rank_by_vat,
};

/// Companies reported on when none are given
const DEFAULT_REPORT_COMPANIES: [&str; 5] = ["LVMH", "TotalEnergies", "L'Oréal", "Sanofi", "Airbus"];

/// Companies compared side by side by default
const DEFAULT_COMPARISON_SIZE: usize = 4;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Euronext VAT panel: synthesizes 2002-2025 fiscal data and reports on it"
)]
struct Args {
    /// Directory that receives the CSV, Parquet and JSON files
    #[arg(short, long, default_value = "output")]
    output: PathBuf,
    /// Base seed for reproducible synthetic series
    #[arg(short, long)]
    seed: Option<u64>,
    /// Generate companies one after another instead of on a thread pool
    #[arg(long)]
    sequential: bool,
    /// Worker threads for parallel generation
    #[arg(short, long)]
    threads: Option<usize>,
    /// Company to report on (repeatable)
    #[arg(short, long = "company")]
    companies: Vec<String>,
    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let start = Instant::now();

    let mut builder = PanelConfig::builder()
        .parallel(!args.sequential)
        .show_progress(!args.no_progress)
        .output_dir(&args.output);
    if let Some(seed) = args.seed {
        builder = builder.random_seed(seed);
    }
    if let Some(threads) = args.threads {
        builder = builder.num_threads(threads);
    }
    let config = builder.build().context("Invalid configuration")?;
    info!("{config}");

    let report_companies: Vec<String> = if args.companies.is_empty() {
        DEFAULT_REPORT_COMPANIES.iter().map(ToString::to_string).collect()
    } else {
        args.companies.clone()
    };

    let panel_builder = PanelBuilder::euronext().with_config(config.clone());
    // Fail before generating anything if a requested company is unknown
    panel_builder
        .universe()
        .restrict(&report_companies)
        .context("Invalid --company selection")?;

    let panel = panel_builder.build().context("Failed to build panel")?;
    let analysis = GlobalAnalysis::from_panel(&panel).context("Failed to analyse panel")?;

    let manifest = export_panel(&panel, &analysis, &config.output_dir)
        .with_context(|| format!("Failed to export to {}", config.output_dir.display()))?;
    info!(
        "Exported {} rows for {} companies to {}",
        manifest.rows,
        manifest.companies,
        config.output_dir.display()
    );

    println!("{analysis}");

    for company in &report_companies {
        let report = CompanyReport::build(&panel, company)
            .with_context(|| format!("Failed to build report for {company}"))?;
        println!("{report}");
    }

    let compared: Vec<&str> = report_companies
        .iter()
        .take(DEFAULT_COMPARISON_SIZE)
        .map(String::as_str)
        .collect();
    let comparison = Comparison::build(&panel, &compared).context("Failed to compare companies")?;
    println!("{comparison}");

    if let Some(year) = panel.latest_year() {
        println!("Companies ranked by VAT paid in {year}:");
        for entry in rank_by_vat(&panel, TOP_N) {
            println!("{entry}");
        }
    }

    info!("Finished in {:?}", start.elapsed());
    Ok(())
}
