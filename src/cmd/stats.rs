use crate::reports;
use clap::Args;
use discbag::api::{analyze_many, BagReport};
use discbag::config::{OutputFormat, ReportConfig};
use tracing::error;

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub config: ReportConfig,

    /// Inventory exports (.json or .csv)
    #[arg(required = true)]
    pub files: Vec<String>,
}

/// Returns false if any file failed.
pub fn run(args: &StatsArgs, config: &ReportConfig) -> bool {
    let results = analyze_many(&args.files, config);

    let mut all_ok = true;
    let mut reports: Vec<BagReport> = Vec::with_capacity(results.len());
    for (path, result) in results {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                error!("❌ {}: {}", path, e);
                all_ok = false;
            }
        }
    }

    match config.format {
        OutputFormat::Json => match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("❌ Failed to serialize report: {}", e);
                all_ok = false;
            }
        },
        OutputFormat::Table => {
            for report in &reports {
                reports::print_summary(&report.source, &report.stats);
                reports::print_stability_report(&report.stats, config.by_category);
                reports::print_distributions(&report.stats);
            }
        }
    }

    all_ok
}
