use crate::reports;
use clap::Args;
use discbag::api::{analyze_inventory, category_coverage};
use discbag::config::{OutputFormat, ReportConfig};
use serde_json::json;
use tracing::error;

#[derive(Args, Debug, Clone)]
pub struct CoverageArgs {
    #[command(flatten)]
    pub config: ReportConfig,

    /// Inventory export (.json or .csv)
    pub file: String,
}

pub fn run(args: &CoverageArgs, config: &ReportConfig) -> bool {
    let report = match analyze_inventory(&args.file, config) {
        Ok(r) => r,
        Err(e) => {
            error!("❌ {}: {}", args.file, e);
            return false;
        }
    };

    let coverage = category_coverage(&report.stats);
    let label = report.stats.coverage_label();

    match config.format {
        OutputFormat::Table => reports::print_coverage_report(&coverage, &label),
        OutputFormat::Json => {
            let body = json!({
                "source": report.source,
                "label": label,
                "categoriesCount": report.stats.categories_count,
                "totalCategories": report.stats.total_categories,
                "coverage": coverage,
            });
            match serde_json::to_string_pretty(&body) {
                Ok(s) => println!("{}", s),
                Err(e) => {
                    error!("❌ Failed to serialize coverage: {}", e);
                    return false;
                }
            }
        }
    }
    true
}
