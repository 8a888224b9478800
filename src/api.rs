use crate::config::ReportConfig;
use crate::disc::DiscCategory;
use crate::error::BagResult;
use crate::loader::load_collection;
use crate::stats::{compute_bag_stats_with, BagStats};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::{info, warn};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BagReport {
    pub source: String,
    pub stats: BagStats,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCoverage {
    pub category: String,
    pub covered: bool,
    pub count: usize,
}

/// Service: load one inventory export and compute its statistics.
pub fn analyze_inventory<P: AsRef<Path>>(path: P, config: &ReportConfig) -> BagResult<BagReport> {
    let path = path.as_ref();
    config.validate()?;

    let discs = load_collection(path)?;
    let stats = compute_bag_stats_with(&discs, &config.stats_options());

    info!(
        "📊 {}: {} discs, {}",
        path.display(),
        stats.total_discs,
        stats.coverage_label()
    );

    Ok(BagReport {
        source: path.display().to_string(),
        stats,
    })
}

/// Service: analyze several exports in parallel. Results keep input order.
pub fn analyze_many(paths: &[String], config: &ReportConfig) -> Vec<(String, BagResult<BagReport>)> {
    paths
        .par_iter()
        .map(|p| {
            let result = analyze_inventory(p, config);
            if let Err(e) = &result {
                warn!("Skipping '{}': {}", p, e);
            }
            (p.clone(), result)
        })
        .collect()
}

/// For each recognized category, whether the bag holds any discs of it.
///
/// Labels are matched case-insensitively against the catalogue; labels
/// outside it do not appear here.
pub fn category_coverage(stats: &BagStats) -> Vec<CategoryCoverage> {
    DiscCategory::iter()
        .map(|category| {
            let count = stats
                .category_distribution
                .iter()
                .filter(|c| DiscCategory::from_label(&c.category) == Some(category))
                .map(|c| c.count)
                .sum();
            CategoryCoverage {
                category: category.to_string(),
                covered: count > 0,
                count,
            }
        })
        .collect()
}
