pub mod aggregate;
pub mod normalize;
pub mod rank;
pub mod stability;

pub use aggregate::{BagAggregates, SpeedTally, Tally};
pub use normalize::{normalize, NormalizedDisc};
pub use stability::{Stability, StabilityBreakdown};

use crate::consts::{TOP_PLASTICS_LIMIT, TOTAL_CATEGORIES};
use crate::disc::DiscRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedRange {
    pub min: f64,
    pub max: f64,
}

impl SpeedRange {
    pub fn extend(self, speed: f64) -> Self {
        Self {
            min: self.min.min(speed),
            max: self.max.max(speed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCount {
    pub color: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedCount {
    pub speed: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStability {
    pub category: String,
    #[serde(flatten)]
    pub stability: StabilityBreakdown,
}

/// Aggregate analytics for one bag.
///
/// Field names serialize in camelCase and form the contract with the
/// renderers that consume this value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BagStats {
    pub total_discs: usize,
    pub speed_range: Option<SpeedRange>,
    pub top_brand: Option<NamedCount>,
    pub categories_count: usize,
    pub total_categories: usize,
    pub stability: StabilityBreakdown,
    /// First-encountered category order.
    pub stability_by_category: Vec<CategoryStability>,
    pub category_distribution: Vec<CategoryCount>,
    pub speed_distribution: Vec<SpeedCount>,
    pub top_plastics: Vec<NamedCount>,
    pub color_distribution: Vec<ColorCount>,
}

impl BagStats {
    pub fn stability_for(&self, category: &str) -> Option<&StabilityBreakdown> {
        self.stability_by_category
            .iter()
            .find(|c| c.category == category)
            .map(|c| &c.stability)
    }

    pub fn coverage_label(&self) -> String {
        format!(
            "{} of {} categories covered",
            self.categories_count, self.total_categories
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsOptions {
    pub top_plastics: usize,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            top_plastics: TOP_PLASTICS_LIMIT,
        }
    }
}

pub fn compute_bag_stats(discs: &[DiscRecord]) -> BagStats {
    compute_bag_stats_with(discs, &StatsOptions::default())
}

/// Derive [`BagStats`] from a collection of discs.
///
/// Never fails: missing data shows up as `None` or as an empty list.
pub fn compute_bag_stats_with(discs: &[DiscRecord], options: &StatsOptions) -> BagStats {
    let agg = BagAggregates::collect(discs.iter().map(normalize));
    let stats = assemble(agg, options);

    debug!(
        "Bag stats: {} discs, {} categories, {} speeds, stability {}/{}/{}",
        stats.total_discs,
        stats.categories_count,
        stats.speed_distribution.len(),
        stats.stability.understable,
        stats.stability.stable,
        stats.stability.overstable
    );

    stats
}

fn assemble(agg: BagAggregates, options: &StatsOptions) -> BagStats {
    let BagAggregates {
        total_discs,
        manufacturers,
        plastics,
        colors,
        categories,
        speeds,
        speed_range,
        stability,
        stability_by_category,
    } = agg;

    let categories_count = categories.distinct();

    let stability_by_category = categories
        .entries()
        .iter()
        .zip(stability_by_category)
        .map(|((category, _), stability)| CategoryStability {
            category: category.clone(),
            stability,
        })
        .collect();

    let top_brand =
        rank::leader(manufacturers.entries()).map(|(name, count)| NamedCount { name, count });

    let category_distribution = rank::rank_by_count(categories.into_entries())
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect();

    let color_distribution = rank::rank_by_count(colors.into_entries())
        .into_iter()
        .map(|(color, count)| ColorCount { color, count })
        .collect();

    let top_plastics = rank::top_n(
        rank::rank_by_count(plastics.into_entries()),
        options.top_plastics,
    )
    .into_iter()
    .map(|(name, count)| NamedCount { name, count })
    .collect();

    let speed_distribution = rank::rank_speeds(speeds)
        .into_iter()
        .map(|(speed, count)| SpeedCount { speed, count })
        .collect();

    BagStats {
        total_discs,
        speed_range,
        top_brand,
        categories_count,
        total_categories: TOTAL_CATEGORIES,
        stability,
        stability_by_category,
        category_distribution,
        speed_distribution,
        top_plastics,
        color_distribution,
    }
}
