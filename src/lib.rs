pub mod api;
pub mod config;
pub mod consts;
pub mod disc;
pub mod error;
pub mod loader;
pub mod stats;

pub use disc::{DiscCategory, DiscRecord, FlightNumbers};
pub use error::{BagResult, DiscBagError};
pub use stats::{compute_bag_stats, compute_bag_stats_with, BagStats, StatsOptions};
