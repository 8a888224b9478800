pub mod coverage;
pub mod stats;
