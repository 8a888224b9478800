/// Number of disc categories the system recognizes.
/// Consumers render coverage as "X of TOTAL_CATEGORIES".
pub const TOTAL_CATEGORIES: usize = 7;

/// Default length of the `topPlastics` ranking.
pub const TOP_PLASTICS_LIMIT: usize = 3;

/// Turn values at or below this are understable.
pub const UNDERSTABLE_TURN_MAX: f64 = -2.0;

/// Turn values above the understable bound and at or below this are stable.
/// Anything higher is overstable.
pub const STABLE_TURN_MAX: f64 = 0.0;
