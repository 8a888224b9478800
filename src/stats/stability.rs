use crate::consts::{STABLE_TURN_MAX, UNDERSTABLE_TURN_MAX};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Stability {
    Understable,
    Stable,
    Overstable,
}

impl Stability {
    /// Classify a disc by its turn number.
    ///
    /// `-2` is understable and `0` is stable; both bounds are inclusive.
    /// NaN fails both comparisons and lands in `Overstable`, so every
    /// defined turn is counted exactly once.
    pub fn classify(turn: f64) -> Self {
        if turn <= UNDERSTABLE_TURN_MAX {
            Self::Understable
        } else if turn <= STABLE_TURN_MAX {
            Self::Stable
        } else {
            Self::Overstable
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StabilityBreakdown {
    pub understable: usize,
    pub stable: usize,
    pub overstable: usize,
}

impl StabilityBreakdown {
    pub fn record(&mut self, stability: Stability) {
        match stability {
            Stability::Understable => self.understable += 1,
            Stability::Stable => self.stable += 1,
            Stability::Overstable => self.overstable += 1,
        }
    }

    pub fn record_turn(&mut self, turn: f64) -> Stability {
        let stability = Stability::classify(turn);
        self.record(stability);
        stability
    }

    pub fn count(&self, stability: Stability) -> usize {
        match stability {
            Stability::Understable => self.understable,
            Stability::Stable => self.stable,
            Stability::Overstable => self.overstable,
        }
    }

    pub fn total(&self) -> usize {
        self.understable + self.stable + self.overstable
    }
}
