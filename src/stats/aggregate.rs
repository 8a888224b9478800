use super::normalize::NormalizedDisc;
use super::stability::StabilityBreakdown;
use super::SpeedRange;
use std::collections::HashMap;

/// Insertion-ordered label counter.
///
/// Entries stay in first-encountered order, which is what the ranker
/// relies on to break count ties deterministically.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl Tally {
    /// Count one occurrence of `label` and return its slot.
    pub fn add(&mut self, label: &str) -> usize {
        if let Some(&slot) = self.index.get(label) {
            self.entries[slot].1 += 1;
            return slot;
        }
        let slot = self.entries.len();
        self.index.insert(label.to_string(), slot);
        self.entries.push((label.to_string(), 1));
        slot
    }

    #[cfg(test)]
    fn get(&self, label: &str) -> usize {
        self.index
            .get(label)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<(String, usize)> {
        self.entries
    }
}

/// Speed counts keyed by numeric value.
#[derive(Debug, Clone, Default)]
pub struct SpeedTally {
    counts: HashMap<u64, usize>,
}

impl SpeedTally {
    pub fn add(&mut self, speed: f64) {
        *self.counts.entry(speed_key(speed)).or_insert(0) += 1;
    }

    #[cfg(test)]
    fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Unordered `(speed, count)` pairs.
    pub fn into_entries(self) -> Vec<(f64, usize)> {
        self.counts
            .into_iter()
            .map(|(bits, n)| (f64::from_bits(bits), n))
            .collect()
    }
}

// -0.0 and 0.0 are the same speed.
fn speed_key(speed: f64) -> u64 {
    if speed == 0.0 {
        0.0f64.to_bits()
    } else {
        speed.to_bits()
    }
}

/// Raw counts for every dimension of a bag, gathered in a single pass.
#[derive(Debug, Clone, Default)]
pub struct BagAggregates {
    pub total_discs: usize,
    pub manufacturers: Tally,
    pub plastics: Tally,
    pub colors: Tally,
    pub categories: Tally,
    pub speeds: SpeedTally,
    pub speed_range: Option<SpeedRange>,
    pub stability: StabilityBreakdown,
    /// Parallel to `categories.entries()`.
    pub stability_by_category: Vec<StabilityBreakdown>,
}

impl BagAggregates {
    pub fn collect<'a, I>(discs: I) -> Self
    where
        I: IntoIterator<Item = NormalizedDisc<'a>>,
    {
        let mut agg = Self::default();
        for disc in discs {
            agg.observe(&disc);
        }
        agg
    }

    pub fn observe(&mut self, disc: &NormalizedDisc<'_>) {
        self.total_discs += 1;

        if let Some(name) = disc.manufacturer {
            self.manufacturers.add(name);
        }
        if let Some(name) = disc.plastic {
            self.plastics.add(name);
        }
        if let Some(name) = disc.color {
            self.colors.add(name);
        }

        if let Some(speed) = disc.speed {
            self.speeds.add(speed);
            self.speed_range = Some(match self.speed_range {
                Some(range) => range.extend(speed),
                None => SpeedRange {
                    min: speed,
                    max: speed,
                },
            });
        }

        let stability = disc.turn.map(|turn| self.stability.record_turn(turn));

        if let Some(category) = disc.category {
            let slot = self.categories.add(category);
            if slot == self.stability_by_category.len() {
                self.stability_by_category.push(StabilityBreakdown::default());
            }
            if let Some(stability) = stability {
                self.stability_by_category[slot].record(stability);
            }
        }
    }
}
