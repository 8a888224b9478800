use super::aggregate::SpeedTally;

/// Sort by descending count. The sort is stable, so equal counts keep
/// their first-encountered order.
pub fn rank_by_count(mut entries: Vec<(String, usize)>) -> Vec<(String, usize)> {
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
}

pub fn top_n(mut ranked: Vec<(String, usize)>, n: usize) -> Vec<(String, usize)> {
    ranked.truncate(n);
    ranked
}

/// Highest-count entry; the earliest one wins a tie.
pub fn leader(entries: &[(String, usize)]) -> Option<(String, usize)> {
    let mut best: Option<&(String, usize)> = None;
    for entry in entries {
        match best {
            Some(b) if entry.1 <= b.1 => {}
            _ => best = Some(entry),
        }
    }
    best.cloned()
}

/// Ascending by speed value, not by count.
pub fn rank_speeds(speeds: SpeedTally) -> Vec<(f64, usize)> {
    let mut entries = speeds.into_entries();
    entries.sort_by(|a, b| a.0.total_cmp(&b.0));
    entries
}
