use discbag::disc::{DiscRecord, FlightNumbers};
use discbag::stats::compute_bag_stats;
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

// --- STRATEGIES ---

// Small label pools so that collisions (and ties) are frequent.
fn arb_label(pool: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
    proptest::option::of(proptest::sample::select(pool).prop_map(|s| s.to_string()))
}

fn arb_flight_value(values: &'static [f64]) -> impl Strategy<Value = Option<f64>> {
    proptest::option::of(proptest::sample::select(values))
}

prop_compose! {
    fn arb_flight()(
        speed in arb_flight_value(&[1.0, 2.0, 3.0, 4.5, 5.0, 7.0, 9.0, 12.0, 14.0]),
        glide in arb_flight_value(&[1.0, 3.0, 5.0, 6.0]),
        turn in arb_flight_value(&[-5.0, -3.0, -2.0, -1.5, -1.0, -0.5, 0.0, 0.0001, 1.0, 2.0]),
        fade in arb_flight_value(&[0.0, 1.0, 2.0, 4.0]),
    ) -> FlightNumbers {
        FlightNumbers { speed, glide, turn, fade }
    }
}

prop_compose! {
    fn arb_disc()(
        id in "[a-z0-9]{1,6}",
        manufacturer in arb_label(&["Innova", "Discraft", "MVP", "Kastaplast", ""]),
        plastic in arb_label(&["Star", "ESP", "Neutron", "K1", "DX"]),
        color in arb_label(&["Blue", "Red", "Pink", "Orange"]),
        category in arb_label(&["Putter", "Midrange", "Fairway Driver", "Distance Driver", "Approach"]),
        flight_numbers in proptest::option::of(arb_flight()),
    ) -> DiscRecord {
        DiscRecord { id, manufacturer, plastic, color, category, flight_numbers }
    }
}

fn turn_of(d: &DiscRecord) -> Option<f64> {
    d.flight_numbers.and_then(|f| f.turn)
}

fn speed_of(d: &DiscRecord) -> Option<f64> {
    d.flight_numbers.and_then(|f| f.speed)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn test_distribution_sums_match_defined_fields(
        discs in proptest::collection::vec(arb_disc(), 0..40)
    ) {
        let s = compute_bag_stats(&discs);

        prop_assert_eq!(s.total_discs, discs.len());

        let with_category = discs.iter().filter(|d| d.category.is_some()).count();
        let with_color = discs.iter().filter(|d| d.color.is_some()).count();
        let with_speed = discs.iter().filter(|d| speed_of(d).is_some()).count();
        let with_turn = discs.iter().filter(|d| turn_of(d).is_some()).count();

        prop_assert_eq!(s.category_distribution.iter().map(|c| c.count).sum::<usize>(), with_category);
        prop_assert_eq!(s.color_distribution.iter().map(|c| c.count).sum::<usize>(), with_color);
        prop_assert_eq!(s.speed_distribution.iter().map(|c| c.count).sum::<usize>(), with_speed);
        prop_assert_eq!(s.stability.total(), with_turn);

        let distinct_colors: HashSet<&str> = discs.iter().filter_map(|d| d.color.as_deref()).collect();
        prop_assert_eq!(s.color_distribution.len(), distinct_colors.len());

        let distinct_categories: HashSet<&str> = discs.iter().filter_map(|d| d.category.as_deref()).collect();
        prop_assert_eq!(s.categories_count, distinct_categories.len());
        prop_assert_eq!(s.stability_by_category.len(), distinct_categories.len());
        prop_assert_eq!(s.total_categories, 7);
    }

    #[test]
    fn test_color_and_speed_distributions_match_input_counts(
        discs in proptest::collection::vec(arb_disc(), 0..40)
    ) {
        let s = compute_bag_stats(&discs);

        let mut expected_colors: HashMap<&str, usize> = HashMap::new();
        let mut expected_speeds: HashMap<u64, usize> = HashMap::new();
        for d in &discs {
            if let Some(c) = d.color.as_deref() {
                *expected_colors.entry(c).or_insert(0) += 1;
            }
            if let Some(speed) = speed_of(d) {
                *expected_speeds.entry(speed.to_bits()).or_insert(0) += 1;
            }
        }

        let emitted_colors: HashMap<&str, usize> = s
            .color_distribution
            .iter()
            .map(|c| (c.color.as_str(), c.count))
            .collect();
        let emitted_speeds: HashMap<u64, usize> = s
            .speed_distribution
            .iter()
            .map(|c| (c.speed.to_bits(), c.count))
            .collect();

        // No duplicate keys in the emitted lists.
        prop_assert_eq!(emitted_colors.len(), s.color_distribution.len());
        prop_assert_eq!(emitted_speeds.len(), s.speed_distribution.len());

        prop_assert_eq!(emitted_colors, expected_colors);
        prop_assert_eq!(emitted_speeds, expected_speeds);
    }

    #[test]
    fn test_per_category_stability_sums(
        discs in proptest::collection::vec(arb_disc(), 0..40)
    ) {
        let s = compute_bag_stats(&discs);

        let mut expected: HashMap<&str, usize> = HashMap::new();
        for d in &discs {
            if let Some(c) = d.category.as_deref() {
                let entry = expected.entry(c).or_insert(0);
                if turn_of(d).is_some() {
                    *entry += 1;
                }
            }
        }

        for entry in &s.stability_by_category {
            prop_assert_eq!(Some(&entry.stability.total()), expected.get(entry.category.as_str()));
        }
    }

    #[test]
    fn test_rankings_are_ordered(
        discs in proptest::collection::vec(arb_disc(), 0..40)
    ) {
        let s = compute_bag_stats(&discs);

        prop_assert!(s.category_distribution.windows(2).all(|w| w[0].count >= w[1].count));
        prop_assert!(s.color_distribution.windows(2).all(|w| w[0].count >= w[1].count));
        prop_assert!(s.top_plastics.windows(2).all(|w| w[0].count >= w[1].count));
        prop_assert!(s.top_plastics.len() <= 3);
        prop_assert!(s.speed_distribution.windows(2).all(|w| w[0].speed < w[1].speed));

        if let Some(range) = s.speed_range {
            prop_assert_eq!(Some(range.min), s.speed_distribution.first().map(|c| c.speed));
            prop_assert_eq!(Some(range.max), s.speed_distribution.last().map(|c| c.speed));
        } else {
            prop_assert!(s.speed_distribution.is_empty());
        }

        if let Some(brand) = &s.top_brand {
            let best = discs
                .iter()
                .filter(|d| d.manufacturer.as_deref() == Some(brand.name.as_str()))
                .count();
            prop_assert_eq!(best, brand.count);
        } else {
            prop_assert!(discs.iter().all(|d| d.manufacturer.is_none()));
        }
    }

    #[test]
    fn test_order_free_fields_ignore_input_order(
        discs in proptest::collection::vec(arb_disc(), 0..40)
    ) {
        let forward = compute_bag_stats(&discs);
        let reversed: Vec<DiscRecord> = discs.iter().rev().cloned().collect();
        let backward = compute_bag_stats(&reversed);

        prop_assert_eq!(forward.total_discs, backward.total_discs);
        prop_assert_eq!(forward.speed_range, backward.speed_range);
        prop_assert_eq!(forward.categories_count, backward.categories_count);
        prop_assert_eq!(forward.stability, backward.stability);
        prop_assert_eq!(&forward.speed_distribution, &backward.speed_distribution);
        prop_assert_eq!(
            forward.top_brand.as_ref().map(|b| b.count),
            backward.top_brand.as_ref().map(|b| b.count)
        );

        for entry in &forward.stability_by_category {
            prop_assert_eq!(Some(&entry.stability), backward.stability_for(&entry.category));
        }
    }

    #[test]
    fn test_idempotent(discs in proptest::collection::vec(arb_disc(), 0..40)) {
        prop_assert_eq!(compute_bag_stats(&discs), compute_bag_stats(&discs));
    }
}
