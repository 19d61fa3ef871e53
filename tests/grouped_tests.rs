use chart_geom::highlight::{recover_group_index, GroupIndex};
use rand::Rng;

/// Forward layout used by grouped-bar renderers: group k starts at
/// k * (series_count + spacing), bar s occupies [start + s, start + s + 1).
fn bar_left_edge(x_index: usize, series_index: usize, series_count: usize, spacing: f64) -> f64 {
    x_index as f64 * (series_count as f64 + spacing) + series_index as f64
}

#[test]
fn test_round_trip_against_forward_layout() {
    let series_count = 3;
    let spacing = 0.2;
    let mut rng = rand::rng();

    for x_index in 0..50 {
        for series_index in 0..series_count {
            for _ in 0..20 {
                let offset: f64 = rng.random_range(0.0..1.0);
                let touch =
                    bar_left_edge(x_index, series_index, series_count, spacing) + offset;
                let recovered = recover_group_index(touch, series_count, spacing);

                assert_eq!(
                    recovered,
                    GroupIndex {
                        x_index,
                        series_index
                    },
                    "touch {} (group {}, bar {}, offset {})",
                    touch,
                    x_index,
                    series_index,
                    offset
                );
            }
        }
    }
}

#[test]
fn test_round_trip_across_configurations() {
    let mut rng = rand::rng();

    for series_count in 1..=5usize {
        for spacing in [0.0, 0.2, 1.0] {
            for x_index in 0..10 {
                for series_index in 0..series_count {
                    let offset: f64 = rng.random_range(0.0..1.0);
                    let touch =
                        bar_left_edge(x_index, series_index, series_count, spacing) + offset;
                    let recovered = recover_group_index(touch, series_count, spacing);

                    assert_eq!(
                        recovered,
                        GroupIndex {
                            x_index,
                            series_index
                        },
                        "count {}, spacing {}, touch {}",
                        series_count,
                        spacing,
                        touch
                    );
                }
            }
        }
    }
}

#[test]
fn test_left_edge_is_part_of_its_bar() {
    // Exact bar boundaries must not bleed into the neighbor. Pinned to
    // this configuration: for other (count, spacing) pairs the forward
    // layout itself can round a left edge into the preceding spacing,
    // and only interior positions are guaranteed to round-trip.
    let series_count = 3;
    let spacing = 0.2;

    for x_index in 0..50 {
        for series_index in 0..series_count {
            let touch = bar_left_edge(x_index, series_index, series_count, spacing);
            let recovered = recover_group_index(touch, series_count, spacing);
            assert_eq!(
                recovered,
                GroupIndex {
                    x_index,
                    series_index
                }
            );
        }
    }
}

#[test]
fn test_zero_series_count_is_inert() {
    let recovered = recover_group_index(5.0, 0, 0.2);
    assert_eq!(
        recovered,
        GroupIndex {
            x_index: 0,
            series_index: 0
        }
    );
}
