use super::*;

#[test]
fn weekly_trend_covers_seven_days_in_order() {
    let trend = weekly_trend();
    let names: Vec<_> = trend.iter().map(|p| p.name).collect();
    assert_eq!(names, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    assert_eq!(trend[6].completions, 8);
}

#[test]
fn bar_layout_empty_input_yields_no_bars() {
    assert!(bar_layout(&[], 100.0, 100.0).is_empty());
}

#[test]
fn bar_layout_scales_tallest_bar_to_full_height() {
    let points = [
        TrendPoint { name: "A", completions: 2 },
        TrendPoint { name: "B", completions: 4 },
    ];
    let bars = bar_layout(&points, 200.0, 100.0);
    assert_eq!(bars.len(), 2);
    assert!((bars[1].height - 100.0).abs() < 1e-9);
    assert!(bars[1].y.abs() < 1e-9);
    assert!((bars[0].height - 50.0).abs() < 1e-9);
    assert!((bars[0].y - 50.0).abs() < 1e-9);
}

#[test]
fn bar_layout_centers_bars_in_equal_slots() {
    let points = [
        TrendPoint { name: "A", completions: 1 },
        TrendPoint { name: "B", completions: 1 },
    ];
    let bars = bar_layout(&points, 200.0, 50.0);
    assert!((bars[0].width - 60.0).abs() < 1e-9);
    assert!((bars[0].x - 20.0).abs() < 1e-9);
    assert!((bars[1].x - 120.0).abs() < 1e-9);
}

#[test]
fn bar_layout_all_zero_values_draws_flat_bars() {
    let points = [TrendPoint { name: "A", completions: 0 }];
    let bars = bar_layout(&points, 100.0, 80.0);
    assert!(bars[0].height.abs() < 1e-9);
    assert!((bars[0].y - 80.0).abs() < 1e-9);
}
