//! Weekly completion bar chart.
//!
//! DESIGN
//! ======
//! Geometry is computed in plain Rust (`bar_layout`) and rendered as inline
//! SVG, so the chart needs no canvas and the math is unit-testable.

#[cfg(test)]
#[path = "completion_chart_test.rs"]
mod completion_chart_test;

use leptos::prelude::*;

const CHART_WIDTH: f64 = 560.0;
const PLOT_HEIGHT: f64 = 200.0;
const LABEL_BAND: f64 = 28.0;
const BAR_FILL_RATIO: f64 = 0.6;

/// One day's completion count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrendPoint {
    pub name: &'static str,
    pub completions: u32,
}

/// Placeholder weekly series; the backend exposes no trend endpoint yet.
pub fn weekly_trend() -> Vec<TrendPoint> {
    [("Mon", 3), ("Tue", 5), ("Wed", 4), ("Thu", 6), ("Fri", 7), ("Sat", 2), ("Sun", 8)]
        .into_iter()
        .map(|(name, completions)| TrendPoint { name, completions })
        .collect()
}

/// A positioned bar in SVG user units (origin top-left).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub label: &'static str,
    pub value: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lay out one bar per point across `width`, scaled so the largest value
/// fills `height`.
pub fn bar_layout(points: &[TrendPoint], width: f64, height: f64) -> Vec<Bar> {
    if points.is_empty() {
        return Vec::new();
    }
    let max = points.iter().map(|p| p.completions).max().unwrap_or(0).max(1);
    #[allow(clippy::cast_precision_loss)]
    let slot = width / points.len() as f64;
    let bar_width = slot * BAR_FILL_RATIO;
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let bar_height = f64::from(p.completions) / f64::from(max) * height;
            #[allow(clippy::cast_precision_loss)]
            let x = i as f64 * slot + (slot - bar_width) / 2.0;
            Bar {
                label: p.name,
                value: p.completions,
                x,
                y: height - bar_height,
                width: bar_width,
                height: bar_height,
            }
        })
        .collect()
}

#[component]
pub fn CompletionChart(points: Vec<TrendPoint>) -> impl IntoView {
    let bars = bar_layout(&points, CHART_WIDTH, PLOT_HEIGHT);
    let view_box = format!("0 0 {CHART_WIDTH} {}", PLOT_HEIGHT + LABEL_BAND);
    let label_y = format!("{:.1}", PLOT_HEIGHT + LABEL_BAND * 0.7);

    view! {
        <svg class="trend-chart" viewBox=view_box role="img" aria-label="Habit completions per day">
            <line
                class="trend-chart__axis"
                x1="0"
                y1=format!("{PLOT_HEIGHT:.1}")
                x2=format!("{CHART_WIDTH:.1}")
                y2=format!("{PLOT_HEIGHT:.1}")
            ></line>
            {bars
                .into_iter()
                .map(|bar| {
                    let center = format!("{:.1}", bar.x + bar.width / 2.0);
                    view! {
                        <g class="trend-chart__bar">
                            <rect
                                x=format!("{:.1}", bar.x)
                                y=format!("{:.1}", bar.y)
                                width=format!("{:.1}", bar.width)
                                height=format!("{:.1}", bar.height)
                                rx="4"
                            ></rect>
                            <text class="trend-chart__value" x=center.clone() y=format!("{:.1}", (bar.y - 4.0).max(10.0)) text-anchor="middle">
                                {bar.value.to_string()}
                            </text>
                            <text class="trend-chart__label" x=center y=label_y.clone() text-anchor="middle">
                                {bar.label}
                            </text>
                        </g>
                    }
                })
                .collect::<Vec<_>>()}
        </svg>
    }
}
