//! Jar Chart Component
//!
//! Horizontal SVG bar chart: one bar per fruit, length proportional to
//! the fruit's share of the jar's energy.

use fruit_jar_core::{chart_breakdown, ChartSegment};
use leptos::prelude::*;

use crate::format::format_number;
use crate::store::{use_app_store, AppStateStoreFields};

const CHART_WIDTH: f64 = 320.0;
const LABEL_WIDTH: f64 = 90.0;
const BAR_HEIGHT: f64 = 18.0;
const BAR_GAP: f64 = 6.0;

const PALETTE: [&str; 6] = ["#e4572e", "#f3a712", "#a8c686", "#669bbc", "#8e6c8a", "#29335c"];

/// Geometry for one bar
#[derive(Debug, Clone, PartialEq)]
struct BarLayout {
    label: String,
    y: f64,
    width: f64,
    color: &'static str,
    caption: String,
}

/// Scale bars against the largest segment so it spans the plot area
fn layout_bars(segments: &[ChartSegment]) -> Vec<BarLayout> {
    let plot_width = CHART_WIDTH - LABEL_WIDTH;
    let max = segments.iter().map(|s| s.value).fold(0.0_f64, f64::max);
    segments
        .iter()
        .enumerate()
        .map(|(i, s)| BarLayout {
            label: s.label.clone(),
            y: i as f64 * (BAR_HEIGHT + BAR_GAP),
            width: if max > 0.0 { s.value / max * plot_width } else { 0.0 },
            color: PALETTE[i % PALETTE.len()],
            caption: format!(
                "{} kcal ({}%), ×{}",
                format_number(s.value),
                format_number(s.percent),
                s.quantity
            ),
        })
        .collect()
}

fn chart_height(bars: usize) -> f64 {
    bars as f64 * (BAR_HEIGHT + BAR_GAP)
}

#[component]
pub fn JarChart() -> impl IntoView {
    let store = use_app_store();
    let segments = Memo::new(move |_| chart_breakdown(&store.jar().read()));

    view! {
        <section class="jar-chart">
            <h3>"Energy by fruit"</h3>
            <Show
                when=move || !segments.read().is_empty()
                fallback=|| view! { <p class="empty">"Nothing to chart yet."</p> }
            >
                {move || {
                    let bars = layout_bars(&segments.read());
                    let height = chart_height(bars.len());
                    let captions: Vec<(&'static str, String)> = bars
                        .iter()
                        .map(|bar| (bar.color, format!("{}: {}", bar.label, bar.caption)))
                        .collect();
                    view! {
                        <svg
                            class="bar-chart"
                            width=CHART_WIDTH.to_string()
                            height=height.to_string()
                            viewBox=format!("0 0 {} {}", CHART_WIDTH, height)
                        >
                            {bars.into_iter().map(|bar| view! {
                                <g>
                                    <text
                                        x="0"
                                        y=(bar.y + BAR_HEIGHT * 0.75).to_string()
                                        class="bar-label"
                                    >
                                        {bar.label}
                                    </text>
                                    <rect
                                        x=LABEL_WIDTH.to_string()
                                        y=bar.y.to_string()
                                        width=bar.width.to_string()
                                        height=BAR_HEIGHT.to_string()
                                        fill=bar.color
                                    />
                                </g>
                            }).collect_view()}
                        </svg>
                        <ul class="chart-legend">
                            {captions.into_iter().map(|(color, caption)| view! {
                                <li>
                                    <span class="legend-swatch" style=format!("background:{}", color)></span>
                                    {caption}
                                </li>
                            }).collect_view()}
                        </ul>
                    }
                }}
            </Show>
        </section>
    }
}
