//! SVG bar chart of total deal value per representative.

use leptos::prelude::*;

use crate::state::data::{DataState, chart_series};
use crate::util::format::format_currency;

const BAR_WIDTH: f64 = 64.0;
const BAR_GAP: f64 = 24.0;
const PLOT_HEIGHT: f64 = 200.0;
const VALUE_BAND: f64 = 16.0;
const LABEL_BAND: f64 = 24.0;

/// Bar chart over the loaded collection.
///
/// The series mirrors original load order on purpose: searching or sorting
/// the table leaves the chart untouched.
#[component]
pub fn BarChart() -> impl IntoView {
    let data = expect_context::<RwSignal<DataState>>();

    view! {
        <div class="bar-chart">
            <h2 class="bar-chart__title">"Total Deals Value"</h2>
            {move || {
                let series = chart_series(&data.get().reps);
                if series.is_empty() {
                    return view! { <p class="bar-chart__empty">"No sales data to chart."</p> }
                        .into_any();
                }

                let max = series.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
                let width = series.len() as f64 * (BAR_WIDTH + BAR_GAP) + BAR_GAP;
                let height = VALUE_BAND + PLOT_HEIGHT + LABEL_BAND;

                let bars = series
                    .into_iter()
                    .enumerate()
                    .map(|(i, (name, total))| {
                        // Zero max (all totals zero) draws flat bars.
                        let scale = if max > 0.0 { total / max } else { 0.0 };
                        let bar_height = PLOT_HEIGHT * scale;
                        let x = BAR_GAP + i as f64 * (BAR_WIDTH + BAR_GAP);
                        let y = VALUE_BAND + (PLOT_HEIGHT - bar_height);
                        let center = x + BAR_WIDTH / 2.0;
                        view! {
                            <rect
                                class="bar-chart__bar"
                                x=format!("{x}")
                                y=format!("{y}")
                                width=format!("{BAR_WIDTH}")
                                height=format!("{bar_height}")
                            />
                            <text
                                class="bar-chart__value"
                                x=format!("{center}")
                                y=format!("{}", y - 4.0)
                                text-anchor="middle"
                            >
                                {format_currency(total)}
                            </text>
                            <text
                                class="bar-chart__label"
                                x=format!("{center}")
                                y=format!("{}", VALUE_BAND + PLOT_HEIGHT + 16.0)
                                text-anchor="middle"
                            >
                                {name}
                            </text>
                        }
                    })
                    .collect::<Vec<_>>();

                view! {
                    <svg
                        class="bar-chart__plot"
                        viewBox=format!("0 0 {width} {height}")
                        role="img"
                        aria-label="Total deal value per representative"
                    >
                        {bars}
                    </svg>
                }
                .into_any()
            }}
        </div>
    }
}
