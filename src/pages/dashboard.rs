//! Dashboard page: load lifecycle, chart, search, table, and AI panel.

use leptos::prelude::*;

use crate::components::ai_panel::AiPanel;
use crate::components::bar_chart::BarChart;
use crate::components::rep_table::RepTable;
use crate::components::toast_stack::ToastStack;
use crate::state::data::{DataState, LOAD_ERROR_MESSAGE, LoadPhase};
use crate::state::query::QueryState;

/// Dashboard page — the single route of the application.
///
/// Issues one data request on mount. No automatic retry: after a failure the
/// Retry button resets to the loading state and re-issues the request. The
/// AI relay below runs independently of this lifecycle.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let data = expect_context::<RwSignal<DataState>>();

    let load = move || {
        data.update(|d| d.begin_load());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_sales_data().await {
                Ok(reps) => data.update(|d| d.load_succeeded(reps)),
                Err(err) => {
                    log::warn!("data request failed: {err}");
                    data.update(|d| d.load_failed());
                }
            }
        });
    };

    // One-shot load on mount.
    load();

    view! {
        <div class="dashboard-page">
            {move || match data.get().phase {
                LoadPhase::Loading => {
                    view! {
                        <div class="dashboard-page__loading">
                            <div class="spinner" aria-hidden="true"></div>
                            <p>"Loading sales data..."</p>
                        </div>
                    }
                        .into_any()
                }
                LoadPhase::Error => {
                    view! {
                        <div class="dashboard-page__error">
                            <h1>"Error"</h1>
                            <p>{LOAD_ERROR_MESSAGE}</p>
                            <button class="btn btn--primary" on:click=move |_| load()>
                                "Retry"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                LoadPhase::Ready => view! { <ReadyView/> }.into_any(),
            }}
            <ToastStack/>
        </div>
    }
}

/// Ready state: header, chart, search box, table, AI assistant.
#[component]
fn ReadyView() -> impl IntoView {
    let query = expect_context::<RwSignal<QueryState>>();

    view! {
        <header class="dashboard-page__header">
            <h1>"Sales Representatives Dashboard"</h1>
        </header>

        <BarChart/>

        <input
            class="dashboard-page__search"
            type="text"
            placeholder="Search by name or region..."
            prop:value=move || query.get().search
            on:input=move |ev| query.update(|q| q.search = event_target_value(&ev))
        />

        <RepTable/>
        <AiPanel/>
    }
}
