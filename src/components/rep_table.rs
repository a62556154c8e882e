//! Searchable, sortable table of sales representatives.

use leptos::prelude::*;

use crate::net::types::SalesRep;
use crate::state::data::DataState;
use crate::state::query::{QueryState, SortKey, project};
use crate::state::ui::DetailTab;
use crate::util::format::format_currency;

/// The main table. Rows are the query projection of the loaded collection;
/// clicking the Name or Region header toggles the coupled sort direction.
#[component]
pub fn RepTable() -> impl IntoView {
    let data = expect_context::<RwSignal<DataState>>();
    let query = expect_context::<RwSignal<QueryState>>();

    let sort_by = move |key: SortKey| query.update(|q| q.toggle_sort(key));

    view! {
        <table class="rep-table">
            <thead>
                <tr>
                    <th class="rep-table__sortable" on:click=move |_| sort_by(SortKey::Name)>
                        "Name"
                    </th>
                    <th class="rep-table__sortable" on:click=move |_| sort_by(SortKey::Region)>
                        "Region"
                    </th>
                    <th>"Role"</th>
                    <th>"Total Deals Value"</th>
                    <th>"Details"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let d = data.get();
                    let q = query.get();
                    project(&d.reps, &q)
                        .into_iter()
                        .map(|rep| view! { <RepRow rep=rep/> })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}

/// One representative row with a Clients / Deals / Skills detail strip.
#[component]
fn RepRow(rep: SalesRep) -> impl IntoView {
    let tab = RwSignal::new(DetailTab::Clients);

    let total = format_currency(rep.total_value());

    let clients = rep
        .clients
        .iter()
        .map(|c| {
            view! {
                <div class="rep-row__item">
                    <span class="rep-row__item-name">{c.name.clone()}</span>
                    {format!(" - {}", c.industry)}
                </div>
            }
        })
        .collect::<Vec<_>>();

    let deals = rep
        .deals
        .iter()
        .map(|d| {
            view! {
                <div class="rep-row__item">
                    <span class="rep-row__item-name">{d.client.clone()}</span>
                    {format!(" - {} ({})", format_currency(d.value), d.status)}
                </div>
            }
        })
        .collect::<Vec<_>>();

    let skills = rep
        .skills
        .iter()
        .map(|s| view! { <span class="badge">{s.clone()}</span> })
        .collect::<Vec<_>>();

    view! {
        <tr class="rep-row">
            <td>{rep.name.clone()}</td>
            <td>{rep.region.clone()}</td>
            <td>{rep.role.clone()}</td>
            <td class="rep-row__total">{total}</td>
            <td>
                <div class="rep-tabs">
                    <div class="rep-tabs__list">
                        <button
                            class="rep-tabs__trigger"
                            class:rep-tabs__trigger--active=move || tab.get() == DetailTab::Clients
                            on:click=move |_| tab.set(DetailTab::Clients)
                        >
                            "Clients"
                        </button>
                        <button
                            class="rep-tabs__trigger"
                            class:rep-tabs__trigger--active=move || tab.get() == DetailTab::Deals
                            on:click=move |_| tab.set(DetailTab::Deals)
                        >
                            "Deals"
                        </button>
                        <button
                            class="rep-tabs__trigger"
                            class:rep-tabs__trigger--active=move || tab.get() == DetailTab::Skills
                            on:click=move |_| tab.set(DetailTab::Skills)
                        >
                            "Skills"
                        </button>
                    </div>
                    <div
                        class="rep-tabs__panel"
                        class:rep-tabs__panel--hidden=move || tab.get() != DetailTab::Clients
                    >
                        {clients}
                    </div>
                    <div
                        class="rep-tabs__panel"
                        class:rep-tabs__panel--hidden=move || tab.get() != DetailTab::Deals
                    >
                        {deals}
                    </div>
                    <div
                        class="rep-tabs__panel rep-tabs__panel--badges"
                        class:rep-tabs__panel--hidden=move || tab.get() != DetailTab::Skills
                    >
                        {skills}
                    </div>
                </div>
            </td>
        </tr>
    }
}
