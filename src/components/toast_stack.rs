//! Transient toast notifications.

use leptos::prelude::*;

use crate::state::toast::{Severity, ToastState};

/// How long a toast stays visible before auto-dismissal.
#[cfg(feature = "hydrate")]
const DISMISS_MS: u32 = 4_000;

/// Renders queued toasts and dismisses each a few seconds after it appears.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    #[cfg(feature = "hydrate")]
    {
        use std::collections::HashSet;

        // One timer per toast id; the set stops re-runs of the effect from
        // scheduling duplicates.
        let scheduled = StoredValue::new(HashSet::<u64>::new());
        Effect::new(move || {
            let ids: Vec<u64> = toasts.get().items.iter().map(|t| t.id).collect();
            for id in ids {
                if scheduled.update_value(|s| s.insert(id)) {
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(DISMISS_MS).await;
                        toasts.update(|t| t.dismiss(id));
                    });
                }
            }
        });
    }

    view! {
        <div class="toast-stack">
            {move || {
                toasts
                    .get()
                    .items
                    .iter()
                    .map(|toast| {
                        let id = toast.id;
                        let destructive = toast.severity == Severity::Destructive;
                        view! {
                            <div class="toast" class:toast--destructive=destructive>
                                <span class="toast__title">{toast.title.clone()}</span>
                                <span class="toast__message">{toast.message.clone()}</span>
                                <button
                                    class="toast__close"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
