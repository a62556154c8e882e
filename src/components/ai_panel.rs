//! AI assistant panel for sending questions and displaying responses.

#[cfg(test)]
#[path = "ai_panel_test.rs"]
mod ai_panel_test;

use leptos::prelude::*;

use crate::state::ai::AiState;
use crate::state::toast::ToastState;
use crate::util::markup::{Span, parse_line};

/// AI panel showing a question input and the last rendered answer.
///
/// Submissions post to the AI endpoint; the button is disabled while a
/// question is in flight and `AiState::begin_ask` ignores re-entry, so at
/// most one exchange runs at a time.
#[component]
pub fn AiPanel() -> impl IntoView {
    let ai = expect_context::<RwSignal<AiState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let do_ask = move || {
        let mut question = None;
        ai.update(|a| question = a.begin_ask());
        let Some(question) = question else { return };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::toast::Severity;

            match crate::net::api::ask_question(&question).await {
                Ok(text) => ai.update(|a| a.finish_ok(text)),
                Err(err) => {
                    log::warn!("ai request failed: {err}");
                    ai.update(|a| a.finish_err());
                    toasts.update(|t| {
                        t.push("Error", "Error in AI response", Severity::Destructive);
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            // Unreachable without a browser; keep the state consistent anyway.
            let _ = (&question, &toasts);
            ai.update(|a| a.finish_err());
        }
    };

    let on_click = move |_| do_ask();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_ask();
        }
    };

    view! {
        <section class="ai-panel">
            <h2 class="ai-panel__title">"AI Sales Assistant"</h2>
            <div class="ai-panel__input-row">
                <input
                    class="ai-panel__input"
                    type="text"
                    placeholder="Ask a question about the sales data..."
                    prop:value=move || ai.get().question
                    on:input=move |ev| ai.update(|a| a.question = event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary"
                    disabled=move || ai.get().pending
                    on:click=on_click
                >
                    {move || if ai.get().pending { "Thinking..." } else { "Ask AI" }}
                </button>
            </div>
            {move || {
                ai.get().response.map(|response| {
                    view! {
                        <div class="ai-panel__response">
                            <ul>
                                {response.split('\n').map(render_line).collect::<Vec<_>>()}
                            </ul>
                        </div>
                    }
                })
            }}
        </section>
    }
}

/// Render one response line as a list entry of emphasis spans.
///
/// Span content is always a text child, never structural markup. Returns the
/// concrete `AnyView` so the view owns its text outright instead of
/// capturing the borrowed line.
fn render_line(line: &str) -> AnyView {
    let spans = parse_line(line)
        .into_iter()
        .map(|span| match span {
            Span::Plain(text) => text.into_any(),
            Span::Bold(text) => view! { <strong>{text}</strong> }.into_any(),
            Span::Italic(text) => view! { <em>{text}</em> }.into_any(),
        })
        .collect::<Vec<_>>();
    view! { <li class="ai-panel__line">{spans}</li> }.into_any()
}
