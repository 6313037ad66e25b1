//! Dismissible banner for rejected editor actions and network failures.

#[cfg(test)]
#[path = "notice_bar_test.rs"]
mod notice_bar_test;

use leptos::prelude::*;

use floorplan::engine::EditorCore;

use crate::state::session::SessionState;

/// Banner above the canvas. Editor notices win over network errors.
#[component]
pub fn NoticeBar() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorCore>>();
    let session = expect_context::<RwSignal<SessionState>>();

    let message = move || {
        let notice = editor.with(|core| core.notice().map(str::to_owned));
        let network = session.with(|s| s.last_error.clone());
        pick_message(notice, network)
    };

    let on_dismiss = move |_| {
        editor.update(EditorCore::dismiss_notice);
        session.update(|s| s.last_error = None);
    };

    move || {
        message().map(|text| {
            view! {
                <div class="notice-bar" role="alert">
                    <span class="notice-bar__text">{capitalize_first(&text)}</span>
                    <button class="notice-bar__dismiss" title="Dismiss" on:click=on_dismiss>
                        "×"
                    </button>
                </div>
            }
        })
    }
}

fn pick_message(notice: Option<String>, network: Option<String>) -> Option<String> {
    notice.or(network)
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
