//! Inline text editor dialog.
//!
//! The file is fetched through a `LocalResource`; the dialog body sits in a
//! `Suspense`, so the editor itself mounts only once the content is there.
//! While loading, a toast keyed by the file is shown instead.

use leptos::html;
use leptos::prelude::*;

use super::dialogs::Modal;
use super::state::ExplorerState;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/explorer/editor.module.css");

/// Spaces inserted for the Tab key.
const SOFT_TAB: &str = "    ";

/// Editor dialog for the file at `key`.
#[component]
pub fn EditorDialog(key: String, name: String) -> impl IntoView {
    let state = use_context::<ExplorerState>().expect("ExplorerState must be provided");
    let notifier = state.notifier();

    notifier.loading(&key, "Loading");

    let content = LocalResource::new({
        let key = key.clone();
        move || {
            let key = key.clone();
            let client = state.client.get_untracked();
            async move {
                let result = client.read_text(&key).await;
                notifier.dismiss_key(&key);
                match result {
                    Ok(text) => Some(text),
                    Err(err) => {
                        notifier.report(&err);
                        state.dialog.set(None);
                        None
                    }
                }
            }
        }
    });

    view! {
        <Suspense fallback=|| ()>
            {move || {
                let key = key.clone();
                let name = name.clone();
                content.get().flatten().map(move |text| {
                    let text = RwSignal::new(text);
                    let on_ok = Callback::new(move |_| {
                        state.save(key.clone(), text.get_untracked());
                    });
                    view! {
                        <Modal title=format!("Edit {}", name) on_ok=on_ok wide=true>
                            <CodeArea text=text />
                        </Modal>
                    }
                })
            }}
        </Suspense>
    }
}

/// Monospace text area with a line-number gutter.
#[component]
fn CodeArea(text: RwSignal<String>) -> impl IntoView {
    let area_ref = NodeRef::<html::Textarea>::new();
    let gutter_ref = NodeRef::<html::Div>::new();

    let height = format!("height: {}px", (dom::inner_height() * 0.7).max(200.0) as u32);
    let line_numbers = Memo::new(move |_| {
        let lines = text.with(|t| t.split('\n').count());
        (1..=lines)
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    });

    Effect::new(move |_| {
        if let Some(area) = area_ref.get() {
            let _ = area.focus();
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() != "Tab" {
            return;
        }
        ev.prevent_default();
        let Some(area) = area_ref.get_untracked() else {
            return;
        };
        let start = area.selection_start().ok().flatten().unwrap_or(0);
        let caret = start + SOFT_TAB.len() as u32;
        if area.set_range_text(SOFT_TAB).is_ok() {
            let _ = area.set_selection_range(caret, caret);
            text.set(area.value());
        }
    };

    // Keep the gutter aligned with the text while scrolling
    let on_scroll = move |_| {
        if let (Some(area), Some(gutter)) = (area_ref.get_untracked(), gutter_ref.get_untracked())
        {
            gutter.set_scroll_top(area.scroll_top());
        }
    };

    view! {
        <div class=css::editor style=height>
            <div class=css::gutter node_ref=gutter_ref aria-hidden="true">
                <pre>{move || line_numbers.get()}</pre>
            </div>
            <textarea
                class=css::text
                node_ref=area_ref
                spellcheck="false"
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
                on:keydown=on_keydown
                on:scroll=on_scroll
            />
        </div>
    }
}
