//! Explorer toolbar.
//!
//! Contains the editable path input and the action buttons: new directory,
//! file and directory upload, refresh and bulk delete.

use leptos::html;
use leptos::prelude::*;
use leptos_icons::Icon;
use web_sys::HtmlInputElement;

use super::state::{Dialog, ExplorerState};
use crate::components::icons as ic;
use crate::core::upload::picked_files;
use crate::models::Selection;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Toolbar shown above the file list.
#[component]
pub fn Toolbar() -> impl IntoView {
    let state = use_context::<ExplorerState>().expect("ExplorerState must be provided");
    let caps = state.caps;

    let target_label = Memo::new(move |_| state.client.with(|c| c.endpoints().target().to_string()));
    let selected = Memo::new(move |_| state.selection.with(Selection::len));

    let on_path_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            state.load(&state.dir_input.get_untracked());
        }
    };

    let on_bulk_delete = move |_| {
        let keys = state.selection.with_untracked(Selection::keys);
        if !keys.is_empty() {
            state.dialog.set(Some(Dialog::BulkDelete { keys }));
        }
    };

    let refresh_class = move || {
        if state.loading.get() {
            format!("{} {}", css::toolButton, css::spinning)
        } else {
            css::toolButton.to_string()
        }
    };

    view! {
        <header class=css::toolbar>
            <div class=css::toolbarLeft>
                <span class=css::target title="Storage target">
                    <Icon icon=ic::STORAGE />
                    <span>{move || target_label.get()}</span>
                </span>
                <input
                    class=css::pathInput
                    type="text"
                    aria-label="Current directory"
                    spellcheck="false"
                    prop:value=move || state.dir_input.get()
                    on:input=move |ev| state.dir_input.set(event_target_value(&ev))
                    on:keydown=on_path_keydown
                />
            </div>

            <div class=css::toolbarRight>
                <button
                    class=css::toolButton
                    title="New Directory"
                    disabled=!caps.upload
                    on:click=move |_| state.dialog.set(Some(Dialog::Mkdir))
                >
                    <Icon icon=ic::NEW_FOLDER />
                </button>

                <UploadButton title="Upload File" icon=ic::UPLOAD_FILE tree=false />
                <UploadButton title="Upload Directory" icon=ic::UPLOAD_DIR tree=true />

                <button
                    class=refresh_class
                    title="Refresh"
                    on:click=move |_| state.refresh()
                >
                    <Icon icon=ic::REFRESH />
                </button>

                <button
                    class=format!("{} {}", css::toolButton, css::toolButtonDanger)
                    title="Delete Selected"
                    disabled=move || !caps.can_bulk_delete(selected.get()) || state.busy.get()
                    on:click=on_bulk_delete
                >
                    <Icon icon=ic::DELETE />
                    <Show when=move || { selected.get() > 0 }>
                        <span class=css::badge>{move || selected.get()}</span>
                    </Show>
                </button>
            </div>
        </header>
    }
}

/// Button backed by a hidden file input.
///
/// With `tree`, the input picks a whole directory and every file keeps its
/// path relative to it.
#[component]
fn UploadButton(title: &'static str, icon: icondata::Icon, tree: bool) -> impl IntoView {
    let state = use_context::<ExplorerState>().expect("ExplorerState must be provided");
    let input_ref = NodeRef::<html::Input>::new();

    // `webkitdirectory` has no typed attribute
    Effect::new(move |_| {
        if tree && let Some(input) = input_ref.get() {
            let _ = input.set_attribute("webkitdirectory", "");
        }
    });

    let on_change = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        if let Some(list) = input.files() {
            state.upload(picked_files(&list), tree);
        }
        // Allow picking the same file again
        input.set_value("");
    };

    view! {
        <button
            class=css::toolButton
            title=title
            disabled=!state.caps.upload
            on:click=move |_| {
                if let Some(input) = input_ref.get_untracked() {
                    input.click();
                }
            }
        >
            <Icon icon=icon />
        </button>
        <input
            class=css::hiddenInput
            node_ref=input_ref
            type="file"
            multiple=true
            tabindex="-1"
            on:change=on_change
        />
    }
}
