//! Modal dialogs of the explorer.
//!
//! At most one dialog is open at a time; [`Dialogs`] renders whichever one
//! `ExplorerState::dialog` names. Confirm actions run through the state, which
//! closes the dialog once the request settles.

use leptos::html;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::editor::EditorDialog;
use super::state::{Dialog, ExplorerState};
use crate::components::icons as ic;
use crate::core::paths;

stylance::import_crate_style!(css, "src/components/explorer/dialog.module.css");

/// Renders the open dialog, if any.
#[component]
pub fn Dialogs() -> impl IntoView {
    let state = use_context::<ExplorerState>().expect("ExplorerState must be provided");

    move || {
        state.dialog.get().map(|dialog| match dialog {
            Dialog::Mkdir => view! { <MkdirDialog /> }.into_any(),
            Dialog::Rename { key } => view! { <RenameDialog key=key /> }.into_any(),
            Dialog::Delete { key } => view! { <DeleteDialog key=key /> }.into_any(),
            Dialog::BulkDelete { keys } => view! { <BulkDeleteDialog keys=keys /> }.into_any(),
            Dialog::Editor { key, name } => view! { <EditorDialog key=key name=name /> }.into_any(),
        })
    }
}

/// Dialog frame with title, body and OK / Cancel buttons.
///
/// Escape and Cancel close it unless a confirm action is in flight.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    on_ok: Callback<()>,
    #[prop(default = "OK")] ok_label: &'static str,
    /// Editor-sized frame
    #[prop(optional)]
    wide: bool,
    /// Style the OK button as destructive
    #[prop(optional)]
    danger: bool,
    children: Children,
) -> impl IntoView {
    let state = use_context::<ExplorerState>().expect("ExplorerState must be provided");
    let busy = state.busy;

    let close = move || {
        if !busy.get_untracked() {
            state.dialog.set(None);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            close();
        }
    };

    let frame_class = if wide {
        format!("{} {}", css::modal, css::modalWide)
    } else {
        css::modal.to_string()
    };
    let ok_class = if danger {
        format!("{} {} {}", css::button, css::buttonPrimary, css::buttonDanger)
    } else {
        format!("{} {}", css::button, css::buttonPrimary)
    };

    let aria_label = title.clone();
    view! {
        <div class=css::overlay on:keydown=on_keydown>
            <div class=frame_class role="dialog" aria-modal="true" aria-label=aria_label>
                <header class=css::modalHeader>
                    <span class=css::modalTitle>{title}</span>
                    <button class=css::closeButton title="Close" on:click=move |_| close()>
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>
                <div class=css::modalBody>{children()}</div>
                <footer class=css::modalFooter>
                    <button
                        class=css::button
                        disabled=move || busy.get()
                        on:click=move |_| close()
                    >
                        "Cancel"
                    </button>
                    <button
                        class=ok_class
                        disabled=move || busy.get()
                        on:click=move |_| on_ok.run(())
                    >
                        {move || if busy.get() { "Working..." } else { ok_label }}
                    </button>
                </footer>
            </div>
        </div>
    }
}

/// Single-line required input. Enter submits.
#[component]
fn TextField(
    value: RwSignal<String>,
    error: RwSignal<Option<&'static str>>,
    placeholder: &'static str,
    on_enter: Callback<()>,
) -> impl IntoView {
    let input_ref = NodeRef::<html::Input>::new();

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
            input.select();
        }
    });

    let input_class = move || {
        if error.get().is_some() {
            format!("{} {}", css::input, css::inputInvalid)
        } else {
            css::input.to_string()
        }
    };

    view! {
        <div class=css::field>
            <input
                class=input_class
                node_ref=input_ref
                type="text"
                autocomplete="off"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    error.set(None);
                }
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        on_enter.run(());
                    }
                }
            />
            {move || error.get().map(|msg| view! { <p class=css::fieldError>{msg}</p> })}
        </div>
    }
}

#[component]
fn MkdirDialog() -> impl IntoView {
    let state = use_context::<ExplorerState>().expect("ExplorerState must be provided");
    let name = RwSignal::new(String::new());
    let error = RwSignal::new(None);

    let on_ok = Callback::new(move |_| {
        if state.busy.get_untracked() {
            return;
        }
        let value = name.get_untracked();
        if value.trim().is_empty() {
            error.set(Some("Please enter directory name"));
            return;
        }
        state.mkdir(&value);
    });

    view! {
        <Modal title="New Directory" on_ok=on_ok>
            <TextField
                value=name
                error=error
                placeholder="Please enter directory name"
                on_enter=on_ok
            />
        </Modal>
    }
}

#[component]
fn RenameDialog(key: String) -> impl IntoView {
    let state = use_context::<ExplorerState>().expect("ExplorerState must be provided");
    let name = RwSignal::new(paths::file_name(&key).to_string());
    let error = RwSignal::new(None);

    let on_ok = Callback::new(move |_| {
        if state.busy.get_untracked() {
            return;
        }
        let value = name.get_untracked();
        if value.trim().is_empty() {
            error.set(Some("Please enter a new name"));
            return;
        }
        state.rename(key.clone(), &value);
    });

    view! {
        <Modal title="Rename" on_ok=on_ok>
            <TextField value=name error=error placeholder="New name" on_enter=on_ok />
        </Modal>
    }
}

#[component]
fn DeleteDialog(key: String) -> impl IntoView {
    let state = use_context::<ExplorerState>().expect("ExplorerState must be provided");
    let label = paths::file_name(&key).to_string();
    let on_ok = Callback::new(move |_| state.delete(key.clone()));

    view! {
        <Modal title="Delete" on_ok=on_ok ok_label="Delete" danger=true>
            <p class=css::confirm>
                <span class=css::confirmIcon><Icon icon=ic::CONFIRM /></span>
                "Are you sure you want to delete this item?"
            </p>
            <p class=css::confirmTarget>{label}</p>
        </Modal>
    }
}

#[component]
fn BulkDeleteDialog(keys: Vec<String>) -> impl IntoView {
    let state = use_context::<ExplorerState>().expect("ExplorerState must be provided");
    let count = keys.len();
    let on_ok = Callback::new(move |_| state.delete_many(keys.clone()));

    view! {
        <Modal title="Delete Selected" on_ok=on_ok ok_label="Delete" danger=true>
            <p class=css::confirm>
                <span class=css::confirmIcon><Icon icon=ic::CONFIRM /></span>
                "Are you sure you want to delete the selected items? "
                <strong class=css::count>{count}</strong>
                " items"
            </p>
        </Modal>
    }
}
