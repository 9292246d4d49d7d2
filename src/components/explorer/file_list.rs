//! File list component for explorer view.
//!
//! Displays the current listing as a table with a selection column,
//! sortable headers and per-row actions. Size and mode columns collapse on
//! narrow screens.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use super::state::{Dialog, ExplorerState};
use crate::components::icons::{self as ic, entry_icon};
use crate::config::MOBILE_BREAKPOINT;
use crate::models::{FileEntry, SortColumn, SortDirection};
use crate::utils::format::render_size;

stylance::import_crate_style!(css, "src/components/explorer/file_list.module.css");

#[component]
pub fn FileList() -> impl IntoView {
    let state = use_context::<ExplorerState>().expect("ExplorerState must be provided");
    let compact = use_media_query(MOBILE_BREAKPOINT.to_string());

    let rows = Memo::new(move |_| {
        let sort = state.sort.get();
        state.listing.with(|listing| listing.sorted(sort))
    });
    let has_selectable = Memo::new(move |_| {
        state
            .listing
            .with(|listing| listing.selectable_keys().next().is_some())
    });
    let all_selected = Memo::new(move |_| {
        state.listing.with(|listing| {
            state
                .selection
                .with(|selection| selection.covers(listing.selectable_keys()))
        })
    });

    let on_toggle_all = move |_| {
        state.listing.with_untracked(|listing| {
            state
                .selection
                .update(|selection| selection.toggle_all(listing.selectable_keys()));
        });
    };

    let table_class = move || {
        if compact.get() {
            format!("{} {}", css::table, css::compact)
        } else {
            css::table.to_string()
        }
    };

    view! {
        <div class=css::wrapper>
            <table class=table_class role="grid" aria-label="File list">
                <thead>
                    <tr class=css::headerRow>
                        <th class=css::checkCell>
                            <input
                                type="checkbox"
                                aria-label="Select all"
                                prop:checked=move || all_selected.get()
                                disabled=move || !has_selectable.get()
                                on:change=on_toggle_all
                            />
                        </th>
                        <SortHeader column=SortColumn::Name label="Name" />
                        <SortHeader column=SortColumn::Size label="Size" secondary=true />
                        <SortHeader column=SortColumn::Modified label="Modified" />
                        <th class=format!("{} {}", css::headerCell, css::secondary)>"Mode"</th>
                        <th class=format!("{} {}", css::headerCell, css::actionCell)>"Action"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|entry| (entry.path.clone(), entry.mod_time.clone(), entry.size)
                        children=move |entry| view! { <FileRow entry=entry /> }
                    />
                </tbody>
            </table>

            <Show when=move || !state.loading.get() && !has_selectable.get()>
                <div class=css::empty>"No data"</div>
            </Show>
            <Show when=move || state.loading.get()>
                <div class=css::loading>"Loading..."</div>
            </Show>
        </div>
    }
}

/// Column header that cycles its sort on click.
#[component]
fn SortHeader(
    column: SortColumn,
    label: &'static str,
    /// Hidden in compact layout
    #[prop(optional)]
    secondary: bool,
) -> impl IntoView {
    let state = use_context::<ExplorerState>().expect("ExplorerState must be provided");
    let direction = Signal::derive(move || state.sort.get().direction_of(column));

    let class = if secondary {
        format!("{} {} {}", css::headerCell, css::sortable, css::secondary)
    } else {
        format!("{} {}", css::headerCell, css::sortable)
    };

    let aria_sort = move || match direction.get() {
        Some(SortDirection::Ascend) => "ascending",
        Some(SortDirection::Descend) => "descending",
        None => "none",
    };

    view! {
        <th
            class=class
            aria-sort=aria_sort
            on:click=move |_| state.sort.update(|sort| *sort = sort.cycle(column))
        >
            <span>{label}</span>
            <span class=css::sortIcon>
                {move || match direction.get() {
                    Some(SortDirection::Ascend) => view! { <Icon icon=ic::SORT_ASC /> }.into_any(),
                    Some(SortDirection::Descend) => view! { <Icon icon=ic::SORT_DESC /> }.into_any(),
                    None => ().into_any(),
                }}
            </span>
        </th>
    }
}

#[component]
fn FileRow(entry: FileEntry) -> impl IntoView {
    let state = use_context::<ExplorerState>().expect("ExplorerState must be provided");

    let key = entry.key().to_string();
    let is_parent = entry.is_parent();
    let icon = if is_parent {
        ic::PARENT_DIR
    } else {
        entry_icon(entry.is_dir, entry.is_link, entry.extension().as_deref())
    };

    // Size only means something for regular files
    let size = (!entry.is_dir && !entry.is_link).then(|| render_size(entry.size));

    let is_selected = Signal::derive({
        let key = key.clone();
        move || state.selection.with(|s| s.contains(&key))
    });

    let on_toggle = {
        let key = key.clone();
        move |_| {
            state.selection.update(|s| {
                s.toggle(&key);
            });
        }
    };

    let on_dblclick = {
        let entry = entry.clone();
        move |_: leptos::ev::MouseEvent| state.open(&entry)
    };

    let name_class = if entry.is_dir {
        format!("{} {}", css::name, css::nameDir)
    } else {
        css::name.to_string()
    };

    let row_class = move || {
        if is_selected.get() {
            format!("{} {}", css::row, css::selected)
        } else {
            css::row.to_string()
        }
    };

    let aria_label = if entry.is_dir {
        format!("Folder: {}", entry.name)
    } else {
        format!("File: {}", entry.name)
    };

    view! {
        <tr
            class=row_class
            on:dblclick=on_dblclick
            aria-label=aria_label
            aria-selected=move || is_selected.get()
        >
            <td class=css::checkCell>
                <input
                    type="checkbox"
                    aria-label="Select"
                    disabled=is_parent
                    prop:checked=move || is_selected.get()
                    on:change=on_toggle
                />
            </td>
            <td class=css::nameCell>
                <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
                <span class=name_class>{entry.name.clone()}</span>
            </td>
            <td class=format!("{} {}", css::cell, css::secondary)>{size}</td>
            <td class=css::cell>{entry.mod_time.clone()}</td>
            <td class=format!("{} {} {}", css::cell, css::secondary, css::mode)>
                {entry.mode.clone()}
            </td>
            <td class=format!("{} {}", css::cell, css::actionCell)>
                {(!is_parent).then(|| view! { <RowActions entry=entry.clone() /> })}
            </td>
        </tr>
    }
}

/// Download, edit, rename and delete buttons of one row.
#[component]
fn RowActions(entry: FileEntry) -> impl IntoView {
    let state = use_context::<ExplorerState>().expect("ExplorerState must be provided");
    let caps = state.caps;
    let key = entry.key().to_string();

    let on_download = {
        let key = key.clone();
        move |_| state.download(&key)
    };
    let on_edit = {
        let key = key.clone();
        let name = entry.name.clone();
        move |_| {
            state.dialog.set(Some(Dialog::Editor {
                key: key.clone(),
                name: name.clone(),
            }))
        }
    };
    let on_rename = {
        let key = key.clone();
        move |_| state.dialog.set(Some(Dialog::Rename { key: key.clone() }))
    };
    let on_delete = move |_| state.dialog.set(Some(Dialog::Delete { key: key.clone() }));

    view! {
        <div class=css::actions>
            <button
                class=css::actionButton
                title="Download"
                disabled=!caps.can_download(entry.is_dir, entry.is_link)
                on:click=on_download
            >
                <Icon icon=ic::DOWNLOAD />
            </button>
            <button
                class=css::actionButton
                title="Edit"
                disabled=!caps.can_edit(entry.is_dir, entry.is_link)
                on:click=on_edit
            >
                <Icon icon=ic::EDIT />
            </button>
            <button
                class=css::actionButton
                title="Rename"
                disabled=!caps.rename
                on:click=on_rename
            >
                <Icon icon=ic::RENAME />
            </button>
            <button
                class=format!("{} {}", css::actionButton, css::danger)
                title="Delete"
                disabled=!caps.delete
                on:click=on_delete
            >
                <Icon icon=ic::DELETE />
            </button>
        </div>
    }
}
