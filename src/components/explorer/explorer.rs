//! Main explorer component.
//!
//! The file browser for one storage target: toolbar, file list, path bar and
//! the dialog layer. Changing `target` lists the new target's root.

use leptos::prelude::*;

use super::dialogs::Dialogs;
use super::file_list::FileList;
use super::header::Toolbar;
use super::pathbar::PathBar;
use super::state::ExplorerState;
use crate::app::AppContext;
use crate::config::{API_BASE_URL, DEFAULT_CAPABILITIES, DEFAULT_MIN_HEIGHT};
use crate::core::ApiClient;
use crate::models::{Capabilities, StorageTarget};

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// File explorer view component.
#[component]
pub fn Explorer(
    /// Storage backend to browse
    #[prop(into)]
    target: Signal<StorageTarget>,
    /// Actions granted to the user
    #[prop(default = DEFAULT_CAPABILITIES)]
    caps: Capabilities,
    /// Minimum height of the panel in pixels
    #[prop(default = DEFAULT_MIN_HEIGHT)]
    min_height: u32,
    /// Invoked after every refresh
    #[prop(optional)]
    on_refresh: Option<Callback<()>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let state = ExplorerState::new(
        ApiClient::new(API_BASE_URL, target.get_untracked()),
        caps,
        ctx.notifier,
        on_refresh,
    );
    provide_context(state);

    // Initial load, then a retarget whenever the target changes
    Effect::new(move |prev: Option<StorageTarget>| {
        let target = target.get();
        match prev {
            None => state.load(crate::core::paths::ROOT),
            Some(ref old) if *old != target => {
                state.retarget(ApiClient::new(API_BASE_URL, target.clone()))
            }
            Some(_) => {}
        }
        target
    });

    view! {
        <section class=css::explorer style=format!("min-height: {}px", min_height)>
            <Toolbar />
            <div class=css::body>
                <FileList />
            </div>
            <PathBar />
            <Dialogs />
        </section>
    }
}
