//! Application router component.
//!
//! Handles URL-based routing with hash history.
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: `AppContext::route` mirrors `location.hash`
//! - **Explorer stays mounted across targets**: switching `#/{kind}/{id}`
//!   retargets the existing explorer instead of rebuilding it
//! - **Notification stacks are always mounted**: uploads keep reporting
//!   while the user navigates

use leptos::prelude::*;
use leptos_icons::Icon;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::explorer::Explorer;
use crate::components::icons as ic;
use crate::components::notice::{ToastStack, UploadNotices};
use crate::config::{APP_NAME, DEFAULT_CAPABILITIES};
use crate::models::{AppRoute, Capabilities, StorageTarget};

stylance::import_crate_style!(css, "src/components/router.module.css");

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// - `#/{kind}/{id}` → Explorer on that target
/// - `#/{kind}/{id}?readonly` → Explorer with download-only capabilities
/// - `#/login` → sign-in required page
/// - `#/permission-denied` → access denied page
/// - anything else → landing page
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let route = ctx.route;

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let target = Memo::new(move |_| route.with(|r| r.target().cloned()));
    let read_only = Memo::new(move |_| matches!(route.get(), AppRoute::Browse { read_only: true, .. }));

    view! {
        <main class=css::page>
            {move || match route.get() {
                AppRoute::Browse { .. } => ().into_any(),
                AppRoute::Landing => view! { <Landing /> }.into_any(),
                AppRoute::Login => view! {
                    <Message
                        icon=ic::LOCKED
                        title="Sign in required"
                        detail="Your session has expired or you are not signed in."
                    />
                }.into_any(),
                AppRoute::PermissionDenied => view! {
                    <Message
                        icon=ic::LOCKED
                        title="Permission denied"
                        detail="You do not have access to this storage or operation."
                    />
                }.into_any(),
            }}

            // Remount only when switching between read-only and full access
            <Show when=move || target.with(Option::is_some)>
                {move || {
                    let caps = if read_only.get() {
                        Capabilities::read_only()
                    } else {
                        DEFAULT_CAPABILITIES
                    };
                    let target = Signal::derive(move || {
                        target.get().unwrap_or_else(|| StorageTarget::new("", ""))
                    });
                    view! { <Explorer target=target caps=caps /> }
                }}
            </Show>
        </main>

        <ToastStack />
        <UploadNotices />
    }
}

// ============================================================================
// Pages
// ============================================================================

/// Shown when the URL names no storage target.
#[component]
fn Landing() -> impl IntoView {
    view! {
        <div class=css::message>
            <span class=css::messageIcon><Icon icon=ic::STORAGE /></span>
            <h1 class=css::messageTitle>{APP_NAME}</h1>
            <p class=css::messageDetail>"Open a storage target to browse its files:"</p>
            <code class=css::hint>"#/{storage-type}/{storage-id}"</code>
        </div>
    }
}

#[component]
fn Message(icon: icondata::Icon, title: &'static str, detail: &'static str) -> impl IntoView {
    view! {
        <div class=css::message>
            <span class=css::messageIcon><Icon icon=icon /></span>
            <h1 class=css::messageTitle>{title}</h1>
            <p class=css::messageDetail>{detail}</p>
        </div>
    }
}
