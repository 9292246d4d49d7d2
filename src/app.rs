//! Root application module.
//!
//! Contains the main App component, AppContext definition, the Notifier
//! that owns toasts and upload notices, and application-level setup logic
//! following Leptos conventions.

use std::collections::HashMap;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::AppRouter;
use crate::config::{toast, upload_notice};
use crate::core::ApiError;
use crate::core::upload::UploadHandle;
use crate::models::{AppRoute, TaskId, Toast, ToastLevel, UploadEvent, UploadPhase, UploadTask};
use crate::utils::dom::{console_log, console_warn};

// ============================================================================
// Notifier
// ============================================================================

/// User-facing notifications managed with Leptos signals.
///
/// Holds two independent stacks: short toast messages (top center) and
/// upload progress notices (bottom right). Upload transports are kept here
/// too so that closing a notice can abort its request.
///
/// # Note
///
/// This struct is `Copy` because all fields are arena-backed handles.
#[derive(Clone, Copy)]
pub struct Notifier {
    /// Toast messages, oldest first.
    pub toasts: RwSignal<Vec<Toast>>,
    /// Upload notices, oldest first.
    pub uploads: RwSignal<Vec<UploadTask>>,
    /// Running transports by task; removed when the task settles.
    handles: StoredValue<HashMap<TaskId, UploadHandle>, LocalStorage>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            uploads: RwSignal::new(Vec::new()),
            handles: StoredValue::new_local(HashMap::new()),
        }
    }

    // ------------------------------------------------------------------------
    // Toasts
    // ------------------------------------------------------------------------

    /// Show a toast, replacing any toast with the same key.
    pub fn push(&self, toast: Toast) {
        let id = toast.id;
        let duration = toast.duration_ms;
        self.toasts
            .update(|toasts| crate::models::upsert_toast(toasts, toast));

        if let Some(ms) = duration {
            let toasts = self.toasts;
            spawn_local(async move {
                TimeoutFuture::new(ms).await;
                toasts.update(|t| t.retain(|toast| toast.id != id));
            });
        }
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(Toast::new(ToastLevel::Warning, message));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(Toast::new(ToastLevel::Success, message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(Toast::new(ToastLevel::Error, message));
    }

    /// Sticky spinner toast; replace or dismiss it through `key`.
    pub fn loading(&self, key: &str, message: impl Into<String>) {
        self.push(Toast::new(ToastLevel::Loading, message).with_key(key));
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|t| t.retain(|toast| toast.id != id));
    }

    pub fn dismiss_key(&self, key: &str) {
        self.toasts
            .update(|t| t.retain(|toast| toast.key.as_deref() != Some(key)));
    }

    /// Surface an API failure: redirect on auth errors, toast otherwise.
    pub fn report(&self, err: &ApiError) {
        console_warn(&format!("storage api: {:?}", err));
        match err {
            ApiError::Unauthenticated => AppRoute::Login.push(),
            ApiError::Forbidden => AppRoute::PermissionDenied.push(),
            other => self.error(other.to_string()),
        }
    }

    // ------------------------------------------------------------------------
    // Upload notices
    // ------------------------------------------------------------------------

    /// Register a started upload.
    pub fn track_upload(&self, task: UploadTask, handle: UploadHandle) {
        let id = task.id;
        self.handles.update_value(|h| {
            h.insert(id, handle);
        });
        self.uploads.update(|u| u.push(task));
    }

    /// Show an upload that failed before its transport started.
    pub fn upload_failed_to_start(&self, mut task: UploadTask, err: crate::core::UploadError) {
        task.apply(UploadEvent::Finished(Err(err)));
        let id = task.id;
        self.uploads.update(|u| u.push(task));
        self.expire_upload(id, upload_notice::FAILURE_MS);
    }

    /// Feed a transport event into the task's notice.
    pub fn apply_upload_event(&self, id: TaskId, event: UploadEvent) {
        let mut settled = None;
        self.uploads.update(|uploads| {
            if let Some(task) = uploads.iter_mut().find(|t| t.id == id)
                && task.apply(event)
                && task.phase.is_settled()
            {
                settled = Some((task.name.clone(), task.phase.clone()));
            }
        });

        let Some((name, phase)) = settled else {
            return;
        };
        self.handles.update_value(|h| {
            h.remove(&id);
        });
        console_log(&format!("upload {} ({}): {}", id, name, phase.title()));
        match phase {
            UploadPhase::Succeeded => self.expire_upload(id, upload_notice::SUCCESS_MS),
            UploadPhase::Failed(_) => self.expire_upload(id, upload_notice::FAILURE_MS),
            _ => self.remove_upload(id),
        }
    }

    /// Close an upload notice. Closing one that is still running aborts it.
    pub fn close_upload(&self, id: TaskId) {
        let mut cancelled_name = None;
        self.uploads.update(|uploads| {
            if let Some(task) = uploads.iter_mut().find(|t| t.id == id)
                && task.cancel()
            {
                cancelled_name = Some(task.name.clone());
            }
        });

        let mut handle = None;
        self.handles.update_value(|h| handle = h.remove(&id));
        if let Some(handle) = handle {
            handle.abort();
        }
        self.remove_upload(id);

        if let Some(name) = cancelled_name {
            console_log(&format!("upload {} aborted", id));
            self.push(
                Toast::new(ToastLevel::Info, format!("Upload canceled: \"{}\"", name))
                    .with_duration(toast::CANCEL_MS),
            );
        }
    }

    fn remove_upload(&self, id: TaskId) {
        self.uploads.update(|u| u.retain(|t| t.id != id));
    }

    fn expire_upload(&self, id: TaskId, ms: u32) {
        let uploads = self.uploads;
        spawn_local(async move {
            TimeoutFuture::new(ms).await;
            uploads.update(|u| u.retain(|t| t.id != id));
        });
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current hash route.
    pub route: RwSignal<AppRoute>,

    /// Toasts and upload notices.
    pub notifier: Notifier,
}

impl AppContext {
    /// Creates a new application context from the current URL.
    pub fn new() -> Self {
        Self {
            route: RwSignal::new(AppRoute::current()),
            notifier: Notifier::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f5f6f8;
                    color: #1f2329;
                    font-family: -apple-system, 'Segoe UI', sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #d4380d; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #595959; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #ffffff;
                            border: 1px solid #e5e6eb;
                            padding: 1rem;
                            border-radius: 4px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #8c8c8c;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #d4380d;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #1677ff;
                                color: white;
                                border: none;
                                padding: 0.6rem 1.6rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
