//! Notification stacks.
//!
//! - [`ToastStack`] - short messages, top center
//! - [`UploadNotices`] - one card per upload, bottom right
//!
//! Both render from the [`Notifier`](crate::app::Notifier) in `AppContext`.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{TaskId, ToastLevel, UploadPhase};
use crate::utils::format::render_progress;

stylance::import_crate_style!(css, "src/components/notice/notice.module.css");

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let notifier = ctx.notifier;

    view! {
        <div class=css::toastStack aria-live="polite">
            <For
                each=move || notifier.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let (class, icon) = match toast.level {
                        ToastLevel::Info => (css::toastInfo, ic::INFO),
                        ToastLevel::Success => (css::toastSuccess, ic::SUCCESS),
                        ToastLevel::Warning => (css::toastWarning, ic::WARNING),
                        ToastLevel::Error => (css::toastError, ic::ERROR),
                        ToastLevel::Loading => (css::toastLoading, ic::REFRESH),
                    };
                    view! {
                        <div class=format!("{} {}", css::toast, class) role="status">
                            <span class=css::toastIcon><Icon icon=icon /></span>
                            <span class=css::toastMessage>{toast.message}</span>
                            <button
                                class=css::close
                                title="Dismiss"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                <Icon icon=ic::CLOSE />
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn UploadNotices() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let notifier = ctx.notifier;

    view! {
        <div class=css::uploadStack>
            <For
                each=move || notifier.uploads.with(|u| u.iter().map(|t| t.id).collect::<Vec<_>>())
                key=|id| *id
                children=move |id| view! { <UploadCard id=id /> }
            />
        </div>
    }
}

/// Progress card of one upload, tracking the task by id.
#[component]
fn UploadCard(id: TaskId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let notifier = ctx.notifier;

    let task = Memo::new(move |_| {
        notifier
            .uploads
            .with(|u| u.iter().find(|t| t.id == id).cloned())
    });

    move || {
        task.get().map(|task| {
            let percent = task.phase.percent();
            let (class, icon) = match &task.phase {
                UploadPhase::Uploading { .. } | UploadPhase::Transferring { .. } => {
                    (css::uploadActive, ic::UPLOAD_FILE)
                }
                UploadPhase::Succeeded => (css::uploadSuccess, ic::SUCCESS),
                UploadPhase::Failed(_) => (css::uploadFailed, ic::ERROR),
                UploadPhase::Cancelled => (css::uploadActive, ic::INFO),
            };
            let failure = match &task.phase {
                UploadPhase::Failed(reason) => Some(reason.clone()),
                _ => None,
            };

            view! {
                <div class=format!("{} {}", css::upload, class)>
                    <header class=css::uploadHeader>
                        <span class=css::toastIcon><Icon icon=icon /></span>
                        <span class=css::uploadTitle>{task.phase.title()}</span>
                        <button
                            class=css::close
                            title="Close"
                            on:click=move |_| notifier.close_upload(id)
                        >
                            <Icon icon=ic::CLOSE />
                        </button>
                    </header>
                    <div class=css::uploadName title=task.name.clone()>{task.name.clone()}</div>
                    <div class=css::uploadSize>{render_progress(task.done_bytes(), task.size)}</div>
                    <div class=css::progress>
                        <div class=css::progressBar style=format!("width: {}%", percent)></div>
                    </div>
                    {failure.map(|reason| view! { <p class=css::uploadError>{reason}</p> })}
                </div>
            }
        })
    }
}
