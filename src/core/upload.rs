//! XHR upload driver.
//!
//! Uploads go through `XMLHttpRequest` rather than `fetch` because only XHR
//! exposes upload progress. The server keeps the response open while it
//! writes to the storage backend and streams byte counts into the body, so
//! partial `responseText` is forwarded too. Handlers only emit
//! [`UploadEvent`]s; progress math lives in `models::upload`.

use std::cell::Cell;
use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::{File, FileList, FormData, ProgressEvent, XmlHttpRequest};

use super::error::UploadError;
use crate::models::UploadEvent;

/// `XMLHttpRequest.DONE`
const READY_STATE_DONE: u16 = 4;

/// A running upload. Dropping the handle does not cancel the transfer.
#[derive(Clone)]
pub struct UploadHandle {
    xhr: XmlHttpRequest,
    aborted: Rc<Cell<bool>>,
}

impl UploadHandle {
    /// Cancel the transfer. The observer receives `Finished(Err(Aborted))`.
    pub fn abort(&self) {
        self.aborted.set(true);
        let _ = self.xhr.abort();
    }
}

/// Start uploading `file` to `url` as multipart field `file`.
///
/// `observer` receives progress events and exactly one `Finished` event.
pub fn start_upload<F>(url: &str, file: &File, observer: F) -> Result<UploadHandle, UploadError>
where
    F: Fn(UploadEvent) + 'static,
{
    let xhr = XmlHttpRequest::new().map_err(|e| setup_error("create", e))?;
    xhr.open_with_async("POST", url, true)
        .map_err(|e| setup_error("open", e))?;

    let observer: Rc<dyn Fn(UploadEvent)> = Rc::new(observer);
    let aborted = Rc::new(Cell::new(false));
    let upload = xhr.upload().map_err(|e| setup_error("upload", e))?;

    // The handlers capture the request, so they must be unset once it is
    // done or neither side is ever released.
    let completion = {
        let xhr = xhr.clone();
        let upload = upload.clone();
        let observer = Rc::clone(&observer);
        Rc::new(Completion::new(
            move || {
                upload.set_onprogress(None);
                xhr.set_onreadystatechange(None);
                xhr.set_onerror(None);
            },
            move |result| observer(UploadEvent::Finished(result)),
        ))
    };

    // Browser -> API server progress
    let on_progress = {
        let observer = Rc::clone(&observer);
        Closure::<dyn Fn(ProgressEvent)>::new(move |event: ProgressEvent| {
            if event.length_computable() {
                observer(UploadEvent::Progress {
                    loaded: event.loaded() as u64,
                    total: event.total() as u64,
                });
            }
        })
    };
    upload.set_onprogress(Some(on_progress.into_js_value().unchecked_ref()));

    // API server -> storage progress, then completion
    let on_state_change = {
        let xhr = xhr.clone();
        let observer = Rc::clone(&observer);
        let aborted = Rc::clone(&aborted);
        let completion = Rc::clone(&completion);
        Closure::<dyn Fn()>::new(move || {
            if xhr.ready_state() != READY_STATE_DONE {
                if let Ok(Some(body)) = xhr.response_text()
                    && !body.is_empty()
                {
                    observer(UploadEvent::ServerProgress(body));
                }
                return;
            }
            let status = xhr.status().unwrap_or(0);
            completion.finish(UploadError::from_completion(status, aborted.get()));
        })
    };
    xhr.set_onreadystatechange(Some(on_state_change.into_js_value().unchecked_ref()));

    // Network errors fire both `readystatechange` and `error`
    let on_error = {
        let completion = Rc::clone(&completion);
        Closure::<dyn Fn()>::new(move || {
            completion.finish(Err(UploadError::Transport));
        })
    };
    xhr.set_onerror(Some(on_error.into_js_value().unchecked_ref()));

    if let Err(err) = send_file(&xhr, file) {
        completion.detach();
        return Err(err);
    }

    Ok(UploadHandle { xhr, aborted })
}

fn send_file(xhr: &XmlHttpRequest, file: &File) -> Result<(), UploadError> {
    let form = FormData::new().map_err(|e| setup_error("form", e))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| setup_error("form", e))?;
    xhr.send_with_opt_form_data(Some(&form))
        .map_err(|e| setup_error("send", e))
}

/// Delivers a request's result exactly once, detaching its handlers first.
struct Completion<R> {
    done: Cell<bool>,
    detach: Box<dyn Fn()>,
    deliver: Box<dyn Fn(R)>,
}

impl<R> Completion<R> {
    fn new(detach: impl Fn() + 'static, deliver: impl Fn(R) + 'static) -> Self {
        Self {
            done: Cell::new(false),
            detach: Box::new(detach),
            deliver: Box::new(deliver),
        }
    }

    /// Returns `false` if a result was already delivered.
    fn finish(&self, result: R) -> bool {
        if self.done.replace(true) {
            return false;
        }
        (self.detach)();
        (self.deliver)(result);
        true
    }

    fn detach(&self) {
        (self.detach)();
    }
}

fn setup_error(stage: &str, err: JsValue) -> UploadError {
    UploadError::Setup(format!(
        "{}: {}",
        stage,
        err.as_string().unwrap_or_else(|| format!("{:?}", err))
    ))
}

// =============================================================================
// File Input Helpers
// =============================================================================

/// A file picked by the user, with its tree-relative path for directory picks.
#[derive(Clone)]
pub struct PickedFile {
    pub file: File,
    pub name: String,
    pub size: u64,
    /// `webkitRelativePath`; empty for plain file picks
    pub relative_path: String,
}

/// Collect the files of an `<input type="file">` selection.
pub fn picked_files(list: &FileList) -> Vec<PickedFile> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| {
            let relative_path = Reflect::get(&file, &"webkitRelativePath".into())
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default();
            PickedFile {
                name: file.name(),
                size: file.size() as u64,
                relative_path,
                file,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting() -> (Rc<Cell<u32>>, Rc<Cell<u32>>, Completion<u32>) {
        let detached = Rc::new(Cell::new(0));
        let delivered = Rc::new(Cell::new(0));
        let completion = {
            let detached = Rc::clone(&detached);
            let delivered = Rc::clone(&delivered);
            Completion::new(
                move || detached.set(detached.get() + 1),
                move |value| delivered.set(delivered.get() + value),
            )
        };
        (detached, delivered, completion)
    }

    #[test]
    fn test_completion_detaches_and_delivers_once() {
        let (detached, delivered, completion) = counting();
        assert!(completion.finish(5));
        // error after readystatechange on a network failure
        assert!(!completion.finish(7));
        assert_eq!(detached.get(), 1);
        assert_eq!(delivered.get(), 5);
    }

    #[test]
    fn test_completion_detach_without_result() {
        let (detached, delivered, completion) = counting();
        completion.detach();
        assert_eq!(detached.get(), 1);
        assert_eq!(delivered.get(), 0);
    }
}
