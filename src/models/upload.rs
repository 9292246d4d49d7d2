//! Upload progress state.
//!
//! The XHR driver in `core::upload` only emits [`UploadEvent`]s; how those
//! events move a task between phases lives here so it can be tested without
//! a browser.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::UPLOAD_PROGRESS_SEPARATOR;

/// Identifier of one upload task, unique for the lifetime of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "upload-{}", self.0)
    }
}

/// Where an upload currently stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadPhase {
    /// Browser is sending bytes to the API server
    Uploading { loaded: u64, percent: u8 },
    /// API server is writing the received bytes to the storage backend
    Transferring { stored: u64, percent: u8 },
    Succeeded,
    Failed(String),
    Cancelled,
}

impl UploadPhase {
    pub fn percent(&self) -> u8 {
        match self {
            Self::Uploading { percent, .. } | Self::Transferring { percent, .. } => *percent,
            Self::Succeeded => 100,
            Self::Failed(_) | Self::Cancelled => 0,
        }
    }

    /// Succeeded, failed and cancelled tasks are settled.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed(_) | Self::Cancelled)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Uploading { .. } => "Uploading...",
            Self::Transferring { .. } => "Transferring...",
            Self::Succeeded => "Upload success",
            Self::Failed(_) => "Upload Failed",
            Self::Cancelled => "Upload canceled",
        }
    }
}

/// Raw signals coming out of the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadEvent {
    /// `upload.onprogress` with a computable length
    Progress { loaded: u64, total: u64 },
    /// Partial response body while the request is still open
    ServerProgress(String),
    /// Request completed, failed, or was aborted
    Finished(Result<(), crate::core::error::UploadError>),
}

/// One file being uploaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadTask {
    pub id: TaskId,
    pub name: String,
    /// File size in bytes as reported by the browser
    pub size: u64,
    pub phase: UploadPhase,
}

impl UploadTask {
    pub fn new(id: TaskId, name: impl Into<String>, size: u64) -> Self {
        Self {
            id,
            name: name.into(),
            size,
            phase: UploadPhase::Uploading {
                loaded: 0,
                percent: 0,
            },
        }
    }

    /// Bytes shown as done for the current phase.
    pub fn done_bytes(&self) -> u64 {
        match self.phase {
            UploadPhase::Uploading { loaded, .. } => loaded,
            UploadPhase::Transferring { stored, .. } => stored,
            UploadPhase::Succeeded => self.size,
            UploadPhase::Failed(_) | UploadPhase::Cancelled => 0,
        }
    }

    /// Apply a transport event. Returns `true` when the visible state changed.
    ///
    /// Settled tasks ignore further events, so a late progress callback after
    /// an abort cannot resurrect the task.
    pub fn apply(&mut self, event: UploadEvent) -> bool {
        if self.phase.is_settled() {
            return false;
        }

        match event {
            UploadEvent::Progress { loaded, total } => {
                // A multipart body is never empty, so `total == 0` only means
                // the browser has not measured it yet.
                if total > 0 && loaded == total {
                    let next = UploadPhase::Transferring {
                        stored: 0,
                        percent: 99,
                    };
                    if matches!(self.phase, UploadPhase::Transferring { .. }) {
                        return false;
                    }
                    self.phase = next;
                    return true;
                }
                let percent = capped_percent(loaded, total);
                match self.phase {
                    UploadPhase::Uploading { percent: prev, .. } if prev == percent => false,
                    UploadPhase::Uploading { .. } => {
                        self.phase = UploadPhase::Uploading { loaded, percent };
                        true
                    }
                    // server side already running; browser-side counters are stale
                    _ => false,
                }
            }
            UploadEvent::ServerProgress(body) => {
                let Some(stored) = parse_server_progress(&body) else {
                    return false;
                };
                let percent = capped_percent(stored, self.size);
                if self.phase == (UploadPhase::Transferring { stored, percent }) {
                    return false;
                }
                self.phase = UploadPhase::Transferring { stored, percent };
                true
            }
            UploadEvent::Finished(Ok(())) => {
                self.phase = UploadPhase::Succeeded;
                true
            }
            UploadEvent::Finished(Err(crate::core::error::UploadError::Aborted)) => {
                self.phase = UploadPhase::Cancelled;
                true
            }
            UploadEvent::Finished(Err(err)) => {
                self.phase = UploadPhase::Failed(err.to_string());
                true
            }
        }
    }

    /// Mark as cancelled by the user.
    pub fn cancel(&mut self) -> bool {
        if self.phase.is_settled() {
            return false;
        }
        self.phase = UploadPhase::Cancelled;
        true
    }
}

/// `floor(done * 100 / total)`, held at 99 until the task succeeds.
pub fn capped_percent(done: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (u128::from(done) * 100 / u128::from(total)).min(99);
    pct as u8
}

/// Parse the byte count from a streamed upload response.
///
/// The server appends the number of bytes written so far, separated by
/// `㊥`. Only the last complete token is meaningful.
pub fn parse_server_progress(body: &str) -> Option<u64> {
    let last = body
        .split(UPLOAD_PROGRESS_SEPARATOR)
        .map(str::trim)
        .rfind(|s| !s.is_empty())?;
    let digits: String = last.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

// =============================================================================
// Upload Batch
// =============================================================================

/// Tracks one multi-file upload so the listing is refreshed once at the end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadBatch {
    total: usize,
    settled: usize,
}

impl UploadBatch {
    pub fn new(total: usize) -> Self {
        Self { total, settled: 0 }
    }

    /// Record one settled task. Returns `true` exactly once, when the last
    /// task of the batch settles.
    pub fn settle(&mut self) -> bool {
        if self.settled >= self.total {
            return false;
        }
        self.settled += 1;
        self.settled == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::UploadError;

    fn task(size: u64) -> UploadTask {
        UploadTask::new(TaskId::next(), "backup.tar.gz", size)
    }

    #[test]
    fn test_task_ids_are_unique() {
        let a = TaskId::next();
        let b = TaskId::next();
        assert_ne!(a, b);
        assert!(a.to_string().starts_with("upload-"));
    }

    #[test]
    fn test_capped_percent() {
        assert_eq!(capped_percent(0, 0), 0);
        assert_eq!(capped_percent(50, 200), 25);
        assert_eq!(capped_percent(199, 200), 99);
        assert_eq!(capped_percent(200, 200), 99);
        assert_eq!(capped_percent(u64::MAX, u64::MAX), 99);
    }

    #[test]
    fn test_parse_server_progress() {
        assert_eq!(parse_server_progress(""), None);
        assert_eq!(parse_server_progress("1024"), Some(1024));
        assert_eq!(parse_server_progress("1024㊥4096㊥"), Some(4096));
        assert_eq!(parse_server_progress("㊥㊥8192㊥"), Some(8192));
        assert_eq!(parse_server_progress("㊥garbage"), None);
    }

    #[test]
    fn test_progress_dedups_same_percent() {
        let mut t = task(1000);
        assert!(t.apply(UploadEvent::Progress {
            loaded: 100,
            total: 1000
        }));
        assert_eq!(t.phase.percent(), 10);
        assert!(!t.apply(UploadEvent::Progress {
            loaded: 105,
            total: 1000
        }));
        assert_eq!(t.done_bytes(), 100);
        assert!(t.apply(UploadEvent::Progress {
            loaded: 500,
            total: 1000
        }));
        assert_eq!(t.phase.percent(), 50);
    }

    #[test]
    fn test_full_upload_switches_to_transferring() {
        let mut t = task(1000);
        assert!(t.apply(UploadEvent::Progress {
            loaded: 1000,
            total: 1000
        }));
        assert_eq!(
            t.phase,
            UploadPhase::Transferring {
                stored: 0,
                percent: 99
            }
        );
        assert_eq!(t.phase.title(), "Transferring...");

        // stale browser progress is ignored once the server is writing
        assert!(!t.apply(UploadEvent::Progress {
            loaded: 400,
            total: 1000
        }));

        assert!(t.apply(UploadEvent::ServerProgress("300㊥600㊥".into())));
        assert_eq!(t.phase.percent(), 60);
        assert_eq!(t.done_bytes(), 600);
    }

    #[test]
    fn test_finish_states() {
        let mut ok = task(10);
        assert!(ok.apply(UploadEvent::Finished(Ok(()))));
        assert_eq!(ok.phase.percent(), 100);
        assert_eq!(ok.done_bytes(), 10);

        let mut failed = task(10);
        failed.apply(UploadEvent::Finished(Err(UploadError::Status(500))));
        assert!(matches!(failed.phase, UploadPhase::Failed(_)));

        let mut aborted = task(10);
        aborted.apply(UploadEvent::Finished(Err(UploadError::Aborted)));
        assert_eq!(aborted.phase, UploadPhase::Cancelled);
    }

    #[test]
    fn test_settled_task_ignores_events() {
        let mut t = task(10);
        assert!(t.cancel());
        assert!(!t.cancel());
        assert!(!t.apply(UploadEvent::Finished(Ok(()))));
        assert!(!t.apply(UploadEvent::ServerProgress("5".into())));
        assert_eq!(t.phase, UploadPhase::Cancelled);
    }

    #[test]
    fn test_batch_fires_once() {
        let mut batch = UploadBatch::new(3);
        assert!(!batch.settle());
        assert!(!batch.settle());
        assert!(batch.settle());
        assert!(!batch.settle());
    }
}
