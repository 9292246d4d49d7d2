//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`FileEntry`], [`Listing`], [`SortState`] - Directory listing and column sorting
//! - [`Selection`] - Row selection for bulk actions
//! - [`StorageTarget`], [`Capabilities`] - What is browsed and what may be done to it
//! - [`UploadTask`], [`UploadBatch`] - Upload progress tracking
//! - [`Toast`] - User-facing notifications
//! - [`AppRoute`] - Hash-based navigation

mod entry;
mod notice;
mod route;
mod selection;
mod storage;
mod upload;

pub use entry::{FileEntry, Listing, PARENT_KEY, SortColumn, SortDirection, SortState};
pub use notice::{Toast, ToastLevel, upsert_toast};
pub use route::AppRoute;
pub use selection::{Selection, deletable_keys};
pub use storage::{Capabilities, StorageTarget};
pub use upload::{TaskId, UploadBatch, UploadEvent, UploadPhase, UploadTask};
