//! Core logic for talking to the storage management API.
//!
//! This module provides:
//! - [`ApiClient`] request/response plumbing and envelope interpretation
//! - [`upload`] XHR uploads with progress events
//! - [`paths`] remote path arithmetic

mod api;
pub mod envelope;
pub mod error;
pub mod paths;
pub mod upload;

pub use api::{ApiClient, Endpoints};
pub use error::{ApiError, UploadError};
