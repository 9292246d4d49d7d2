//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`dom`] - Window access, hash navigation, downloads, console logging
//! - [`format`] - Human-readable sizes
//! - [`url`] - `encodeURIComponent`-compatible query building

pub mod dom;
pub mod format;
pub mod url;
