//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The API base URL is taken from the build environment so one bundle can be
//! served next to the backend or pointed at a remote one.

use crate::models::Capabilities;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown on the landing page.
pub const APP_NAME: &str = "Storage Browser";

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL of the storage management API.
///
/// Set `STORAGE_API_URL` at build time (e.g. `https://ops.example.com/api`).
/// Empty means the API is served from the same origin as the app.
pub const API_BASE_URL: &str = match option_env!("STORAGE_API_URL") {
    Some(url) => url,
    None => "",
};

/// Separator between byte counts in the streamed upload response body.
pub const UPLOAD_PROGRESS_SEPARATOR: char = '㊥';

// =============================================================================
// Routing
// =============================================================================

/// Hash the app redirects to when the backend reports an expired session.
pub const LOGIN_HASH: &str = "#/login";

/// Hash the app redirects to when the backend refuses an operation.
pub const PERMISSION_DENIED_HASH: &str = "#/permission-denied";

// =============================================================================
// Browser Defaults
// =============================================================================

/// Capabilities granted to the browser when the host does not restrict them.
pub const DEFAULT_CAPABILITIES: Capabilities = Capabilities {
    upload: true,
    download: true,
    delete: true,
    rename: true,
    edit: true,
};

/// Minimum height of the listing card in pixels.
pub const DEFAULT_MIN_HEIGHT: u32 = 280;

/// Viewport query below which secondary columns (size, mode) are hidden.
pub const MOBILE_BREAKPOINT: &str = "(max-width: 768px)";

// =============================================================================
// Notification Timing
// =============================================================================

/// Toast durations in milliseconds.
pub mod toast {
    /// Info and success messages.
    pub const SHORT_MS: u32 = 3000;
    /// Warnings and errors stay a little longer.
    pub const ERROR_MS: u32 = 5000;
    /// Cancellation notices.
    pub const CANCEL_MS: u32 = 10_000;
}

/// Upload notification durations in milliseconds.
pub mod upload_notice {
    /// Finished uploads close themselves after this delay.
    pub const SUCCESS_MS: u32 = 5000;
    /// Failed uploads stay longer so the message can be read.
    pub const FAILURE_MS: u32 = 10_000;
}
