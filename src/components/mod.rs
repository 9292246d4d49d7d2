//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`explorer`] - File browser for one storage target
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`notice`] - Toast and upload notification stacks

pub mod explorer;
pub mod icons;
pub mod notice;
pub mod router;

pub use router::AppRouter;
