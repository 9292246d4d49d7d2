//! File explorer UI components.
//!
//! Components:
//! - [`Explorer`] - Main explorer view for one storage target
//! - `FileList` - Table of the current directory
//! - `Toolbar` - Path input and action buttons
//! - `Dialogs` - New directory, rename, delete and editor dialogs

mod dialogs;
mod editor;
#[allow(clippy::module_inception)]
mod explorer;
mod file_list;
mod header;
mod pathbar;
mod state;

pub use explorer::Explorer;
