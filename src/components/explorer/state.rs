//! Explorer state and operations.
//!
//! Every user action in the explorer goes through [`ExplorerState`]:
//! it calls the API, reports failures through the [`Notifier`], and updates
//! the signals the view renders from.

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::Notifier;
use crate::core::upload::{PickedFile, start_upload};
use crate::core::{ApiClient, ApiError, paths};
use crate::models::{
    Capabilities, FileEntry, Listing, Selection, SortState, TaskId, UploadBatch, UploadEvent,
    UploadTask, deletable_keys,
};
use crate::utils::dom;

/// Modal dialog currently open over the listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dialog {
    Mkdir,
    Rename { key: String },
    Delete { key: String },
    BulkDelete { keys: Vec<String> },
    Editor { key: String, name: String },
}

/// Reactive state of one explorer instance.
///
/// `Copy` like the other signal bundles, so handlers can capture it freely.
#[derive(Clone, Copy)]
pub struct ExplorerState {
    /// Client for the current storage target.
    pub client: RwSignal<ApiClient>,
    /// Actions granted by the host.
    pub caps: Capabilities,
    /// Directory the listing belongs to.
    pub current_dir: RwSignal<String>,
    /// Text of the path input (may differ from `current_dir` while typing).
    pub dir_input: RwSignal<String>,
    pub listing: RwSignal<Listing>,
    pub loading: RwSignal<bool>,
    pub selection: RwSignal<Selection>,
    pub sort: RwSignal<SortState>,
    pub dialog: RwSignal<Option<Dialog>>,
    /// A dialog's confirm action is in flight.
    pub busy: RwSignal<bool>,
    notifier: Notifier,
    on_refresh: Option<Callback<()>>,
}

impl ExplorerState {
    pub fn new(
        client: ApiClient,
        caps: Capabilities,
        notifier: Notifier,
        on_refresh: Option<Callback<()>>,
    ) -> Self {
        Self {
            client: RwSignal::new(client),
            caps,
            current_dir: RwSignal::new(paths::ROOT.to_string()),
            dir_input: RwSignal::new(paths::ROOT.to_string()),
            listing: RwSignal::new(Listing::default()),
            loading: RwSignal::new(false),
            selection: RwSignal::new(Selection::new()),
            sort: RwSignal::new(SortState::default()),
            dialog: RwSignal::new(None),
            busy: RwSignal::new(false),
            notifier,
            on_refresh,
        }
    }

    pub fn notifier(&self) -> Notifier {
        self.notifier
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    /// Fetch and show `dir`. Selection is cleared whatever the outcome.
    pub fn load(&self, dir: &str) {
        let Some(client) = self.client.try_get_untracked() else {
            return;
        };
        let this = *self;
        let dir = paths::or_root(dir).to_string();
        self.loading.set(true);

        spawn_local(async move {
            let result = client.list(&dir).await;
            let mut loaded = None;
            this.selection
                .update(|selection| loaded = Some(finish_load(dir, result, selection)));
            match loaded {
                Some(Ok(listing)) => {
                    this.current_dir.set(listing.dir.clone());
                    this.dir_input.set(listing.dir.clone());
                    this.listing.set(listing);
                }
                Some(Err(err)) => this.notifier.report(&err),
                None => {}
            }
            this.loading.set(false);
        });
    }

    /// Point the explorer at a new storage target and list its root.
    pub fn retarget(&self, client: ApiClient) {
        self.client.set(client);
        self.sort.set(SortState::default());
        self.dialog.set(None);
        self.load(paths::ROOT);
    }

    /// Reload the current directory and notify the host.
    pub fn refresh(&self) {
        let Some(dir) = self.current_dir.try_get_untracked() else {
            return;
        };
        self.load(&dir);
        if let Some(cb) = self.on_refresh {
            cb.run(());
        }
    }

    /// Double-click on a row: enter directories and links, go up on `..`.
    pub fn open(&self, entry: &FileEntry) {
        if entry.is_parent() {
            let parent = paths::parent_dir(&self.current_dir.get_untracked());
            self.load(&parent);
        } else if entry.is_navigable() {
            self.load(&entry.path);
        }
    }

    // ------------------------------------------------------------------------
    // Row actions
    // ------------------------------------------------------------------------

    pub fn download(&self, key: &str) {
        let url = self.client.with_untracked(|c| c.download_url(key));
        if !dom::trigger_download(&url) {
            self.notifier.warning("Download could not be started");
        }
    }

    /// Delete one entry, then refresh.
    pub fn delete(&self, key: String) {
        let this = *self;
        let client = self.client.get_untracked();
        self.busy.set(true);
        spawn_local(async move {
            if let Err(err) = client.remove(&key).await {
                this.notifier.report(&err);
            }
            this.busy.set(false);
            this.dialog.set(None);
            this.refresh();
        });
    }

    /// Delete every key one after another, then refresh once.
    pub fn delete_many(&self, keys: Vec<String>) {
        let this = *self;
        let client = self.client.get_untracked();
        self.busy.set(true);
        spawn_local(async move {
            for key in deletable_keys(&keys) {
                if let Err(err) = client.remove(key).await {
                    this.notifier.report(&err);
                }
            }
            this.busy.set(false);
            this.dialog.set(None);
            this.refresh();
        });
    }

    /// Create `name` inside the current directory.
    pub fn mkdir(&self, name: &str) {
        let this = *self;
        let client = self.client.get_untracked();
        let dir = paths::join_path(&self.current_dir.get_untracked(), name.trim());
        self.busy.set(true);
        spawn_local(async move {
            match client.mkdir(&dir).await {
                Ok(()) => {
                    this.notifier.success("Create success");
                    if let Some(dir) = this.current_dir.try_get_untracked() {
                        this.load(&dir);
                    }
                }
                Err(err) => this.notifier.report(&err),
            }
            this.busy.set(false);
            this.dialog.set(None);
        });
    }

    /// Rename `old_key` to `new_name` within the current directory.
    pub fn rename(&self, old_key: String, new_name: &str) {
        let Some(new_key) =
            paths::rename_request(&self.current_dir.get_untracked(), &old_key, new_name)
        else {
            self.notifier.success("Rename success");
            self.dialog.set(None);
            return;
        };

        let this = *self;
        let client = self.client.get_untracked();
        self.busy.set(true);
        spawn_local(async move {
            match client.rename(&old_key, &new_key).await {
                Ok(()) => {
                    this.notifier.success("Rename success");
                    this.refresh();
                }
                Err(err) => this.notifier.report(&err),
            }
            this.busy.set(false);
            this.dialog.set(None);
        });
    }

    /// Save editor content.
    pub fn save(&self, key: String, content: String) {
        let this = *self;
        let client = self.client.get_untracked();
        self.busy.set(true);
        spawn_local(async move {
            if let Err(err) = client.edit(&key, &content).await {
                this.notifier.report(&err);
            }
            this.busy.set(false);
            this.dialog.set(None);
        });
    }

    // ------------------------------------------------------------------------
    // Uploads
    // ------------------------------------------------------------------------

    /// Upload picked files. With `tree`, each file keeps its path relative
    /// to the picked directory. The listing refreshes once all have settled.
    pub fn upload(&self, files: Vec<PickedFile>, tree: bool) {
        if files.is_empty() {
            return;
        }
        let this = *self;
        let notifier = self.notifier;
        let current = self.current_dir.get_untracked();
        let batch = Rc::new(Cell::new(UploadBatch::new(files.len())));

        let settle = {
            let batch = Rc::clone(&batch);
            Rc::new(move || {
                let mut b = batch.get();
                let done = b.settle();
                batch.set(b);
                if done {
                    this.refresh();
                }
            })
        };

        for picked in files {
            let dir = if tree {
                paths::tree_upload_dir(&current, &picked.relative_path, &picked.name)
            } else {
                current.clone()
            };
            let url = self.client.with_untracked(|c| c.endpoints().upload(&dir));
            let id = TaskId::next();
            let task = UploadTask::new(id, picked.name.clone(), picked.size);

            let observer = {
                let settle = Rc::clone(&settle);
                move |event: UploadEvent| {
                    let finished = matches!(event, UploadEvent::Finished(_));
                    notifier.apply_upload_event(id, event);
                    if finished {
                        settle();
                    }
                }
            };

            match start_upload(&url, &picked.file, observer) {
                Ok(handle) => notifier.track_upload(task, handle),
                Err(err) => {
                    notifier.upload_failed_to_start(task, err);
                    settle();
                }
            }
        }
    }
}

/// Outcome of listing `dir`. The selection is cleared either way.
fn finish_load(
    dir: String,
    result: Result<Vec<FileEntry>, ApiError>,
    selection: &mut Selection,
) -> Result<Listing, ApiError> {
    selection.clear();
    result.map(|raw| Listing::new(dir, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(keys: &[&str]) -> Selection {
        let mut selection = Selection::new();
        for key in keys {
            selection.toggle(key);
        }
        selection
    }

    #[test]
    fn test_finish_load_success_clears_selection() {
        let mut selection = selected(&["/data/a", "/data/b"]);
        let raw = vec![FileEntry {
            path: "/data/a".to_string(),
            name: "a".to_string(),
            ..Default::default()
        }];

        let listing = finish_load("/data".to_string(), Ok(raw), &mut selection).unwrap();
        assert!(selection.is_empty());
        assert_eq!(listing.dir, "/data");
        assert!(listing.entries()[0].is_parent());
    }

    #[test]
    fn test_finish_load_failure_clears_selection() {
        let mut selection = selected(&["/data/a"]);
        let result = finish_load(
            "/data".to_string(),
            Err(ApiError::Network("offline".to_string())),
            &mut selection,
        );
        assert!(selection.is_empty());
        assert_eq!(result, Err(ApiError::Network("offline".to_string())));
    }
}
