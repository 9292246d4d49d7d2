//! Storage targets and the capability flags gating browser actions.

use std::fmt;

/// A backend-managed storage target, addressed as `/{kind}/{id}` in API paths.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StorageTarget {
    /// Storage type segment (e.g. "sftp", "assets", "storages")
    pub kind: String,
    /// Identifier of the storage within its type
    pub id: String,
}

impl StorageTarget {
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// API path prefix for this target, without a trailing slash.
    pub fn api_prefix(&self) -> String {
        format!("/{}/{}", self.kind, self.id)
    }
}

impl fmt::Display for StorageTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// Actions the host grants to the browser.
///
/// `upload` also covers creating directories. Download and edit are further
/// restricted to regular files by [`Capabilities::can_download`] and
/// [`Capabilities::can_edit`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub upload: bool,
    pub download: bool,
    pub delete: bool,
    pub rename: bool,
    pub edit: bool,
}

impl Capabilities {
    /// Read-only browsing: download only.
    pub const fn read_only() -> Self {
        Self {
            upload: false,
            download: true,
            delete: false,
            rename: false,
            edit: false,
        }
    }

    pub fn can_download(&self, is_dir: bool, is_link: bool) -> bool {
        self.download && !is_dir && !is_link
    }

    pub fn can_edit(&self, is_dir: bool, is_link: bool) -> bool {
        self.edit && !is_dir && !is_link
    }

    /// Bulk delete needs both a non-empty selection and the delete grant.
    pub fn can_bulk_delete(&self, selected: usize) -> bool {
        self.delete && selected > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_prefix() {
        let target = StorageTarget::new("storages", "42");
        assert_eq!(target.api_prefix(), "/storages/42");
        assert_eq!(target.to_string(), "storages:42");
    }

    #[test]
    fn test_download_edit_only_for_regular_files() {
        let caps = crate::config::DEFAULT_CAPABILITIES;
        assert!(caps.can_download(false, false));
        assert!(!caps.can_download(true, false));
        assert!(!caps.can_download(false, true));
        assert!(caps.can_edit(false, false));
        assert!(!caps.can_edit(true, false));
        assert!(!caps.can_edit(false, true));
    }

    #[test]
    fn test_bulk_delete_gate() {
        let caps = crate::config::DEFAULT_CAPABILITIES;
        assert!(!caps.can_bulk_delete(0));
        assert!(caps.can_bulk_delete(3));

        let ro = Capabilities::read_only();
        assert!(!ro.can_bulk_delete(3));
        assert!(ro.can_download(false, false));
        assert!(!ro.can_edit(false, false));
    }
}
