//! Directory listing types.
//!
//! [`FileEntry`] mirrors one record of the backend's `ls` response.
//! [`Listing`] is the display-ordered list for one directory, including the
//! synthetic parent row, and [`SortState`] drives column sorting on top of it.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Key, name and path of the synthetic parent-directory row.
pub const PARENT_KEY: &str = "..";

// =============================================================================
// File Entry
// =============================================================================

/// One file or directory record in a listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    /// Full path on the storage; unique within a listing and used as row key
    pub path: String,
    /// Display name (last path segment)
    pub name: String,
    #[serde(default)]
    pub is_dir: bool,
    #[serde(default)]
    pub is_link: bool,
    /// Size in bytes (meaningless for directories and links)
    #[serde(default)]
    pub size: u64,
    /// Modification time as formatted by the server
    #[serde(default)]
    pub mod_time: String,
    /// Permission string (e.g. "-rw-r--r--")
    #[serde(default)]
    pub mode: String,
}

impl FileEntry {
    /// The synthetic `..` row shown in every directory but `/`.
    pub fn parent() -> Self {
        Self {
            path: PARENT_KEY.to_string(),
            name: PARENT_KEY.to_string(),
            is_dir: true,
            ..Default::default()
        }
    }

    /// Row key.
    #[inline]
    pub fn key(&self) -> &str {
        &self.path
    }

    #[inline]
    pub fn is_parent(&self) -> bool {
        self.path == PARENT_KEY
    }

    /// Directories and symlinks can be entered by double click.
    #[inline]
    pub fn is_navigable(&self) -> bool {
        self.is_dir || self.is_link
    }

    /// Lowercased extension of the name, if any.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() {
            // dotfile such as ".bashrc"
            return None;
        }
        Some(ext.to_lowercase())
    }
}

// =============================================================================
// Listing
// =============================================================================

/// Display-ordered entries of one directory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listing {
    /// Directory this listing was fetched for
    pub dir: String,
    entries: Vec<FileEntry>,
}

impl Listing {
    /// Build a listing from raw server records.
    ///
    /// Directories come first, then files; both groups are ordered by
    /// upper-cased name. Every directory except `/` gets a leading `..` row.
    pub fn new(dir: impl Into<String>, raw: Vec<FileEntry>) -> Self {
        let dir = dir.into();
        let (mut dirs, mut files): (Vec<_>, Vec<_>) = raw.into_iter().partition(|e| e.is_dir);
        dirs.sort_by(by_upper_name);
        files.sort_by(by_upper_name);

        let mut entries = Vec::with_capacity(dirs.len() + files.len() + 1);
        if dir != "/" {
            entries.push(FileEntry::parent());
        }
        entries.extend(dirs);
        entries.extend(files);

        Self { dir, entries }
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Keys that may be selected (everything but the parent row).
    pub fn selectable_keys(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| !e.is_parent())
            .map(FileEntry::key)
    }

    /// Entries reordered by `sort`, with the parent row pinned first.
    pub fn sorted(&self, sort: SortState) -> Vec<FileEntry> {
        let mut entries = self.entries().to_vec();
        let Some((column, direction)) = sort.active() else {
            return entries;
        };

        let split = entries.iter().take_while(|e| e.is_parent()).count();
        let rest = &mut entries[split..];
        rest.sort_by(|a, b| {
            let ord = column.compare(a, b);
            match direction {
                SortDirection::Ascend => ord,
                SortDirection::Descend => ord.reverse(),
            }
        });
        entries
    }
}

fn by_upper_name(a: &FileEntry, b: &FileEntry) -> Ordering {
    a.name.to_uppercase().cmp(&b.name.to_uppercase())
}

// =============================================================================
// Column Sorting
// =============================================================================

/// Sortable listing columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Size,
    Modified,
}

impl SortColumn {
    fn compare(self, a: &FileEntry, b: &FileEntry) -> Ordering {
        match self {
            Self::Name => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name)),
            Self::Size => a.size.cmp(&b.size),
            Self::Modified => a.mod_time.cmp(&b.mod_time),
        }
    }

    /// Direction a fresh click on this column starts with.
    fn first_direction(self) -> SortDirection {
        match self {
            Self::Size => SortDirection::Ascend,
            Self::Name | Self::Modified => SortDirection::Descend,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascend,
    Descend,
}

/// Current column sort; `None` keeps the listing order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortState(Option<(SortColumn, SortDirection)>);

impl SortState {
    pub fn active(self) -> Option<(SortColumn, SortDirection)> {
        self.0
    }

    /// Direction currently applied to `column`, if it is the sorted one.
    pub fn direction_of(self, column: SortColumn) -> Option<SortDirection> {
        self.0.filter(|(c, _)| *c == column).map(|(_, d)| d)
    }

    /// Advance the sort after a click on `column`.
    ///
    /// Each column cycles through its first direction, the opposite one,
    /// then back to unsorted. Clicking another column restarts its cycle.
    pub fn cycle(self, column: SortColumn) -> Self {
        let first = column.first_direction();
        match self.direction_of(column) {
            None => Self(Some((column, first))),
            Some(d) if d == first => {
                let second = match first {
                    SortDirection::Ascend => SortDirection::Descend,
                    SortDirection::Descend => SortDirection::Ascend,
                };
                Self(Some((column, second)))
            }
            Some(_) => Self(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, is_dir: bool, size: u64, mod_time: &str) -> FileEntry {
        FileEntry {
            path: format!("/data/{}", name),
            name: name.to_string(),
            is_dir,
            size,
            mod_time: mod_time.to_string(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<FileEntry> {
        vec![
            entry("zeta.txt", false, 10, "2024-03-01 10:00:00"),
            entry("Beta", true, 0, "2024-01-01 10:00:00"),
            entry("alpha.log", false, 300, "2024-02-01 10:00:00"),
            entry("alpha", true, 0, "2024-04-01 10:00:00"),
            entry("Gamma.md", false, 20, "2023-12-31 23:59:59"),
        ]
    }

    fn names(entries: &[FileEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_deserialize_wire_format() {
        let json = r#"[
            {"path":"/etc/hosts","name":"hosts","isDir":false,"isLink":false,
             "size":221,"modTime":"2024-05-01 08:00:00","mode":"-rw-r--r--"},
            {"path":"/etc/ssl","name":"ssl","isDir":true}
        ]"#;
        let entries: Vec<FileEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].size, 221);
        assert_eq!(entries[0].mode, "-rw-r--r--");
        assert!(entries[1].is_dir);
        assert_eq!(entries[1].mod_time, "");
    }

    #[test]
    fn test_listing_root_has_no_parent() {
        let listing = Listing::new("/", sample());
        assert_eq!(
            names(listing.entries()),
            vec!["alpha", "Beta", "alpha.log", "Gamma.md", "zeta.txt"]
        );
    }

    #[test]
    fn test_listing_subdir_has_parent_first() {
        let listing = Listing::new("/data", sample());
        assert_eq!(listing.entries()[0], FileEntry::parent());
        assert_eq!(listing.entries().len(), 6);
        assert!(!listing.selectable_keys().any(|k| k == PARENT_KEY));
        assert_eq!(listing.selectable_keys().count(), 5);
    }

    #[test]
    fn test_listing_empty_dir() {
        let listing = Listing::new("/empty", vec![]);
        assert_eq!(listing.entries().len(), 1);
        assert!(listing.entries()[0].is_parent());

        let root = Listing::new("/", vec![]);
        assert!(root.entries().is_empty());
    }

    #[test]
    fn test_sort_cycle_name() {
        let s = SortState::default().cycle(SortColumn::Name);
        assert_eq!(s.active(), Some((SortColumn::Name, SortDirection::Descend)));
        let s = s.cycle(SortColumn::Name);
        assert_eq!(s.active(), Some((SortColumn::Name, SortDirection::Ascend)));
        let s = s.cycle(SortColumn::Name);
        assert_eq!(s.active(), None);
    }

    #[test]
    fn test_sort_cycle_size_starts_ascending() {
        let s = SortState::default().cycle(SortColumn::Size);
        assert_eq!(s.direction_of(SortColumn::Size), Some(SortDirection::Ascend));
        assert_eq!(s.direction_of(SortColumn::Name), None);

        // switching column restarts that column's cycle
        let s = s.cycle(SortColumn::Modified);
        assert_eq!(
            s.active(),
            Some((SortColumn::Modified, SortDirection::Descend))
        );
    }

    #[test]
    fn test_sorted_pins_parent() {
        let listing = Listing::new("/data", sample());

        let by_size = listing.sorted(SortState::default().cycle(SortColumn::Size));
        assert!(by_size[0].is_parent());
        assert_eq!(by_size.last().unwrap().name, "alpha.log");

        let by_size_desc = listing.sorted(
            SortState::default()
                .cycle(SortColumn::Size)
                .cycle(SortColumn::Size),
        );
        assert!(by_size_desc[0].is_parent());
        assert_eq!(by_size_desc[1].name, "alpha.log");

        let by_time = listing.sorted(SortState::default().cycle(SortColumn::Modified));
        assert!(by_time[0].is_parent());
        assert_eq!(by_time[1].name, "alpha");
        assert_eq!(by_time.last().unwrap().name, "Gamma.md");
    }

    #[test]
    fn test_sorted_unsorted_keeps_listing_order() {
        let listing = Listing::new("/data", sample());
        assert_eq!(listing.sorted(SortState::default()), listing.entries());
    }

    #[test]
    fn test_extension() {
        assert_eq!(entry("report.PDF", false, 0, "").extension(), Some("pdf".into()));
        assert_eq!(entry("archive.tar.gz", false, 0, "").extension(), Some("gz".into()));
        assert_eq!(entry("Makefile", false, 0, "").extension(), None);
        assert_eq!(entry(".bashrc", false, 0, "").extension(), None);
        assert_eq!(entry(".config.json", false, 0, "").extension(), Some("json".into()));
    }
}
