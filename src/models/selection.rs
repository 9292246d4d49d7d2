//! Row selection for bulk actions.

use super::entry::PARENT_KEY;

/// Keys of the currently selected rows, in the order they were selected.
///
/// The parent row can never be selected. The set is cleared whenever the
/// listing is reloaded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    keys: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Flip the selection state of one row. Returns the new state.
    pub fn toggle(&mut self, key: &str) -> bool {
        if key == PARENT_KEY {
            return false;
        }
        if let Some(pos) = self.keys.iter().position(|k| k == key) {
            self.keys.remove(pos);
            false
        } else {
            self.keys.push(key.to_string());
            true
        }
    }

    /// Select every given key, or clear if all of them are already selected.
    pub fn toggle_all<'a>(&mut self, selectable: impl IntoIterator<Item = &'a str>) {
        let selectable: Vec<&str> = selectable
            .into_iter()
            .filter(|k| *k != PARENT_KEY)
            .collect();
        let all_selected =
            !selectable.is_empty() && selectable.iter().all(|k| self.contains(k));

        if all_selected {
            self.keys.clear();
        } else {
            self.keys = selectable.into_iter().map(String::from).collect();
        }
    }

    /// Whether every selectable key is selected (for the header checkbox).
    pub fn covers<'a>(&self, selectable: impl IntoIterator<Item = &'a str>) -> bool {
        let mut any = false;
        for key in selectable {
            any = true;
            if !self.contains(key) {
                return false;
            }
        }
        any
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Selected keys in selection order, never including the parent row.
    pub fn keys(&self) -> Vec<String> {
        self.keys.clone()
    }
}

/// Keys a bulk delete acts on: `keys` in order, minus the parent row.
pub fn deletable_keys(keys: &[String]) -> impl Iterator<Item = &str> {
    keys.iter().map(String::as_str).filter(|k| *k != PARENT_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut sel = Selection::new();
        assert!(sel.toggle("/a"));
        assert!(sel.contains("/a"));
        assert!(!sel.toggle("/a"));
        assert!(sel.is_empty());
    }

    #[test]
    fn test_parent_never_selected() {
        let mut sel = Selection::new();
        assert!(!sel.toggle(PARENT_KEY));
        assert!(sel.is_empty());

        sel.toggle_all(["..", "/a", "/b"]);
        assert_eq!(sel.keys(), vec!["/a".to_string(), "/b".to_string()]);
    }

    #[test]
    fn test_toggle_all_clears_when_full() {
        let mut sel = Selection::new();
        sel.toggle("/a");
        sel.toggle_all(["/a", "/b"]);
        assert_eq!(sel.len(), 2);
        assert!(sel.covers(["/a", "/b"]));

        sel.toggle_all(["/a", "/b"]);
        assert!(sel.is_empty());
    }

    #[test]
    fn test_keys_keep_selection_order() {
        let mut sel = Selection::new();
        sel.toggle("/z.log");
        sel.toggle("/a.log");
        sel.toggle("/m.log");
        sel.toggle("/a.log");
        assert_eq!(sel.keys(), vec!["/z.log".to_string(), "/m.log".to_string()]);
    }

    #[test]
    fn test_deletable_keys_skip_parent() {
        let keys = vec![
            "/b".to_string(),
            PARENT_KEY.to_string(),
            "/a".to_string(),
        ];
        assert_eq!(deletable_keys(&keys).collect::<Vec<_>>(), vec!["/b", "/a"]);
        assert_eq!(deletable_keys(&[PARENT_KEY.to_string()]).count(), 0);
    }

    #[test]
    fn test_covers_empty_listing() {
        let sel = Selection::new();
        assert!(!sel.covers(std::iter::empty()));

        let mut sel = Selection::new();
        sel.toggle_all(std::iter::empty());
        assert!(sel.is_empty());
    }
}
