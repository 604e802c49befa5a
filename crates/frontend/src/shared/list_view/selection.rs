use std::collections::HashSet;

/// Tracks which rows on the current page are checked.
///
/// Selection is page-local by design: select-all replaces the whole
/// set with the visible ids, and `prune` drops anything that scrolled
/// out of view after a page or filter change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    selected: HashSet<String>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `id`: absent ids are added, present ids
    /// removed.
    pub fn toggle(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// True iff the selection equals `page_ids` as an id set. Compares
    /// members, not counts, so a stray selection from another page can
    /// never masquerade as "all selected". Two empty sets are
    /// vacuously all-selected; callers rendering a header checkbox
    /// should additionally check for an empty page.
    pub fn is_all_selected(&self, page_ids: &[String]) -> bool {
        self.selected.len() == page_ids.len()
            && page_ids.iter().all(|id| self.selected.contains(id))
    }

    /// Select-all for the current page: clears when the page is
    /// already fully selected, otherwise replaces any prior selection
    /// with exactly `page_ids`.
    pub fn toggle_all_on_page(&mut self, page_ids: &[String]) {
        if self.is_all_selected(page_ids) {
            self.selected.clear();
        } else {
            self.selected = page_ids.iter().cloned().collect();
        }
    }

    /// Drops ids that are no longer visible.
    pub fn prune(&mut self, page_ids: &[String]) {
        self.selected.retain(|id| page_ids.iter().any(|p| p == id));
    }

    pub fn ids(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn toggle_is_self_inverse() {
        let mut sel = SelectionTracker::new();
        sel.toggle("1");
        assert!(sel.is_selected("1"));
        sel.toggle("1");
        assert!(!sel.is_selected("1"));
    }

    #[test]
    fn toggle_all_cycles_between_full_page_and_empty() {
        let mut sel = SelectionTracker::new();
        let page = ids(&["1", "2"]);

        sel.toggle_all_on_page(&page);
        assert!(sel.is_selected("1") && sel.is_selected("2"));

        sel.toggle_all_on_page(&page);
        assert!(sel.is_empty());
    }

    #[test]
    fn toggle_all_replaces_a_partial_selection() {
        let mut sel = SelectionTracker::new();
        sel.toggle("9");
        sel.toggle_all_on_page(&ids(&["1", "2"]));
        assert!(!sel.is_selected("9"));
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn all_selected_compares_ids_not_counts() {
        let mut sel = SelectionTracker::new();
        sel.toggle("a");
        // Same count, different member: must not read as all-selected.
        assert!(!sel.is_all_selected(&ids(&["b"])));
        assert!(sel.is_all_selected(&ids(&["a"])));
    }

    #[test]
    fn empty_selection_on_an_empty_page_is_vacuously_all_selected() {
        let sel = SelectionTracker::new();
        assert!(sel.is_all_selected(&[]));
    }

    #[test]
    fn prune_drops_ids_that_left_the_visible_page() {
        let mut sel = SelectionTracker::new();
        sel.toggle("1");
        sel.toggle("2");
        sel.prune(&ids(&["2", "3"]));
        assert!(!sel.is_selected("1"));
        assert!(sel.is_selected("2"));
    }
}
