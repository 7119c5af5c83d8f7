use std::collections::BTreeMap;

/// Sparse row-id → selected map. Absent ids read as unselected, and ids
/// that are not in the current data are kept untouched, so a selection
/// survives page changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionMap {
    entries: BTreeMap<String, bool>,
}

impl SelectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.entries.get(id).copied().unwrap_or(false)
    }

    pub fn set(&mut self, id: impl Into<String>, selected: bool) {
        let id = id.into();
        if selected {
            self.entries.insert(id, true);
        } else {
            self.entries.remove(&id);
        }
    }

    /// Flip one id and return its new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        let next = !self.is_selected(id);
        self.set(id, next);
        next
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.values().filter(|selected| **selected).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn selected_ids(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(id, _)| id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_is_unselected() {
        let map = SelectionMap::new();
        assert!(!map.is_selected("c_1"));
        assert!(map.is_empty());
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut map = SelectionMap::new();
        assert!(map.toggle("c_1"));
        assert!(map.is_selected("c_1"));
        assert!(!map.toggle("c_1"));
        assert!(!map.is_selected("c_1"));
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_selected_ids_sorted() {
        let mut map = SelectionMap::new();
        map.set("b", true);
        map.set("a", true);
        map.set("c", false);
        assert_eq!(map.selected_ids().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
