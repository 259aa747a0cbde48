/// The collection store owns the canonical item list for one gallery
/// section and answers "what subset matches the current filter."
///
/// It is deliberately dumb: the list is replaced wholesale when a fetch
/// completes, and filtering is a pure function over the in-memory list.
/// An empty filtered result is a valid outcome the UI renders as an
/// explicit empty state, never an error.
use super::data::{FilterKey, Material, Project};

/// Items that can be grouped by a category key.
///
/// Both portfolio projects (categorized by backend category id) and material
/// swatches (categorized by folder) go through the same store and carousel
/// engine via this trait.
pub trait Categorized {
    fn category_key(&self) -> Option<&str>;
}

impl Categorized for Project {
    fn category_key(&self) -> Option<&str> {
        self.category_id.as_deref()
    }
}

impl Categorized for Material {
    fn category_key(&self) -> Option<&str> {
        Some(self.folder)
    }
}

/// Canonical item list for one gallery section.
#[derive(Debug, Clone, Default)]
pub struct CollectionStore<T> {
    items: Vec<T>,
}

impl<T: Categorized + Clone> CollectionStore<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Replace the canonical list wholesale. Derived sequences become stale
    /// and must be rebuilt by the caller.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pure filter: the full list for `FilterKey::All`, otherwise the ordered
    /// subsequence whose category key matches. Relative order is preserved
    /// exactly as fetched (newest first per the backend contract).
    pub fn filtered_by(&self, filter: &FilterKey) -> Vec<T> {
        match filter {
            FilterKey::All => self.items.clone(),
            FilterKey::Category(_) => self
                .items
                .iter()
                .filter(|item| filter.matches(item.category_key()))
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Card {
        id: u32,
        key: Option<&'static str>,
    }

    impl Categorized for Card {
        fn category_key(&self) -> Option<&str> {
            self.key
        }
    }

    fn card(id: u32, key: Option<&'static str>) -> Card {
        Card { id, key }
    }

    #[test]
    fn test_all_returns_everything_in_order() {
        let store = CollectionStore::new(vec![
            card(1, Some("sala")),
            card(2, Some("cocina")),
            card(3, None),
        ]);

        let all = store.filtered_by(&FilterKey::All);
        assert_eq!(all.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_keeps_only_matching_preserving_order() {
        let store = CollectionStore::new(vec![
            card(1, Some("sala")),
            card(2, Some("cocina")),
            card(3, Some("sala")),
        ]);

        let filtered = store.filtered_by(&FilterKey::Category("sala".into()));
        assert_eq!(
            filtered.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[test]
    fn test_uncategorized_items_never_match_a_category() {
        let store = CollectionStore::new(vec![card(1, None), card(2, Some("sala"))]);

        let filtered = store.filtered_by(&FilterKey::Category("sala".into()));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
    }

    #[test]
    fn test_no_matches_is_empty_not_an_error() {
        let store = CollectionStore::new(vec![card(1, Some("sala"))]);

        let filtered = store.filtered_by(&FilterKey::Category("dormitorio".into()));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_set_items_replaces_wholesale() {
        let mut store = CollectionStore::new(vec![card(1, Some("sala"))]);
        store.set_items(vec![card(7, None), card(8, None)]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.items()[0].id, 7);
    }
}
