use std::collections::{HashMap, HashSet};

///////////////////////////////
/// VOCABULARY STRUCTS      ///
///////////////////////////////

/// A gathering spot and the items that can be collected there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spot {
    pub name: String,
    pub items: Vec<String>, // set semantics, definition order
}

/// Immutable snapshot of the spot -> items relation.
///
/// Built once by the loader and shared read-only afterwards; nothing on this
/// type takes `&mut self`.
#[derive(Debug, Clone)]
pub struct VocabularyIndex {
    spots: Vec<Spot>,
    spot_lookup: HashMap<String, usize>,
    all_spots: Vec<String>,
    all_items: Vec<String>,  // first-seen order across spots
    item_set: HashSet<String>,
}

impl VocabularyIndex {
    /// Assumes `spots` already passed validation (unique, non-blank names and
    /// non-empty, duplicate-free item lists).
    pub(super) fn new(spots: Vec<Spot>) -> Self {
        let mut spot_lookup: HashMap<String, usize> = HashMap::new();
        let mut all_spots: Vec<String> = Vec::with_capacity(spots.len());
        let mut all_items: Vec<String> = Vec::new();
        let mut item_set: HashSet<String> = HashSet::new();

        for (idx, spot) in spots.iter().enumerate() {
            spot_lookup.insert(spot.name.clone(), idx);
            all_spots.push(spot.name.clone());

            for item in &spot.items {
                if item_set.insert(item.clone()) {
                    all_items.push(item.clone());
                }
            }
        }

        VocabularyIndex {
            spots,
            spot_lookup,
            all_spots,
            all_items,
            item_set,
        }
    }

    /// Spots in definition order.
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    pub fn all_spots(&self) -> &[String] {
        &self.all_spots
    }

    pub fn all_items(&self) -> &[String] {
        &self.all_items
    }

    pub fn contains_item(&self, name: &str) -> bool {
        self.item_set.contains(name)
    }

    pub fn spot_count(&self) -> usize {
        self.spots.len()
    }

    pub fn item_count(&self) -> usize {
        self.all_items.len()
    }

    /// Items collectable at `spot`, or `None` for an unknown spot name.
    pub fn items_of(&self, spot: &str) -> Option<&[String]> {
        self.spot_lookup
            .get(spot)
            .map(|&idx| self.spots[idx].items.as_slice())
    }

    /// Every spot whose item list contains `item`, in definition order.
    pub fn spots_containing(&self, item: &str) -> Vec<&str> {
        self.spots
            .iter()
            .filter(|s| s.items.iter().any(|i| i == item))
            .map(|s| s.name.as_str())
            .collect()
    }
}
