use crate::vocab::VocabularyIndex;

/// Every spot that has `item`, in definition order. `item` must already be a
/// canonical name; it is compared as is.
pub fn spots_with_item<'a>(index: &'a VocabularyIndex, item: &str) -> Vec<&'a str> {
    if !index.contains_item(item) {
        return Vec::new();
    }
    index.spots_containing(item)
}

/// Every spot whose item list is a superset of `items` (canonical names,
/// repeats collapse).
pub fn spots_with_all_items<'a, S: AsRef<str>>(
    index: &'a VocabularyIndex,
    items: &[S],
) -> Vec<&'a str> {
    let mut wanted: Vec<&str> = Vec::with_capacity(items.len());
    for item in items {
        let item = item.as_ref();
        if !index.contains_item(item) {
            return Vec::new();
        }
        if !wanted.contains(&item) {
            wanted.push(item);
        }
    }

    index
        .spots()
        .iter()
        .filter(|spot| wanted.iter().all(|w| spot.items.iter().any(|i| i == w)))
        .map(|spot| spot.name.as_str())
        .collect()
}

/// One item takes the any-of path, several take the intersection path.
pub fn spots_matching<'a, S: AsRef<str>>(
    index: &'a VocabularyIndex,
    items: &[S],
) -> Vec<&'a str> {
    match items {
        [single] => spots_with_item(index, single.as_ref()),
        _ => spots_with_all_items(index, items),
    }
}

pub fn items_of_spot<'a>(index: &'a VocabularyIndex, spot: &str) -> Option<&'a [String]> {
    index.items_of(spot)
}
