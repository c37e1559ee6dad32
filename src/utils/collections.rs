//! Order-preserving collection helpers shared by both classifiers.
//!
//! Every tie in here is broken by insertion order: counts are reported in the
//! order elements were first seen, and sorts are stable.
use std::collections::HashMap;
use std::hash::Hash;

/// Counts equal elements, returning `(element, count)` pairs in first-seen order.
pub fn frequencies<T: Eq + Hash + Clone>(items: &[T]) -> Vec<(T, usize)> {
    let mut positions: HashMap<&T, usize> = HashMap::with_capacity(items.len());
    let mut counts: Vec<(T, usize)> = Vec::new();

    for item in items {
        match positions.get(item) {
            Some(&position) => counts[position].1 += 1,
            None => {
                positions.insert(item, counts.len());
                counts.push((item.clone(), 1));
            }
        }
    }
    counts
}

/// Returns the most frequent element, or `None` for an empty slice.
///
/// Among elements with equal counts the one seen first wins.
pub fn most_frequent<T: Eq + Hash + Clone>(items: &[T]) -> Option<T> {
    sort_by_value_descending(frequencies(items))
        .into_iter()
        .next()
        .map(|(item, _)| item)
}

/// Stable sort of `(key, value)` entries by value, largest first.
pub fn sort_by_value_descending<K, V: PartialOrd>(mut entries: Vec<(K, V)>) -> Vec<(K, V)> {
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    entries
}

/// Stable sort of `(key, value)` entries by value, smallest first.
pub fn sort_by_value_ascending<K, V: PartialOrd>(mut entries: Vec<(K, V)>) -> Vec<(K, V)> {
    entries.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    entries
}

/// Copies `items` without the element at `index`.
///
/// An out-of-range `index` skips nothing.
pub fn copy_skipping_index<T: Clone>(items: &[T], index: usize) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != index)
        .map(|(_, item)| item.clone())
        .collect()
}
