use std::cmp::Ordering;

use super::entry::Entry;

/// Moves the entry at `index` towards the front of an otherwise sorted slice
/// until its predecessor is at least as heavy. Returns its final index.
///
/// Equal weights halt the walk, so existing ties keep their relative order.
pub(crate) fn bubble_up<T, W: PartialOrd>(entries: &mut [Entry<T, W>], mut index: usize) -> usize {
    debug_assert!(index < entries.len());

    while index > 0 && entries[index].weight > entries[index - 1].weight {
        entries.swap(index, index - 1);
        index -= 1;
    }

    index
}

/// Whether the entry at `index` sits correctly against its two neighbours.
pub(crate) fn is_placed<T, W: PartialOrd>(entries: &[Entry<T, W>], index: usize) -> bool {
    let heavier = |a: &W, b: &W| a.partial_cmp(b) == Some(Ordering::Greater);

    let before_ok = index == 0 || !heavier(&entries[index].weight, &entries[index - 1].weight);
    let after_ok = index + 1 >= entries.len()
        || !heavier(&entries[index + 1].weight, &entries[index].weight);

    before_ok && after_ok
}
