//! Ordered ticker list backing the asset registry.
//!
//! Removal is O(1): the removed slot is filled by the last ticker and the
//! list is popped. Only the former last element changes position.

/// Append `ticker`; returns false if it was already listed.
pub fn insert(list: &mut Vec<u64>, ticker: u64) -> bool {
    if list.contains(&ticker) {
        return false;
    }
    list.push(ticker);
    true
}

/// Swap-with-last-then-pop removal. Returns the index the ticker occupied.
pub fn swap_remove(list: &mut Vec<u64>, ticker: u64) -> Option<usize> {
    let index = list.iter().position(|t| *t == ticker)?;
    list.swap_remove(index);
    Some(index)
}
