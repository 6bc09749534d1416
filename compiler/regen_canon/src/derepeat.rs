//! Shortest-period detection, shared by literal text and child sequences.

/// Split `items` into its shortest repeating unit.
///
/// Returns `(unit_len, count)` with `unit_len * count == items.len()`, where
/// `count` is as large as possible. Input of length 0 or 1, or input with no
/// shorter period, yields `(items.len(), 1)`.
pub fn shortest_period<T: PartialEq>(items: &[T]) -> (usize, usize) {
    let len = items.len();
    if len <= 1 {
        return (len, 1);
    }
    for unit in 1..len {
        if len % unit != 0 {
            continue;
        }
        let (head, rest) = items.split_at(unit);
        if rest.chunks(unit).all(|chunk| chunk == head) {
            return (unit, len / unit);
        }
    }
    (len, 1)
}
