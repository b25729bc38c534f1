/// Map a logical position to its offset in classical packed storage.
///
/// Only the upper triangle (`row <= col`) is physically stored, in
/// row-major order: all of row 0's entries from the diagonal onward, then
/// row 1's, and so on down to the single entry of the last row.  Positions
/// below the diagonal are normalized by swapping, so `(i, j)` and `(j, i)`
/// always map to the same offset.
///
/// # Panics
///
/// Panics if `row >= order` or `col >= order`.  Out-of-range coordinates
/// are a bug in the caller, not a recoverable input condition.
#[inline]
pub fn packed_index(order: usize, row: usize, col: usize) -> usize {
    assert!(
        row < order && col < order,
        "position ({}, {}) out of bounds for order {}",
        row,
        col,
        order,
    );
    let (i, j) = if row <= col { (row, col) } else { (col, row) };

    // Row i begins after rows of lengths order, order-1, ..., order-i+1.
    i * (2 * order - i + 1) / 2 + (j - i)
}
