//! `clz`-based size-class indexing.
//!
//! Bins are power-of-two-ish buckets derived from the gap between the
//! leading-zero counts of a chunk's body size and the heap's total payload
//! size: the closer a size is to the heap's own size, the lower (coarser,
//! "biggest chunks") its index; the smaller a size is relative to the
//! heap, the higher (finer, eventually clamped) its index.

/// Computes the size-class slot for a body size of `size` bytes within a
/// heap whose total payload is `heap_size` bytes, for a table of
/// `table_len` slots.
///
/// Returns `None` when `size` could never be satisfied by a heap of
/// `heap_size` bytes (the request is unconditionally too large), which
/// the reference C implementation detects by leaning on unsigned
/// underflow; this is computed explicitly here in a wider signed type
/// instead, per the reference's own `_nmCLZ`-underflow caveat.
#[inline]
pub fn class_of(size: usize, heap_size: usize, table_len: usize) -> Option<usize> {
    debug_assert!(table_len > 0);

    let clz_size = size.leading_zeros() as i64;
    let clz_heap = heap_size.leading_zeros() as i64;
    let raw = clz_size - clz_heap;

    if raw < 0 {
        return None;
    }

    Some((raw as usize).min(table_len - 1))
}
