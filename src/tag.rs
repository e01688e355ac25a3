//! Boundary tag encoding.
//!
//! Every chunk carries the same tag word at its head and its foot: the
//! chunk's body size (always a multiple of [`crate::heap::ALIGN`]) with the
//! low bit repurposed to mark the chunk free or in use.

const FREE_BIT: usize = 1;

/// A decoded head/foot tag word.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct Tag(usize);

impl Tag {
    /// Packs a body size and free/used state into a tag word.
    ///
    /// `body_size`'s low bit must already be clear (callers only ever pass
    /// alignment-rounded sizes).
    #[inline]
    pub const fn new(body_size: usize, free: bool) -> Self {
        debug_assert!(body_size & FREE_BIT == 0);
        Tag(body_size | (free as usize))
    }

    /// Reinterprets a raw word read from memory as a tag.
    #[inline]
    pub const fn from_raw(word: usize) -> Self {
        Tag(word)
    }

    /// The raw word to be written back to memory.
    #[inline]
    pub const fn into_raw(self) -> usize {
        self.0
    }

    /// The chunk's body size, with the free bit masked off.
    #[inline]
    pub const fn body_size(self) -> usize {
        self.0 & !FREE_BIT
    }

    /// Whether the chunk is currently free.
    #[inline]
    pub const fn is_free(self) -> bool {
        self.0 & FREE_BIT != 0
    }
}

impl core::fmt::Debug for Tag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tag")
            .field("body_size", &self.body_size())
            .field("is_free", &self.is_free())
            .finish()
    }
}
