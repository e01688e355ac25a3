//! `segfree`: a segregated free-list heap allocator over a caller-supplied
//! memory region.
//!
//! The allocator never asks the operating system for memory. The caller
//! hands [`Heap::create`] a pointer and a length — a static buffer, a
//! `mmap`'d region, a slice out of some other allocator — and the heap
//! services `alloc`/`free`/`realloc` requests against it from then on.
//! [`Heap::extend`] is the only way a heap grows, and it requires the
//! caller to have already made the extra bytes valid.
//!
//! ```
//! use core::ptr::NonNull;
//! use segfree::Heap;
//!
//! let mut buf = [0u8; 4096];
//! let base = NonNull::new(buf.as_mut_ptr()).unwrap();
//!
//! unsafe {
//!     let heap = Heap::create(base, buf.len(), 16).unwrap();
//!     let p = heap.alloc(64).unwrap();
//!     heap.free(Some(p));
//! }
//! ```
//!
//! This crate is strictly single-threaded and `no_std` (outside tests): no
//! locking, no thread-local caching, no OS-backed growth. See [`Heap`]'s
//! own documentation for the chunk layout and size-class scheme.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

mod node;
mod ptr_utils;
mod sizeclass;
mod tag;

mod heap;

pub use heap::{Heap, ALIGN, MIN_CHUNK};
