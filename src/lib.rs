//! This crate provides the
//! [`SpillVec`](https://docs.rs/spill-vec/latest/spill_vec/generic/struct.SpillVec.html)
//! data structure for small vectors.
//! Up to `N` elements are stored inline, without any allocation.
//! The data is only moved on the heap as a last resort, when the vector
//! grows past its inline capacity.
//!
//! Unlike most small vectors, a `SpillVec` does not own an allocator:
//! every operation that may allocate takes an [`Allocator`] as parameter.
//! This makes the allocation strategy explicit and easy to swap, for instance to
//! simulate allocation failures.
//!
//! ## Basic usage
//!
//! ```rust
//! use spill_vec::{SpillVec, Global};
//!
//! let mut vec: SpillVec<u8, 4> = SpillVec::new();
//! vec.append(&Global, 1).unwrap();
//! vec.append_slice(&Global, &[2, 3, 4]).unwrap();
//! assert!(vec.is_small()); // still inline.
//!
//! vec.insert(&Global, 0, 0).unwrap(); // <- here the inline capacity is exceeded.
//! assert!(vec.is_big());               //    the data is moved on the heap.
//! assert_eq!(vec, [0, 1, 2, 3, 4]);
//! # vec.deinit(&Global);
//! ```
//!
//! Once on the heap, the vector stays there.
//! Its buffer is not freed on drop: it must be released explicitly,
//! or handed over to the caller.
//! ```rust
//! # use spill_vec::{SpillVec, Global};
//! # let mut vec: SpillVec<u8, 4> = SpillVec::new();
//! # vec.append_slice(&Global, &[0, 1, 2, 3, 4]).unwrap();
//! let slice = vec.to_owned_slice(&Global).unwrap(); // `vec` is now empty and inline.
//! assert_eq!(slice, [0, 1, 2, 3, 4]);
//!
//! let vec: SpillVec<u8, 4> = SpillVec::from_owned_slice(slice);
//! vec.deinit(&Global);
//! ```
//!
//! ## Checked and trusted operations
//!
//! Most operations come in two flavors.
//! Trusted ones (`set`, `pop`, `swap_remove`, ...) expect the caller to uphold
//! their preconditions and panic otherwise.
//! Checked ones (`set_or_error`, `pop_or_none`, `swap_remove_or_error`, and everything
//! that allocates) report an [`Error`] instead.
pub mod alloc;
pub mod error;
mod raw;
pub mod generic;
mod owned;
pub mod wide;
#[cfg(target_pointer_width = "64")]
pub mod lean;
#[cfg(not(target_pointer_width = "64"))]
pub mod lean {
	/// Re-exports `wide` for non-64-bit targets
	pub use super::wide::*;
}
#[cfg(feature = "serde")]
pub mod serde;

pub use alloc::{
	Allocator,
	AllocError,
	Global
};
pub use error::Error;
pub use generic::Iter;
pub use owned::OwnedSlice;
pub use wide::SpillVec;
