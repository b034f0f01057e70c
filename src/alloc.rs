//! Pluggable allocation interface.
//!
//! A [`SpillVec`](crate::generic::SpillVec) never allocates on its own.
//! Every operation that may touch the heap takes an [`Allocator`] as an explicit argument,
//! so that the allocation strategy can be swapped (arenas, budgets, failure injection)
//! without changing the vector's type.
use core::{
	alloc::Layout,
	fmt,
	ptr::NonNull
};

/// The `AllocError` error indicates an allocation failure
/// that may be due to resource exhaustion or to
/// something wrong when combining the given input arguments with this
/// allocator.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct AllocError;

impl fmt::Display for AllocError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("memory allocation failed")
	}
}

impl std::error::Error for AllocError {}

/// An implementation of `Allocator` can allocate, reallocate and release
/// blocks of memory described by a [`Layout`].
///
/// The vector only ever calls these methods with layouts of non-zero size.
///
/// # Safety
///
/// Memory blocks returned by an allocator must point to valid memory of at least the
/// requested size and alignment, and retain their validity until released.
/// A failed `reallocate` must leave the original block untouched.
pub unsafe trait Allocator {
	/// Attempts to allocate a block of memory fitting `layout`.
	///
	/// The returned memory is uninitialized.
	fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError>;

	/// Attempts to resize the block at `ptr` from `old_layout` to `new_layout`,
	/// growing or shrinking in place or relocating.
	///
	/// The first `min(old_layout.size(), new_layout.size())` bytes are preserved.
	/// On success the old pointer must be considered invalid.
	///
	/// # Safety
	///
	/// `ptr` must denote a block currently allocated by this allocator with `old_layout`,
	/// and both layouts must have the same alignment.
	unsafe fn reallocate(&self, ptr: NonNull<u8>, old_layout: Layout, new_layout: Layout) -> Result<NonNull<u8>, AllocError>;

	/// Releases the block at `ptr`.
	///
	/// # Safety
	///
	/// `ptr` must denote a block currently allocated by this allocator with `layout`.
	unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout);
}

/// The global memory allocator.
///
/// Forwards every call to [`std::alloc`].
#[derive(Copy, Clone, Default, Debug)]
pub struct Global;

#[inline]
fn dangling(layout: Layout) -> NonNull<u8> {
	// An aligned non-null address is a valid zero-sized block.
	unsafe { NonNull::new_unchecked(layout.align() as *mut u8) }
}

unsafe impl Allocator for Global {
	#[inline]
	fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
		if layout.size() == 0 {
			return Ok(dangling(layout))
		}

		NonNull::new(unsafe { std::alloc::alloc(layout) }).ok_or(AllocError)
	}

	#[inline]
	unsafe fn reallocate(&self, ptr: NonNull<u8>, old_layout: Layout, new_layout: Layout) -> Result<NonNull<u8>, AllocError> {
		debug_assert_eq!(old_layout.align(), new_layout.align());

		if old_layout.size() == 0 {
			self.allocate(new_layout)
		} else if new_layout.size() == 0 {
			self.release(ptr, old_layout);
			Ok(dangling(new_layout))
		} else {
			NonNull::new(std::alloc::realloc(ptr.as_ptr(), old_layout, new_layout.size())).ok_or(AllocError)
		}
	}

	#[inline]
	unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
		if layout.size() != 0 {
			std::alloc::dealloc(ptr.as_ptr(), layout)
		}
	}
}
