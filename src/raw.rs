//! Typed buffer management on top of an [`Allocator`].
//!
//! These functions deal with `[T]` buffers of a given capacity and hide
//! the zero-size cases (zero capacity or zero-sized `T`) from the allocator:
//! such buffers are represented by a dangling, well-aligned pointer.
use core::{
	alloc::Layout,
	mem,
	ptr::NonNull
};
use crate::{
	alloc::Allocator,
	error::Error
};

/// Layout of an array of `capacity` elements of type `T`.
#[inline]
pub(crate) fn array_layout<T>(capacity: usize) -> Result<Layout, Error> {
	let layout = Layout::array::<T>(capacity).map_err(|_| Error::CapacityOverflow)?;
	alloc_guard(layout.size())?;
	Ok(layout)
}

/// Layout of an array that is known to be currently allocated.
#[inline]
unsafe fn current_layout<T>(capacity: usize) -> Layout {
	// The buffer was allocated with this layout, so it cannot overflow.
	Layout::from_size_align_unchecked(mem::size_of::<T>() * capacity, mem::align_of::<T>())
}

/// Allocate an uninitialized buffer for `capacity` elements.
pub(crate) fn allocate_array<T, A: Allocator + ?Sized>(alloc: &A, capacity: usize) -> Result<NonNull<T>, Error> {
	let layout = array_layout::<T>(capacity)?;
	if layout.size() == 0 {
		Ok(NonNull::dangling())
	} else {
		Ok(alloc.allocate(layout)?.cast())
	}
}

/// Resize a buffer from `old_capacity` to `new_capacity` elements.
///
/// On failure the original buffer is left untouched.
///
/// ## Safety
///
/// `ptr` must have been returned by one of the functions of this module
/// with the same allocator and `old_capacity`.
pub(crate) unsafe fn reallocate_array<T, A: Allocator + ?Sized>(alloc: &A, ptr: NonNull<T>, old_capacity: usize, new_capacity: usize) -> Result<NonNull<T>, Error> {
	let old_layout = current_layout::<T>(old_capacity);
	let new_layout = array_layout::<T>(new_capacity)?;

	if old_layout.size() == 0 {
		allocate_array(alloc, new_capacity)
	} else if new_layout.size() == 0 {
		alloc.release(ptr.cast(), old_layout);
		Ok(NonNull::dangling())
	} else {
		Ok(alloc.reallocate(ptr.cast(), old_layout, new_layout)?.cast())
	}
}

/// Release a buffer of `capacity` elements.
///
/// ## Safety
///
/// `ptr` must have been returned by one of the functions of this module
/// with the same allocator and `capacity`, and must not be used afterward.
pub(crate) unsafe fn release_array<T, A: Allocator + ?Sized>(alloc: &A, ptr: NonNull<T>, capacity: usize) {
	let layout = current_layout::<T>(capacity);
	if layout.size() != 0 {
		alloc.release(ptr.cast(), layout)
	}
}

/// Size in bytes of a buffer of `capacity` elements.
#[inline]
pub(crate) fn byte_size<T>(capacity: usize) -> usize {
	mem::size_of::<T>().saturating_mul(capacity)
}

// We need to guarantee the following:
// * We don't ever allocate `> isize::MAX` byte-size objects.
// * We don't overflow `usize::MAX` and actually allocate too little.
//
// `Layout::array` already rejects sizes above `isize::MAX`,
// this keeps the check explicit for 32-bit and 16-bit targets.
#[inline]
fn alloc_guard(alloc_size: usize) -> Result<(), Error> {
	if usize::BITS < 64 && alloc_size > isize::MAX as usize {
		Err(Error::CapacityOverflow)
	} else {
		Ok(())
	}
}
