use core::{
	mem::ManuallyDrop,
	ops::{
		Deref,
		DerefMut
	},
	ptr::{
		self,
		NonNull
	},
	fmt
};
use crate::{
	alloc::Allocator,
	error::Error,
	raw
};

/// Exact-size heap buffer owned by the caller.
///
/// This is what [`SpillVec::to_owned_slice`](crate::generic::SpillVec::to_owned_slice)
/// hands over and what [`SpillVec::from_owned_slice`](crate::generic::SpillVec::from_owned_slice)
/// takes back. The buffer holds exactly `len` elements and was obtained from an
/// [`Allocator`]: it must be given back to the same allocator with [`release`](OwnedSlice::release).
pub struct OwnedSlice<T> {
	ptr: NonNull<T>,
	len: usize
}

impl<T> Drop for OwnedSlice<T> {
	fn drop(&mut self) {
		let bytes = raw::byte_size::<T>(self.len);
		if bytes != 0 {
			tracing::warn!(len = self.len, bytes, "`OwnedSlice` dropped without `release`, leaking its buffer");
		}
	}
}

impl<T: Copy> OwnedSlice<T> {
	/// Allocates a buffer of exactly `items.len()` elements and copies `items` into it.
	pub fn from_slice_in<A: Allocator + ?Sized>(alloc: &A, items: &[T]) -> Result<Self, Error> {
		let len = items.len();
		let ptr = raw::allocate_array::<T, A>(alloc, len)?;
		unsafe {
			ptr::copy_nonoverlapping(items.as_ptr(), ptr.as_ptr(), len);
			Ok(Self::from_raw_parts(ptr, len))
		}
	}

	/// Creates an `OwnedSlice` from a pointer and a length.
	///
	/// ## Safety
	///
	/// `ptr` must point to `len` initialized elements, in a buffer allocated
	/// for exactly `len` elements. If the buffer has a non-zero size it must come from an
	/// [`Allocator`], otherwise `ptr` must be well-aligned and non-null.
	#[inline]
	pub unsafe fn from_raw_parts(ptr: NonNull<T>, len: usize) -> Self {
		OwnedSlice {
			ptr,
			len
		}
	}

	/// Decomposes the slice into its pointer and length.
	///
	/// The caller is now in charge of releasing the buffer.
	#[inline]
	pub fn into_raw_parts(self) -> (NonNull<T>, usize) {
		let this = ManuallyDrop::new(self);
		(this.ptr, this.len)
	}

	/// Gives the buffer back to the allocator.
	#[inline]
	pub fn release<A: Allocator + ?Sized>(self, alloc: &A) {
		let (ptr, len) = self.into_raw_parts();
		unsafe {
			raw::release_array(alloc, ptr, len)
		}
	}

	/// Number of elements in the buffer.
	#[inline]
	pub fn len(&self) -> usize {
		self.len
	}

	/// Returns `true` if the buffer holds no element.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Views the buffer as a slice.
	#[inline]
	pub fn as_slice(&self) -> &[T] {
		unsafe {
			std::slice::from_raw_parts(self.ptr.as_ptr(), self.len)
		}
	}

	/// Views the buffer as a mutable slice.
	#[inline]
	pub fn as_mut_slice(&mut self) -> &mut [T] {
		unsafe {
			std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len)
		}
	}
}

unsafe impl<T: Send> Send for OwnedSlice<T> {}
unsafe impl<T: Sync> Sync for OwnedSlice<T> {}

impl<T: Copy> Deref for OwnedSlice<T> {
	type Target = [T];

	#[inline]
	fn deref(&self) -> &[T] {
		self.as_slice()
	}
}

impl<T: Copy> DerefMut for OwnedSlice<T> {
	#[inline]
	fn deref_mut(&mut self) -> &mut [T] {
		self.as_mut_slice()
	}
}

impl<T: Copy + fmt::Debug> fmt::Debug for OwnedSlice<T> {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self.as_slice(), f)
	}
}

impl<T: Copy + PartialEq<U>, U: Copy> PartialEq<OwnedSlice<U>> for OwnedSlice<T> {
	#[inline]
	fn eq(&self, other: &OwnedSlice<U>) -> bool {
		self[..] == other[..]
	}
}

impl<T: Copy + PartialEq<U>, U: Copy> PartialEq<[U]> for OwnedSlice<T> {
	#[inline]
	fn eq(&self, other: &[U]) -> bool {
		self[..] == other[..]
	}
}

impl<T: Copy + PartialEq<U>, U: Copy, const O: usize> PartialEq<[U; O]> for OwnedSlice<T> {
	#[inline]
	fn eq(&self, other: &[U; O]) -> bool {
		self[..] == other[..]
	}
}
