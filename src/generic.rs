use core::{
	mem::{
		self,
		ManuallyDrop,
		MaybeUninit
	},
	ptr::{
		self,
		NonNull
	},
	ops::{
		Deref,
		DerefMut
	},
	iter::FusedIterator,
	hash::{
		Hash,
		Hasher
	},
	fmt,
	cmp
};
use crate::{
	alloc::Allocator,
	error::Error,
	owned::OwnedSlice,
	raw
};

/// Metadata representing the length, capacity and storage mode of the array.
///
/// This crate provides two implementation of this trait:
/// [`wide::Meta`](crate::wide::Meta) stores the length and capacity with two `usize`.
/// Then the maximum size/capacity depends on the bit-depth of the plateform.
/// For 64-bit plateforms, this crate also provides [`lean::Meta`](crate::lean::Meta) that stores both the length
/// and capacity on a single `usize`. As a result, the maximum size/capacity is `u32::MAX - 1`.
pub trait Meta: Copy {
	/// Maximum size/capacity of the array using this metadata format.
	const MAX_LENGTH: usize;

	/// Create a new metadata from an array's length and heap capacity (if any).
	fn new(len: usize, capacity: Option<usize>) -> Self;

	/// Get the length of the array.
	fn len(&self) -> usize;

	/// Get the capacity of the heap buffer, if any.
	///
	/// `None` means that the data is stored inline.
	fn capacity(&self) -> Option<usize>;

	/// Set the new length of the array.
	fn set_len(&mut self, len: usize);

	/// Set the new capacity of the heap buffer.
	fn set_capacity(&mut self, capacity: Option<usize>);
}

/// Inner data storage.
///
/// We use an union here since the actual type depends on the where the data is stored.
/// If the metadata has no heap capacity, then the relevent field is `inline`.
/// Otherwise the relevent field is `ptr`.
union Data<T, const N: usize> {
	/// Data stored inline.
	inline: ManuallyDrop<[MaybeUninit<T>; N]>,

	/// Pointer to the heap buffer.
	ptr: NonNull<T>
}

impl<T, const N: usize> Data<T, N> {
	#[inline]
	fn inline() -> Data<T, N> {
		Data {
			inline: ManuallyDrop::new(
				// SAFETY: An uninitialized `[MaybeUninit<_>; N]` is valid.
				unsafe { MaybeUninit::<[MaybeUninit<T>; N]>::uninit().assume_init() }
			)
		}
	}
}

/// Contiguous growable array type that is either stored inline or on the heap.
///
/// Up to `N` elements are stored inside the value itself.
/// When more room is needed the data is moved to a heap buffer obtained from an [`Allocator`],
/// and it stays there for the rest of the vector's life, even if it shrinks.
///
/// The vector does not hold on to an allocator.
/// Every operation that may allocate takes one as parameter,
/// and it is up to the caller to always pass the same one.
/// For the same reason the heap buffer is not freed on drop:
/// it must be released with [`deinit`](SpillVec::deinit)
/// or handed over with [`to_owned_slice`](SpillVec::to_owned_slice).
///
/// Only `Copy` elements are supported: data is moved around bitwise.
///
/// # Examples
///
/// ```
/// # use spill_vec::{SpillVec, Global};
/// let mut vec: SpillVec<u32, 4> = SpillVec::new();
/// vec.append_slice(&Global, &[1, 2, 3, 4]).unwrap();
/// assert!(vec.is_small());
///
/// vec.append(&Global, 5).unwrap(); // spills onto the heap.
/// assert!(vec.is_big());
/// assert_eq!(vec, [1, 2, 3, 4, 5]);
///
/// vec.deinit(&Global);
/// ```
pub struct SpillVec<M: Meta, T, const N: usize> {
	/// Metadata storing the length, capacity and storage mode of the array.
	meta: M,

	/// The inline data or a pointer to the heap buffer.
	data: Data<T, N>
}

impl<M: Meta, T, const N: usize> Drop for SpillVec<M, T, N> {
	fn drop(&mut self) {
		if let Some(capacity) = self.meta.capacity() {
			let bytes = raw::byte_size::<T>(capacity);
			if bytes != 0 {
				tracing::warn!(capacity, bytes, "`SpillVec` dropped without `deinit`, leaking its heap buffer");
			}
		}
	}
}

impl<M: Meta, T: Copy, const N: usize> SpillVec<M, T, N> {
	/// Creates a new empty `SpillVec`.
	///
	/// The vector will not allocate until more than `N` elements are pushed onto it.
	#[inline]
	pub fn new() -> Self {
		SpillVec {
			meta: M::new(0, None),
			data: Data::inline()
		}
	}

	/// Creates a new empty `SpillVec` able to hold at least `capacity` elements.
	///
	/// If `capacity <= N` the vector is stored inline,
	/// otherwise a heap buffer of exactly `capacity` elements is allocated.
	pub fn with_capacity_in<A: Allocator + ?Sized>(alloc: &A, capacity: usize) -> Result<Self, Error> {
		if capacity <= N {
			Ok(Self::new())
		} else {
			if capacity > M::MAX_LENGTH {
				return Err(Error::CapacityOverflow)
			}

			let ptr = raw::allocate_array::<T, A>(alloc, capacity)?;
			Ok(SpillVec {
				meta: M::new(0, Some(capacity)),
				data: Data { ptr }
			})
		}
	}

	/// Takes ownership of a heap buffer.
	///
	/// The resulting vector is on the heap, whatever the length of the slice is,
	/// and its capacity is the length of the slice.
	///
	/// # Panics
	///
	/// Panics if the slice is longer than `M::MAX_LENGTH`.
	#[inline]
	pub fn from_owned_slice(slice: OwnedSlice<T>) -> Self {
		let (ptr, len) = slice.into_raw_parts();
		SpillVec {
			meta: M::new(len, Some(len)),
			data: Data { ptr }
		}
	}

	/// Destroys the vector, releasing its heap buffer (if any) through `alloc`.
	#[inline]
	pub fn deinit<A: Allocator + ?Sized>(self, alloc: &A) {
		let this = ManuallyDrop::new(self);
		if let Some(capacity) = this.meta.capacity() {
			unsafe {
				raw::release_array(alloc, this.data.ptr, capacity)
			}
		}
	}

	/// Returns `true` if the data is stored inline.
	#[inline]
	pub fn is_small(&self) -> bool {
		self.meta.capacity().is_none()
	}

	/// Returns `true` if the data is stored on the heap.
	#[inline]
	pub fn is_big(&self) -> bool {
		self.meta.capacity().is_some()
	}

	/// Returns the length of the array.
	#[inline]
	pub fn len(&self) -> usize {
		self.meta.len()
	}

	/// Returns `true` if the vector contains no elements.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns `N` while the data is inline, or the number of elements the heap buffer can hold.
	#[inline]
	pub fn capacity(&self) -> usize {
		self.meta.capacity().unwrap_or(N)
	}

	/// Forces the length of the vector to `len`.
	///
	/// ## Safety
	///
	/// `len` must not exceed the capacity,
	/// and the elements at `old_len..len` must be initialized.
	#[inline]
	pub unsafe fn set_len(&mut self, len: usize) {
		debug_assert!(len <= self.capacity());
		self.meta.set_len(len)
	}

	/// Returns a raw pointer to the vector's buffer.
	///
	/// The pointer is invalidated by any operation that may reallocate,
	/// and by moving the vector while its data is stored inline.
	#[inline]
	pub fn as_ptr(&self) -> *const T {
		unsafe {
			match self.meta.capacity() {
				None => (*self.data.inline).as_ptr() as *const T,
				Some(_) => self.data.ptr.as_ptr()
			}
		}
	}

	/// Returns an unsafe mutable pointer to the vector's buffer.
	#[inline]
	pub fn as_mut_ptr(&mut self) -> *mut T {
		unsafe {
			match self.meta.capacity() {
				None => (*self.data.inline).as_mut_ptr() as *mut T,
				Some(_) => self.data.ptr.as_ptr()
			}
		}
	}

	/// Extracts a slice containing the valid elements of the vector.
	#[inline]
	pub fn as_slice(&self) -> &[T] {
		unsafe {
			std::slice::from_raw_parts(self.as_ptr(), self.len())
		}
	}

	/// Extracts a mutable slice containing the valid elements of the vector.
	#[inline]
	pub fn as_mut_slice(&mut self) -> &mut [T] {
		let len = self.len();
		unsafe {
			std::slice::from_raw_parts_mut(self.as_mut_ptr(), len)
		}
	}

	/// Returns the remaining spare capacity of the vector as a slice of
	/// `MaybeUninit<T>`.
	///
	/// The returned slice can be used to fill the vector with data before
	/// marking the data as initialized using the [`set_len`] method.
	///
	/// [`set_len`]: SpillVec::set_len
	#[inline]
	pub fn spare_capacity_mut(&mut self) -> &mut [MaybeUninit<T>] {
		let len = self.len();
		let capacity = self.capacity();
		unsafe {
			let ptr = self.as_mut_ptr().add(len) as *mut MaybeUninit<T>;
			std::slice::from_raw_parts_mut(ptr, capacity - len)
		}
	}

	/// Returns the element at position `index`.
	///
	/// This is the trusted access path: the caller is expected to know that
	/// `index < len`. Use [`slice::get`] for a checked access, or
	/// [`slice::get_unchecked`] to skip the bounds check altogether.
	///
	/// # Panics
	///
	/// Panics if `index` is out of bounds.
	#[inline]
	pub fn at(&self, index: usize) -> T {
		self.as_slice()[index]
	}

	/// Overwrites the element at position `index`.
	///
	/// # Panics
	///
	/// Panics if `index` is out of bounds.
	#[inline]
	pub fn set(&mut self, index: usize, value: T) {
		let len = self.len();
		assert!(index < len, "index (is {}) should be < len (is {})", index, len);
		self.as_mut_slice()[index] = value
	}

	/// Overwrites the element at position `index`,
	/// or returns [`Error::OutOfBounds`] if there is no such element.
	#[inline]
	pub fn set_or_error(&mut self, index: usize, value: T) -> Result<(), Error> {
		match self.as_mut_slice().get_mut(index) {
			Some(slot) => {
				*slot = value;
				Ok(())
			},
			None => Err(Error::OutOfBounds)
		}
	}

	/// Returns a restartable iterator over the elements of the vector.
	#[inline]
	pub fn iter(&self) -> Iter<'_, M, T, N> {
		Iter {
			vec: self,
			index: 0
		}
	}

	/// Makes sure the vector can hold at least `target` elements.
	///
	/// Does nothing if the capacity is already sufficient.
	/// Otherwise the capacity grows geometrically (`new = new + new / 2 + 8`)
	/// until it reaches `target`.
	/// If the data was stored inline, it is moved to the heap.
	///
	/// On error, the vector is left untouched.
	pub fn ensure_capacity<A: Allocator + ?Sized>(&mut self, alloc: &A, target: usize) -> Result<(), Error> {
		let capacity = self.capacity();
		if target <= capacity {
			return Ok(())
		}

		let new_capacity = grow_capacity(capacity, target, M::MAX_LENGTH)?;
		unsafe {
			match self.meta.capacity() {
				None => self.promote(alloc, new_capacity),
				Some(capacity) => self.regrow(alloc, capacity, new_capacity)
			}
		}
	}

	/// Makes sure the vector can hold at least `additional` more elements.
	#[inline]
	pub fn ensure_unused_capacity<A: Allocator + ?Sized>(&mut self, alloc: &A, additional: usize) -> Result<(), Error> {
		let target = self.len().checked_add(additional).ok_or(Error::CapacityOverflow)?;
		self.ensure_capacity(alloc, target)
	}

	/// Move the inline data to a new heap buffer of the given capacity.
	///
	/// ## Safety
	///
	/// The data must be stored inline and `capacity` must be greater than `N`.
	unsafe fn promote<A: Allocator + ?Sized>(&mut self, alloc: &A, capacity: usize) -> Result<(), Error> {
		debug_assert!(self.is_small() && capacity > N);

		let dst = raw::allocate_array::<T, A>(alloc, capacity)?;
		// Every inline slot is copied, initialized or not.
		ptr::copy_nonoverlapping((*self.data.inline).as_ptr() as *const T, dst.as_ptr(), N);

		self.data.ptr = dst;
		self.meta.set_capacity(Some(capacity));
		tracing::trace!(inline = N, capacity, len = self.len(), "promoted inline storage to the heap");
		Ok(())
	}

	/// Grow the heap buffer.
	///
	/// ## Safety
	///
	/// The data must be stored on the heap, with the given `capacity`.
	unsafe fn regrow<A: Allocator + ?Sized>(&mut self, alloc: &A, capacity: usize, new_capacity: usize) -> Result<(), Error> {
		debug_assert!(self.is_big());

		self.data.ptr = raw::reallocate_array(alloc, self.data.ptr, capacity, new_capacity)?;
		self.meta.set_capacity(Some(new_capacity));
		tracing::trace!(from = capacity, to = new_capacity, "grew heap storage");
		Ok(())
	}

	/// Claims the slot right after the last element, without checking the capacity first.
	///
	/// The length is incremented and the (uninitialized) slot is returned.
	///
	/// # Panics
	///
	/// Panics if there is no spare capacity.
	///
	/// ## Safety
	///
	/// The caller must initialize the returned slot before the vector's content is read.
	#[inline]
	pub unsafe fn add_one_assume_capacity(&mut self) -> &mut MaybeUninit<T> {
		let len = self.len();
		assert!(len < self.capacity(), "no spare capacity left (len is {})", len);
		self.set_len(len + 1);
		&mut *(self.as_mut_ptr().add(len) as *mut MaybeUninit<T>)
	}

	/// Claims the slot right after the last element, growing the vector if needed.
	///
	/// ## Safety
	///
	/// The caller must initialize the returned slot before the vector's content is read.
	#[inline]
	pub unsafe fn add_one<A: Allocator + ?Sized>(&mut self, alloc: &A) -> Result<&mut MaybeUninit<T>, Error> {
		self.ensure_unused_capacity(alloc, 1)?;
		Ok(self.add_one_assume_capacity())
	}

	/// Appends an element to the back of the vector.
	#[inline]
	pub fn append<A: Allocator + ?Sized>(&mut self, alloc: &A, item: T) -> Result<(), Error> {
		unsafe {
			self.add_one(alloc)?.write(item);
		}
		Ok(())
	}

	/// Appends a copy of every element of `items` to the back of the vector.
	pub fn append_slice<A: Allocator + ?Sized>(&mut self, alloc: &A, items: &[T]) -> Result<(), Error> {
		let len = self.len();
		let count = items.len();
		self.ensure_unused_capacity(alloc, count)?;

		unsafe {
			ptr::copy_nonoverlapping(items.as_ptr(), self.as_mut_ptr().add(len), count);
			self.set_len(len + count);
		}

		Ok(())
	}

	/// Appends `n` copies of `value` to the back of the vector.
	pub fn append_n_times<A: Allocator + ?Sized>(&mut self, alloc: &A, value: T, n: usize) -> Result<(), Error> {
		self.ensure_unused_capacity(alloc, n)?;
		for slot in &mut self.spare_capacity_mut()[..n] {
			slot.write(value);
		}

		unsafe {
			self.set_len(self.len() + n);
		}

		Ok(())
	}

	/// Inserts an element at position `index` within the vector, shifting all
	/// elements after it to the right.
	///
	/// # Panics
	///
	/// Panics if `index > len`.
	pub fn insert<A: Allocator + ?Sized>(&mut self, alloc: &A, index: usize, item: T) -> Result<(), Error> {
		let len = self.len();
		assert!(index <= len, "insertion index (is {}) should be <= len (is {})", index, len);

		self.ensure_unused_capacity(alloc, 1)?;

		unsafe {
			let p = self.as_mut_ptr().add(index);
			// Shift everything over to make space.
			// `ptr::copy` handles the overlap, moving the last elements first.
			ptr::copy(p, p.add(1), len - index);
			ptr::write(p, item);
			self.set_len(len + 1);
		}

		Ok(())
	}

	/// Inserts a copy of `items` at position `index` within the vector, shifting all
	/// elements after it to the right.
	///
	/// # Panics
	///
	/// Panics if `index > len`.
	pub fn insert_slice<A: Allocator + ?Sized>(&mut self, alloc: &A, index: usize, items: &[T]) -> Result<(), Error> {
		let len = self.len();
		assert!(index <= len, "insertion index (is {}) should be <= len (is {})", index, len);

		let count = items.len();
		self.ensure_unused_capacity(alloc, count)?;

		unsafe {
			let p = self.as_mut_ptr().add(index);
			ptr::copy(p, p.add(count), len - index);
			ptr::copy_nonoverlapping(items.as_ptr(), p, count);
			self.set_len(len + count);
		}

		Ok(())
	}

	/// Removes the last element from the vector and returns it.
	///
	/// # Panics
	///
	/// Panics if the vector is empty.
	/// Use [`pop_or_none`](SpillVec::pop_or_none) when that may happen.
	#[inline]
	pub fn pop(&mut self) -> T {
		let len = self.len();
		assert!(len > 0, "cannot pop from an empty vector");
		unsafe {
			self.set_len(len - 1);
			ptr::read(self.as_ptr().add(len - 1))
		}
	}

	/// Removes the last element from the vector and returns it, or [`None`] if it
	/// is empty.
	#[inline]
	pub fn pop_or_none(&mut self) -> Option<T> {
		if self.is_empty() {
			None
		} else {
			Some(self.pop())
		}
	}

	/// Removes and returns the element at position `index` within the vector,
	/// shifting all elements after it to the left.
	///
	/// # Panics
	///
	/// Panics if `index` is out of bounds.
	pub fn ordered_remove(&mut self, index: usize) -> T {
		let len = self.len();
		assert!(index < len, "removal index (is {}) should be < len (is {})", index, len);

		if index == len - 1 {
			return self.pop()
		}

		unsafe {
			let p = self.as_mut_ptr().add(index);
			let removed = ptr::read(p);
			ptr::copy(p.add(1), p, len - index - 1);
			self.set_len(len - 1);
			removed
		}
	}

	/// Removes an element from the vector and returns it.
	///
	/// The removed element is replaced by the last element of the vector.
	/// This does not preserve ordering, but is O(1).
	///
	/// # Panics
	///
	/// Panics if `index` is out of bounds.
	pub fn swap_remove(&mut self, index: usize) -> T {
		let len = self.len();
		assert!(index < len, "swap_remove index (is {}) should be < len (is {})", index, len);

		if index == len - 1 {
			return self.pop()
		}

		let last = self.pop();
		mem::replace(&mut self.as_mut_slice()[index], last)
	}

	/// Same as [`swap_remove`](SpillVec::swap_remove) but returns [`Error::OutOfBounds`]
	/// instead of panicking.
	#[inline]
	pub fn swap_remove_or_error(&mut self, index: usize) -> Result<T, Error> {
		if index < self.len() {
			Ok(self.swap_remove(index))
		} else {
			Err(Error::OutOfBounds)
		}
	}

	/// Shortens the vector, keeping the first `len` elements.
	///
	/// If `len` is greater than the vector's current length, this has no
	/// effect.
	/// The capacity is left unchanged, see [`shrink`](SpillVec::shrink) to release memory.
	#[inline]
	pub fn truncate(&mut self, len: usize) {
		if len < self.len() {
			unsafe { self.set_len(len) }
		}
	}

	/// Removes all the elements, keeping the storage mode and capacity.
	#[inline]
	pub fn clear(&mut self) {
		self.truncate(0)
	}

	/// Sets the length of the vector to `new_len`, growing the vector if needed.
	///
	/// ## Safety
	///
	/// The elements at `old_len..new_len` are left uninitialized:
	/// the caller must write them before the vector's content is read.
	#[inline]
	pub unsafe fn resize<A: Allocator + ?Sized>(&mut self, alloc: &A, new_len: usize) -> Result<(), Error> {
		self.ensure_capacity(alloc, new_len)?;
		self.set_len(new_len);
		Ok(())
	}

	/// Shortens the vector to `new_len` elements and tries to shrink the heap buffer accordingly.
	///
	/// The data is never moved back inline.
	/// If the allocator cannot shrink the buffer, the length is still updated
	/// and the buffer keeps its previous capacity.
	///
	/// # Panics
	///
	/// Panics if `new_len > len`.
	pub fn shrink<A: Allocator + ?Sized>(&mut self, alloc: &A, new_len: usize) {
		let len = self.len();
		assert!(new_len <= len, "shrink length (is {}) should be <= len (is {})", new_len, len);

		unsafe {
			self.set_len(new_len);

			if let Some(capacity) = self.meta.capacity() {
				if capacity != new_len {
					match raw::reallocate_array(alloc, self.data.ptr, capacity, new_len) {
						Ok(ptr) => {
							self.data.ptr = ptr;
							self.meta.set_capacity(Some(new_len))
						},
						Err(e) => {
							tracing::debug!(capacity, new_len, error = %e, "could not release excess heap capacity")
						}
					}
				}
			}
		}
	}

	/// Hands the content of the vector over as an exact-size [`OwnedSlice`].
	///
	/// The vector is reset to an empty inline vector.
	/// The returned slice must be released with the same allocator.
	///
	/// On error, the vector is left untouched.
	pub fn to_owned_slice<A: Allocator + ?Sized>(&mut self, alloc: &A) -> Result<OwnedSlice<T>, Error> {
		let len = self.len();
		let ptr = match self.meta.capacity() {
			None => unsafe {
				let dst = raw::allocate_array::<T, A>(alloc, len)?;
				ptr::copy_nonoverlapping(self.as_ptr(), dst.as_ptr(), len);
				dst
			},
			Some(capacity) => unsafe {
				let src = self.data.ptr;
				match raw::reallocate_array(alloc, src, capacity, len) {
					Ok(ptr) => ptr,
					Err(_) => {
						// The allocator refused to shrink: relocate into an exact buffer.
						let dst = raw::allocate_array::<T, A>(alloc, len)?;
						ptr::copy_nonoverlapping(src.as_ptr(), dst.as_ptr(), len);
						raw::release_array(alloc, src, capacity);
						dst
					}
				}
			}
		};

		self.meta = M::new(0, None);
		self.data = Data::inline();
		tracing::trace!(len, "transferred storage to an owned slice");

		Ok(unsafe { OwnedSlice::from_raw_parts(ptr, len) })
	}

	/// Copies the vector into a new one.
	///
	/// The copy is stored inline if it fits.
	pub fn clone_in<A: Allocator + ?Sized>(&self, alloc: &A) -> Result<Self, Error> {
		let len = self.len();
		let mut vec = Self::with_capacity_in(alloc, len)?;
		unsafe {
			ptr::copy_nonoverlapping(self.as_ptr(), vec.as_mut_ptr(), len);
			vec.set_len(len);
		}

		Ok(vec)
	}
}

/// Next capacity following the growth policy.
///
/// Starting from `capacity`, apply `new = new + new / 2 + 8` until `new >= target`.
/// The result is clamped to `max`.
fn grow_capacity(capacity: usize, target: usize, max: usize) -> Result<usize, Error> {
	if target > max {
		return Err(Error::CapacityOverflow)
	}

	let mut new_capacity = capacity;
	while new_capacity < target {
		new_capacity = new_capacity.saturating_add(new_capacity / 2).saturating_add(8);
	}

	Ok(cmp::min(new_capacity, max))
}

/// Restartable iterator over the elements of a [`SpillVec`].
///
/// Elements are yielded by value.
pub struct Iter<'v, M: Meta, T, const N: usize> {
	vec: &'v SpillVec<M, T, N>,
	index: usize
}

impl<'v, M: Meta, T, const N: usize> Iter<'v, M, T, N> {
	/// Rewinds the iterator to the first element.
	#[inline]
	pub fn reset(&mut self) {
		self.index = 0
	}
}

impl<'v, M: Meta, T, const N: usize> Clone for Iter<'v, M, T, N> {
	fn clone(&self) -> Self {
		Iter {
			vec: self.vec,
			index: self.index
		}
	}
}

impl<'v, M: Meta, T: Copy, const N: usize> Iterator for Iter<'v, M, T, N> {
	type Item = T;

	#[inline]
	fn next(&mut self) -> Option<T> {
		let item = self.vec.as_slice().get(self.index).copied()?;
		self.index += 1;
		Some(item)
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.vec.len().saturating_sub(self.index);
		(remaining, Some(remaining))
	}
}

impl<'v, M: Meta, T: Copy, const N: usize> ExactSizeIterator for Iter<'v, M, T, N> {}
impl<'v, M: Meta, T: Copy, const N: usize> FusedIterator for Iter<'v, M, T, N> {}

unsafe impl<M: Meta + Send, T: Send, const N: usize> Send for SpillVec<M, T, N> {}
unsafe impl<M: Meta + Sync, T: Sync, const N: usize> Sync for SpillVec<M, T, N> {}

impl<M: Meta, T: Copy, const N: usize> Default for SpillVec<M, T, N> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl<M: Meta, T: Copy, const N: usize> Deref for SpillVec<M, T, N> {
	type Target = [T];

	#[inline]
	fn deref(&self) -> &[T] {
		self.as_slice()
	}
}

impl<M: Meta, T: Copy, const N: usize> DerefMut for SpillVec<M, T, N> {
	#[inline]
	fn deref_mut(&mut self) -> &mut [T] {
		self.as_mut_slice()
	}
}

impl<'v, M: Meta, T: Copy, const N: usize> IntoIterator for &'v SpillVec<M, T, N> {
	type Item = &'v T;
	type IntoIter = std::slice::Iter<'v, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.as_slice().iter()
	}
}

impl<'v, M: Meta, T: Copy, const N: usize> IntoIterator for &'v mut SpillVec<M, T, N> {
	type Item = &'v mut T;
	type IntoIter = std::slice::IterMut<'v, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.as_mut_slice().iter_mut()
	}
}

impl<M: Meta, T: Copy + fmt::Debug, const N: usize> fmt::Debug for SpillVec<M, T, N> {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(&**self, f)
	}
}

impl<M: Meta, T: Copy + Hash, const N: usize> Hash for SpillVec<M, T, N> {
	#[inline]
	fn hash<H: Hasher>(&self, state: &mut H) {
		Hash::hash(&**self, state)
	}
}

impl<M: Meta, T: Copy, const N: usize> AsRef<[T]> for SpillVec<M, T, N> {
	#[inline]
	fn as_ref(&self) -> &[T] {
		self
	}
}

impl<M: Meta, T: Copy, const N: usize> AsMut<[T]> for SpillVec<M, T, N> {
	#[inline]
	fn as_mut(&mut self) -> &mut [T] {
		self
	}
}

macro_rules! impl_slice_eq1 {
	([$($vars:tt)*] $lhs:ty, $rhs:ty) => {
		impl<$($vars)*> PartialEq<$rhs> for $lhs where T: Copy + PartialEq<U>, U: Copy {
			#[inline]
			fn eq(&self, other: &$rhs) -> bool { self[..] == other[..] }
			#[inline]
			fn ne(&self, other: &$rhs) -> bool { self[..] != other[..] }
		}
	}
}

impl_slice_eq1! { [T, U, O: Meta, P: Meta, const N: usize, const M: usize] SpillVec<O, T, N>, SpillVec<P, U, M> }
impl_slice_eq1! { [T, U, M: Meta, const N: usize] SpillVec<M, T, N>, Vec<U> }
impl_slice_eq1! { [T, U, M: Meta, const N: usize] Vec<T>, SpillVec<M, U, N> }
impl_slice_eq1! { [T, U, M: Meta, const N: usize] SpillVec<M, T, N>, [U] }
impl_slice_eq1! { [T, U, M: Meta, const N: usize] SpillVec<M, T, N>, &[U] }
impl_slice_eq1! { [T, U, M: Meta, const N: usize] SpillVec<M, T, N>, &mut [U] }
impl_slice_eq1! { [T, U, M: Meta, const N: usize] &[T], SpillVec<M, U, N> }
impl_slice_eq1! { [T, U, M: Meta, const N: usize] &mut [T], SpillVec<M, U, N> }
impl_slice_eq1! { [T, U, M: Meta, const N: usize, const O: usize] SpillVec<M, T, N>, [U; O] }
impl_slice_eq1! { [T, U, M: Meta, const N: usize, const O: usize] SpillVec<M, T, N>, &[U; O] }
impl_slice_eq1! { [T, U, M: Meta, const N: usize, const O: usize] [T; O], SpillVec<M, U, N> }
impl_slice_eq1! { [T, U, M: Meta, const N: usize, const O: usize] &[T; O], SpillVec<M, U, N> }

impl<M: Meta, T: Copy + Eq, const N: usize> Eq for SpillVec<M, T, N> {}
