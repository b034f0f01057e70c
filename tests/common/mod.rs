#![allow(dead_code)]

use std::{
	alloc::Layout,
	cell::Cell,
	ptr::NonNull
};
use spill_vec::{
	Allocator,
	AllocError,
	Global
};

/// Install a `tracing` subscriber printing through the test harness.
pub fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_max_level(tracing::Level::TRACE)
		.with_test_writer()
		.try_init();
}

/// Allocator wrapping [`Global`] that can be told to refuse requests,
/// and keeps track of the number of live bytes.
#[derive(Default)]
pub struct Budget {
	/// Number of requests (allocations or reallocations) that may still succeed.
	/// `None` means unlimited.
	remaining: Cell<Option<usize>>,
	/// Whether every reallocation request should be refused.
	refuse_reallocations: Cell<bool>,
	live: Cell<usize>,
	requests: Cell<usize>
}

impl Budget {
	pub fn unlimited() -> Self {
		Self::default()
	}

	pub fn limited(requests: usize) -> Self {
		let budget = Self::default();
		budget.set_remaining(Some(requests));
		budget
	}

	pub fn set_remaining(&self, requests: Option<usize>) {
		self.remaining.set(requests)
	}

	pub fn refuse_reallocations(&self, refuse: bool) {
		self.refuse_reallocations.set(refuse)
	}

	/// Bytes currently allocated and not yet released.
	pub fn live_bytes(&self) -> usize {
		self.live.get()
	}

	/// Number of allocation and reallocation requests, successful or not.
	pub fn requests(&self) -> usize {
		self.requests.get()
	}

	fn take(&self) -> Result<(), AllocError> {
		self.requests.set(self.requests.get() + 1);
		match self.remaining.get() {
			Some(0) => Err(AllocError),
			Some(n) => {
				self.remaining.set(Some(n - 1));
				Ok(())
			},
			None => Ok(())
		}
	}
}

unsafe impl Allocator for Budget {
	fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
		self.take()?;
		let ptr = Global.allocate(layout)?;
		self.live.set(self.live.get() + layout.size());
		Ok(ptr)
	}

	unsafe fn reallocate(&self, ptr: NonNull<u8>, old_layout: Layout, new_layout: Layout) -> Result<NonNull<u8>, AllocError> {
		self.take()?;
		if self.refuse_reallocations.get() {
			return Err(AllocError)
		}

		let ptr = Global.reallocate(ptr, old_layout, new_layout)?;
		self.live.set(self.live.get() - old_layout.size() + new_layout.size());
		Ok(ptr)
	}

	unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
		Global.release(ptr, layout);
		self.live.set(self.live.get() - layout.size());
	}
}
