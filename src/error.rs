//! Error type for the checked operations of [`SpillVec`](crate::generic::SpillVec).

use core::fmt;
use crate::alloc::AllocError;

/// Errors returned by the checked operations of a
/// [`SpillVec`](crate::generic::SpillVec) or an [`OwnedSlice`](crate::OwnedSlice).
///
/// Every variant is recoverable: the vector is left in its prior valid state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
	/// An index was not within the current logical length.
	OutOfBounds,

	/// The allocator could not provide the requested memory.
	OutOfMemory,

	/// The requested capacity exceeds what the metadata format or the address space can represent.
	CapacityOverflow
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::OutOfBounds => f.write_str("index out of bounds"),
			Self::OutOfMemory => f.write_str("out of memory"),
			Self::CapacityOverflow => f.write_str("capacity overflow")
		}
	}
}

impl std::error::Error for Error {}

impl From<AllocError> for Error {
	#[inline]
	fn from(_: AllocError) -> Self {
		Self::OutOfMemory
	}
}
