/// Metadata packing the length and the heap capacity in a single `usize`.
///
/// The length occupies the upper 32 bits.
/// The lower 32 bits hold `capacity + 1` for heap data, and `0` for inline data.
/// As a result, the maximum length/capacity is `u32::MAX - 1`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Meta {
	data: usize
}

const CAP_MASK: usize = u32::MAX as usize;
const LEN_MASK: usize = (u32::MAX as usize) << 32;

#[inline]
fn encode_capacity(capacity: Option<usize>) -> usize {
	match capacity {
		Some(capacity) => {
			assert!(capacity <= <Meta as crate::generic::Meta>::MAX_LENGTH);
			capacity + 1
		},
		None => 0
	}
}

impl crate::generic::Meta for Meta {
	const MAX_LENGTH: usize = u32::MAX as usize - 1;

	fn new(len: usize, capacity: Option<usize>) -> Self {
		assert!(len <= Self::MAX_LENGTH);

		Meta {
			data: len << 32 | encode_capacity(capacity)
		}
	}

	fn len(&self) -> usize {
		self.data >> 32
	}

	fn capacity(&self) -> Option<usize> {
		match self.data & CAP_MASK {
			0 => None,
			capacity => Some(capacity - 1)
		}
	}

	fn set_len(&mut self, len: usize) {
		// Callers bound `len` by the capacity, itself at most `MAX_LENGTH`.
		debug_assert!(len <= Self::MAX_LENGTH);
		self.data = (len << 32) | (self.data & CAP_MASK)
	}

	fn set_capacity(&mut self, capacity: Option<usize>) {
		self.data = (self.data & LEN_MASK) | encode_capacity(capacity)
	}
}

pub type SpillVec<T, const N: usize> = crate::generic::SpillVec<Meta, T, N>;
