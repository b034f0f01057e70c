/// Metadata storing the length and the heap capacity in separate words.
///
/// Behaves just like `Vec`: the maximum length is `usize::MAX`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Meta {
	len: usize,
	capacity: Option<usize>
}

impl crate::generic::Meta for Meta {
	const MAX_LENGTH: usize = usize::MAX;

	fn new(len: usize, capacity: Option<usize>) -> Self {
		Meta {
			len,
			capacity
		}
	}

	fn len(&self) -> usize {
		self.len
	}

	fn capacity(&self) -> Option<usize> {
		self.capacity
	}

	fn set_len(&mut self, len: usize) {
		self.len = len
	}

	fn set_capacity(&mut self, capacity: Option<usize>) {
		self.capacity = capacity
	}
}

pub type SpillVec<T, const N: usize> = crate::generic::SpillVec<Meta, T, N>;
