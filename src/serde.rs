//! Serialization support, behind the `serde` feature.
//!
//! Vectors serialize as plain sequences, whatever their storage mode.
//! Since a [`SpillVec`] needs an allocator to grow, deserialization goes through
//! [`SpillVecSeed`], a [`DeserializeSeed`] carrying the allocator.
use core::{
	cmp,
	fmt,
	marker::PhantomData,
	mem
};
use ::serde::{
	de::{
		self,
		DeserializeSeed,
		SeqAccess,
		Visitor
	},
	ser::SerializeSeq,
	Deserialize,
	Deserializer,
	Serialize,
	Serializer
};
use crate::{
	alloc::Allocator,
	generic::{
		Meta,
		SpillVec
	},
	owned::OwnedSlice
};

/// Upper bound, in bytes, of the buffer reserved from a sequence's size hint.
const MAX_PREALLOC_BYTES: usize = 1024 * 1024;

/// Number of elements to reserve for a sequence announcing `hint` elements.
///
/// Size hints come from the input and cannot be trusted:
/// past this bound the vector grows as elements actually arrive.
fn cautious<T>(hint: usize) -> usize {
	cmp::min(hint, MAX_PREALLOC_BYTES / cmp::max(mem::size_of::<T>(), 1))
}

fn serialize_slice<T: Serialize, S: Serializer>(items: &[T], serializer: S) -> Result<S::Ok, S::Error> {
	let mut seq = serializer.serialize_seq(Some(items.len()))?;
	for item in items {
		seq.serialize_element(item)?;
	}
	seq.end()
}

impl<M: Meta, T: Copy + Serialize, const N: usize> Serialize for SpillVec<M, T, N> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serialize_slice(self.as_slice(), serializer)
	}
}

impl<T: Copy + Serialize> Serialize for OwnedSlice<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serialize_slice(self.as_slice(), serializer)
	}
}

/// Deserializes a [`SpillVec`] using the given allocator.
///
/// ```
/// # use serde::de::DeserializeSeed;
/// # use spill_vec::{SpillVec, Global, serde::SpillVecSeed};
/// let mut de = serde_json::Deserializer::from_str("[1, 2, 3, 4, 5]");
/// let vec: SpillVec<u8, 4> = SpillVecSeed::new(&Global).deserialize(&mut de).unwrap();
/// assert!(vec.is_big());
/// assert_eq!(vec, [1, 2, 3, 4, 5]);
/// vec.deinit(&Global);
/// ```
pub struct SpillVecSeed<'a, A: ?Sized, M, T, const N: usize> {
	alloc: &'a A,
	marker: PhantomData<fn() -> (M, T)>
}

impl<'a, A: Allocator + ?Sized, M: Meta, T: Copy, const N: usize> SpillVecSeed<'a, A, M, T, N> {
	pub fn new(alloc: &'a A) -> Self {
		SpillVecSeed {
			alloc,
			marker: PhantomData
		}
	}
}

impl<'de, 'a, A: Allocator + ?Sized, M: Meta, T: Copy + Deserialize<'de>, const N: usize> DeserializeSeed<'de> for SpillVecSeed<'a, A, M, T, N> {
	type Value = SpillVec<M, T, N>;

	fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
		deserializer.deserialize_seq(self)
	}
}

impl<'de, 'a, A: Allocator + ?Sized, M: Meta, T: Copy + Deserialize<'de>, const N: usize> Visitor<'de> for SpillVecSeed<'a, A, M, T, N> {
	type Value = SpillVec<M, T, N>;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str("a sequence")
	}

	fn visit_seq<S: SeqAccess<'de>>(self, mut seq: S) -> Result<Self::Value, S::Error> {
		let mut vec = SpillVec::new();

		// The heap buffer must be released on every error path.
		let result = (|| -> Result<(), S::Error> {
			if let Some(hint) = seq.size_hint() {
				vec.ensure_capacity(self.alloc, cautious::<T>(hint)).map_err(<S::Error as de::Error>::custom)?;
			}

			while let Some(item) = seq.next_element()? {
				vec.append(self.alloc, item).map_err(<S::Error as de::Error>::custom)?;
			}

			Ok(())
		})();

		match result {
			Ok(()) => Ok(vec),
			Err(e) => {
				vec.deinit(self.alloc);
				Err(e)
			}
		}
	}
}
