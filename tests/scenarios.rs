mod common;

use common::{
	init_tracing,
	Budget
};
use spill_vec::{
	Error,
	Global,
	SpillVec
};

fn filled<const N: usize>(alloc: &Budget, items: &[i32]) -> SpillVec<i32, N> {
	let mut vec = SpillVec::new();
	vec.append_slice(alloc, items).unwrap();
	vec
}

#[test]
fn spills_after_inline_capacity() {
	init_tracing();
	let alloc = Budget::unlimited();
	let mut vec: SpillVec<i32, 4> = SpillVec::new();

	for i in 1..=4 {
		vec.append(&alloc, i).unwrap();
	}
	assert!(vec.is_small());
	assert_eq!(vec.capacity(), 4);
	assert_eq!(alloc.requests(), 0);

	vec.append(&alloc, 5).unwrap();
	assert!(vec.is_big());
	assert_eq!(vec.as_slice(), &[1, 2, 3, 4, 5]);

	vec.deinit(&alloc);
	assert_eq!(alloc.live_bytes(), 0);
}

#[test]
fn promotion_is_irreversible() {
	let alloc = Budget::unlimited();
	let mut vec: SpillVec<i32, 3> = filled(&alloc, &[1, 2, 3, 4]);
	assert!(vec.is_big());

	while vec.pop_or_none().is_some() {}
	assert!(vec.is_big());

	vec.shrink(&alloc, 0);
	assert!(vec.is_big());
	assert_eq!(vec.capacity(), 0);

	vec.append(&alloc, 9).unwrap();
	assert!(vec.is_big());
	assert_eq!(vec, [9]);

	vec.deinit(&alloc);
	assert_eq!(alloc.live_bytes(), 0);
}

#[test]
fn ordered_remove() {
	let alloc = Budget::unlimited();
	let mut vec: SpillVec<i32, 4> = filled(&alloc, &[1, 2, 3, 4, 5, 6, 7]);

	assert_eq!(vec.ordered_remove(3), 4);
	assert_eq!(vec, [1, 2, 3, 5, 6, 7]);

	assert_eq!(vec.ordered_remove(5), 7);
	assert_eq!(vec, [1, 2, 3, 5, 6]);

	assert_eq!(vec.ordered_remove(0), 1);
	assert_eq!(vec, [2, 3, 5, 6]);

	vec.deinit(&alloc);
}

#[test]
fn swap_remove() {
	let alloc = Budget::unlimited();
	let mut vec: SpillVec<i32, 8> = filled(&alloc, &[1, 2, 3, 4, 5, 6, 7]);
	assert!(vec.is_small());

	assert_eq!(vec.swap_remove(3), 4);
	assert_eq!(vec, [1, 2, 3, 7, 5, 6]);

	assert_eq!(vec.swap_remove(5), 6);
	assert_eq!(vec, [1, 2, 3, 7, 5]);
}

#[test]
fn swap_remove_or_error() {
	let mut vec: SpillVec<i32, 2> = SpillVec::new();
	assert_eq!(vec.swap_remove_or_error(0), Err(Error::OutOfBounds));

	vec.append(&Global, 1).unwrap();
	assert_eq!(vec.swap_remove_or_error(0), Ok(1));
	assert_eq!(vec.len(), 0);
	assert_eq!(vec.swap_remove_or_error(0), Err(Error::OutOfBounds));
}

#[test]
fn insert() {
	let alloc = Budget::unlimited();

	let mut vec: SpillVec<i32, 4> = filled(&alloc, &[1, 2, 3]);
	vec.insert(&alloc, 0, 5).unwrap();
	assert_eq!(vec, [5, 1, 2, 3]);
	assert!(vec.is_small());

	vec.insert(&alloc, 4, 6).unwrap();
	assert_eq!(vec, [5, 1, 2, 3, 6]);
	assert!(vec.is_big());

	vec.insert(&alloc, 2, 7).unwrap();
	assert_eq!(vec, [5, 1, 7, 2, 3, 6]);

	vec.deinit(&alloc);
}

#[test]
fn insert_slice() {
	let alloc = Budget::unlimited();

	let mut vec: SpillVec<i32, 8> = filled(&alloc, &[1, 2, 3, 4]);
	vec.insert_slice(&alloc, 1, &[9, 8]).unwrap();
	assert_eq!(vec, [1, 9, 8, 2, 3, 4]);

	vec.insert_slice(&alloc, 6, &[]).unwrap();
	assert_eq!(vec, [1, 9, 8, 2, 3, 4]);

	vec.insert_slice(&alloc, 0, &[10, 11, 12]).unwrap();
	assert_eq!(vec, [10, 11, 12, 1, 9, 8, 2, 3, 4]);
	assert!(vec.is_big());

	vec.deinit(&alloc);
}

#[test]
#[should_panic(expected = "insertion index")]
fn insert_past_the_end() {
	let mut vec: SpillVec<i32, 4> = SpillVec::new();
	let _ = vec.insert(&Global, 1, 0);
}

#[test]
fn append_slice_tail() {
	let alloc = Budget::unlimited();
	let mut vec: SpillVec<i32, 4> = filled(&alloc, &[1, 2]);

	vec.append_slice(&alloc, &[]).unwrap();
	assert_eq!(vec, [1, 2]);
	assert_eq!(alloc.requests(), 0);

	let items = [3, 4, 5, 6, 7];
	vec.append_slice(&alloc, &items).unwrap();
	assert_eq!(&vec[2..], &items);

	vec.deinit(&alloc);
}

#[test]
fn checked_set() {
	let mut vec: SpillVec<i32, 4> = SpillVec::new();
	assert_eq!(vec.set_or_error(0, 1), Err(Error::OutOfBounds));

	for len in 1..=6 {
		vec.append(&Global, 0).unwrap();
		assert_eq!(vec.set_or_error(len - 1, len as i32), Ok(()));
		assert_eq!(vec.set_or_error(len, 0), Err(Error::OutOfBounds));
		assert_eq!(vec.at(len - 1), len as i32);
	}

	vec.set(0, 42);
	assert_eq!(vec, [42, 2, 3, 4, 5, 6]);
	vec.deinit(&Global);
}

#[test]
#[should_panic(expected = "should be < len")]
fn set_out_of_bounds() {
	let mut vec: SpillVec<i32, 4> = SpillVec::new();
	vec.set(0, 1);
}

#[test]
#[should_panic(expected = "empty vector")]
fn pop_empty() {
	let mut vec: SpillVec<i32, 4> = SpillVec::new();
	vec.pop();
}

#[test]
fn pop() {
	let mut vec: SpillVec<i32, 4> = SpillVec::new();
	assert_eq!(vec.pop_or_none(), None);

	vec.append_slice(&Global, &[1, 2]).unwrap();
	assert_eq!(vec.pop(), 2);
	assert_eq!(vec.pop_or_none(), Some(1));
	assert_eq!(vec.pop_or_none(), None);
	assert!(vec.is_empty());
}

#[test]
fn add_one() {
	let alloc = Budget::unlimited();
	let mut vec: SpillVec<u8, 2> = SpillVec::new();

	unsafe {
		vec.add_one_assume_capacity().write(1);
		vec.add_one(&alloc).unwrap().write(2);
		vec.add_one(&alloc).unwrap().write(3);
	}

	assert!(vec.is_big());
	assert_eq!(vec, [1, 2, 3]);
	vec.deinit(&alloc);
}

#[test]
#[should_panic(expected = "no spare capacity")]
fn add_one_without_capacity() {
	let mut vec: SpillVec<u8, 1> = SpillVec::new();
	vec.append(&Global, 1).unwrap();
	unsafe {
		vec.add_one_assume_capacity();
	}
}

#[test]
fn resize() {
	let alloc = Budget::unlimited();
	let mut vec: SpillVec<u32, 4> = filled_u32(&alloc, &[1, 2]);

	unsafe {
		vec.resize(&alloc, 6).unwrap();
		let ptr = vec.as_mut_ptr();
		for i in 2..6 {
			ptr.add(i).write(i as u32 + 1);
		}
	}
	assert_eq!(vec.len(), 6);
	assert!(vec.capacity() >= 6);
	assert_eq!(vec, [1, 2, 3, 4, 5, 6]);

	unsafe {
		vec.resize(&alloc, 1).unwrap();
	}
	assert_eq!(vec, [1]);

	vec.deinit(&alloc);
}

fn filled_u32<const N: usize>(alloc: &Budget, items: &[u32]) -> SpillVec<u32, N> {
	let mut vec = SpillVec::new();
	vec.append_slice(alloc, items).unwrap();
	vec
}

#[test]
fn append_n_times() {
	let alloc = Budget::unlimited();
	let mut vec: SpillVec<i32, 4> = filled(&alloc, &[1]);
	vec.append_n_times(&alloc, 7, 3).unwrap();
	assert_eq!(vec, [1, 7, 7, 7]);
	assert!(vec.is_small());

	vec.append_n_times(&alloc, 0, 0).unwrap();
	vec.append_n_times(&alloc, 8, 2).unwrap();
	assert_eq!(vec, [1, 7, 7, 7, 8, 8]);

	vec.deinit(&alloc);
}

#[test]
fn truncate_and_clear() {
	let alloc = Budget::unlimited();
	let mut vec: SpillVec<i32, 2> = filled(&alloc, &[1, 2, 3, 4]);
	let capacity = vec.capacity();

	vec.truncate(10);
	assert_eq!(vec.len(), 4);
	vec.truncate(2);
	assert_eq!(vec, [1, 2]);
	vec.clear();
	assert!(vec.is_empty());
	assert_eq!(vec.capacity(), capacity);

	vec.deinit(&alloc);
}

#[test]
fn iterate() {
	let alloc = Budget::unlimited();
	let mut vec: SpillVec<i32, 2> = filled(&alloc, &[1, 2, 3]);

	assert_eq!(vec.iter().collect::<Vec<_>>(), [1, 2, 3]);
	assert_eq!((&vec).into_iter().sum::<i32>(), 6);

	for item in &mut vec {
		*item *= 10;
	}
	assert_eq!(vec, [10, 20, 30]);

	let mut it = vec.iter();
	assert_eq!(it.next(), Some(10));
	it.reset();
	assert_eq!(it.count(), 3);

	vec.deinit(&alloc);
}

#[test]
fn clone_in() {
	let alloc = Budget::unlimited();
	let vec: SpillVec<i32, 4> = filled(&alloc, &[1, 2, 3, 4, 5]);
	let mut copy = vec.clone_in(&alloc).unwrap();
	assert_eq!(copy, vec);
	assert!(copy.is_big());
	assert_eq!(copy.capacity(), 5);

	copy.set(0, 0);
	assert_eq!(vec.at(0), 1);

	let small: SpillVec<i32, 4> = SpillVec::new();
	let small_copy = small.clone_in(&alloc).unwrap();
	assert!(small_copy.is_small());

	copy.deinit(&alloc);
	vec.deinit(&alloc);
	assert_eq!(alloc.live_bytes(), 0);
}

#[test]
fn with_capacity_in() {
	let alloc = Budget::unlimited();

	let small: SpillVec<i32, 4> = SpillVec::with_capacity_in(&alloc, 3).unwrap();
	assert!(small.is_small());
	assert_eq!(alloc.requests(), 0);

	let mut big: SpillVec<i32, 4> = SpillVec::with_capacity_in(&alloc, 10).unwrap();
	assert!(big.is_big());
	assert_eq!(big.capacity(), 10);
	assert!(big.is_empty());

	big.append_n_times(&alloc, 1, 10).unwrap();
	assert_eq!(alloc.requests(), 1);

	big.deinit(&alloc);
	assert_eq!(alloc.live_bytes(), 0);
}

#[test]
fn lean_meta() {
	let mut vec: spill_vec::lean::SpillVec<u16, 3> = spill_vec::lean::SpillVec::new();
	vec.append_slice(&Global, &[1, 2, 3, 4]).unwrap();
	assert!(vec.is_big());
	assert_eq!(vec.capacity(), 3 + 3 / 2 + 8);
	assert_eq!(vec, [1, 2, 3, 4]);

	let slice = vec.to_owned_slice(&Global).unwrap();
	assert!(vec.is_small());
	assert!(vec.is_empty());
	slice.release(&Global);
}
