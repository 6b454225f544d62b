//! # Subsets of a record's items
//!
//! A [`Subset`] is a selection of items drawn from a single record. It is
//! represented as a bitmask over the record's item slice: bit `i` is set when
//! the item at index `i` is part of the subset. Because records hold at most
//! [`MAX_ITEMS`](crate::record::MAX_ITEMS) items, the whole power set of a
//! record is a contiguous range of masks, enumerated by [`power_set`].

use std::{iter::FusedIterator, ops::Range};

use crate::item::{Cost, Hundredths, Item};

/// Selection of items, identified by their index in the record's item slice
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subset(u32);

impl Subset {
	/// Subset that contains no items
	pub const EMPTY: Subset = Subset(0);

	/// Number of items in the subset
	pub fn len(self) -> usize {
		self.0.count_ones() as usize
	}

	pub fn is_empty(self) -> bool {
		self.0 == 0
	}

	pub fn contains(self, index: usize) -> bool {
		index < u32::BITS as usize && self.0 & (1 << index) != 0
	}

	/// The subset extended with the item at `index`
	pub fn with(self, index: usize) -> Self {
		debug_assert!(index < u32::BITS as usize);
		Subset(self.0 | (1 << index))
	}

	/// Indices of the items in the subset, in ascending order
	pub fn indices(self) -> impl Iterator<Item = usize> {
		(0..u32::BITS as usize).filter(move |&i| self.contains(i))
	}

	/// The items of `items` selected by this subset
	pub fn items<'a>(self, items: &'a [Item]) -> impl Iterator<Item = &'a Item> + 'a {
		self.indices().map_while(move |i| items.get(i))
	}

	/// Total cost and weight of the items selected from `items`
	pub fn aggregate(self, items: &[Item]) -> Aggregate {
		self.items(items).fold(Aggregate::default(), |acc, item| Aggregate {
			cost: acc.cost + item.cost(),
			weight: acc.weight + item.hundredths(),
		})
	}
}

/// Summed cost and weight of a selection of items
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Aggregate {
	pub cost: Cost,
	pub weight: Hundredths,
}

/// Iterator over every subset of `n` items, see [`power_set`]
#[derive(Clone, Debug)]
pub struct PowerSet {
	masks: Range<u32>,
}

/// All 2^n subsets of `n` items, from the empty subset up to the full set.
///
/// Subsets are yielded in ascending mask order. This is the same order in
/// which a recursive construction produces them: for the first item `head`
/// and each subset `S` of the remaining items, `S` is produced before
/// `S ∪ {head}`.
///
/// # Panics
///
/// Panics if `n` is not smaller than 32.
pub fn power_set(n: usize) -> PowerSet {
	assert!(n < u32::BITS as usize, "cannot enumerate subsets of {n} items");
	PowerSet {
		masks: 0..(1 << n),
	}
}

impl Iterator for PowerSet {
	type Item = Subset;

	fn next(&mut self) -> Option<Self::Item> {
		self.masks.next().map(Subset)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.masks.size_hint()
	}
}

impl ExactSizeIterator for PowerSet {}
impl FusedIterator for PowerSet {}
