//! # Records
//!
//! A record is a single unit of work: the weight limit of one package together
//! with the items that could be put into it. Records are only ever created
//! through [`validate`], which enforces the limits on capacity and item count.
//! Anything that does not satisfy these limits is silently dropped: the caller
//! receives `None` and no answer is produced for the record.

use std::collections::HashSet;

use tracing::debug;

use crate::item::{Hundredths, Item};

/// Weight limit of a package
pub type Capacity = i64;

/// Largest capacity a package may have
pub const MAX_CAPACITY: Capacity = 100;
/// Largest number of items a record may offer
pub const MAX_ITEMS: usize = 15;

/// A package capacity together with the items that could be packed into it.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
	capacity: Capacity,
	/// Items in ascending identifier order, without duplicate identifiers
	items: Vec<Item>,
}

impl Record {
	pub fn capacity(&self) -> Capacity {
		self.capacity
	}

	pub fn items(&self) -> &[Item] {
		&self.items
	}

	/// Whether a total weight, in hundredths, stays within the capacity of the
	/// package
	pub fn fits(&self, weight: Hundredths) -> bool {
		i64::from(weight) <= self.capacity.saturating_mul(100)
	}
}

/// Check the capacity and items of a package, returning the resulting
/// [`Record`], or `None` when the record must be dropped.
///
/// Items outside the weight or cost limits are removed individually, as are
/// items that repeat an identifier seen earlier in `items`. The record is then
/// dropped when its capacity exceeds [`MAX_CAPACITY`], or when it is left with
/// no items or with more than [`MAX_ITEMS`] items.
pub fn validate(capacity: Capacity, items: impl IntoIterator<Item = Item>) -> Option<Record> {
	let mut seen = HashSet::new();
	let mut items: Vec<Item> = items
		.into_iter()
		.filter(|item| {
			if !item.in_bounds() {
				debug!(item = %item, "dropping item outside of weight or cost limits");
				return false;
			}
			if !seen.insert(item.id()) {
				debug!(item = %item, "dropping item with duplicate identifier");
				return false;
			}
			true
		})
		.collect();

	if capacity > MAX_CAPACITY {
		debug!(capacity, "dropping record: capacity exceeds {MAX_CAPACITY}");
		return None;
	}
	if items.is_empty() {
		debug!(capacity, "dropping record: no items to pack");
		return None;
	}
	if items.len() > MAX_ITEMS {
		debug!(
			capacity,
			count = items.len(),
			"dropping record: more than {MAX_ITEMS} items"
		);
		return None;
	}

	items.sort_by_key(Item::id);
	Some(Record { capacity, items })
}

#[cfg(test)]
mod tests {
	use expect_test::expect;

	use super::*;

	fn unit_items(count: u32) -> Vec<Item> {
		(1..=count).map(|id| Item::new(id, 1.0, 1)).collect()
	}

	#[test]
	fn test_validate_accepts() {
		let record = validate(
			81,
			[
				Item::new(2, 88.62, 98),
				Item::new(1, 53.38, 45),
				Item::new(3, 78.48, 3),
			],
		)
		.unwrap();
		assert_eq!(record.capacity(), 81);
		expect![[r#"
    [
        1,
        2,
        3,
    ]
"#]]
		.assert_debug_eq(&record.items().iter().map(Item::id).collect::<Vec<_>>());
	}

	#[test]
	fn test_validate_capacity() {
		assert!(validate(100, unit_items(1)).is_some());
		assert!(validate(101, unit_items(1)).is_none());
		// No lower bound: such a record can only ever select nothing
		assert!(validate(-3, unit_items(1)).is_some());
	}

	#[test]
	fn test_validate_item_count() {
		assert!(validate(10, Vec::new()).is_none());
		assert!(validate(10, unit_items(15)).is_some());
		assert!(validate(10, unit_items(16)).is_none());
	}

	#[test]
	fn test_validate_drops_items() {
		// Dropping out of bound items happens before the item count is checked
		let mut items = unit_items(15);
		items.push(Item::new(16, 120.0, 1));
		let record = validate(10, items).unwrap();
		assert_eq!(record.items().len(), 15);

		let record = validate(
			10,
			[
				Item::new(1, 5.0, 101),
				Item::new(2, 5.0, 7),
				Item::new(2, 3.0, 9),
			],
		)
		.unwrap();
		assert_eq!(record.items(), &[Item::new(2, 5.0, 7)]);

		assert!(validate(10, [Item::new(1, 100.5, 3)]).is_none());

		// Items without a cost are never worth packing
		let record = validate(10, [Item::new(1, 5.0, 10), Item::new(2, 1.0, 0)]).unwrap();
		assert_eq!(record.items(), &[Item::new(1, 5.0, 10)]);
	}

	#[test]
	fn test_record_fits() {
		let record = validate(56, unit_items(1)).unwrap();
		assert!(record.fits(0));
		assert!(record.fits(5600));
		assert!(!record.fits(5601));

		let record = validate(-1, unit_items(1)).unwrap();
		assert!(!record.fits(0));
	}
}
