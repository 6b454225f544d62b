//! # Selecting the best subset of a record
//!
//! The selector exhaustively enumerates the power set of a record's items,
//! discards every subset that does not fit within the capacity, and keeps the
//! subset with the highest cost. Because records hold at most
//! [`MAX_ITEMS`](crate::record::MAX_ITEMS) items this is at most 32768 subset
//! evaluations per record.
//!
//! Among feasible subsets of equal cost a single representative is kept per
//! cost value. A subset encountered later replaces the representative only when
//! it contains strictly more items or, for an equal number of items, when it is
//! strictly lighter. Preferring the larger subset matches the behaviour of
//! earlier packer releases and is deliberately not "more items is worse".
//! Earlier releases left equally sized subsets in no defined order; preferring
//! the lighter one is a rule of this crate.
//!
//! Weights are summed in whole hundredths, so a subset weighing exactly the
//! capacity always fits.

use std::collections::{btree_map::Entry, BTreeMap};

use itertools::Itertools;
use rayon::prelude::*;
use serde::Serialize;
use tracing::trace;

use crate::{
	item::{Cost, ItemId, Weight},
	record::{Capacity, Record},
	subset::{power_set, Aggregate, Subset},
};

/// The answer for a single record: the items chosen to be packed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Selection {
	capacity: Capacity,
	/// Identifiers of the chosen items in ascending order
	items: Vec<ItemId>,
	cost: Cost,
	weight: Weight,
}

impl Selection {
	pub fn capacity(&self) -> Capacity {
		self.capacity
	}

	pub fn items(&self) -> &[ItemId] {
		&self.items
	}

	pub fn cost(&self) -> Cost {
		self.cost
	}

	pub fn weight(&self) -> Weight {
		self.weight
	}

	/// Whether no item was chosen
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Render the chosen identifiers joined by `separator`, or `empty` when no
	/// item was chosen
	pub fn to_text(&self, separator: &str, empty: &str) -> String {
		if self.is_empty() {
			empty.to_owned()
		} else {
			self.items.iter().join(separator)
		}
	}
}

/// Whether `candidate` should replace `current` as the representative of their
/// (shared) cost.
fn replaces(candidate: (Subset, Aggregate), current: (Subset, Aggregate)) -> bool {
	let (cand_len, cur_len) = (candidate.0.len(), current.0.len());
	cand_len > cur_len || (cand_len == cur_len && candidate.1.weight < current.1.weight)
}

/// Choose the subset of `record`'s items with the highest total cost that
/// still fits within its capacity.
///
/// When no item fits, the result is the empty selection with cost 0.
pub fn select(record: &Record) -> Selection {
	let items = record.items();
	let mut representatives: BTreeMap<Cost, (Subset, Aggregate)> = BTreeMap::new();

	for subset in power_set(items.len()) {
		let aggregate = subset.aggregate(items);
		if !record.fits(aggregate.weight) {
			continue;
		}
		match representatives.entry(aggregate.cost) {
			Entry::Vacant(e) => {
				let _ = e.insert((subset, aggregate));
			}
			Entry::Occupied(mut e) => {
				if replaces((subset, aggregate), *e.get()) {
					let _ = e.insert((subset, aggregate));
				}
			}
		}
	}

	// A negative capacity leaves not even the empty subset feasible
	let (subset, aggregate) = representatives
		.pop_last()
		.map(|(_, best)| best)
		.unwrap_or_default();

	let weight = Weight::from(aggregate.weight) / 100.0;
	trace!(
		capacity = record.capacity(),
		items = items.len(),
		chosen = subset.len(),
		cost = aggregate.cost,
		weight,
		"selected subset"
	);

	Selection {
		capacity: record.capacity(),
		items: subset.items(items).map(|item| item.id()).collect(),
		cost: aggregate.cost,
		weight,
	}
}

/// Select the best subset for each of `records`, preserving their order.
///
/// Records are independent of each other; when `parallel` is set they are
/// distributed over the global [`rayon`] thread pool.
pub fn solve_all(records: &[Record], parallel: bool) -> Vec<Selection> {
	if parallel {
		records.par_iter().map(select).collect()
	} else {
		records.iter().map(select).collect()
	}
}

#[cfg(test)]
mod tests {
	use expect_test::expect;
	use proptest::prelude::*;

	use super::*;
	use crate::{
		item::{Hundredths, Item},
		record::{validate, MAX_CAPACITY},
	};

	fn record(capacity: Capacity, items: &[(ItemId, Weight, Cost)]) -> Record {
		validate(
			capacity,
			items.iter().map(|&(id, w, c)| Item::new(id, w, c)),
		)
		.unwrap()
	}

	#[test]
	fn test_select_single_heavy_item() {
		let sel = select(&record(50, &[(1, 92.0, 1)]));
		assert!(sel.is_empty());
		assert_eq!(sel.cost(), 0);
		expect!["-"].assert_eq(&sel.to_text(",", "-"));

		let sel = select(&record(8, &[(1, 15.3, 34)]));
		expect!["-"].assert_eq(&sel.to_text(",", "-"));
	}

	#[test]
	fn test_select_prefers_lighter_equal_subset() {
		// {6, 9} and {8, 9} both cost 143 with two items; the lighter one wins
		let sel = select(&record(
			56,
			&[
				(1, 90.72, 13),
				(2, 33.80, 40),
				(3, 43.15, 10),
				(4, 37.97, 16),
				(5, 46.81, 36),
				(6, 48.77, 79),
				(7, 81.80, 45),
				(8, 19.36, 79),
				(9, 6.76, 64),
			],
		));
		expect!["8,9"].assert_eq(&sel.to_text(",", "-"));
		assert_eq!(sel.cost(), 143);
		assert!((sel.weight() - 26.12).abs() < 1e-9);
	}

	#[test]
	fn test_select_single_item() {
		let sel = select(&record(
			81,
			&[
				(1, 53.38, 45),
				(2, 88.62, 98),
				(3, 78.48, 3),
				(4, 72.30, 76),
				(5, 30.18, 9),
				(6, 46.34, 48),
			],
		));
		expect!["4"].assert_eq(&sel.to_text(",", "-"));
		assert_eq!(sel.cost(), 76);
	}

	#[test]
	fn test_select_multiple_items() {
		let sel = select(&record(
			75,
			&[
				(1, 85.31, 29),
				(2, 14.55, 74),
				(3, 3.98, 16),
				(4, 26.24, 55),
				(5, 63.69, 52),
				(6, 76.25, 75),
				(7, 60.02, 74),
				(8, 93.18, 35),
				(9, 89.95, 78),
			],
		));
		expect!["2 7"].assert_eq(&sel.to_text(" ", "-"));
		assert_eq!(sel.cost(), 148);
	}

	#[test]
	fn test_select_prefers_more_items() {
		// Cost 50 is reached by {1, 2} (weight 35) and by {2, 3, 4, 5}
		// (weight 40): the subset with more items is kept even though it is
		// heavier.
		let sel = select(&record(
			40,
			&[
				(1, 25.0, 25),
				(2, 10.0, 25),
				(3, 10.0, 10),
				(4, 10.0, 10),
				(5, 10.0, 5),
			],
		));
		expect!["2,3,4,5"].assert_eq(&sel.to_text(",", "-"));
		assert_eq!(sel.cost(), 50);
		assert_eq!(sel.weight(), 40.0);
	}

	#[test]
	fn test_select_negative_capacity() {
		let sel = select(&record(-1, &[(1, 0.5, 3)]));
		assert!(sel.is_empty());
		assert_eq!(sel.weight(), 0.0);
	}

	#[test]
	fn test_select_exact_capacity() {
		let sel = select(&record(20, &[(1, 5.0, 10), (2, 15.0, 20)]));
		expect!["1,2"].assert_eq(&sel.to_text(",", "-"));

		// 39.12 + 59.59 + 1.29 exceeds 100 when summed as f64
		let sel = select(&record(100, &[(1, 39.12, 10), (2, 59.59, 10), (3, 1.29, 10)]));
		expect!["1,2,3"].assert_eq(&sel.to_text(",", "-"));
		assert_eq!(sel.cost(), 30);
		assert_eq!(sel.weight(), 100.0);
	}

	#[test]
	fn test_serialize_selection() {
		let sel = select(&record(56, &[(8, 19.36, 79), (9, 6.76, 64), (6, 48.77, 79)]));
		expect![[r#"{"capacity":56,"items":[8,9],"cost":143,"weight":26.12}"#]]
			.assert_eq(&serde_json::to_string(&sel).unwrap());
		let sel = select(&record(8, &[(1, 15.3, 34)]));
		expect![[r#"{"capacity":8,"items":[],"cost":0,"weight":0.0}"#]]
			.assert_eq(&serde_json::to_string(&sel).unwrap());
	}

	#[test]
	fn test_solve_all_keeps_order() {
		let records: Vec<Record> = (1..=MAX_CAPACITY)
			.map(|capacity| record(capacity, &[(1, 30.0, 1), (2, 60.0, 2), (3, 90.0, 4)]))
			.collect();
		let sequential = solve_all(&records, false);
		let parallel = solve_all(&records, true);
		assert_eq!(sequential, parallel);
		assert!(sequential[28].is_empty());
		assert_eq!(sequential[29].items(), &[1]);
		assert_eq!(sequential[59].items(), &[2]);
		assert_eq!(sequential[89].items(), &[3]);
		assert_eq!(sequential[99].items(), &[3]);
	}

	/// Power set built by splitting off a head item and recursing on the rest
	fn recursive_power_set(items: &[Item]) -> Vec<Vec<Item>> {
		match items.split_first() {
			None => vec![Vec::new()],
			Some((head, rest)) => recursive_power_set(rest)
				.into_iter()
				.flat_map(|s| {
					let mut with_head = s.clone();
					with_head.push(*head);
					[s, with_head]
				})
				.collect(),
		}
	}

	prop_compose! {
		fn arb_record()(
			capacity in 1..=MAX_CAPACITY,
			items in prop::collection::vec((1u32..=10_000, 1..=100u32), 1..=10),
		) -> Record {
			let items = items
				.into_iter()
				.enumerate()
				.map(|(i, (w, c))| Item::new(i as ItemId + 1, w as Weight / 100.0, c));
			validate(capacity, items).unwrap()
		}
	}

	proptest! {
		#[test]
		fn test_select_is_optimal(record in arb_record()) {
			let sel = select(&record);
			let subsets = recursive_power_set(record.items());
			prop_assert_eq!(subsets.len(), power_set(record.items().len()).len());

			prop_assert!(sel.weight() <= record.capacity() as Weight);
			for s in subsets {
				let cost: Cost = s.iter().map(Item::cost).sum();
				let weight: Hundredths = s.iter().map(Item::hundredths).sum();
				if !record.fits(weight) {
					continue;
				}
				prop_assert!(sel.cost() >= cost);
				if sel.cost() == cost {
					prop_assert!(sel.items().len() >= s.len());
				}
			}

			prop_assert_eq!(&sel, &select(&record));
		}
	}
}
