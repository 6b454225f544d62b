use std::fmt::{self, Display};

/// Identifier of an item, unique within the record it belongs to
pub type ItemId = u32;
/// Cost of a single item, or the summed cost of a selection
pub type Cost = u32;
/// Weight of a single item, or the summed weight of a selection
pub type Weight = f64;
/// Weight counted in hundredths, the precision in which weights are written.
///
/// Weights are summed and compared against capacities in this unit so that
/// a selection weighing exactly the capacity is never rejected by rounding.
pub type Hundredths = u32;

/// Largest weight an item may have to be considered for packing
pub const MAX_ITEM_WEIGHT: Weight = 100.0;
/// Largest cost an item may have to be considered for packing
pub const MAX_ITEM_COST: Cost = 100;

/// An indivisible thing that can be put in a package.
///
/// Items are immutable once constructed; within a record they are identified
/// by their [`ItemId`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Item {
	id: ItemId,
	weight: Weight,
	cost: Cost,
}

impl Item {
	pub fn new(id: ItemId, weight: Weight, cost: Cost) -> Self {
		Self { id, weight, cost }
	}

	pub fn id(&self) -> ItemId {
		self.id
	}

	pub fn weight(&self) -> Weight {
		self.weight
	}

	pub fn cost(&self) -> Cost {
		self.cost
	}

	/// Weight rounded to the nearest hundredth
	pub fn hundredths(&self) -> Hundredths {
		(self.weight * 100.0).round() as Hundredths
	}

	/// Whether the item respects the weight and cost limits.
	///
	/// Weights and costs must be strictly positive; a `NaN` weight is never in
	/// bounds.
	pub fn in_bounds(&self) -> bool {
		self.weight > 0.0
			&& self.weight <= MAX_ITEM_WEIGHT
			&& self.cost > 0
			&& self.cost <= MAX_ITEM_COST
	}
}

impl Display for Item {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({},{:.2},{})", self.id, self.weight, self.cost)
	}
}
