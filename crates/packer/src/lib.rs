//! # Packer
//!
//! Packer decides which items to put in a package. Each package (a
//! [`Record`]) has a weight limit and offers up to [`MAX_ITEMS`] items, each
//! with a weight and a cost. The answer for a record is the set of items with
//! the highest total cost whose total weight stays within the limit.
//!
//! The answer is found by exhaustively evaluating every subset of the
//! record's items (see [`select`]); no approximation or dynamic programming is
//! involved, so the tie-breaking between subsets of equal cost is exact.
//!
//! ```
//! let input = "8 : (1,15.3,€34)\n56 : (8,19.36,€79) (9,6.76,€64) (6,48.77,€79)\n";
//! let output = packer::pack_str(input, &packer::Options::default()).unwrap();
//! assert_eq!(output, "-\n8,9\n");
//! ```

pub(crate) mod error;
pub(crate) mod item;
pub(crate) mod output;
pub(crate) mod parser;
pub(crate) mod record;
pub(crate) mod selector;
pub(crate) mod subset;

use std::{
	fs,
	io::{BufRead, Read},
	path::Path,
};

use tracing::debug;

pub use crate::{
	error::Error,
	item::{Cost, Item, ItemId, Weight, MAX_ITEM_COST, MAX_ITEM_WEIGHT},
	output::{render, render_all, Format, Options},
	parser::parse_records,
	record::{validate, Capacity, Record, MAX_CAPACITY, MAX_ITEMS},
	selector::{select, solve_all, Selection},
	subset::{power_set, Aggregate, PowerSet, Subset},
};

/// Solve every record in `input`, returning the rendered answers, one line
/// per record that was not dropped.
pub fn pack_str(input: &str, options: &Options) -> Result<String, Error> {
	let records = parse_records(input);
	debug!(records = records.len(), "solving records");
	let selections = solve_all(&records, options.parallel);
	render_all(&selections, options)
}

/// Solve every record read from `reader`, see [`pack_str`]
pub fn pack_reader(mut reader: impl BufRead, options: &Options) -> Result<String, Error> {
	let mut input = String::new();
	let _ = reader.read_to_string(&mut input).map_err(Error::Input)?;
	pack_str(&input, options)
}

/// Solve every record in the file at `path`, see [`pack_str`]
pub fn pack_file(path: impl AsRef<Path>, options: &Options) -> Result<String, Error> {
	let path = path.as_ref();
	let input = fs::read_to_string(path).map_err(|source| Error::Read {
		path: path.to_path_buf(),
		source,
	})?;
	pack_str(&input, options)
}
