//! # Reading records from text
//!
//! Every record starts on a line of the form
//!
//! ```text
//! 81 : (1,53.38,€45) (2,88.62,€98) (3,78.48,€3)
//! ```
//!
//! holding the capacity of the package before the colon, followed by whitespace
//! separated items `(identifier,weight,cost)`. The cost may carry a single
//! leading currency symbol. A line without a colon continues the item list of
//! the record above it.
//!
//! Reading is lenient: an item token that cannot be read is skipped, and a
//! record whose capacity cannot be read is dropped along with its items. Each
//! complete record is passed through [`validate`], so only records satisfying
//! the packing limits are returned.

use nom::{
	character::complete::{multispace0, space0},
	multi::many0,
	sequence::{delimited, preceded, terminated},
	IResult,
};
use tracing::{debug, debug_span};

use crate::{
	item::Item,
	record::{validate, Capacity, Record},
};

pub(crate) mod integer;
pub(crate) mod item;

use self::{
	integer::capacity,
	item::{items, Token},
};

/// Parser combinator that allows spaces and tabs around a parser rule
pub fn padded<'a, O>(
	p: impl FnMut(&'a str) -> IResult<&'a str, O>,
) -> impl FnMut(&'a str) -> IResult<&'a str, O> {
	delimited(space0, p, space0)
}

/// Parser combinator that repeatedly calls a parser consuming whitespace in
/// between when possible
pub fn sequence<'a, O>(
	p: impl FnMut(&'a str) -> IResult<&'a str, O>,
) -> impl FnMut(&'a str) -> IResult<&'a str, Vec<O>> {
	terminated(many0(preceded(multispace0, p)), multispace0)
}

/// Record whose lines are still being read
struct Pending {
	line: usize,
	capacity: Option<Capacity>,
	items: Vec<Item>,
}

impl Pending {
	fn push_items(&mut self, text: &str, line: usize) {
		for token in items(text) {
			match token {
				Token::Item(item) => self.items.push(item),
				Token::Malformed(text) => debug!(line, token = text, "skipping unreadable item"),
			}
		}
	}

	fn finish(self) -> Option<Record> {
		let _span = debug_span!("record", line = self.line).entered();
		let Some(capacity) = self.capacity else {
			debug!("dropping record: unreadable capacity");
			return None;
		};
		validate(capacity, self.items)
	}
}

/// Read all records from `input`, dropping the ones that are malformed or
/// exceed the packing limits.
pub fn parse_records(input: &str) -> Vec<Record> {
	let mut records = Vec::new();
	let mut pending: Option<Pending> = None;

	for (i, text) in input.lines().enumerate() {
		let line = i + 1;
		if text.trim().is_empty() {
			continue;
		}
		match text.split_once(':') {
			Some((cap, rest)) => {
				records.extend(pending.take().and_then(Pending::finish));
				let mut record = Pending {
					line,
					capacity: capacity(cap),
					items: Vec::new(),
				};
				record.push_items(rest, line);
				pending = Some(record);
			}
			None => match pending.as_mut() {
				Some(record) => record.push_items(text, line),
				None => debug!(line, "skipping items that do not belong to a record"),
			},
		}
	}
	records.extend(pending.and_then(Pending::finish));
	records
}
