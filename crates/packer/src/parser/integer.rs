use nom::{
	character::complete::{char, digit1},
	combinator::{all_consuming, map_res, opt, recognize},
	sequence::pair,
	IResult,
};

use super::padded;
use crate::record::Capacity;

/// Capacity written before the colon of a record line, or `None` when it is
/// not an integer
pub fn capacity(input: &str) -> Option<Capacity> {
	all_consuming(padded(int))(input).ok().map(|(_, c)| c)
}

pub fn int(input: &str) -> IResult<&str, Capacity> {
	map_res(recognize(pair(opt(char('-')), digit1)), str::parse)(input)
}
