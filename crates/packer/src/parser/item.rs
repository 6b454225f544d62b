use nom::{
	branch::alt,
	bytes::complete::is_not,
	character::complete::{char, digit1, multispace1, satisfy},
	combinator::{eof, map, map_res, opt, peek, verify},
	number::complete::double,
	sequence::{delimited, preceded, terminated, tuple},
	IResult,
};

use super::{padded, sequence};
use crate::item::{Cost, Item, ItemId};

/// Element of an item list
#[derive(Clone, Debug, PartialEq)]
pub enum Token<'a> {
	Item(Item),
	/// Whitespace delimited text that is not a well-formed item
	Malformed(&'a str),
}

/// Split an item list into its tokens
pub fn items(input: &str) -> Vec<Token<'_>> {
	sequence(token)(input).map_or_else(|_| Vec::new(), |(_, tokens)| tokens)
}

pub fn token(input: &str) -> IResult<&str, Token<'_>> {
	alt((
		map(terminated(item, peek(alt((multispace1, eof)))), Token::Item),
		map(is_not(" \t\r\n"), Token::Malformed),
	))(input)
}

/// An item written as `(identifier,weight,cost)`
pub fn item(input: &str) -> IResult<&str, Item> {
	map(
		delimited(
			char('('),
			tuple((
				terminated(padded(identifier), char(',')),
				terminated(padded(double), char(',')),
				padded(cost),
			)),
			char(')'),
		),
		|(id, weight, cost)| Item::new(id, weight, cost),
	)(input)
}

fn identifier(input: &str) -> IResult<&str, ItemId> {
	verify(map_res(digit1, str::parse), |id: &ItemId| *id > 0)(input)
}

/// A cost, optionally preceded by a single currency symbol (e.g. `€45`)
fn cost(input: &str) -> IResult<&str, Cost> {
	preceded(
		opt(satisfy(|c| {
			!c.is_ascii_digit() && !c.is_whitespace() && !matches!(c, '(' | ')' | ',' | '-' | '+')
		})),
		map_res(digit1, str::parse),
	)(input)
}
