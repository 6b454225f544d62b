//! Rendering selections as lines of text or JSON

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::{selector::Selection, Error};

/// How each answer is written
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
	/// Chosen identifiers joined by a separator
	#[default]
	Text,
	/// A JSON object per line, including the cost and weight of the selection
	Json,
}

/// Settings controlling how records are solved and answers are written
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Options {
	pub format: Format,
	/// Text placed between identifiers in [`Format::Text`]
	pub separator: String,
	/// Text written in [`Format::Text`] when no item is chosen
	pub empty: String,
	/// Solve records on multiple threads
	pub parallel: bool,
}

impl Default for Options {
	fn default() -> Self {
		Self {
			format: Format::Text,
			separator: String::from(","),
			empty: String::from("-"),
			parallel: false,
		}
	}
}

/// Render a single selection according to `options`, without a line ending
pub fn render(selection: &Selection, options: &Options) -> Result<String, Error> {
	Ok(match options.format {
		Format::Text => selection.to_text(&options.separator, &options.empty),
		Format::Json => serde_json::to_string(selection)?,
	})
}

/// Render all selections, one per line
pub fn render_all<'a>(
	selections: impl IntoIterator<Item = &'a Selection>,
	options: &Options,
) -> Result<String, Error> {
	let mut out = String::new();
	for selection in selections {
		let line = render(selection, options)?;
		let _ = writeln!(out, "{line}");
	}
	Ok(out)
}
