use std::{io, path::PathBuf};

/// Errors that prevent packer from producing its answers.
///
/// Problems with the content of the input are never errors: malformed records
/// and items are dropped instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The input file could not be read
	#[error("can't read from path {}", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	/// The input stream could not be read
	#[error("can't read input")]
	Input(#[source] io::Error),
	/// An answer could not be serialized
	#[error("can't serialize answer")]
	Json(#[from] serde_json::Error),
}
