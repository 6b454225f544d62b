//! Configuration file for the `pack` command
//!
//! ```toml
//! [output]
//! format = "json"
//! separator = ", "
//! empty = "none"
//!
//! [solver]
//! parallel = true
//! ```
//!
//! All keys are optional; command line flags take precedence over the file.

use std::{fs, path::Path};

use anyhow::Context;
use packer::{Format, Options};
use serde::Deserialize;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub output: OutputConfig,
	pub solver: SolverConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
	pub format: Format,
	pub separator: String,
	pub empty: String,
}

impl Default for OutputConfig {
	fn default() -> Self {
		let options = Options::default();
		Self {
			format: options.format,
			separator: options.separator,
			empty: options.empty,
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
	pub parallel: bool,
}

impl Config {
	pub fn load(path: &Path) -> anyhow::Result<Self> {
		let text = fs::read_to_string(path)
			.with_context(|| format!("can't read configuration from {}", path.display()))?;
		toml::from_str(&text)
			.with_context(|| format!("invalid configuration in {}", path.display()))
	}
}

impl From<Config> for Options {
	fn from(config: Config) -> Self {
		Options {
			format: config.output.format,
			separator: config.output.separator,
			empty: config.output.empty,
			parallel: config.solver.parallel,
		}
	}
}
