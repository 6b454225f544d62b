//! `pack`: choose the most valuable items that fit in each package
//!
//! Reads packages from a file (or standard input when the path is `-`), one
//! per line, and writes the identifiers of the chosen items for each package
//! that satisfies the packing limits.

use std::{
	io::{self, Write},
	path::{Path, PathBuf},
	process::ExitCode,
};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use packer::{Format, Options};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod config;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "pack", version, about)]
struct Cli {
	/// File containing one package per line, or `-` to read standard input
	path: PathBuf,

	/// TOML configuration file
	#[arg(short, long, env = "PACKER_CONFIG")]
	config: Option<PathBuf>,

	/// How answers are written
	#[arg(long, value_enum)]
	format: Option<FormatArg>,

	/// Text placed between chosen identifiers
	#[arg(long)]
	separator: Option<String>,

	/// Text written when no item fits in a package
	#[arg(long)]
	empty: Option<String>,

	/// Solve packages on multiple threads
	#[arg(long)]
	parallel: bool,

	/// Enable debug logging
	#[arg(short, long)]
	verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
	Text,
	Json,
}

impl From<FormatArg> for Format {
	fn from(arg: FormatArg) -> Self {
		match arg {
			FormatArg::Text => Format::Text,
			FormatArg::Json => Format::Json,
		}
	}
}

impl Cli {
	/// Options from the configuration file, overridden by command line flags
	fn options(&self) -> anyhow::Result<Options> {
		let config = match &self.config {
			Some(path) => Config::load(path)?,
			None => Config::default(),
		};
		let mut options = Options::from(config);
		if let Some(format) = self.format {
			options.format = format.into();
		}
		if let Some(separator) = &self.separator {
			options.separator.clone_from(separator);
		}
		if let Some(empty) = &self.empty {
			options.empty.clone_from(empty);
		}
		options.parallel |= self.parallel;
		Ok(options)
	}
}

fn run(cli: &Cli) -> anyhow::Result<()> {
	let options = cli.options()?;
	debug!(?options, path = %cli.path.display(), "packing");

	let output = if cli.path == Path::new("-") {
		packer::pack_reader(io::stdin().lock(), &options)?
	} else {
		packer::pack_file(&cli.path, &options)?
	};

	let mut stdout = io::stdout().lock();
	stdout
		.write_all(output.as_bytes())
		.and_then(|()| stdout.flush())
		.context("can't write answers")
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	let filter = if cli.verbose { "debug" } else { "warn" };
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
		.with_writer(io::stderr)
		.with_target(false)
		.init();

	match run(&cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("{err:#}");
			ExitCode::FAILURE
		}
	}
}
