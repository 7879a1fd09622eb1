//! Argument handling, input validation and file plumbing around `process::run`.

use std::ffi::{OsStr, OsString};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::process;
use crate::types::{Args, Failure, Outcome};

static CSV_EXTENSION: &str = "csv";

/// Parse Args
///
/// Expect exactly four positional arguments after the program name: input path, column name,
/// replacement value and output path. Anything else is a usage failure. Arguments need not be
/// valid Unicode: paths stay OS strings and the column name and value are kept as raw bytes.
pub fn parse_args<I: IntoIterator<Item = OsString>>(argv: I) -> Result<Args> {
	let argv: Vec<OsString> = argv.into_iter().collect();
	match argv.as_slice() {
		[_, input, column, value, output] => Ok(Args {
			input: input.into(),
			column: column.clone().into_encoded_bytes(),
			value: value.clone().into_encoded_bytes(),
			output: output.into(),
		}),
		_ => {
			let program = argv
				.first()
				.map(|program| program.to_string_lossy().into_owned())
				.unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
			bail!(Failure::Usage { program })
		}
	}
}

/// Run
///
/// Validate the input file, then rewrite the requested column into the output file. The output
/// is created (or truncated) only after the column has been found in the header.
pub fn run(args: &Args) -> Result<Outcome> {
	if !is_csv_file(&args.input) {
		bail!(Failure::WrongInput {
			path: args.input.display().to_string(),
		});
	}
	if is_empty(&args.input)? {
		log::debug!("'{}' has no content", args.input.display());
		return Ok(Outcome::EmptyInput);
	}
	let input = open_input(&args.input)?;
	process::run(BufReader::new(input), &args.column, &args.value, || {
		File::create(&args.output).context(Failure::OpenOutput)
	})
}

/// The path exists and its extension is exactly `csv` (case-sensitive).
fn is_csv_file(path: &Path) -> bool {
	path.exists() && path.extension() == Some(OsStr::new(CSV_EXTENSION))
}

fn is_empty(path: &Path) -> Result<bool> {
	let metadata = fs::metadata(path).context(Failure::OpenInput)?;
	Ok(metadata.is_file() && metadata.len() == 0)
}

fn open_input(path: &Path) -> Result<File> {
	let file = File::open(path).context(Failure::OpenInput)?;
	if file.metadata().context(Failure::OpenInput)?.is_dir() {
		bail!(Failure::OpenInput);
	}
	Ok(file)
}
