//! Global type definitions.

use std::fmt;
use std::path::PathBuf;

/// Zero-based position of a column within a header or row.
pub type ColumnIndex = usize;

/// The four positional arguments of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
	pub input: PathBuf,
	pub column: Vec<u8>,
	pub value: Vec<u8>,
	pub output: PathBuf,
}

/// The first line of the input, with its line terminator removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
	pub line: Vec<u8>,
	// Every subsequent row must carry exactly this many fields
	pub field_count: usize,
}

/// How a run ended when nothing went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	Rewritten { rows: usize },
	EmptyInput,
	ColumnMissing,
}

/// Conditions that end a run early and are reported on the error stream.
#[derive(Debug)]
pub enum Failure {
	Usage { program: String },
	WrongInput { path: String },
	OpenInput,
	OpenOutput,
	/// `line` is the 1-based line number of the offending row.
	InsufficientData { line: usize },
}

impl Header {
	pub fn new(line: Vec<u8>) -> Self {
		let field_count = crate::fields::count_fields(&line);
		Self { line, field_count }
	}
}

impl Outcome {
	/// Informational message for the standard output, if this outcome has one.
	pub fn message(&self) -> Option<&'static str> {
		match self {
			Outcome::Rewritten { .. } => None,
			Outcome::EmptyInput => Some("input file missing"),
			Outcome::ColumnMissing => Some("column name doesn't exist in the input file"),
		}
	}
}

impl fmt::Display for Failure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Failure::Usage { program } => write!(
				f,
				"ERROR! usage: {} <input_file> <column> <new_value> <output_file>",
				program
			),
			Failure::WrongInput { path } => write!(f, "wrong input file, {}", path),
			Failure::OpenInput => write!(f, "couldn't open the specified file"),
			Failure::OpenOutput => write!(f, "can't open output file"),
			Failure::InsufficientData { .. } => write!(f, "insufficient data"),
		}
	}
}

impl std::error::Error for Failure {}
