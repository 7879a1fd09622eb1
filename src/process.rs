//! Header resolution and row rewriting over generic readers and writers.

use std::io::{self, BufRead, BufWriter, Write};

use anyhow::Result;

use crate::fields;
use crate::types::{ColumnIndex, Failure, Header, Outcome};

/// Run
///
/// Read the header from `input` (trait bound `std::io::BufRead`), resolve `column` and rewrite
/// every following row with `value` in that column. `open_output` is only called once the column
/// is known to exist, so a missing column never creates or truncates the output.
///
/// Lines are read as bytes; a `\n` or `\r\n` terminator is removed and nothing else about the
/// encoding is assumed. A row with the wrong number of fields stops the run with
/// `Failure::InsufficientData`. Rows written before it are flushed and stay in the output.
pub fn run<R, W, F>(input: R, column: &[u8], value: &[u8], open_output: F) -> Result<Outcome>
where
	R: BufRead,
	W: Write,
	F: FnOnce() -> Result<W>,
{
	let mut lines = input.split(b'\n').map(|line| line.map(fields::strip_cr));
	let header = match lines.next() {
		Some(line) => Header::new(line?),
		None => return Ok(Outcome::EmptyInput),
	};
	log::debug!("Header has {} fields", header.field_count);

	let column_name = String::from_utf8_lossy(column);
	let index = match fields::column_index(&header.line, column) {
		Some(index) => index,
		None => {
			log::debug!("No column named '{}'", column_name);
			return Ok(Outcome::ColumnMissing);
		}
	};
	log::debug!("Column '{}' is at index {}", column_name, index);

	let output = open_output()?;
	let rows = rewrite_rows(lines, &header, index, value, output)?;
	log::info!("Rewrote {} rows", rows);
	Ok(Outcome::Rewritten { rows })
}

/// Rewrite Rows
///
/// Write the header followed by each row of `lines` with field `index` replaced by `value`. The
/// output is flushed whether or not every row made it through.
fn rewrite_rows<I, W>(
	lines: I,
	header: &Header,
	index: ColumnIndex,
	value: &[u8],
	output: W,
) -> Result<usize>
where
	I: Iterator<Item = io::Result<Vec<u8>>>,
	W: Write,
{
	let mut buffered = BufWriter::new(output);
	let result = write_rows(lines, header, index, value, &mut buffered);
	let flushed = buffered.flush();
	let rows = result?;
	flushed?;
	Ok(rows)
}

fn write_rows<I, W>(
	lines: I,
	header: &Header,
	index: ColumnIndex,
	value: &[u8],
	wtr: &mut W,
) -> Result<usize>
where
	I: Iterator<Item = io::Result<Vec<u8>>>,
	W: Write,
{
	wtr.write_all(&header.line)?;
	writeln!(wtr)?;
	let mut rows = 0;
	for (offset, line) in lines.enumerate() {
		let line = line?;
		// Header is line 1
		let line_number = offset + 2;
		let count = fields::count_fields(&line);
		if count != header.field_count {
			log::warn!(
				"Line {} has {} fields, header has {}",
				line_number,
				count,
				header.field_count
			);
			return Err(Failure::InsufficientData { line: line_number }.into());
		}
		let mut row = fields::split_line(&line);
		row[index] = value;
		let rebuilt = fields::build_line(&row)?;
		log::debug!("{}", String::from_utf8_lossy(&rebuilt).trim_end());
		wtr.write_all(&rebuilt)?;
		rows += 1;
	}
	Ok(rows)
}
