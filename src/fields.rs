//! Splitting, joining and searching comma-delimited lines.
//!
//! Lines are handled as raw bytes so input in any ASCII-compatible encoding passes through
//! untouched. No quoting or escaping is understood: every comma is a field boundary, including
//! one inside what a human would read as a quoted value.

use anyhow::{ensure, Result};

use crate::types::ColumnIndex;

pub const DELIMITER: u8 = b',';

/// Count Fields
///
/// Number of fields in `line`, i.e. the number of delimiters plus one.
pub fn count_fields(line: &[u8]) -> usize {
	line.iter().filter(|&&b| b == DELIMITER).count() + 1
}

/// Column Index
///
/// Zero-based position of the first header field equal to `column`. Comparison is exact (no
/// trimming or case folding), so a later duplicate name is never returned. An empty header has
/// no fields and resolves nothing.
pub fn column_index(header: &[u8], column: &[u8]) -> Option<ColumnIndex> {
	if header.is_empty() {
		return None;
	}
	split_line(header).iter().position(|name| *name == column)
}

/// Split Line
///
/// Split `line` on the delimiter, keeping empty fields. A line without a delimiter yields a
/// single field, and a trailing delimiter yields an empty final field.
pub fn split_line(line: &[u8]) -> Vec<&[u8]> {
	line.split(|&b| b == DELIMITER).collect()
}

/// Build Line
///
/// Join `fields` with the delimiter and terminate the result with a single newline.
pub fn build_line<S: AsRef<[u8]>>(fields: &[S]) -> Result<Vec<u8>> {
	ensure!(!fields.is_empty(), "cannot build a line from zero fields");
	let mut line = Vec::new();
	for (i, field) in fields.iter().enumerate() {
		if i > 0 {
			line.push(DELIMITER);
		}
		line.extend_from_slice(field.as_ref());
	}
	line.push(b'\n');
	Ok(line)
}

/// Strip CR
///
/// Drop a trailing carriage return left over from a `\r\n` line ending.
pub fn strip_cr(mut line: Vec<u8>) -> Vec<u8> {
	if line.last() == Some(&b'\r') {
		line.pop();
	}
	line
}

#[cfg(test)]
mod test {
	use super::*;
	use rstest::*;

	#[rstest]
	#[case("name,age", "name", Some(0))]
	#[case("name,age", "age", Some(1))]
	#[case("name,age", "height", None)]
	#[case("name,age,name", "name", Some(0))]
	#[case("name,Age", "age", None)]
	#[case("name, age", "age", None)]
	#[case("a,,c", "", Some(1))]
	#[case("", "", None)]
	#[case("", "name", None)]
	fn resolves_first_exact_match(
		#[case] header: &str,
		#[case] column: &str,
		#[case] expected: Option<ColumnIndex>,
	) {
		assert_eq!(column_index(header.as_bytes(), column.as_bytes()), expected);
	}

	#[rstest]
	fn resolves_non_utf8_names() {
		assert_eq!(column_index(b"id,Stra\xdfe", b"Stra\xdfe"), Some(1));
	}

	#[rstest]
	#[case("a,,c", vec!["a", "", "c"])]
	#[case("abc", vec!["abc"])]
	#[case("a,b,", vec!["a", "b", ""])]
	#[case(",", vec!["", ""])]
	#[case("", vec![""])]
	#[case("\"x,y\",z", vec!["\"x", "y\"", "z"])]
	fn splits_keeping_empty_fields(#[case] line: &str, #[case] expected: Vec<&str>) {
		let expected: Vec<&[u8]> = expected.iter().map(|f| f.as_bytes()).collect();
		assert_eq!(split_line(line.as_bytes()), expected);
	}

	#[rstest]
	#[case("a,,c", 3)]
	#[case("abc", 1)]
	#[case("a,b,", 3)]
	fn field_count_agrees_with_split(#[case] line: &str, #[case] expected: usize) {
		assert_eq!(count_fields(line.as_bytes()), expected);
		assert_eq!(split_line(line.as_bytes()).len(), expected);
	}

	#[rstest]
	fn builds_line_with_single_newline() -> Result<()> {
		assert_eq!(build_line(&["ann", "99"])?, b"ann,99\n");
		assert_eq!(build_line(&["solo"])?, b"solo\n");
		assert_eq!(build_line(&["", ""])?, b",\n");
		Ok(())
	}

	#[rstest]
	fn building_from_no_fields_is_an_error() {
		let empty: [&[u8]; 0] = [];
		assert!(build_line(&empty).is_err());
	}

	#[rstest]
	#[case("name,age")]
	#[case("a,,c,")]
	#[case(",,")]
	fn rebuilding_a_split_line_keeps_its_fields(#[case] line: &str) -> Result<()> {
		let rebuilt = build_line(&split_line(line.as_bytes()))?;
		assert_eq!(rebuilt, format!("{}\n", line).into_bytes());
		Ok(())
	}

	#[rstest]
	#[case(b"a,b\r".to_vec(), b"a,b".to_vec())]
	#[case(b"a,b".to_vec(), b"a,b".to_vec())]
	#[case(b"\r\r".to_vec(), b"\r".to_vec())]
	fn strips_one_carriage_return(#[case] line: Vec<u8>, #[case] expected: Vec<u8>) {
		assert_eq!(strip_cr(line), expected);
	}
}
