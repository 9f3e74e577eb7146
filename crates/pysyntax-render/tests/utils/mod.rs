//! Shared helpers for the declaration rendering integration tests.
#![allow(dead_code)]

use pretty_assertions::assert_eq;
use pysyntax_render::{MemberDesc, SyntaxGenerator};

/// Generator used by the `rt` and `idemp` cases: four-space parameter indent.
pub fn test_generator() -> SyntaxGenerator {
	SyntaxGenerator::new().with_indent_width(4)
}

/// Parse a JSON member description.
pub fn parse_member(input: &str) -> MemberDesc {
	serde_json::from_str(input).unwrap_or_else(|e| panic!("invalid member JSON: {e}\n{input}"))
}

/// Strip surrounding blank lines and the indentation shared by every non-empty line.
pub fn dedent(text: &str) -> String {
	let lines: Vec<&str> = text.lines().collect();
	let start = lines
		.iter()
		.position(|line| !line.trim().is_empty())
		.unwrap_or(lines.len());
	let end = lines
		.iter()
		.rposition(|line| !line.trim().is_empty())
		.map_or(start, |index| index + 1);
	let body = &lines[start..end];
	let common = body
		.iter()
		.filter(|line| !line.trim().is_empty())
		.map(|line| line.len() - line.trim_start().len())
		.min()
		.unwrap_or(0);
	body.iter()
		.map(|line| line.get(common..).unwrap_or(""))
		.collect::<Vec<_>>()
		.join("\n")
}

/// Render `input` with `generator` and compare against the dedented `expected` text.
pub fn render_and_compare(generator: &SyntaxGenerator, input: &str, expected: &str) {
	let member = parse_member(input);
	let rendered = generator
		.render_plain(&member)
		.unwrap_or_else(|e| panic!("render failed: {e}"));
	assert_eq!(rendered, dedent(expected));
}

/// Render `input` twice with fresh writers and require byte-identical output.
pub fn assert_idempotent(input: &str) {
	let member = parse_member(input);
	let generator = test_generator();
	let first = generator.render_markup(&member).expect("first render");
	let second = generator.render_markup(&member).expect("second render");
	assert_eq!(first, second);
	assert!(!first.is_empty(), "render produced no output");
}

/// Generate declaration tests.
///
/// - `rt { name: { input: json, output: text } }` renders and compares.
/// - `rt_custom { name: { generator: expr, input: json, output: text } }` does the same with a
///   custom generator.
/// - `idemp { name: json }` renders twice and compares the results.
macro_rules! gen_tests {
	($prefix:ident, { $($body:tt)* }) => {
		mod $prefix {
			#[allow(unused_imports)]
			use super::*;

			gen_tests!(@cases $($body)*);
		}
	};
	(@cases) => {};
	(@cases idemp { $name:ident: $input:expr } $($rest:tt)*) => {
		#[test]
		fn $name() {
			assert_idempotent($input);
		}

		gen_tests!(@cases $($rest)*);
	};
	(@cases rt { $name:ident: { input: $input:expr, output: $output:expr } } $($rest:tt)*) => {
		#[test]
		fn $name() {
			render_and_compare(&test_generator(), $input, $output);
		}

		gen_tests!(@cases $($rest)*);
	};
	(@cases rt_custom {
		$name:ident: { generator: $generator:expr, input: $input:expr, output: $output:expr }
	} $($rest:tt)*) => {
		#[test]
		fn $name() {
			render_and_compare(&$generator, $input, $output);
		}

		gen_tests!(@cases $($rest)*);
	};
}

pub(crate) use gen_tests;
