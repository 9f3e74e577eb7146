//! Core library for pysyntax, the host-facing API for rendering Python declaration syntax.
//!
//! This crate wires the rendering engine to its inputs and outputs: it decodes member
//! descriptions supplied as JSON by a reflection-data layer, picks an output format, and exposes
//! the registration descriptor a documentation host uses to discover the generator.

use std::fs;
use std::path::Path;

pub use pysyntax_render::{MemberDesc, SyntaxGenerator};
use serde::Deserialize;
use tracing::debug;

pub use crate::error::{PySyntaxError, Result};
pub use crate::registry::{
	GeneratorDescriptor, GeneratorFactory, PYTHON_DESCRIPTOR, PythonGeneratorFactory, Registry,
};

/// Error helpers for the core API.
pub mod error;
/// Generator discovery and instantiation.
pub mod registry;


/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
	/// Plain display text (default).
	#[default]
	Plain,
	/// Presentation markup with keyword spans and reference links.
	Markup,
}

/// One member or a batch of members, as accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MemberInput {
	/// A single member description.
	One(MemberDesc),
	/// Several member descriptions rendered in order.
	Many(Vec<MemberDesc>),
}

impl MemberInput {
	/// Members in input order.
	pub fn into_members(self) -> Vec<MemberDesc> {
		match self {
			Self::One(member) => vec![member],
			Self::Many(members) => members,
		}
	}
}

/// PySyntax renders reflection-data member descriptions as Python declarations.
#[derive(Debug, Clone)]
pub struct PySyntax {
	/// Generator used for every render call.
	generator: SyntaxGenerator,

	/// Output format of the rendered declarations.
	format: OutputFormat,
}

impl Default for PySyntax {
	fn default() -> Self {
		Self::new()
	}
}

impl PySyntax {
	/// Creates a new instance with the default generator and plain-text output.
	pub fn new() -> Self {
		Self {
			generator: SyntaxGenerator::new(),
			format: OutputFormat::Plain,
		}
	}

	/// Replaces the generator, e.g. one created through the [`Registry`].
	pub fn with_generator(mut self, generator: SyntaxGenerator) -> Self {
		self.generator = generator;
		self
	}

	/// Selects the output format.
	pub fn with_format(mut self, format: OutputFormat) -> Self {
		self.format = format;
		self
	}

	/// Indents wrapped parameters with `width` spaces instead of a tab.
	pub fn with_indent_width(mut self, width: usize) -> Self {
		self.generator = self.generator.with_indent_width(width);
		self
	}

	/// Enables or disables placeholders for unsupported constructs.
	pub fn with_placeholders(mut self, emit_placeholders: bool) -> Self {
		self.generator = self.generator.with_placeholders(emit_placeholders);
		self
	}

	/// The generator used for rendering.
	pub fn generator(&self) -> &SyntaxGenerator {
		&self.generator
	}

	/// Decodes one member or an array of members from JSON.
	pub fn parse(json: &str) -> Result<Vec<MemberDesc>> {
		let input: MemberInput = serde_json::from_str(json)?;
		Ok(input.into_members())
	}

	/// Renders a single member in the configured format.
	pub fn render_member(&self, member: &MemberDesc) -> Result<String> {
		let rendered = match self.format {
			OutputFormat::Plain => self.generator.render_plain(member)?,
			OutputFormat::Markup => self.generator.render_markup(member)?,
		};
		Ok(rendered)
	}

	/// Renders every member, separating declarations with a blank line.
	pub fn render_members(&self, members: &[MemberDesc]) -> Result<String> {
		let rendered = members
			.iter()
			.map(|member| self.render_member(member))
			.collect::<Result<Vec<_>>>()?;
		Ok(rendered.join("\n\n"))
	}

	/// Decodes and renders a JSON member description (single member or array).
	pub fn render_json(&self, json: &str) -> Result<String> {
		let members = Self::parse(json)?;
		debug!(count = members.len(), "rendering members");
		self.render_members(&members)
	}

	/// Reads, decodes and renders a JSON member description file.
	pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String> {
		let path = path.as_ref();
		let json = fs::read_to_string(path).map_err(|source| PySyntaxError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		self.render_json(&json)
	}
}
