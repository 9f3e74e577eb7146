use crate::error::Result;
use crate::model::MemberDesc;
use crate::writer::{MarkupWriter, PlainTextWriter, SyntaxWriter, Token, TokenWriter};

/// Configurable generator that writes Python declaration syntax for one member at a time.
///
/// The generator holds layout settings only; every call is independent and leaves no state behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxGenerator {
	/// Prefix written before each wrapped parameter.
	pub indent: String,
	/// Whether unsupported constructs produce a comment placeholder.
	pub emit_placeholders: bool,
}

impl Default for SyntaxGenerator {
	fn default() -> Self {
		Self::new()
	}
}

impl SyntaxGenerator {
	/// Create a generator with tab indentation and placeholders enabled.
	pub fn new() -> Self {
		Self {
			indent: "\t".to_string(),
			emit_placeholders: true,
		}
	}

	/// Indent wrapped parameters with `indent`.
	pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
		self.indent = indent.into();
		self
	}

	/// Indent wrapped parameters with `width` spaces.
	pub fn with_indent_width(self, width: usize) -> Self {
		self.with_indent(" ".repeat(width))
	}

	/// Emit or suppress placeholders for unsupported constructs.
	pub fn with_placeholders(mut self, emit_placeholders: bool) -> Self {
		self.emit_placeholders = emit_placeholders;
		self
	}

	/// Indent applied to wrapped parameters.
	pub fn indent(&self) -> &str {
		&self.indent
	}

	/// Whether unsupported constructs produce a placeholder.
	pub fn emits_placeholders(&self) -> bool {
		self.emit_placeholders
	}

	/// Write the declaration of `member` to `writer`.
	pub fn write_syntax<W: SyntaxWriter + ?Sized>(
		&self,
		member: &MemberDesc,
		writer: &mut W,
	) -> Result<()> {
		crate::items::write_member(self, member, writer)
	}

	/// Render the declaration as plain display text.
	pub fn render_plain(&self, member: &MemberDesc) -> Result<String> {
		let mut writer = PlainTextWriter::new();
		self.write_syntax(member, &mut writer)?;
		Ok(writer.into_string())
	}

	/// Render the declaration as presentation markup.
	pub fn render_markup(&self, member: &MemberDesc) -> Result<String> {
		let mut writer = MarkupWriter::new();
		self.write_syntax(member, &mut writer)?;
		Ok(writer.into_string())
	}

	/// Render the declaration as a token stream.
	pub fn render_tokens(&self, member: &MemberDesc) -> Result<Vec<Token>> {
		let mut writer = TokenWriter::new();
		self.write_syntax(member, &mut writer)?;
		Ok(writer.into_tokens())
	}
}
