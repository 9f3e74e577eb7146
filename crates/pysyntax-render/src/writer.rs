use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Trailing generic arity marker on reflection identifiers, e.g. the `` `2 `` in ``Dictionary`2``.
static ARITY_SUFFIX_REGEX: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"`+[0-9]+$").expect("valid arity suffix pattern"));

/// Append-only destination for rendered syntax tokens.
///
/// The renderer never reads back from a writer and assumes exclusive access for one render call.
pub trait SyntaxWriter {
	/// Write literal punctuation or whitespace.
	fn write_string(&mut self, text: &str);
	/// Write a language keyword.
	fn write_keyword(&mut self, keyword: &str);
	/// Write the name of the element being declared.
	fn write_identifier(&mut self, name: &str);
	/// Write a parameter name.
	fn write_parameter(&mut self, name: &str);
	/// Write a cross-reference to `api`, optionally shown as `display`.
	fn write_reference_link(&mut self, api: &str, display: Option<&str>);
	/// Start a new line.
	fn write_line(&mut self);
}

/// Natural display name for a reflection identifier.
///
/// Drops the member-id prefix (`T:`), the namespace, and any generic arity suffix.
pub fn display_name(api: &str) -> Cow<'_, str> {
	let unprefixed = match api.as_bytes() {
		[kind, b':', ..] if kind.is_ascii_alphabetic() => &api[2..],
		_ => api,
	};
	let simple = unprefixed.rsplit('.').next().unwrap_or(unprefixed);
	ARITY_SUFFIX_REGEX.replace(simple, "")
}

/// Writer producing the plain display text of the declaration.
#[derive(Debug, Default, Clone)]
pub struct PlainTextWriter {
	output: String,
}

impl PlainTextWriter {
	/// Create an empty writer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Text written so far.
	pub fn as_str(&self) -> &str {
		&self.output
	}

	/// Consume the writer and return its text.
	pub fn into_string(self) -> String {
		self.output
	}
}

impl SyntaxWriter for PlainTextWriter {
	fn write_string(&mut self, text: &str) {
		self.output.push_str(text);
	}

	fn write_keyword(&mut self, keyword: &str) {
		self.output.push_str(keyword);
	}

	fn write_identifier(&mut self, name: &str) {
		self.output.push_str(name);
	}

	fn write_parameter(&mut self, name: &str) {
		self.output.push_str(name);
	}

	fn write_reference_link(&mut self, api: &str, display: Option<&str>) {
		match display {
			Some(display) => self.output.push_str(display),
			None => self.output.push_str(&display_name(api)),
		}
	}

	fn write_line(&mut self) {
		self.output.push('\n');
	}
}

/// Writer producing presentation markup with keyword spans and reference links.
#[derive(Debug, Default, Clone)]
pub struct MarkupWriter {
	output: String,
}

impl MarkupWriter {
	/// Create an empty writer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Markup written so far.
	pub fn as_str(&self) -> &str {
		&self.output
	}

	/// Consume the writer and return its markup.
	pub fn into_string(self) -> String {
		self.output
	}

	fn span(&mut self, class: &str, text: &str) {
		self.output.push_str("<span class=\"");
		self.output.push_str(class);
		self.output.push_str("\">");
		self.output.push_str(&html_escape::encode_text(text));
		self.output.push_str("</span>");
	}
}

impl SyntaxWriter for MarkupWriter {
	fn write_string(&mut self, text: &str) {
		self.output.push_str(&html_escape::encode_text(text));
	}

	fn write_keyword(&mut self, keyword: &str) {
		self.span("keyword", keyword);
	}

	fn write_identifier(&mut self, name: &str) {
		self.span("identifier", name);
	}

	fn write_parameter(&mut self, name: &str) {
		self.span("parameter", name);
	}

	fn write_reference_link(&mut self, api: &str, display: Option<&str>) {
		self.output.push_str("<referenceLink target=\"");
		self.output
			.push_str(&html_escape::encode_double_quoted_attribute(api));
		self.output.push_str("\" prefer-overload=\"false\"");
		match display {
			Some(display) => {
				self.output.push('>');
				self.output.push_str(&html_escape::encode_text(display));
				self.output.push_str("</referenceLink>");
			}
			None => self.output.push_str(" />"),
		}
	}

	fn write_line(&mut self) {
		self.output.push('\n');
	}
}

/// A single emitted token, as recorded by [`TokenWriter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
	/// Literal text.
	Text(String),
	/// Keyword.
	Keyword(String),
	/// Declared name.
	Identifier(String),
	/// Parameter name.
	Parameter(String),
	/// Cross-reference.
	ReferenceLink {
		/// Link target.
		api: String,
		/// Display override.
		display: Option<String>,
	},
	/// Line break.
	LineBreak,
}

impl Token {
	/// Text a reader would see for this token.
	pub fn display_text(&self) -> Cow<'_, str> {
		match self {
			Self::Text(text) | Self::Keyword(text) | Self::Identifier(text) | Self::Parameter(text) => {
				Cow::Borrowed(text.as_str())
			}
			Self::ReferenceLink {
				display: Some(display),
				..
			} => Cow::Borrowed(display.as_str()),
			Self::ReferenceLink { api, display: None } => display_name(api),
			Self::LineBreak => Cow::Borrowed("\n"),
		}
	}
}

/// Writer that records the token stream for later processing.
#[derive(Debug, Default, Clone)]
pub struct TokenWriter {
	tokens: Vec<Token>,
}

impl TokenWriter {
	/// Create an empty writer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Tokens recorded so far.
	pub fn tokens(&self) -> &[Token] {
		&self.tokens
	}

	/// Consume the writer and return its tokens.
	pub fn into_tokens(self) -> Vec<Token> {
		self.tokens
	}

	/// Concatenated display text of the recorded tokens.
	pub fn display_text(&self) -> String {
		self.tokens.iter().map(Token::display_text).collect()
	}

	/// Every reference link recorded so far, as `(target, display override)` pairs.
	pub fn reference_links(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
		self.tokens.iter().filter_map(|token| match token {
			Token::ReferenceLink { api, display } => Some((api.as_str(), display.as_deref())),
			_ => None,
		})
	}
}

impl SyntaxWriter for TokenWriter {
	fn write_string(&mut self, text: &str) {
		self.tokens.push(Token::Text(text.to_string()));
	}

	fn write_keyword(&mut self, keyword: &str) {
		self.tokens.push(Token::Keyword(keyword.to_string()));
	}

	fn write_identifier(&mut self, name: &str) {
		self.tokens.push(Token::Identifier(name.to_string()));
	}

	fn write_parameter(&mut self, name: &str) {
		self.tokens.push(Token::Parameter(name.to_string()));
	}

	fn write_reference_link(&mut self, api: &str, display: Option<&str>) {
		self.tokens.push(Token::ReferenceLink {
			api: api.to_string(),
			display: display.map(str::to_string),
		});
	}

	fn write_line(&mut self) {
		self.tokens.push(Token::LineBreak);
	}
}
