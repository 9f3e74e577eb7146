use tracing::debug;

use super::types::write_type;
use super::values::{NONE_KEYWORD, write_value};
use crate::error::{RenderError, Result};
use crate::model::{MemberDesc, ParameterDesc, TypeRef};
use crate::writer::SyntaxWriter;

/// Per-call knobs for [`write_signature`].
///
/// Constructors, property accessors and plain methods all go through the same routine and differ
/// only in these options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureOptions {
	/// Name written instead of the member's own name.
	pub name_override: Option<String>,
	/// Static-ness used instead of the member's declared flag.
	pub is_static_override: Option<bool>,
	/// Whether to write the `-> type` annotation.
	pub include_return_annotation: bool,
	/// Parameters written before the member's own, in order. Their output flag is ignored.
	pub leading_parameters: Vec<ParameterDesc>,
}

impl Default for SignatureOptions {
	fn default() -> Self {
		Self {
			name_override: None,
			is_static_override: None,
			include_return_annotation: true,
			leading_parameters: Vec::new(),
		}
	}
}

impl SignatureOptions {
	/// Options that render the member as declared.
	pub fn new() -> Self {
		Self::default()
	}

	/// Write `name` instead of the member's name.
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name_override = Some(name.into());
		self
	}

	/// Force the static-ness of the signature.
	pub fn with_static(mut self, is_static: bool) -> Self {
		self.is_static_override = Some(is_static);
		self
	}

	/// Include or omit the return annotation.
	pub fn with_return_annotation(mut self, include: bool) -> Self {
		self.include_return_annotation = include;
		self
	}

	/// Append a leading parameter.
	pub fn with_leading_parameter(mut self, parameter: ParameterDesc) -> Self {
		self.leading_parameters.push(parameter);
		self
	}
}

enum SignatureParameter<'a> {
	Receiver,
	Declared(&'a ParameterDesc),
}

/// Write `def name(params) -> annotation`, preceded by `@staticmethod` for static members.
///
/// Output parameters are left out of the parameter list and folded into the return annotation;
/// they are returned in declaration order. Parameters are laid out one per line, each prefixed by
/// `indent`, whenever there is at least one of them (including the implicit `self`).
pub fn write_signature<'m, W: SyntaxWriter + ?Sized>(
	writer: &mut W,
	member: &'m MemberDesc,
	options: &SignatureOptions,
	indent: &str,
) -> Result<Vec<&'m ParameterDesc>> {
	let name = options.name_override.as_deref().unwrap_or(member.name.as_str());
	if name.is_empty() {
		return Err(RenderError::MissingName("member"));
	}
	let is_static = options.is_static_override.unwrap_or(member.is_static);
	debug!(
		name,
		is_static,
		parameters = member.parameters.len(),
		"writing signature"
	);

	if is_static {
		writer.write_string("@");
		writer.write_keyword("staticmethod");
		writer.write_line();
	}
	writer.write_keyword("def");
	writer.write_string(" ");
	writer.write_identifier(name);
	writer.write_string("(");

	let (outputs, inputs): (Vec<&ParameterDesc>, Vec<&ParameterDesc>) =
		member.parameters.iter().partition(|param| param.is_output);

	let receiver = (!is_static).then_some(SignatureParameter::Receiver);
	let parameters: Vec<SignatureParameter> = receiver
		.into_iter()
		.chain(
			options
				.leading_parameters
				.iter()
				.map(SignatureParameter::Declared),
		)
		.chain(inputs.into_iter().map(SignatureParameter::Declared))
		.collect();

	for (index, parameter) in parameters.iter().enumerate() {
		if index > 0 {
			writer.write_string(",");
		}
		writer.write_line();
		writer.write_string(indent);
		match parameter {
			SignatureParameter::Receiver => writer.write_keyword("self"),
			SignatureParameter::Declared(param) => write_parameter(writer, param)?,
		}
	}
	if !parameters.is_empty() {
		writer.write_line();
	}
	writer.write_string(")");

	if options.include_return_annotation {
		writer.write_string(" -> ");
		if outputs.is_empty() {
			write_return_type(writer, member.return_type.as_ref())?;
		} else {
			writer.write_string("(");
			write_return_type(writer, member.return_type.as_ref())?;
			for output in &outputs {
				writer.write_string(", ");
				write_type(writer, &output.ty)?;
			}
			writer.write_string(")");
		}
	}

	Ok(outputs)
}

/// Write `name: type` with an optional `=default` suffix.
pub fn write_parameter<W: SyntaxWriter + ?Sized>(writer: &mut W, param: &ParameterDesc) -> Result<()> {
	if param.name.is_empty() {
		return Err(RenderError::MissingName("parameter"));
	}
	writer.write_parameter(&param.name);
	writer.write_string(": ");
	write_type(writer, &param.ty)?;
	if let Some(default) = &param.default {
		writer.write_string("=");
		write_value(writer, default, &param.ty)?;
	}
	Ok(())
}

fn write_return_type<W: SyntaxWriter + ?Sized>(writer: &mut W, ty: Option<&TypeRef>) -> Result<()> {
	match ty {
		Some(ty) => write_type(writer, ty),
		None => {
			writer.write_keyword(NONE_KEYWORD);
			Ok(())
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::model::{DefaultValueDesc, MemberKind, api};
	use crate::writer::PlainTextWriter;

	fn render(member: &MemberDesc, options: &SignatureOptions) -> (String, Vec<String>) {
		let mut writer = PlainTextWriter::new();
		let outputs = write_signature(&mut writer, member, options, "\t").expect("signature");
		let names = outputs.iter().map(|param| param.name.clone()).collect();
		(writer.into_string(), names)
	}

	fn method(name: &str) -> MemberDesc {
		MemberDesc::new(MemberKind::Method, name)
	}

	#[test]
	fn static_method_without_parameters_is_unwrapped() {
		let member = method("Now")
			.with_static(true)
			.with_return_type(TypeRef::named("T:System.DateTime"));
		let (text, outputs) = render(&member, &SignatureOptions::new());
		assert_eq!(text, "@staticmethod\ndef Now() -> DateTime");
		assert!(outputs.is_empty());
	}

	#[test]
	fn instance_method_wraps_for_implicit_self() {
		let member = method("GetHashCode").with_return_type(TypeRef::named(api::INT32));
		let (text, _) = render(&member, &SignatureOptions::new());
		assert_eq!(text, "def GetHashCode(\n\tself\n) -> int");
	}

	#[test]
	fn parameters_are_one_per_line_with_defaults() {
		let member = method("Open")
			.with_parameter(ParameterDesc::new("path", TypeRef::named(api::STRING)))
			.with_parameter(
				ParameterDesc::new("retries", TypeRef::named(api::INT32))
					.with_default(DefaultValueDesc::scalar(api::INT32, "3")),
			);
		let (text, _) = render(&member, &SignatureOptions::new());
		assert_eq!(
			text,
			"def Open(\n\tself,\n\tpath: String,\n\tretries: int=3\n) -> None"
		);
	}

	#[test]
	fn single_output_parameter_joins_return_tuple() {
		let member = method("TryGetValue")
			.with_parameter(ParameterDesc::new("key", TypeRef::template("TKey")))
			.with_parameter(
				ParameterDesc::new("value", TypeRef::reference_to(TypeRef::template("TValue")))
					.with_output(true),
			)
			.with_return_type(TypeRef::named(api::BOOLEAN));
		let (text, outputs) = render(&member, &SignatureOptions::new());
		assert_eq!(
			text,
			"def TryGetValue(\n\tself,\n\tkey: TKey\n) -> (bool, TValue)"
		);
		assert_eq!(outputs, vec!["value".to_string()]);
	}

	#[test]
	fn output_parameters_without_return_type_start_with_none() {
		let member = method("Deconstruct")
			.with_parameter(ParameterDesc::new("x", TypeRef::named(api::INT32)).with_output(true))
			.with_parameter(ParameterDesc::new("y", TypeRef::named(api::INT32)).with_output(true));
		let (text, outputs) = render(&member, &SignatureOptions::new());
		assert_eq!(text, "def Deconstruct(\n\tself\n) -> (None, int, int)");
		assert_eq!(outputs, vec!["x".to_string(), "y".to_string()]);
	}

	#[test]
	fn override_wins_over_declared_static_flag() {
		let member = method("Create").with_static(true);
		let options = SignatureOptions::new()
			.with_static(false)
			.with_return_annotation(false);
		let (text, _) = render(&member, &options);
		assert_eq!(text, "def Create(\n\tself\n)");
	}

	#[test]
	fn leading_parameters_precede_declared_ones() {
		let member = method("Item")
			.with_parameter(ParameterDesc::new("index", TypeRef::named(api::INT32)));
		let options = SignatureOptions::new()
			.with_name("item")
			.with_return_annotation(false)
			.with_leading_parameter(ParameterDesc::new("value", TypeRef::named(api::STRING)));
		let (text, _) = render(&member, &options);
		assert_eq!(
			text,
			"def item(\n\tself,\n\tvalue: String,\n\tindex: int\n)"
		);
	}

	#[test]
	fn outputs_are_returned_even_without_annotation() {
		let member = method("Read")
			.with_static(true)
			.with_parameter(ParameterDesc::new("count", TypeRef::named(api::INT32)).with_output(true));
		let options = SignatureOptions::new().with_return_annotation(false);
		let (text, outputs) = render(&member, &options);
		assert_eq!(text, "@staticmethod\ndef Read()");
		assert_eq!(outputs, vec!["count".to_string()]);
	}

	#[test]
	fn empty_names_are_rejected() {
		let mut writer = PlainTextWriter::new();
		let err = write_signature(&mut writer, &method(""), &SignatureOptions::new(), "\t")
			.unwrap_err();
		assert_eq!(err, RenderError::MissingName("member"));
	}
}
