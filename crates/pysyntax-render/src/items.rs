use tracing::debug;

use crate::core::SyntaxGenerator;
use crate::error::{RenderError, Result};
use crate::model::{MemberDesc, MemberKind, ParameterDesc, TypeRef, api};
use crate::syntax::{SignatureOptions, write_signature, write_type, write_value};
use crate::writer::SyntaxWriter;

/// Write the declaration of any member, dispatching on its kind.
pub fn write_member<W: SyntaxWriter + ?Sized>(
	generator: &SyntaxGenerator,
	member: &MemberDesc,
	writer: &mut W,
) -> Result<()> {
	debug!(kind = member.kind.label(), name = %member.name, "writing declaration");
	match member.kind {
		MemberKind::Namespace => write_namespace(member, writer),
		MemberKind::Class | MemberKind::Structure => write_class(member, writer),
		MemberKind::Enumeration => write_enumeration(member, writer),
		MemberKind::Constructor => write_constructor(generator, member, writer),
		MemberKind::Method => write_method(generator, member, writer),
		MemberKind::Property => write_property(generator, member, writer),
		MemberKind::Field => write_field(member, writer),
		MemberKind::Interface | MemberKind::Delegate | MemberKind::Event => {
			write_unsupported(generator, member.kind, writer);
			Ok(())
		}
	}
}

/// `import Name`.
pub fn write_namespace<W: SyntaxWriter + ?Sized>(member: &MemberDesc, writer: &mut W) -> Result<()> {
	let name = require_name(member)?;
	writer.write_keyword("import");
	writer.write_string(" ");
	writer.write_identifier(name);
	Ok(())
}

/// `class Name` followed by the base types, if any.
pub fn write_class<W: SyntaxWriter + ?Sized>(member: &MemberDesc, writer: &mut W) -> Result<()> {
	write_class_header(member, writer)?;
	if !member.base_types.is_empty() {
		writer.write_string("(");
		for (index, base) in member.base_types.iter().enumerate() {
			if index > 0 {
				writer.write_string(", ");
			}
			write_type(writer, base)?;
		}
		writer.write_string(")");
	}
	Ok(())
}

/// `class Name(Enum)`.
pub fn write_enumeration<W: SyntaxWriter + ?Sized>(
	member: &MemberDesc,
	writer: &mut W,
) -> Result<()> {
	write_class_header(member, writer)?;
	writer.write_string("(");
	writer.write_reference_link(api::ENUM, None);
	writer.write_string(")");
	Ok(())
}

/// `def __init__(self, ...)`, never static and without a return annotation.
pub fn write_constructor<W: SyntaxWriter + ?Sized>(
	generator: &SyntaxGenerator,
	member: &MemberDesc,
	writer: &mut W,
) -> Result<()> {
	let options = SignatureOptions::new()
		.with_name("__init__")
		.with_static(false)
		.with_return_annotation(false);
	write_signature(writer, member, &options, generator.indent())?;
	Ok(())
}

/// A method signature as declared.
pub fn write_method<W: SyntaxWriter + ?Sized>(
	generator: &SyntaxGenerator,
	member: &MemberDesc,
	writer: &mut W,
) -> Result<()> {
	write_signature(writer, member, &SignatureOptions::new(), generator.indent())?;
	Ok(())
}

/// A `@property` getter block and/or a `@name.setter` block.
pub fn write_property<W: SyntaxWriter + ?Sized>(
	generator: &SyntaxGenerator,
	member: &MemberDesc,
	writer: &mut W,
) -> Result<()> {
	let name = require_name(member)?;
	let accessors = member.accessors;

	if accessors.getter {
		writer.write_string("@");
		writer.write_keyword("property");
		writer.write_line();
		let options = SignatureOptions::new().with_static(false);
		write_signature(writer, member, &options, generator.indent())?;
	}

	if accessors.setter {
		let ty = member
			.return_type
			.clone()
			.ok_or(RenderError::MissingTypeIdentity("property"))?;
		if accessors.getter {
			writer.write_line();
			writer.write_line();
		}
		writer.write_string("@");
		writer.write_identifier(name);
		writer.write_string(".");
		writer.write_keyword("setter");
		writer.write_line();
		let options = SignatureOptions::new()
			.with_static(false)
			.with_return_annotation(false)
			.with_leading_parameter(ParameterDesc::new("value", ty));
		write_signature(writer, member, &options, generator.indent())?;
	}
	Ok(())
}

/// `name: Type`, with ` = literal` for constants.
pub fn write_field<W: SyntaxWriter + ?Sized>(member: &MemberDesc, writer: &mut W) -> Result<()> {
	let name = require_name(member)?;
	let ty: &TypeRef = member
		.return_type
		.as_ref()
		.ok_or(RenderError::MissingTypeIdentity("field"))?;
	writer.write_identifier(name);
	writer.write_string(": ");
	write_type(writer, ty)?;
	if let Some(value) = member.value.as_ref().filter(|value| value.renders_text()) {
		writer.write_string(" = ");
		write_value(writer, value, ty)?;
	}
	Ok(())
}

/// Comment placeholder for constructs Python has no syntax for.
pub fn write_unsupported<W: SyntaxWriter + ?Sized>(
	generator: &SyntaxGenerator,
	kind: MemberKind,
	writer: &mut W,
) {
	if !generator.emits_placeholders() {
		return;
	}
	writer.write_string(&format!(
		"# Python has no {} declaration syntax",
		kind.label()
	));
}

fn write_class_header<W: SyntaxWriter + ?Sized>(member: &MemberDesc, writer: &mut W) -> Result<()> {
	let name = require_name(member)?;
	writer.write_keyword("class");
	writer.write_string(" ");
	writer.write_identifier(name);
	Ok(())
}

fn require_name(member: &MemberDesc) -> Result<&str> {
	if member.name.is_empty() {
		Err(RenderError::MissingName(member.kind.label()))
	} else {
		Ok(&member.name)
	}
}
