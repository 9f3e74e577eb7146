use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::trace;

use crate::error::{RenderError, Result};
use crate::model::{TemplateModifier, TypeArgument, TypeRef, api};
use crate::writer::SyntaxWriter;

/// Built-in scalar types and the Python names they are displayed as.
pub const SCALAR_DISPLAY_NAMES: &[(&str, &str)] = &[
	(api::CHAR, "str"),
	(api::SBYTE, "int"),
	(api::BYTE, "int"),
	(api::INT16, "int"),
	(api::UINT16, "int"),
	(api::INT32, "int"),
	(api::UINT32, "int"),
	(api::INT64, "int"),
	(api::UINT64, "int"),
	(api::SINGLE, "float"),
	(api::DOUBLE, "float"),
	(api::DECIMAL, "Decimal"),
	(api::BOOLEAN, "bool"),
];

/// Identifier prefixes of the built-in fixed-size tuple family.
pub const TUPLE_FAMILY_PREFIXES: &[&str] = &["T:System.ValueTuple`"];

static SCALAR_DISPLAY_TABLE: Lazy<HashMap<&'static str, &'static str>> =
	Lazy::new(|| SCALAR_DISPLAY_NAMES.iter().copied().collect());

/// Python display name for a built-in scalar identifier.
pub fn scalar_display_name(api: &str) -> Option<&'static str> {
	SCALAR_DISPLAY_TABLE.get(api).copied()
}

/// Whether `api` names a member of the tuple family.
pub fn is_tuple_family(api: &str) -> bool {
	TUPLE_FAMILY_PREFIXES
		.iter()
		.any(|prefix| api.starts_with(prefix))
}

/// Write a type expression.
pub fn write_type<W: SyntaxWriter + ?Sized>(writer: &mut W, ty: &TypeRef) -> Result<()> {
	match ty {
		TypeRef::Named { api } => write_named_type(writer, api),
		TypeRef::Array { element, rank } => {
			open_arrays(writer, *rank);
			write_type(writer, element)?;
			close_arrays(writer, *rank);
			Ok(())
		}
		TypeRef::Specialization { base, args } => {
			if base.is_empty() {
				return Err(RenderError::MissingTypeIdentity("specialization"));
			}
			if is_tuple_family(base) {
				write_tuple(writer, args)
			} else {
				write_named_type(writer, base)?;
				writer.write_string("[");
				write_type_arguments(writer, args)?;
				writer.write_string("]");
				Ok(())
			}
		}
		TypeRef::Template { name, modifiers } => write_template(writer, name, modifiers),
		TypeRef::ReferenceTo { inner } => write_type(writer, inner),
	}
}

/// Write a cross-reference to a named type, using the scalar display name when there is one.
pub fn write_named_type<W: SyntaxWriter + ?Sized>(writer: &mut W, api: &str) -> Result<()> {
	if api.is_empty() {
		return Err(RenderError::MissingTypeIdentity("named"));
	}
	let shown = scalar_display_name(api);
	trace!(api, ?shown, "resolved named type");
	writer.write_reference_link(api, shown);
	Ok(())
}

fn write_type_arguments<W: SyntaxWriter + ?Sized>(
	writer: &mut W,
	args: &[TypeArgument],
) -> Result<()> {
	for (index, arg) in args.iter().enumerate() {
		if index > 0 {
			writer.write_string(", ");
		}
		write_type(writer, &arg.ty)?;
	}
	Ok(())
}

fn write_tuple<W: SyntaxWriter + ?Sized>(writer: &mut W, args: &[TypeArgument]) -> Result<()> {
	writer.write_string("(");
	for (index, arg) in args.iter().enumerate() {
		if index > 0 {
			writer.write_string(", ");
		}
		write_type(writer, &arg.ty)?;
		if let Some(name) = &arg.element_name {
			writer.write_string(" ");
			writer.write_string(name);
		}
	}
	writer.write_string(")");
	Ok(())
}

fn write_template<W: SyntaxWriter + ?Sized>(
	writer: &mut W,
	name: &str,
	modifiers: &[TemplateModifier],
) -> Result<()> {
	if name.is_empty() {
		return Err(RenderError::MissingTypeIdentity("template"));
	}
	for modifier in modifiers {
		if let TemplateModifier::Array { rank } = modifier {
			open_arrays(writer, *rank);
		}
	}
	writer.write_string(name);
	for modifier in modifiers.iter().rev() {
		if let TemplateModifier::Array { rank } = modifier {
			close_arrays(writer, *rank);
		}
	}
	Ok(())
}

fn open_arrays<W: SyntaxWriter + ?Sized>(writer: &mut W, rank: usize) {
	for _ in 0..rank {
		writer.write_reference_link(api::ARRAY, None);
		writer.write_string("[");
	}
}

fn close_arrays<W: SyntaxWriter + ?Sized>(writer: &mut W, rank: usize) {
	for _ in 0..rank {
		writer.write_string("]");
	}
}
