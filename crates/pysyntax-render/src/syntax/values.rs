use tracing::trace;

use super::types::write_type;
use crate::error::{RenderError, Result};
use crate::model::{DefaultValueDesc, TypeRef, api};
use crate::writer::SyntaxWriter;

/// Python null literal.
pub const NONE_KEYWORD: &str = "None";

/// Write a default or constant value.
///
/// `enclosing` is the declared type of the parameter or field and qualifies enumeration members.
/// Default and `typeof` literals produce no text.
pub fn write_value<W: SyntaxWriter + ?Sized>(
	writer: &mut W,
	value: &DefaultValueDesc,
	enclosing: &TypeRef,
) -> Result<()> {
	match value {
		DefaultValueDesc::Null => writer.write_keyword(NONE_KEYWORD),
		DefaultValueDesc::Default | DefaultValueDesc::TypeLiteral => {}
		DefaultValueDesc::EnumMembers { names } => {
			let enum_type = unwrap_nullable(enclosing);
			for (index, name) in names.iter().enumerate() {
				if index > 0 {
					writer.write_string("|");
				}
				write_type(writer, enum_type)?;
				writer.write_string(".");
				writer.write_string(name);
			}
		}
		DefaultValueDesc::ScalarLiteral { ty, text } => match ty.as_str() {
			api::CHAR | api::STRING => {
				writer.write_string("\"");
				writer.write_string(text);
				writer.write_string("\"");
			}
			api::BOOLEAN => {
				let keyword = if parse_invariant_bool(text)? {
					"True"
				} else {
					"False"
				};
				writer.write_keyword(keyword);
			}
			api::SBYTE | api::BYTE | api::INT16 | api::UINT16 | api::INT32 | api::UINT32
			| api::INT64 | api::UINT64 | api::SINGLE | api::DOUBLE => writer.write_string(text),
			other => {
				trace!(ty = other, "no literal syntax for constant type");
				writer.write_string(value.kind_name());
			}
		},
	}
	Ok(())
}

/// The wrapped type of `Nullable[T]`; any other type unchanged.
fn unwrap_nullable(ty: &TypeRef) -> &TypeRef {
	match ty {
		TypeRef::Specialization { base, args } if base == api::NULLABLE && args.len() == 1 => {
			&args[0].ty
		}
		TypeRef::ReferenceTo { inner } => unwrap_nullable(inner),
		other => other,
	}
}

/// Parse a culture-invariant boolean: surrounding whitespace is ignored and case does not matter.
pub fn parse_invariant_bool(text: &str) -> Result<bool> {
	let trimmed = text.trim();
	if trimmed.eq_ignore_ascii_case("true") {
		Ok(true)
	} else if trimmed.eq_ignore_ascii_case("false") {
		Ok(false)
	} else {
		Err(RenderError::InvalidBoolean(text.to_string()))
	}
}
