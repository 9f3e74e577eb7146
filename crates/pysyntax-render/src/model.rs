//! Value types describing one API element as supplied by the reflection-data layer.
//!
//! Every type here is an immutable tree for the duration of a render call. The serde derives let a
//! host hand the tree over as JSON; variants are internally tagged on `"kind"`.

use serde::{Deserialize, Serialize};

/// Well-known reflection-data identifiers used by the renderer.
pub mod api {
	/// `System.Array`, the link target for every array level.
	pub const ARRAY: &str = "T:System.Array";
	/// `System.Enum`, the implicit base of enumerations.
	pub const ENUM: &str = "T:System.Enum";
	/// `System.Char`.
	pub const CHAR: &str = "T:System.Char";
	/// `System.String`.
	pub const STRING: &str = "T:System.String";
	/// `System.Boolean`.
	pub const BOOLEAN: &str = "T:System.Boolean";
	/// `System.SByte`.
	pub const SBYTE: &str = "T:System.SByte";
	/// `System.Byte`.
	pub const BYTE: &str = "T:System.Byte";
	/// `System.Int16`.
	pub const INT16: &str = "T:System.Int16";
	/// `System.UInt16`.
	pub const UINT16: &str = "T:System.UInt16";
	/// `System.Int32`.
	pub const INT32: &str = "T:System.Int32";
	/// `System.UInt32`.
	pub const UINT32: &str = "T:System.UInt32";
	/// `System.Int64`.
	pub const INT64: &str = "T:System.Int64";
	/// `System.UInt64`.
	pub const UINT64: &str = "T:System.UInt64";
	/// `System.Single`.
	pub const SINGLE: &str = "T:System.Single";
	/// `System.Double`.
	pub const DOUBLE: &str = "T:System.Double";
	/// `System.Decimal`.
	pub const DECIMAL: &str = "T:System.Decimal";
	/// `System.Nullable<T>`, the wrapper of optional value types.
	pub const NULLABLE: &str = "T:System.Nullable`1";
}

/// A possibly composite type expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TypeRef {
	/// `rank`-dimensional array of `element`.
	Array {
		/// Element type.
		element: Box<TypeRef>,
		/// Number of dimensions, taken verbatim from the source.
		rank: usize,
	},
	/// Generic type instantiated with arguments.
	Specialization {
		/// Identifier of the generic definition.
		base: String,
		/// Type arguments in declaration order.
		args: Vec<TypeArgument>,
	},
	/// Generic parameter placeholder, never translated.
	Template {
		/// Parameter name as declared.
		name: String,
		/// Wrappers applied to the placeholder, outermost first.
		#[serde(default, skip_serializing_if = "Vec::is_empty")]
		modifiers: Vec<TemplateModifier>,
	},
	/// By-reference or pointer wrapper; has no surface syntax.
	ReferenceTo {
		/// Wrapped type.
		inner: Box<TypeRef>,
	},
	/// A concrete type identified by its API id.
	Named {
		/// Reflection-data identifier, such as `T:System.Int32`.
		api: String,
	},
}

impl TypeRef {
	/// Shorthand for a named type.
	pub fn named(api: impl Into<String>) -> Self {
		Self::Named { api: api.into() }
	}

	/// Shorthand for an array of `element`.
	pub fn array(element: TypeRef, rank: usize) -> Self {
		Self::Array {
			element: Box::new(element),
			rank,
		}
	}

	/// Shorthand for a specialization without tuple element names.
	pub fn specialization(base: impl Into<String>, args: impl IntoIterator<Item = TypeRef>) -> Self {
		Self::Specialization {
			base: base.into(),
			args: args.into_iter().map(TypeArgument::new).collect(),
		}
	}

	/// Shorthand for an unmodified template parameter.
	pub fn template(name: impl Into<String>) -> Self {
		Self::Template {
			name: name.into(),
			modifiers: Vec::new(),
		}
	}

	/// Shorthand for a reference wrapper.
	pub fn reference_to(inner: TypeRef) -> Self {
		Self::ReferenceTo {
			inner: Box::new(inner),
		}
	}
}

/// One argument of a [`TypeRef::Specialization`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeArgument {
	/// Argument type.
	#[serde(rename = "type")]
	pub ty: TypeRef,
	/// Tuple element name, if the argument is a named tuple element.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub element_name: Option<String>,
}

impl TypeArgument {
	/// Unnamed argument.
	pub fn new(ty: TypeRef) -> Self {
		Self {
			ty,
			element_name: None,
		}
	}

	/// Argument carrying a tuple element name.
	pub fn named(ty: TypeRef, element_name: impl Into<String>) -> Self {
		Self {
			ty,
			element_name: Some(element_name.into()),
		}
	}
}

/// Wrapper found on a template parameter node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TemplateModifier {
	/// Array of the placeholder.
	Array {
		/// Number of dimensions.
		rank: usize,
	},
	/// Reference to the placeholder.
	Reference,
}

/// Encoded constant or default value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DefaultValueDesc {
	/// The null literal.
	Null,
	/// `default(T)`.
	Default,
	/// A `typeof` literal.
	TypeLiteral,
	/// One or more enumeration members, combined with bitwise or.
	EnumMembers {
		/// Member names in order; never empty.
		names: Vec<String>,
	},
	/// A primitive constant.
	ScalarLiteral {
		/// Declared type identifier of the constant.
		#[serde(rename = "type")]
		ty: String,
		/// Culture-invariant text of the constant.
		text: String,
	},
}

impl DefaultValueDesc {
	/// Name of the node kind as it appears in reflection data.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Self::Null => "nullValue",
			Self::Default => "defaultValue",
			Self::TypeLiteral => "typeValue",
			Self::EnumMembers { .. } => "enumValue",
			Self::ScalarLiteral { .. } => "value",
		}
	}

	/// Whether the value produces any text when written.
	pub fn renders_text(&self) -> bool {
		!matches!(self, Self::Default | Self::TypeLiteral)
	}

	/// Shorthand for a scalar literal.
	pub fn scalar(ty: impl Into<String>, text: impl Into<String>) -> Self {
		Self::ScalarLiteral {
			ty: ty.into(),
			text: text.into(),
		}
	}
}

/// A single declared parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDesc {
	/// Parameter name, unique within its list.
	pub name: String,
	/// Declared type.
	#[serde(rename = "type")]
	pub ty: TypeRef,
	/// Optional default value.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub default: Option<DefaultValueDesc>,
	/// Whether the parameter carries a result out of the call.
	#[serde(default)]
	pub is_output: bool,
}

impl ParameterDesc {
	/// Plain input parameter without a default.
	pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
		Self {
			name: name.into(),
			ty,
			default: None,
			is_output: false,
		}
	}

	/// Attach a default value.
	pub fn with_default(mut self, default: DefaultValueDesc) -> Self {
		self.default = Some(default);
		self
	}

	/// Mark the parameter as an output parameter.
	pub fn with_output(mut self, is_output: bool) -> Self {
		self.is_output = is_output;
		self
	}
}

/// Kind of API element being described.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MemberKind {
	/// Namespace.
	Namespace,
	/// Reference type.
	Class,
	/// Value type.
	Structure,
	/// Interface.
	Interface,
	/// Enumeration.
	Enumeration,
	/// Delegate type.
	Delegate,
	/// Instance constructor.
	Constructor,
	/// Method.
	Method,
	/// Property or indexer.
	Property,
	/// Field or constant.
	Field,
	/// Event.
	Event,
}

impl MemberKind {
	/// Lowercase label used in placeholders and log output.
	pub fn label(self) -> &'static str {
		match self {
			Self::Namespace => "namespace",
			Self::Class => "class",
			Self::Structure => "structure",
			Self::Interface => "interface",
			Self::Enumeration => "enumeration",
			Self::Delegate => "delegate",
			Self::Constructor => "constructor",
			Self::Method => "method",
			Self::Property => "property",
			Self::Field => "field",
			Self::Event => "event",
		}
	}
}

/// Accessors present on a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyAccessors {
	/// Whether the property can be read.
	#[serde(default = "default_true")]
	pub getter: bool,
	/// Whether the property can be written.
	#[serde(default)]
	pub setter: bool,
}

impl Default for PropertyAccessors {
	fn default() -> Self {
		Self {
			getter: true,
			setter: false,
		}
	}
}

fn default_true() -> bool {
	true
}

/// One API element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDesc {
	/// Kind of element.
	pub kind: MemberKind,
	/// Simple name.
	pub name: String,
	/// Declared static flag.
	#[serde(default)]
	pub is_static: bool,
	/// Parameters in declaration order.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub parameters: Vec<ParameterDesc>,
	/// Return type for callables, or the value type of properties and fields.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub return_type: Option<TypeRef>,
	/// Base class and implemented interfaces of a type declaration.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub base_types: Vec<TypeRef>,
	/// Property accessors; ignored for other kinds.
	#[serde(default)]
	pub accessors: PropertyAccessors,
	/// Literal value of a constant field.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub value: Option<DefaultValueDesc>,
}

impl MemberDesc {
	/// Bare member of the given kind.
	pub fn new(kind: MemberKind, name: impl Into<String>) -> Self {
		Self {
			kind,
			name: name.into(),
			is_static: false,
			parameters: Vec::new(),
			return_type: None,
			base_types: Vec::new(),
			accessors: PropertyAccessors::default(),
			value: None,
		}
	}

	/// Set the declared static flag.
	pub fn with_static(mut self, is_static: bool) -> Self {
		self.is_static = is_static;
		self
	}

	/// Append a parameter.
	pub fn with_parameter(mut self, parameter: ParameterDesc) -> Self {
		self.parameters.push(parameter);
		self
	}

	/// Set the return (or value) type.
	pub fn with_return_type(mut self, ty: TypeRef) -> Self {
		self.return_type = Some(ty);
		self
	}

	/// Append a base type.
	pub fn with_base_type(mut self, ty: TypeRef) -> Self {
		self.base_types.push(ty);
		self
	}

	/// Set property accessors.
	pub fn with_accessors(mut self, getter: bool, setter: bool) -> Self {
		self.accessors = PropertyAccessors { getter, setter };
		self
	}

	/// Set the constant value of a field.
	pub fn with_value(mut self, value: DefaultValueDesc) -> Self {
		self.value = Some(value);
		self
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn member_deserializes_from_host_json() {
		let json = r#"{
			"kind": "method",
			"name": "TryParse",
			"isStatic": true,
			"parameters": [
				{ "name": "s", "type": { "kind": "named", "api": "T:System.String" } },
				{
					"name": "result",
					"type": { "kind": "referenceTo", "inner": { "kind": "named", "api": "T:System.Int32" } },
					"isOutput": true
				}
			],
			"returnType": { "kind": "named", "api": "T:System.Boolean" }
		}"#;
		let member: MemberDesc = serde_json::from_str(json).expect("valid member");
		let expected = MemberDesc::new(MemberKind::Method, "TryParse")
			.with_static(true)
			.with_parameter(ParameterDesc::new("s", TypeRef::named(api::STRING)))
			.with_parameter(
				ParameterDesc::new("result", TypeRef::reference_to(TypeRef::named(api::INT32)))
					.with_output(true),
			)
			.with_return_type(TypeRef::named(api::BOOLEAN));
		assert_eq!(member, expected);
	}

	#[test]
	fn tuple_arguments_carry_element_names() {
		let json = r#"{
			"kind": "specialization",
			"base": "T:System.ValueTuple`2",
			"args": [
				{ "type": { "kind": "named", "api": "T:System.Int32" }, "elementName": "x" },
				{ "type": { "kind": "template", "name": "T" } }
			]
		}"#;
		let ty: TypeRef = serde_json::from_str(json).expect("valid type");
		let TypeRef::Specialization { args, .. } = ty else {
			panic!("expected specialization");
		};
		assert_eq!(args[0].element_name.as_deref(), Some("x"));
		assert_eq!(args[1], TypeArgument::new(TypeRef::template("T")));
	}

	#[test]
	fn accessors_default_to_read_only() {
		let member: MemberDesc =
			serde_json::from_str(r#"{ "kind": "property", "name": "Count" }"#).expect("valid");
		assert!(member.accessors.getter);
		assert!(!member.accessors.setter);
	}

	#[test]
	fn default_value_kind_names() {
		assert_eq!(DefaultValueDesc::Null.kind_name(), "nullValue");
		assert_eq!(DefaultValueDesc::scalar(api::DECIMAL, "1.5").kind_name(), "value");
	}
}
