pub use self::signature::{SignatureOptions, write_parameter, write_signature};
pub use self::types::{
	SCALAR_DISPLAY_NAMES, TUPLE_FAMILY_PREFIXES, is_tuple_family, scalar_display_name,
	write_named_type, write_type,
};
pub use self::values::{NONE_KEYWORD, parse_invariant_bool, write_value};

/// Callable signature synthesis.
pub mod signature;
/// Type-reference resolution including the scalar display table.
pub mod types;
/// Default and constant value literals.
pub mod values;
