//! Rendering engine that turns reflection-data API descriptions into Python declaration syntax.
//!
//! The engine walks an immutable [`model::MemberDesc`] tree and writes tokens to a
//! [`writer::SyntaxWriter`] in a single forward pass. The interesting work happens in
//! [`syntax`]: type references, callable signatures and default values.

/// Generator configuration and one-call render helpers.
pub mod core;
/// Domain-specific errors for the renderer.
pub mod error;
/// Per-kind declaration rendering.
pub mod items;
/// Value types describing API elements.
pub mod model;
/// Type, signature and value syntax.
pub mod syntax;
/// Output sinks for rendered tokens.
pub mod writer;

// Re-export public API
pub use self::core::SyntaxGenerator;
pub use self::error::{RenderError, Result};
pub use self::model::{
	DefaultValueDesc, MemberDesc, MemberKind, ParameterDesc, PropertyAccessors, TemplateModifier,
	TypeArgument, TypeRef,
};
pub use self::syntax::{SignatureOptions, write_signature, write_type, write_value};
pub use self::writer::{MarkupWriter, PlainTextWriter, SyntaxWriter, Token, TokenWriter};
