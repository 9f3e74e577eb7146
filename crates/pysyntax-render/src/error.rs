use thiserror::Error;

/// Precondition violations raised while rendering a declaration.
///
/// Text written before the fault stays in the writer; writers have no transactional semantics.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
	/// A type node carried neither an identifier nor composite children.
	#[error("type node `{0}` has no type identity")]
	MissingTypeIdentity(&'static str),
	/// A boolean literal could not be parsed.
	#[error("'{0}' is not a valid boolean literal")]
	InvalidBoolean(String),
	/// A member or parameter had an empty name.
	#[error("{0} has no name")]
	MissingName(&'static str),
}

/// Result type returned by renderer helpers.
pub type Result<T> = std::result::Result<T, RenderError>;
