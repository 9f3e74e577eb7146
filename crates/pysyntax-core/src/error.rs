use std::path::PathBuf;

use pysyntax_render::RenderError;
use thiserror::Error;

/// Aggregate errors produced by the pysyntax-core API.
#[derive(Debug, Error)]
pub enum PySyntaxError {
	/// The member tree violated a rendering precondition.
	#[error(transparent)]
	Render(#[from] RenderError),
	/// The member description was not valid JSON or did not match the expected shape.
	#[error("invalid member description: {0}")]
	Serialization(#[from] serde_json::Error),
	/// The member description could not be read.
	#[error("failed to read {}: {source}", path.display())]
	Io {
		/// File that was being read.
		path: PathBuf,
		/// Underlying I/O failure.
		#[source]
		source: std::io::Error,
	},
	/// No registered generator answers to the requested language tag.
	#[error("no syntax generator registered for language '{0}'")]
	UnknownLanguage(String),
}

/// Result type returned by the pysyntax-core library.
pub type Result<T> = std::result::Result<T, PySyntaxError>;
