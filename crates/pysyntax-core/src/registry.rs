//! Discovery boundary between a documentation host and the syntax generators it can use.
//!
//! A host looks generators up by language tag, reads their descriptor to pick presentation assets,
//! and instantiates them through a zero-argument factory.

use pysyntax_render::SyntaxGenerator;
use tracing::debug;

use crate::error::{PySyntaxError, Result};

/// Declarative description of a registered generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorDescriptor {
	/// Stable language tag.
	pub id: &'static str,
	/// Human-readable language name.
	pub language: &'static str,
	/// Short style tag used to select presentation assets.
	pub style_id: &'static str,
	/// One-line description shown to users.
	pub description: &'static str,
	/// Other tags that map to this generator.
	pub alternate_ids: &'static [&'static str],
	/// Position among generators in presentation order.
	pub sort_order: i32,
}

impl GeneratorDescriptor {
	/// Whether `tag` names this generator exactly.
	pub fn matches_exact(&self, tag: &str) -> bool {
		self.id == tag || self.alternate_ids.contains(&tag)
	}

	/// Whether `tag` names this generator, ignoring ASCII case.
	pub fn matches_ignore_case(&self, tag: &str) -> bool {
		self.id.eq_ignore_ascii_case(tag)
			|| self
				.alternate_ids
				.iter()
				.any(|alternate| alternate.eq_ignore_ascii_case(tag))
	}
}

/// Descriptor of the Python declaration syntax generator.
pub const PYTHON_DESCRIPTOR: GeneratorDescriptor = GeneratorDescriptor {
	id: "Python",
	language: "Python",
	style_id: "py",
	description: "Generates Python declaration syntax sections",
	alternate_ids: &["Python", "python", "py"],
	sort_order: 500,
};

/// Zero-argument factory through which a host instantiates a generator.
pub trait GeneratorFactory: Send + Sync {
	/// Descriptor advertised to the host.
	fn descriptor(&self) -> &GeneratorDescriptor;
	/// Create a generator with default settings.
	fn create(&self) -> SyntaxGenerator;
}

/// Factory for the Python generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct PythonGeneratorFactory;

impl GeneratorFactory for PythonGeneratorFactory {
	fn descriptor(&self) -> &GeneratorDescriptor {
		&PYTHON_DESCRIPTOR
	}

	fn create(&self) -> SyntaxGenerator {
		SyntaxGenerator::new()
	}
}

/// Set of generator factories available to a host.
pub struct Registry {
	factories: Vec<Box<dyn GeneratorFactory>>,
}

impl Default for Registry {
	fn default() -> Self {
		let mut registry = Self::empty();
		registry.register(PythonGeneratorFactory);
		registry
	}
}

impl Registry {
	/// Registry with no generators.
	pub fn empty() -> Self {
		Self {
			factories: Vec::new(),
		}
	}

	/// Add a factory; earlier registrations win when tags collide.
	pub fn register(&mut self, factory: impl GeneratorFactory + 'static) {
		debug!(id = factory.descriptor().id, "registering syntax generator");
		self.factories.push(Box::new(factory));
	}

	/// Find the factory answering to `tag`, preferring exact matches over case-insensitive ones.
	pub fn find(&self, tag: &str) -> Option<&dyn GeneratorFactory> {
		self.factories
			.iter()
			.find(|factory| factory.descriptor().matches_exact(tag))
			.or_else(|| {
				self.factories
					.iter()
					.find(|factory| factory.descriptor().matches_ignore_case(tag))
			})
			.map(|factory| factory.as_ref())
	}

	/// Instantiate the generator answering to `tag`.
	pub fn create(&self, tag: &str) -> Result<SyntaxGenerator> {
		self.find(tag)
			.map(|factory| factory.create())
			.ok_or_else(|| PySyntaxError::UnknownLanguage(tag.to_string()))
	}

	/// Descriptors of every registered generator, in presentation order.
	pub fn descriptors(&self) -> Vec<&GeneratorDescriptor> {
		let mut descriptors: Vec<_> = self
			.factories
			.iter()
			.map(|factory| factory.descriptor())
			.collect();
		descriptors.sort_by_key(|descriptor| descriptor.sort_order);
		descriptors
	}
}
