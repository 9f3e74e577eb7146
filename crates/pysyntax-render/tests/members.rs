//! Integration tests covering type declarations, properties and fields.
mod utils;
use pysyntax_render::SyntaxGenerator;
use utils::*;

gen_tests! {
	members, {
		rt {
			class_with_bases: {
				input: r#"{
					"kind": "class",
					"name": "Repository",
					"baseTypes": [
						{ "kind": "named", "api": "T:Data.RepositoryBase" },
						{ "kind": "named", "api": "T:System.IDisposable" }
					]
				}"#,
				output: r#"
					class Repository(RepositoryBase, IDisposable)
				"#
			}
		}
		rt {
			enumeration: {
				input: r#"{ "kind": "enumeration", "name": "FileMode" }"#,
				output: r#"
					class FileMode(Enum)
				"#
			}
		}
		rt {
			read_write_property: {
				input: r#"{
					"kind": "property",
					"name": "Capacity",
					"returnType": { "kind": "named", "api": "T:System.Int32" },
					"accessors": { "getter": true, "setter": true }
				}"#,
				output: r#"
					@property
					def Capacity(
					    self
					) -> int

					@Capacity.setter
					def Capacity(
					    self,
					    value: int
					)
				"#
			}
		}
		rt {
			constant_string_field: {
				input: r#"{
					"kind": "field",
					"name": "Separator",
					"isStatic": true,
					"returnType": { "kind": "named", "api": "T:System.String" },
					"value": { "kind": "scalarLiteral", "type": "T:System.String", "text": "," }
				}"#,
				output: r#"
					Separator: String = ","
				"#
			}
		}
		rt {
			event_placeholder: {
				input: r#"{ "kind": "event", "name": "Changed" }"#,
				output: r#"
					# Python has no event declaration syntax
				"#
			}
		}
		rt_custom {
			delegate_without_placeholder: {
				generator: SyntaxGenerator::new().with_placeholders(false),
				input: r#"{ "kind": "delegate", "name": "Callback" }"#,
				output: ""
			}
		}
		idemp {
			indexer: r#"{
				"kind": "property",
				"name": "Item",
				"parameters": [
					{ "name": "index", "type": { "kind": "named", "api": "T:System.Int32" } }
				],
				"returnType": { "kind": "template", "name": "T" },
				"accessors": { "getter": true, "setter": true }
			}"#
		}
	}
}
