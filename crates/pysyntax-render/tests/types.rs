//! Integration tests covering type-reference rendering inside declarations.
mod utils;
use utils::*;

gen_tests! {
	types, {
		rt {
			jagged_and_multidimensional_arrays: {
				input: r#"{
					"kind": "field",
					"name": "grid",
					"returnType": {
						"kind": "array",
						"rank": 2,
						"element": {
							"kind": "array",
							"rank": 1,
							"element": { "kind": "named", "api": "T:System.Byte" }
						}
					}
				}"#,
				output: r#"
					grid: Array[Array[Array[int]]]
				"#
			}
		}
		rt {
			named_tuple: {
				input: r#"{
					"kind": "field",
					"name": "point",
					"returnType": {
						"kind": "specialization",
						"base": "T:System.ValueTuple`2",
						"args": [
							{ "type": { "kind": "named", "api": "T:System.Int32" }, "elementName": "x" },
							{ "type": { "kind": "named", "api": "T:System.Char" }, "elementName": "y" }
						]
					}
				}"#,
				output: r#"
					point: (int x, str y)
				"#
			}
		}
		rt {
			nested_generics: {
				input: r#"{
					"kind": "field",
					"name": "lookup",
					"returnType": {
						"kind": "specialization",
						"base": "T:System.Collections.Generic.Dictionary`2",
						"args": [
							{ "type": { "kind": "named", "api": "T:System.String" } },
							{
								"type": {
									"kind": "specialization",
									"base": "T:System.Collections.Generic.List`1",
									"args": [{ "type": { "kind": "named", "api": "T:System.Decimal" } }]
								}
							}
						]
					}
				}"#,
				output: r#"
					lookup: Dictionary[String, List[Decimal]]
				"#
			}
		}
		rt {
			template_array: {
				input: r#"{
					"kind": "field",
					"name": "buffer",
					"returnType": {
						"kind": "template",
						"name": "TElement",
						"modifiers": [{ "kind": "array", "rank": 1 }]
					}
				}"#,
				output: r#"
					buffer: Array[TElement]
				"#
			}
		}
		idemp {
			tuple_of_arrays: r#"{
				"kind": "field",
				"name": "pair",
				"returnType": {
					"kind": "specialization",
					"base": "T:System.ValueTuple`2",
					"args": [
						{ "type": { "kind": "array", "rank": 1, "element": { "kind": "named", "api": "T:System.Int64" } } },
						{ "type": { "kind": "template", "name": "T" } }
					]
				}
			}"#
		}
	}
}
