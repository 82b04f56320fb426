//! Declarative output-schema descriptor for structured generation.
//!
//! A small recursive type the pipelines use to tell the generative API what
//! JSON shape to return. Serialises to the endpoint's uppercase type tags
//! (`OBJECT`/`STRING`/`ARRAY`) with `properties`, `required`, and
//! `propertyOrdering`.

use serde_json::{Map, Value, json};

/// Placeholder string used for degraded-mode output.
const PLACEHOLDER_TEXT: &str =
    "<p>Placeholder content: no generative API credential is configured.</p>";

/// Output-shape descriptor for schema-constrained generation.
#[derive(Debug, Clone)]
pub enum Schema {
    /// JSON object with ordered properties; `required` lists property names.
    Object {
        properties: Vec<(String, Schema)>,
        required: Vec<String>,
    },
    /// JSON string, with a description steering the model.
    String { description: String },
    /// JSON array of homogeneous items.
    Array { items: Box<Schema> },
}

impl Schema {
    /// Object schema where every property is required.
    pub fn object(properties: Vec<(&str, Schema)>) -> Self {
        let required = properties.iter().map(|(name, _)| name.to_string()).collect();
        Self::Object {
            properties: properties
                .into_iter()
                .map(|(name, schema)| (name.to_string(), schema))
                .collect(),
            required,
        }
    }

    pub fn string(description: &str) -> Self {
        Self::String {
            description: description.to_string(),
        }
    }

    pub fn array(items: Schema) -> Self {
        Self::Array {
            items: Box::new(items),
        }
    }

    /// Property names of an object schema, in declaration order.
    pub fn property_names(&self) -> Vec<&str> {
        match self {
            Self::Object { properties, .. } => {
                properties.iter().map(|(name, _)| name.as_str()).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Render as the generative endpoint's schema JSON.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Object {
                properties,
                required,
            } => {
                let mut props = Map::new();
                for (name, schema) in properties {
                    props.insert(name.clone(), schema.to_json());
                }
                json!({
                    "type": "OBJECT",
                    "properties": props,
                    "required": required,
                    "propertyOrdering": properties.iter().map(|(n, _)| n.clone()).collect::<Vec<_>>(),
                })
            }
            Self::String { description } => json!({
                "type": "STRING",
                "description": description,
            }),
            Self::Array { items } => json!({
                "type": "ARRAY",
                "items": items.to_json(),
            }),
        }
    }

    /// Schema-shaped dummy value for degraded mode.
    ///
    /// Fills every required field so downstream JSON parsing of a degraded
    /// response never fails.
    pub fn placeholder(&self) -> Value {
        match self {
            Self::Object { properties, .. } => {
                let mut map = Map::new();
                for (name, schema) in properties {
                    map.insert(name.clone(), schema.placeholder());
                }
                Value::Object(map)
            }
            Self::String { .. } => Value::String(PLACEHOLDER_TEXT.to_string()),
            Self::Array { .. } => Value::Array(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Schema {
        Schema::object(vec![
            ("newTitle", Schema::string("An optimized title.")),
            ("newDescription", Schema::string("HTML description.")),
        ])
    }

    #[test]
    fn object_json_shape() {
        let json = sample().to_json();
        assert_eq!(json["type"], "OBJECT");
        assert_eq!(json["properties"]["newTitle"]["type"], "STRING");
        assert_eq!(json["required"], json!(["newTitle", "newDescription"]));
        assert_eq!(
            json["propertyOrdering"],
            json!(["newTitle", "newDescription"])
        );
    }

    #[test]
    fn placeholder_fills_every_required_field() {
        let schema = sample();
        let placeholder = schema.placeholder();
        for name in schema.property_names() {
            assert!(
                placeholder[name].is_string(),
                "missing placeholder for {name}"
            );
        }
        // No stray keys beyond the declared properties.
        assert_eq!(placeholder.as_object().unwrap().len(), 2);
    }

    #[test]
    fn array_schema_nests_items() {
        let json = Schema::array(Schema::string("tag")).to_json();
        assert_eq!(json["type"], "ARRAY");
        assert_eq!(json["items"]["type"], "STRING");
    }
}
