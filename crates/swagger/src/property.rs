// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use order_record_domain::{FieldKind, FieldShape};
use serde_json::{Map, Value, json};

/// Prefix of every `$ref` target.
pub const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// The Swagger type of a single property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKind {
    /// A primitive with no format (`string`, `boolean`).
    Simple(&'static str),
    /// A numeric primitive, with a format when one is known.
    Number {
        /// `integer` or `number`.
        type_name: &'static str,
        /// `int32`, `int64`, `float`, `double`, or none.
        format: Option<&'static str>,
    },
    /// A homogeneous array.
    Array(Box<PropertyType>),
    /// A reference to another definition.
    Reference(String),
    /// A string restricted to fixed values.
    Enumeration(Vec<String>),
}

/// A property's type together with whether the object must carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyType {
    pub kind: PropertyKind,
    pub required: bool,
}

impl PropertyType {
    /// Creates a required property of the given kind.
    #[must_use]
    pub const fn required(kind: PropertyKind) -> Self {
        Self {
            kind,
            required: true,
        }
    }

    /// Returns this property marked optional.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Maps a scalar type name to its Swagger kind.
    ///
    /// Returns `None` for names that are not primitives; callers treat
    /// those as references.
    #[must_use]
    pub fn primitive(type_name: &str) -> Option<PropertyKind> {
        let kind: PropertyKind = match type_name {
            "String" | "Char" => PropertyKind::Simple("string"),
            "Boolean" => PropertyKind::Simple("boolean"),
            "Int" => integer("int32"),
            "Long" => integer("int64"),
            "Float" => PropertyKind::Number {
                type_name: "number",
                format: Some("float"),
            },
            "Double" => PropertyKind::Number {
                type_name: "number",
                format: Some("double"),
            },
            "BigDecimal" | "BigInt" => PropertyKind::Number {
                type_name: "number",
                format: None,
            },
            _ => return None,
        };
        Some(kind)
    }

    /// Builds the property type for one field of a record shape.
    #[must_use]
    pub fn from_field(field: &FieldShape) -> Self {
        let property: Self = Self::required(kind_of(&field.kind));
        if field.is_required() {
            property
        } else {
            property.optional()
        }
    }

    /// Renders this property as a Swagger schema object.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match &self.kind {
            PropertyKind::Simple(type_name) => json!({ "type": type_name }),
            PropertyKind::Number { type_name, format } => {
                let mut schema: Map<String, Value> = Map::new();
                schema.insert(String::from("type"), json!(type_name));
                if let Some(format) = format {
                    schema.insert(String::from("format"), json!(format));
                }
                Value::Object(schema)
            }
            PropertyKind::Array(items) => json!({
                "type": "array",
                "items": items.to_value(),
            }),
            PropertyKind::Reference(class_name) => {
                json!({ "$ref": format!("{DEFINITIONS_PREFIX}{class_name}") })
            }
            PropertyKind::Enumeration(variants) => json!({
                "type": "string",
                "enum": variants,
            }),
        }
    }
}

const fn integer(format: &'static str) -> PropertyKind {
    PropertyKind::Number {
        type_name: "integer",
        format: Some(format),
    }
}

fn kind_of(kind: &FieldKind) -> PropertyKind {
    match kind {
        FieldKind::Int32 => integer("int32"),
        FieldKind::Int64 => integer("int64"),
        FieldKind::Text => PropertyKind::Simple("string"),
        FieldKind::Boolean => PropertyKind::Simple("boolean"),
        FieldKind::Record(name) => PropertyKind::Reference((*name).to_string()),
        FieldKind::Enum { variants, .. } => {
            PropertyKind::Enumeration(variants.iter().map(|v| (*v).to_string()).collect())
        }
        FieldKind::Sequence(element) => {
            PropertyKind::Array(Box::new(PropertyType::required(kind_of(element))))
        }
    }
}
