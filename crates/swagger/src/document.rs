// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::SwaggerError;
use crate::property::PropertyType;
use order_record_domain::{RecordDescriptor, RecordShape, record_shapes};
use serde::Serialize;
use serde_json::{Map, Value, json};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Indentation used for rendered definitions.
const INDENT: &[u8] = b"    ";

/// Suffix appended to the definition name to form its file name.
const FILE_SUFFIX: &str = "_output_swagger.json";

/// One named property of a definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwaggerProperty {
    pub name: String,
    pub property_type: PropertyType,
}

impl SwaggerProperty {
    #[must_use]
    pub fn new(name: impl Into<String>, property_type: PropertyType) -> Self {
        Self {
            name: name.into(),
            property_type,
        }
    }
}

/// A Swagger object definition for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwaggerDoc {
    name: String,
    properties: Vec<SwaggerProperty>,
}

impl SwaggerDoc {
    /// Creates a definition with no properties.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// Builds the definition of a record from its field table.
    #[must_use]
    pub fn from_descriptor(descriptor: &RecordDescriptor) -> Self {
        let mut doc: Self = Self::new(descriptor.name);
        for field in descriptor.fields {
            doc.add_property(SwaggerProperty::new(
                field.name,
                PropertyType::from_field(field),
            ));
        }
        doc
    }

    /// Builds the definition of a record type.
    #[must_use]
    pub fn from_shape<R: RecordShape>() -> Self {
        Self::from_descriptor(&R::descriptor())
    }

    /// Appends a property, keeping declaration order.
    pub fn add_property(&mut self, property: SwaggerProperty) {
        self.properties.push(property);
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn properties(&self) -> &[SwaggerProperty] {
        &self.properties
    }

    /// Returns the names of required properties in declaration order.
    #[must_use]
    pub fn required(&self) -> Vec<&str> {
        self.properties
            .iter()
            .filter(|property| property.property_type.required)
            .map(|property| property.name.as_str())
            .collect()
    }

    /// Returns the schema object, without the enclosing name.
    #[must_use]
    pub fn schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .properties
            .iter()
            .map(|property| (property.name.clone(), property.property_type.to_value()))
            .collect();
        json!({
            "type": "object",
            "required": self.required(),
            "properties": properties,
        })
    }

    /// Renders `{ "<name>": <schema> }`.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut definition: Map<String, Value> = Map::new();
        definition.insert(self.name.clone(), self.schema());
        Value::Object(definition)
    }

    /// File name this definition is written under.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}{FILE_SUFFIX}", self.name)
    }

    /// Renders this definition with four-space indentation.
    ///
    /// # Errors
    ///
    /// Returns `SwaggerError::Serialization` if rendering fails.
    pub fn render_pretty(&self) -> Result<String, SwaggerError> {
        render_pretty(&self.to_value())
    }
}

/// Returns the definitions of every order record, leaves first.
#[must_use]
pub fn record_definitions() -> Vec<SwaggerDoc> {
    record_shapes()
        .iter()
        .map(SwaggerDoc::from_descriptor)
        .collect()
}

/// Merges definitions into one `definitions` object keyed by name.
#[must_use]
pub fn definitions(docs: &[SwaggerDoc]) -> Value {
    let merged: Map<String, Value> = docs
        .iter()
        .map(|doc| (doc.name.clone(), doc.schema()))
        .collect();
    Value::Object(merged)
}

/// Renders a JSON value with sorted keys and four-space indentation.
///
/// # Errors
///
/// Returns `SwaggerError::Serialization` if rendering fails.
pub fn render_pretty(value: &Value) -> Result<String, SwaggerError> {
    let mut buffer: Vec<u8> = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|err| SwaggerError::Serialization(err.to_string()))?;
    String::from_utf8(buffer).map_err(|err| SwaggerError::Serialization(err.to_string()))
}

/// Writes each definition to `<dir>/<Name>_output_swagger.json`.
///
/// The directory is created if it does not exist. Existing files are
/// overwritten.
///
/// # Errors
///
/// Returns `SwaggerError::Io` if the directory or a file cannot be written.
pub fn write_definitions(docs: &[SwaggerDoc], dir: &Path) -> Result<Vec<PathBuf>, SwaggerError> {
    std::fs::create_dir_all(dir).map_err(|err| io_error(dir, &err))?;

    let mut written: Vec<PathBuf> = Vec::with_capacity(docs.len());
    for doc in docs {
        let path: PathBuf = dir.join(doc.file_name());
        let rendered: String = doc.render_pretty()?;
        std::fs::write(&path, rendered).map_err(|err| io_error(&path, &err))?;
        debug!(definition = doc.name(), path = %path.display(), "wrote definition");
        written.push(path);
    }

    info!(count = written.len(), dir = %dir.display(), "wrote swagger definitions");
    Ok(written)
}

fn io_error(path: &Path, err: &std::io::Error) -> SwaggerError {
    SwaggerError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}
