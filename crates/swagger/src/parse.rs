// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parsing of Scala `case class` declarations into Swagger definitions.

use crate::document::{SwaggerDoc, SwaggerProperty};
use crate::error::SwaggerError;
use crate::property::{PropertyKind, PropertyType};
use tracing::debug;

/// Keyword that starts every declaration.
const CASE_CLASS: &str = "case class";

/// Container types rendered as Swagger arrays.
const ARRAY_CONTAINERS: &[&str] = &["Array", "List", "ArrayBuffer", "Seq", "Vector"];

/// Parses a type expression such as `Option[List[LabelValue]]`.
///
/// `Option[T]` yields `T` marked optional; array containers yield arrays;
/// primitives map through [`PropertyType::primitive`]; anything else,
/// including unknown generic types, becomes a reference.
///
/// # Errors
///
/// Returns `SwaggerError::MissingSubtype` if a generic has no type argument
/// or its brackets do not close.
pub fn parse_type(expression: &str) -> Result<PropertyType, SwaggerError> {
    let compact: String = expression.split_whitespace().collect();

    let Some(open) = compact.find('[') else {
        let kind: PropertyKind = PropertyType::primitive(&compact)
            .unwrap_or(PropertyKind::Reference(compact));
        return Ok(PropertyType::required(kind));
    };

    let outer: &str = &compact[..open];
    let inner: &str = compact[open + 1..]
        .strip_suffix(']')
        .filter(|inner| !inner.is_empty())
        .ok_or_else(|| SwaggerError::MissingSubtype {
            expression: compact.clone(),
        })?;

    if outer == "Option" {
        return Ok(parse_type(inner)?.optional());
    }
    if ARRAY_CONTAINERS.contains(&outer) {
        let items: PropertyType = parse_type(inner)?;
        return Ok(PropertyType::required(PropertyKind::Array(Box::new(items))));
    }
    Ok(PropertyType::required(PropertyKind::Reference(
        outer.to_string(),
    )))
}

/// Parses every `case class` declaration in `source`.
///
/// Text before the first declaration is ignored. Default values
/// (`= Nil`, `= None`, `= List()`) and `val`/`var` modifiers are stripped.
///
/// # Errors
///
/// Returns an error if a declaration has no name or balanced parameter
/// list, a parameter is not `name: Type` or repeats an earlier name, or a
/// type expression is malformed.
pub fn parse_case_classes(source: &str) -> Result<Vec<SwaggerDoc>, SwaggerError> {
    let mut declarations = source.split(CASE_CLASS);
    let preamble: &str = declarations.next().unwrap_or_default();
    if !preamble.trim().is_empty() {
        debug!("ignoring text before the first case class");
    }
    declarations.map(parse_declaration).collect()
}

/// Parses one declaration, starting just after the `case class` keyword.
fn parse_declaration(declaration: &str) -> Result<SwaggerDoc, SwaggerError> {
    let empty = || SwaggerError::EmptyDeclaration {
        declaration: declaration.trim().to_string(),
    };

    let open: usize = declaration.find('(').ok_or_else(empty)?;
    let class_name: &str = declaration[..open].trim();
    if class_name.is_empty() {
        return Err(empty());
    }
    // Type parameters on the class itself are not part of the definition name.
    let class_name: &str = class_name
        .split_once('[')
        .map_or(class_name, |(name, _)| name.trim_end());

    let parameters: &str = enclosed(&declaration[open..]).ok_or_else(empty)?;
    let mut doc: SwaggerDoc = SwaggerDoc::new(class_name);

    for parameter in split_top_level(parameters, ',') {
        let parameter: &str = parameter.trim();
        if parameter.is_empty() {
            continue;
        }
        let without_default: &str = split_top_level(parameter, '=')
            .next()
            .unwrap_or(parameter)
            .trim();
        let malformed = || SwaggerError::MalformedParameter {
            class_name: class_name.to_string(),
            parameter: parameter.to_string(),
        };

        let (name, type_expression) = without_default.split_once(':').ok_or_else(malformed)?;
        let name: &str = strip_modifiers(name.trim());
        if name.is_empty() || type_expression.trim().is_empty() {
            return Err(malformed());
        }
        if doc.properties().iter().any(|property| property.name == name) {
            return Err(malformed());
        }

        let property_type: PropertyType = parse_type(type_expression)?;
        debug!(class = class_name, property = name, "adding property");
        doc.add_property(SwaggerProperty::new(name, property_type));
    }

    Ok(doc)
}

/// Returns the text inside the parenthesis that opens `text`.
///
/// Returns `None` if the parenthesis never closes or a bracket inside it
/// is closed by the wrong character.
fn enclosed(text: &str) -> Option<&str> {
    let mut open: Vec<char> = Vec::new();
    for (index, c) in text.char_indices() {
        match c {
            '(' => open.push(')'),
            '[' => open.push(']'),
            ')' | ']' => {
                if open.pop()? != c {
                    return None;
                }
                if open.is_empty() {
                    return Some(&text[1..index]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Splits `text` at every `separator` not nested in brackets or parentheses.
fn split_top_level(text: &str, separator: char) -> impl Iterator<Item = &str> {
    let mut depth: usize = 0;
    let mut start: usize = 0;
    let mut pieces: Vec<&str> = Vec::new();
    for (index, c) in text.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            _ if c == separator && depth == 0 => {
                pieces.push(&text[start..index]);
                start = index + c.len_utf8();
            }
            _ => {}
        }
    }
    pieces.push(&text[start..]);
    pieces.into_iter()
}

fn strip_modifiers(name: &str) -> &str {
    name.strip_prefix("val ")
        .or_else(|| name.strip_prefix("var "))
        .map_or(name, str::trim)
}
