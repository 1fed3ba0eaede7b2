// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while building or writing Swagger definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwaggerError {
    /// A generic type expression has no type argument (e.g. `List[]`).
    MissingSubtype {
        /// The offending type expression.
        expression: String,
    },
    /// A `case class` declaration has no name, or no balanced parameter list.
    EmptyDeclaration {
        /// The declaration text, trimmed.
        declaration: String,
    },
    /// A constructor parameter is not of the form `name: Type`, or repeats
    /// an earlier parameter's name.
    MalformedParameter {
        /// The class the parameter belongs to.
        class_name: String,
        /// The parameter text, trimmed.
        parameter: String,
    },
    /// Reading or writing a file failed.
    Io {
        /// The file or directory involved.
        path: String,
        /// The underlying error message.
        message: String,
    },
    /// Rendering a definition as JSON failed.
    Serialization(String),
}

impl std::fmt::Display for SwaggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSubtype { expression } => {
                write!(f, "No subtype found in type expression '{expression}'")
            }
            Self::EmptyDeclaration { declaration } => {
                write!(f, "Case class declaration has no name or no balanced parameter list: '{declaration}'")
            }
            Self::MalformedParameter {
                class_name,
                parameter,
            } => {
                write!(
                    f,
                    "Malformed parameter '{parameter}' in case class {class_name}: expected 'name: Type'"
                )
            }
            Self::Io { path, message } => write!(f, "I/O error on '{path}': {message}"),
            Self::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for SwaggerError {}
