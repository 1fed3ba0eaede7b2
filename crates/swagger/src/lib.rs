// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

//! Swagger 2.0 definitions for order records.
//!
//! Definitions come from two sources that must agree: the static record
//! shapes in `order-record-domain`, and Scala `case class` declarations of
//! the same records.

mod document;
mod error;
mod parse;
mod property;

#[cfg(test)]
mod tests;

pub use document::{
    SwaggerDoc, SwaggerProperty, definitions, record_definitions, render_pretty,
    write_definitions,
};
pub use error::SwaggerError;
pub use parse::{parse_case_classes, parse_type};
pub use property::{DEFINITIONS_PREFIX, PropertyKind, PropertyType};
