// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::shape::{FieldKind, FieldShape, RecordShape};
use serde::Serialize;

/// A labelled value, used to describe issues blocking an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelValue {
    /// The label. Must not be blank.
    pub label: String,
    /// The value. May be empty.
    pub value: String,
}

impl LabelValue {
    /// Creates a new `LabelValue`.
    ///
    /// # Arguments
    ///
    /// * `label` - The label
    /// * `value` - The value
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl RecordShape for LabelValue {
    const NAME: &'static str = "LabelValue";
    const FIELDS: &'static [FieldShape] = &[
        FieldShape::required("label", FieldKind::Text),
        FieldShape::required("value", FieldKind::Text),
    ];
}
