// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::OrderError;
use crate::shape::{FieldKind, FieldShape, RecordShape};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Outcome of a single provisioning step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ProvisioningStatus {
    /// Not yet started.
    #[default]
    Pending,
    /// Started but not finished.
    InProgress,
    /// Finished successfully.
    Completed,
    /// Finished unsuccessfully.
    Failed,
}

impl ProvisioningStatus {
    /// Serialized names of every variant, in declaration order.
    pub const VARIANTS: &'static [&'static str] = &["pending", "inProgress", "completed", "failed"];

    /// Converts this status to its serialized representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "inProgress",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl FromStr for ProvisioningStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "inProgress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            _ => Err(OrderError::TypeMismatch {
                field: String::from("status"),
                expected: "ProvisioningStatus",
                found: "string",
            }),
        }
    }
}

impl std::fmt::Display for ProvisioningStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One step of provisioning and its result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningDetail {
    /// Name of the step. Must not be blank.
    pub step: String,
    /// Current outcome of the step.
    pub status: ProvisioningStatus,
    /// Free-text result reported by the provisioning engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// When the step finished, in textual form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

impl ProvisioningDetail {
    /// Creates a new `ProvisioningDetail` with no message or completion time.
    ///
    /// # Arguments
    ///
    /// * `step` - The step name
    /// * `status` - The step's outcome
    #[must_use]
    pub fn new(step: impl Into<String>, status: ProvisioningStatus) -> Self {
        Self {
            step: step.into(),
            status,
            message: None,
            completed_at: None,
        }
    }

    /// Returns this detail with the given message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns this detail with the given completion time.
    #[must_use]
    pub fn with_completed_at(mut self, completed_at: impl Into<String>) -> Self {
        self.completed_at = Some(completed_at.into());
        self
    }
}

const STATUS_KIND: FieldKind = FieldKind::Enum {
    name: "ProvisioningStatus",
    variants: ProvisioningStatus::VARIANTS,
};

impl RecordShape for ProvisioningDetail {
    const NAME: &'static str = "ProvisioningDetail";
    const FIELDS: &'static [FieldShape] = &[
        FieldShape::required("step", FieldKind::Text),
        FieldShape::required("status", STATUS_KIND),
        FieldShape::optional("message", FieldKind::Text),
        FieldShape::optional("completedAt", FieldKind::Text),
    ];
}
