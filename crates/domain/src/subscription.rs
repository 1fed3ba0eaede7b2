// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::shape::{FieldKind, FieldShape, RecordShape};
use serde::Serialize;

/// The service plan being ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionInformation {
    /// Catalog code of the plan.
    pub plan_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_tier: Option<String>,
    /// Quoted monthly rate in cents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_rate_cents: Option<i64>,
    /// Add-on product codes, in the order they were selected.
    pub add_ons: Vec<String>,
}

impl SubscriptionInformation {
    /// Creates a new `SubscriptionInformation` for a plan with no add-ons.
    ///
    /// # Arguments
    ///
    /// * `plan_code` - The plan's catalog code
    #[must_use]
    pub fn new(plan_code: impl Into<String>) -> Self {
        Self {
            plan_code: plan_code.into(),
            speed_tier: None,
            monthly_rate_cents: None,
            add_ons: Vec::new(),
        }
    }
}

impl RecordShape for SubscriptionInformation {
    const NAME: &'static str = "SubscriptionInformation";
    const FIELDS: &'static [FieldShape] = &[
        FieldShape::required("planCode", FieldKind::Text),
        FieldShape::optional("speedTier", FieldKind::Text),
        FieldShape::optional("monthlyRateCents", FieldKind::Int64),
        FieldShape::sequence("addOns", &FieldKind::Text),
    ];
}
