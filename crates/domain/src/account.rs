// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::shape::{FieldKind, FieldShape, RecordShape};
use serde::Serialize;

/// The customer account an order is placed against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInformation {
    /// Billing account number, once one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    /// Account holder's first name.
    pub first_name: String,
    /// Account holder's last name.
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Where the service is installed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_address: Option<String>,
}

impl AccountInformation {
    /// Creates a new `AccountInformation` with only the holder's name.
    ///
    /// # Arguments
    ///
    /// * `first_name` - The account holder's first name
    /// * `last_name` - The account holder's last name
    #[must_use]
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            account_number: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: None,
            phone: None,
            service_address: None,
        }
    }
}

impl RecordShape for AccountInformation {
    const NAME: &'static str = "AccountInformation";
    const FIELDS: &'static [FieldShape] = &[
        FieldShape::optional("accountNumber", FieldKind::Text),
        FieldShape::required("firstName", FieldKind::Text),
        FieldShape::required("lastName", FieldKind::Text),
        FieldShape::optional("email", FieldKind::Text),
        FieldShape::optional("phone", FieldKind::Text),
        FieldShape::optional("serviceAddress", FieldKind::Text),
    ];
}
