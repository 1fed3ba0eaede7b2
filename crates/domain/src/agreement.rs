// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::shape::{FieldKind, FieldShape, RecordShape};
use serde::Serialize;

/// Evidence that the customer accepted the terms of service.
///
/// An order without one has not reached the agreement step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementFormData {
    /// Name typed or drawn by the signer.
    pub signer_name: String,
    /// When the agreement was signed, in textual form.
    pub signed_at: String,
    /// Version of the terms that were accepted.
    pub terms_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

impl AgreementFormData {
    /// Creates a new `AgreementFormData` without an originating address.
    ///
    /// # Arguments
    ///
    /// * `signer_name` - The signer's name
    /// * `signed_at` - When the agreement was signed
    /// * `terms_version` - The accepted terms version
    #[must_use]
    pub fn new(
        signer_name: impl Into<String>,
        signed_at: impl Into<String>,
        terms_version: impl Into<String>,
    ) -> Self {
        Self {
            signer_name: signer_name.into(),
            signed_at: signed_at.into(),
            terms_version: terms_version.into(),
            ip_address: None,
        }
    }
}

impl RecordShape for AgreementFormData {
    const NAME: &'static str = "AgreementFormData";
    const FIELDS: &'static [FieldShape] = &[
        FieldShape::required("signerName", FieldKind::Text),
        FieldShape::required("signedAt", FieldKind::Text),
        FieldShape::required("termsVersion", FieldKind::Text),
        FieldShape::optional("ipAddress", FieldKind::Text),
    ];
}
