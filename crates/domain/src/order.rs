// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::account::AccountInformation;
use crate::agreement::AgreementFormData;
use crate::codec::{Decode, FieldReader};
use crate::error::OrderError;
use crate::label_value::LabelValue;
use crate::provisioning::ProvisioningDetail;
use crate::shape::{FieldKind, FieldShape, RecordShape};
use crate::subscription::SubscriptionInformation;
use crate::validation::{check_element, check_elements};
use serde::Serialize;

/// One customer order under submission or provisioning.
///
/// An `Order` is a value: every revision produces a new `Order` rather than
/// mutating a shared one. Fields are read through accessors; there is no
/// way to change `id` once it has been assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_field_names)]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    preorder_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dch_id: Option<i64>,
    customer_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_app: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fiber_promo_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cs_rep_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transaction_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    order_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    install_date_time: Option<String>,
    e_sign: bool,
    workflow_version: String,
    account_information: AccountInformation,
    subscription_information: SubscriptionInformation,
    pending_issues: Vec<LabelValue>,
    provisioning_details: Vec<ProvisioningDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    agreement_form_data: Option<AgreementFormData>,
    notes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cpni_pin: Option<String>,
}

impl Order {
    /// Creates a new unpersisted `Order` from its mandatory fields.
    ///
    /// Every optional field is absent and every sequence is empty.
    ///
    /// # Arguments
    ///
    /// * `customer_id` - The owning customer
    /// * `e_sign` - Whether an electronic signature was captured
    /// * `workflow_version` - The workflow version that produced this order
    /// * `account_information` - The account details
    /// * `subscription_information` - The subscription details
    #[must_use]
    pub fn new(
        customer_id: i64,
        e_sign: bool,
        workflow_version: impl Into<String>,
        account_information: AccountInformation,
        subscription_information: SubscriptionInformation,
    ) -> Self {
        Self {
            id: None,
            preorder_id: None,
            dch_id: None,
            customer_id,
            client_app: None,
            fiber_promo_code: None,
            cs_rep_id: None,
            transaction_token: None,
            order_hash: None,
            install_date_time: None,
            e_sign,
            workflow_version: workflow_version.into(),
            account_information,
            subscription_information,
            pending_issues: Vec::new(),
            provisioning_details: Vec::new(),
            agreement_form_data: None,
            notes: Vec::new(),
            cpni_pin: None,
        }
    }

    /// Returns an empty builder.
    #[must_use]
    pub fn builder() -> OrderBuilder {
        OrderBuilder::new()
    }

    /// Converts this order back into a builder for revision.
    ///
    /// The resulting builder remembers the persisted identity, and
    /// [`OrderBuilder::build`] refuses to change it.
    #[must_use]
    pub fn into_builder(self) -> OrderBuilder {
        OrderBuilder {
            persisted_id: self.id,
            id: self.id,
            preorder_id: self.preorder_id,
            dch_id: self.dch_id,
            customer_id: Some(self.customer_id),
            client_app: self.client_app,
            fiber_promo_code: self.fiber_promo_code,
            cs_rep_id: self.cs_rep_id,
            transaction_token: self.transaction_token,
            order_hash: self.order_hash,
            install_date_time: self.install_date_time,
            e_sign: Some(self.e_sign),
            workflow_version: Some(self.workflow_version),
            account_information: Some(self.account_information),
            subscription_information: Some(self.subscription_information),
            pending_issues: self.pending_issues,
            provisioning_details: self.provisioning_details,
            agreement_form_data: self.agreement_form_data,
            notes: self.notes,
            cpni_pin: self.cpni_pin,
        }
    }

    /// Returns the persisted identity, if one has been assigned.
    #[must_use]
    pub const fn id(&self) -> Option<i64> {
        self.id
    }

    /// Returns the preorder this order was created from, if any.
    #[must_use]
    pub const fn preorder_id(&self) -> Option<i64> {
        self.preorder_id
    }

    /// Returns the distribution hub identifier, if assigned.
    #[must_use]
    pub const fn dch_id(&self) -> Option<i64> {
        self.dch_id
    }

    /// Returns the owning customer.
    #[must_use]
    pub const fn customer_id(&self) -> i64 {
        self.customer_id
    }

    /// Returns the originating client application, if recorded.
    #[must_use]
    pub fn client_app(&self) -> Option<&str> {
        self.client_app.as_deref()
    }

    /// Returns the applied promo code, if any.
    #[must_use]
    pub const fn fiber_promo_code(&self) -> Option<i32> {
        self.fiber_promo_code
    }

    /// Returns the customer-service representative, if one handled the order.
    #[must_use]
    pub const fn cs_rep_id(&self) -> Option<i64> {
        self.cs_rep_id
    }

    /// Returns the payment transaction token, if any.
    #[must_use]
    pub fn transaction_token(&self) -> Option<&str> {
        self.transaction_token.as_deref()
    }

    /// Returns the content fingerprint, if one was supplied.
    ///
    /// The fingerprint is advisory. It is neither computed nor checked here.
    #[must_use]
    pub fn order_hash(&self) -> Option<&str> {
        self.order_hash.as_deref()
    }

    /// Returns the scheduled installation time, if booked.
    #[must_use]
    pub fn install_date_time(&self) -> Option<&str> {
        self.install_date_time.as_deref()
    }

    /// Returns whether an electronic signature was captured.
    #[must_use]
    pub const fn e_sign(&self) -> bool {
        self.e_sign
    }

    /// Returns the workflow version that produced this order.
    #[must_use]
    pub fn workflow_version(&self) -> &str {
        &self.workflow_version
    }

    /// Returns the account details.
    #[must_use]
    pub const fn account_information(&self) -> &AccountInformation {
        &self.account_information
    }

    /// Returns the subscription details.
    #[must_use]
    pub const fn subscription_information(&self) -> &SubscriptionInformation {
        &self.subscription_information
    }

    /// Returns the unresolved issues, highest precedence first.
    #[must_use]
    pub fn pending_issues(&self) -> &[LabelValue] {
        &self.pending_issues
    }

    /// Returns the provisioning steps in the order they were recorded.
    #[must_use]
    pub fn provisioning_details(&self) -> &[ProvisioningDetail] {
        &self.provisioning_details
    }

    /// Returns the captured agreement, if signed.
    #[must_use]
    pub const fn agreement_form_data(&self) -> Option<&AgreementFormData> {
        self.agreement_form_data.as_ref()
    }

    /// Returns the notes, oldest first.
    #[must_use]
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Returns the CPNI PIN, if set.
    #[must_use]
    pub fn cpni_pin(&self) -> Option<&str> {
        self.cpni_pin.as_deref()
    }

    /// Returns whether a persisted identity has been assigned.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Returns whether the agreement step has occurred.
    #[must_use]
    pub const fn agreement_signed(&self) -> bool {
        self.agreement_form_data.is_some()
    }

    /// Returns this order with a persisted identity.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::IdentityAlreadyAssigned` if the order already
    /// has an identity.
    pub fn with_id(mut self, id: i64) -> Result<Self, OrderError> {
        if let Some(existing) = self.id {
            return Err(OrderError::IdentityAlreadyAssigned { existing });
        }
        self.id = Some(id);
        Ok(self)
    }

    /// Returns this order with the given agreement captured.
    #[must_use]
    pub fn with_agreement(mut self, agreement: AgreementFormData) -> Self {
        self.agreement_form_data = Some(agreement);
        self
    }

    /// Returns this order handled by the given customer-service representative.
    #[must_use]
    pub const fn with_cs_rep_id(mut self, cs_rep_id: i64) -> Self {
        self.cs_rep_id = Some(cs_rep_id);
        self
    }

    /// Returns this order with the given promo code applied.
    #[must_use]
    pub const fn with_fiber_promo_code(mut self, code: i32) -> Self {
        self.fiber_promo_code = Some(code);
        self
    }

    /// Returns this order with one more pending issue at the end.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::MalformedSequence` if the issue has a blank label.
    pub fn appending_pending_issue(mut self, issue: LabelValue) -> Result<Self, OrderError> {
        check_element("pendingIssues", self.pending_issues.len(), &issue)?;
        self.pending_issues.push(issue);
        Ok(self)
    }

    /// Returns this order with one more provisioning step at the end.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::MalformedSequence` if the step name is blank.
    pub fn appending_provisioning_detail(
        mut self,
        detail: ProvisioningDetail,
    ) -> Result<Self, OrderError> {
        check_element(
            "provisioningDetails",
            self.provisioning_details.len(),
            &detail,
        )?;
        self.provisioning_details.push(detail);
        Ok(self)
    }

    /// Returns this order with one more note at the end.
    #[must_use]
    pub fn appending_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl Decode for Order {
    fn decode(reader: &mut FieldReader) -> Result<Self, OrderError> {
        Ok(Self {
            id: reader.optional("id")?,
            preorder_id: reader.optional("preorderId")?,
            dch_id: reader.optional("dchId")?,
            customer_id: reader.required("customerId")?,
            client_app: reader.optional("clientApp")?,
            fiber_promo_code: reader.optional("fiberPromoCode")?,
            cs_rep_id: reader.optional("csRepId")?,
            transaction_token: reader.optional("transactionToken")?,
            order_hash: reader.optional("orderHash")?,
            install_date_time: reader.optional("installDateTime")?,
            e_sign: reader.required("eSign")?,
            workflow_version: reader.required("workflowVersion")?,
            account_information: reader.record("accountInformation")?,
            subscription_information: reader.record("subscriptionInformation")?,
            pending_issues: reader.records("pendingIssues")?,
            provisioning_details: reader.records("provisioningDetails")?,
            agreement_form_data: reader.optional_record("agreementFormData")?,
            notes: reader.scalars("notes")?,
            cpni_pin: reader.optional("cpniPin")?,
        })
    }
}

const PENDING_ISSUE_KIND: FieldKind = FieldKind::Record(LabelValue::NAME);
const PROVISIONING_DETAIL_KIND: FieldKind = FieldKind::Record(ProvisioningDetail::NAME);

impl RecordShape for Order {
    const NAME: &'static str = "Order";
    const FIELDS: &'static [FieldShape] = &[
        FieldShape::optional("id", FieldKind::Int64),
        FieldShape::optional("preorderId", FieldKind::Int64),
        FieldShape::optional("dchId", FieldKind::Int64),
        FieldShape::required("customerId", FieldKind::Int64),
        FieldShape::optional("clientApp", FieldKind::Text),
        FieldShape::optional("fiberPromoCode", FieldKind::Int32),
        FieldShape::optional("csRepId", FieldKind::Int64),
        FieldShape::optional("transactionToken", FieldKind::Text),
        FieldShape::optional("orderHash", FieldKind::Text),
        FieldShape::optional("installDateTime", FieldKind::Text),
        FieldShape::required("eSign", FieldKind::Boolean),
        FieldShape::required("workflowVersion", FieldKind::Text),
        FieldShape::required(
            "accountInformation",
            FieldKind::Record(AccountInformation::NAME),
        ),
        FieldShape::required(
            "subscriptionInformation",
            FieldKind::Record(SubscriptionInformation::NAME),
        ),
        FieldShape::sequence("pendingIssues", &PENDING_ISSUE_KIND),
        FieldShape::sequence("provisioningDetails", &PROVISIONING_DETAIL_KIND),
        FieldShape::optional(
            "agreementFormData",
            FieldKind::Record(AgreementFormData::NAME),
        ),
        FieldShape::sequence("notes", &FieldKind::Text),
        FieldShape::optional("cpniPin", FieldKind::Text),
    ];
}

/// Builds an [`Order`] field by field.
///
/// Optional fields start absent and sequences start empty. [`build`] fails
/// if any mandatory field was never supplied.
///
/// [`build`]: OrderBuilder::build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBuilder {
    persisted_id: Option<i64>,
    id: Option<i64>,
    preorder_id: Option<i64>,
    dch_id: Option<i64>,
    customer_id: Option<i64>,
    client_app: Option<String>,
    fiber_promo_code: Option<i32>,
    cs_rep_id: Option<i64>,
    transaction_token: Option<String>,
    order_hash: Option<String>,
    install_date_time: Option<String>,
    e_sign: Option<bool>,
    workflow_version: Option<String>,
    account_information: Option<AccountInformation>,
    subscription_information: Option<SubscriptionInformation>,
    pending_issues: Vec<LabelValue>,
    provisioning_details: Vec<ProvisioningDetail>,
    agreement_form_data: Option<AgreementFormData>,
    notes: Vec<String>,
    cpni_pin: Option<String>,
}

impl OrderBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the persisted identity.
    #[must_use]
    pub const fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the originating preorder.
    #[must_use]
    pub const fn preorder_id(mut self, preorder_id: i64) -> Self {
        self.preorder_id = Some(preorder_id);
        self
    }

    /// Sets the distribution hub identifier.
    #[must_use]
    pub const fn dch_id(mut self, dch_id: i64) -> Self {
        self.dch_id = Some(dch_id);
        self
    }

    /// Sets the owning customer. Mandatory.
    #[must_use]
    pub const fn customer_id(mut self, customer_id: i64) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    /// Sets the originating client application.
    #[must_use]
    pub fn client_app(mut self, client_app: impl Into<String>) -> Self {
        self.client_app = Some(client_app.into());
        self
    }

    /// Sets the promo code.
    #[must_use]
    pub const fn fiber_promo_code(mut self, code: i32) -> Self {
        self.fiber_promo_code = Some(code);
        self
    }

    /// Sets the customer-service representative.
    #[must_use]
    pub const fn cs_rep_id(mut self, cs_rep_id: i64) -> Self {
        self.cs_rep_id = Some(cs_rep_id);
        self
    }

    /// Sets the payment transaction token.
    #[must_use]
    pub fn transaction_token(mut self, token: impl Into<String>) -> Self {
        self.transaction_token = Some(token.into());
        self
    }

    /// Sets the content fingerprint.
    #[must_use]
    pub fn order_hash(mut self, order_hash: impl Into<String>) -> Self {
        self.order_hash = Some(order_hash.into());
        self
    }

    /// Sets the scheduled installation time.
    #[must_use]
    pub fn install_date_time(mut self, install_date_time: impl Into<String>) -> Self {
        self.install_date_time = Some(install_date_time.into());
        self
    }

    /// Sets whether an electronic signature was captured. Mandatory.
    #[must_use]
    pub const fn e_sign(mut self, e_sign: bool) -> Self {
        self.e_sign = Some(e_sign);
        self
    }

    /// Sets the workflow version. Mandatory.
    #[must_use]
    pub fn workflow_version(mut self, workflow_version: impl Into<String>) -> Self {
        self.workflow_version = Some(workflow_version.into());
        self
    }

    /// Sets the account details. Mandatory.
    #[must_use]
    pub fn account_information(mut self, account: AccountInformation) -> Self {
        self.account_information = Some(account);
        self
    }

    /// Sets the subscription details. Mandatory.
    #[must_use]
    pub fn subscription_information(mut self, subscription: SubscriptionInformation) -> Self {
        self.subscription_information = Some(subscription);
        self
    }

    /// Replaces the pending issues.
    #[must_use]
    pub fn pending_issues(mut self, issues: Vec<LabelValue>) -> Self {
        self.pending_issues = issues;
        self
    }

    /// Appends one pending issue.
    #[must_use]
    pub fn pending_issue(mut self, issue: LabelValue) -> Self {
        self.pending_issues.push(issue);
        self
    }

    /// Replaces the provisioning details.
    #[must_use]
    pub fn provisioning_details(mut self, details: Vec<ProvisioningDetail>) -> Self {
        self.provisioning_details = details;
        self
    }

    /// Appends one provisioning detail.
    #[must_use]
    pub fn provisioning_detail(mut self, detail: ProvisioningDetail) -> Self {
        self.provisioning_details.push(detail);
        self
    }

    /// Sets the captured agreement.
    #[must_use]
    pub fn agreement_form_data(mut self, agreement: AgreementFormData) -> Self {
        self.agreement_form_data = Some(agreement);
        self
    }

    /// Replaces the notes.
    #[must_use]
    pub fn notes(mut self, notes: Vec<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Appends one note.
    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Sets the CPNI PIN.
    #[must_use]
    pub fn cpni_pin(mut self, cpni_pin: impl Into<String>) -> Self {
        self.cpni_pin = Some(cpni_pin.into());
        self
    }

    /// Builds the order.
    ///
    /// Mandatory fields are checked in wire order: `customerId`, `eSign`,
    /// `workflowVersion`, `accountInformation`, `subscriptionInformation`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A mandatory field was never supplied (`MissingRequiredField`)
    /// - A pending issue or provisioning detail breaks its contract
    ///   (`MalformedSequence`)
    /// - The builder came from a persisted order and its `id` was changed
    ///   (`IdentityAlreadyAssigned`)
    pub fn build(self) -> Result<Order, OrderError> {
        let customer_id: i64 = self
            .customer_id
            .ok_or_else(|| OrderError::missing("customerId"))?;
        let e_sign: bool = self.e_sign.ok_or_else(|| OrderError::missing("eSign"))?;
        let workflow_version: String = self
            .workflow_version
            .ok_or_else(|| OrderError::missing("workflowVersion"))?;
        let account_information: AccountInformation = self
            .account_information
            .ok_or_else(|| OrderError::missing("accountInformation"))?;
        let subscription_information: SubscriptionInformation = self
            .subscription_information
            .ok_or_else(|| OrderError::missing("subscriptionInformation"))?;

        if let Some(existing) = self
            .persisted_id
            .filter(|existing| self.id != Some(*existing))
        {
            return Err(OrderError::IdentityAlreadyAssigned { existing });
        }

        check_elements("pendingIssues", &self.pending_issues)?;
        check_elements("provisioningDetails", &self.provisioning_details)?;

        Ok(Order {
            id: self.id,
            preorder_id: self.preorder_id,
            dch_id: self.dch_id,
            customer_id,
            client_app: self.client_app,
            fiber_promo_code: self.fiber_promo_code,
            cs_rep_id: self.cs_rep_id,
            transaction_token: self.transaction_token,
            order_hash: self.order_hash,
            install_date_time: self.install_date_time,
            e_sign,
            workflow_version,
            account_information,
            subscription_information,
            pending_issues: self.pending_issues,
            provisioning_details: self.provisioning_details,
            agreement_form_data: self.agreement_form_data,
            notes: self.notes,
            cpni_pin: self.cpni_pin,
        })
    }
}
