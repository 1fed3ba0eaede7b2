// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::OrderError;
use crate::label_value::LabelValue;
use crate::order::Order;
use crate::provisioning::ProvisioningDetail;

/// The structural contract a sequence element must satisfy.
///
/// Contracts are purely structural. They never check formats.
pub trait ElementContract {
    /// Checks this element.
    ///
    /// # Errors
    ///
    /// Returns a description of the first broken rule.
    fn check(&self) -> Result<(), String>;
}

impl ElementContract for LabelValue {
    fn check(&self) -> Result<(), String> {
        // Rule: an issue must say what it is about
        if self.label.trim().is_empty() {
            return Err(String::from("label cannot be blank"));
        }
        Ok(())
    }
}

impl ElementContract for ProvisioningDetail {
    fn check(&self) -> Result<(), String> {
        // Rule: a provisioning step must be named
        if self.step.trim().is_empty() {
            return Err(String::from("step cannot be blank"));
        }
        Ok(())
    }
}

/// Checks one element that sits (or will sit) at `index` of `field`.
pub fn check_element<T: ElementContract>(
    field: &str,
    index: usize,
    element: &T,
) -> Result<(), OrderError> {
    element
        .check()
        .map_err(|reason| OrderError::MalformedSequence {
            field: field.to_string(),
            index,
            reason,
        })
}

/// Checks every element of `field`, reporting the first violation.
pub fn check_elements<T: ElementContract>(
    field: &str,
    elements: &[T],
) -> Result<(), OrderError> {
    elements
        .iter()
        .enumerate()
        .try_for_each(|(index, element)| check_element(field, index, element))
}

/// Validates the structural contracts of an order's sequence elements.
///
/// Orders built through [`crate::OrderBuilder`] or decoded through the
/// codec already satisfy these rules. This is for callers that receive
/// an `Order` from elsewhere and want to re-check it.
///
/// # Arguments
///
/// * `order` - The order to validate
///
/// # Returns
///
/// * `Ok(())` if every element satisfies its contract
/// * `Err(OrderError::MalformedSequence)` naming the first offending element
///
/// # Errors
///
/// Returns an error if:
/// - A pending issue has a blank label
/// - A provisioning detail has a blank step name
pub fn validate_order(order: &Order) -> Result<(), OrderError> {
    check_elements("pendingIssues", order.pending_issues())?;
    check_elements("provisioningDetails", order.provisioning_details())?;
    Ok(())
}
