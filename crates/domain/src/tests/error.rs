// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::OrderError;

#[test]
fn test_order_error_display() {
    let err: OrderError = OrderError::MissingRequiredField {
        field: String::from("customerId"),
    };
    assert_eq!(format!("{err}"), "Missing required field 'customerId'");

    let err: OrderError = OrderError::TypeMismatch {
        field: String::from("eSign"),
        expected: "boolean",
        found: "string",
    };
    assert_eq!(
        format!("{err}"),
        "Type mismatch for field 'eSign': expected boolean, found string"
    );

    let err: OrderError = OrderError::MalformedSequence {
        field: String::from("pendingIssues"),
        index: 2,
        reason: String::from("label cannot be blank"),
    };
    assert_eq!(
        format!("{err}"),
        "Malformed element 2 in 'pendingIssues': label cannot be blank"
    );

    let err: OrderError = OrderError::IdentityAlreadyAssigned { existing: 7 };
    assert_eq!(format!("{err}"), "Order already has persisted identity 7");

    let err: OrderError = OrderError::InvalidDocument(String::from("EOF"));
    assert_eq!(format!("{err}"), "Invalid order document: EOF");

    let err: OrderError = OrderError::Serialization(String::from("boom"));
    assert_eq!(format!("{err}"), "Serialization error: boom");
}

#[test]
fn test_order_error_field() {
    let err: OrderError = OrderError::MissingRequiredField {
        field: String::from("accountInformation.firstName"),
    };
    assert_eq!(err.field(), Some("accountInformation.firstName"));

    let err: OrderError = OrderError::IdentityAlreadyAssigned { existing: 1 };
    assert_eq!(err.field(), Some("id"));

    let err: OrderError = OrderError::InvalidDocument(String::from("x"));
    assert_eq!(err.field(), None);
}

#[test]
fn test_order_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(OrderError::InvalidDocument(String::from("x")));
    assert_eq!(err.to_string(), "Invalid order document: x");
}
