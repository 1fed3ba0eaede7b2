// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::create_full_order;
use crate::{FieldKind, Order, Presence, RecordDescriptor, RecordShape, record_shapes};
use serde_json::Value;

#[test]
fn test_order_shape_required_fields() {
    let required: Vec<&str> = Order::descriptor().required_fields().collect();
    assert_eq!(
        required,
        vec![
            "customerId",
            "eSign",
            "workflowVersion",
            "accountInformation",
            "subscriptionInformation",
            "pendingIssues",
            "provisioningDetails",
            "notes",
        ]
    );
}

#[test]
fn test_order_shape_sequences_default_empty() {
    let descriptor: RecordDescriptor = Order::descriptor();
    for name in ["pendingIssues", "provisioningDetails", "notes"] {
        let field = descriptor.field(name).unwrap();
        assert_eq!(field.presence, Presence::DefaultEmpty);
        assert!(matches!(field.kind, FieldKind::Sequence(_)));
    }
}

#[test]
fn test_order_shape_kinds() {
    let descriptor: RecordDescriptor = Order::descriptor();
    assert_eq!(descriptor.field("fiberPromoCode").unwrap().kind, FieldKind::Int32);
    assert_eq!(descriptor.field("customerId").unwrap().kind, FieldKind::Int64);
    assert_eq!(descriptor.field("eSign").unwrap().kind, FieldKind::Boolean);
    assert_eq!(
        descriptor.field("agreementFormData").unwrap().kind,
        FieldKind::Record("AgreementFormData")
    );
    assert_eq!(
        descriptor.field("pendingIssues").unwrap().kind,
        FieldKind::Sequence(&FieldKind::Record("LabelValue"))
    );
    assert!(descriptor.field("missing").is_none());
}

#[test]
fn test_order_shape_matches_serialized_names() {
    let value: Value = create_full_order().to_value().unwrap();
    let object = value.as_object().unwrap();
    let descriptor: RecordDescriptor = Order::descriptor();

    assert_eq!(object.len(), descriptor.fields.len());
    for field in descriptor.fields {
        assert!(object.contains_key(field.name), "{} not serialized", field.name);
    }
}

#[test]
fn test_nested_shapes_match_serialized_names() {
    let value: Value = create_full_order().to_value().unwrap();
    let nested: [(&str, RecordDescriptor); 2] = [
        ("accountInformation", crate::AccountInformation::descriptor()),
        ("agreementFormData", crate::AgreementFormData::descriptor()),
    ];
    for (name, descriptor) in nested {
        let object = value[name].as_object().unwrap();
        assert_eq!(object.len(), descriptor.fields.len(), "{name}");
        for field in descriptor.fields {
            assert!(object.contains_key(field.name), "{name}.{}", field.name);
        }
    }
}

#[test]
fn test_record_shapes_lists_every_record_root_last() {
    let names: Vec<&str> = record_shapes().iter().map(|record| record.name).collect();
    assert_eq!(
        names,
        vec![
            "LabelValue",
            "ProvisioningDetail",
            "AccountInformation",
            "SubscriptionInformation",
            "AgreementFormData",
            "Order",
        ]
    );
}

#[test]
fn test_every_record_reference_resolves() {
    let shapes: [RecordDescriptor; 6] = record_shapes();
    for record in &shapes {
        for field in record.fields {
            let kind: FieldKind = match field.kind {
                FieldKind::Sequence(inner) => *inner,
                other => other,
            };
            if let FieldKind::Record(name) = kind {
                assert!(
                    shapes.iter().any(|candidate| candidate.name == name),
                    "{}.{} refers to unknown record {name}",
                    record.name,
                    field.name
                );
            }
        }
    }
}
