// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::ORDER_CASE_CLASSES;
use crate::{PropertyKind, PropertyType, SwaggerDoc, SwaggerError, parse_case_classes, parse_type};
use order_record_domain::{
    AccountInformation, AgreementFormData, LabelValue, Order, SubscriptionInformation,
};

#[test]
fn test_parse_type_primitive() {
    let parsed: PropertyType = parse_type("Long").unwrap();
    assert!(parsed.required);
    assert_eq!(
        parsed.kind,
        PropertyKind::Number {
            type_name: "integer",
            format: Some("int64"),
        }
    );
}

#[test]
fn test_parse_type_unknown_name_is_reference() {
    let parsed: PropertyType = parse_type("AccountInformation").unwrap();
    assert_eq!(
        parsed.kind,
        PropertyKind::Reference(String::from("AccountInformation"))
    );
}

#[test]
fn test_parse_type_option_is_not_required() {
    let parsed: PropertyType = parse_type("Option[String]").unwrap();
    assert!(!parsed.required);
    assert_eq!(parsed.kind, PropertyKind::Simple("string"));
}

#[test]
fn test_parse_type_array_containers() {
    for container in ["Array", "List", "ArrayBuffer", "Seq", "Vector"] {
        let parsed: PropertyType = parse_type(&format!("{container}[LabelValue]")).unwrap();
        assert!(parsed.required);
        assert_eq!(
            parsed.kind,
            PropertyKind::Array(Box::new(PropertyType::required(PropertyKind::Reference(
                String::from("LabelValue")
            ))))
        );
    }
}

#[test]
fn test_parse_type_optional_list_is_optional_array() {
    let parsed: PropertyType = parse_type("Option[List[String]]").unwrap();
    assert!(!parsed.required);
    assert_eq!(
        parsed.kind,
        PropertyKind::Array(Box::new(PropertyType::required(PropertyKind::Simple(
            "string"
        ))))
    );
}

#[test]
fn test_parse_type_ignores_whitespace() {
    assert_eq!(
        parse_type(" Option[ List[ Int ] ] ").unwrap(),
        parse_type("Option[List[Int]]").unwrap()
    );
}

#[test]
fn test_parse_type_unknown_generic_references_outer_name() {
    let parsed: PropertyType = parse_type("Map[String, Int]").unwrap();
    assert_eq!(parsed.kind, PropertyKind::Reference(String::from("Map")));
}

#[test]
fn test_parse_type_missing_subtype() {
    assert_eq!(
        parse_type("List[]"),
        Err(SwaggerError::MissingSubtype {
            expression: String::from("List[]"),
        })
    );
    assert!(matches!(
        parse_type("Option[String"),
        Err(SwaggerError::MissingSubtype { .. })
    ));
}

#[test]
fn test_parse_case_classes_reads_every_declaration() {
    let docs: Vec<SwaggerDoc> = parse_case_classes(ORDER_CASE_CLASSES).unwrap();
    let names: Vec<&str> = docs.iter().map(SwaggerDoc::name).collect();
    assert_eq!(
        names,
        vec![
            "LabelValue",
            "AccountInformation",
            "SubscriptionInformation",
            "AgreementFormData",
            "Order",
        ]
    );
}

#[test]
fn test_parsed_declarations_match_record_shapes() {
    let docs: Vec<SwaggerDoc> = parse_case_classes(ORDER_CASE_CLASSES).unwrap();
    assert_eq!(docs[0], SwaggerDoc::from_shape::<LabelValue>());
    assert_eq!(docs[1], SwaggerDoc::from_shape::<AccountInformation>());
    assert_eq!(docs[2], SwaggerDoc::from_shape::<SubscriptionInformation>());
    assert_eq!(docs[3], SwaggerDoc::from_shape::<AgreementFormData>());
    assert_eq!(docs[4], SwaggerDoc::from_shape::<Order>());
}

#[test]
fn test_parse_case_classes_strips_modifiers_and_defaults() {
    let docs: Vec<SwaggerDoc> =
        parse_case_classes("case class Note(val text: String = \"\", var pinned: Boolean = false)")
            .unwrap();
    let doc: &SwaggerDoc = &docs[0];
    let names: Vec<&str> = doc.properties().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["text", "pinned"]);
    assert_eq!(doc.required(), vec!["text", "pinned"]);
}

#[test]
fn test_parse_case_classes_strips_type_parameters_from_name() {
    let docs: Vec<SwaggerDoc> = parse_case_classes("case class Page[T](items: List[T])").unwrap();
    assert_eq!(docs[0].name(), "Page");
}

#[test]
fn test_parse_case_classes_allows_empty_parameter_list() {
    let docs: Vec<SwaggerDoc> = parse_case_classes("case class Marker()").unwrap();
    assert_eq!(docs[0].name(), "Marker");
    assert!(docs[0].properties().is_empty());
}

#[test]
fn test_parse_case_classes_without_declarations() {
    assert!(parse_case_classes("object Nothing").unwrap().is_empty());
    assert!(parse_case_classes("").unwrap().is_empty());
}

#[test]
fn test_parse_case_classes_rejects_missing_parameter_list() {
    assert!(matches!(
        parse_case_classes("case class Broken"),
        Err(SwaggerError::EmptyDeclaration { .. })
    ));
}

#[test]
fn test_parse_case_classes_rejects_missing_name() {
    assert!(matches!(
        parse_case_classes("case class (a: Int)"),
        Err(SwaggerError::EmptyDeclaration { .. })
    ));
}

#[test]
fn test_parse_case_classes_rejects_untyped_parameter() {
    assert_eq!(
        parse_case_classes("case class Broken(a: Int, b)"),
        Err(SwaggerError::MalformedParameter {
            class_name: String::from("Broken"),
            parameter: String::from("b"),
        })
    );
}

#[test]
fn test_parse_case_classes_propagates_type_errors() {
    assert!(matches!(
        parse_case_classes("case class Broken(items: List[])"),
        Err(SwaggerError::MissingSubtype { .. })
    ));
}

#[test]
fn test_parse_case_classes_rejects_mismatched_brackets() {
    let declaration: &str = "case class Foo(a: Int]";
    assert_eq!(
        parse_case_classes(declaration),
        Err(SwaggerError::EmptyDeclaration {
            declaration: String::from("Foo(a: Int]"),
        })
    );
    assert!(matches!(
        parse_case_classes("case class Foo(items: List[Int)]"),
        Err(SwaggerError::EmptyDeclaration { .. })
    ));
}

#[test]
fn test_parse_case_classes_rejects_duplicate_parameter() {
    assert_eq!(
        parse_case_classes("case class Foo(a: Int, val a: String = \"\")"),
        Err(SwaggerError::MalformedParameter {
            class_name: String::from("Foo"),
            parameter: String::from("val a: String = \"\""),
        })
    );
}
