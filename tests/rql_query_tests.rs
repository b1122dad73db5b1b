//! Integration tests for the RQL query builder.
//!
//! These tests exercise the public query-construction API end to end:
//! fluent field comparisons, boolean combinators, quantifiers, negation,
//! and the keyword-argument constructor.

use chrono::NaiveDate;
use marketplace_sdk::rql::{RqlError, RqlQuery, RqlValue};

// ============================================================================
// Fluent Builder Tests
// ============================================================================

#[test]
fn test_leaf_comparisons_render_wire_format() {
    let cases = [
        (RqlQuery::field("status").eq("active"), "eq(status,active)"),
        (RqlQuery::field("status").ne("failed"), "ne(status,failed)"),
        (RqlQuery::field("quantity").gt(10), "gt(quantity,10)"),
        (RqlQuery::field("quantity").le(100), "le(quantity,100)"),
        (RqlQuery::field("name").like("Test*"), "like(name,Test*)"),
        (RqlQuery::field("name").ilike("test*"), "ilike(name,test*)"),
    ];

    for (query, expected) in cases {
        assert_eq!(query.unwrap().to_string(), expected);
    }
}

#[test]
fn test_field_path_builds_with_dots() {
    let query = RqlQuery::field("product")
        .field("owner")
        .field("id")
        .eq("VA-123")
        .unwrap();

    assert_eq!(query.to_string(), "eq(product.owner.id,VA-123)");
}

#[test]
fn test_list_operators_render_parenthesized_values() {
    let query = RqlQuery::field("status")
        .one_of(vec!["active", "processing"])
        .unwrap();
    assert_eq!(query.to_string(), "in(status,(active,processing))");

    let query = RqlQuery::field("status")
        .out(vec!["terminated"])
        .unwrap();
    assert_eq!(query.to_string(), "out(status,(terminated))");
}

#[test]
fn test_sentinel_leaves_render_pseudo_values() {
    assert_eq!(
        RqlQuery::field("parent").null(true).to_string(),
        "eq(parent,null())"
    );
    assert_eq!(
        RqlQuery::field("parent").null(false).to_string(),
        "ne(parent,null())"
    );
    assert_eq!(
        RqlQuery::field("notes").empty(true).to_string(),
        "eq(notes,empty())"
    );
    assert_eq!(
        RqlQuery::field("notes").not_empty().to_string(),
        "ne(notes,empty())"
    );
}

#[test]
fn test_date_and_datetime_values_render_iso() {
    let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let query = RqlQuery::field("created").ge(date).unwrap();
    assert_eq!(query.to_string(), "ge(created,2024-05-01)");
}

// ============================================================================
// Combinator Tests
// ============================================================================

#[test]
fn test_and_or_combinators_flatten_one_level() {
    let a = RqlQuery::field("a").eq(1).unwrap();
    let b = RqlQuery::field("b").eq(2).unwrap();
    let c = RqlQuery::field("c").eq(3).unwrap();

    // Chained & flattens to a single and(...) rather than nesting
    let query = a.clone() & b.clone() & c;
    assert_eq!(query.to_string(), "and(eq(a,1),eq(b,2),eq(c,3))");

    let query = a | b;
    assert_eq!(query.to_string(), "or(eq(a,1),eq(b,2))");
}

#[test]
fn test_join_with_identical_operand_collapses() {
    let a = RqlQuery::field("a").eq(1).unwrap();

    let query = a.clone() & a.clone();
    assert_eq!(query.to_string(), "eq(a,1)");

    let query = a.clone() | a;
    assert_eq!(query.to_string(), "eq(a,1)");
}

#[test]
fn test_join_with_empty_is_identity() {
    let a = RqlQuery::field("a").eq(1).unwrap();

    assert_eq!((a.clone() & RqlQuery::new()).to_string(), "eq(a,1)");
    assert_eq!((RqlQuery::new() | a).to_string(), "eq(a,1)");
}

#[test]
fn test_negation_wraps_in_not() {
    let query = !RqlQuery::field("status").eq("failed").unwrap();
    assert_eq!(query.to_string(), "not(and(eq(status,failed)))");

    // Negating empty is a no-op
    let query = !RqlQuery::new();
    assert!(query.is_empty());
}

#[test]
fn test_quantifiers_wrap_collection_expressions() {
    let shipped = RqlQuery::field("items.status").eq("shipped").unwrap();

    assert_eq!(
        shipped.clone().any().to_string(),
        "any(eq(items.status,shipped))"
    );
    assert_eq!(shipped.all().to_string(), "all(eq(items.status,shipped))");

    // Quantifying nothing is a no-op
    assert!(RqlQuery::new().any().is_empty());
    assert!(RqlQuery::new().all().is_empty());
}

#[test]
fn test_composite_expression_renders_depth_first() {
    let active = RqlQuery::field("status").eq("active").unwrap();
    let products = RqlQuery::field("product.id")
        .one_of(vec!["PRD-1", "PRD-2"])
        .unwrap();
    let not_test = !RqlQuery::field("marketplace.name").like("Test*").unwrap();

    let query = (active & products) | not_test;
    assert_eq!(
        query.to_string(),
        "or(and(eq(status,active),in(product.id,(PRD-1,PRD-2))),not(and(like(marketplace.name,Test*))))"
    );
}

// ============================================================================
// Keyword-Argument Constructor Tests
// ============================================================================

#[test]
fn test_from_pairs_single_pair_is_bare_leaf() {
    let query = RqlQuery::from_pairs(vec![("status__eq", RqlValue::from("active"))]).unwrap();
    assert_eq!(query.to_string(), "eq(status,active)");
}

#[test]
fn test_from_pairs_multiple_pairs_wrap_in_and() {
    let query = RqlQuery::from_pairs(vec![
        ("status", RqlValue::from("active")),
        ("quantity__gt", RqlValue::from(10)),
    ])
    .unwrap();

    assert_eq!(query.to_string(), "and(eq(status,active),gt(quantity,10))");
}

#[test]
fn test_from_pairs_oneof_aliases_in() {
    let query = RqlQuery::from_pairs(vec![(
        "status__oneof",
        RqlValue::from(vec!["active", "processing"]),
    )])
    .unwrap();

    assert_eq!(query.to_string(), "in(status,(active,processing))");
}

#[test]
fn test_from_pairs_unknown_suffix_falls_back_to_path() {
    // An unrecognized trailing segment is part of the field path
    let query = RqlQuery::from_pairs(vec![("product__owner", RqlValue::from("VA-123"))]).unwrap();
    assert_eq!(query.to_string(), "eq(product.owner,VA-123)");
}

#[test]
fn test_from_pairs_sentinel_truthiness() {
    let query = RqlQuery::from_pairs(vec![("parent__null", RqlValue::from(true))]).unwrap();
    assert_eq!(query.to_string(), "eq(parent,null())");

    let query = RqlQuery::from_pairs(vec![("parent__null", RqlValue::from(false))]).unwrap();
    assert_eq!(query.to_string(), "ne(parent,null())");
}

// ============================================================================
// Type-Error Boundary Tests
// ============================================================================

#[test]
fn test_scalar_operator_rejects_list_value() {
    let result = RqlQuery::field("status").eq(vec!["a", "b"]);
    assert!(matches!(result, Err(RqlError::UnsupportedType { .. })));

    let result = RqlQuery::from_pairs(vec![("status__eq", RqlValue::from(vec!["a", "b"]))]);
    assert!(matches!(result, Err(RqlError::UnsupportedType { .. })));
}

#[test]
fn test_list_operator_rejects_scalar_value() {
    let result = RqlQuery::field("status").one_of("active");
    assert!(matches!(result, Err(RqlError::UnsupportedType { .. })));

    let result = RqlQuery::from_pairs(vec![("status__in", RqlValue::from("active"))]);
    assert!(matches!(result, Err(RqlError::UnsupportedType { .. })));
}

#[test]
fn test_unsupported_type_error_names_operator_and_type() {
    let error = RqlQuery::field("status").eq(vec!["a"]).unwrap_err();
    let message = error.to_string();

    assert!(message.contains("eq"));
    assert!(message.contains("list"));
}
