//! Keyword classification for `field__operator` style pairs.
//!
//! [`RqlQuery::from_pairs`](super::RqlQuery::from_pairs) accepts keys in a
//! double-underscore grammar where the trailing segment may name an
//! operator. This module owns the recognition table so the parsing logic
//! stays a pure lookup.

/// Operator class of a recognized trailing key segment.
///
/// Carries the wire-format operator name so callers never re-map aliases
/// (`oneof` is already resolved to `in` here).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum KeywordOp {
    /// Scalar comparison rendering as `op(field,value)`.
    Comparison(&'static str),
    /// Membership test rendering as `op(field,(v1,v2,...))`.
    List(&'static str),
    /// Presence check rendering as `eq(field,sentinel())` or
    /// `ne(field,sentinel())` depending on the value's truthiness.
    Sentinel(&'static str),
}

const COMPARISON_OPS: &[&str] = &["eq", "ne", "lt", "le", "gt", "ge", "like", "ilike"];
const LIST_OPS: &[&str] = &["in", "out"];
const SENTINEL_OPS: &[&str] = &["null", "empty"];

/// Classifies a trailing key segment as an operator keyword.
///
/// Returns `None` for anything unrecognized, in which case the caller must
/// treat the whole key as a literal field path.
pub(super) fn classify(segment: &str) -> Option<KeywordOp> {
    if segment == "oneof" {
        return Some(KeywordOp::List("in"));
    }
    if let Some(&op) = COMPARISON_OPS.iter().find(|&&op| op == segment) {
        return Some(KeywordOp::Comparison(op));
    }
    if let Some(&op) = LIST_OPS.iter().find(|&&op| op == segment) {
        return Some(KeywordOp::List(op));
    }
    SENTINEL_OPS
        .iter()
        .find(|&&op| op == segment)
        .map(|&op| KeywordOp::Sentinel(op))
}
