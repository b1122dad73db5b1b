//! Resource Query Language (RQL) filter builder.
//!
//! This module provides a small, composable expression builder for the
//! textual filter protocol consumed by the marketplace API. Callers build
//! comparison leaves through [`RqlQuery::field`], combine them with the
//! `&`, `|` and `!` operators, and render the result into the query string
//! of a list request.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`RqlQuery`]: An immutable expression tree node (leaf or combinator)
//! - [`FieldRef`]: A dotted field-path builder that finalizes into a leaf
//! - [`RqlValue`]: Typed literal values with operator-aware encoding
//! - [`RqlError`]: Errors raised while building an expression
//!
//! # Example
//!
//! ```rust
//! use marketplace_sdk::rql::RqlQuery;
//!
//! let query = (RqlQuery::field("status").eq("active").unwrap()
//!     & RqlQuery::field("product.id").one_of(vec!["PRD-1", "PRD-2"]).unwrap())
//!     | !RqlQuery::field("marketplace.name").like("Test*").unwrap();
//!
//! assert_eq!(
//!     query.to_string(),
//!     "or(and(eq(status,active),in(product.id,(PRD-1,PRD-2))),not(and(like(marketplace.name,Test*))))"
//! );
//! ```
//!
//! # Wire format
//!
//! ```text
//! query       := expr | combinator
//! combinator  := OP "(" expr {"," expr} ")"
//! OP          := "and" | "or" | "any" | "all"
//! expr        := ["not("] leaf [")"] | ["not("] combinator [")"]
//! leaf        := CMPOP "(" field "," value ")"
//!              | LISTOP "(" field "," "(" value {"," value} ")" ")"
//! CMPOP       := "eq"|"ne"|"lt"|"le"|"gt"|"ge"|"like"|"ilike"
//! LISTOP      := "in"|"out"
//! field       := segment {"." segment}
//! ```
//!
//! Presence checks render as zero-argument pseudo-values inside a normal
//! `eq`/`ne` leaf: `eq(field,null())`, `ne(field,empty())`.
//!
//! The builder performs no I/O and holds no shared state; nodes are cheap
//! value objects meant to be composed and discarded per query.

mod keywords;
mod query;
mod value;

use thiserror::Error;

pub use query::{FieldRef, RqlOperator, RqlQuery};
pub use value::RqlValue;

/// Errors raised while building an RQL expression.
///
/// All failures are local and synchronous; an error always means the query
/// construction itself is wrong and must be fixed by the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RqlError {
    /// The value type cannot be rendered for the given operator.
    ///
    /// Scalar operators (`eq`, `lt`, `like`, ...) reject list values and
    /// list operators (`in`, `out`) reject scalars.
    #[error("Value of type {value_type} is not supported for the {op} operator")]
    UnsupportedType {
        /// The operator that rejected the value.
        op: &'static str,
        /// The name of the offending value type.
        value_type: &'static str,
    },
}
