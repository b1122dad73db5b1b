//! The RQL expression tree and the fluent field builder.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use super::keywords::{self, KeywordOp};
use super::{RqlError, RqlValue};

/// Node kinds in an RQL expression tree.
///
/// `Expression` marks a leaf holding rendered comparison text; the other
/// four are combinators over child nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RqlOperator {
    /// A leaf comparison such as `eq(status,active)`.
    Expression,
    /// Logical conjunction.
    And,
    /// Logical disjunction.
    Or,
    /// Collection quantifier: at least one element matches.
    Any,
    /// Collection quantifier: every element matches.
    All,
}

impl RqlOperator {
    /// The wire-format name of a combinator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expression => "expression",
            Self::And => "and",
            Self::Or => "or",
            Self::Any => "any",
            Self::All => "all",
        }
    }
}

/// An immutable node in an RQL filter expression.
///
/// A node is either a leaf holding rendered comparison text, or a
/// combinator over child nodes. Nodes compare structurally: operator,
/// children (in order), negation flag and leaf text must all match. Trees
/// are composed with the `&`, `|` and `!` operators and rendered with
/// [`Display`](fmt::Display).
///
/// The default value is the empty query, which renders as an empty string
/// and acts as the identity for `&` and `|`.
///
/// # Example
///
/// ```rust
/// use marketplace_sdk::rql::RqlQuery;
///
/// let active = RqlQuery::field("status").eq("active")?;
/// let visible = RqlQuery::field("visibility.listing").eq(true)?;
/// assert_eq!(
///     (active & visible).to_string(),
///     "and(eq(status,active),eq(visibility.listing,true))"
/// );
/// # Ok::<(), marketplace_sdk::rql::RqlError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RqlQuery {
    op: RqlOperator,
    children: Vec<RqlQuery>,
    negated: bool,
    expr: Option<String>,
}

impl Default for RqlQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl RqlQuery {
    /// Creates the empty query.
    ///
    /// The empty query renders as an empty string and combining it with any
    /// other query returns that other query unchanged.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            op: RqlOperator::Expression,
            children: Vec::new(),
            negated: false,
            expr: None,
        }
    }

    /// Starts a leaf expression for the given field path.
    ///
    /// The path may already be dotted (`"product.id"`) or built up segment
    /// by segment with [`FieldRef::field`]. The returned [`FieldRef`] is
    /// not yet a query; calling one of its comparison methods produces the
    /// leaf.
    #[must_use]
    pub fn field(path: impl Into<String>) -> FieldRef {
        FieldRef::new(path)
    }

    /// Builds a query from `(key, value)` pairs in the double-underscore
    /// key grammar.
    ///
    /// Each key is split on `__`; a recognized trailing segment selects the
    /// operator and the remaining segments form the dotted field path.
    /// Unrecognized trailing segments are not an error: the whole key is
    /// treated as a field path (with `__` mapped to `.`) under an `eq`
    /// comparison. Zero pairs produce the empty query, a single pair
    /// produces a bare leaf, and multiple pairs are conjoined under a
    /// single `and` node in input order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use marketplace_sdk::rql::{RqlQuery, RqlValue};
    ///
    /// let query = RqlQuery::from_pairs([
    ///     ("status".to_string(), RqlValue::from("active")),
    ///     ("quantity__gt".to_string(), RqlValue::from(10)),
    ///     ("product__id__in".to_string(), RqlValue::from(vec!["PRD-1", "PRD-2"])),
    /// ])?;
    /// assert_eq!(
    ///     query.to_string(),
    ///     "and(eq(status,active),gt(quantity,10),in(product.id,(PRD-1,PRD-2)))"
    /// );
    /// # Ok::<(), marketplace_sdk::rql::RqlError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RqlError::UnsupportedType`] when a value does not fit its
    /// operator, such as a list under `eq` or a scalar under `in`.
    pub fn from_pairs<K, I>(pairs: I) -> Result<Self, RqlError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, RqlValue)>,
    {
        let mut leaves = Vec::new();
        for (key, value) in pairs {
            leaves.push(Self::pair_leaf(&key.into(), value)?);
        }
        if leaves.len() == 1 {
            return Ok(leaves.remove(0));
        }
        if leaves.is_empty() {
            return Ok(Self::new());
        }
        Ok(Self {
            op: RqlOperator::And,
            children: leaves,
            negated: false,
            expr: None,
        })
    }

    fn pair_leaf(key: &str, value: RqlValue) -> Result<Self, RqlError> {
        let segments: Vec<&str> = key.split("__").collect();
        if segments.len() > 1 {
            if let Some(keyword) = keywords::classify(segments[segments.len() - 1]) {
                let field = segments[..segments.len() - 1].join(".");
                return match keyword {
                    KeywordOp::Comparison(op) => Ok(Self::leaf(format!(
                        "{op}({field},{})",
                        value.encode_scalar(op)?
                    ))),
                    KeywordOp::List(op) => Ok(Self::leaf(format!(
                        "{op}({field},({}))",
                        value.encode_list(op)?
                    ))),
                    KeywordOp::Sentinel(sentinel) => {
                        let cmp = if value.is_truthy() { "eq" } else { "ne" };
                        Ok(Self::leaf(format!("{cmp}({field},{sentinel}())")))
                    }
                };
            }
        }
        let field = key.replace("__", ".");
        Ok(Self::leaf(format!("eq({field},{})", value.encode_scalar("eq")?)))
    }

    fn leaf(expr: String) -> Self {
        Self {
            op: RqlOperator::Expression,
            children: Vec::new(),
            negated: false,
            expr: Some(expr),
        }
    }

    /// Whether this is the empty query.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expr.is_none() && self.children.is_empty()
    }

    /// Wraps this query in the `any` collection quantifier.
    ///
    /// `any` matches when at least one element of a collection field
    /// satisfies the inner expression. Wrapping the empty query is a no-op.
    #[must_use]
    pub fn any(self) -> Self {
        self.quantify(RqlOperator::Any)
    }

    /// Wraps this query in the `all` collection quantifier.
    ///
    /// `all` matches when every element of a collection field satisfies the
    /// inner expression. Wrapping the empty query is a no-op.
    #[must_use]
    pub fn all(self) -> Self {
        self.quantify(RqlOperator::All)
    }

    fn quantify(self, op: RqlOperator) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            op,
            children: vec![self],
            negated: false,
            expr: None,
        }
    }

    /// Joins two trees under a combinator.
    ///
    /// Identical operands collapse to one (`X & X == X`) and the empty
    /// query is an identity. Otherwise a fresh combinator node is built and
    /// both operands are appended into it, splicing one level of matching
    /// non-negated combinators so `(A & B) & C` renders as `and(A,B,C)`
    /// rather than nesting.
    fn join(self, other: Self, op: RqlOperator) -> Self {
        if self == other {
            return self;
        }
        if other.is_empty() {
            return self;
        }
        if self.is_empty() {
            return other;
        }
        let mut joined = Self {
            op,
            children: Vec::new(),
            negated: false,
            expr: None,
        };
        joined.append(self);
        joined.append(other);
        joined
    }

    /// Appends a node to this combinator's children.
    ///
    /// Nodes already present (structurally) are dropped. A non-negated
    /// combinator with the same operator is spliced: its children are
    /// adopted directly instead of nesting. Leaves, negated nodes and
    /// combinators with a different operator are pushed whole. Splicing is
    /// one level deep only.
    fn append(&mut self, node: Self) {
        if self.children.contains(&node) {
            return;
        }
        if node.op == self.op && !node.negated && node.expr.is_none() {
            self.children.extend(node.children);
        } else {
            self.children.push(node);
        }
    }

    fn render(&self) -> String {
        if let Some(expr) = &self.expr {
            if self.negated {
                return format!("not({expr})");
            }
            return expr.clone();
        }
        if self.children.is_empty() {
            return String::new();
        }
        let tokens: Vec<String> = self.children.iter().map(Self::render).collect();
        let body = format!("{}({})", self.op.as_str(), tokens.join(","));
        if self.negated {
            format!("not({body})")
        } else {
            body
        }
    }
}

impl fmt::Display for RqlQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl BitAnd for RqlQuery {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.join(rhs, RqlOperator::And)
    }
}

impl BitOr for RqlQuery {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.join(rhs, RqlOperator::Or)
    }
}

impl Not for RqlQuery {
    type Output = Self;

    /// Negates a query by wrapping it in a negated `and` node, rendering
    /// as `not(and(...))`. A non-negated `and` operand contributes its
    /// children directly, so `!(a & b)` renders `not(and(a,b))` rather
    /// than nesting. Negating the empty query is a no-op.
    fn not(self) -> Self {
        if self.is_empty() {
            return self;
        }
        let mut wrapper = Self {
            op: RqlOperator::And,
            children: Vec::new(),
            negated: true,
            expr: None,
        };
        wrapper.append(self);
        wrapper
    }
}

/// A dotted field path awaiting a comparison.
///
/// Created with [`RqlQuery::field`]; extended with [`FieldRef::field`];
/// consumed by a comparison method that renders the leaf. Because every
/// comparison takes the builder by value, a finalized leaf can never be
/// extended or re-finalized.
#[derive(Debug, Clone)]
pub struct FieldRef {
    path: Vec<String>,
}

impl FieldRef {
    fn new(path: impl Into<String>) -> Self {
        let mut field = Self { path: Vec::new() };
        field.push(&path.into());
        field
    }

    fn push(&mut self, path: &str) {
        self.path.extend(path.split('.').map(str::to_string));
    }

    /// Appends a path segment (or dotted sub-path).
    ///
    /// `RqlQuery::field("product").field("id")` and
    /// `RqlQuery::field("product.id")` build the same leaf.
    #[must_use]
    pub fn field(mut self, path: impl Into<String>) -> Self {
        self.push(&path.into());
        self
    }

    fn dotted(&self) -> String {
        self.path.join(".")
    }

    fn compare(self, op: &'static str, value: impl Into<RqlValue>) -> Result<RqlQuery, RqlError> {
        let value = value.into();
        Ok(RqlQuery::leaf(format!(
            "{op}({},{})",
            self.dotted(),
            value.encode_scalar(op)?
        )))
    }

    fn compare_list(
        self,
        op: &'static str,
        values: impl Into<RqlValue>,
    ) -> Result<RqlQuery, RqlError> {
        let values = values.into();
        Ok(RqlQuery::leaf(format!(
            "{op}({},({}))",
            self.dotted(),
            values.encode_list(op)?
        )))
    }

    fn sentinel(self, sentinel: &str, truthy: bool) -> RqlQuery {
        let cmp = if truthy { "eq" } else { "ne" };
        RqlQuery::leaf(format!("{cmp}({},{sentinel}())", self.dotted()))
    }

    /// Renders an `eq(field,value)` leaf.
    ///
    /// # Errors
    ///
    /// Returns [`RqlError::UnsupportedType`] for list values.
    pub fn eq(self, value: impl Into<RqlValue>) -> Result<RqlQuery, RqlError> {
        self.compare("eq", value)
    }

    /// Renders a `ne(field,value)` leaf.
    ///
    /// # Errors
    ///
    /// Returns [`RqlError::UnsupportedType`] for list values.
    pub fn ne(self, value: impl Into<RqlValue>) -> Result<RqlQuery, RqlError> {
        self.compare("ne", value)
    }

    /// Renders an `lt(field,value)` leaf.
    ///
    /// # Errors
    ///
    /// Returns [`RqlError::UnsupportedType`] for list values.
    pub fn lt(self, value: impl Into<RqlValue>) -> Result<RqlQuery, RqlError> {
        self.compare("lt", value)
    }

    /// Renders an `le(field,value)` leaf.
    ///
    /// # Errors
    ///
    /// Returns [`RqlError::UnsupportedType`] for list values.
    pub fn le(self, value: impl Into<RqlValue>) -> Result<RqlQuery, RqlError> {
        self.compare("le", value)
    }

    /// Renders a `gt(field,value)` leaf.
    ///
    /// # Errors
    ///
    /// Returns [`RqlError::UnsupportedType`] for list values.
    pub fn gt(self, value: impl Into<RqlValue>) -> Result<RqlQuery, RqlError> {
        self.compare("gt", value)
    }

    /// Renders a `ge(field,value)` leaf.
    ///
    /// # Errors
    ///
    /// Returns [`RqlError::UnsupportedType`] for list values.
    pub fn ge(self, value: impl Into<RqlValue>) -> Result<RqlQuery, RqlError> {
        self.compare("ge", value)
    }

    /// Renders a case-sensitive `like(field,pattern)` leaf. Patterns use
    /// `*` wildcards and are passed through verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`RqlError::UnsupportedType`] for list values.
    pub fn like(self, pattern: impl Into<RqlValue>) -> Result<RqlQuery, RqlError> {
        self.compare("like", pattern)
    }

    /// Renders a case-insensitive `ilike(field,pattern)` leaf.
    ///
    /// # Errors
    ///
    /// Returns [`RqlError::UnsupportedType`] for list values.
    pub fn ilike(self, pattern: impl Into<RqlValue>) -> Result<RqlQuery, RqlError> {
        self.compare("ilike", pattern)
    }

    /// Renders an `in(field,(v1,v2,...))` membership leaf.
    ///
    /// The trailing underscore avoids the `in` keyword; [`FieldRef::one_of`]
    /// is an alias.
    ///
    /// # Errors
    ///
    /// Returns [`RqlError::UnsupportedType`] for non-list values.
    pub fn in_(self, values: impl Into<RqlValue>) -> Result<RqlQuery, RqlError> {
        self.compare_list("in", values)
    }

    /// Alias for [`FieldRef::in_`].
    ///
    /// # Errors
    ///
    /// Returns [`RqlError::UnsupportedType`] for non-list values.
    pub fn one_of(self, values: impl Into<RqlValue>) -> Result<RqlQuery, RqlError> {
        self.compare_list("in", values)
    }

    /// Renders an `out(field,(v1,v2,...))` exclusion leaf.
    ///
    /// # Errors
    ///
    /// Returns [`RqlError::UnsupportedType`] for non-list values.
    pub fn out(self, values: impl Into<RqlValue>) -> Result<RqlQuery, RqlError> {
        self.compare_list("out", values)
    }

    /// Renders a null-presence leaf: `eq(field,null())` when `value` is
    /// true, `ne(field,null())` otherwise.
    #[must_use]
    pub fn null(self, value: bool) -> RqlQuery {
        self.sentinel("null", value)
    }

    /// Renders an emptiness leaf: `eq(field,empty())` when `value` is
    /// true, `ne(field,empty())` otherwise.
    #[must_use]
    pub fn empty(self, value: bool) -> RqlQuery {
        self.sentinel("empty", value)
    }

    /// Shorthand for [`FieldRef::empty`] with `false`.
    #[must_use]
    pub fn not_empty(self) -> RqlQuery {
        self.sentinel("empty", false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn leaf(field: &str, value: &str) -> RqlQuery {
        RqlQuery::field(field).eq(value).unwrap()
    }

    fn hash_of(query: &RqlQuery) -> u64 {
        let mut hasher = DefaultHasher::new();
        query.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_empty_query_renders_empty_string() {
        assert_eq!(RqlQuery::new().to_string(), "");
        assert!(RqlQuery::default().is_empty());
    }

    #[test]
    fn test_single_leaf_renders_bare() {
        assert_eq!(leaf("status", "active").to_string(), "eq(status,active)");
    }

    #[test]
    fn test_field_segments_equal_dotted_path() {
        let segmented = RqlQuery::field("product").field("id").eq("PRD-1").unwrap();
        let dotted = RqlQuery::field("product.id").eq("PRD-1").unwrap();
        assert_eq!(segmented, dotted);
        assert_eq!(segmented.to_string(), "eq(product.id,PRD-1)");
    }

    #[test]
    fn test_comparison_operators_render_their_keyword() {
        assert_eq!(
            RqlQuery::field("quantity").gt(10).unwrap().to_string(),
            "gt(quantity,10)"
        );
        assert_eq!(
            RqlQuery::field("quantity").le(100).unwrap().to_string(),
            "le(quantity,100)"
        );
        assert_eq!(
            RqlQuery::field("name").ilike("acme*").unwrap().to_string(),
            "ilike(name,acme*)"
        );
    }

    #[test]
    fn test_membership_operators_wrap_values_in_parens() {
        assert_eq!(
            RqlQuery::field("status")
                .one_of(vec!["pending", "active"])
                .unwrap()
                .to_string(),
            "in(status,(pending,active))"
        );
        assert_eq!(
            RqlQuery::field("status")
                .out(vec!["deleted"])
                .unwrap()
                .to_string(),
            "out(status,(deleted))"
        );
    }

    #[test]
    fn test_in_is_an_alias_for_one_of() {
        let a = RqlQuery::field("status").in_(vec!["active"]).unwrap();
        let b = RqlQuery::field("status").one_of(vec!["active"]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_membership_rejects_scalar_value() {
        let result = RqlQuery::field("status").one_of("active");
        assert_eq!(
            result,
            Err(RqlError::UnsupportedType {
                op: "in",
                value_type: "string",
            })
        );
    }

    #[test]
    fn test_comparison_rejects_list_value() {
        let result = RqlQuery::field("status").eq(vec!["a", "b"]);
        assert_eq!(
            result,
            Err(RqlError::UnsupportedType {
                op: "eq",
                value_type: "list",
            })
        );
    }

    #[test]
    fn test_null_and_empty_sentinels() {
        assert_eq!(
            RqlQuery::field("parent.id").null(true).to_string(),
            "eq(parent.id,null())"
        );
        assert_eq!(
            RqlQuery::field("parent.id").null(false).to_string(),
            "ne(parent.id,null())"
        );
        assert_eq!(
            RqlQuery::field("tags").empty(true).to_string(),
            "eq(tags,empty())"
        );
        assert_eq!(
            RqlQuery::field("tags").not_empty().to_string(),
            "ne(tags,empty())"
        );
    }

    #[test]
    fn test_and_or_render_combinators() {
        let a = leaf("a", "1");
        let b = leaf("b", "2");
        assert_eq!((a.clone() & b.clone()).to_string(), "and(eq(a,1),eq(b,2))");
        assert_eq!((a | b).to_string(), "or(eq(a,1),eq(b,2))");
    }

    #[test]
    fn test_join_identical_operands_collapses() {
        let a = leaf("a", "1");
        assert_eq!(a.clone() & a.clone(), a.clone());
        assert_eq!(a.clone() | a.clone(), a);
    }

    #[test]
    fn test_join_with_empty_is_identity() {
        let a = leaf("a", "1");
        assert_eq!(a.clone() & RqlQuery::new(), a.clone());
        assert_eq!(RqlQuery::new() & a.clone(), a.clone());
        assert_eq!(RqlQuery::new() | a.clone(), a);
    }

    #[test]
    fn test_same_operator_join_flattens_one_level() {
        let a = leaf("a", "1");
        let b = leaf("b", "2");
        let c = leaf("c", "3");
        let joined = (a & b) & c;
        assert_eq!(joined.to_string(), "and(eq(a,1),eq(b,2),eq(c,3))");
    }

    #[test]
    fn test_mixed_operator_join_nests() {
        let a = leaf("a", "1");
        let b = leaf("b", "2");
        let c = leaf("c", "3");
        let joined = (a | b) & c;
        assert_eq!(joined.to_string(), "and(or(eq(a,1),eq(b,2)),eq(c,3))");
    }

    #[test]
    fn test_duplicate_child_dropped_on_join() {
        let a = leaf("a", "1");
        let b = leaf("b", "2");
        let joined = (a.clone() & b) & a;
        assert_eq!(joined.to_string(), "and(eq(a,1),eq(b,2))");
    }

    #[test]
    fn test_negation_wraps_in_not_and() {
        let negated = !leaf("status", "active");
        assert_eq!(negated.to_string(), "not(and(eq(status,active)))");
    }

    #[test]
    fn test_negated_and_adopts_the_operands_children() {
        let a = leaf("a", "1");
        let b = leaf("b", "2");
        let negated = !(a & b);
        assert_eq!(negated.to_string(), "not(and(eq(a,1),eq(b,2)))");
    }

    #[test]
    fn test_double_negation_nests_rather_than_collapsing() {
        let twice = !!leaf("status", "active");
        assert_eq!(
            twice.to_string(),
            "not(and(not(and(eq(status,active)))))"
        );
    }

    #[test]
    fn test_negated_combinator_renders_not_around_body() {
        let a = leaf("a", "1");
        let b = leaf("b", "2");
        let negated = !(a | b);
        assert_eq!(negated.to_string(), "not(and(or(eq(a,1),eq(b,2))))");
    }

    #[test]
    fn test_negated_node_is_not_spliced_on_join() {
        let a = leaf("a", "1");
        let b = leaf("b", "2");
        let c = leaf("c", "3");
        let joined = !(a & b) & c;
        assert_eq!(
            joined.to_string(),
            "and(not(and(eq(a,1),eq(b,2))),eq(c,3))"
        );
    }

    #[test]
    fn test_negating_empty_is_a_no_op() {
        assert_eq!((!RqlQuery::new()).to_string(), "");
    }

    #[test]
    fn test_any_and_all_quantifiers_wrap() {
        let inner = leaf("items.status", "shipped");
        assert_eq!(
            inner.clone().any().to_string(),
            "any(eq(items.status,shipped))"
        );
        assert_eq!(inner.all().to_string(), "all(eq(items.status,shipped))");
    }

    #[test]
    fn test_quantifiers_append_whole_under_and() {
        let a = leaf("items.a", "1").any();
        let b = leaf("items.b", "2").any();
        let joined = a & b;
        assert_eq!(
            joined.to_string(),
            "and(any(eq(items.a,1)),any(eq(items.b,2)))"
        );
    }

    #[test]
    fn test_quantifying_empty_is_a_no_op() {
        assert!(RqlQuery::new().any().is_empty());
        assert!(RqlQuery::new().all().is_empty());
    }

    #[test]
    fn test_structural_equality_is_order_sensitive() {
        let a = leaf("a", "1");
        let b = leaf("b", "2");
        assert_ne!(a.clone() & b.clone(), b & a);
    }

    #[test]
    fn test_equal_trees_hash_equal() {
        let left = leaf("a", "1") & leaf("b", "2");
        let right = leaf("a", "1") & leaf("b", "2");
        assert_eq!(left, right);
        assert_eq!(hash_of(&left), hash_of(&right));
    }

    #[test]
    fn test_from_pairs_empty_and_single() {
        let empty = RqlQuery::from_pairs(Vec::<(String, RqlValue)>::new()).unwrap();
        assert!(empty.is_empty());

        let single =
            RqlQuery::from_pairs([("status", RqlValue::from("active"))]).unwrap();
        assert_eq!(single.to_string(), "eq(status,active)");
    }

    #[test]
    fn test_from_pairs_multiple_conjoin_in_order() {
        let query = RqlQuery::from_pairs([
            ("status", RqlValue::from("active")),
            ("quantity__gt", RqlValue::from(5)),
        ])
        .unwrap();
        assert_eq!(query.to_string(), "and(eq(status,active),gt(quantity,5))");
    }

    #[test]
    fn test_from_pairs_keyword_suffixes() {
        let query =
            RqlQuery::from_pairs([("product__id__oneof", RqlValue::from(vec!["P1", "P2"]))])
                .unwrap();
        assert_eq!(query.to_string(), "in(product.id,(P1,P2))");

        let query = RqlQuery::from_pairs([("parent__null", RqlValue::from(true))]).unwrap();
        assert_eq!(query.to_string(), "eq(parent,null())");

        let query = RqlQuery::from_pairs([("tags__empty", RqlValue::from(false))]).unwrap();
        assert_eq!(query.to_string(), "ne(tags,empty())");
    }

    #[test]
    fn test_from_pairs_unrecognized_suffix_is_a_field_segment() {
        let query =
            RqlQuery::from_pairs([("product__name", RqlValue::from("Widget"))]).unwrap();
        assert_eq!(query.to_string(), "eq(product.name,Widget)");
    }

    #[test]
    fn test_from_pairs_propagates_value_errors() {
        let result = RqlQuery::from_pairs([("status__in", RqlValue::from("scalar"))]);
        assert_eq!(
            result,
            Err(RqlError::UnsupportedType {
                op: "in",
                value_type: "string",
            })
        );
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let build = || {
            (leaf("a", "1") & leaf("b", "2")) | !leaf("c", "3")
        };
        assert_eq!(build().to_string(), build().to_string());
    }

    #[test]
    fn test_composite_expression_renders_depth_first() {
        let query = (RqlQuery::field("status").eq("active").unwrap()
            & RqlQuery::field("product.id").one_of(vec!["PRD-1", "PRD-2"]).unwrap())
            | !RqlQuery::field("marketplace.name").like("Test*").unwrap();
        assert_eq!(
            query.to_string(),
            "or(and(eq(status,active),in(product.id,(PRD-1,PRD-2))),not(and(like(marketplace.name,Test*))))"
        );
    }
}
