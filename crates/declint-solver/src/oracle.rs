//! Host-supplied type-resolution oracle.
//!
//! Syntactic classification cannot see through a type alias:
//!
//! ```typescript
//! type UserId = string;
//!
//! class Dto {
//!   @IsString()
//!   id: UserId;   // syntactically a named reference, statically a string
//! }
//! ```
//!
//! A host with access to a real type checker can supply a `TypeResolver` to
//! answer such questions. The oracle is a precision enhancement only: every
//! caller treats "oracle absent" and "oracle has no answer" identically, and
//! falls back to the syntactic rule. Nothing an oracle does can make the
//! engine fail.

use declint_ast::TypeExpr;

/// The categories an oracle can resolve an expression to.
///
/// `Date` is only consulted by the complexity rules (a utility wrapper that
/// resolves to a `Date` needs no nested validation); the classifier
/// short-circuits on the other four.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolvedPrimitive {
    String,
    Number,
    Boolean,
    Array,
    Date,
}

/// Optional capability for resolving statically-inferred types.
///
/// Implementations must be best-effort and total: return `None` rather than
/// panic when a question cannot be answered.
pub trait TypeResolver {
    /// The statically-inferred category of this exact expression, when known.
    fn resolve_primitive(&self, expr: &TypeExpr) -> Option<ResolvedPrimitive>;

    /// Whether a named reference resolves to an enum or enum-member type.
    fn is_enum(&self, _expr: &TypeExpr) -> bool {
        false
    }
}

/// Ask an optional oracle for a primitive resolution.
pub(crate) fn resolve_with(
    oracle: Option<&dyn TypeResolver>,
    expr: &TypeExpr,
) -> Option<ResolvedPrimitive> {
    oracle.and_then(|o| o.resolve_primitive(expr))
}
