//! Union-shape analysis.
//!
//! Two questions come up constantly for union-typed fields:
//!
//! 1. Is this just an optional value? `T | null | undefined` validates like
//!    `T` behind an optionality marker ([`nullable_union`]).
//! 2. What mix of members does a general union hold? A union of several
//!    nested-validatable classes is a discriminated-union pattern that needs
//!    a custom validator; a mix of primitive and nested members needs two
//!    decorator families at once ([`analyze_union`]).

use crate::classifier::classify;
use crate::complexity::is_complex;
use crate::oracle::TypeResolver;
use bitflags::bitflags;
use declint_ast::{KeywordType, TypeExpr, normalize};
use declint_common::Category;
use smallvec::SmallVec;

bitflags! {
    /// Derived facts about a union's member mix.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct UnionFlags: u8 {
        /// At least one `null` / `undefined` member.
        const NULLABLE = 1 << 0;
        /// More than one primitive member.
        const MULTIPLE_PRIMITIVES = 1 << 1;
        /// More than one nested-validatable member (discriminated-union
        /// pattern; needs custom validation).
        const MULTIPLE_COMPLEX = 1 << 2;
        /// At least one primitive AND at least one nested-validatable
        /// member.
        const MIXED_COMPLEXITY = 1 << 3;
    }
}

/// Result of the simple-nullable-union query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NullableUnion<'a> {
    pub is_nullable: bool,
    /// The single non-nullish member, present only when the union is a
    /// simple nullable union.
    pub base: Option<&'a TypeExpr>,
}

impl NullableUnion<'_> {
    const NOT_NULLABLE: NullableUnion<'static> = NullableUnion {
        is_nullable: false,
        base: None,
    };
}

/// Detect the `T | null | undefined` shape and extract `T`.
///
/// Succeeds only when exactly one non-nullish member exists AND at least one
/// of `null` / `undefined` is present. A second non-nullish member makes the
/// whole union not-a-simple-nullable-union; non-union expressions never
/// match.
pub fn nullable_union(expr: &TypeExpr) -> NullableUnion<'_> {
    let TypeExpr::Union(members) = normalize(expr) else {
        return NullableUnion::NOT_NULLABLE;
    };

    let mut saw_nullish = false;
    let mut base = None;
    for member in members {
        if is_nullish(member) {
            saw_nullish = true;
            continue;
        }
        if base.is_some() {
            return NullableUnion::NOT_NULLABLE;
        }
        base = Some(member);
    }

    match (base, saw_nullish) {
        (Some(base), true) => NullableUnion {
            is_nullable: true,
            base: Some(base),
        },
        _ => NullableUnion::NOT_NULLABLE,
    }
}

/// Full member-mix analysis of a union.
#[derive(Clone, Debug, Default)]
pub struct UnionAnalysis<'a> {
    flags: UnionFlags,
    /// Categories of the primitive (non-nested) members, in member order.
    /// Unclassifiable members contribute nothing.
    pub primitive_types: SmallVec<[Category; 4]>,
    /// The nested-validatable members, borrowed from the input expression.
    pub complex_types: Vec<&'a TypeExpr>,
}

impl UnionAnalysis<'_> {
    pub fn flags(&self) -> UnionFlags {
        self.flags
    }

    pub fn is_nullable(&self) -> bool {
        self.flags.contains(UnionFlags::NULLABLE)
    }

    pub fn has_multiple_primitives(&self) -> bool {
        self.flags.contains(UnionFlags::MULTIPLE_PRIMITIVES)
    }

    pub fn has_multiple_complex_types(&self) -> bool {
        self.flags.contains(UnionFlags::MULTIPLE_COMPLEX)
    }

    pub fn has_mixed_complexity(&self) -> bool {
        self.flags.contains(UnionFlags::MIXED_COMPLEXITY)
    }
}

/// Partition a union's members into nullish markers, primitives, and
/// nested-validatable types. Non-union expressions produce an empty
/// analysis.
pub fn analyze_union<'a>(
    expr: &'a TypeExpr,
    oracle: Option<&dyn TypeResolver>,
) -> UnionAnalysis<'a> {
    let mut analysis = UnionAnalysis::default();
    let TypeExpr::Union(members) = normalize(expr) else {
        return analysis;
    };

    for member in members {
        if is_nullish(member) {
            analysis.flags |= UnionFlags::NULLABLE;
        } else if is_complex(member, oracle) {
            analysis.complex_types.push(member);
        } else if let Some(category) = classify(member, oracle) {
            analysis.primitive_types.push(category);
        }
    }

    if analysis.primitive_types.len() > 1 {
        analysis.flags |= UnionFlags::MULTIPLE_PRIMITIVES;
    }
    if analysis.complex_types.len() > 1 {
        analysis.flags |= UnionFlags::MULTIPLE_COMPLEX;
    }
    if !analysis.primitive_types.is_empty() && !analysis.complex_types.is_empty() {
        analysis.flags |= UnionFlags::MIXED_COMPLEXITY;
    }
    analysis
}

/// `null` and `undefined` are optionality markers, not union members to
/// validate.
pub(crate) fn is_nullish(expr: &TypeExpr) -> bool {
    matches!(
        normalize(expr),
        TypeExpr::Keyword(KeywordType::Null | KeywordType::Undefined)
    )
}
