//! Canonical type classification.
//!
//! Maps a type expression to its semantic `Category`. Classification is
//! syntactic, with one exception: when the host supplies a resolution oracle
//! it is consulted first, so type aliases resolve to their underlying
//! primitive before any structural rule runs.
//!
//! ```typescript
//! name: string;              // string
//! tags: string[];            // array
//! pair: [number, number];    // array
//! role: 'admin' | 'user';    // union
//! brand: string & { __b };   // string  (branded primitive)
//! home: Address;             // Address (open-ended reference category)
//! ```

use crate::oracle::{ResolvedPrimitive, TypeResolver, resolve_with};
use declint_ast::{KeywordType, LiteralValue, TypeExpr, normalize};
use declint_common::Category;
use tracing::trace;

/// Classify a type expression into its canonical category.
///
/// Returns `None` when the expression is unclassifiable; callers skip the
/// field rather than diagnose it.
pub fn classify(expr: &TypeExpr, oracle: Option<&dyn TypeResolver>) -> Option<Category> {
    // Oracle first: lets aliases resolve to their underlying primitive.
    // A `Date` answer is not a classification short-circuit; fall through.
    match resolve_with(oracle, expr) {
        Some(ResolvedPrimitive::String) => return Some(Category::String),
        Some(ResolvedPrimitive::Number) => return Some(Category::Number),
        Some(ResolvedPrimitive::Boolean) => return Some(Category::Boolean),
        Some(ResolvedPrimitive::Array) => return Some(Category::Array),
        Some(ResolvedPrimitive::Date) | None => {}
    }

    let category = match normalize(expr) {
        TypeExpr::Keyword(KeywordType::String) => Some(Category::String),
        TypeExpr::Keyword(KeywordType::Number) => Some(Category::Number),
        TypeExpr::Keyword(KeywordType::Boolean) => Some(Category::Boolean),
        TypeExpr::Keyword(_) => None,
        TypeExpr::Array(_) | TypeExpr::Tuple(_) => Some(Category::Array),
        TypeExpr::TemplateLiteral => Some(Category::String),
        TypeExpr::Reference(r) => {
            let name = r.qualified_name();
            if name.is_empty() {
                None
            } else if name == "Date" {
                Some(Category::Date)
            } else {
                Some(Category::Reference(name))
            }
        }
        TypeExpr::ObjectLiteral => Some(Category::Object),
        TypeExpr::Union(_) => Some(Category::Union),
        TypeExpr::Literal(value) => Some(classify_literal(value)),
        TypeExpr::Intersection(members) => Some(classify_intersection(members, oracle)),
        TypeExpr::Operator { .. } | TypeExpr::Unsupported => None,
    };

    trace!(?category, "classified type expression");
    category
}

/// A literal type classifies as the category of its runtime value.
fn classify_literal(value: &LiteralValue) -> Category {
    match value {
        LiteralValue::Str(_) => Category::String,
        LiteralValue::Num(_) => Category::Number,
        LiteralValue::Bool(_) => Category::Boolean,
        LiteralValue::BigInt(_) => Category::Literal,
    }
}

/// Intersections are primitive-first: `string & { __brand }` is the common
/// idiom for nominally-typed primitives and is still a string for validation
/// purposes. Only when no member classifies as a primitive is the whole
/// expression an intersection.
fn classify_intersection(members: &[TypeExpr], oracle: Option<&dyn TypeResolver>) -> Category {
    for member in members {
        if let Some(category) = classify(member, oracle) {
            if category.is_primitive() {
                return category;
            }
        }
    }
    Category::Intersection
}
