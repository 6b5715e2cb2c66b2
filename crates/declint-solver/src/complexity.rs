//! Complexity analysis.
//!
//! A type is "complex" when validating a value of it needs recursive
//! per-field validation (a nested DTO, an array of DTOs, ...) rather than a
//! single direct check. The distinction drives which decorator family a
//! field needs:
//!
//! ```typescript
//! @IsString()
//! name: string;                // primitive: direct check
//!
//! @ValidateNested({ each: true })
//! @Type(() => Address)
//! addresses: Address[];        // complex: recurse into each element
//! ```
//!
//! The rules here are checked strictly in order; each returns as soon as it
//! matches. They are syntactic and best-effort — an optional oracle
//! disambiguates aliases, enum references, and resolved utility wrappers.

use crate::classifier::classify;
use crate::oracle::{ResolvedPrimitive, TypeResolver, resolve_with};
use crate::unions::analyze_union;
use crate::utility::{UtilityWrapper, unwrap_utility};
use declint_ast::{TypeExpr, TypeRef, normalize};
use tracing::trace;

/// Policy: a `Pick`/`Omit` over a type no oracle could resolve is assumed
/// complex.
///
/// `Pick<Order, 'quantity'>` may select only primitive fields, but without a
/// resolver the engine cannot know, and a missed nested-validation warning is
/// worse than a spurious one. Keep this bias; tune it here, not in the rules.
pub const ASSUME_UNRESOLVED_WRAPPER_COMPLEX: bool = true;

/// Built-in references that are never targets of nested validation.
pub const NEVER_VALIDATED: [&str; 3] = ["Promise", "Map", "Set"];

/// Built-in references validated as direct values.
pub const PRIMITIVE_WRAPPERS: [&str; 4] = ["String", "Number", "Boolean", "Date"];

/// Decide whether a type needs recursive per-field validation.
pub fn is_complex(expr: &TypeExpr, oracle: Option<&dyn TypeResolver>) -> bool {
    let expr = normalize(expr);
    let complex = match expr {
        // An inline object shape always has fields to recurse into.
        TypeExpr::ObjectLiteral => true,

        TypeExpr::Union(members) => union_is_complex(expr, members, oracle),

        // Branded primitives (`string & { __brand }`) stay primitive; any
        // other intersection carries object members.
        TypeExpr::Intersection(members) => !members
            .iter()
            .any(|m| classify(m, oracle).is_some_and(|c| c.is_primitive())),

        TypeExpr::Array(element) => is_complex(element, oracle),

        // One complex element is enough: tuples are validated as a whole.
        TypeExpr::Tuple(elements) => elements.iter().any(|e| is_complex(&e.ty, oracle)),

        TypeExpr::Reference(r) => reference_is_complex(expr, r, oracle),

        _ => false,
    };
    trace!(complex, "complexity verdict");
    complex
}

fn union_is_complex(
    expr: &TypeExpr,
    members: &[TypeExpr],
    oracle: Option<&dyn TypeResolver>,
) -> bool {
    // A union where every member is a literal is an enumerated primitive
    // set (`'a' | 'b'`), not a nested structure.
    if members
        .iter()
        .all(|m| matches!(normalize(m), TypeExpr::Literal(_)))
    {
        return false;
    }
    !analyze_union(expr, oracle).complex_types.is_empty()
}

fn reference_is_complex(
    whole: &TypeExpr,
    r: &TypeRef,
    oracle: Option<&dyn TypeResolver>,
) -> bool {
    let name = r.qualified_name();

    if NEVER_VALIDATED.contains(&name.as_str()) {
        return false;
    }

    // Enums get dedicated decorator handling, never nested validation.
    if oracle.is_some_and(|o| o.is_enum(whole)) {
        return false;
    }

    // Prefer resolving the whole expression: an alias like `UserId` or a
    // wrapper like `Partial<UserId>` may come out a plain primitive.
    match resolve_with(oracle, whole) {
        Some(
            ResolvedPrimitive::String
            | ResolvedPrimitive::Number
            | ResolvedPrimitive::Boolean
            | ResolvedPrimitive::Date,
        ) => return false,
        Some(ResolvedPrimitive::Array) | None => {}
    }

    if let Some(unwrapped) = unwrap_utility(whole) {
        match unwrapped.wrapper {
            UtilityWrapper::ReadonlyArray => return is_complex(unwrapped.primary, oracle),
            UtilityWrapper::NonNullable | UtilityWrapper::Extract | UtilityWrapper::Exclude => {
                return is_complex(unwrapped.primary, oracle);
            }
            UtilityWrapper::Partial
            | UtilityWrapper::Required
            | UtilityWrapper::Readonly
            | UtilityWrapper::Pick
            | UtilityWrapper::Omit => {
                // The oracle above could not see through the wrapper.
                if unwrapped.wrapper.is_member_selection()
                    && !ASSUME_UNRESOLVED_WRAPPER_COMPLEX
                {
                    return false;
                }
                return is_complex(unwrapped.primary, oracle);
            }
        }
    }

    match name.as_str() {
        // `Record<K, V>` with a primitive value type is a direct check.
        "Record" => !r
            .args
            .get(1)
            .and_then(|v| classify(v, oracle))
            .is_some_and(|c| c.is_primitive()),
        "Array" => r.args.first().is_some_and(|t| is_complex(t, oracle)),
        _ if PRIMITIVE_WRAPPERS.contains(&name.as_str()) => false,
        // Any other named reference is a class or interface to recurse into.
        _ => true,
    }
}
