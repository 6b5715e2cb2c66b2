//! Decorator-contract matching.
//!
//! Decides whether one decorator is compatible with the declared type it
//! annotates. The rules apply strictly in order:
//!
//! 1. Untracked decorators, empty contracts, and the conventionally
//!    type-agnostic set always match.
//! 2. Enum-style decorators match literal unions and named references only;
//!    any named reference is accepted as a plausible enum, since without an
//!    oracle the engine cannot verify the reference actually is one.
//! 3. Utility wrappers (other than `ReadonlyArray`) are matched against
//!    their unwrapped inner type.
//! 4. Simple nullable unions are matched against their base type.
//! 5. Otherwise the actual category must appear in the expected list, with
//!    `array`, `Array`, and `ReadonlyArray` treated as the same spelling.

use crate::contracts::DecoratorContracts;
use declint_ast::{TypeExpr, normalize};
use declint_common::{Category, ExpectedCategory, same_category};
use declint_solver::{TypeResolver, classify, nullable_union, unwrap_utility};
use tracing::trace;

/// Whether `decorator` accepts a field of the given type and category.
pub fn matches(
    contracts: &DecoratorContracts,
    decorator: &str,
    expr: &TypeExpr,
    actual: &Category,
    oracle: Option<&dyn TypeResolver>,
) -> bool {
    if contracts.is_type_agnostic(decorator) {
        return true;
    }
    let Some(expected) = contracts.expected_for(decorator) else {
        return true;
    };
    if expected.is_empty() {
        return true;
    }

    if expected
        .iter()
        .any(|e| !matches!(e, ExpectedCategory::Concrete(_)))
    {
        let ok = enum_style_matches(expected, expr);
        trace!(decorator, ok, "enum-style contract");
        return ok;
    }

    // See through utility wrappers; ReadonlyArray is an array shape in its
    // own right and is matched as-is.
    if let Some(unwrapped) = unwrap_utility(expr) {
        if !unwrapped.wrapper.is_array_like() {
            return match classify(unwrapped.primary, oracle) {
                Some(inner) => matches(contracts, decorator, unwrapped.primary, &inner, oracle),
                None => false,
            };
        }
    }

    // `T | null | undefined` is validated as `T`.
    if let Some(base) = nullable_union(expr).base {
        return match classify(base, oracle) {
            Some(base_category) => matches(contracts, decorator, base, &base_category, oracle),
            None => false,
        };
    }

    expected.iter().any(|e| match e {
        ExpectedCategory::Concrete(category) => same_category(category, actual),
        _ => false,
    })
}

/// Enum-style contracts accept literal unions (`'a' | 'b'`) via the
/// `union-literal` token and named references (`Role`) via `type-reference`.
fn enum_style_matches(expected: &[ExpectedCategory], expr: &TypeExpr) -> bool {
    match normalize(expr) {
        TypeExpr::Union(members)
            if members
                .iter()
                .all(|m| matches!(normalize(m), TypeExpr::Literal(_))) =>
        {
            expected.contains(&ExpectedCategory::UnionLiteral)
        }
        TypeExpr::Reference(_) => expected.contains(&ExpectedCategory::TypeReference),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::default_contracts;

    fn check(decorator: &str, expr: &TypeExpr) -> bool {
        let actual = classify(expr, None).expect("test type should classify");
        matches(default_contracts(), decorator, expr, &actual, None)
    }

    #[test]
    fn primitive_contracts() {
        assert!(check("IsString", &TypeExpr::string()));
        assert!(!check("IsString", &TypeExpr::number()));
        assert!(check("IsNumber", &TypeExpr::number()));
        assert!(check("IsBoolean", &TypeExpr::boolean()));
        assert!(check("IsDate", &TypeExpr::reference("Date")));
        assert!(!check("IsDate", &TypeExpr::string()));
    }

    #[test]
    fn array_spellings_both_match() {
        assert!(check("IsArray", &TypeExpr::array(TypeExpr::string())));
        assert!(check(
            "IsArray",
            &TypeExpr::generic("Array", vec![TypeExpr::string()])
        ));
    }

    #[test]
    fn untracked_decorators_always_match() {
        assert!(check("IsWhatever", &TypeExpr::number()));
    }

    #[test]
    fn type_agnostic_decorators_always_match() {
        assert!(check("IsOptional", &TypeExpr::number()));
        assert!(check("ValidateNested", &TypeExpr::reference("Address")));
    }

    #[test]
    fn enum_contract_accepts_literal_unions_and_references() {
        let literal_union = TypeExpr::union(vec![
            TypeExpr::string_literal("admin"),
            TypeExpr::string_literal("user"),
        ]);
        assert!(check("IsEnum", &literal_union));
        assert!(check("IsEnum", &TypeExpr::reference("Role")));
        assert!(!check("IsEnum", &TypeExpr::number()));
        // A mixed union is neither shape.
        let mixed = TypeExpr::union(vec![TypeExpr::string_literal("admin"), TypeExpr::number()]);
        assert!(!check("IsEnum", &mixed));
    }

    #[test]
    fn utility_wrappers_match_their_inner_type() {
        let ty = TypeExpr::generic("NonNullable", vec![TypeExpr::string()]);
        assert!(check("IsString", &ty));
        assert!(!check("IsNumber", &ty));
    }

    #[test]
    fn readonly_array_matches_as_an_array() {
        let ty = TypeExpr::generic("ReadonlyArray", vec![TypeExpr::string()]);
        assert!(check("IsArray", &ty));
    }

    #[test]
    fn nullable_union_matches_its_base_type() {
        let ty = TypeExpr::nullable(TypeExpr::string());
        assert!(check("IsString", &ty));
        assert!(!check("IsNumber", &ty));
    }

    #[test]
    fn nullable_union_of_wrapper_unwraps_both_layers() {
        // NonNullable<string> | null | undefined
        let ty = TypeExpr::nullable(TypeExpr::generic("NonNullable", vec![TypeExpr::string()]));
        assert!(check("IsString", &ty));
    }
}
