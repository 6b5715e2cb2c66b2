//! Per-field checking.
//!
//! `check_field` is the engine's entry point: the host hands over one
//! annotated property (its declared type and decorator list) and receives a
//! structured verdict back. The verdict carries the resolved category, the
//! complexity flag, a match result per decorator, and the structural
//! warnings the host may surface as lint diagnostics.
//!
//! The array-element special cases live here, not in the matcher: a
//! decorator with `each: true` is checked against the array's element type,
//! and the presence/absence of element validation is itself diagnosed.

use crate::contracts::DecoratorContracts;
use crate::matcher::matches;
use declint_ast::{DecoratorCall, TypeExpr, normalize};
use declint_common::{Category, DecoratorMismatch, FieldWarning};
use declint_solver::{
    TypeResolver, analyze_union, classify, is_complex, nullable_union, unwrap_for_display_name,
    unwrap_utility,
};
use serde::Serialize;
use tracing::debug;

/// Decorators that trigger recursive validation of the annotated value.
const NESTED_VALIDATION_DECORATORS: [&str; 2] = ["ValidateNested", "ValidatePromise"];

/// The companion transform decorator expected on nested-validatable fields.
const TRANSFORM_TYPE_DECORATOR: &str = "Type";

/// Match result for one applied decorator.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoratorVerdict {
    pub name: String,
    pub matched: bool,
    /// Present only on a category mismatch.
    pub mismatch: Option<DecoratorMismatch>,
}

/// The engine's verdict for one annotated field.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldVerdict {
    /// `None` means the type was unclassifiable and the field was skipped.
    pub category: Option<Category>,
    pub complex: bool,
    pub decorators: Vec<DecoratorVerdict>,
    pub warnings: Vec<FieldWarning>,
}

/// Check one field's decorators against its declared type.
pub fn check_field(
    expr: &TypeExpr,
    decorators: &[DecoratorCall],
    contracts: &DecoratorContracts,
    oracle: Option<&dyn TypeResolver>,
) -> FieldVerdict {
    let category = classify(expr, oracle);
    let complex = is_complex(expr, oracle);
    debug!(?category, complex, "checking field");

    let Some(category) = category else {
        // Unclassifiable: skip the field, no verdict possible.
        return FieldVerdict {
            category: None,
            complex,
            decorators: Vec::new(),
            warnings: Vec::new(),
        };
    };

    let element = array_element(expr);
    let mut verdicts = Vec::with_capacity(decorators.len());
    let mut warnings = Vec::new();

    for decorator in decorators {
        verdicts.push(check_decorator(
            decorator,
            expr,
            &category,
            element,
            contracts,
            oracle,
            &mut warnings,
        ));
    }

    element_warnings(element, decorators, oracle, &mut warnings);
    structural_warnings(expr, oracle, &mut warnings);
    transform_decorator_warnings(expr, complex, element, decorators, oracle, &mut warnings);

    FieldVerdict {
        category: Some(category),
        complex,
        decorators: verdicts,
        warnings,
    }
}

fn check_decorator(
    decorator: &DecoratorCall,
    expr: &TypeExpr,
    category: &Category,
    element: Option<&TypeExpr>,
    contracts: &DecoratorContracts,
    oracle: Option<&dyn TypeResolver>,
    warnings: &mut Vec<FieldWarning>,
) -> DecoratorVerdict {
    // The each-element option redirects the check to the array's element
    // type; on a non-array field it is a contract violation of its own.
    let (target, target_category) = if decorator.validates_each() {
        match element {
            Some(element) => match classify(element, oracle) {
                Some(element_category) => (element, element_category),
                // Unclassifiable element: nothing to check against.
                None => return matched(decorator),
            },
            None => {
                warnings.push(FieldWarning::InvalidEachOption {
                    decorator: decorator.name.clone(),
                });
                return DecoratorVerdict {
                    name: decorator.name.clone(),
                    matched: false,
                    mismatch: None,
                };
            }
        }
    } else {
        (expr, category.clone())
    };

    if matches(contracts, &decorator.name, target, &target_category, oracle) {
        return matched(decorator);
    }

    DecoratorVerdict {
        name: decorator.name.clone(),
        matched: false,
        mismatch: Some(DecoratorMismatch {
            decorator: decorator.name.clone(),
            actual: Some(target_category),
            expected: contracts
                .expected_for(&decorator.name)
                .map(|expected| expected.to_vec())
                .unwrap_or_default(),
        }),
    }
}

fn matched(decorator: &DecoratorCall) -> DecoratorVerdict {
    DecoratorVerdict {
        name: decorator.name.clone(),
        matched: true,
        mismatch: None,
    }
}

/// Element-level diagnoses for array-typed fields.
fn element_warnings(
    element: Option<&TypeExpr>,
    decorators: &[DecoratorCall],
    oracle: Option<&dyn TypeResolver>,
    warnings: &mut Vec<FieldWarning>,
) {
    let Some(element) = element else {
        return;
    };
    let element_complex = is_complex(element, oracle);
    let any_each = decorators.iter().any(|d| d.validates_each());
    let nested = decorators
        .iter()
        .any(|d| NESTED_VALIDATION_DECORATORS.contains(&d.name.as_str()));

    if element_complex && !any_each {
        warnings.push(FieldWarning::MissingEachOption);
    }
    if !element_complex && nested {
        warnings.push(FieldWarning::UnnecessaryValidateNested);
    }
}

/// Shape-level diagnoses: tuples, unions, ambiguous wrappers.
fn structural_warnings(
    expr: &TypeExpr,
    oracle: Option<&dyn TypeResolver>,
    warnings: &mut Vec<FieldWarning>,
) {
    match normalize(expr) {
        TypeExpr::Tuple(elements) => {
            if elements.iter().any(|e| is_complex(&e.ty, oracle)) {
                warnings.push(FieldWarning::TupleWithComplexElements);
            }
        }
        TypeExpr::Union(_) => {
            let analysis = analyze_union(expr, oracle);
            if analysis.has_multiple_complex_types() {
                warnings.push(FieldWarning::UnionWithMultipleComplexTypes);
            }
            if analysis.has_mixed_complexity() {
                warnings.push(FieldWarning::MixedComplexityUnion);
            }
        }
        _ => {}
    }

    if let Some(unwrapped) = unwrap_utility(expr) {
        let resolved = oracle.is_some_and(|o| o.resolve_primitive(expr).is_some());
        if unwrapped.wrapper.is_member_selection() && !resolved {
            warnings.push(FieldWarning::AmbiguousUtilityType {
                wrapper: unwrapped.wrapper.name().to_string(),
            });
        }
    }
}

/// Nested-validatable fields need `@Type(() => X)` so the transformer can
/// instantiate the right class; `X` must be the type behind any utility
/// wrappers.
fn transform_decorator_warnings(
    expr: &TypeExpr,
    complex: bool,
    element: Option<&TypeExpr>,
    decorators: &[DecoratorCall],
    oracle: Option<&dyn TypeResolver>,
    warnings: &mut Vec<FieldWarning>,
) {
    let target = if complex {
        element
            .filter(|e| is_complex(e, oracle))
            .unwrap_or(expr)
    } else {
        return;
    };

    let Some(reference) = unwrap_for_display_name(target).as_reference() else {
        // Inline shapes and unions have no class name to reference.
        return;
    };
    let expected = reference.qualified_name();
    if expected.is_empty() {
        return;
    }

    let transform = decorators
        .iter()
        .find(|d| d.name == TRANSFORM_TYPE_DECORATOR);
    match transform {
        None => warnings.push(FieldWarning::MissingTypeDecorator { expected }),
        Some(call) => match call.referenced_class() {
            // No extractable class argument: the host could not read the
            // arrow body, so stay silent rather than guess.
            None => {}
            Some(found) if found == expected => {}
            Some(found) => warnings.push(FieldWarning::MismatchedTypeDecorator {
                expected,
                found: found.to_string(),
            }),
        },
    }
}

/// The element type of an array-shaped field (`T[]`, `Array<T>`,
/// `ReadonlyArray<T>`), seen through a simple nullable union so that
/// `Address[] | null` still counts as an array field.
fn array_element(expr: &TypeExpr) -> Option<&TypeExpr> {
    let expr = nullable_union(expr).base.unwrap_or(expr);
    match normalize(expr) {
        TypeExpr::Array(element) => Some(element),
        TypeExpr::Reference(r) => match r.ident()? {
            "Array" | "ReadonlyArray" => r.args.first(),
            _ => None,
        },
        _ => None,
    }
}
