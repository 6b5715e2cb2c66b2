use crate::complexity::is_complex;
use crate::oracle::{ResolvedPrimitive, TypeResolver};
use declint_ast::{TupleElement, TypeExpr};

/// Oracle that knows `Role` is an enum and `Partial<UserId>` is a string.
struct CheckerOracle;

impl TypeResolver for CheckerOracle {
    fn resolve_primitive(&self, expr: &TypeExpr) -> Option<ResolvedPrimitive> {
        let r = expr.as_reference()?;
        match r.ident()? {
            "Partial" => {
                // Pretend the checker resolved Partial<UserId> to string.
                let arg = r.args.first()?.as_reference()?;
                (arg.qualified_name() == "UserId").then_some(ResolvedPrimitive::String)
            }
            _ => None,
        }
    }

    fn is_enum(&self, expr: &TypeExpr) -> bool {
        expr.as_reference()
            .is_some_and(|r| r.qualified_name() == "Role")
    }
}

#[test]
fn primitives_are_not_complex() {
    assert!(!is_complex(&TypeExpr::string(), None));
    assert!(!is_complex(&TypeExpr::number(), None));
    assert!(!is_complex(&TypeExpr::boolean(), None));
}

#[test]
fn object_literal_is_always_complex() {
    assert!(is_complex(&TypeExpr::ObjectLiteral, None));
}

#[test]
fn literal_union_is_an_enumerated_primitive_set() {
    let ty = TypeExpr::union(vec![
        TypeExpr::string_literal("admin"),
        TypeExpr::string_literal("user"),
    ]);
    assert!(!is_complex(&ty, None));
}

#[test]
fn union_with_a_complex_member_is_complex() {
    let ty = TypeExpr::union(vec![TypeExpr::string(), TypeExpr::reference("Address")]);
    assert!(is_complex(&ty, None));
}

#[test]
fn nullable_primitive_union_is_not_complex() {
    assert!(!is_complex(&TypeExpr::nullable(TypeExpr::string()), None));
}

#[test]
fn branded_primitive_intersection_is_not_complex() {
    let ty = TypeExpr::intersection(vec![TypeExpr::string(), TypeExpr::ObjectLiteral]);
    assert!(!is_complex(&ty, None));
}

#[test]
fn object_intersection_is_complex() {
    let ty = TypeExpr::intersection(vec![
        TypeExpr::reference("A"),
        TypeExpr::reference("B"),
    ]);
    assert!(is_complex(&ty, None));
}

#[test]
fn array_complexity_follows_the_element() {
    assert!(!is_complex(&TypeExpr::array(TypeExpr::string()), None));
    assert!(is_complex(
        &TypeExpr::array(TypeExpr::reference("Address")),
        None
    ));
    // Nested arrays recurse all the way down.
    assert!(is_complex(
        &TypeExpr::array(TypeExpr::array(TypeExpr::reference("Address"))),
        None
    ));
}

#[test]
fn tuple_complexity_is_any_element() {
    assert!(!is_complex(
        &TypeExpr::tuple(vec![TypeExpr::number(), TypeExpr::number()]),
        None
    ));
    assert!(is_complex(
        &TypeExpr::tuple(vec![TypeExpr::number(), TypeExpr::reference("Address")]),
        None
    ));
}

#[test]
fn named_tuple_members_unwrap_to_their_inner_type() {
    let ty = TypeExpr::Tuple(vec![TupleElement {
        label: Some("home".to_string()),
        ty: TypeExpr::reference("Address"),
    }]);
    assert!(is_complex(&ty, None));
}

#[test]
fn never_validated_builtins() {
    for name in ["Promise", "Map", "Set"] {
        assert!(
            !is_complex(
                &TypeExpr::generic(name, vec![TypeExpr::reference("Address")]),
                None
            ),
            "{name} should never be nested-validated"
        );
    }
}

#[test]
fn primitive_wrapper_builtins_are_not_complex() {
    for name in ["String", "Number", "Boolean", "Date"] {
        assert!(!is_complex(&TypeExpr::reference(name), None));
    }
}

#[test]
fn class_references_are_complex() {
    assert!(is_complex(&TypeExpr::reference("Address"), None));
}

#[test]
fn enum_references_resolve_to_not_complex() {
    let oracle = CheckerOracle;
    assert!(is_complex(&TypeExpr::reference("Role"), None));
    assert!(!is_complex(&TypeExpr::reference("Role"), Some(&oracle)));
}

#[test]
fn readonly_array_follows_the_element() {
    assert!(!is_complex(
        &TypeExpr::generic("ReadonlyArray", vec![TypeExpr::string()]),
        None
    ));
    assert!(is_complex(
        &TypeExpr::generic("ReadonlyArray", vec![TypeExpr::reference("Address")]),
        None
    ));
}

#[test]
fn generic_array_follows_the_element() {
    assert!(!is_complex(
        &TypeExpr::generic("Array", vec![TypeExpr::number()]),
        None
    ));
    assert!(is_complex(
        &TypeExpr::generic("Array", vec![TypeExpr::reference("Address")]),
        None
    ));
}

#[test]
fn non_nullable_recurses_into_the_argument() {
    assert!(!is_complex(
        &TypeExpr::generic("NonNullable", vec![TypeExpr::string()]),
        None
    ));
    assert!(is_complex(
        &TypeExpr::generic("NonNullable", vec![TypeExpr::reference("Address")]),
        None
    ));
}

#[test]
fn unresolved_partial_is_assumed_complex() {
    // No oracle: Partial<Config> could be all-primitive, but the bias says
    // complex.
    let ty = TypeExpr::generic("Partial", vec![TypeExpr::reference("Config")]);
    assert!(is_complex(&ty, None));
}

#[test]
fn unresolved_pick_is_assumed_complex() {
    let ty = TypeExpr::generic(
        "Pick",
        vec![TypeExpr::reference("Order"), TypeExpr::string_literal("id")],
    );
    assert!(is_complex(&ty, None));
}

#[test]
fn resolved_wrapper_primitive_is_not_complex() {
    let oracle = CheckerOracle;
    let ty = TypeExpr::generic("Partial", vec![TypeExpr::reference("UserId")]);
    assert!(!is_complex(&ty, Some(&oracle)));
}

#[test]
fn record_with_primitive_values_is_not_complex() {
    let ty = TypeExpr::generic("Record", vec![TypeExpr::string(), TypeExpr::number()]);
    assert!(!is_complex(&ty, None));
}

#[test]
fn record_with_object_values_is_complex() {
    let ty = TypeExpr::generic(
        "Record",
        vec![TypeExpr::string(), TypeExpr::reference("Address")],
    );
    assert!(is_complex(&ty, None));
}

#[test]
fn readonly_wrapping_does_not_change_complexity() {
    let plain = TypeExpr::array(TypeExpr::reference("Address"));
    let wrapped = TypeExpr::readonly(plain.clone());
    assert_eq!(is_complex(&wrapped, None), is_complex(&plain, None));
}
