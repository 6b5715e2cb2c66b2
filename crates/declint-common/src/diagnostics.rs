//! Structured diagnostic payloads.
//!
//! The engine never reports directly; it hands these payloads back to the
//! host linting framework, which decides how to surface them. Every payload
//! carries enough data to render a human-readable message (`Display`) or to
//! be serialized as structured JSON.

use crate::category::{Category, ExpectedCategory};
use serde::Serialize;
use std::fmt;

/// A decorator applied to a field whose declared type it does not accept.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoratorMismatch {
    pub decorator: String,
    pub actual: Option<Category>,
    pub expected: Vec<ExpectedCategory>,
}

impl fmt::Display for DecoratorMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let actual = self
            .actual
            .as_ref()
            .map(|c| c.as_token())
            .unwrap_or("<unclassifiable>");
        let expected: Vec<&str> = self.expected.iter().map(|e| e.as_token()).collect();
        write!(
            f,
            "@{} expects {} but the property is typed {}",
            self.decorator,
            expected.join(" | "),
            actual
        )
    }
}

/// A structural problem with a field's decorators that is not a plain
/// category mismatch.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FieldWarning {
    /// A decorator carries the each-element option but the field is not an
    /// array type.
    InvalidEachOption { decorator: String },
    /// The array's element type needs recursive validation but no decorator
    /// validates each element.
    MissingEachOption,
    /// The array's element type is a primitive, so per-element nested
    /// validation does nothing.
    UnnecessaryValidateNested,
    /// A tuple contains at least one element type that needs recursive
    /// validation; tuples cannot be validated element-wise by decorators.
    TupleWithComplexElements,
    /// A union contains more than one nested-validatable member; the field
    /// needs custom (discriminated) validation.
    UnionWithMultipleComplexTypes,
    /// A union mixes primitive and nested-validatable members, which need
    /// different decorator families at once.
    MixedComplexityUnion,
    /// The complexity of a Pick/Omit wrapper could not be resolved; the
    /// engine assumed it is nested-validatable.
    AmbiguousUtilityType { wrapper: String },
    /// A nested-validatable field is missing the companion transform
    /// decorator referencing its class.
    MissingTypeDecorator { expected: String },
    /// The companion transform decorator references a different class from
    /// the one named by the declared type.
    MismatchedTypeDecorator { expected: String, found: String },
}

impl fmt::Display for FieldWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldWarning::InvalidEachOption { decorator } => {
                write!(f, "@{decorator} has `each: true` but the property is not an array")
            }
            FieldWarning::MissingEachOption => {
                write!(f, "array elements need validation; add `each: true` to the validating decorator")
            }
            FieldWarning::UnnecessaryValidateNested => {
                write!(f, "array elements are primitives; nested validation has no effect")
            }
            FieldWarning::TupleWithComplexElements => {
                write!(f, "tuple contains nested-validatable elements; decorators cannot validate tuple members")
            }
            FieldWarning::UnionWithMultipleComplexTypes => {
                write!(f, "union has multiple nested-validatable members; use a custom validator")
            }
            FieldWarning::MixedComplexityUnion => {
                write!(f, "union mixes primitive and nested-validatable members")
            }
            FieldWarning::AmbiguousUtilityType { wrapper } => {
                write!(f, "cannot resolve {wrapper}<...>; assuming it needs nested validation")
            }
            FieldWarning::MissingTypeDecorator { expected } => {
                write!(f, "nested property needs @Type(() => {expected})")
            }
            FieldWarning::MismatchedTypeDecorator { expected, found } => {
                write!(f, "@Type references {found} but the property is typed {expected}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_lists_expected_categories() {
        let mismatch = DecoratorMismatch {
            decorator: "IsString".to_string(),
            actual: Some(Category::Number),
            expected: vec![ExpectedCategory::Concrete(Category::String)],
        };
        assert_eq!(
            mismatch.to_string(),
            "@IsString expects string but the property is typed number"
        );
    }

    #[test]
    fn warning_messages_render() {
        let warning = FieldWarning::MissingTypeDecorator {
            expected: "Address".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "nested property needs @Type(() => Address)"
        );
    }
}
