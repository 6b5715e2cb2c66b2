//! Type-expression tree and decorator model for the declint engine.
//!
//! The host linting framework owns the real syntax tree; it translates each
//! annotated property's type annotation into the `TypeExpr` sum type defined
//! here and hands it to the engine together with the property's decorator
//! list. Both structures are immutable for the duration of one field check
//! and never retained past it.

pub mod expr;
pub use expr::{
    KeywordType, LiteralValue, TupleElement, TypeExpr, TypeName, TypeOperatorKind, TypeRef,
};

pub mod normalize;
pub use normalize::normalize;

pub mod decorator;
pub use decorator::{ArgValue, DecoratorArg, DecoratorCall};
