//! Common types for the declint validation-decorator lint engine.
//!
//! This crate provides the vocabulary shared by every declint crate:
//! - Semantic categories for declared types (`Category`, `ExpectedCategory`)
//! - Structured diagnostic payloads (`DecoratorMismatch`, `FieldWarning`)

pub mod category;
pub use category::{Category, ExpectedCategory, same_category};

pub mod diagnostics;
pub use diagnostics::{DecoratorMismatch, FieldWarning};
