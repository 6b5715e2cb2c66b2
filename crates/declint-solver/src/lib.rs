//! Type classification and complexity analysis.
//!
//! This crate is the pure core of the declint engine. Every function here is
//! a pure function of a borrowed `TypeExpr` (plus an optional resolution
//! oracle): no caching, no shared mutable state, no failure paths. The worst
//! outcome is an imprecise answer.
//!
//! - [`classify`] — canonical semantic category of a type expression
//! - [`is_complex`] — does the type need recursive per-field validation?
//! - [`unwrap_utility`] — see through `Partial<T>`, `Pick<T, K>`, ...
//! - [`nullable_union`] / [`analyze_union`] — union-shape analysis
//! - [`TypeResolver`] — host-supplied oracle for alias/enum resolution

pub mod oracle;
pub use oracle::{ResolvedPrimitive, TypeResolver};

pub mod classifier;
pub use classifier::classify;

pub mod complexity;
pub use complexity::{
    ASSUME_UNRESOLVED_WRAPPER_COMPLEX, NEVER_VALIDATED, PRIMITIVE_WRAPPERS, is_complex,
};

pub mod utility;
pub use utility::{UtilityUnwrap, UtilityWrapper, unwrap_for_display_name, unwrap_utility};

pub mod unions;
pub use unions::{NullableUnion, UnionAnalysis, UnionFlags, analyze_union, nullable_union};

#[cfg(test)]
mod complexity_tests;
