//! Decorator-contract checking.
//!
//! This crate turns the pure classification answers from `declint-solver`
//! into per-field verdicts: which decorators accept the declared type, and
//! what structural problems the field has (missing each-element validation,
//! mixed unions, missing transform decorators, ...).
//!
//! The contract table is loaded once at process start and read-only
//! thereafter; every check is a pure function over borrowed inputs.

pub mod contracts;
pub use contracts::{ContractsConfig, DecoratorContracts, default_contracts};

pub mod matcher;
pub use matcher::matches;

pub mod field;
pub use field::{DecoratorVerdict, FieldVerdict, check_field};
