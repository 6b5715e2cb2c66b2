//! declint — a type-classification engine for decorator-based validation
//! linting.
//!
//! Validation libraries in the class-validator style pair a runtime decorator
//! with a statically-declared property type:
//!
//! ```typescript
//! class CreateUserDto {
//!   @IsString()
//!   name: string;
//!
//!   @ValidateNested({ each: true })
//!   @Type(() => Address)
//!   addresses: Address[];
//! }
//! ```
//!
//! The two can drift apart silently — `@IsString()` on a `number`, a nested
//! DTO array with no element validation, a `@Type` referencing the wrong
//! class. This engine cross-checks each annotated field's declared type
//! against its decorators and returns a structured verdict the host linting
//! framework renders as diagnostics.
//!
//! The host owns the syntax tree, the type checker, and the reporting; this
//! crate owns the classification:
//!
//! ```rust
//! use declint::ast::{DecoratorCall, TypeExpr};
//! use declint::checker::{check_field, default_contracts};
//!
//! let ty = TypeExpr::array(TypeExpr::reference("Address"));
//! let decorators = [DecoratorCall::simple("IsArray")];
//! let verdict = check_field(&ty, &decorators, default_contracts(), None);
//! assert!(verdict.complex);
//! assert!(!verdict.warnings.is_empty()); // missing each-element validation
//! ```

pub use declint_ast as ast;
pub use declint_checker as checker;
pub use declint_common as common;
pub use declint_solver as solver;

// Flat re-exports of the surface a host typically touches.
pub use declint_ast::{ArgValue, DecoratorArg, DecoratorCall, TypeExpr, normalize};
pub use declint_checker::{
    ContractsConfig, DecoratorContracts, DecoratorVerdict, FieldVerdict, check_field,
    default_contracts, matches,
};
pub use declint_common::{Category, DecoratorMismatch, ExpectedCategory, FieldWarning};
pub use declint_solver::{
    TypeResolver, analyze_union, classify, is_complex, nullable_union, unwrap_utility,
};

pub mod config;
pub use config::load_contracts;

pub mod tracing_config;
