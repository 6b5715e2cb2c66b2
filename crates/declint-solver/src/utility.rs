//! Utility-type unwrapping.
//!
//! TypeScript's utility types transform a base type without themselves being
//! something to validate: `Partial<User>` validates (partially) like `User`,
//! and the companion transform decorator for `Pick<User, 'name'>` should
//! reference `User`. This module recognizes the fixed utility-wrapper set and
//! extracts the type argument that should be looked at instead.

use declint_ast::{TypeExpr, normalize};

/// The recognized generic wrapper type constructors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UtilityWrapper {
    Partial,
    Required,
    Pick,
    Omit,
    Readonly,
    NonNullable,
    Extract,
    Exclude,
    ReadonlyArray,
}

impl UtilityWrapper {
    pub fn from_name(name: &str) -> Option<UtilityWrapper> {
        match name {
            "Partial" => Some(UtilityWrapper::Partial),
            "Required" => Some(UtilityWrapper::Required),
            "Pick" => Some(UtilityWrapper::Pick),
            "Omit" => Some(UtilityWrapper::Omit),
            "Readonly" => Some(UtilityWrapper::Readonly),
            "NonNullable" => Some(UtilityWrapper::NonNullable),
            "Extract" => Some(UtilityWrapper::Extract),
            "Exclude" => Some(UtilityWrapper::Exclude),
            "ReadonlyArray" => Some(UtilityWrapper::ReadonlyArray),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            UtilityWrapper::Partial => "Partial",
            UtilityWrapper::Required => "Required",
            UtilityWrapper::Pick => "Pick",
            UtilityWrapper::Omit => "Omit",
            UtilityWrapper::Readonly => "Readonly",
            UtilityWrapper::NonNullable => "NonNullable",
            UtilityWrapper::Extract => "Extract",
            UtilityWrapper::Exclude => "Exclude",
            UtilityWrapper::ReadonlyArray => "ReadonlyArray",
        }
    }

    /// `ReadonlyArray` is the one wrapper that is itself an array shape
    /// rather than a see-through transformation of its argument.
    pub fn is_array_like(self) -> bool {
        matches!(self, UtilityWrapper::ReadonlyArray)
    }

    /// Wrappers whose result shape depends on a member selection the engine
    /// cannot see without an oracle.
    pub fn is_member_selection(self) -> bool {
        matches!(self, UtilityWrapper::Pick | UtilityWrapper::Omit)
    }
}

/// A matched utility wrapper and its type arguments.
#[derive(Clone, Copy, Debug)]
pub struct UtilityUnwrap<'a> {
    pub wrapper: UtilityWrapper,
    /// The first type argument — the type to look at instead of the wrapper.
    pub primary: &'a TypeExpr,
    pub args: &'a [TypeExpr],
}

/// Match a utility-type wrapper.
///
/// Matches only when the normalized expression is an unqualified named
/// reference with one of the recognized wrapper names AND at least one type
/// argument; `Partial` with no arguments is somebody's own type, not the
/// built-in.
pub fn unwrap_utility(expr: &TypeExpr) -> Option<UtilityUnwrap<'_>> {
    let TypeExpr::Reference(r) = normalize(expr) else {
        return None;
    };
    let wrapper = UtilityWrapper::from_name(r.ident()?)?;
    let primary = r.args.first()?;
    Some(UtilityUnwrap {
        wrapper,
        primary,
        args: &r.args,
    })
}

/// Unwrap utility wrappers to a fixpoint.
///
/// Recovers the type whose name a companion transform decorator should
/// reference: `Pick<Partial<User>, 'name'>` unwraps to `User`.
pub fn unwrap_for_display_name(mut expr: &TypeExpr) -> &TypeExpr {
    while let Some(unwrapped) = unwrap_utility(expr) {
        expr = unwrapped.primary;
    }
    expr
}
