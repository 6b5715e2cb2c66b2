//! Type-expression normalization.
//!
//! `readonly` is inert for validation: `readonly string[]` validates exactly
//! like `string[]`. Normalization strips a chain of `readonly` wrappers to
//! expose the underlying shape. Other type operators (`keyof`, `unique`) are
//! NOT stripped — they change what the type means.

use crate::expr::{TypeExpr, TypeOperatorKind};

/// Strip `readonly` operator wrappers, returning the first descendant that is
/// not one. A `readonly` wrapper with a missing operand normalizes to itself
/// rather than failing.
pub fn normalize(mut expr: &TypeExpr) -> &TypeExpr {
    loop {
        match expr {
            TypeExpr::Operator {
                op: TypeOperatorKind::Readonly,
                operand: Some(inner),
            } => expr = inner,
            _ => return expr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::KeywordType;

    #[test]
    fn strips_readonly_chain() {
        let ty = TypeExpr::readonly(TypeExpr::readonly(TypeExpr::array(TypeExpr::string())));
        assert_eq!(normalize(&ty), &TypeExpr::array(TypeExpr::string()));
    }

    #[test]
    fn keyof_is_not_stripped() {
        let ty = TypeExpr::Operator {
            op: TypeOperatorKind::KeyOf,
            operand: Some(Box::new(TypeExpr::reference("User"))),
        };
        assert_eq!(normalize(&ty), &ty);
    }

    #[test]
    fn readonly_without_operand_normalizes_to_itself() {
        let ty = TypeExpr::Operator {
            op: TypeOperatorKind::Readonly,
            operand: None,
        };
        assert_eq!(normalize(&ty), &ty);
    }

    #[test]
    fn non_operator_is_untouched() {
        let ty = TypeExpr::Keyword(KeywordType::Number);
        assert_eq!(normalize(&ty), &ty);
    }
}
