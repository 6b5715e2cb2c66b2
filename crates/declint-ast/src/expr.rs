//! Type-expression nodes.
//!
//! `TypeExpr` is a closed sum type over the type-annotation shapes the engine
//! understands. Anything the host tree produces outside this vocabulary
//! (conditional types, mapped types, import types, ...) is translated to
//! `TypeExpr::Unsupported`, which classifies to nothing and is never treated
//! as an error.
//!
//! The tree for any single property declaration is finite and acyclic:
//! recursive type aliases are never expanded by this engine.

use std::fmt;

/// A type-annotation expression.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeExpr {
    /// A keyword type: `string`, `number`, `null`, `undefined`, ...
    Keyword(KeywordType),
    /// An array type `T[]`.
    Array(Box<TypeExpr>),
    /// A tuple type `[A, b: B]`.
    Tuple(Vec<TupleElement>),
    /// A named reference with optional type arguments: `Date`, `Role`,
    /// `Partial<User>`, `api.UserDto`.
    Reference(TypeRef),
    /// An inline object literal shape `{ ... }`. Its members are irrelevant
    /// to classification and are not carried.
    ObjectLiteral,
    /// A union `A | B | C`.
    Union(Vec<TypeExpr>),
    /// An intersection `A & B`.
    Intersection(Vec<TypeExpr>),
    /// A literal type: `'admin'`, `42`, `true`.
    Literal(LiteralValue),
    /// A type-operator wrapper: `readonly T`, `keyof T`, `unique T`.
    ///
    /// The operand is optional so a malformed wrapper the host could not
    /// translate still normalizes (to itself) instead of failing.
    Operator {
        op: TypeOperatorKind,
        operand: Option<Box<TypeExpr>>,
    },
    /// A template-literal type `` `user-${string}` ``.
    TemplateLiteral,
    /// Anything else the host tree produced.
    Unsupported,
}

/// Keyword (intrinsic) types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeywordType {
    String,
    Number,
    Boolean,
    BigInt,
    Symbol,
    Object,
    Any,
    Unknown,
    Never,
    Void,
    Null,
    Undefined,
}

/// The runtime value of a literal type.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    Str(String),
    Num(f64),
    Bool(bool),
    BigInt(String),
}

/// One element of a tuple type; named tuple members carry their label.
#[derive(Clone, Debug, PartialEq)]
pub struct TupleElement {
    pub label: Option<String>,
    pub ty: TypeExpr,
}

/// Type operators that can wrap a type expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeOperatorKind {
    /// `readonly T[]` / `readonly [A, B]` — inert for validation purposes.
    Readonly,
    /// `keyof T` — NOT inert; a keyof type is its own shape.
    KeyOf,
    /// `unique symbol`.
    Unique,
}

/// A possibly-qualified type name: `Role` or `api.admin.Role`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeName {
    Ident(String),
    /// Left-associative qualification: `A.B.C` is `Qualified(Qualified(A, B), C)`.
    Qualified(Box<TypeName>, String),
}

impl TypeName {
    /// Reconstruct the full dotted path.
    pub fn qualified_name(&self) -> String {
        match self {
            TypeName::Ident(name) => name.clone(),
            TypeName::Qualified(left, right) => {
                let left = left.qualified_name();
                if left.is_empty() {
                    String::new()
                } else {
                    format!("{left}.{right}")
                }
            }
        }
    }

    /// The plain identifier, when the name is unqualified.
    pub fn ident(&self) -> Option<&str> {
        match self {
            TypeName::Ident(name) => Some(name),
            TypeName::Qualified(..) => None,
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name())
    }
}

/// A named type reference with its type arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeRef {
    pub name: TypeName,
    pub args: Vec<TypeExpr>,
}

impl TypeRef {
    pub fn qualified_name(&self) -> String {
        self.name.qualified_name()
    }

    /// The plain identifier, when the reference name is unqualified.
    pub fn ident(&self) -> Option<&str> {
        self.name.ident()
    }
}

impl TypeExpr {
    pub fn string() -> TypeExpr {
        TypeExpr::Keyword(KeywordType::String)
    }

    pub fn number() -> TypeExpr {
        TypeExpr::Keyword(KeywordType::Number)
    }

    pub fn boolean() -> TypeExpr {
        TypeExpr::Keyword(KeywordType::Boolean)
    }

    pub fn null() -> TypeExpr {
        TypeExpr::Keyword(KeywordType::Null)
    }

    pub fn undefined() -> TypeExpr {
        TypeExpr::Keyword(KeywordType::Undefined)
    }

    /// A bare named reference: `reference("Date")`, `reference("Role")`.
    pub fn reference(name: &str) -> TypeExpr {
        TypeExpr::Reference(TypeRef {
            name: TypeName::Ident(name.to_string()),
            args: Vec::new(),
        })
    }

    /// A generic named reference: `generic("Partial", vec![user])`.
    pub fn generic(name: &str, args: Vec<TypeExpr>) -> TypeExpr {
        TypeExpr::Reference(TypeRef {
            name: TypeName::Ident(name.to_string()),
            args,
        })
    }

    pub fn array(element: TypeExpr) -> TypeExpr {
        TypeExpr::Array(Box::new(element))
    }

    pub fn tuple(elements: Vec<TypeExpr>) -> TypeExpr {
        TypeExpr::Tuple(
            elements
                .into_iter()
                .map(|ty| TupleElement { label: None, ty })
                .collect(),
        )
    }

    pub fn union(members: Vec<TypeExpr>) -> TypeExpr {
        TypeExpr::Union(members)
    }

    pub fn intersection(members: Vec<TypeExpr>) -> TypeExpr {
        TypeExpr::Intersection(members)
    }

    pub fn string_literal(value: &str) -> TypeExpr {
        TypeExpr::Literal(LiteralValue::Str(value.to_string()))
    }

    pub fn number_literal(value: f64) -> TypeExpr {
        TypeExpr::Literal(LiteralValue::Num(value))
    }

    pub fn readonly(inner: TypeExpr) -> TypeExpr {
        TypeExpr::Operator {
            op: TypeOperatorKind::Readonly,
            operand: Some(Box::new(inner)),
        }
    }

    /// The common `T | null | undefined` shape.
    pub fn nullable(base: TypeExpr) -> TypeExpr {
        TypeExpr::Union(vec![base, TypeExpr::null(), TypeExpr::undefined()])
    }

    /// The reference node, if the (normalized) expression is a named
    /// reference.
    pub fn as_reference(&self) -> Option<&TypeRef> {
        match crate::normalize::normalize(self) {
            TypeExpr::Reference(r) => Some(r),
            _ => None,
        }
    }
}
