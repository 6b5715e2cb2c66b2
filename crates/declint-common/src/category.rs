//! Semantic type categories.
//!
//! A `Category` is the canonical classification of a declared type as the
//! engine sees it: the fixed primitive/structural buckets plus an open-ended
//! `Reference` bucket carrying the verbatim qualified name of any named type
//! (`MyEnum`, `Address`, `Array`, ...).
//!
//! Categories round-trip through the token spelling used by decorator-contract
//! configuration files:
//!
//! ```text
//! "string" | "number" | "boolean" | "Date" | "array" | "object"
//! | "enum" | "union" | "literal" | "intersection" | <any other name>
//! ```
//!
//! The two extra contract tokens `"union-literal"` and `"type-reference"`
//! never classify a type; they only appear in expected-category lists for
//! enum-style decorators (see `ExpectedCategory`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical semantic category of a declared type.
///
/// The classifier returns `Option<Category>`; `None` means the type could not
/// be classified and the field is skipped rather than diagnosed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    String,
    Number,
    Boolean,
    Date,
    Array,
    Object,
    Enum,
    Union,
    Literal,
    Intersection,
    /// Any other named reference, carrying its verbatim qualified name
    /// (e.g. `Role`, `Address`, `api.UserDto`, `Array`).
    Reference(String),
}

impl Category {
    /// Parse a config token into a category. Unknown tokens become
    /// `Reference` so user-defined class/enum names work out of the box.
    pub fn from_token(token: &str) -> Category {
        match token {
            "string" => Category::String,
            "number" => Category::Number,
            "boolean" => Category::Boolean,
            "Date" => Category::Date,
            "array" => Category::Array,
            "object" => Category::Object,
            "enum" => Category::Enum,
            "union" => Category::Union,
            "literal" => Category::Literal,
            "intersection" => Category::Intersection,
            other => Category::Reference(other.to_string()),
        }
    }

    /// The token spelling used in configuration and diagnostics.
    pub fn as_token(&self) -> &str {
        match self {
            Category::String => "string",
            Category::Number => "number",
            Category::Boolean => "boolean",
            Category::Date => "Date",
            Category::Array => "array",
            Category::Object => "object",
            Category::Enum => "enum",
            Category::Union => "union",
            Category::Literal => "literal",
            Category::Intersection => "intersection",
            Category::Reference(name) => name,
        }
    }

    /// Whether this category is a directly-validatable primitive.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Category::String | Category::Number | Category::Boolean
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl From<String> for Category {
    fn from(token: String) -> Self {
        Category::from_token(&token)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_token().to_string()
    }
}

/// Compare two categories, treating the generic spelling `array` and the
/// built-in reference names `Array` and `ReadonlyArray` as the same category.
pub fn same_category(a: &Category, b: &Category) -> bool {
    if a == b {
        return true;
    }
    let is_array = |c: &Category| {
        matches!(c, Category::Array)
            || matches!(c, Category::Reference(name) if name == "Array" || name == "ReadonlyArray")
    };
    is_array(a) && is_array(b)
}

/// An entry in a decorator's expected-category list.
///
/// `UnionLiteral` and `TypeReference` exist only for enum-style decorators:
/// an enum annotation is satisfied either by a union of literal values or by
/// a named reference that plausibly resolves to an enum.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExpectedCategory {
    Concrete(Category),
    UnionLiteral,
    TypeReference,
}

impl ExpectedCategory {
    pub fn as_token(&self) -> &str {
        match self {
            ExpectedCategory::Concrete(category) => category.as_token(),
            ExpectedCategory::UnionLiteral => "union-literal",
            ExpectedCategory::TypeReference => "type-reference",
        }
    }
}

impl fmt::Display for ExpectedCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl From<String> for ExpectedCategory {
    fn from(token: String) -> Self {
        match token.as_str() {
            "union-literal" => ExpectedCategory::UnionLiteral,
            "type-reference" => ExpectedCategory::TypeReference,
            other => ExpectedCategory::Concrete(Category::from_token(other)),
        }
    }
}

impl From<ExpectedCategory> for String {
    fn from(expected: ExpectedCategory) -> Self {
        expected.as_token().to_string()
    }
}
