//! The decorator-contract table.
//!
//! A contract maps a decorator name to the ordered list of categories it
//! accepts. Decorators absent from the table, or mapped to an empty list,
//! are type-agnostic and always match: their job is validation logic, not
//! type enforcement. A fixed set of decorators is type-agnostic by
//! convention (optionality markers, nested-validation triggers, equality and
//! set-membership checks, structural checks) even when a host config lists
//! them.
//!
//! The built-in table covers the class-validator decorator family. Hosts may
//! extend or override it through [`ContractsConfig`], loaded once at process
//! start; the table is immutable afterwards.

use declint_common::{Category, ExpectedCategory};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Decorators that are type-agnostic by convention.
const TYPE_AGNOSTIC: [&str; 16] = [
    "Allow",
    "Equals",
    "IsDefined",
    "IsEmpty",
    "IsIn",
    "IsInstance",
    "IsNotEmpty",
    "IsNotIn",
    "IsOptional",
    "NotEquals",
    "Transform",
    "Type",
    "Validate",
    "ValidateIf",
    "ValidateNested",
    "ValidatePromise",
];

/// Host-supplied contract overrides, merged over the built-in table.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContractsConfig {
    /// Decorator name → accepted category tokens.
    pub decorators: IndexMap<String, Vec<ExpectedCategory>>,
    /// Additional decorator names to treat as type-agnostic.
    pub type_agnostic: Vec<String>,
}

/// The process-wide decorator→expected-categories mapping.
#[derive(Clone, Debug)]
pub struct DecoratorContracts {
    expected: IndexMap<String, Vec<ExpectedCategory>>,
    type_agnostic: FxHashSet<String>,
}

impl DecoratorContracts {
    /// The built-in class-validator table.
    pub fn builtin() -> DecoratorContracts {
        let mut contracts = DecoratorContracts {
            expected: IndexMap::new(),
            type_agnostic: TYPE_AGNOSTIC.iter().map(|s| s.to_string()).collect(),
        };

        let string_decorators = [
            "IsString",
            "IsEmail",
            "IsUrl",
            "IsUUID",
            "IsDateString",
            "IsNumberString",
            "IsPhoneNumber",
            "IsAlpha",
            "IsAlphanumeric",
            "IsAscii",
            "IsBase64",
            "IsHexColor",
            "IsLowercase",
            "IsUppercase",
            "IsJWT",
            "IsMongoId",
            "MinLength",
            "MaxLength",
            "Length",
            "Matches",
            "Contains",
            "NotContains",
        ];
        for name in string_decorators {
            contracts.insert(name, vec![concrete(Category::String)]);
        }

        let number_decorators = [
            "IsNumber",
            "IsInt",
            "IsPositive",
            "IsNegative",
            "Min",
            "Max",
            "IsDivisibleBy",
            "IsLatitude",
            "IsLongitude",
        ];
        for name in number_decorators {
            contracts.insert(name, vec![concrete(Category::Number)]);
        }

        contracts.insert("IsBoolean", vec![concrete(Category::Boolean)]);
        contracts.insert("IsDate", vec![concrete(Category::Date)]);

        let array_decorators = [
            "IsArray",
            "ArrayMinSize",
            "ArrayMaxSize",
            "ArrayNotEmpty",
            "ArrayUnique",
            "ArrayContains",
            "ArrayNotContains",
        ];
        for name in array_decorators {
            contracts.insert(name, vec![concrete(Category::Array)]);
        }

        contracts.insert("IsObject", vec![concrete(Category::Object)]);
        contracts.insert("IsNotEmptyObject", vec![concrete(Category::Object)]);

        // An enum annotation is either a union of literals or a reference
        // that plausibly resolves to an enum.
        contracts.insert(
            "IsEnum",
            vec![
                ExpectedCategory::UnionLiteral,
                ExpectedCategory::TypeReference,
            ],
        );

        contracts
    }

    /// The built-in table with host overrides merged on top.
    pub fn with_config(config: ContractsConfig) -> DecoratorContracts {
        let mut contracts = DecoratorContracts::builtin();
        for (name, expected) in config.decorators {
            contracts.expected.insert(name, expected);
        }
        contracts.type_agnostic.extend(config.type_agnostic);
        contracts
    }

    fn insert(&mut self, name: &str, expected: Vec<ExpectedCategory>) {
        self.expected.insert(name.to_string(), expected);
    }

    /// The expected-category list for a decorator, `None` when untracked.
    pub fn expected_for(&self, decorator: &str) -> Option<&[ExpectedCategory]> {
        self.expected.get(decorator).map(|v| v.as_slice())
    }

    /// Whether a decorator never enforces a type.
    pub fn is_type_agnostic(&self, decorator: &str) -> bool {
        self.type_agnostic.contains(decorator)
    }
}

fn concrete(category: Category) -> ExpectedCategory {
    ExpectedCategory::Concrete(category)
}

static DEFAULT_CONTRACTS: Lazy<DecoratorContracts> = Lazy::new(DecoratorContracts::builtin);

/// The shared built-in table. Loaded once, never written afterwards.
pub fn default_contracts() -> &'static DecoratorContracts {
    &DEFAULT_CONTRACTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_sanity() {
        let contracts = default_contracts();
        assert_eq!(
            contracts.expected_for("IsString"),
            Some(&[ExpectedCategory::Concrete(Category::String)][..])
        );
        assert_eq!(
            contracts.expected_for("IsEnum"),
            Some(
                &[
                    ExpectedCategory::UnionLiteral,
                    ExpectedCategory::TypeReference
                ][..]
            )
        );
        assert!(contracts.is_type_agnostic("IsOptional"));
        assert!(contracts.is_type_agnostic("ValidateNested"));
        assert!(contracts.expected_for("SomeCustomDecorator").is_none());
    }

    #[test]
    fn config_overrides_and_extends() {
        let mut config = ContractsConfig::default();
        config.decorators.insert(
            "IsMoney".to_string(),
            vec![ExpectedCategory::Concrete(Category::Number)],
        );
        config
            .decorators
            .insert("IsString".to_string(), Vec::new());
        config.type_agnostic.push("MyMarker".to_string());

        let contracts = DecoratorContracts::with_config(config);
        assert_eq!(
            contracts.expected_for("IsMoney"),
            Some(&[ExpectedCategory::Concrete(Category::Number)][..])
        );
        // Overridden to empty: now type-agnostic.
        assert_eq!(contracts.expected_for("IsString"), Some(&[][..]));
        assert!(contracts.is_type_agnostic("MyMarker"));
    }
}
