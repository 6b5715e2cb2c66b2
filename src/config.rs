//! Contract-table configuration.
//!
//! The built-in decorator contracts cover the stock class-validator
//! decorators. Projects with custom decorators extend the table through a
//! JSON file, loaded once at process start:
//!
//! ```json
//! {
//!   "decorators": {
//!     "IsMoney": ["number"],
//!     "IsIsoCountry": ["string"]
//!   },
//!   "typeAgnostic": ["TrimmedString"]
//! }
//! ```
//!
//! Category tokens use the same spelling the engine reports: `string`,
//! `number`, `boolean`, `Date`, `array`, `object`, plus the enum-style
//! tokens `union-literal` and `type-reference`. Unknown tokens are treated
//! as named-reference categories.

use anyhow::{Context, Result};
use declint_checker::{ContractsConfig, DecoratorContracts};
use std::fs;
use std::path::Path;

/// Load a contract table: the built-in defaults with the file's overrides
/// merged on top.
pub fn load_contracts(path: &Path) -> Result<DecoratorContracts> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read contract config {}", path.display()))?;
    let config: ContractsConfig = serde_json::from_str(&text)
        .with_context(|| format!("invalid contract config {}", path.display()))?;
    Ok(DecoratorContracts::with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use declint_common::{Category, ExpectedCategory};
    use std::io::Write;

    #[test]
    fn loads_and_merges_overrides() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{"decorators": {{"IsMoney": ["number"]}}, "typeAgnostic": ["MyMarker"]}}"#
        )
        .expect("write config");

        let contracts = load_contracts(file.path()).expect("config should load");
        assert_eq!(
            contracts.expected_for("IsMoney"),
            Some(&[ExpectedCategory::Concrete(Category::Number)][..])
        );
        // Built-ins survive the merge.
        assert_eq!(
            contracts.expected_for("IsString"),
            Some(&[ExpectedCategory::Concrete(Category::String)][..])
        );
        assert!(contracts.is_type_agnostic("MyMarker"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_contracts(Path::new("/nonexistent/contracts.json"))
            .expect_err("should fail");
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn invalid_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not json").expect("write config");
        let err = load_contracts(file.path()).expect_err("should fail");
        assert!(err.to_string().contains("invalid contract config"));
    }
}
