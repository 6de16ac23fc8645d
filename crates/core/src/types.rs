use crate::error::ValidationError;
use crate::schema::{ArgumentShape, FieldSpec};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default number of packages returned by a package search.
pub const DEFAULT_MAX_RESULTS: u32 = 10;

/// Inclusive upper bound on `max_results`.
pub const MAX_RESULTS_LIMIT: u32 = 100;

/// Typed arguments of a tool, backed by a declarative [`ArgumentShape`].
pub trait ToolArguments: DeserializeOwned {
    /// The argument contract, used for both discovery and validation.
    fn shape() -> ArgumentShape;

    /// Validate raw tool-call arguments and convert them to `Self`.
    fn parse(raw: &Value) -> Result<Self, ValidationError> {
        let normalized = Self::shape().validate(raw)?;
        serde_json::from_value(Value::Object(normalized))
            .map_err(|e| ValidationError::Malformed(e.to_string()))
    }
}

/// Arguments of the package documentation search tool.
///
/// `query` is optional; when absent it is the empty string, and that empty
/// string is what the backend receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocSearchArgs {
    pub package_name: String,
    #[serde(default)]
    pub query: String,
}

impl ToolArguments for DocSearchArgs {
    fn shape() -> ArgumentShape {
        ArgumentShape::new(vec![
            FieldSpec::string(
                "package_name",
                "Name of the package whose documentation to search (e.g. \"react\", \"serde\")",
            )
            .required()
            .non_empty(),
            FieldSpec::string(
                "query",
                "What to look for in the documentation. Omit to get an overview of the package",
            )
            .with_default(""),
        ])
    }
}

/// Arguments of the package search tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSearchArgs {
    pub query: String,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

fn default_max_results() -> u32 {
    DEFAULT_MAX_RESULTS
}

impl ToolArguments for PackageSearchArgs {
    fn shape() -> ArgumentShape {
        ArgumentShape::new(vec![
            FieldSpec::string("query", "Free-text description of the package you need")
                .required()
                .non_empty(),
            FieldSpec::integer(
                "max_results",
                "Maximum number of packages to return",
                1,
                MAX_RESULTS_LIMIT as i64,
            )
            .with_default(DEFAULT_MAX_RESULTS),
        ])
    }
}
