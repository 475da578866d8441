//! Metadata information regarding the schema catalog queries are validated against.

pub mod catalog;
pub mod schema;

// re-export without modules
pub use catalog::*;
pub use schema::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The module unqualified type names resolve against when nothing else is specified.
pub const DEFAULT_MODULE: &str = "default";

/// Metadata information.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema)]
pub struct Metadata {
    /// Module used to qualify type names that do not name one.
    #[serde(default = "default_module")]
    pub default_module: String,
    #[serde(default)]
    pub object_types: ObjectTypes,
    #[serde(default)]
    pub scalar_types: ScalarTypes,
}

fn default_module() -> String {
    DEFAULT_MODULE.to_string()
}

impl Default for Metadata {
    fn default() -> Self {
        Self::empty()
    }
}

impl Metadata {
    pub fn empty() -> Self {
        Metadata {
            default_module: default_module(),
            object_types: ObjectTypes::empty(),
            scalar_types: ScalarTypes::empty(),
        }
    }
}
