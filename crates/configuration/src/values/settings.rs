//! Settings steering how documents are translated.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MODULE_DIRECTIVE: &str = "catalog";
pub const DEFAULT_MODULE_ARGUMENT: &str = "module";
pub const DEFAULT_IDENTITY_FIELD: &str = "id";

/// Translation settings.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize, JsonSchema)]
pub struct Settings {
    /// Name of the directive selecting the catalog module of an operation or fragment,
    /// as in `@catalog(module: "auth")`.
    #[serde(default = "default_module_directive")]
    pub module_directive: String,
    /// Name of the module directive's argument.
    #[serde(default = "default_module_argument")]
    pub module_argument: String,
    /// The property every root selection selects, whether requested or not.
    #[serde(default = "default_identity_field")]
    pub identity_field: String,
}

impl Settings {
    pub fn is_default(&self) -> bool {
        self == &Settings::default()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            module_directive: default_module_directive(),
            module_argument: default_module_argument(),
            identity_field: default_identity_field(),
        }
    }
}

fn default_module_directive() -> String {
    DEFAULT_MODULE_DIRECTIVE.to_string()
}

fn default_module_argument() -> String {
    DEFAULT_MODULE_ARGUMENT.to_string()
}

fn default_identity_field() -> String {
    DEFAULT_IDENTITY_FIELD.to_string()
}
