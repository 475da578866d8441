//! Metadata information regarding the object and scalar types of the catalog.

use std::collections::BTreeMap;
use std::fmt;

use enum_iterator::Sequence;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Separates the module from the name in a qualified type name.
pub const MODULE_SEPARATOR: &str = "::";

/// A fully qualified type name, such as `default::User`.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub struct TypeName(pub String);

impl TypeName {
    /// Qualify `name` with `module`, unless it is already qualified.
    pub fn qualify(module: &str, name: &str) -> TypeName {
        if name.contains(MODULE_SEPARATOR) {
            TypeName(name.to_string())
        } else {
            TypeName(format!("{module}{MODULE_SEPARATOR}{name}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let TypeName(name) = self;
        write!(f, "{name}")
    }
}

/// The primitive storage kinds scalar types are implemented with.
/// Literal and variable values are checked against these.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ImplementationType {
    Str,
    Int,
    Float,
    Decimal,
    Bool,
    Uuid,
    Datetime,
    Json,
    Bytes,
}

impl ImplementationType {
    /// The name of the implementation type as it appears in the configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Int => "int",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::Bool => "bool",
            Self::Uuid => "uuid",
            Self::Datetime => "datetime",
            Self::Json => "json",
            Self::Bytes => "bytes",
        }
    }
}

impl fmt::Display for ImplementationType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Mapping from a qualified object type name to its information.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct ObjectTypes(pub BTreeMap<String, ObjectTypeInfo>);

impl ObjectTypes {
    pub fn empty() -> Self {
        ObjectTypes(BTreeMap::new())
    }
}

/// Information about an object type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct ObjectTypeInfo {
    /// Qualified names of the types this one extends, in resolution order.
    #[serde(default)]
    pub bases: Vec<String>,
    /// Links and properties declared directly on this type.
    #[serde(default)]
    pub pointers: BTreeMap<String, PointerInfo>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Information about a link or a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PointerInfo {
    /// Qualified name of the type the pointer leads to. Links target object
    /// types, properties target scalar types.
    pub target: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Mapping from a qualified scalar type name to its information.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct ScalarTypes(pub BTreeMap<String, ScalarTypeInfo>);

impl ScalarTypes {
    pub fn empty() -> Self {
        ScalarTypes(BTreeMap::new())
    }
}

/// Information about a scalar type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScalarTypeInfo {
    pub implementation_type: ImplementationType,
    #[serde(default)]
    pub description: Option<String>,
}
