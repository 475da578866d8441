//! Read-only schema lookups used while validating queries.

use std::collections::BTreeSet;
use std::fmt;

use super::catalog::{ImplementationType, TypeName};
use super::Metadata;

/// An error raised by a schema lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    TypeNotFound(TypeName),
    PointerNotFound { type_name: TypeName, pointer: String },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SchemaError::TypeNotFound(type_name) => {
                write!(f, "Type '{type_name}' does not exist in the schema.")
            }
            SchemaError::PointerNotFound { type_name, pointer } => write!(
                f,
                "Type '{type_name}' has no link or property named '{pointer}'."
            ),
        }
    }
}

impl std::error::Error for SchemaError {}

/// The schema a translation is checked against.
///
/// Implementations are consulted, never mutated, so one schema snapshot can serve
/// any number of concurrent translations.
pub trait Schema: Send + Sync {
    /// Find a type by name. Unqualified names are resolved in `module`, or in the
    /// schema's default module when no module is given.
    fn lookup_type(&self, module: Option<&str>, name: &str) -> Result<TypeName, SchemaError>;

    /// Find the target type of the link or property `pointer` on `source`.
    fn resolve_pointer(&self, source: &TypeName, pointer: &str) -> Result<TypeName, SchemaError>;

    /// Is `subtype` equal to, or a (transitive) descendant of, `supertype`?
    fn is_subtype(&self, subtype: &TypeName, supertype: &TypeName) -> bool;

    /// Are the two types related by subtyping in either direction?
    fn is_subtype_or_supertype(&self, left: &TypeName, right: &TypeName) -> bool {
        self.is_subtype(left, right) || self.is_subtype(right, left)
    }

    /// The primitive kind a scalar type is implemented with. Object types have none.
    fn implementation_type(&self, type_name: &TypeName) -> Option<ImplementationType>;
}

impl Metadata {
    fn has_type(&self, type_name: &TypeName) -> bool {
        self.object_types.0.contains_key(type_name.as_str())
            || self.scalar_types.0.contains_key(type_name.as_str())
    }

    /// Depth first search through the type and its bases, in declaration order.
    fn find_pointer<'a>(
        &'a self,
        type_name: &TypeName,
        pointer: &str,
        visited: &mut BTreeSet<&'a str>,
    ) -> Option<&'a str> {
        let (name, info) = self.object_types.0.get_key_value(type_name.as_str())?;
        if !visited.insert(name.as_str()) {
            return None;
        }
        if let Some(pointer_info) = info.pointers.get(pointer) {
            return Some(pointer_info.target.as_str());
        }
        info.bases.iter().find_map(|base| {
            self.find_pointer(&TypeName(base.clone()), pointer, visited)
        })
    }

    fn descends_from<'a>(
        &'a self,
        subtype: &TypeName,
        supertype: &TypeName,
        visited: &mut BTreeSet<&'a str>,
    ) -> bool {
        if subtype == supertype {
            return true;
        }
        let Some((name, info)) = self.object_types.0.get_key_value(subtype.as_str()) else {
            return false;
        };
        if !visited.insert(name.as_str()) {
            return false;
        }
        info.bases
            .iter()
            .any(|base| self.descends_from(&TypeName(base.clone()), supertype, visited))
    }
}

impl Schema for Metadata {
    fn lookup_type(&self, module: Option<&str>, name: &str) -> Result<TypeName, SchemaError> {
        let type_name = TypeName::qualify(module.unwrap_or(&self.default_module), name);
        if self.has_type(&type_name) {
            Ok(type_name)
        } else {
            Err(SchemaError::TypeNotFound(type_name))
        }
    }

    fn resolve_pointer(&self, source: &TypeName, pointer: &str) -> Result<TypeName, SchemaError> {
        if !self.has_type(source) {
            return Err(SchemaError::TypeNotFound(source.clone()));
        }
        self.find_pointer(source, pointer, &mut BTreeSet::new())
            .map(|target| TypeName(target.to_string()))
            .ok_or_else(|| SchemaError::PointerNotFound {
                type_name: source.clone(),
                pointer: pointer.to_string(),
            })
    }

    fn is_subtype(&self, subtype: &TypeName, supertype: &TypeName) -> bool {
        self.descends_from(subtype, supertype, &mut BTreeSet::new())
    }

    fn implementation_type(&self, type_name: &TypeName) -> Option<ImplementationType> {
        self.scalar_types
            .0
            .get(type_name.as_str())
            .map(|scalar| scalar.implementation_type)
    }
}
