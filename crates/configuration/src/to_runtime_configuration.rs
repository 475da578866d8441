//! Convert a parsed configuration into the runtime configuration, checking the
//! schema catalog along the way.

use query_engine_metadata::metadata::{self, Schema, TypeName, MODULE_SEPARATOR};

use crate::configuration::Configuration;
use crate::error::{MakeRuntimeConfigurationError, MetadataError, MultiError};
use crate::values::Settings;
use crate::ParsedConfiguration;

/// Convert the parsed configuration metadata to internal engine metadata
/// That can be used by the translation process.
pub fn make_runtime_configuration(
    parsed_config: ParsedConfiguration,
) -> Result<Configuration, MakeRuntimeConfigurationError> {
    validate_settings(&parsed_config.settings)?;

    let errors = validate_metadata(&parsed_config.metadata);
    if !errors.is_empty() {
        return Err(MakeRuntimeConfigurationError::InvalidMetadata(MultiError(
            errors,
        )));
    }

    Ok(Configuration {
        metadata: parsed_config.metadata,
        settings: parsed_config.settings,
    })
}

fn validate_settings(settings: &Settings) -> Result<(), MakeRuntimeConfigurationError> {
    let settings_to_check = [
        ("module_directive", &settings.module_directive),
        ("module_argument", &settings.module_argument),
        ("identity_field", &settings.identity_field),
    ];
    match settings_to_check
        .into_iter()
        .find(|(_, value)| value.is_empty())
    {
        Some((setting, _)) => Err(MakeRuntimeConfigurationError::EmptySetting { setting }),
        None => Ok(()),
    }
}

/// Collect every inconsistency in the catalog.
pub fn validate_metadata(metadata: &metadata::Metadata) -> Vec<MetadataError> {
    let mut errors = vec![];

    if metadata.default_module.is_empty() {
        errors.push(MetadataError::EmptyDefaultModule);
    }

    let object_types = &metadata.object_types.0;
    let scalar_types = &metadata.scalar_types.0;

    for name in object_types.keys().chain(scalar_types.keys()) {
        if !name.contains(MODULE_SEPARATOR) {
            errors.push(MetadataError::UnqualifiedTypeName(name.clone()));
        }
    }

    for name in object_types.keys() {
        if scalar_types.contains_key(name) {
            errors.push(MetadataError::DuplicateTypeName(name.clone()));
        }
    }

    for (type_name, info) in object_types {
        for base in &info.bases {
            if scalar_types.contains_key(base) {
                errors.push(MetadataError::ScalarBase {
                    type_name: type_name.clone(),
                    base: base.clone(),
                });
            } else if !object_types.contains_key(base) {
                errors.push(MetadataError::UnknownBase {
                    type_name: type_name.clone(),
                    base: base.clone(),
                });
            }
        }

        for (pointer, pointer_info) in &info.pointers {
            if !object_types.contains_key(&pointer_info.target)
                && !scalar_types.contains_key(&pointer_info.target)
            {
                errors.push(MetadataError::UnknownPointerTarget {
                    type_name: type_name.clone(),
                    pointer: pointer.clone(),
                    target: pointer_info.target.clone(),
                });
            }
        }

        // a type is part of a cycle when it can be reached again from its own bases
        let this_type = TypeName(type_name.clone());
        if info
            .bases
            .iter()
            .any(|base| metadata.is_subtype(&TypeName(base.clone()), &this_type))
        {
            errors.push(MetadataError::CyclicInheritance(type_name.clone()));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use metadata::{
        ImplementationType, ObjectTypeInfo, ObjectTypes, PointerInfo, ScalarTypeInfo, ScalarTypes,
    };
    use std::collections::BTreeMap;

    fn object_type(bases: &[&str], pointers: &[(&str, &str)]) -> ObjectTypeInfo {
        ObjectTypeInfo {
            bases: bases.iter().map(ToString::to_string).collect(),
            pointers: pointers
                .iter()
                .map(|(name, target)| {
                    (
                        (*name).to_string(),
                        PointerInfo {
                            target: (*target).to_string(),
                            description: None,
                        },
                    )
                })
                .collect(),
            description: None,
        }
    }

    fn metadata_with(object_types: Vec<(&str, ObjectTypeInfo)>) -> metadata::Metadata {
        metadata::Metadata {
            default_module: "default".to_string(),
            object_types: ObjectTypes(
                object_types
                    .into_iter()
                    .map(|(name, info)| (name.to_string(), info))
                    .collect(),
            ),
            scalar_types: ScalarTypes(BTreeMap::from([(
                "std::str".to_string(),
                ScalarTypeInfo {
                    implementation_type: ImplementationType::Str,
                    description: None,
                },
            )])),
        }
    }

    #[test]
    fn test_consistent_metadata_has_no_errors() {
        let metadata = metadata_with(vec![
            ("default::Named", object_type(&[], &[("name", "std::str")])),
            (
                "default::User",
                object_type(&["default::Named"], &[("friends", "default::User")]),
            ),
        ]);
        assert_eq!(validate_metadata(&metadata), vec![]);
    }

    #[test]
    fn test_unknown_references_are_reported() {
        let metadata = metadata_with(vec![
            (
                "default::User",
                object_type(&["default::Ghost"], &[("age", "std::int64")]),
            ),
            ("Unqualified", object_type(&["std::str"], &[])),
        ]);
        assert_eq!(
            validate_metadata(&metadata),
            vec![
                MetadataError::UnqualifiedTypeName("Unqualified".to_string()),
                MetadataError::ScalarBase {
                    type_name: "Unqualified".to_string(),
                    base: "std::str".to_string(),
                },
                MetadataError::UnknownBase {
                    type_name: "default::User".to_string(),
                    base: "default::Ghost".to_string(),
                },
                MetadataError::UnknownPointerTarget {
                    type_name: "default::User".to_string(),
                    pointer: "age".to_string(),
                    target: "std::int64".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_inheritance_cycles_are_reported() {
        let metadata = metadata_with(vec![
            ("default::A", object_type(&["default::B"], &[])),
            ("default::B", object_type(&["default::A"], &[])),
            ("default::C", object_type(&["default::A"], &[])),
        ]);
        assert_eq!(
            validate_metadata(&metadata),
            vec![
                MetadataError::CyclicInheritance("default::A".to_string()),
                MetadataError::CyclicInheritance("default::B".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_settings_are_rejected() {
        let mut parsed = ParsedConfiguration::empty();
        parsed.settings.identity_field = String::new();
        assert!(matches!(
            make_runtime_configuration(parsed),
            Err(MakeRuntimeConfigurationError::EmptySetting {
                setting: "identity_field"
            })
        ));
    }
}
