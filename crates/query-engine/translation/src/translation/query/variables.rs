//! Seed variables with their declared defaults and check them against their
//! declared types.

use query_engine_graphql::graphql::ast::VariableDefinition;
use query_engine_metadata::metadata::ImplementationType;
use query_engine_ql::ql::ast::Value;

use super::values;
use crate::translation::error::Error;
use crate::translation::helpers::State;

/// The implementation type values of a built-in GraphQL scalar must be accepted by.
pub fn scalar_implementation_type(name: &str) -> Option<ImplementationType> {
    match name {
        "String" => Some(ImplementationType::Str),
        "Int" => Some(ImplementationType::Int),
        "Float" => Some(ImplementationType::Float),
        "Boolean" => Some(ImplementationType::Bool),
        "ID" => Some(ImplementationType::Uuid),
        _ => None,
    }
}

/// Process the variable declarations of an operation, in order.
pub fn populate_variable_defaults(
    state: &mut State,
    declarations: &[VariableDefinition],
) -> Result<(), Error> {
    for declaration in declarations {
        let VariableDefinition {
            name,
            r#type,
            default_value,
        } = declaration;

        if default_value.is_some() && !r#type.nullable {
            return Err(Error::NonNullableVariableWithDefault(name.clone()));
        }

        let implementation_type =
            scalar_implementation_type(&r#type.name).ok_or_else(|| Error::UnknownVariableType {
                variable: name.clone(),
                type_name: r#type.name.clone(),
            })?;

        if !state.variables.contains(name) {
            let value = match default_value {
                Some(literal) => values::literal_to_value(name, literal)?,
                None => Value::Null,
            };
            tracing::debug!("seeding variable '{}' with {}", name, value);
            state.variables.insert_if_absent(name, value);
        }

        match (r#type.list, state.variables.value(name)?) {
            (_, Value::Null) if r#type.nullable => {}
            (_, Value::Null) => return Err(Error::MissingVariableValue(name.clone())),
            (true, Value::List(elements)) => {
                values::validate_values(name, elements, implementation_type, &r#type.name)?;
            }
            (true, _) => return Err(Error::VariableShouldBeList(name.clone())),
            (false, Value::List(_)) => return Err(Error::VariableShouldNotBeList(name.clone())),
            (false, value) => {
                values::validate_values(
                    name,
                    std::iter::once(value),
                    implementation_type,
                    &r#type.name,
                )?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use query_engine_graphql::graphql::ast::{Literal, VariableType};
    use std::collections::BTreeMap;

    fn declaration(
        name: &str,
        type_name: &str,
        nullable: bool,
        list: bool,
        default_value: Option<Literal>,
    ) -> VariableDefinition {
        VariableDefinition {
            name: name.to_string(),
            r#type: VariableType {
                name: type_name.to_string(),
                nullable,
                list,
            },
            default_value,
        }
    }

    fn state_with(values: &[(&str, Value)]) -> State {
        State::new(
            &values
                .iter()
                .map(|(name, value)| ((*name).to_string(), value.clone()))
                .collect(),
        )
    }

    #[test]
    fn test_defaults_seed_absent_variables_only() {
        let mut state = state_with(&[("given", Value::Integer(5))]);
        populate_variable_defaults(
            &mut state,
            &[
                declaration("given", "Int", true, false, Some(Literal::Int(1))),
                declaration("seeded", "Int", true, false, Some(Literal::Int(2))),
                declaration("absent", "String", true, false, None),
            ],
        )
        .unwrap();

        assert_eq!(state.variables.value("given"), Ok(&Value::Integer(5)));
        assert_eq!(state.variables.value("seeded"), Ok(&Value::Integer(2)));
        assert_eq!(state.variables.value("absent"), Ok(&Value::Null));
        assert!(state.variables.critical().is_empty());
    }

    #[test]
    fn test_non_nullable_with_default_is_rejected() {
        let mut state = state_with(&[]);
        assert_eq!(
            populate_variable_defaults(
                &mut state,
                &[declaration("limit", "Int", false, false, Some(Literal::Int(10)))],
            ),
            Err(Error::NonNullableVariableWithDefault("limit".to_string()))
        );
    }

    #[test]
    fn test_missing_non_nullable_value() {
        let mut state = state_with(&[("id", Value::Null)]);
        assert_eq!(
            populate_variable_defaults(&mut state, &[declaration("id", "ID", false, false, None)]),
            Err(Error::MissingVariableValue("id".to_string()))
        );
    }

    #[test]
    fn test_list_shape_is_checked() {
        let mut state = state_with(&[("ids", Value::Integer(1)), ("id", Value::from(vec![1_i64]))]);
        assert_eq!(
            populate_variable_defaults(&mut state, &[declaration("ids", "Int", true, true, None)]),
            Err(Error::VariableShouldBeList("ids".to_string()))
        );
        assert_eq!(
            populate_variable_defaults(&mut state, &[declaration("id", "Int", true, false, None)]),
            Err(Error::VariableShouldNotBeList("id".to_string()))
        );
    }

    #[test]
    fn test_list_elements_are_validated() {
        let mut state = state_with(&[(
            "scores",
            Value::from(vec![Value::Real(1.5), Value::from("x")]),
        )]);
        assert_eq!(
            populate_variable_defaults(
                &mut state,
                &[declaration("scores", "Float", true, true, None)]
            ),
            Err(Error::ValueTypeMismatch {
                name: "scores".to_string(),
                value: Value::from("x"),
                expected: "Float".to_string(),
            })
        );
    }

    #[test]
    fn test_unknown_scalar_type() {
        let mut state = state_with(&[]);
        assert_eq!(
            populate_variable_defaults(
                &mut state,
                &[declaration("when", "DateTime", true, false, None)]
            ),
            Err(Error::UnknownVariableType {
                variable: "when".to_string(),
                type_name: "DateTime".to_string(),
            })
        );
    }

    #[test]
    fn test_scalars_map_to_implementation_types() {
        let scalars = BTreeMap::from([
            ("String", ImplementationType::Str),
            ("Int", ImplementationType::Int),
            ("Float", ImplementationType::Float),
            ("Boolean", ImplementationType::Bool),
            ("ID", ImplementationType::Uuid),
        ]);
        for (name, implementation_type) in scalars {
            assert_eq!(scalar_implementation_type(name), Some(implementation_type));
        }
        assert_eq!(scalar_implementation_type("Date"), None);
    }
}
