//! Handle the translation of literal values, and check values against the types
//! that store them.

use std::fmt;

use query_engine_graphql::graphql::ast::Literal;
use query_engine_metadata::metadata::ImplementationType;
use query_engine_ql::ql;
use query_engine_ql::ql::ast::{Value, ValueKind};

use crate::translation::error::Error;
use crate::translation::helpers::Variables;

/// Convert a literal into a QL expression. Variables become placeholders, so the
/// expression does not depend on their current values.
pub fn translate_literal(literal: &Literal) -> Result<ql::ast::Expression, Error> {
    match literal {
        Literal::Variable(name) => Ok(ql::helpers::variable(name.clone())),
        Literal::List(elements) => Ok(ql::helpers::sequence(
            elements
                .iter()
                .map(translate_literal)
                .collect::<Result<Vec<_>, Error>>()?,
        )),
        Literal::Object(_) => Err(Error::ObjectLiteral),
        Literal::Int(int) => Ok(ql::helpers::value(Value::Integer(*int))),
        Literal::Float(float) => Ok(ql::helpers::value(Value::Real(*float))),
        Literal::String(string) | Literal::Enum(string) => {
            Ok(ql::helpers::value(Value::Text(string.clone())))
        }
        Literal::Boolean(boolean) => Ok(ql::helpers::value(Value::Boolean(*boolean))),
        Literal::Null => Ok(ql::helpers::value(Value::Null)),
    }
}

/// The value a literal stands for, reading variables from the environment.
/// Reading a variable here does not make it critical.
pub fn decode_literal(literal: &Literal, variables: &Variables) -> Result<Value, Error> {
    to_value(literal, &mut |name| variables.value(name).cloned())
}

/// The value of a constant literal, such as the default of the variable `variable`.
pub fn literal_to_value(variable: &str, literal: &Literal) -> Result<Value, Error> {
    to_value(literal, &mut |_| {
        Err(Error::VariableInDefault(variable.to_string()))
    })
}

fn to_value(
    literal: &Literal,
    read_variable: &mut dyn FnMut(&str) -> Result<Value, Error>,
) -> Result<Value, Error> {
    match literal {
        Literal::Variable(name) => read_variable(name),
        Literal::Int(int) => Ok(Value::Integer(*int)),
        Literal::Float(float) => Ok(Value::Real(*float)),
        Literal::String(string) | Literal::Enum(string) => Ok(Value::Text(string.clone())),
        Literal::Boolean(boolean) => Ok(Value::Boolean(*boolean)),
        Literal::Null => Ok(Value::Null),
        Literal::List(elements) => Ok(Value::List(
            elements
                .iter()
                .map(|element| to_value(element, read_variable))
                .collect::<Result<Vec<_>, Error>>()?,
        )),
        Literal::Object(_) => Err(Error::ObjectLiteral),
    }
}

/// The implementation types that accept values of a kind.
pub fn accepting_types(kind: ValueKind) -> &'static [ImplementationType] {
    match kind {
        ValueKind::Text => &[ImplementationType::Str, ImplementationType::Uuid],
        ValueKind::Integer => &[
            ImplementationType::Int,
            ImplementationType::Float,
            ImplementationType::Decimal,
            ImplementationType::Uuid,
        ],
        ValueKind::Real => &[ImplementationType::Float, ImplementationType::Decimal],
        ValueKind::Boolean => &[ImplementationType::Bool],
        ValueKind::Null | ValueKind::List => &[],
    }
}

/// Is a value accepted by a type implemented with `implementation_type`?
pub fn is_accepted(value: &Value, implementation_type: ImplementationType) -> bool {
    accepting_types(value.kind()).contains(&implementation_type)
}

/// Check that every value is accepted by `implementation_type`. `name` is the
/// argument or variable the values belong to, `expected` the type named in errors.
pub fn validate_values<'a>(
    name: &str,
    values: impl IntoIterator<Item = &'a Value>,
    implementation_type: ImplementationType,
    expected: &dyn fmt::Display,
) -> Result<(), Error> {
    match values
        .into_iter()
        .find(|value| !is_accepted(value, implementation_type))
    {
        None => Ok(()),
        Some(value) => Err(Error::ValueTypeMismatch {
            name: name.to_string(),
            value: value.clone(),
            expected: expected.to_string(),
        }),
    }
}
