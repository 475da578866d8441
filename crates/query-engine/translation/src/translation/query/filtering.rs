//! Handle filtering: translate the arguments of a selection into a filter expression.

use enum_iterator::Sequence;

use query_engine_graphql::graphql::ast::Argument;
use query_engine_ql::ql;
use query_engine_ql::ql::ast::{Path, Value};

use super::values;
use crate::translation::error::Error;
use crate::translation::helpers::{Env, State};

/// Separates the segments of an argument name, as in `author__name__eq`.
pub const SEGMENT_SEPARATOR: &str = "__";

/// The comparison an argument asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Sequence)]
pub enum ArgumentOperator {
    Equals,
    NotEquals,
    In,
    NotIn,
}

impl ArgumentOperator {
    /// The suffix selecting this operator in an argument name.
    pub fn suffix(self) -> &'static str {
        match self {
            ArgumentOperator::Equals => "eq",
            ArgumentOperator::NotEquals => "ne",
            ArgumentOperator::In => "in",
            ArgumentOperator::NotIn => "ni",
        }
    }

    pub fn from_suffix(suffix: &str) -> Option<ArgumentOperator> {
        enum_iterator::all::<ArgumentOperator>().find(|operator| operator.suffix() == suffix)
    }

    /// Does this operator compare against a list of values?
    pub fn is_membership(self) -> bool {
        matches!(self, ArgumentOperator::In | ArgumentOperator::NotIn)
    }

    pub fn to_binary_operator(self) -> ql::ast::BinaryOperator {
        match self {
            ArgumentOperator::Equals => ql::ast::BinaryOperator::Equals,
            ArgumentOperator::NotEquals => ql::ast::BinaryOperator::NotEquals,
            ArgumentOperator::In => ql::ast::BinaryOperator::In,
            ArgumentOperator::NotIn => ql::ast::BinaryOperator::NotIn,
        }
    }
}

/// A parsed argument name: the links leading to the compared property, and the
/// comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentName {
    pub segments: Vec<String>,
    pub operator: ArgumentOperator,
}

impl ArgumentName {
    /// Parse `segment ("__" segment)*`. A trailing operator suffix only counts as
    /// such when it follows at least one other segment.
    pub fn parse(name: &str) -> Result<ArgumentName, Error> {
        let mut segments: Vec<&str> = name.split(SEGMENT_SEPARATOR).collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(Error::MalformedArgumentName(name.to_string()));
        }

        let operator = match segments.as_slice() {
            [_, .., last] => ArgumentOperator::from_suffix(last),
            _ => None,
        };
        if operator.is_some() {
            segments.pop();
        }

        Ok(ArgumentName {
            segments: segments.into_iter().map(ToString::to_string).collect(),
            operator: operator.unwrap_or(ArgumentOperator::Equals),
        })
    }
}

/// Translate the arguments of a selection at `base` into one filter, joined with
/// AND in argument order. `None` when there are no arguments.
pub fn translate_arguments(
    env: &Env,
    state: &State,
    base: &Path,
    arguments: &[Argument],
) -> Result<Option<ql::ast::Expression>, Error> {
    let comparisons = arguments
        .iter()
        .map(|argument| translate_argument(env, state, base, argument))
        .collect::<Result<Vec<_>, Error>>()?;
    Ok(ql::helpers::and_all(comparisons))
}

fn translate_argument(
    env: &Env,
    state: &State,
    base: &Path,
    argument: &Argument,
) -> Result<ql::ast::Expression, Error> {
    let ArgumentName { segments, operator } = ArgumentName::parse(&argument.name)?;
    let path = segments
        .into_iter()
        .fold(base.clone(), |path, segment| path.extend(segment));

    let right = values::translate_literal(&argument.value)?;
    let value = values::decode_literal(&argument.value, &state.variables)?;
    validate_argument(env, &argument.name, &path, &value, operator)?;

    Ok(ql::helpers::binary_operation(
        ql::ast::Expression::Path(path),
        operator.to_binary_operator(),
        right,
    ))
}

/// Check the value of an argument against the type its path leads to.
fn validate_argument(
    env: &Env,
    name: &str,
    path: &Path,
    value: &Value,
    operator: ArgumentOperator,
) -> Result<(), Error> {
    // null does not constrain the comparison
    if value.is_null() {
        return Ok(());
    }

    let target = env.lookup_path_type(path)?;
    let implementation_type = env.schema().implementation_type(&target).ok_or_else(|| {
        Error::ValueTypeMismatch {
            name: name.to_string(),
            value: value.clone(),
            expected: target.to_string(),
        }
    })?;

    match (operator.is_membership(), value) {
        (true, Value::List(elements)) => {
            values::validate_values(name, elements, implementation_type, &target)
        }
        (true, _) => Err(Error::ArgumentShouldBeList(name.to_string())),
        (false, value) => {
            values::validate_values(name, std::iter::once(value), implementation_type, &target)
        }
    }
}
