//! Evaluate the directives that select a module, or include and skip selections.

use graphql_translator_configuration::Settings;
use query_engine_graphql::graphql::ast::{Directive, Literal};
use query_engine_ql::ql::ast::Value;

use super::values;
use crate::translation::error::Error;
use crate::translation::helpers::State;

pub const INCLUDE_DIRECTIVE: &str = "include";
pub const SKIP_DIRECTIVE: &str = "skip";
pub const CONDITION_ARGUMENT: &str = "if";

/// The module named by the module directive, if there is one. When the directive
/// appears more than once, the last occurrence wins.
pub fn get_module<'a>(
    settings: &Settings,
    directives: &'a [Directive],
) -> Result<Option<&'a str>, Error> {
    directives
        .iter()
        .filter(|directive| directive.name == settings.module_directive)
        .try_fold(None, |_, directive| {
            match directive.argument(&settings.module_argument) {
                Some(Literal::String(module)) => Ok(Some(module.as_str())),
                _ => Err(Error::InvalidDirectiveArgument {
                    directive: directive.name.clone(),
                    argument: settings.module_argument.clone(),
                }),
            }
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conditional {
    Include,
    Skip,
}

/// Should a selection with these directives be translated?
///
/// Every conditional directive is evaluated, and every variable one of them reads
/// becomes critical, even when an earlier directive already excluded the selection.
pub fn should_include(state: &mut State, directives: &[Directive]) -> Result<bool, Error> {
    let mut include = true;
    for directive in directives {
        let conditional = match directive.name.as_str() {
            INCLUDE_DIRECTIVE => Conditional::Include,
            SKIP_DIRECTIVE => Conditional::Skip,
            _ => continue,
        };

        let condition = match directive.argument(CONDITION_ARGUMENT) {
            None | Some(Literal::Object(_)) => Err(Error::InvalidDirectiveArgument {
                directive: directive.name.clone(),
                argument: CONDITION_ARGUMENT.to_string(),
            }),
            Some(Literal::Variable(name)) => state.variables.read_critical(name).cloned(),
            Some(literal) => values::decode_literal(literal, &state.variables),
        }?;

        match (conditional, condition) {
            (Conditional::Include, Value::Boolean(false))
            | (Conditional::Skip, Value::Boolean(true)) => include = false,
            (_, Value::Boolean(_)) => {}
            (_, value) => {
                return Err(Error::NonBooleanCondition {
                    directive: directive.name.clone(),
                    value,
                })
            }
        }
    }
    Ok(include)
}
