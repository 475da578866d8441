//! Translate an operation of a document into a QL query.

pub mod directives;
pub mod filtering;
pub mod root;
pub mod selection;
pub mod values;
pub mod variables;

use serde::Serialize;

use query_engine_graphql::graphql::ast::{OperationDefinition, OperationType, SelectionSet};
use query_engine_ql::ql;
use query_engine_ql::ql::ast::Value;

use crate::translation::error::Error;
use crate::translation::helpers::{Env, State};

/// The translation of one operation: its query, and the variables whose values
/// decided the shape of that query, sorted by name. Only these need to be part of
/// the key when the query is cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslatedOperation {
    pub query: ql::ast::Query,
    pub critical_variables: Vec<(String, Value)>,
}

/// Translate an operation. Every included top-level selection becomes a select,
/// and the selects are combined with UNION from left to right.
pub fn translate_operation(
    env: &Env,
    state: &mut State,
    operation: &OperationDefinition,
) -> Result<ql::ast::Query, Error> {
    match operation.operation.unwrap_or(OperationType::Query) {
        OperationType::Query => {}
        other @ (OperationType::Mutation | OperationType::Subscription) => {
            return Err(Error::UnsupportedOperation(other))
        }
    }

    variables::populate_variable_defaults(state, &operation.variables)?;

    let module = directives::get_module(env.settings(), &operation.directives)?;
    let env = env.with_module(module);

    let SelectionSet(selections) = &operation.selection_set;
    let mut selects = vec![];
    for selection in selections {
        if !directives::should_include(state, selection.directives())? {
            tracing::debug!("excluding a top-level selection");
            continue;
        }
        let select = root::translate_root_selection(&env, state, selection)?;
        selects.push(ql::ast::Query::Select(select));
    }

    ql::helpers::union_queries(selects).ok_or_else(|| Error::NoFields {
        operation: operation.name.clone().unwrap_or_default(),
    })
}
