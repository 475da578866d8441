//! Translate the operations of a GraphQL document into QL queries, and find the
//! variables each translation depends on.

pub mod error;
pub mod helpers;
pub mod query;
pub mod request;

use std::collections::BTreeMap;

use indexmap::IndexMap;

use graphql_translator_configuration::{Configuration, Settings};
use query_engine_graphql::graphql::ast::Document;
use query_engine_metadata::metadata::Schema;
use query_engine_ql::ql::ast::Value;

use error::Error;
use helpers::{Env, Fragments, State};
use query::TranslatedOperation;
use request::TranslationRequest;

/// The values the caller supplies for the variables of a document.
pub type VariableValues = BTreeMap<String, Value>;

/// Translate every operation of a document, in document order, keyed by operation
/// name. An unnamed operation is keyed by the empty string.
///
/// The result only depends on the document, the variables and the schema. The first
/// operation that fails to translate fails the whole call.
pub fn translate(
    schema: &dyn Schema,
    settings: &Settings,
    document: &Document,
    variables: &VariableValues,
) -> Result<IndexMap<String, TranslatedOperation>, Error> {
    let fragments = Fragments::collect(document)?;
    let env = Env::new(schema, settings, &fragments);

    let mut translated = IndexMap::new();
    for operation in document.operations() {
        let name = operation.name.clone().unwrap_or_default();
        if translated.contains_key(&name) {
            return Err(Error::DuplicateOperation(name));
        }

        let _span = tracing::info_span!("translate_operation", operation = %name).entered();
        let mut state = State::new(variables);
        let query = query::translate_operation(&env, &mut state, operation)?;
        let critical_variables = state.variables.critical();

        tracing::info!("QL AST: {:?}", query);
        tracing::info!("Critical variables: {:?}", critical_variables);

        translated.insert(
            name,
            TranslatedOperation {
                query,
                critical_variables,
            },
        );
    }
    Ok(translated)
}

/// Translate a request against the catalog and settings of a configuration.
pub fn translate_request(
    configuration: &Configuration,
    request: &TranslationRequest,
) -> Result<IndexMap<String, TranslatedOperation>, Error> {
    translate(
        &configuration.metadata,
        &configuration.settings,
        &request.document,
        &request.variables,
    )
}
