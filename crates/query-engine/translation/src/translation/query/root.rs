//! Translate a top-level selection into a select query.

use query_engine_graphql::graphql::ast::{Selection, SelectionSet};
use query_engine_ql::ql;
use query_engine_ql::ql::ast::Path;

use super::{filtering, selection};
use crate::translation::error::Error;
use crate::translation::helpers::{Env, State};

/// Translate a top-level selection. Its name is a type of the operation's module,
/// its arguments filter that type, and its selection set becomes the shape.
pub fn translate_root_selection(
    env: &Env,
    state: &mut State,
    root_selection: &Selection,
) -> Result<ql::ast::Select, Error> {
    let field = match root_selection {
        Selection::Field(field) => field,
        Selection::InlineFragment(_) | Selection::FragmentSpread(_) => {
            return Err(Error::FragmentAtRoot)
        }
    };

    env.lookup_type(&field.name)?;
    let root = Path::root(field.name.clone());

    let mut shape = match &field.selection_set {
        Some(SelectionSet(selections)) => {
            selection::translate_selection_set(env, state, &root, selections)?
        }
        None => vec![],
    };
    selection::ensure_identity_field(&env.settings().identity_field, &mut shape);

    let filter = filtering::translate_arguments(env, state, &root, &field.arguments)?;

    Ok(ql::helpers::simple_select(
        env.module()
            .map(|module| ql::ast::Namespace(module.to_string())),
        ql::helpers::shaped_path(root, shape),
        filter,
    ))
}
