//! Translate selection sets into selection shapes, splicing fragments into their
//! parent shape.

use query_engine_graphql::graphql::ast::{
    Directive, Field, FragmentSpread, InlineFragment, Selection, SelectionSet,
};
use query_engine_ql::ql;
use query_engine_ql::ql::ast::{Path, ShapeElement};

use super::{directives, filtering};
use crate::translation::error::Error;
use crate::translation::helpers::{Env, State};

/// Translate the selections made at `base` into shape elements.
/// Because selections may be nested this function is mutually recursive with
/// 'translate_field' and the fragment translations.
pub fn translate_selection_set(
    env: &Env,
    state: &mut State,
    base: &Path,
    selections: &[Selection],
) -> Result<Vec<ShapeElement>, Error> {
    let mut shape = vec![];
    for selection in selections {
        if !directives::should_include(state, selection.directives())? {
            tracing::debug!("excluding a selection at {:?}", base);
            continue;
        }
        match selection {
            Selection::Field(field) => shape.push(translate_field(env, state, base, field)?),
            Selection::InlineFragment(fragment) => {
                shape.extend(translate_inline_fragment(env, state, base, fragment)?);
            }
            Selection::FragmentSpread(spread) => {
                shape.extend(translate_fragment_spread(env, state, base, spread)?);
            }
        }
    }
    Ok(shape)
}

fn translate_field(
    env: &Env,
    state: &mut State,
    base: &Path,
    field: &Field,
) -> Result<ShapeElement, Error> {
    let path = base.extend(field.name.clone());
    let shape = match &field.selection_set {
        Some(SelectionSet(selections)) => translate_selection_set(env, state, &path, selections)?,
        None => vec![],
    };
    let filter = filtering::translate_arguments(env, state, &path, &field.arguments)?;
    Ok(ShapeElement {
        link: field.name.clone(),
        filter,
        shape,
    })
}

fn translate_inline_fragment(
    env: &Env,
    state: &mut State,
    base: &Path,
    fragment: &InlineFragment,
) -> Result<Vec<ShapeElement>, Error> {
    if let Some(type_condition) = &fragment.type_condition {
        validate_fragment_type(env, base, None, type_condition, &fragment.directives)?;
    }
    let SelectionSet(selections) = &fragment.selection_set;
    translate_selection_set(env, state, base, selections)
}

fn translate_fragment_spread(
    env: &Env,
    state: &mut State,
    base: &Path,
    spread: &FragmentSpread,
) -> Result<Vec<ShapeElement>, Error> {
    let fragment = env.lookup_fragment(&spread.name)?;
    if let Some(type_condition) = &fragment.type_condition {
        validate_fragment_type(
            env,
            base,
            Some(fragment.name.as_str()),
            type_condition,
            &fragment.directives,
        )?;
    }

    state.enter_fragment(&fragment.name)?;
    let SelectionSet(selections) = &fragment.selection_set;
    let shape = translate_selection_set(env, state, base, selections)?;
    state.leave_fragment();
    Ok(shape)
}

/// A fragment applies at `base` when its type and the type `base` leads to are
/// related by subtyping, in either direction. The fragment type is looked up in the
/// module of its own module directive, or else in the operation's module.
fn validate_fragment_type(
    env: &Env,
    base: &Path,
    fragment: Option<&str>,
    type_condition: &str,
    fragment_directives: &[Directive],
) -> Result<(), Error> {
    let module = directives::get_module(env.settings(), fragment_directives)?.or(env.module());
    let fragment_type = env.lookup_type_in(module, type_condition)?;
    let base_type = env.lookup_path_type(base)?;

    if env
        .schema()
        .is_subtype_or_supertype(&base_type, &fragment_type)
    {
        Ok(())
    } else {
        Err(Error::IncompatibleFragment {
            fragment: fragment.map(ToString::to_string),
            fragment_type,
            base_type,
        })
    }
}

/// Select the identity field first, unless the shape already selects it.
pub fn ensure_identity_field(identity_field: &str, shape: &mut Vec<ShapeElement>) {
    if !shape.iter().any(|element| element.link == identity_field) {
        shape.insert(0, ql::helpers::plain_element(identity_field));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_field_is_prepended_once() {
        let mut shape = vec![ql::helpers::plain_element("name")];
        ensure_identity_field("id", &mut shape);
        ensure_identity_field("id", &mut shape);
        assert_eq!(
            shape,
            vec![
                ql::helpers::plain_element("id"),
                ql::helpers::plain_element("name"),
            ]
        );
    }

    #[test]
    fn test_selected_identity_field_keeps_its_position() {
        let mut shape = vec![
            ql::helpers::plain_element("name"),
            ql::helpers::plain_element("id"),
        ];
        ensure_identity_field("id", &mut shape);
        assert_eq!(
            shape,
            vec![
                ql::helpers::plain_element("name"),
                ql::helpers::plain_element("id"),
            ]
        );
    }
}
