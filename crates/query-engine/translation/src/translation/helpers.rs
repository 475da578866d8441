//! Helpers for processing a document and building the QL AST.

use std::collections::BTreeMap;

use graphql_translator_configuration::Settings;
use query_engine_graphql::graphql::ast::{Document, FragmentDefinition};
use query_engine_metadata::metadata::{Schema, TypeName};
use query_engine_ql::ql::ast::{Path, Value};

use super::error::Error;

/// Static information for translating one document: the schema, the settings, the
/// document's fragments and, once an operation is being translated, its module.
///
/// Nothing here changes during a translation, and nothing outlives it.
#[derive(Clone, Copy)]
pub struct Env<'request> {
    schema: &'request dyn Schema,
    settings: &'request Settings,
    fragments: &'request Fragments<'request>,
    module: Option<&'request str>,
}

impl<'request> Env<'request> {
    /// Create a new Env by supplying the schema, settings and fragments.
    pub fn new(
        schema: &'request dyn Schema,
        settings: &'request Settings,
        fragments: &'request Fragments<'request>,
    ) -> Env<'request> {
        Env {
            schema,
            settings,
            fragments,
            module: None,
        }
    }

    /// The same environment, resolving unqualified type names in `module`.
    pub fn with_module(&self, module: Option<&'request str>) -> Env<'request> {
        Env { module, ..*self }
    }

    pub fn schema(&self) -> &'request dyn Schema {
        self.schema
    }

    pub fn settings(&self) -> &'request Settings {
        self.settings
    }

    /// The module of the operation being translated. `None` is the default module.
    pub fn module(&self) -> Option<&'request str> {
        self.module
    }

    /// Lookup a type in the operation's module.
    pub fn lookup_type(&self, name: &str) -> Result<TypeName, Error> {
        self.lookup_type_in(self.module, name)
    }

    /// Lookup a type in a specific module.
    pub fn lookup_type_in(&self, module: Option<&str>, name: &str) -> Result<TypeName, Error> {
        Ok(self.schema.lookup_type(module, name)?)
    }

    /// Lookup the type a path leads to, following its links from the root type.
    pub fn lookup_path_type(&self, path: &Path) -> Result<TypeName, Error> {
        let root = self.lookup_type(&path.root)?;
        path.links.iter().try_fold(root, |current, link| {
            Ok(self.schema.resolve_pointer(&current, link)?)
        })
    }

    /// Lookup a fragment of the document by name.
    pub fn lookup_fragment(&self, name: &str) -> Result<&'request FragmentDefinition, Error> {
        self.fragments.lookup(name)
    }
}

/// The fragment definitions of a document, by name.
#[derive(Debug, Default)]
pub struct Fragments<'request>(BTreeMap<&'request str, &'request FragmentDefinition>);

impl<'request> Fragments<'request> {
    /// Collect the fragments of a document. Fragment names must be unique.
    pub fn collect(document: &'request Document) -> Result<Fragments<'request>, Error> {
        let mut fragments = BTreeMap::new();
        for fragment in document.fragments() {
            if fragments.insert(fragment.name.as_str(), fragment).is_some() {
                return Err(Error::DuplicateFragment(fragment.name.clone()));
            }
        }
        Ok(Fragments(fragments))
    }

    pub fn lookup(&self, name: &str) -> Result<&'request FragmentDefinition, Error> {
        self.0
            .get(name)
            .copied()
            .ok_or_else(|| Error::FragmentNotFound(name.to_string()))
    }
}

/// Mutable state for translating one operation.
#[derive(Debug)]
pub struct State {
    pub variables: Variables,
    /// The fragment spreads we are currently inside of, outermost first.
    fragment_stack: Vec<String>,
}

impl State {
    pub fn new(values: &BTreeMap<String, Value>) -> State {
        State {
            variables: Variables::new(values),
            fragment_stack: vec![],
        }
    }

    /// Record that we are entering a fragment spread. Spreading a fragment from
    /// within itself is an error.
    pub fn enter_fragment(&mut self, name: &str) -> Result<(), Error> {
        if self.fragment_stack.iter().any(|entered| entered == name) {
            return Err(Error::FragmentCycle(name.to_string()));
        }
        self.fragment_stack.push(name.to_string());
        Ok(())
    }

    pub fn leave_fragment(&mut self) {
        self.fragment_stack.pop();
    }
}

#[derive(Debug, Clone)]
struct VariableEntry {
    value: Value,
    /// Did this variable decide the shape of the query?
    critical: bool,
}

/// The variables of an operation, and whether they are critical to the shape of
/// the translated query.
///
/// Values never change once the operation's declarations were processed, and a
/// critical variable never becomes uncritical.
#[derive(Debug, Clone)]
pub struct Variables(BTreeMap<String, VariableEntry>);

impl Variables {
    pub fn new(values: &BTreeMap<String, Value>) -> Variables {
        Variables(
            values
                .iter()
                .map(|(name, value)| {
                    (
                        name.clone(),
                        VariableEntry {
                            value: value.clone(),
                            critical: false,
                        },
                    )
                })
                .collect(),
        )
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Give a variable a value, unless the caller already supplied one.
    pub fn insert_if_absent(&mut self, name: &str, value: Value) {
        self.0
            .entry(name.to_string())
            .or_insert(VariableEntry {
                value,
                critical: false,
            });
    }

    /// Read a variable without marking it critical.
    pub fn value(&self, name: &str) -> Result<&Value, Error> {
        self.0
            .get(name)
            .map(|entry| &entry.value)
            .ok_or_else(|| Error::VariableNotFound(name.to_string()))
    }

    /// Read a variable whose value decides the shape of the query.
    pub fn read_critical(&mut self, name: &str) -> Result<&Value, Error> {
        let entry = self
            .0
            .get_mut(name)
            .ok_or_else(|| Error::VariableNotFound(name.to_string()))?;
        entry.critical = true;
        Ok(&entry.value)
    }

    /// The critical variables and their values, sorted by name.
    pub fn critical(&self) -> Vec<(String, Value)> {
        self.0
            .iter()
            .filter(|(_, entry)| entry.critical)
            .map(|(name, entry)| (name.clone(), entry.value.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_critical_variables_are_sorted_and_sticky() {
        let mut variables = Variables::new(&BTreeMap::from([
            ("b".to_string(), Value::Boolean(true)),
            ("a".to_string(), Value::Boolean(false)),
            ("c".to_string(), Value::Integer(1)),
        ]));

        variables.read_critical("b").unwrap();
        variables.read_critical("a").unwrap();
        variables.value("c").unwrap();
        variables.read_critical("b").unwrap();

        assert_eq!(
            variables.critical(),
            vec![
                ("a".to_string(), Value::Boolean(false)),
                ("b".to_string(), Value::Boolean(true)),
            ]
        );
    }

    #[test]
    fn test_supplied_values_win_over_defaults() {
        let mut variables = Variables::new(&BTreeMap::from([("a".to_string(), Value::Null)]));
        variables.insert_if_absent("a", Value::Integer(1));
        variables.insert_if_absent("b", Value::Integer(2));

        assert_eq!(variables.value("a"), Ok(&Value::Null));
        assert_eq!(variables.value("b"), Ok(&Value::Integer(2)));
        assert_eq!(
            variables.value("c"),
            Err(Error::VariableNotFound("c".to_string()))
        );
    }

    #[test]
    fn test_fragment_cycles_are_detected() {
        let mut state = State::new(&BTreeMap::new());
        state.enter_fragment("a").unwrap();
        state.enter_fragment("b").unwrap();
        assert_eq!(
            state.enter_fragment("a"),
            Err(Error::FragmentCycle("a".to_string()))
        );
        state.leave_fragment();
        state.leave_fragment();
        assert_eq!(state.enter_fragment("a"), Ok(()));
    }
}
