//! Errors for translation.

use query_engine_graphql::graphql::ast::OperationType;
use query_engine_metadata::metadata::{SchemaError, TypeName};
use query_engine_ql::ql::ast::Value;

/// A type for translation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    // the schema
    TypeNotFound(TypeName),
    PointerNotFound {
        type_name: TypeName,
        pointer: String,
    },
    FragmentNotFound(String),
    // fragments
    IncompatibleFragment {
        fragment: Option<String>,
        fragment_type: TypeName,
        base_type: TypeName,
    },
    // variables
    NonNullableVariableWithDefault(String),
    MissingVariableValue(String),
    VariableShouldBeList(String),
    VariableShouldNotBeList(String),
    UnknownVariableType {
        variable: String,
        type_name: String,
    },
    VariableNotFound(String),
    VariableInDefault(String),
    // directives
    NonBooleanCondition {
        directive: String,
        value: Value,
    },
    InvalidDirectiveArgument {
        directive: String,
        argument: String,
    },
    // values
    ValueTypeMismatch {
        name: String,
        value: Value,
        expected: String,
    },
    ArgumentShouldBeList(String),
    // unsupported
    ObjectLiteral,
    UnsupportedOperation(OperationType),
    FragmentAtRoot,
    // the document itself
    DuplicateFragment(String),
    DuplicateOperation(String),
    FragmentCycle(String),
    MalformedArgumentName(String),
    NoFields {
        operation: String,
    },
}

/// The broad categories translation errors fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A type, link, property or fragment does not exist.
    SchemaReference,
    /// A fragment cannot apply where it is spread.
    TypeIncompatibility,
    /// A variable declaration and the supplied value disagree.
    VariableDeclaration,
    /// A conditional or module directive is malformed.
    DirectiveCondition,
    /// A value is not accepted by the type it is checked against.
    ValueType,
    /// The document uses something the translator does not support.
    UnsupportedConstruct,
    /// The document is malformed as a whole.
    Document,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::TypeNotFound(_) | Error::PointerNotFound { .. } | Error::FragmentNotFound(_) => {
                ErrorKind::SchemaReference
            }
            Error::IncompatibleFragment { .. } => ErrorKind::TypeIncompatibility,
            Error::NonNullableVariableWithDefault(_)
            | Error::MissingVariableValue(_)
            | Error::VariableShouldBeList(_)
            | Error::VariableShouldNotBeList(_)
            | Error::UnknownVariableType { .. }
            | Error::VariableNotFound(_)
            | Error::VariableInDefault(_) => ErrorKind::VariableDeclaration,
            Error::NonBooleanCondition { .. } | Error::InvalidDirectiveArgument { .. } => {
                ErrorKind::DirectiveCondition
            }
            Error::ValueTypeMismatch { .. } | Error::ArgumentShouldBeList(_) => {
                ErrorKind::ValueType
            }
            Error::ObjectLiteral | Error::UnsupportedOperation(_) | Error::FragmentAtRoot => {
                ErrorKind::UnsupportedConstruct
            }
            Error::DuplicateFragment(_)
            | Error::DuplicateOperation(_)
            | Error::FragmentCycle(_)
            | Error::MalformedArgumentName(_)
            | Error::NoFields { .. } => ErrorKind::Document,
        }
    }
}

impl From<SchemaError> for Error {
    fn from(error: SchemaError) -> Self {
        match error {
            SchemaError::TypeNotFound(type_name) => Error::TypeNotFound(type_name),
            SchemaError::PointerNotFound { type_name, pointer } => {
                Error::PointerNotFound { type_name, pointer }
            }
        }
    }
}

/// Display errors.
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::TypeNotFound(type_name) => {
                write!(f, "'{type_name}' does not exist in the schema.")
            }
            Error::PointerNotFound { type_name, pointer } => write!(
                f,
                "'{type_name}' has no link or property named '{pointer}'."
            ),
            Error::FragmentNotFound(name) => write!(f, "Fragment '{name}' is not defined."),
            Error::IncompatibleFragment {
                fragment: Some(name),
                fragment_type,
                base_type,
            } => write!(
                f,
                "Fragment '{name}' on '{fragment_type}' is incompatible with '{base_type}'."
            ),
            Error::IncompatibleFragment {
                fragment: None,
                fragment_type,
                base_type,
            } => write!(
                f,
                "Inline fragment on '{fragment_type}' is incompatible with '{base_type}'."
            ),
            Error::NonNullableVariableWithDefault(name) => write!(
                f,
                "Variable '{name}' cannot be non-nullable and have a default."
            ),
            Error::MissingVariableValue(name) => {
                write!(f, "Non-nullable variable '{name}' is missing a value.")
            }
            Error::VariableShouldBeList(name) => write!(f, "Variable '{name}' should be a List."),
            Error::VariableShouldNotBeList(name) => {
                write!(f, "Variable '{name}' should not be a List.")
            }
            Error::UnknownVariableType {
                variable,
                type_name,
            } => write!(
                f,
                "Variable '{variable}' is declared with unknown type '{type_name}'."
            ),
            Error::VariableNotFound(name) => write!(f, "Variable '{name}' is not defined."),
            Error::VariableInDefault(name) => write!(
                f,
                "The default value of variable '{name}' cannot refer to other variables."
            ),
            Error::NonBooleanCondition { directive, value } => write!(
                f,
                "'if' argument of {directive} directive must be a Boolean, got {value}."
            ),
            Error::InvalidDirectiveArgument {
                directive,
                argument,
            } => write!(
                f,
                "Directive '{directive}' requires a valid '{argument}' argument."
            ),
            Error::ValueTypeMismatch {
                name,
                value,
                expected,
            } => write!(
                f,
                "Value {value} of '{name}' is not accepted by type '{expected}'."
            ),
            Error::ArgumentShouldBeList(name) => write!(f, "Argument '{name}' should be a List."),
            Error::ObjectLiteral => write!(f, "Object literals cannot be translated."),
            Error::UnsupportedOperation(operation) => {
                write!(f, "Operations of type '{operation}' are not supported.")
            }
            Error::FragmentAtRoot => write!(
                f,
                "Fragments are not supported at the root of an operation."
            ),
            Error::DuplicateFragment(name) => {
                write!(f, "Fragment '{name}' is defined more than once.")
            }
            Error::DuplicateOperation(name) if name.is_empty() => {
                write!(f, "The document contains more than one unnamed operation.")
            }
            Error::DuplicateOperation(name) => {
                write!(f, "Operation '{name}' is defined more than once.")
            }
            Error::FragmentCycle(name) => {
                write!(f, "Fragment '{name}' is spread within itself.")
            }
            Error::MalformedArgumentName(name) => {
                write!(f, "Argument name '{name}' is malformed.")
            }
            Error::NoFields { operation } if operation.is_empty() => {
                write!(f, "The unnamed operation selects no fields.")
            }
            Error::NoFields { operation } => {
                write!(f, "Operation '{operation}' selects no fields.")
            }
        }
    }
}

impl std::error::Error for Error {}
