//! Type definitions of the QL AST representation.

use std::fmt;

use enum_iterator::Sequence;
use nonempty::NonEmpty;
use serde::{Deserialize, Serialize};

/// A query: a single SELECT, or a set operation combining two queries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Query {
    Select(Select),
    SetOperation {
        left: Box<Query>,
        operator: SetOperator,
        right: Box<Query>,
    },
}

/// A SELECT query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Select {
    /// The module names are resolved in. `None` means the default module.
    pub namespace: Option<Namespace>,
    pub targets: NonEmpty<Expression>,
    pub filter: Option<Expression>,
}

/// The module a query's names are resolved in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Namespace(pub String);

/// An operator combining the results of two queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SetOperator {
    Union,
}

/// A path through the schema: a root type followed by the links taken from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Path {
    pub root: String,
    pub links: Vec<String>,
}

impl Path {
    /// A path consisting of the root step only.
    pub fn root(root: impl Into<String>) -> Path {
        Path {
            root: root.into(),
            links: vec![],
        }
    }

    /// A copy of this path, followed by one more link.
    pub fn extend(&self, link: impl Into<String>) -> Path {
        let mut path = self.clone();
        path.links.push(link.into());
        path
    }
}

/// One element of a selection shape: a link, what to select from it and which of its
/// targets to keep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeElement {
    pub link: String,
    pub filter: Option<Expression>,
    pub shape: Vec<ShapeElement>,
}

/// An expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expression {
    /// A path with the shape of the data to select from it
    ShapedPath { path: Path, shape: Vec<ShapeElement> },
    /// A plain path
    Path(Path),
    /// A binary operation on two expressions
    BinaryOperation {
        left: Box<Expression>,
        operator: BinaryOperator,
        right: Box<Expression>,
    },
    /// A constant, or a reference to a query variable
    Constant(Constant),
    /// An ordered sequence of expressions, used with membership operators
    Sequence { elements: Vec<Expression> },
}

/// A binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOperator {
    Equals,
    NotEquals,
    In,
    NotIn,
    And,
}

/// A constant
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Constant {
    /// A value known at translation time
    Value(Value),
    /// A placeholder for the value of the named variable, bound when the query runs
    Variable(String),
}

/// Runtime values: literals, defaults and the values of variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    Text(String),
    List(Vec<Value>),
}

/// The kind of a runtime value, without its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence)]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Real,
    Text,
    List,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Integer(_) => ValueKind::Integer,
            Value::Real(_) => ValueKind::Real,
            Value::Text(_) => ValueKind::Text,
            Value::List(_) => ValueKind::List,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Real(r) => write!(f, "{r:?}"),
            Value::Text(s) => write!(f, "{s:?}"),
            Value::List(values) => {
                write!(f, "[")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Real => "real",
            ValueKind::Text => "text",
            ValueKind::List => "list",
        };
        write!(f, "{name}")
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}
