//! Errors that can be thrown when processing configuration.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The errors that can be thrown when parsing a configuration directory.
#[derive(Debug, Error)]
pub enum ParseConfigurationError {
    #[error("parse error on {file_path}:{line}:{column}: {message}")]
    ParseError {
        file_path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
    #[error("unsupported configuration version {0}, expected version {1}")]
    UnsupportedVersion(u32, u32),
    #[error("I/O error: {0}")]
    IoErrorButStringified(String),
}

/// The errors that can be thrown when writing a configuration directory.
#[derive(Debug, Error)]
pub enum WriteParsedConfigurationError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// The errors that can be thrown when turning a parsed configuration into a runtime one.
#[derive(Debug, Error)]
pub enum MakeRuntimeConfigurationError {
    #[error("invalid metadata: {0}")]
    InvalidMetadata(MultiError),
    #[error("the setting '{setting}' must not be empty")]
    EmptySetting { setting: &'static str },
}

/// A problem with the schema catalog described by the metadata.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    #[error("the default module must not be empty")]
    EmptyDefaultModule,
    #[error("type name '{0}' is not qualified with a module")]
    UnqualifiedTypeName(String),
    #[error("type '{0}' is declared both as an object type and as a scalar type")]
    DuplicateTypeName(String),
    #[error("type '{type_name}' extends unknown type '{base}'")]
    UnknownBase { type_name: String, base: String },
    #[error("type '{type_name}' extends scalar type '{base}'")]
    ScalarBase { type_name: String, base: String },
    #[error("pointer '{pointer}' of type '{type_name}' targets unknown type '{target}'")]
    UnknownPointerTarget {
        type_name: String,
        pointer: String,
        target: String,
    },
    #[error("type '{0}' inherits from itself")]
    CyclicInheritance(String),
}

/// Several metadata errors, reported together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiError(pub Vec<MetadataError>);

impl fmt::Display for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let MultiError(errors) = self;
        for (index, error) in errors.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for MultiError {}
