//! Type definitions of the target query language AST, and helpers to build it.
//! Rendering these trees as text is left to the consumer.

pub mod ast;
pub mod helpers;
