//! The parsed GraphQL documents accepted by the translator.
//! Producing these trees from source text is the job of a parser upstream.

pub mod ast;
