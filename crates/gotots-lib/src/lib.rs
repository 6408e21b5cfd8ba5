//! gotots: TypeScript type definitions from Go source.
//!
//! The pipeline is a single pass over one file:
//! - `parser` - tree-sitter Go syntax tree lowered to [`SourceFile`]
//! - `typegen` - declaration walker and type translators for TypeScript
//!
//! [`generate`] runs both steps.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod parser;
pub mod typegen;

#[cfg(test)]
mod lib_tests;

pub use gotots_core::{SourceFile, StructField, TypeDeclaration, TypeExpr};
pub use typegen::typescript::{Config, emit_typescript};

/// Errors that can occur while reading Go source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The source contains a syntax error (1-based position of the first one).
    #[error("syntax error at line {line}, column {column}")]
    Syntax { line: usize, column: usize },

    /// The file has no `package` clause.
    #[error("missing package clause")]
    MissingPackage,

    /// The Go grammar could not be loaded into the parser.
    #[error("failed to load Go grammar: {0}")]
    Language(String),
}

/// Result type for gotots operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Parse `source` and render its type declarations as TypeScript.
///
/// `file_name` only appears in the generated header.
pub fn generate(source: &str, file_name: &str, config: &Config) -> Result<String> {
    let file = parser::parse(source)?;
    Ok(emit_typescript(&file, file_name, config))
}
