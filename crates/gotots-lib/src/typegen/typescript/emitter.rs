//! Declaration walker and output assembly.

use std::fmt;

use gotots_core::{SourceFile, TypeDeclaration, TypeExpr};

use super::Config;
use super::comments::format_comment;
use super::render::{Context, render_struct, render_type};

/// Output for one declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedBlock {
    pub name: String,
    pub exported: bool,
    /// Formatted comment block placed before the definition.
    pub doc: Option<String>,
    pub body: String,
}

impl fmt::Display for RenderedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(doc) = &self.doc {
            f.write_str(doc)?;
        }
        if self.exported {
            f.write_str("export ")?;
        }
        writeln!(f, "type {} = {}", self.name, self.body)
    }
}

/// Render one top-level declaration.
///
/// Interfaces have no value representation and yield `None`.
pub fn render_declaration(decl: &TypeDeclaration, ctx: Context<'_>) -> Option<RenderedBlock> {
    let body = match &decl.ty {
        TypeExpr::Interface => {
            tracing::debug!(name = %decl.name, "skipping interface declaration");
            return None;
        }
        TypeExpr::Struct(fields) => render_struct(fields, ctx),
        other => render_type(other, ctx),
    };

    let doc = match &decl.doc {
        Some(doc) if ctx.config.comments => Some(format_comment(doc, "")),
        _ => None,
    };

    Some(RenderedBlock {
        name: decl.name.clone(),
        exported: ctx.config.export && decl.is_exported(),
        doc,
        body,
    })
}

/// TypeScript emitter for one parsed file.
pub struct Emitter<'a> {
    file: &'a SourceFile,
    file_name: &'a str,
    config: &'a Config,
    /// Output buffer
    output: String,
}

impl<'a> Emitter<'a> {
    pub fn new(file: &'a SourceFile, file_name: &'a str, config: &'a Config) -> Self {
        Self {
            file,
            file_name,
            config,
            output: String::new(),
        }
    }

    /// Emit the header followed by one block per declaration.
    ///
    /// A group's documentation precedes its first declaration even when that
    /// declaration produces no block.
    pub fn emit(mut self) -> String {
        self.output.push_str(&format!(
            "// Generated from file: {}\n// Package name: {}\n\n",
            self.file_name, self.file.package
        ));

        let file = self.file;
        let ctx = Context::new(self.config);
        for decl in &file.declarations {
            let group_doc = decl.group_doc.as_deref().filter(|_| self.config.comments);
            if let Some(doc) = group_doc {
                self.output.push_str(&format_comment(doc, ""));
            }

            let Some(block) = render_declaration(decl, ctx) else {
                if group_doc.is_some() {
                    self.output.push('\n');
                }
                continue;
            };
            tracing::debug!(name = %block.name, exported = block.exported, "emit declaration");
            self.output.push_str(&block.to_string());
            self.output.push('\n');
        }

        // Ensure exactly one trailing newline
        self.output.truncate(self.output.trim_end().len());
        self.output.push('\n');
        self.output
    }
}

/// Emit TypeScript for all declarations of `file`.
pub fn emit_typescript(file: &SourceFile, file_name: &str, config: &Config) -> String {
    Emitter::new(file, file_name, config).emit()
}
