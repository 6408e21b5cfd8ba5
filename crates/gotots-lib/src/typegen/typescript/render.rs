//! Type expression rendering.

use gotots_core::{StructField, TypeExpr};

use super::Config;
use super::fields::render_fields;
use super::naming::ts_type_name;

/// Traversal state handed to every recursive rendering step.
///
/// Each step receives its own copy; children get a derived copy, never a
/// shared mutable one.
#[derive(Clone, Copy, Debug)]
pub struct Context<'a> {
    pub(super) config: &'a Config,
    depth: usize,
    nesting: usize,
}

impl<'a> Context<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            depth: 0,
            nesting: 0,
        }
    }

    /// Recursion depth, for tracing only.
    pub fn depth(self) -> usize {
        self.depth
    }

    pub(super) fn descend(self) -> Self {
        Self {
            depth: self.depth + 1,
            ..self
        }
    }

    pub(super) fn enter_struct(self) -> Self {
        Self {
            depth: self.depth + 1,
            nesting: self.nesting + 1,
            ..self
        }
    }

    /// Indentation for lines at the current struct nesting level.
    pub(super) fn indent(self) -> String {
        "  ".repeat(self.nesting)
    }
}

/// Render a type expression as TypeScript type syntax.
pub fn render_type(expr: &TypeExpr, ctx: Context<'_>) -> String {
    tracing::trace!(depth = ctx.depth, kind = expr.kind(), "render type");

    match expr {
        TypeExpr::Named(name) => ts_type_name(name).to_owned(),
        TypeExpr::Pointer(inner) => match inner.as_ref() {
            TypeExpr::Named(name) => format!("{} | null", ts_type_name(name)),
            other => placeholder(other),
        },
        TypeExpr::Sequence(element) => match element.as_ref() {
            TypeExpr::Named(name) => format!("{}[]", ts_type_name(name)),
            other => format!("{}[]", placeholder(other)),
        },
        TypeExpr::Map { key, value } => {
            let inner = ctx.descend();
            format!(
                "Record<{}, {}>",
                render_type(key, inner),
                render_type(value, inner)
            )
        }
        TypeExpr::Struct(fields) => render_struct(fields, ctx),
        TypeExpr::Interface | TypeExpr::Unrecognized(_) => placeholder(expr),
    }
}

/// Render a struct body as an object literal type.
///
/// Field lines are indented one level deeper than `ctx`; the closing brace
/// sits at the level of `ctx`.
pub fn render_struct(fields: &[StructField], ctx: Context<'_>) -> String {
    let lines = render_fields(fields, ctx.enter_struct());
    if lines.is_empty() {
        return "{}".to_owned();
    }
    format!("{{\n{}{}}}", lines.concat(), ctx.indent())
}

/// Opaque text for a construct that cannot be rendered where it appears.
fn placeholder(expr: &TypeExpr) -> String {
    tracing::debug!(kind = expr.kind(), "unrecognized type expression");
    expr.kind().to_owned()
}
