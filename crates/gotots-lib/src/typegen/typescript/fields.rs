//! Struct field rendering.

use gotots_core::{FieldTag, StructField, is_exported};

use super::comments::format_comment;
use super::naming::property_name;
use super::render::{Context, render_type};

/// Render struct fields as `name[?]: type;` lines in declaration order.
///
/// Unexported names and fields whose tag is the skip sentinel produce
/// nothing. A declaration with several names yields one line per name, each
/// with the same tag treatment and documentation. Every returned entry ends
/// with a newline and carries the indentation of `ctx`.
pub fn render_fields(fields: &[StructField], ctx: Context<'_>) -> Vec<String> {
    let indent = ctx.indent();
    let mut lines = Vec::new();

    for field in fields {
        let tag = field
            .tag
            .as_deref()
            .and_then(|raw| FieldTag::parse(raw, &ctx.config.tag_key));
        if tag.as_ref().is_some_and(|t| t.omit) {
            tracing::trace!(names = ?field.names, "field omitted by tag");
            continue;
        }

        let names: Vec<&str> = field
            .names
            .iter()
            .map(String::as_str)
            .filter(|name| is_exported(name))
            .collect();
        if names.is_empty() {
            continue;
        }

        let ty = render_type(&field.ty, ctx.descend());
        let optional = if tag.as_ref().is_some_and(|t| t.optional) {
            "?"
        } else {
            ""
        };
        let doc = match &field.doc {
            Some(doc) if ctx.config.comments => format_comment(doc, &indent),
            _ => String::new(),
        };

        for name in names {
            let name = tag.as_ref().and_then(FieldTag::rename).unwrap_or(name);
            lines.push(format!(
                "{doc}{indent}{}{optional}: {ty};\n",
                property_name(name)
            ));
        }
    }

    lines
}
