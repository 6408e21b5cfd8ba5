//! TypeScript type definitions from Go declarations.
//!
//! - `render` - type expression translator
//! - `fields` - struct field translator
//! - `comments` - documentation comment formatter
//! - `emitter` - declaration walker

mod comments;
mod config;
mod emitter;
mod fields;
mod naming;
mod render;

#[cfg(test)]
mod render_tests;

pub use comments::format_comment;
pub use config::{Config, DEFAULT_TAG_KEY};
pub use emitter::{Emitter, RenderedBlock, emit_typescript, render_declaration};
pub use fields::render_fields;
pub use naming::{property_name, ts_type_name};
pub use render::{Context, render_struct, render_type};
