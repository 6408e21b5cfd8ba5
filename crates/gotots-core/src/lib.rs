#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for gotots.
//!
//! One parsed Go file is represented as a [`SourceFile`]: the package name
//! plus the ordered list of top-level type declarations. Type expressions
//! form a closed sum type ([`TypeExpr`]) with a single fallback variant for
//! constructs the generator does not understand.
//!
//! Struct tag parsing lives in [`tag`].

use serde::Serialize;

pub mod tag;


pub use tag::{FieldTag, StructTag};

// ============================================================================
// Visibility
// ============================================================================

/// Whether a Go identifier is exported (starts with an upper-case letter).
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

// ============================================================================
// File & Declarations
// ============================================================================

/// One parsed Go source file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    /// Name from the `package` clause.
    pub package: String,
    /// Top-level type declarations in source order.
    pub declarations: Vec<TypeDeclaration>,
}

/// A named type defined at file top level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TypeDeclaration {
    pub name: String,
    pub ty: TypeExpr,
    /// Normalized documentation text, one entry per line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// Documentation of the enclosing `type ( ... )` group, carried by the
    /// group's first declaration only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_doc: Option<String>,
}

impl TypeDeclaration {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty,
            doc: None,
            group_doc: None,
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn with_group_doc(mut self, doc: impl Into<String>) -> Self {
        self.group_doc = Some(doc.into());
        self
    }

    pub fn is_exported(&self) -> bool {
        is_exported(&self.name)
    }
}

// ============================================================================
// Type Expressions
// ============================================================================

/// Structural description of a Go type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TypeExpr {
    /// A plain identifier: builtin (`int`, `bool`, `string`) or user-defined.
    Named(String),
    /// `*T`
    Pointer(Box<TypeExpr>),
    /// `[]T` or `[N]T`
    Sequence(Box<TypeExpr>),
    /// `map[K]V`
    Map {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    /// `struct { ... }`
    Struct(Vec<StructField>),
    /// `interface { ... }`
    Interface,
    /// Any other construct, carrying the syntax node kind it came from.
    Unrecognized(String),
}

impl TypeExpr {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn pointer(inner: TypeExpr) -> Self {
        Self::Pointer(Box::new(inner))
    }

    pub fn sequence(element: TypeExpr) -> Self {
        Self::Sequence(Box::new(element))
    }

    pub fn map(key: TypeExpr, value: TypeExpr) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Syntax node kind this expression corresponds to.
    ///
    /// Used as the opaque placeholder text when a construct cannot be
    /// rendered in the position it appears in.
    pub fn kind(&self) -> &str {
        match self {
            Self::Named(_) => "type_identifier",
            Self::Pointer(_) => "pointer_type",
            Self::Sequence(_) => "slice_type",
            Self::Map { .. } => "map_type",
            Self::Struct(_) => "struct_type",
            Self::Interface => "interface_type",
            Self::Unrecognized(kind) => kind,
        }
    }
}

// ============================================================================
// Struct Fields
// ============================================================================

/// One field declaration inside a struct body.
///
/// `A, B int` is a single declaration with two names sharing one type, tag,
/// and documentation. Embedded fields have no names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StructField {
    pub names: Vec<String>,
    pub ty: TypeExpr,
    /// Raw tag contents without the surrounding quotes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl StructField {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            names: vec![name.into()],
            ty,
            tag: None,
            doc: None,
        }
    }

    pub fn with_names<I, S>(names: I, ty: TypeExpr) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            ty,
            tag: None,
            doc: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn is_embedded(&self) -> bool {
        self.names.is_empty()
    }
}
