//! Lowering from the tree-sitter Go syntax tree to the declaration model.

use arborium_tree_sitter::Node;

use gotots_core::tag::unquote;
use gotots_core::{SourceFile, StructField, TypeDeclaration, TypeExpr};

use super::docs::DocCollector;
use crate::{Error, Result};

pub(super) struct Lowerer<'s> {
    source: &'s str,
}

impl<'s> Lowerer<'s> {
    pub(super) fn new(source: &'s str) -> Self {
        Self { source }
    }

    fn text(&self, node: Node<'_>) -> &'s str {
        &self.source[node.byte_range()]
    }

    pub(super) fn lower_file(&self, root: Node<'_>) -> Result<SourceFile> {
        let mut package = None;
        let mut declarations = Vec::new();
        let mut docs = DocCollector::new(self.source);

        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            if child.kind() == "comment" {
                docs.push(child);
                continue;
            }

            let doc = docs.take_for(child);
            match child.kind() {
                "package_clause" => {
                    package = first_named(child).map(|name| self.text(name).to_owned());
                }
                "type_declaration" => {
                    self.lower_type_declaration(child, doc, &mut declarations);
                }
                _ => {}
            }
        }

        let package = package.ok_or(Error::MissingPackage)?;
        Ok(SourceFile {
            package,
            declarations,
        })
    }

    /// Flatten `type X ...` and `type ( ... )` into declarations.
    fn lower_type_declaration(
        &self,
        node: Node<'_>,
        outer_doc: Option<String>,
        out: &mut Vec<TypeDeclaration>,
    ) {
        let mut specs = Vec::new();
        let open_paren = find_token(node, "(");
        let mut docs = match open_paren {
            Some(paren) => DocCollector::after_row(self.source, paren.start_position().row),
            None => DocCollector::new(self.source),
        };

        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "comment" => docs.push(child),
                "type_spec" | "type_alias" => {
                    let doc = docs.take_for(child);
                    specs.push((child, doc));
                }
                _ => {
                    docs.take_for(child);
                }
            }
        }

        // A lone spec without its own docs takes the declaration's; otherwise
        // the declaration's docs head the group.
        let lone_undocumented = matches!(specs.as_slice(), [(_, None)]);
        let mut outer_doc = outer_doc;
        let mut group_doc = if lone_undocumented {
            None
        } else {
            outer_doc.take()
        };
        for (spec, doc) in specs {
            let doc = doc.or(outer_doc.take());
            let (Some(name), Some(ty)) = (
                spec.child_by_field_name("name"),
                spec.child_by_field_name("type"),
            ) else {
                tracing::warn!(kind = spec.kind(), "type spec without name or type");
                continue;
            };

            out.push(TypeDeclaration {
                name: self.text(name).to_owned(),
                ty: self.lower_type(ty),
                doc,
                group_doc: group_doc.take(),
            });
        }
    }

    fn lower_type(&self, node: Node<'_>) -> TypeExpr {
        match node.kind() {
            "type_identifier" => TypeExpr::named(self.text(node)),
            "pointer_type" => match first_named(node) {
                Some(inner) => TypeExpr::pointer(self.lower_type(inner)),
                None => TypeExpr::Unrecognized(node.kind().to_owned()),
            },
            "slice_type" | "array_type" => match node.child_by_field_name("element") {
                Some(element) => TypeExpr::sequence(self.lower_type(element)),
                None => TypeExpr::Unrecognized(node.kind().to_owned()),
            },
            "map_type" => match (
                node.child_by_field_name("key"),
                node.child_by_field_name("value"),
            ) {
                (Some(key), Some(value)) => {
                    TypeExpr::map(self.lower_type(key), self.lower_type(value))
                }
                _ => TypeExpr::Unrecognized(node.kind().to_owned()),
            },
            "struct_type" => TypeExpr::Struct(self.lower_fields(node)),
            "interface_type" => TypeExpr::Interface,
            "parenthesized_type" => match first_named(node) {
                Some(inner) => self.lower_type(inner),
                None => TypeExpr::Unrecognized(node.kind().to_owned()),
            },
            other => TypeExpr::Unrecognized(other.to_owned()),
        }
    }

    fn lower_fields(&self, struct_node: Node<'_>) -> Vec<StructField> {
        let mut fields = Vec::new();
        let Some(list) = find_named(struct_node, "field_declaration_list") else {
            return fields;
        };

        let mut docs = DocCollector::after_row(self.source, list.start_position().row);
        let mut cursor = list.walk();
        for child in list.named_children(&mut cursor) {
            if child.kind() == "comment" {
                docs.push(child);
                continue;
            }

            let doc = docs.take_for(child);
            if child.kind() != "field_declaration" {
                continue;
            }
            let Some(ty) = child.child_by_field_name("type") else {
                continue;
            };

            let mut name_cursor = child.walk();
            let names = child
                .children_by_field_name("name", &mut name_cursor)
                .map(|name| self.text(name).to_owned())
                .collect();

            fields.push(StructField {
                names,
                ty: self.lower_type(ty),
                tag: child
                    .child_by_field_name("tag")
                    .and_then(|tag| self.tag_text(tag)),
                doc,
            });
        }

        fields
    }

    /// Tag contents with delimiters removed.
    fn tag_text(&self, node: Node<'_>) -> Option<String> {
        let text = self.text(node);
        match node.kind() {
            "raw_string_literal" => text
                .strip_prefix('`')
                .and_then(|t| t.strip_suffix('`'))
                .map(str::to_owned),
            "interpreted_string_literal" => unquote(text),
            _ => None,
        }
    }
}

fn first_named(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .find(|child| child.kind() != "comment")
}

fn find_named<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .find(|child| child.kind() == kind)
}

fn find_token<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .find(|child| !child.is_named() && child.kind() == kind)
}
