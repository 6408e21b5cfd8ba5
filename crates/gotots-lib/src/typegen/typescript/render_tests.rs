use gotots_core::{StructField, TypeExpr};

use super::Config;
use super::render::{Context, render_type};

fn render(expr: &TypeExpr) -> String {
    let config = Config::default();
    render_type(expr, Context::new(&config))
}

fn named(name: &str) -> TypeExpr {
    TypeExpr::named(name)
}

#[test]
fn named_types() {
    assert_eq!(render(&named("int64")), "number");
    assert_eq!(render(&named("float32")), "number");
    assert_eq!(render(&named("bool")), "boolean");
    assert_eq!(render(&named("string")), "string");
    assert_eq!(render(&named("Simple")), "Simple");
}

#[test]
fn pointer_to_identifier_is_nullable() {
    assert_eq!(render(&TypeExpr::pointer(named("Simple"))), "Simple | null");
    assert_eq!(render(&TypeExpr::pointer(named("int"))), "number | null");
}

#[test]
fn pointer_to_other_is_placeholder() {
    let expr = TypeExpr::pointer(TypeExpr::sequence(named("int")));

    assert_eq!(render(&expr), "slice_type");
}

#[test]
fn sequence_of_identifier() {
    assert_eq!(render(&TypeExpr::sequence(named("Simple"))), "Simple[]");
    assert_eq!(render(&TypeExpr::sequence(named("byte"))), "number[]");
}

#[test]
fn sequence_of_other_is_tagged_placeholder() {
    let nested = TypeExpr::sequence(TypeExpr::sequence(named("int")));
    let pointers = TypeExpr::sequence(TypeExpr::pointer(named("Simple")));

    assert_eq!(render(&nested), "slice_type[]");
    assert_eq!(render(&pointers), "pointer_type[]");
}

#[test]
fn map_of_identifiers() {
    let expr = TypeExpr::map(named("int"), named("Simple"));

    assert_eq!(render(&expr), "Record<number, Simple>");
}

#[test]
fn map_of_map() {
    let expr = TypeExpr::map(
        named("string"),
        TypeExpr::map(named("string"), TypeExpr::sequence(named("bool"))),
    );

    assert_eq!(render(&expr), "Record<string, Record<string, boolean[]>>");
}

#[test]
fn map_of_struct() {
    let expr = TypeExpr::map(
        named("string"),
        TypeExpr::Struct(vec![
            StructField::new("Count", named("uint32")),
            StructField::new("hidden", named("int")),
        ]),
    );

    assert_eq!(render(&expr), "Record<string, {\n  Count: number;\n}>");
}

#[test]
fn inline_struct_nesting_indents() {
    let expr = TypeExpr::Struct(vec![
        StructField::new("Outer", named("string")),
        StructField::new(
            "Inner",
            TypeExpr::Struct(vec![StructField::new("Leaf", named("bool"))]),
        ),
    ]);

    assert_eq!(
        render(&expr),
        "{\n  Outer: string;\n  Inner: {\n    Leaf: boolean;\n  };\n}"
    );
}

#[test]
fn empty_struct() {
    assert_eq!(render(&TypeExpr::Struct(vec![])), "{}");
}

#[test]
fn unrecognized_renders_kind() {
    assert_eq!(
        render(&TypeExpr::Unrecognized("qualified_type".into())),
        "qualified_type"
    );
    assert_eq!(render(&TypeExpr::Interface), "interface_type");
}

#[test]
fn context_depth_grows_on_descent() {
    let config = Config::default();
    let ctx = Context::new(&config);

    assert_eq!(ctx.depth(), 0);
    assert_eq!(ctx.descend().descend().depth(), 2);
    assert_eq!(ctx.enter_struct().indent(), "  ");
    assert_eq!(ctx.descend().indent(), "");
}
