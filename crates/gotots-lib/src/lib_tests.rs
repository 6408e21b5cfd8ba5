use indoc::indoc;

use crate::{Config, Error, generate};

fn ts(source: &str) -> String {
    generate(source, "models.go", &Config::default()).unwrap()
}

#[test]
fn composite_struct() {
    let out = ts(indoc! {r#"
        package models

        //go:generate gotots

        type Simple int64

        // Composite contains field that refer to other defined types
        type Composite struct {
            SimpleField  Simple
            PointerField *Simple
            SimpleArray  []Simple
            SimpleMap    map[int]Simple
            One, Two     int
        }
    "#});

    insta::assert_snapshot!(out, @r"
    // Generated from file: models.go
    // Package name: models

    export type Simple = number

    export type Composite = {
      SimpleField: Simple;
      PointerField: Simple | null;
      SimpleArray: Simple[];
      SimpleMap: Record<number, Simple>;
      One: number;
      Two: number;
    }
    ");
}

#[test]
fn json_tags() {
    let out = ts(indoc! {r#"
        package models

        type JsonTags struct {
            OtherName   string `json:"name_from_json"`
            NotExported string `json:"-"`
            Optional    string `json:",omitempty"`
        }
    "#});

    insta::assert_snapshot!(out, @r"
    // Generated from file: models.go
    // Package name: models

    export type JsonTags = {
      name_from_json: string;
      Optional?: string;
    }
    ");
}

#[test]
fn basic_declarations() {
    let out = ts(indoc! {r#"
        package models

        type (
            Single  []int
            Complex struct {
                First []int
                second int
                What  map[string]int
            }
        )

        type notExported struct {
            Wee int64
        }
    "#});

    insta::assert_snapshot!(out, @r"
    // Generated from file: models.go
    // Package name: models

    export type Single = number[]

    export type Complex = {
      First: number[];
      What: Record<string, number>;
    }

    type notExported = {
      Wee: number;
    }
    ");
}

#[test]
fn comments_enabled() {
    let source = indoc! {r#"
        package models

        // Composite contains field that refer to other defined types
        type Composite struct {
            // SimpleField is documented.
            SimpleField int // trailing, not a doc

            Undocumented bool
        }
    "#};
    let config = Config::new().comments(true);
    let out = generate(source, "models.go", &config).unwrap();

    insta::assert_snapshot!(out, @r"
    // Generated from file: models.go
    // Package name: models

    /**
     * Composite contains field that refer to other defined types
     */
    export type Composite = {
      /**
       * SimpleField is documented.
       */
      SimpleField: number;
      Undocumented: boolean;
    }
    ");
}

#[test]
fn comments_after_open_delimiters_are_not_emitted() {
    let source = indoc! {r#"
        package m

        type X struct { // not a doc
            A int
        }

        type ( // not a doc either
            B int
        )
    "#};
    let config = Config::new().comments(true);
    let out = generate(source, "m.go", &config).unwrap();

    insta::assert_snapshot!(out, @r"
    // Generated from file: m.go
    // Package name: m

    export type X = {
      A: number;
    }

    export type B = number
    ");
}

#[test]
fn group_doc_precedes_first_block() {
    let source = indoc! {r#"
        package models

        // Identifiers used by the API.
        type (
            UserID int64

            // OrgID names an organization.
            OrgID string
        )
    "#};
    let config = Config::new().comments(true);
    let out = generate(source, "models.go", &config).unwrap();

    insta::assert_snapshot!(out, @r"
    // Generated from file: models.go
    // Package name: models

    /**
     * Identifiers used by the API.
     */
    export type UserID = number

    /**
     * OrgID names an organization.
     */
    export type OrgID = string
    ");
}

#[test]
fn nested_composites() {
    let out = ts(indoc! {r#"
        package models

        type Deep struct {
            Lookup  map[string]map[string][]bool
            Items   map[string]struct {
                Count uint32
            }
            Grid    [][]int
            Refs    []*Deep
            MaybeID *string
            Any     interface{}
        }

        type Reader interface {
            Read() error
        }
    "#});

    insta::assert_snapshot!(out, @r"
    // Generated from file: models.go
    // Package name: models

    export type Deep = {
      Lookup: Record<string, Record<string, boolean[]>>;
      Items: Record<string, {
        Count: number;
      }>;
      Grid: slice_type[];
      Refs: pointer_type[];
      MaybeID: string | null;
      Any: interface_type;
    }
    ");
}

#[test]
fn syntax_error_is_reported() {
    let result = generate("package models\n\ntype Broken struct {\n", "x.go", &Config::default());

    assert!(matches!(result, Err(Error::Syntax { .. })));
}
