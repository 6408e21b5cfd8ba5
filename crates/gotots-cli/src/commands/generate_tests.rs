use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::ast::dump;
use super::generate::{GenerateArgs, run_in};
use crate::error::CliError;

const MODELS: &str = "\
package models

// Simple is an alias for an integer.
type Simple int64

type JsonTags struct {
\tOtherName   string `json:\"name_from_json\"`
\tNotExported string `json:\"-\"`
\tOptional    string `json:\",omitempty\"`
}
";

fn args(file: &str) -> GenerateArgs {
    GenerateArgs {
        file: Some(PathBuf::from(file)),
        out: None,
        comments: false,
        config: None,
        export: true,
        tag_key: "json".to_owned(),
    }
}

fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("go.mod"), "module example.com/m\n").unwrap();
    fs::write(tmp.path().join("models.go"), MODELS).unwrap();
    tmp
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn writes_to_out_flag() {
    let tmp = project();
    let args = GenerateArgs {
        out: Some(PathBuf::from("web/models.ts")),
        ..args("models.go")
    };

    run_in(args, tmp.path()).unwrap();

    insta::assert_snapshot!(read(&tmp.path().join("web/models.ts")), @r"
    // Generated from file: models.go
    // Package name: models

    export type Simple = number

    export type JsonTags = {
      name_from_json: string;
      Optional?: string;
    }
    ");
}

#[test]
fn config_file_sets_destination_and_comments() {
    let tmp = project();
    fs::create_dir_all(tmp.path().join("types")).unwrap();
    fs::write(
        tmp.path().join("gotots.yaml"),
        "out-path: types\nuse-comments: true\n",
    )
    .unwrap();

    run_in(args("models.go"), tmp.path()).unwrap();

    insta::assert_snapshot!(read(&tmp.path().join("types/models.ts")), @r"
    // Generated from file: models.go
    // Package name: models

    /**
     * Simple is an alias for an integer.
     */
    export type Simple = number

    export type JsonTags = {
      name_from_json: string;
      Optional?: string;
    }
    ");
}

#[test]
fn explicit_config_bypasses_search() {
    let tmp = project();
    fs::write(tmp.path().join("gotots.yaml"), "out-path: found.ts\n").unwrap();
    fs::write(tmp.path().join("custom.yml"), "out-path: custom.ts\n").unwrap();
    let args = GenerateArgs {
        config: Some(PathBuf::from("custom.yml")),
        ..args("models.go")
    };

    run_in(args, tmp.path()).unwrap();

    assert!(tmp.path().join("custom.ts").is_file());
    assert!(!tmp.path().join("found.ts").exists());
}

#[test]
fn out_flag_overrides_config() {
    let tmp = project();
    fs::write(tmp.path().join("gotots.yaml"), "out-path: from-config.ts\n").unwrap();
    let args = GenerateArgs {
        out: Some(PathBuf::from("from-flag.ts")),
        ..args("models.go")
    };

    run_in(args, tmp.path()).unwrap();

    assert!(tmp.path().join("from-flag.ts").is_file());
    assert!(!tmp.path().join("from-config.ts").exists());
}

#[test]
fn existing_output_is_overwritten() {
    let tmp = project();
    fs::write(tmp.path().join("models.ts"), "stale").unwrap();
    let args = GenerateArgs {
        out: Some(PathBuf::from("models.ts")),
        ..args("models.go")
    };

    run_in(args, tmp.path()).unwrap();

    assert!(read(&tmp.path().join("models.ts")).starts_with("// Generated from file: models.go"));
}

#[test]
fn missing_input_file() {
    let tmp = project();

    let result = run_in(args("absent.go"), tmp.path());

    assert!(matches!(result, Err(CliError::Read { .. })));
}

#[test]
fn no_input_file() {
    let tmp = project();
    let args = GenerateArgs {
        file: None,
        ..args("unused.go")
    };

    assert!(matches!(run_in(args, tmp.path()), Err(CliError::NoInput)));
}

#[test]
fn syntax_error_names_the_file() {
    let tmp = project();
    fs::write(tmp.path().join("broken.go"), "package models\n\ntype X struct {\n").unwrap();
    let args = GenerateArgs {
        out: Some(PathBuf::from("broken.ts")),
        ..args("broken.go")
    };

    let err = run_in(args, tmp.path()).unwrap_err();

    assert!(matches!(err, CliError::Parse { .. }));
    assert!(err.to_string().contains("broken.go"));
    assert!(!tmp.path().join("broken.ts").exists());
}

#[test]
fn ast_dump_is_json() {
    let tmp = project();

    let json = dump(&tmp.path().join("models.go")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["package"], "models");
    assert_eq!(value["declarations"][0]["name"], "Simple");
    assert_eq!(value["declarations"][0]["ty"]["kind"], "named");
    assert_eq!(value["declarations"][1]["ty"]["kind"], "struct");
}
