//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::ast::AstArgs;
use crate::commands::generate::GenerateArgs;

pub struct GenerateParams {
    pub file: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub comments: bool,
    pub config: Option<PathBuf>,
    pub no_export: bool,
    pub tag_key: String,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            file: m.get_one::<PathBuf>("file").cloned(),
            out: m.get_one::<PathBuf>("out").cloned(),
            comments: m.get_flag("comments"),
            config: m.get_one::<PathBuf>("config").cloned(),
            no_export: m.get_flag("no_export"),
            tag_key: m
                .get_one::<String>("tag_key")
                .cloned()
                .unwrap_or_else(|| gotots_lib::typegen::typescript::DEFAULT_TAG_KEY.to_owned()),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            file: p.file,
            out: p.out,
            comments: p.comments,
            config: p.config,
            export: !p.no_export,
            tag_key: p.tag_key,
        }
    }
}

pub struct AstParams {
    pub file: Option<PathBuf>,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            file: m.get_one::<PathBuf>("file").cloned(),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self { file: p.file }
    }
}
