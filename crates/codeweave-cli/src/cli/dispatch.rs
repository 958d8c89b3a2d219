//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::get::GetArgs;
use crate::commands::remove::RemoveArgs;
use crate::commands::set::SetArgs;
use crate::commands::types::TypesArgs;

pub struct TypesParams {
    pub schema_path: PathBuf,
    pub commented: bool,
    pub verbose: bool,
    pub api_url: Option<String>,
    pub api_user: Option<String>,
    pub fixtures: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub color: ColorChoice,
}

impl TypesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: m
                .get_one::<PathBuf>("schema_path")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(".")),
            commented: m.get_flag("commented"),
            verbose: m.get_flag("verbose"),
            api_url: m.get_one::<String>("api_url").cloned(),
            api_user: m.get_one::<String>("api_user").cloned(),
            fixtures: m.get_one::<PathBuf>("fixtures").cloned(),
            config: m.get_one::<PathBuf>("config").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<TypesParams> for TypesArgs {
    fn from(p: TypesParams) -> Self {
        Self {
            schema_path: p.schema_path,
            // The flag can only switch comments on; absent, configuration decides.
            commented: p.commented.then_some(true),
            verbose: p.verbose,
            api_url: p.api_url,
            api_user: p.api_user,
            fixtures: p.fixtures,
            config: p.config,
            color: p.color.should_colorize(),
        }
    }
}

pub struct GetParams {
    pub file: PathBuf,
    pub property_path: String,
}

impl GetParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            file: required_path(m, "file"),
            property_path: required_string(m, "property_path"),
        }
    }
}

impl From<GetParams> for GetArgs {
    fn from(p: GetParams) -> Self {
        Self {
            file: p.file,
            property_path: p.property_path,
        }
    }
}

pub struct SetParams {
    pub file: PathBuf,
    pub property_path: String,
    pub value: String,
    pub dry_run: bool,
}

impl SetParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            file: required_path(m, "file"),
            property_path: required_string(m, "property_path"),
            value: required_string(m, "value"),
            dry_run: m.get_flag("dry_run"),
        }
    }
}

impl From<SetParams> for SetArgs {
    fn from(p: SetParams) -> Self {
        Self {
            file: p.file,
            property_path: p.property_path,
            value: p.value,
            dry_run: p.dry_run,
        }
    }
}

pub struct RemoveParams {
    pub file: PathBuf,
    pub property_path: String,
    pub dry_run: bool,
}

impl RemoveParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            file: required_path(m, "file"),
            property_path: required_string(m, "property_path"),
            dry_run: m.get_flag("dry_run"),
        }
    }
}

impl From<RemoveParams> for RemoveArgs {
    fn from(p: RemoveParams) -> Self {
        Self {
            file: p.file,
            property_path: p.property_path,
            dry_run: p.dry_run,
        }
    }
}

pub struct AstParams {
    pub file: PathBuf,
    pub raw: bool,
    pub kinds: Vec<String>,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            file: required_path(m, "file"),
            raw: m.get_flag("raw"),
            kinds: m
                .get_many::<String>("kind")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            file: p.file,
            raw: p.raw,
            kinds: p.kinds,
        }
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

// Required positionals are enforced by clap before dispatch.
fn required_path(m: &ArgMatches, id: &str) -> PathBuf {
    m.get_one::<PathBuf>(id).cloned().unwrap_or_default()
}

fn required_string(m: &ArgMatches, id: &str) -> String {
    m.get_one::<String>(id).cloned().unwrap_or_default()
}
