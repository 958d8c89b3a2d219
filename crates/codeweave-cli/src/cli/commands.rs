//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("codeweave")
        .about("Rewrite TypeScript configuration code and generate entity types")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(types_command())
        .subcommand(get_command())
        .subcommand(set_command())
        .subcommand(remove_command())
        .subcommand(ast_command())
}

/// Generate `*.types.ts` files from `*.schema.ts` declarations.
pub fn types_command() -> Command {
    Command::new("types")
        .about("Generate interfaces from entity schema declarations")
        .override_usage(
            "\
  codeweave types [PATH] [-c]
  codeweave types [PATH] --api-url <URL> --api-user <ID>
  codeweave types [PATH] --fixtures <DIR>",
        )
        .after_help(
            r#"EXAMPLES:
  codeweave types src/                          # every *.schema.ts under src/
  codeweave types src/users.schema.ts -c        # one file, commented output
  codeweave types --fixtures schemas/           # offline, from schemas/*.json
  codeweave types --config ci/codeweave.toml    # explicit configuration"#,
        )
        .arg(schema_path_arg())
        .arg(commented_arg())
        .arg(api_url_arg())
        .arg(api_user_arg())
        .arg(fixtures_arg())
        .arg(config_arg())
        .arg(color_arg())
}

/// Print a property value as JSON.
pub fn get_command() -> Command {
    Command::new("get")
        .about("Print the value at a property path as JSON")
        .after_help(
            r#"EXAMPLES:
  codeweave get src/app.ts AppConfig.api.port
  codeweave get src/app.ts AppConfig.shared.url   # follows one import"#,
        )
        .arg(file_arg())
        .arg(property_path_arg())
}

/// Replace a literal value.
pub fn set_command() -> Command {
    Command::new("set")
        .about("Replace the literal at a property path")
        .after_help(
            r#"EXAMPLES:
  codeweave set src/app.ts AppConfig.api.port 9090
  codeweave set src/app.ts AppConfig.name '"demo"'
  codeweave set src/app.ts AppConfig.tags '["a", "b"]' --dry-run"#,
        )
        .arg(file_arg())
        .arg(property_path_arg())
        .arg(json_value_arg())
        .arg(dry_run_arg())
}

/// Delete a property.
pub fn remove_command() -> Command {
    Command::new("remove")
        .about("Delete the property at a property path")
        .arg(file_arg())
        .arg(property_path_arg())
        .arg(dry_run_arg())
}

/// Show the nodes of a file with their byte ranges.
pub fn ast_command() -> Command {
    Command::new("ast")
        .about("Show the nodes of a TypeScript file with their byte ranges")
        .after_help(
            r#"EXAMPLES:
  codeweave ast src/config.ts                   # outline of named nodes
  codeweave ast src/config.ts --raw             # with punctuation and keywords
  codeweave ast src/config.ts -k pair -k object # only these kinds"#,
        )
        .arg(file_arg())
        .arg(raw_arg())
        .arg(kind_arg())
}
