use std::path::PathBuf;

use clap::ArgMatches;

use super::*;

fn matches(args: &[&str]) -> ArgMatches {
    let mut argv = vec!["codeweave"];
    argv.extend_from_slice(args);
    build_cli()
        .try_get_matches_from(argv)
        .unwrap_or_else(|e| panic!("{:?} rejected: {}", args, e))
}

fn sub<'a>(m: &'a ArgMatches, name: &str) -> &'a ArgMatches {
    m.subcommand_matches(name).unwrap()
}

#[test]
fn types_defaults() {
    let m = matches(&["types"]);
    let params = TypesParams::from_matches(sub(&m, "types"));

    assert_eq!(params.schema_path, PathBuf::from("."));
    assert!(!params.commented);
    assert!(!params.verbose);
    assert_eq!(params.api_url, None);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn types_flags() {
    let m = matches(&[
        "types",
        "src/",
        "-c",
        "--api-url",
        "https://api.example.com",
        "--api-user",
        "7",
        "--fixtures",
        "schemas",
        "--color",
        "never",
    ]);
    let params = TypesParams::from_matches(sub(&m, "types"));

    assert_eq!(params.schema_path, PathBuf::from("src/"));
    assert!(params.commented);
    assert_eq!(params.api_url.as_deref(), Some("https://api.example.com"));
    assert_eq!(params.api_user.as_deref(), Some("7"));
    assert_eq!(params.fixtures, Some(PathBuf::from("schemas")));
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn verbose_is_global() {
    let before = matches(&["-v", "types"]);
    assert!(before.get_flag("verbose"));

    let after = matches(&["types", "--verbose"]);
    assert!(TypesParams::from_matches(sub(&after, "types")).verbose);
}

#[test]
fn get_positionals() {
    let m = matches(&["get", "src/app.ts", "AppConfig.api.port"]);
    let params = GetParams::from_matches(sub(&m, "get"));

    assert_eq!(params.file, PathBuf::from("src/app.ts"));
    assert_eq!(params.property_path, "AppConfig.api.port");
}

#[test]
fn set_takes_raw_json() {
    let m = matches(&["set", "app.ts", "AppConfig.tags", r#"["a", "b"]"#, "--dry-run"]);
    let params = SetParams::from_matches(sub(&m, "set"));

    assert_eq!(params.value, r#"["a", "b"]"#);
    assert!(params.dry_run);
}

#[test]
fn remove_and_ast() {
    let m = matches(&["remove", "app.ts", "AppConfig.debug"]);
    let params = RemoveParams::from_matches(sub(&m, "remove"));
    assert_eq!(params.property_path, "AppConfig.debug");
    assert!(!params.dry_run);

    let m = matches(&["ast", "app.ts", "--raw"]);
    let params = AstParams::from_matches(sub(&m, "ast"));
    assert!(params.raw);
    assert!(params.kinds.is_empty());

    let m = matches(&["ast", "app.ts", "-k", "pair", "--kind", "object"]);
    assert_eq!(AstParams::from_matches(sub(&m, "ast")).kinds, ["pair", "object"]);

    let err = build_cli()
        .try_get_matches_from(["codeweave", "ast", "app.ts", "--raw", "-k", "pair"])
        .unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
}

#[test]
fn missing_positionals_are_rejected() {
    assert!(build_cli().try_get_matches_from(["codeweave", "get", "app.ts"]).is_err());
    assert!(
        build_cli()
            .try_get_matches_from(["codeweave", "set", "app.ts", "A.b"])
            .is_err()
    );
    assert!(build_cli().try_get_matches_from(["codeweave"]).is_err());
}

#[test]
fn invalid_color_is_rejected() {
    let result = build_cli().try_get_matches_from(["codeweave", "types", "--color", "sometimes"]);
    assert!(result.is_err());
}

#[test]
fn types_help_lists_examples() {
    let help = super::commands::types_command().render_long_help().to_string();
    assert!(help.contains("EXAMPLES:"));
    assert!(help.contains("--fixtures <DIR>"));
}
