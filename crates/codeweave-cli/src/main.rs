mod cli;
mod commands;
mod logging;
mod settings;

#[cfg(test)]
mod settings_tests;

use cli::{AstParams, GetParams, RemoveParams, SetParams, TypesParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    logging::init(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("types", m)) => {
            let params = TypesParams::from_matches(m);
            commands::types::run(params.into());
        }
        Some(("get", m)) => {
            let params = GetParams::from_matches(m);
            commands::get::run(params.into());
        }
        Some(("set", m)) => {
            let params = SetParams::from_matches(m);
            commands::set::run(params.into());
        }
        Some(("remove", m)) => {
            let params = RemoveParams::from_matches(m);
            commands::remove::run(params.into());
        }
        Some(("ast", m)) => {
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
