mod cli;
mod commands;
mod tracing_config;

use std::error::Error;

use cli::{GenerateParams, build_cli};

fn main() {
    tracing_config::init_tracing();
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            if let Err(err) = commands::generate::run(params.into()) {
                report(&err);
                std::process::exit(1);
            }
        }
        Some(("mutations", _)) => commands::mutations::run(),
        _ => unreachable!("clap should have caught this"),
    }
}

fn report(err: &dyn Error) {
    eprintln!("error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}
