//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that commands compose.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Introspector dump (positional). `-` reads stdin.
pub fn dump_path_arg() -> Arg {
    Arg::new("dump")
        .value_name("DUMP")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("JSON dump of the Go packages to convert (- for stdin)")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file instead of stdout")
}

/// Mutation passes to run, comma separated (-m/--mutations).
pub fn mutations_arg() -> Arg {
    Arg::new("mutations")
        .short('m')
        .long("mutations")
        .value_name("LIST")
        .value_delimiter(',')
        .action(ArgAction::Append)
        .help("Comma separated mutation passes, applied in order (see `gots mutations`)")
}

/// Go-syntax type override (--custom pkg.Type=expr).
pub fn custom_arg() -> Arg {
    Arg::new("custom")
        .long("custom")
        .value_name("TYPE=GO_TYPE")
        .action(ArgAction::Append)
        .value_parser(parse_mapping)
        .help("Map a qualified Go type to another Go type expression")
}

/// Declaration to skip (--exclude pkg.Name).
pub fn exclude_arg() -> Arg {
    Arg::new("exclude")
        .long("exclude")
        .value_name("TYPE")
        .action(ArgAction::Append)
        .help("Skip a declaration by qualified Go name")
}

/// Enable the standard library mappings (--standard-mappings).
pub fn standard_mappings_arg() -> Arg {
    Arg::new("standard_mappings")
        .long("standard-mappings")
        .action(ArgAction::SetTrue)
        .help("Map time.Time, database/sql.Null* and uuid types to primitives")
}

/// `key=value`, split at the first `=`.
fn parse_mapping(raw: &str) -> Result<(String, String), String> {
    let Some((key, value)) = raw.split_once('=') else {
        return Err(format!("expected TYPE=GO_TYPE, got `{raw}`"));
    };
    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() || value.is_empty() {
        return Err(format!("expected TYPE=GO_TYPE, got `{raw}`"));
    }
    Ok((key.to_string(), value.to_string()))
}
