//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("gots")
        .about("Generate TypeScript declarations from Go types")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(mutations_command())
}

/// Convert a dump to TypeScript.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Convert an introspector dump to TypeScript")
        .override_usage(
            "\
  gots generate <DUMP> [-o FILE]
  gots generate <DUMP> -m ExportTypes,EnumAsTypes,EnumLists",
        )
        .after_help(
            r#"EXAMPLES:
  gots generate sdk.json                          # print to stdout
  gots generate sdk.json -o sdk.ts                # write a file
  gots generate - < sdk.json                      # read the dump from stdin
  gots generate sdk.json -m ExportTypes,ReadOnly  # run mutation passes
  gots generate sdk.json --custom 'github.com/acme/sdk.ID=string'"#,
        )
        .arg(dump_path_arg())
        .arg(output_file_arg())
        .arg(mutations_arg())
        .arg(custom_arg())
        .arg(exclude_arg())
        .arg(standard_mappings_arg())
}

/// List the built-in mutation passes.
pub fn mutations_command() -> Command {
    Command::new("mutations").about("List the available mutation passes")
}
