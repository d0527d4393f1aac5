//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::generate::GenerateArgs;

pub struct GenerateParams {
    pub dump: PathBuf,
    pub output: Option<PathBuf>,
    pub mutations: Vec<String>,
    pub custom: Vec<(String, String)>,
    pub exclude: Vec<String>,
    pub standard_mappings: bool,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            dump: m
                .get_one::<PathBuf>("dump")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("-")),
            output: m.get_one::<PathBuf>("output").cloned(),
            mutations: strings(m, "mutations")
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            custom: m
                .get_many::<(String, String)>("custom")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            exclude: strings(m, "exclude"),
            standard_mappings: m.get_flag("standard_mappings"),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            dump: p.dump,
            output: p.output,
            mutations: p.mutations,
            custom: p.custom,
            exclude: p.exclude,
            standard_mappings: p.standard_mappings,
        }
    }
}

fn strings(m: &ArgMatches, id: &str) -> Vec<String> {
    m.get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}
