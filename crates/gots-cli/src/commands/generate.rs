use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use gots_core::source::Program;
use gots_lib::GoParser;
use gots_lib::mutations::{self, Mutation};
use gots_lib::overrides::standard_mappings;

pub struct GenerateArgs {
    pub dump: PathBuf,
    pub output: Option<PathBuf>,
    pub mutations: Vec<String>,
    pub custom: Vec<(String, String)>,
    pub exclude: Vec<String>,
    pub standard_mappings: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid dump")]
    Dump(#[from] serde_json::Error),

    #[error("unknown mutation `{0}`, run `gots mutations` for the list")]
    UnknownMutation(String),

    #[error(transparent)]
    Convert(#[from] gots_lib::Error),
}

pub fn run(args: GenerateArgs) -> Result<(), GenerateError> {
    let dump = read_dump(&args.dump)?;
    let output = generate(&args, &dump)?;

    match &args.output {
        Some(path) => {
            fs::write(path, output).map_err(|source| GenerateError::Write {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), "wrote declarations");
        }
        None => print!("{output}"),
    }
    Ok(())
}

/// Convert dump text to TypeScript source according to `args`.
pub fn generate(args: &GenerateArgs, dump: &str) -> Result<String, GenerateError> {
    let passes = resolve_passes(&args.mutations)?;
    let program = Program::from_json(dump)?;

    let mut parser = GoParser::new();
    if args.standard_mappings {
        parser.include_custom_declaration(standard_mappings());
    }
    parser.include_custom(args.custom.iter().map(|(k, v)| (k.clone(), v.as_str())))?;
    for name in &args.exclude {
        parser.exclude_custom(name.clone());
    }
    parser.include_program(program)?;

    let mut ts = parser.to_typescript()?;
    debug!(nodes = ts.len(), passes = passes.len(), "converted");
    ts.apply_mutations(&passes)?;
    Ok(ts.serialize()?)
}

/// Look up every pass before anything runs.
fn resolve_passes(names: &[String]) -> Result<Vec<Box<dyn Mutation>>, GenerateError> {
    names
        .iter()
        .map(|name| {
            mutations::by_name(name).ok_or_else(|| GenerateError::UnknownMutation(name.clone()))
        })
        .collect()
}

fn read_dump(path: &Path) -> Result<String, GenerateError> {
    let read_error = |source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    };
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(read_error)?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(read_error)
}
