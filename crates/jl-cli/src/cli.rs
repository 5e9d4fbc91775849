//! Argument definitions for the `jl` binary.

use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command, value_parser};

use crate::exec::ExecArgs;

/// Build the complete CLI.
pub fn build_cli() -> Command {
    Command::new("jl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract values from JSON streams into delimited rows")
        .override_usage("jl [-f FIELDSEP] PATTERN [FILE...]")
        .after_help(
            r#"EXAMPLES:
  jl '[*]' values.json                # one row per array element
  jl '{name,tags[*]}' users.json      # one row per (name, tag) pair
  curl -s api/users | jl '[{id,email}]'
  jl -f , '{a,b}' < rows.json         # comma-separated cells"#,
        )
        .arg(fieldsep_arg())
        .arg(pattern_arg())
        .arg(files_arg())
}

/// Field separator string (-f).
fn fieldsep_arg() -> Arg {
    Arg::new("fieldsep")
        .short('f')
        .long("fieldsep")
        .value_name("FIELDSEP")
        .help("String written verbatim between output cells (default: tab)")
}

/// Extraction pattern (positional, required).
fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .value_name("PATTERN")
        .required(true)
        .help("Extraction pattern, e.g. '{name,tags[*]}'")
}

/// Input files (positional, zero or more).
fn files_arg() -> Arg {
    Arg::new("files")
        .value_name("FILE")
        .num_args(0..)
        .value_parser(value_parser!(PathBuf))
        .help("Input files (standard input if none are given)")
}

pub struct Params {
    pub fieldsep: Option<String>,
    pub pattern: String,
    pub files: Vec<PathBuf>,
}

impl Params {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            fieldsep: m.get_one::<String>("fieldsep").cloned(),
            pattern: m
                .get_one::<String>("pattern")
                .cloned()
                .expect("PATTERN is required"),
            files: m
                .get_many::<PathBuf>("files")
                .map(|files| files.cloned().collect())
                .unwrap_or_default(),
        }
    }
}

impl From<Params> for ExecArgs {
    fn from(p: Params) -> Self {
        Self {
            fieldsep: p.fieldsep.unwrap_or_else(|| "\t".to_string()),
            pattern: p.pattern,
            files: p.files,
        }
    }
}
