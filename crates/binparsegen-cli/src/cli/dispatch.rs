//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::generate::GenerateArgs;
use crate::commands::structs::StructsArgs;

pub struct GenerateParams {
    pub spec_path: PathBuf,
    pub output: Option<PathBuf>,
    pub debug_string: bool,
    pub max_array_count: Option<u64>,
    pub scan_window: Option<usize>,
    pub runtime_crate: Option<String>,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            spec_path: m
                .get_one::<PathBuf>("spec_path")
                .cloned()
                .unwrap_or_default(),
            output: m.get_one::<PathBuf>("output").cloned(),
            debug_string: m.get_flag("debug_string"),
            max_array_count: m.get_one::<u64>("max_array_count").copied(),
            scan_window: m.get_one::<usize>("scan_window").copied(),
            runtime_crate: m.get_one::<String>("runtime_crate").cloned(),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            spec_path: p.spec_path,
            output: p.output,
            debug_string: p.debug_string,
            max_array_count: p.max_array_count,
            scan_window: p.scan_window,
            runtime_crate: p.runtime_crate,
        }
    }
}

pub struct StructsParams {
    pub schema_path: PathBuf,
}

impl StructsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: m
                .get_one::<PathBuf>("schema_path")
                .cloned()
                .unwrap_or_default(),
        }
    }
}

impl From<StructsParams> for StructsArgs {
    fn from(p: StructsParams) -> Self {
        Self {
            schema_path: p.schema_path,
        }
    }
}

/// Count of `-v` flags on a subcommand.
pub fn verbosity(m: &ArgMatches) -> u8 {
    m.get_one::<u8>("verbose").copied().unwrap_or(0)
}
