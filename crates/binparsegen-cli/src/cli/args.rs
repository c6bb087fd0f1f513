//! Shared argument builders for CLI commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Conversion spec file (positional).
pub fn spec_path_arg() -> Arg {
    Arg::new("spec_path")
        .value_name("SPEC")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("YAML conversion spec")
}

/// Vtype schema file (positional).
pub fn schema_path_arg() -> Arg {
    Arg::new("schema_path")
        .value_name("SCHEMA")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("JSON vtype schema")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Force debug formatters on (--debug-string).
pub fn debug_string_arg() -> Arg {
    Arg::new("debug_string")
        .long("debug-string")
        .action(ArgAction::SetTrue)
        .help("Emit Display formatters even if the conversion spec does not ask for them")
}

/// Array count clamp (--max-array-count).
pub fn max_array_count_arg() -> Arg {
    Arg::new("max_array_count")
        .long("max-array-count")
        .value_name("N")
        .value_parser(value_parser!(u64))
        .help("Upper bound applied to array counts at decode time [default: 4000000]")
}

/// Terminator scan window (--scan-window).
pub fn scan_window_arg() -> Arg {
    Arg::new("scan_window")
        .long("scan-window")
        .value_name("BYTES")
        .value_parser(value_parser!(usize))
        .help("Bytes scanned for a string terminator [default: 1024]")
}

/// Runtime crate path (--runtime-crate).
pub fn runtime_crate_arg() -> Arg {
    Arg::new("runtime_crate")
        .long("runtime-crate")
        .value_name("PATH")
        .help("Path generated code imports ReaderAt and Structure from [default: binparsegen_reader]")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for debug logs, -vv for trace logs)")
}
