//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("binparsegen")
        .about("Generate Rust accessors for binary structures from vtype schemas")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(structs_command())
}

/// Generate the accessor module described by a conversion spec.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Generate Rust accessors from a conversion spec")
        .after_help(
            r#"EXAMPLES:
  binparsegen generate spec.yaml > profile.rs
  binparsegen generate spec.yaml -o src/profile.rs --debug-string
  binparsegen generate spec.yaml --runtime-crate crate::reader"#,
        )
        .arg(spec_path_arg())
        .arg(output_file_arg())
        .arg(debug_string_arg())
        .arg(max_array_count_arg())
        .arg(scan_window_arg())
        .arg(runtime_crate_arg())
        .arg(verbose_arg())
}

/// List structures available in a vtype schema.
pub fn structs_command() -> Command {
    Command::new("structs")
        .about("List the structures defined in a vtype schema")
        .arg(schema_path_arg())
        .arg(verbose_arg())
}
