use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use binparsegen_compiler::{Config, generate_with_config};
use binparsegen_core::{ConversionSpec, VtypeSchema};

use super::CommandError;

pub struct GenerateArgs {
    pub spec_path: PathBuf,
    pub output: Option<PathBuf>,
    pub debug_string: bool,
    pub max_array_count: Option<u64>,
    pub scan_window: Option<usize>,
    pub runtime_crate: Option<String>,
}

pub fn run(args: GenerateArgs) -> Result<(), CommandError> {
    let code = render(&args)?;

    match &args.output {
        Some(path) => fs::write(path, &code).map_err(|source| CommandError::Write {
            path: path.clone(),
            source,
        })?,
        None => io::stdout()
            .write_all(code.as_bytes())
            .map_err(|source| CommandError::Write {
                path: PathBuf::from("<stdout>"),
                source,
            })?,
    }
    Ok(())
}

/// Load the conversion spec and its schema, then generate the module source.
pub fn render(args: &GenerateArgs) -> Result<String, CommandError> {
    let mut spec = ConversionSpec::load(&args.spec_path)?;
    if args.debug_string {
        spec.generate_debug_string = true;
    }
    let schema = VtypeSchema::load(&spec.filename)?;
    tracing::debug!(
        schema = %spec.filename.display(),
        structures = schema.len(),
        selected = spec.structs.len(),
        "loaded vtype schema"
    );

    let code = generate_with_config(&spec, &schema, config_for(&spec, args))?;
    tracing::info!(bytes = code.len(), profile = spec.profile.as_str(), "generated profile");
    Ok(code)
}

fn config_for(spec: &ConversionSpec, args: &GenerateArgs) -> Config {
    let mut config = Config::from_spec(spec);
    if let Some(count) = args.max_array_count {
        config = config.max_array_count(count);
    }
    if let Some(window) = args.scan_window {
        config = config.scan_window(window);
    }
    if let Some(path) = &args.runtime_crate {
        config = config.runtime_crate(path);
    }
    config
}
