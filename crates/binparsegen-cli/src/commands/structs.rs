use std::path::PathBuf;

use binparsegen_core::{VtypeSchema, normalize_name};

use super::CommandError;

pub struct StructsArgs {
    pub schema_path: PathBuf,
}

pub fn run(args: StructsArgs) -> Result<(), CommandError> {
    let schema = VtypeSchema::load(&args.schema_path)?;
    print!("{}", list(&schema));
    Ok(())
}

/// One line per structure: schema name, canonical name and declared size.
pub fn list(schema: &VtypeSchema) -> String {
    let names = schema.sorted_names();
    let width = names.iter().map(|n| n.len()).max().unwrap_or(0);

    let mut out = String::new();
    for name in names {
        let size = schema
            .get(name)
            .and_then(|entry| entry.get(0))
            .and_then(|size| size.as_u64())
            .map_or_else(|| "?".to_string(), |size| size.to_string());
        out.push_str(&format!(
            "{name:<width$}  {:<width$}  {size}\n",
            normalize_name(name)
        ));
    }
    out
}
