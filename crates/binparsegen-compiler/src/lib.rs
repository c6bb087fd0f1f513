//! binparsegen compiler: vtype schema to Rust accessor code.
//!
//! This crate provides the generation pipeline:
//! - `kind` - the closed set of parser kinds and their emission contracts
//! - `resolve` - recursive-descent resolution of raw field entries into an arena
//! - `definition` - structure/profile definitions with field allow/deny lists
//! - `prototypes` - shared-helper deduplication
//! - `codegen` - structure and profile code assembly
//!
//! A run owns one [`GenContext`]; nothing is shared between runs.

pub mod codegen;
pub mod config;
pub mod context;
pub mod definition;
pub mod kind;
pub mod prototypes;
pub mod resolve;

#[cfg(test)]
pub mod test_utils;


use binparsegen_core::{ConversionSpec, VtypeSchema};

pub use codegen::Emitter;
pub use config::Config;
pub use context::GenContext;
pub use definition::{ProfileDefinition, StructureDefinition, build_profile};
pub use kind::{ParserKind, Width};
pub use prototypes::PrototypeCache;
pub use resolve::{FieldArena, FieldDefinition, FieldId, ResolveError, Resolver};

/// Errors that abort a generation run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("structure `{structure}`: expected [size, {{fields}}]: {reason}")]
    MalformedStructure { structure: String, reason: String },

    #[error("decoding {structure}.{field}: {source}")]
    Field {
        structure: String,
        field: String,
        #[source]
        source: ResolveError,
    },

    #[error("structures `{first}` and `{second}` both normalize to `{name}`")]
    NameCollision {
        name: String,
        first: String,
        second: String,
    },

    #[error("`{name}` cannot be used as {context}")]
    InvalidName { name: String, context: &'static str },

    #[error("{structure}.{field}: count field `{count}` {reason}")]
    CountField {
        structure: String,
        field: String,
        count: String,
        reason: &'static str,
    },

    #[error("structure cycle without pointer indirection: {0}")]
    StructureCycle(String),
}

/// Result type for generation runs.
pub type Result<T> = std::result::Result<T, Error>;

/// Generate the accessor module for `spec`, with limits at their defaults.
pub fn generate(spec: &ConversionSpec, schema: &VtypeSchema) -> Result<String> {
    generate_with_config(spec, schema, Config::from_spec(spec))
}

/// Generate the accessor module for `spec` using an explicit codegen config.
pub fn generate_with_config(
    spec: &ConversionSpec,
    schema: &VtypeSchema,
    config: Config,
) -> Result<String> {
    let mut ctx = GenContext::new(config);
    let profile = build_profile(spec, schema, &mut ctx)?;
    Ok(Emitter::new(&ctx, &profile).emit())
}
