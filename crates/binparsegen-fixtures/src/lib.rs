//! Fixture profile generated at build time from `schema/types.json`.
//!
//! The build script runs the generator, so the tests here exercise the real
//! emitted code against hand-built byte buffers.

#[allow(
    non_snake_case,
    non_camel_case_types,
    dead_code,
    unused_imports,
    unused_variables,
    unused_parens,
    clippy::all
)]
pub mod generated {
    include!(concat!(env!("OUT_DIR"), "/registry.rs"));
}

pub use generated::FixtureProfile;
