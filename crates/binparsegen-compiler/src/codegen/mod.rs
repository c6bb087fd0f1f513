//! Rust source assembly.
//!
//! The artifact is laid out as: header, runtime import, shared helpers sorted
//! by identity, structure blocks sorted by canonical name, and the profile.

mod emitter;
mod profile;
mod structure;

#[cfg(test)]
mod emitter_tests;

pub use emitter::Emitter;
