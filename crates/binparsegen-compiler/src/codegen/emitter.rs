//! Core emitter struct and artifact layout.

use std::fmt::Write as _;

use crate::context::GenContext;
use crate::definition::ProfileDefinition;
use crate::kind::Env;

/// Rust emitter for one resolved profile.
pub struct Emitter<'a> {
    pub(super) ctx: &'a GenContext,
    pub(super) profile: &'a ProfileDefinition,
    /// Output buffer
    pub(super) output: String,
}

impl<'a> Emitter<'a> {
    pub fn new(ctx: &'a GenContext, profile: &'a ProfileDefinition) -> Self {
        Self {
            ctx,
            profile,
            output: String::new(),
        }
    }

    pub(super) fn env(&self) -> Env<'a> {
        self.ctx.env()
    }

    /// Emit the complete module source.
    pub fn emit(mut self) -> String {
        self.emit_header();
        self.emit_helpers();

        let profile = self.profile;
        for structure in &profile.structures {
            self.emit_structure(structure);
        }
        self.emit_profile();

        let trimmed = self.output.trim_end();
        let mut out = String::with_capacity(trimmed.len() + 1);
        out.push_str(trimmed);
        out.push('\n');
        out
    }

    fn emit_header(&mut self) {
        let config = self.ctx.config();
        self.output
            .push_str("// Code generated by binparsegen. DO NOT EDIT.\n");
        let _ = writeln!(self.output, "// Module: {}", config.module_name());
        let _ = writeln!(self.output, "// Profile: {}", config.profile_name());
        self.output.push('\n');
        let _ = writeln!(
            self.output,
            "use {}::{{ReaderAt, Structure}};",
            config.runtime_crate
        );
        self.output.push('\n');
    }

    fn emit_helpers(&mut self) {
        let ctx = self.ctx;
        for (identity, text) in ctx.prototypes().helpers() {
            tracing::trace!(helper = identity, "emitting helper");
            self.output.push_str(text);
            self.output.push('\n');
        }
    }
}
