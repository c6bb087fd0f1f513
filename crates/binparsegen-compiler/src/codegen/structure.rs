//! Structure blocks: handle type, size, accessors and debug formatting.

use std::fmt::Write as _;

use binparsegen_core::escape_ident;

use super::Emitter;
use crate::definition::StructureDefinition;
use crate::kind::{DebugStyle, ParserKind};

impl Emitter<'_> {
    pub(super) fn emit_structure(&mut self, structure: &StructureDefinition) {
        let name = &structure.name;
        let env = self.env();
        let profile = env.config.profile_name();

        let _ = write!(
            self.output,
            "#[allow(non_camel_case_types)]\n#[derive(Clone, Copy)]\npub struct {name}<'a> {{\n    pub reader: &'a dyn ReaderAt,\n    pub offset: u64,\n    pub profile: &'a {profile},\n}}\n\n"
        );
        let _ = write!(
            self.output,
            "impl Structure for {name}<'_> {{\n    fn size(&self) -> u64 {{\n        {}\n    }}\n}}\n\n",
            structure.size
        );

        let fields = structure.sorted_fields();
        if !fields.is_empty() {
            let _ = writeln!(self.output, "#[allow(non_snake_case)]\nimpl<'a> {name}<'a> {{");
            for (i, (field, id)) in fields.iter().enumerate() {
                if i > 0 {
                    self.output.push('\n');
                }
                let kind = &env.arena.get(*id).kind;
                self.output.push_str(&kind.emit_accessor(env, name, field));
            }
            self.output.push_str("}\n\n");
        }

        if env.config.emits_debug_string() {
            self.emit_display(structure);
        }
    }

    fn emit_display(&mut self, structure: &StructureDefinition) {
        let name = &structure.name;
        let env = self.env();

        let _ = writeln!(self.output, "impl std::fmt::Display for {name}<'_> {{");
        self.output
            .push_str("    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {\n");
        let _ = writeln!(
            self.output,
            "        writeln!(f, \"struct {name} @ {{:#x}}:\", self.offset)?;"
        );
        for (field, id) in structure.sorted_fields() {
            let kind = &env.arena.get(id).kind;
            let accessor = escape_ident(field);
            let line = match self.debug_style(kind) {
                DebugStyle::Text | DebugStyle::Display => {
                    format!("        writeln!(f, \"  {field}: {{}}\", self.{accessor}())?;\n")
                }
                DebugStyle::Hex => {
                    format!("        writeln!(f, \"  {field}: {{:#x}}\", self.{accessor}())?;\n")
                }
                DebugStyle::Count => format!(
                    "        writeln!(f, \"  {field}: [{{}} elements]\", self.{accessor}().len())?;\n"
                ),
                DebugStyle::Nested => format!(
                    "        writeln!(f, \"  {field}: {{{{\")?;\n        for line in self.{accessor}().to_string().lines() {{\n            writeln!(f, \"    {{line}}\")?;\n        }}\n        writeln!(f, \"  }}}}\")?;\n"
                ),
                DebugStyle::Skip => continue,
            };
            self.output.push_str(&line);
        }
        self.output.push_str("        Ok(())\n    }\n}\n\n");
    }

    /// Nested structures outside the profile may not implement `Display`.
    fn debug_style(&self, kind: &ParserKind) -> DebugStyle {
        match kind {
            ParserKind::StructureReference(reference)
                if !self
                    .profile
                    .structures
                    .iter()
                    .any(|s| s.name == reference.name) =>
            {
                DebugStyle::Skip
            }
            _ => kind.debug_style(),
        }
    }
}
