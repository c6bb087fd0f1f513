//! The profile block: offset table and structure factories.

use std::fmt::Write as _;

use super::Emitter;

impl Emitter<'_> {
    pub(super) fn emit_profile(&mut self) {
        let profile = self.profile;
        let env = self.env();
        let name = &profile.name;

        let mut offsets = Vec::new();
        for structure in &profile.structures {
            for (field, id) in structure.sorted_fields() {
                offsets.push((
                    format!("Off_{}_{}", structure.name, field),
                    env.arena.get(id).offset,
                ));
            }
        }

        let _ = writeln!(
            self.output,
            "#[allow(non_snake_case)]\n#[derive(Clone, Debug, PartialEq, Eq)]\npub struct {name} {{"
        );
        for (offset, _) in &offsets {
            let _ = writeln!(self.output, "    pub {offset}: u64,");
        }
        self.output.push_str("}\n\n");

        let _ = writeln!(self.output, "#[allow(non_snake_case)]\nimpl {name} {{");
        self.output.push_str("    pub fn new() -> Self {\n        Self {\n");
        for (offset, value) in &offsets {
            let _ = writeln!(self.output, "            {offset}: {value},");
        }
        self.output.push_str("        }\n    }\n");
        for structure in &profile.structures {
            let _ = write!(
                self.output,
                "\n    pub fn {s}<'a>(&'a self, reader: &'a dyn ReaderAt, offset: u64) -> {s}<'a> {{\n        {s} {{\n            reader,\n            offset,\n            profile: self,\n        }}\n    }}\n",
                s = structure.name
            );
        }
        self.output.push_str("}\n\n");

        let _ = write!(
            self.output,
            "impl Default for {name} {{\n    fn default() -> Self {{\n        Self::new()\n    }}\n}}\n"
        );
    }
}
