//! Per-run generation state.

use crate::config::Config;
use crate::kind::{Env, ParserKind};
use crate::prototypes::PrototypeCache;
use crate::resolve::FieldArena;

/// Everything one generation run accumulates.
///
/// Each run creates a fresh context, so the prototype cache and the field arena
/// never leak between unrelated runs.
#[derive(Debug)]
pub struct GenContext {
    config: Config,
    arena: FieldArena,
    prototypes: PrototypeCache,
}

impl GenContext {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            arena: FieldArena::default(),
            prototypes: PrototypeCache::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn arena(&self) -> &FieldArena {
        &self.arena
    }

    pub(crate) fn arena_mut(&mut self) -> &mut FieldArena {
        &mut self.arena
    }

    pub fn prototypes(&self) -> &PrototypeCache {
        &self.prototypes
    }

    pub fn env(&self) -> Env<'_> {
        Env {
            arena: &self.arena,
            config: &self.config,
        }
    }

    /// Record the shared helpers `kind` needs, dependencies first.
    pub(crate) fn register(&mut self, kind: &ParserKind) {
        let env = Env {
            arena: &self.arena,
            config: &self.config,
        };
        self.prototypes.register(kind, env);
    }
}
