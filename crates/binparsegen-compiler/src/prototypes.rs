//! Shared-helper deduplication.
//!
//! Each helper is emitted once per artifact, keyed by its identity. The first
//! registration wins; since helper text is a pure function of the identity's
//! inputs, later registrations would produce the same text.

use std::collections::BTreeMap;

use crate::kind::{Env, ParserKind};

#[derive(Clone, Debug, Default)]
pub struct PrototypeCache {
    helpers: BTreeMap<String, String>,
}

impl PrototypeCache {
    /// Record `kind`'s helper, after the helpers of its dependencies.
    pub fn register(&mut self, kind: &ParserKind, env: Env<'_>) {
        for dependency in kind.dependencies(env) {
            self.register(&dependency, env);
        }

        let Some(identity) = kind.helper_identity(env) else {
            return;
        };
        if let Some(existing) = self.helpers.get(&identity) {
            debug_assert_eq!(
                existing,
                &kind.emit_helper(env),
                "helper `{identity}` registered with different text"
            );
            return;
        }
        tracing::debug!(helper = identity.as_str(), kind = kind.name(), "registered helper");
        self.helpers.insert(identity, kind.emit_helper(env));
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.helpers.contains_key(identity)
    }

    pub fn len(&self) -> usize {
        self.helpers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }

    /// Helper identities and texts, sorted by identity.
    pub fn helpers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.helpers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
