//! Arena of resolved field definitions.

use crate::kind::ParserKind;

/// Index of a definition in a [`FieldArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(u32);

impl FieldId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A field's schema offset paired with its decoding strategy.
///
/// Targets nested in arrays and pointers have offset 0: their position is
/// computed at decode time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDefinition {
    pub offset: u64,
    pub kind: ParserKind,
}

/// Owns every field definition of a run. Composite kinds refer to their
/// targets by [`FieldId`].
#[derive(Clone, Debug, Default)]
pub struct FieldArena {
    fields: Vec<FieldDefinition>,
}

impl FieldArena {
    pub fn alloc(&mut self, field: FieldDefinition) -> FieldId {
        let id = FieldId(self.fields.len() as u32);
        self.fields.push(field);
        id
    }

    /// Ids are only minted by `alloc`, so lookups always hit.
    pub fn get(&self, id: FieldId) -> &FieldDefinition {
        &self.fields[id.index()]
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
