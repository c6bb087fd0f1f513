//! Structure and profile definitions.
//!
//! Walks the schema in sorted name order, keeps the structures the run selects,
//! filters their fields through the allow/deny lists and resolves what survives.

use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;
use serde_json::Value;

use binparsegen_core::{ConversionSpec, VtypeSchema, escape_ident, is_valid_ident, normalize_name};

use crate::context::GenContext;
use crate::kind::{ArrayCount, ParserKind};
use crate::resolve::{FieldArena, FieldId, Resolver};
use crate::{Error, Result};

/// Names the generated module defines or imports itself.
const RESERVED_NAMES: &[&str] = &[
    "Enumeration",
    "Flags",
    "Signature",
    "ReaderAt",
    "Structure",
    // Prelude names the generated code relies on.
    "Box",
    "Clone",
    "Copy",
    "Debug",
    "Default",
    "Eq",
    "Err",
    "None",
    "Ok",
    "Option",
    "PartialEq",
    "Result",
    "Some",
    "String",
    "Vec",
];

/// One selected structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructureDefinition {
    /// Canonical name, used for the generated type and its profile factory.
    pub name: String,
    /// Name as written in the schema, used for allow/deny lookups.
    pub schema_name: String,
    pub size: u64,
    /// Surviving fields in schema order.
    pub fields: IndexMap<String, FieldId>,
}

impl StructureDefinition {
    /// Fields sorted by name, the order accessors and offsets are emitted in.
    pub fn sorted_fields(&self) -> Vec<(&str, FieldId)> {
        let mut fields: Vec<(&str, FieldId)> =
            self.fields.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        fields.sort_unstable_by(|a, b| a.0.cmp(b.0));
        fields
    }
}

/// Every structure of a run, sorted by canonical name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileDefinition {
    pub name: String,
    pub structures: Vec<StructureDefinition>,
}

/// Build the profile definition for `spec`, resolving fields into `ctx`.
pub fn build_profile(
    spec: &ConversionSpec,
    schema: &VtypeSchema,
    ctx: &mut GenContext,
) -> Result<ProfileDefinition> {
    let profile = ctx.config().profile_name().to_string();
    if !is_valid_ident(&profile)
        || escape_ident(&profile) != profile
        || RESERVED_NAMES.contains(&profile.as_str())
    {
        return Err(Error::InvalidName {
            name: profile,
            context: "a profile name",
        });
    }

    for name in &spec.structs {
        if !schema.contains(name) {
            tracing::warn!(structure = name.as_str(), "selected structure not found in schema");
        }
    }

    let mut canonical: BTreeMap<String, String> = BTreeMap::new();
    let mut structures = Vec::new();
    for schema_name in schema.sorted_names() {
        if !spec.selects_struct(schema_name) {
            continue;
        }
        let name = normalize_name(schema_name);
        if !is_valid_ident(&name) || RESERVED_NAMES.contains(&name.as_str()) || name == profile {
            return Err(Error::InvalidName {
                name: schema_name.to_string(),
                context: "a structure name",
            });
        }
        if let Some(first) = canonical.get(&name) {
            return Err(Error::NameCollision {
                name,
                first: first.clone(),
                second: schema_name.to_string(),
            });
        }
        canonical.insert(name.clone(), schema_name.to_string());

        let Some(entry) = schema.get(schema_name) else {
            continue;
        };
        structures.push(build_structure(spec, ctx, schema_name, name, entry)?);
    }
    structures.sort_by(|a, b| a.name.cmp(&b.name));

    check_offset_names(&structures)?;
    check_cycles(&structures, ctx.arena())?;

    Ok(ProfileDefinition {
        name: profile,
        structures,
    })
}

fn build_structure(
    spec: &ConversionSpec,
    ctx: &mut GenContext,
    schema_name: &str,
    name: String,
    entry: &Value,
) -> Result<StructureDefinition> {
    let malformed = |reason: &str| Error::MalformedStructure {
        structure: schema_name.to_string(),
        reason: reason.to_string(),
    };
    let Some([size, fields, ..]) = entry.as_array().map(Vec::as_slice) else {
        return Err(malformed("not a two-element array"));
    };
    let size = size
        .as_u64()
        .ok_or_else(|| malformed("size is not a non-negative integer"))?;
    let fields = fields
        .as_object()
        .ok_or_else(|| malformed("fields are not an object"))?;

    let mut resolved = IndexMap::new();
    for (field, field_entry) in fields {
        if !spec.selects_field(schema_name, field) {
            tracing::debug!(structure = schema_name, field = field.as_str(), "field filtered out");
            continue;
        }
        if !is_valid_ident(field) {
            return Err(Error::InvalidName {
                name: field.clone(),
                context: "a field name",
            });
        }
        let id = Resolver::new(ctx, spec)
            .resolve_field(field_entry)
            .map_err(|source| Error::Field {
                structure: schema_name.to_string(),
                field: field.clone(),
                source,
            })?;
        resolved.insert(field.clone(), id);
    }

    let definition = StructureDefinition {
        name,
        schema_name: schema_name.to_string(),
        size,
        fields: resolved,
    };
    check_counts(&definition, ctx.arena())?;
    Ok(definition)
}

/// Dynamic array counts must name a surviving integer field of the same structure.
fn check_counts(definition: &StructureDefinition, arena: &FieldArena) -> Result<()> {
    let error = |field: &str, count: &str, reason| Error::CountField {
        structure: definition.schema_name.clone(),
        field: field.to_string(),
        count: count.to_string(),
        reason,
    };

    for (field, &id) in &definition.fields {
        if let ParserKind::Array(array) = &arena.get(id).kind {
            if let ArrayCount::Dynamic(count) = &array.count {
                let Some(&count_id) = definition.fields.get(count) else {
                    return Err(error(field, count, "is not a field of this structure"));
                };
                if !matches!(
                    arena.get(count_id).kind,
                    ParserKind::Integer(_) | ParserKind::BitField(_)
                ) {
                    return Err(error(field, count, "is not an integer field"));
                }
            }
        }
        if let Some(count) = nested_dynamic_count(&arena.get(id).kind, arena) {
            return Err(error(field, count, "can only size a top-level array"));
        }
    }
    Ok(())
}

/// A dynamic count anywhere below a field's own kind.
fn nested_dynamic_count<'a>(kind: &'a ParserKind, arena: &'a FieldArena) -> Option<&'a str> {
    let target = match kind {
        ParserKind::Array(array) => array.target,
        ParserKind::Pointer(pointer) => pointer.target,
        _ => return None,
    };
    let target = &arena.get(target).kind;
    if let ParserKind::Array(array) = target {
        if let ArrayCount::Dynamic(count) = &array.count {
            return Some(count);
        }
    }
    nested_dynamic_count(target, arena)
}

/// Profile offsets are named `Off_<Structure>_<field>`, which can collide
/// across structures when names contain underscores.
fn check_offset_names(structures: &[StructureDefinition]) -> Result<()> {
    let mut seen: BTreeMap<String, String> = BTreeMap::new();
    for structure in structures {
        for field in structure.fields.keys() {
            let offset = format!("Off_{}_{}", structure.name, field);
            let qualified = format!("{}.{}", structure.schema_name, field);
            if let Some(first) = seen.get(&offset) {
                return Err(Error::NameCollision {
                    name: offset,
                    first: first.clone(),
                    second: qualified,
                });
            }
            seen.insert(offset, qualified);
        }
    }
    Ok(())
}

/// Reject structures that embed themselves by value, directly or transitively.
fn check_cycles(structures: &[StructureDefinition], arena: &FieldArena) -> Result<()> {
    let edges: BTreeMap<&str, BTreeSet<&str>> = structures
        .iter()
        .map(|structure| {
            let targets = structure
                .sorted_fields()
                .into_iter()
                .filter_map(|(_, id)| match &arena.get(id).kind {
                    ParserKind::StructureReference(reference) => Some(reference.name.as_str()),
                    _ => None,
                })
                .collect();
            (structure.name.as_str(), targets)
        })
        .collect();

    let mut done = BTreeSet::new();
    for start in edges.keys() {
        let mut path = Vec::new();
        if let Some(cycle) = visit(*start, &edges, &mut path, &mut done) {
            return Err(Error::StructureCycle(cycle));
        }
    }
    Ok(())
}

fn visit<'a>(
    node: &'a str,
    edges: &BTreeMap<&'a str, BTreeSet<&'a str>>,
    path: &mut Vec<&'a str>,
    done: &mut BTreeSet<&'a str>,
) -> Option<String> {
    if let Some(pos) = path.iter().position(|n| *n == node) {
        let mut cycle = path[pos..].to_vec();
        cycle.push(node);
        return Some(cycle.join(" -> "));
    }
    if done.contains(node) {
        return None;
    }
    let targets = edges.get(node)?;

    path.push(node);
    for target in targets {
        if let Some(cycle) = visit(target, edges, path, done) {
            return Some(cycle);
        }
    }
    path.pop();
    done.insert(node);
    None
}
