//! Input model for binparsegen.
//!
//! Two documents drive a generation run:
//! - **Conversion spec** (`ConversionSpec`): YAML run configuration naming the
//!   profile, the vtype file, the structures to materialize and per-structure
//!   field allow/deny lists.
//! - **Vtype schema** (`VtypeSchema`): JSON mapping from structure name to
//!   `[size, {field: [offset, [kind, params...]]}]`. Entries are kept as plain
//!   `serde_json::Value` mappings; the compiler decodes only what a run selects.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

pub mod utils;

#[cfg(test)]
mod lib_tests;

pub use utils::{escape_ident, is_valid_ident, normalize_name};

/// Errors raised while loading run inputs.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid conversion spec: {0}")]
    Spec(#[from] serde_yaml::Error),

    #[error("invalid vtype schema: {0}")]
    Schema(#[from] serde_json::Error),
}

/// The run configuration, as written in the conversion spec file.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ConversionSpec {
    /// Name of the generated module.
    pub module: String,
    /// Name of the generated profile type.
    pub profile: String,
    /// Path to the vtype JSON file.
    pub filename: PathBuf,
    /// Structures to materialize. Anything else in the schema is skipped.
    pub structs: Vec<String>,
    pub field_white_list: HashMap<String, Vec<String>>,
    pub field_black_list: HashMap<String, Vec<String>>,
    pub generate_debug_string: bool,
}

impl ConversionSpec {
    pub fn from_yaml(text: &str) -> Result<Self, LoadError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load a spec file. A relative `Filename` is resolved against the
    /// directory holding the spec file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let text = read(path)?;
        let mut spec = Self::from_yaml(&text)?;
        if spec.filename.is_relative() {
            if let Some(dir) = path.parent() {
                spec.filename = dir.join(&spec.filename);
            }
        }
        Ok(spec)
    }

    pub fn selects_struct(&self, name: &str) -> bool {
        self.structs.iter().any(|s| s == name)
    }

    /// Whether a field survives the allow/deny lists of its structure.
    ///
    /// The deny-list is checked first, so a field present in both lists is dropped.
    pub fn selects_field(&self, structure: &str, field: &str) -> bool {
        if self
            .field_black_list
            .get(structure)
            .is_some_and(|denied| denied.iter().any(|f| f == field))
        {
            return false;
        }
        match self.field_white_list.get(structure) {
            Some(allowed) => allowed.iter().any(|f| f == field),
            None => true,
        }
    }
}

/// A parsed vtype file: structure name to its raw `[size, fields]` entry.
///
/// Key order follows the file.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct VtypeSchema {
    structs: IndexMap<String, serde_json::Value>,
}

impl VtypeSchema {
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, LoadError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        Self::from_json(&read(path)?)
    }

    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.structs.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.structs.contains_key(name)
    }

    /// Structure names in lexicographic order.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.structs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.structs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.structs.is_empty()
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
