//! Typed kind parameters, as found in the second slot of a kind entry.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// Parameters of `Pointer` and `Array`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct TargetArgs {
    pub target: Option<String>,
    pub target_args: Option<Value>,
    pub count: Option<CountArg>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum CountArg {
    Static(i64),
    Dynamic(String),
}

#[derive(Debug, Deserialize)]
pub(crate) struct EnumArgs {
    #[serde(default)]
    pub choices: BTreeMap<i64, String>,
    pub target: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FlagsArgs {
    #[serde(default)]
    pub bitmap: BTreeMap<String, u64>,
    #[serde(default)]
    pub maskmap: BTreeMap<String, u64>,
    pub target: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BitFieldArgs {
    #[serde(default)]
    pub start_bit: u32,
    pub end_bit: u32,
    pub target: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SignatureArgs {
    pub value: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StringArgs {
    #[serde(default)]
    pub length: u64,
}
