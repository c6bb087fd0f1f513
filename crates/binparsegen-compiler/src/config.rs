//! Configuration for code generation.

use binparsegen_core::ConversionSpec;

/// Upper bound applied to every array count at decode time.
pub const DEFAULT_MAX_ARRAY_COUNT: u64 = 4_000_000;
/// Bytes scanned for a terminator by terminated string helpers.
pub const DEFAULT_SCAN_WINDOW: usize = 1024;
/// Crate providing `ReaderAt` and `Structure` to generated code.
pub const DEFAULT_RUNTIME_CRATE: &str = "binparsegen_reader";

/// Configuration for one generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Module name, recorded in the artifact header
    pub(crate) module: String,
    /// Name of the generated profile type
    pub(crate) profile: String,
    /// Whether structures get a `Display` formatter
    pub(crate) debug_string: bool,
    pub(crate) max_array_count: u64,
    pub(crate) scan_window: usize,
    pub(crate) runtime_crate: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            module: "profile".to_string(),
            profile: "Profile".to_string(),
            debug_string: false,
            max_array_count: DEFAULT_MAX_ARRAY_COUNT,
            scan_window: DEFAULT_SCAN_WINDOW,
            runtime_crate: DEFAULT_RUNTIME_CRATE.to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take module, profile and debug formatting from a conversion spec.
    pub fn from_spec(spec: &ConversionSpec) -> Self {
        Self::new()
            .module(&spec.module)
            .profile(&spec.profile)
            .debug_string(spec.generate_debug_string)
    }

    pub fn module(mut self, name: &str) -> Self {
        self.module = name.to_string();
        self
    }

    pub fn profile(mut self, name: &str) -> Self {
        self.profile = name.to_string();
        self
    }

    /// Set whether to emit `Display` formatters for structures.
    pub fn debug_string(mut self, value: bool) -> Self {
        self.debug_string = value;
        self
    }

    /// Set the array count clamp. Values above `i64::MAX` are capped.
    pub fn max_array_count(mut self, value: u64) -> Self {
        self.max_array_count = value.min(i64::MAX as u64);
        self
    }

    /// Set the terminator scan window. Zero is bumped to one byte.
    pub fn scan_window(mut self, value: usize) -> Self {
        self.scan_window = value.max(1);
        self
    }

    /// Set the path generated code uses to import `ReaderAt` and `Structure`.
    pub fn runtime_crate(mut self, path: &str) -> Self {
        self.runtime_crate = path.to_string();
        self
    }

    pub fn profile_name(&self) -> &str {
        &self.profile
    }

    pub fn module_name(&self) -> &str {
        &self.module
    }

    pub fn emits_debug_string(&self) -> bool {
        self.debug_string
    }

    pub fn array_limit(&self) -> u64 {
        self.max_array_count
    }

    pub fn window(&self) -> usize {
        self.scan_window
    }
}
