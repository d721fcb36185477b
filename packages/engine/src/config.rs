//! Configuration for the logic engine
//!
//! The defaults are compile-time constants. An embedder that needs a
//! different quick access convention builds an [`EngineConfig`] and hands it
//! to [`crate::Engine::with_config`]; the configuration is fixed for the
//! lifetime of that engine.

/// Sigil that marks a quick access variable lookup, as in `{"$name": default}`.
pub const QUICK_ACCESS_PREFIX: char = '$';

/// Registry name of the operator that quick access rules are rewritten to.
///
/// The operator receives two arguments: the variable name without the
/// prefix, and the rule's parameter value unchanged.
pub const QUICK_ACCESS_OPERATOR: &str = "_quick_access";

/// Per-engine settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Leading character that turns an unknown operator name into a quick access lookup
    pub quick_access_prefix: char,
    /// Operator name quick access lookups dispatch to
    pub quick_access_operator: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            quick_access_prefix: QUICK_ACCESS_PREFIX,
            quick_access_operator: QUICK_ACCESS_OPERATOR.to_string(),
        }
    }
}

impl EngineConfig {
    /// Create a config with the default quick access convention.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different quick access prefix.
    pub fn with_quick_access_prefix(mut self, prefix: char) -> Self {
        self.quick_access_prefix = prefix;
        self
    }

    /// Dispatch quick access lookups to a different operator name.
    pub fn with_quick_access_operator(mut self, name: impl Into<String>) -> Self {
        self.quick_access_operator = name.into();
        self
    }

    /// Split a quick access operator name into the variable it refers to.
    ///
    /// Returns `None` for the empty name and for names without the prefix.
    /// The prefix on its own yields the empty variable name.
    pub fn quick_access_variable<'a>(&self, op_name: &'a str) -> Option<&'a str> {
        op_name.strip_prefix(self.quick_access_prefix)
    }
}
