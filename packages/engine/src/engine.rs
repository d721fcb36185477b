//! Rule evaluation engine
//!
//! Interprets a rule [`Value`] against a data [`Value`]. The grammar is decided
//! by shape alone:
//!
//! - **Literals** (`null`, booleans, numbers, strings, arrays) evaluate to
//!   themselves. Arrays are opaque data; their elements are not evaluated.
//! - **Single-key objects** `{"name": params}` are operator invocations. The
//!   name is looked up in the registry; failing that, a name starting with the
//!   quick access prefix (`$` by default) is rewritten to the quick access
//!   operator with arguments `[name-without-prefix, params]`.
//! - **Objects with zero or several keys** are not invocations and evaluate to
//!   themselves.
//!
//! # Example
//!
//! ```
//! use jsonlogic_engine::{Engine, Result, Value};
//!
//! let mut engine = Engine::new();
//! engine.register_fn("count", |_engine: &Engine, _data: &Value, args: &[Value]| -> Result<Value> {
//!     Ok(Value::Int(args.len() as i64))
//! });
//!
//! let rule = Value::from_json(r#"{"count": [1, 2, 3]}"#)?;
//! assert_eq!(engine.apply(&rule, &Value::Null)?, Value::Int(3));
//! # Ok::<(), jsonlogic_engine::EngineError>(())
//! ```

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::operator::{Operator, OperatorRef};
use crate::registry::OperatorRegistry;
use crate::types::{Map, Value};

/// Evaluator for logic rules.
///
/// Registration needs `&mut self` and evaluation needs `&self`, so once an
/// engine is built it can be shared (for example behind an `Arc`) and used
/// for concurrent evaluations. Cloning an engine is cheap: clones share the
/// registered operator handles.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    registry: OperatorRegistry,
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with an empty registry and the default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with an empty registry and the given configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            registry: OperatorRegistry::new(),
            config,
        }
    }

    /// Register an operator, replacing and returning any previous one with the same name.
    pub fn register<O>(&mut self, name: impl Into<String>, operator: O) -> Option<OperatorRef>
    where
        O: Operator + 'static,
    {
        self.registry.register(name, operator)
    }

    /// Register a closure as an operator.
    ///
    /// Same as [`Engine::register`], but the closure signature is inferred so
    /// argument types do not need annotations.
    pub fn register_fn<F>(&mut self, name: impl Into<String>, f: F) -> Option<OperatorRef>
    where
        F: Fn(&Engine, &Value, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        self.registry.register(name, f)
    }

    /// The operator registry.
    pub fn registry(&self) -> &OperatorRegistry {
        &self.registry
    }

    /// Mutable access to the operator registry.
    pub fn registry_mut(&mut self) -> &mut OperatorRegistry {
        &mut self.registry
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Look up a registered operator.
    pub fn operator(&self, name: &str) -> Option<&OperatorRef> {
        self.registry.lookup(name)
    }

    /// Evaluate `rule` against `data`.
    ///
    /// Errors returned by operators are propagated unchanged.
    pub fn apply(&self, rule: &Value, data: &Value) -> Result<Value> {
        match rule {
            Value::Null
            | Value::Bool(_)
            | Value::Int(_)
            | Value::Float(_)
            | Value::String(_)
            | Value::Array(_) => Ok(rule.clone()),
            Value::Object(map) => match single_entry(map) {
                Some((name, params)) => self.dispatch(name, params, data),
                // Not an invocation: hand the object back as data.
                None => Ok(rule.clone()),
            },
        }
    }

    /// Decode `rule` and `data` from JSON and evaluate.
    pub fn apply_json(&self, rule: &str, data: &str) -> Result<Value> {
        let rule = Value::from_json(rule)?;
        let data = Value::from_json(data)?;
        self.apply(&rule, &data)
    }

    /// Invoke `operator` with `params` normalized to an argument list.
    ///
    /// An array is passed element by element, preserving order and count
    /// (an empty array gives no arguments). Any other value becomes the single
    /// argument.
    pub fn apply_operator(
        &self,
        operator: &dyn Operator,
        params: &Value,
        data: &Value,
    ) -> Result<Value> {
        match params {
            Value::Array(items) => operator.operate(self, data, items),
            other => operator.operate(self, data, std::slice::from_ref(other)),
        }
    }

    /// Invoke `operator` with one single-key rule per entry of `params`.
    ///
    /// `{"a": 1, "b": 2}` becomes the arguments `[{"a": 1}, {"b": 2}]`, in the
    /// insertion order of `params`. Each argument can then be evaluated on its
    /// own as a separate invocation.
    pub fn apply_operator_with_param_map(
        &self,
        operator: &dyn Operator,
        params: &Map,
        data: &Value,
    ) -> Result<Value> {
        let args: Vec<Value> = params
            .iter()
            .map(|(name, param)| {
                let mut entry = Map::with_capacity(1);
                entry.insert(name.clone(), param.clone());
                Value::Object(entry)
            })
            .collect();

        operator.operate(self, data, &args)
    }

    fn dispatch(&self, name: &str, params: &Value, data: &Value) -> Result<Value> {
        if let Some(operator) = self.registry.lookup(name) {
            tracing::trace!(operator = %name, "Dispatching operator");
            return self.apply_operator(operator.as_ref(), params, data);
        }

        if let Some(variable) = self.config.quick_access_variable(name) {
            let quick_access = &self.config.quick_access_operator;
            let Some(operator) = self.registry.lookup(quick_access) else {
                tracing::debug!(
                    operator = %name,
                    quick_access_operator = %quick_access,
                    "Quick access operator not registered"
                );
                return Err(EngineError::QuickAccessUnconfigured);
            };

            tracing::trace!(
                operator = %quick_access,
                variable = %variable,
                "Dispatching quick access"
            );
            let args = [Value::String(variable.to_string()), params.clone()];
            return operator.operate(self, data, &args);
        }

        tracing::debug!(operator = %name, "Operator not found");
        Err(EngineError::UnknownOperator(name.to_string()))
    }
}

/// The only entry of a one-key object.
fn single_entry(map: &Map) -> Option<(&String, &Value)> {
    if map.len() == 1 {
        map.first()
    } else {
        None
    }
}
