//! Operator contract for the logic engine
//!
//! Every operator the engine dispatches to implements [`Operator`]. The engine
//! does not evaluate arguments before calling an operator: each argument is
//! handed over as an unevaluated rule, and the operator decides if and when
//! to evaluate it through [`Engine::apply`].

use crate::engine::Engine;
use crate::error::Result;
use crate::types::Value;
use std::sync::Arc;

/// A named capability invoked for `{"name": params}` rules.
///
/// # Arguments passed to `operate`
///
/// * `engine` - The engine doing the dispatch, for recursive evaluation
/// * `data` - The data context of the current evaluation
/// * `args` - Unevaluated rule arguments. `{"op": [a, b]}` yields `[a, b]`,
///   `{"op": a}` yields `[a]`.
///
/// # Example Implementation
///
/// ```ignore
/// struct Not;
///
/// impl Operator for Not {
///     fn operate(&self, engine: &Engine, data: &Value, args: &[Value]) -> Result<Value> {
///         let first = args.first().cloned().unwrap_or_default();
///         let value = engine.apply(&first, data)?;
///         Ok(Value::Bool(!value.to_bool()))
///     }
/// }
/// ```
pub trait Operator: Send + Sync {
    /// Run the operator against `data` with the given rule arguments.
    fn operate(&self, engine: &Engine, data: &Value, args: &[Value]) -> Result<Value>;
}

impl<F> Operator for F
where
    F: Fn(&Engine, &Value, &[Value]) -> Result<Value> + Send + Sync,
{
    fn operate(&self, engine: &Engine, data: &Value, args: &[Value]) -> Result<Value> {
        self(engine, data, args)
    }
}

/// Shared handle to a registered operator.
pub type OperatorRef = Arc<dyn Operator>;
