//! Test operators that feature files can register by kind.

use jsonlogic_engine::{Engine, EngineError, OperatorRef, Result, Value};
use std::sync::Arc;

/// Build a test operator by its feature-file name.
///
/// - `echo`: returns its unevaluated argument list as an array
/// - `first`: returns its first argument unevaluated
/// - `count`: returns the number of arguments
/// - `evaluate`: evaluates every argument and returns the results
/// - `lookup`: quick access style lookup of `[name, default]` in the data
/// - `fail`: always fails with an invalid operation error
pub fn operator_by_kind(kind: &str) -> OperatorRef {
    match kind {
        "echo" => Arc::new(|_: &Engine, _: &Value, args: &[Value]| -> Result<Value> {
            Ok(Value::Array(args.to_vec()))
        }),
        "first" => Arc::new(|_: &Engine, _: &Value, args: &[Value]| -> Result<Value> {
            Ok(args.first().cloned().unwrap_or_default())
        }),
        "count" => Arc::new(|_: &Engine, _: &Value, args: &[Value]| -> Result<Value> {
            Ok(Value::Int(args.len() as i64))
        }),
        "evaluate" => Arc::new(|engine: &Engine, data: &Value, args: &[Value]| -> Result<Value> {
            let values = args
                .iter()
                .map(|arg| engine.apply(arg, data))
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::Array(values))
        }),
        "lookup" => Arc::new(|_: &Engine, data: &Value, args: &[Value]| -> Result<Value> {
            let name = args.first().and_then(Value::as_str).unwrap_or_default();
            let default = args.get(1).cloned().unwrap_or_default();
            Ok(data
                .as_object()
                .and_then(|object| object.get(name))
                .cloned()
                .unwrap_or(default))
        }),
        "fail" => Arc::new(|_: &Engine, _: &Value, _: &[Value]| -> Result<Value> {
            Err(EngineError::InvalidOperation("operator failed".to_string()))
        }),
        other => panic!("Unknown test operator kind: {}", other),
    }
}

/// Operator that always returns `value`.
pub fn constant(value: Value) -> OperatorRef {
    Arc::new(move |_: &Engine, _: &Value, _: &[Value]| -> Result<Value> { Ok(value.clone()) })
}
