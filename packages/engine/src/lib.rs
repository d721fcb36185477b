//! JSON Logic Engine
//!
//! An extensible evaluator for rules written as JSON values. A rule is
//! interpreted recursively against a data value using a registry of named
//! operators supplied by the embedding application.
//!
//! This library provides:
//! - A [`Value`] type shared by rules and data
//! - An [`OperatorRegistry`] and the [`Operator`] contract operators implement
//! - The [`Engine`] that classifies rules by shape and dispatches operators,
//!   including the `$name` quick access shorthand for variable lookups
//!
//! The library ships no operators of its own.
//!
//! # Example
//!
//! ```
//! use jsonlogic_engine::{Engine, EngineError, Result, Value, QUICK_ACCESS_OPERATOR};
//!
//! let mut engine = Engine::new();
//! engine.register_fn(QUICK_ACCESS_OPERATOR, |_engine, data, args| {
//!     let name = args.first().and_then(Value::as_str).unwrap_or_default();
//!     match data.as_object().and_then(|o| o.get(name)) {
//!         Some(value) => Ok(value.clone()),
//!         None => Err(EngineError::VariableNotFound(name.to_string())),
//!     }
//! });
//!
//! let result = engine.apply_json(r#"{"$age": null}"#, r#"{"age": 42}"#)?;
//! assert_eq!(result, Value::Int(42));
//! # Ok::<(), EngineError>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod operator;
pub mod registry;
pub mod types;

// Re-export commonly used items
pub use config::{EngineConfig, QUICK_ACCESS_OPERATOR, QUICK_ACCESS_PREFIX};
pub use engine::Engine;
pub use error::{EngineError, Result};
pub use operator::{Operator, OperatorRef};
pub use registry::OperatorRegistry;
pub use types::{Map, Value};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
