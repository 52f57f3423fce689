//! notlisp core — value model, environment, and error types.
//!
//! notlisp is a minimal embeddable expression language: s-expression data,
//! an environment of host-registered bindings, and (in `notlisp_eval`) an
//! incremental interpreter over a token event stream. This crate holds the
//! data model the rest of the workspace builds on:
//!
//! - [`Value`]: a tagged, immutable, reference-counted expression node
//! - [`Environment`] / [`SharedEnv`]: flat shared name-to-value bindings
//! - [`EvalError`] / [`EvalResult`]: the single error surface
//!
//! The language itself has no control flow, binding forms, quoting, or
//! macros; it is a flat apply-and-lookup evaluator, by design simple enough
//! for configuration and RPC-style message payloads.

pub mod env;
pub mod errors;
pub mod value;

pub use env::{Environment, MissingSymbol, SharedEnv};
pub use errors::{host_error, type_mismatch, unbound_symbol, EvalError, EvalResult};
pub use value::{FunctionValue, HostFn, ObjectValue, Value};
