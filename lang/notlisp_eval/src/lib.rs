//! notlisp eval — evaluator and incremental interpreter.
//!
//! This crate turns the `notlisp_core` data model into a running language:
//!
//! - [`evaluate`] / [`evaluate_list`] / [`apply`]: kind-dispatched
//!   evaluation and function application over a shared environment
//! - [`Interpreter`]: stack-based incremental interpretation of a
//!   tokenizer's event stream ([`TokenEvent`])
//! - [`ArgList`]: sequential typed extraction of positional arguments
//!   inside host functions
//! - [`default_atom_convert`]: the pluggable bare-token classifier
//!
//! # Re-exports
//!
//! Value and environment types from `notlisp_core` are re-exported for
//! convenience: `Value`, `FunctionValue`, `ObjectValue`, `Environment`,
//! `SharedEnv`, `MissingSymbol`, `EvalError`, `EvalResult`.

pub mod args;
pub mod convert;
pub mod eval;
pub mod interp;

// Re-export the data model from notlisp_core
pub use notlisp_core::{
    host_error, type_mismatch, unbound_symbol, Environment, EvalError, EvalResult, FunctionValue,
    HostFn, MissingSymbol, ObjectValue, SharedEnv, Value,
};

pub use args::ArgList;
pub use convert::{default_atom_convert, AtomConverter};
pub use eval::{apply, evaluate, evaluate_list};
pub use interp::{Interpreter, TokenEvent};
