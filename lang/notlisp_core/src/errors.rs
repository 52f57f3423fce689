//! Error types for notlisp evaluation.
//!
//! Every failure surfaced by the evaluator, the incremental interpreter,
//! and the argument accessor is an [`EvalError`]. Host callables return
//! `EvalResult` as well, so host failures travel through the interpreter
//! unchanged; the interpreter only reports them to the diagnostic channel
//! before propagating.

use thiserror::Error;

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult<T = Value> = Result<T, EvalError>;

/// Evaluation error.
///
/// No variant is ever downgraded to a default value. Propagation aborts the
/// current `on_list_end`; whether to abandon the session or resynchronize is
/// the host's decision.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalError {
    /// A closed list had no elements to apply.
    #[error("empty form: nothing to apply")]
    EmptyForm,

    /// A symbol was looked up that the environment does not bind.
    ///
    /// Only raised under [`MissingSymbol::Fail`](crate::env::MissingSymbol),
    /// the default lookup-miss policy.
    #[error("unbound symbol `{name}`")]
    UnboundSymbol { name: String },

    /// Evaluating the head of a form produced the absence marker.
    #[error("head of form `{head}` evaluated to nil, expected a function")]
    NullResult { head: String },

    /// The evaluated head of a form is not a function.
    #[error("`{head}` is not callable (got {type_name})")]
    NotCallable {
        head: String,
        type_name: &'static str,
    },

    /// The token stream ended while forms were still open.
    #[error("token stream ended with {depth} unterminated form(s)")]
    UnterminatedForm { depth: usize },

    /// A list end arrived with no matching list begin.
    #[error("list end without a matching list begin")]
    UnexpectedListEnd,

    /// The argument cursor was exhausted where a required argument was
    /// expected.
    #[error("required argument {index} is absent")]
    MissingRequiredArgument { index: usize },

    /// A tail argument did not have the host-required type.
    #[error("argument {index}: expected {expected}, got {got}")]
    InvalidArgumentType {
        index: usize,
        expected: &'static str,
        got: &'static str,
    },

    /// A typed conversion helper was invoked on the wrong value kind.
    #[error("expected {expected}, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },

    /// Free-form failure raised by a host callable.
    #[error("{function}: {message}")]
    Host { function: String, message: String },
}

// Factory functions keep call sites terse and the field names in one place.

/// An unbound symbol was referenced.
pub fn unbound_symbol(name: impl Into<String>) -> EvalError {
    EvalError::UnboundSymbol { name: name.into() }
}

/// A conversion helper met the wrong value kind.
pub fn type_mismatch(expected: &'static str, got: &'static str) -> EvalError {
    EvalError::TypeMismatch { expected, got }
}

/// A host callable failed with a free-form message.
pub fn host_error(function: impl Into<String>, message: impl Into<String>) -> EvalError {
    EvalError::Host {
        function: function.into(),
        message: message.into(),
    }
}
