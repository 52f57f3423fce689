//! Kind-dispatched evaluation and function application.
//!
//! Evaluation and application are distinct steps: `evaluate` turns an
//! expression into a value (symbols resolve, everything else yields
//! itself), and `apply` invokes an already-evaluated function on
//! already-evaluated arguments. The split is what lets a form's head be an
//! arbitrary expression that evaluates to a function, not just a literal
//! name.

use notlisp_core::{unbound_symbol, EvalResult, FunctionValue, MissingSymbol, SharedEnv, Value};

/// Evaluate one expression against the environment.
///
/// Self-evaluating kinds (string, keyword, integer, real, nil, object,
/// function) return themselves unchanged. A symbol resolves its text in the
/// environment; a miss follows the environment's configured
/// [`MissingSymbol`] policy.
pub fn evaluate(env: &SharedEnv, value: &Value) -> EvalResult {
    match value {
        Value::Symbol(name) => match env.lookup(name) {
            Some(bound) => Ok(bound),
            None => match env.borrow().missing_symbol() {
                MissingSymbol::Fail => Err(unbound_symbol(name.as_ref())),
                MissingSymbol::Nil => Ok(Value::Nil),
            },
        },
        other => Ok(other.clone()),
    }
}

/// Evaluate each element independently, preserving order, fail-fast.
pub fn evaluate_list(env: &SharedEnv, values: &[Value]) -> EvalResult<Vec<Value>> {
    values.iter().map(|value| evaluate(env, value)).collect()
}

/// Invoke a function on already-evaluated arguments.
///
/// A failure raised by the host callable propagates unchanged; it is first
/// reported to the diagnostic channel together with the identity of the
/// function being invoked.
pub fn apply(env: &SharedEnv, function: &FunctionValue, args: &[Value]) -> EvalResult {
    function.call(env, args).map_err(|err| {
        tracing::error!(function = function.name(), error = %err, "host function failed");
        err
    })
}
