//! Runtime values for notlisp.
//!
//! [`Value`] is a tagged, immutable node in the expression tree. Kind and
//! payload are inseparable: there is no way to read an integer payload out
//! of a string value. Values are cheap to clone — heap payloads are behind
//! `Rc`, and expression data forms trees (not graphs), so reference
//! counting is sufficient.
//!
//! # Thread Safety
//!
//! Values use `Rc` internally and are single-threaded by design, matching
//! the synchronous evaluator. Hosts that share an environment across
//! threads must serialize access themselves.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::env::SharedEnv;
use crate::errors::{type_mismatch, EvalResult};

/// Host callable signature: invoked with the shared environment and the
/// already-evaluated argument values, returns one value.
pub type HostFn = Rc<dyn Fn(&SharedEnv, &[Value]) -> EvalResult>;

/// Runtime value in the notlisp interpreter.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Name to be resolved against the environment.
    Symbol(Rc<str>),
    /// Self-evaluating tagged atom, written `:name` in source.
    Keyword(Rc<str>),
    /// Self-evaluating text literal.
    Str(Rc<str>),
    /// Self-evaluating 64-bit signed integer literal.
    Int(i64),
    /// Self-evaluating double-precision literal.
    Real(f64),
    /// Self-evaluating absence marker.
    Nil,
    /// Opaque host-defined payload, identified by name.
    Object(ObjectValue),
    /// Named host-bound callable; self-evaluating, so functions are
    /// first-class values (though source text cannot construct one).
    Function(FunctionValue),
}

impl Value {
    /// Create a symbol value.
    pub fn symbol(name: impl Into<Rc<str>>) -> Self {
        Value::Symbol(name.into())
    }

    /// Create a keyword value (payload excludes the leading `:`).
    pub fn keyword(name: impl Into<Rc<str>>) -> Self {
        Value::Keyword(name.into())
    }

    /// Create a string value.
    pub fn string(text: impl Into<Rc<str>>) -> Self {
        Value::Str(text.into())
    }

    /// Create an integer value.
    pub fn int(value: i64) -> Self {
        Value::Int(value)
    }

    /// Create a real value.
    pub fn real(value: f64) -> Self {
        Value::Real(value)
    }

    /// Create an object value wrapping an arbitrary host payload.
    pub fn object<T: 'static>(name: impl Into<Rc<str>>, payload: T) -> Self {
        Value::Object(ObjectValue::new(name, payload))
    }

    /// Create a function value binding a name to host logic.
    pub fn function(
        name: impl Into<Rc<str>>,
        fun: impl Fn(&SharedEnv, &[Value]) -> EvalResult + 'static,
    ) -> Self {
        Value::Function(FunctionValue::new(name, fun))
    }

    /// Name of this value's kind, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Symbol(_) => "symbol",
            Value::Keyword(_) => "keyword",
            Value::Str(_) => "string",
            Value::Int(_) => "integer",
            Value::Real(_) => "real",
            Value::Nil => "nil",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
        }
    }

    /// Textual payload: the symbol/keyword/string text or the object or
    /// function name. Empty for numeric kinds and nil.
    pub fn text(&self) -> &str {
        match self {
            Value::Symbol(s) | Value::Keyword(s) | Value::Str(s) => s,
            Value::Object(o) => o.name(),
            Value::Function(f) => f.name(),
            Value::Int(_) | Value::Real(_) | Value::Nil => "",
        }
    }

    /// Returns `true` for the absence marker.
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// The string payload, or `TypeMismatch` for any other kind.
    pub fn as_str(&self) -> EvalResult<&str> {
        match self {
            Value::Str(s) => Ok(s),
            other => Err(type_mismatch("string", other.type_name())),
        }
    }

    /// The integer payload, or `TypeMismatch` for any other kind.
    pub fn as_int(&self) -> EvalResult<i64> {
        match self {
            Value::Int(i) => Ok(*i),
            other => Err(type_mismatch("integer", other.type_name())),
        }
    }

    /// The real payload, or `TypeMismatch` for any other kind.
    pub fn as_real(&self) -> EvalResult<f64> {
        match self {
            Value::Real(r) => Ok(*r),
            other => Err(type_mismatch("real", other.type_name())),
        }
    }
}

/// Canonical debug rendering: `<KindTag>:<payload>`.
///
/// Used for diagnostics, not as a parse round-trip format.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Symbol(s) => write!(f, "A:{s}"),
            Value::Keyword(s) => write!(f, "K:{s}"),
            Value::Str(s) => write!(f, "S:{s}"),
            Value::Int(i) => write!(f, "I:{i}"),
            Value::Real(r) => write!(f, "R:{r}"),
            Value::Nil => write!(f, "N:"),
            Value::Object(o) => write!(f, "O:{}", o.name()),
            Value::Function(fun) => write!(f, "F:{}", fun.name()),
        }
    }
}

/// Named callable bound to host logic.
///
/// Invoking the function is a distinct operation from evaluating it:
/// evaluation yields the function itself.
#[derive(Clone)]
pub struct FunctionValue {
    name: Rc<str>,
    fun: HostFn,
}

impl FunctionValue {
    /// Bind `name` to a host callable.
    pub fn new(
        name: impl Into<Rc<str>>,
        fun: impl Fn(&SharedEnv, &[Value]) -> EvalResult + 'static,
    ) -> Self {
        FunctionValue {
            name: name.into(),
            fun: Rc::new(fun),
        }
    }

    /// The name the function was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the host callable with already-evaluated arguments.
    ///
    /// The core imposes no timeout: once a call is in flight it is
    /// non-cancellable, so hosts supporting cancellation must observe
    /// their own token inside the callable.
    pub fn call(&self, env: &SharedEnv, args: &[Value]) -> EvalResult {
        (self.fun)(env, args)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Equality is callable identity; the name is carried for diagnostics only.
impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.fun, &other.fun)
    }
}

/// Opaque host-defined payload, identified by name.
///
/// The payload is `Rc<dyn Any>`; [`ObjectValue::downcast`] is the typed
/// capability check used when hosts extract their own types back out of
/// argument lists.
#[derive(Clone)]
pub struct ObjectValue {
    name: Rc<str>,
    payload: Rc<dyn Any>,
}

impl ObjectValue {
    /// Wrap a host payload under `name`.
    pub fn new<T: 'static>(name: impl Into<Rc<str>>, payload: T) -> Self {
        ObjectValue {
            name: name.into(),
            payload: Rc::new(payload),
        }
    }

    /// The object's identifying name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Typed access to the payload, or `None` if it is not a `T`.
    pub fn downcast<T: 'static>(&self) -> Option<Rc<T>> {
        Rc::clone(&self.payload).downcast::<T>().ok()
    }
}

impl fmt::Debug for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectValue")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Equality is payload identity.
impl PartialEq for ObjectValue {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.payload, &other.payload)
    }
}
