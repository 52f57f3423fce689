//! Environment: flat name-to-value bindings shared across a session.
//!
//! One environment serves a whole interpretation session. There is no scope
//! chain — hosts wanting lexical scoping must layer it themselves. The
//! environment is shared by reference through [`SharedEnv`]; a definition
//! made by one holder is immediately visible to all others.

// Rc is the intentional implementation detail of SharedEnv
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::errors::EvalResult;
use crate::value::{FunctionValue, Value};

/// Policy for symbol lookups that find no binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MissingSymbol {
    /// Fail with `UnboundSymbol`. The default.
    #[default]
    Fail,
    /// Yield the absence marker, reproducing the lenient behavior of
    /// legacy hosts that treated unknown symbols as empty.
    Nil,
}

/// Flat mutable mapping from name to [`Value`].
///
/// Not thread-safe: concurrent sessions over one environment must be
/// serialized by the host.
#[derive(Default)]
pub struct Environment {
    bindings: FxHashMap<Rc<str>, Value>,
    missing_symbol: MissingSymbol,
}

impl Environment {
    /// Create an empty environment with the strict lookup-miss policy.
    pub fn new() -> Self {
        Environment::default()
    }

    /// Create an empty environment with an explicit lookup-miss policy.
    pub fn with_missing_symbol(missing_symbol: MissingSymbol) -> Self {
        Environment {
            bindings: FxHashMap::default(),
            missing_symbol,
        }
    }

    /// The configured lookup-miss policy.
    pub fn missing_symbol(&self) -> MissingSymbol {
        self.missing_symbol
    }

    /// Insert or overwrite a binding.
    pub fn define(&mut self, name: impl Into<Rc<str>>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Bind `name` to a host function of the same name.
    pub fn define_fn(
        &mut self,
        name: &str,
        fun: impl Fn(&SharedEnv, &[Value]) -> EvalResult + 'static,
    ) {
        let name: Rc<str> = name.into();
        self.bindings.insert(
            Rc::clone(&name),
            Value::Function(FunctionValue::new(name, fun)),
        );
    }

    /// Bind `name` to a string constant.
    pub fn define_const(&mut self, name: impl Into<Rc<str>>, text: impl Into<Rc<str>>) {
        self.bindings.insert(name.into(), Value::string(text));
    }

    /// Look up a binding by name.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).cloned()
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if no names are bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("bindings", &self.bindings.len())
            .field("missing_symbol", &self.missing_symbol)
            .finish()
    }
}

/// A single-threaded shared handle to an [`Environment`].
///
/// Wraps `Rc<RefCell<Environment>>` so that the interpreter, the host, and
/// host callables all observe the same bindings. Allocation goes through
/// the [`SharedEnv::new`] factory.
///
/// # Thread Safety
///
/// `SharedEnv` is NOT thread-safe. It uses `Rc` internally, which is
/// cheaper than `Arc` but cannot cross threads. The evaluator is
/// synchronous and single-threaded, so this is intentional.
#[repr(transparent)]
pub struct SharedEnv(Rc<RefCell<Environment>>);

impl SharedEnv {
    /// Create a new shared handle owning `env`.
    pub fn new(env: Environment) -> Self {
        SharedEnv(Rc::new(RefCell::new(env)))
    }

    /// Borrow the environment immutably.
    pub fn borrow(&self) -> Ref<'_, Environment> {
        self.0.borrow()
    }

    /// Borrow the environment mutably.
    pub fn borrow_mut(&self) -> RefMut<'_, Environment> {
        self.0.borrow_mut()
    }

    /// Insert or overwrite a binding.
    pub fn define(&self, name: impl Into<Rc<str>>, value: Value) {
        self.0.borrow_mut().define(name, value);
    }

    /// Look up a binding by name.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.0.borrow().lookup(name)
    }
}

impl Clone for SharedEnv {
    fn clone(&self) -> Self {
        SharedEnv(Rc::clone(&self.0))
    }
}

impl fmt::Debug for SharedEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedEnv").field(&self.0).finish()
    }
}

impl Default for SharedEnv {
    fn default() -> Self {
        SharedEnv::new(Environment::new())
    }
}
