//! Sequential typed access to evaluated argument lists.
//!
//! Host functions use [`ArgList`] to pull positional arguments out of the
//! evaluated sequence they were applied to: required arguments first, then
//! optionals and a variable-length tail. The cursor is fail-fast, advances
//! one value at a time, and never backtracks.

use std::any::type_name;
use std::rc::Rc;

use notlisp_core::{EvalError, EvalResult, Value};

/// Cursor over an evaluated argument sequence.
pub struct ArgList<'a> {
    args: &'a [Value],
    index: usize,
}

impl<'a> ArgList<'a> {
    /// Start a cursor at the first argument.
    pub fn new(args: &'a [Value]) -> Self {
        ArgList { args, index: 0 }
    }

    /// Number of arguments not yet consumed.
    pub fn remaining(&self) -> usize {
        self.args.len().saturating_sub(self.index)
    }

    /// Extract the next argument through a fallible converter.
    ///
    /// Fails with `MissingRequiredArgument` when the cursor is exhausted;
    /// the converter's own failure (typically `TypeMismatch`) propagates
    /// unchanged. Advances past the value either way.
    pub fn required<T>(&mut self, convert: impl FnOnce(&Value) -> EvalResult<T>) -> EvalResult<T> {
        let Some(value) = self.args.get(self.index) else {
            return Err(EvalError::MissingRequiredArgument { index: self.index });
        };
        self.index += 1;
        convert(value)
    }

    /// Offer the next argument to a consumer.
    ///
    /// Returns `Ok(false)` without side effect when exhausted. Otherwise
    /// advances and returns the consumer's verdict: `true` to keep
    /// consuming, `false` to stop.
    pub fn optional(
        &mut self,
        consume: impl FnOnce(&Value) -> EvalResult<bool>,
    ) -> EvalResult<bool> {
        match self.args.get(self.index) {
            Some(value) => {
                self.index += 1;
                consume(value)
            }
            None => Ok(false),
        }
    }

    /// Drain the remaining arguments through a consumer until it declines
    /// or the cursor is exhausted.
    pub fn rest(&mut self, mut consume: impl FnMut(&Value) -> EvalResult<bool>) -> EvalResult<()> {
        while self.optional(&mut consume)? {}
        Ok(())
    }

    /// Drain the remaining arguments, requiring each to be an object whose
    /// payload is a `T`.
    ///
    /// Fails with `InvalidArgumentType` on the first value that is not such
    /// an object, short-circuiting the drain.
    pub fn rest_casted<T: 'static>(&mut self, mut sink: impl FnMut(Rc<T>)) -> EvalResult<()> {
        while let Some(value) = self.args.get(self.index) {
            let index = self.index;
            self.index += 1;
            let payload = match value {
                Value::Object(obj) => obj.downcast::<T>(),
                _ => None,
            };
            match payload {
                Some(payload) => sink(payload),
                None => {
                    return Err(EvalError::InvalidArgumentType {
                        index,
                        expected: type_name::<T>(),
                        got: value.type_name(),
                    })
                }
            }
        }
        Ok(())
    }

    /// Drain the remaining arguments through a fallible converter into a
    /// vector, fail-fast.
    pub fn rest_collected<T>(
        &mut self,
        convert: impl Fn(&Value) -> EvalResult<T>,
    ) -> EvalResult<Vec<T>> {
        let mut out = Vec::with_capacity(self.remaining());
        while let Some(value) = self.args.get(self.index) {
            self.index += 1;
            out.push(convert(value)?);
        }
        Ok(out)
    }
}
