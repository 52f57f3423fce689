//! Incremental parser/interpreter over a token event stream.
//!
//! An external tokenizer drives the interpreter one [`TokenEvent`] at a
//! time. Nested list structure is tracked with an explicit stack of
//! in-progress argument lists; frame 0 is the top-level result collector.
//! Closing a list evaluates its head, applies the resulting function to the
//! evaluated arguments, and pushes the call's result onto the parent frame.
//!
//! The interpreter is synchronous and processes one stream to completion;
//! its stack is not safe for concurrent use. Once an application is in
//! flight it cannot be cancelled by the core.

use std::fmt;

use smallvec::{smallvec, SmallVec};

use notlisp_core::{EvalError, EvalResult, SharedEnv, Value};

use crate::convert::{default_atom_convert, AtomConverter};
use crate::eval::{apply, evaluate, evaluate_list};

/// One event from the external tokenizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenEvent<'a> {
    /// A list opened.
    ListBegin,
    /// A list closed.
    ListEnd,
    /// A bare atom, to be classified.
    Atom(&'a str),
    /// A string literal, already unquoted.
    Str(&'a str),
    /// A comment; never affects the stack or the output.
    Comment(&'a str),
}

/// Stack-based incremental interpreter.
///
/// One instance processes one token stream. Host functions must be
/// registered into the shared environment before interpretation begins;
/// top-level results are read back with [`Interpreter::results`] or
/// [`Interpreter::finish`] once the stream is exhausted.
pub struct Interpreter {
    env: SharedEnv,
    /// Frame 0 collects top-level results; deeper frames are open forms.
    stack: SmallVec<[Vec<Value>; 4]>,
    convert_atom: AtomConverter,
}

impl Interpreter {
    /// Create an interpreter over `env` with the default atom classifier.
    pub fn new(env: SharedEnv) -> Self {
        Interpreter::with_atom_converter(env, Box::new(default_atom_convert))
    }

    /// Create an interpreter with a host-supplied atom classifier.
    pub fn with_atom_converter(env: SharedEnv, convert_atom: AtomConverter) -> Self {
        Interpreter {
            env,
            stack: smallvec![Vec::new()],
            convert_atom,
        }
    }

    /// The environment this interpreter resolves symbols against.
    pub fn env(&self) -> &SharedEnv {
        &self.env
    }

    /// Number of currently open forms.
    pub fn depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }

    /// Dispatch one tokenizer event.
    pub fn on_token(&mut self, event: TokenEvent<'_>) -> EvalResult<()> {
        match event {
            TokenEvent::ListBegin => {
                self.on_list_begin();
                Ok(())
            }
            TokenEvent::ListEnd => self.on_list_end(),
            TokenEvent::Atom(text) => {
                self.on_atom(text);
                Ok(())
            }
            TokenEvent::Str(text) => {
                self.on_string(text);
                Ok(())
            }
            TokenEvent::Comment(text) => {
                self.on_comment(text);
                Ok(())
            }
        }
    }

    /// Feed a whole sequence of events, stopping at the first failure.
    pub fn feed<'a>(&mut self, events: impl IntoIterator<Item = TokenEvent<'a>>) -> EvalResult<()> {
        for event in events {
            self.on_token(event)?;
        }
        Ok(())
    }

    /// Open a new list: push an empty frame.
    pub fn on_list_begin(&mut self) {
        self.stack.push(Vec::new());
    }

    /// Append a classified atom to the innermost open frame.
    pub fn on_atom(&mut self, text: &str) {
        let value = (self.convert_atom)(text);
        self.push_value(value);
    }

    /// Append a string literal to the innermost open frame.
    pub fn on_string(&mut self, text: &str) {
        self.push_value(Value::string(text));
    }

    /// Comments are discarded.
    pub fn on_comment(&mut self, _text: &str) {}

    /// Close the innermost list: evaluate its head, apply it to the
    /// evaluated arguments, and append the result to the parent frame.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn on_list_end(&mut self) -> EvalResult<()> {
        if self.stack.len() < 2 {
            return Err(EvalError::UnexpectedListEnd);
        }
        let Some(form) = self.stack.last() else {
            return Err(EvalError::UnexpectedListEnd);
        };
        let Some(head) = form.first() else {
            return Err(EvalError::EmptyForm);
        };

        let function = match evaluate(&self.env, head)? {
            Value::Function(function) => function,
            Value::Nil => {
                return Err(EvalError::NullResult {
                    head: head.text().to_string(),
                })
            }
            other => {
                return Err(EvalError::NotCallable {
                    head: head.text().to_string(),
                    type_name: other.type_name(),
                })
            }
        };

        let args = evaluate_list(&self.env, &form[1..])?;
        let result = apply(&self.env, &function, &args)?;

        self.stack.pop();
        self.push_value(result);
        Ok(())
    }

    /// Top-level results produced so far, in source order.
    pub fn results(&self) -> &[Value] {
        self.stack.first().map_or(&[], Vec::as_slice)
    }

    /// Consume the interpreter after the stream is exhausted.
    ///
    /// Fails with `UnterminatedForm` if any list is still open.
    pub fn finish(mut self) -> EvalResult<Vec<Value>> {
        if self.stack.len() != 1 {
            return Err(EvalError::UnterminatedForm {
                depth: self.depth(),
            });
        }
        Ok(self.stack.pop().unwrap_or_default())
    }

    fn push_value(&mut self, value: Value) {
        // The stack always holds at least the result collector.
        if let Some(top) = self.stack.last_mut() {
            top.push(value);
        }
    }
}

impl fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpreter")
            .field("env", &self.env)
            .field("depth", &self.depth())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
