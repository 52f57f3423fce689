//! Atom classification.
//!
//! Bare (unquoted, non-list) tokens become values here. The default
//! classifier is a pure free function; hosts swap it out by handing the
//! interpreter their own [`AtomConverter`] at construction.

use notlisp_core::Value;

/// Pluggable classifier from raw atom text to a value.
pub type AtomConverter = Box<dyn Fn(&str) -> Value>;

/// Default atom classifier.
///
/// A leading `:` produces a keyword carrying the rest of the text. Otherwise
/// the full text is tried as an `i64`, then as an `f64`, and finally falls
/// back to a symbol. `":"` alone is the empty keyword; text neither numeric
/// nor keyword-tagged — including the empty string — is a symbol.
pub fn default_atom_convert(text: &str) -> Value {
    if let Some(name) = text.strip_prefix(':') {
        return Value::keyword(name);
    }
    if let Ok(int) = text.parse::<i64>() {
        return Value::int(int);
    }
    if let Ok(real) = text.parse::<f64>() {
        return Value::real(real);
    }
    Value::symbol(text)
}
