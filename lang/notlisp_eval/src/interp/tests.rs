use std::rc::Rc;

use super::*;
use notlisp_core::{host_error, Environment, MissingSymbol};

/// Environment with the host functions the scenarios need.
fn test_env() -> SharedEnv {
    let mut env = Environment::new();
    env.define_fn("concat", |_, args| {
        let mut out = String::new();
        for arg in args {
            out.push_str(arg.as_str()?);
        }
        Ok(Value::string(out))
    });
    env.define_fn("+", |_, args| {
        let mut total = 0_i64;
        for arg in args {
            total += arg.as_int()?;
        }
        Ok(Value::int(total))
    });
    env.define_fn("define", |env, args| match args {
        [Value::Keyword(name), value] => {
            env.define(Rc::clone(name), value.clone());
            Ok(value.clone())
        }
        _ => Err(host_error("define", "expected :name value")),
    });
    SharedEnv::new(env)
}

#[test]
fn concat_form_yields_the_joined_string() {
    let mut interp = Interpreter::new(test_env());
    let fed = interp.feed([
        TokenEvent::ListBegin,
        TokenEvent::Atom("concat"),
        TokenEvent::Str("a"),
        TokenEvent::Str("b"),
        TokenEvent::ListEnd,
    ]);
    assert_eq!(fed, Ok(()));
    assert_eq!(interp.finish(), Ok(vec![Value::string("ab")]));
}

#[test]
fn addition_form_uses_default_atom_classification() {
    let mut interp = Interpreter::new(test_env());
    let fed = interp.feed([
        TokenEvent::ListBegin,
        TokenEvent::Atom("+"),
        TokenEvent::Atom("1"),
        TokenEvent::Atom("2"),
        TokenEvent::ListEnd,
    ]);
    assert_eq!(fed, Ok(()));
    assert_eq!(interp.finish(), Ok(vec![Value::int(3)]));
}

#[test]
fn nested_forms_evaluate_inner_first() {
    // (+ 1 (+ 2 3)) — the inner sum must be applied before the outer one
    // sees its arguments.
    let mut interp = Interpreter::new(test_env());
    let fed = interp.feed([
        TokenEvent::ListBegin,
        TokenEvent::Atom("+"),
        TokenEvent::Atom("1"),
        TokenEvent::ListBegin,
        TokenEvent::Atom("+"),
        TokenEvent::Atom("2"),
        TokenEvent::Atom("3"),
        TokenEvent::ListEnd,
        TokenEvent::ListEnd,
    ]);
    assert_eq!(fed, Ok(()));
    assert_eq!(interp.finish(), Ok(vec![Value::int(6)]));
}

#[test]
fn define_roundtrip_through_the_environment() {
    // (define :x 5) followed by (+ x 1): the second form resolves the
    // symbol the first form wrote.
    let mut interp = Interpreter::new(test_env());
    let fed = interp.feed([
        TokenEvent::ListBegin,
        TokenEvent::Atom("define"),
        TokenEvent::Atom(":x"),
        TokenEvent::Atom("5"),
        TokenEvent::ListEnd,
        TokenEvent::ListBegin,
        TokenEvent::Atom("+"),
        TokenEvent::Atom("x"),
        TokenEvent::Atom("1"),
        TokenEvent::ListEnd,
    ]);
    assert_eq!(fed, Ok(()));
    assert_eq!(
        interp.finish(),
        Ok(vec![Value::int(5), Value::int(6)])
    );
}

#[test]
fn empty_form_fails() {
    let mut interp = Interpreter::new(test_env());
    interp.on_list_begin();
    assert_eq!(interp.on_list_end(), Err(EvalError::EmptyForm));
}

#[test]
fn list_end_without_begin_fails() {
    let mut interp = Interpreter::new(test_env());
    assert_eq!(interp.on_list_end(), Err(EvalError::UnexpectedListEnd));
}

#[test]
fn unclosed_form_fails_at_finish() {
    let mut interp = Interpreter::new(test_env());
    interp.on_list_begin();
    interp.on_atom("concat");
    assert_eq!(
        interp.finish(),
        Err(EvalError::UnterminatedForm { depth: 1 })
    );
}

#[test]
fn comments_affect_nothing() {
    let mut interp = Interpreter::new(test_env());
    interp.on_comment("; setup");
    let fed = interp.feed([
        TokenEvent::ListBegin,
        TokenEvent::Comment("; head next"),
        TokenEvent::Atom("+"),
        TokenEvent::Atom("1"),
        TokenEvent::Comment("; tail"),
        TokenEvent::Atom("2"),
        TokenEvent::ListEnd,
    ]);
    assert_eq!(fed, Ok(()));
    assert_eq!(interp.finish(), Ok(vec![Value::int(3)]));
}

#[test]
fn top_level_atoms_are_collected_unevaluated() {
    // Evaluation only happens when a list closes; bare top-level atoms
    // land in the result collector as-is.
    let mut interp = Interpreter::new(test_env());
    interp.on_atom("x");
    interp.on_string("hello");
    assert_eq!(
        interp.results(),
        &[Value::symbol("x"), Value::string("hello")]
    );
}

#[test]
fn head_that_is_not_callable_fails() {
    let mut interp = Interpreter::new(test_env());
    let outcome = interp.feed([
        TokenEvent::ListBegin,
        TokenEvent::Atom("1"),
        TokenEvent::Atom("2"),
        TokenEvent::ListEnd,
    ]);
    assert_eq!(
        outcome,
        Err(EvalError::NotCallable {
            head: String::new(),
            type_name: "integer",
        })
    );
}

#[test]
fn unbound_head_fails_under_strict_policy() {
    let mut interp = Interpreter::new(test_env());
    let outcome = interp.feed([
        TokenEvent::ListBegin,
        TokenEvent::Atom("no-such-fn"),
        TokenEvent::ListEnd,
    ]);
    assert_eq!(
        outcome,
        Err(EvalError::UnboundSymbol {
            name: "no-such-fn".into(),
        })
    );
}

#[test]
fn unbound_head_is_null_result_under_lenient_policy() {
    let env = SharedEnv::new(Environment::with_missing_symbol(MissingSymbol::Nil));
    let mut interp = Interpreter::new(env);
    let outcome = interp.feed([
        TokenEvent::ListBegin,
        TokenEvent::Atom("no-such-fn"),
        TokenEvent::ListEnd,
    ]);
    assert_eq!(
        outcome,
        Err(EvalError::NullResult {
            head: "no-such-fn".into(),
        })
    );
}

#[test]
fn host_failure_propagates_unchanged() {
    let env = test_env();
    env.borrow_mut()
        .define_fn("fail", |_, _| Err(host_error("fail", "on purpose")));
    let mut interp = Interpreter::new(env);
    let outcome = interp.feed([
        TokenEvent::ListBegin,
        TokenEvent::Atom("fail"),
        TokenEvent::ListEnd,
    ]);
    assert_eq!(outcome, Err(host_error("fail", "on purpose")));
}

#[test]
fn custom_atom_converter_replaces_classification() {
    // Every atom becomes a string, so "1" no longer parses as an integer.
    let mut interp = Interpreter::with_atom_converter(
        test_env(),
        Box::new(|text: &str| Value::string(text)),
    );
    interp.on_atom("1");
    assert_eq!(interp.results(), &[Value::string("1")]);
}

#[test]
fn depth_tracks_open_forms() {
    let mut interp = Interpreter::new(test_env());
    assert_eq!(interp.depth(), 0);
    interp.on_list_begin();
    interp.on_list_begin();
    assert_eq!(interp.depth(), 2);
}
