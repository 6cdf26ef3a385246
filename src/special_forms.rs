//! Forms that receive their operands unevaluated.

use lazy_static::lazy_static;
use log::trace;
use std::borrow::Cow;
use std::collections::HashMap;
use std::convert::TryFrom;

use crate::env::{Env, Environment};
use crate::interpreter::{to_args, Interpreter};
use crate::lang_err::{ExpectedCount, Ret};
use crate::primitive::{Args, Procedure, SpecialForm, Symbol};
use crate::sexp::Sexp;


lazy_static! {
    pub static ref SPECIAL_FORMS: HashMap<&'static str, SpecialForm> = builtins![
        SpecialForm;
        "quote": quote,
        "if": if_form,
        "define": define,
        "assign": assign,
        "lambda": lambda,
        "let": let_form,
        "letrec": letrec,
    ];
}


fn quote(operands: Args, _env: &Env, _interpreter: &mut Interpreter) -> Ret {
    let (quoted,) = break_args!(operands => (Sexp))?;
    Ok(quoted)
}

fn if_form(operands: Args, env: &Env, interpreter: &mut Interpreter) -> Ret {
    let (pred, then, otherwise) = break_args!(operands => (Sexp, Sexp, Sexp))?;
    if interpreter.eval(&pred, env)?.is_truthy() {
        interpreter.eval(&then, env)
    } else {
        interpreter.eval(&otherwise, env)
    }
}

/// Binds in the root no matter where it appears.
fn define(operands: Args, env: &Env, interpreter: &mut Interpreter) -> Ret {
    let (symbol, value) = break_args!(operands => (Symbol, Sexp))?;
    let value = interpreter.eval(&value, env)?;
    interpreter.root().define(symbol.clone(), value)?;
    Ok(symbol.into())
}

fn assign(operands: Args, env: &Env, interpreter: &mut Interpreter) -> Ret {
    let (symbol, value) = break_args!(operands => (Symbol, Sexp))?;
    let value = interpreter.eval(&value, env)?;
    env.assign(&symbol, value)?;
    Ok(symbol.into())
}

fn lambda(operands: Args, env: &Env, _interpreter: &mut Interpreter) -> Ret {
    let mut iter = operands.into_iter();
    let param_list = match iter.next() {
        Some(params) => params,
        None => {
            return err!(WrongArgumentCount {
                given: 0,
                expected: ExpectedCount::AtLeast(1),
            })
        }
    };

    let mut params = Vec::<Symbol>::new();
    for param in to_args(&param_list)? {
        let symbol = match Symbol::try_from(param) {
            Ok(symbol) => symbol,
            Err(given) => {
                return err!(InvalidArgument {
                    given,
                    expected: Cow::Borrowed("Symbol as parameter"),
                })
            }
        };
        if params.contains(&symbol) {
            return err!(InvalidArgument {
                given: symbol.into(),
                expected: Cow::Borrowed("unique name within parameter list"),
            });
        }
        params.push(symbol);
    }

    Ok(Procedure::new(params, iter.collect(), env.clone()).into())
}

fn let_form(operands: Args, env: &Env, interpreter: &mut Interpreter) -> Ret {
    let_impl(operands, env, interpreter, false)
}

fn letrec(operands: Args, env: &Env, interpreter: &mut Interpreter) -> Ret {
    let_impl(operands, env, interpreter, true)
}

// Right-hand sides see the new frame only when recursive.
fn let_impl(operands: Args, env: &Env, interpreter: &mut Interpreter, recursive: bool) -> Ret {
    let given = operands.len();
    let mut iter = operands.into_iter();
    let bindings = match iter.next() {
        Some(bindings) => bindings,
        None => {
            return err!(WrongArgumentCount {
                given: 0,
                expected: ExpectedCount::AtLeast(1),
            })
        }
    };
    let body = iter.collect::<Vec<_>>();
    if body.is_empty() && !bindings.is_nil() {
        return err!(WrongArgumentCount {
            given,
            expected: ExpectedCount::AtLeast(2),
        });
    }

    let frame = Environment::child(env);
    for binding in to_args(&bindings)? {
        let (symbol, expr) = break_args!(to_args(&binding)? => (Symbol, Sexp))?;
        let value = if recursive {
            interpreter.eval(&expr, &frame)?
        } else {
            interpreter.eval(&expr, env)?
        };
        trace!("let binding: {} -> {}", symbol, value);
        frame.define(symbol, value)?;
    }
    interpreter.eval_body(&body, &frame)
}


#[cfg(test)]
#[path = "./special_forms_test.rs"]
mod special_forms_test;
