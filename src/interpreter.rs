//! Tree-walking evaluation of S-exps against lexical environments.

use log::{debug, info, trace};
use std::io::{self, BufRead, Write};

use crate::builtins::BUILTINS;
use crate::env::{Env, Environment};
use crate::error::Error;
use crate::lang_err::{ExpectedCount, LangErr, Ret};
use crate::options::Options;
use crate::parser::{parse, ParseError};
use crate::lisp_prelude::PRELUDE;
use crate::primitive::{Args, Symbol};
use crate::sexp::Sexp;
use crate::special_forms::SPECIAL_FORMS;
use crate::stack::ensure_sufficient_stack;


/// Owns a root environment and the IO that read/print builtins use.
pub struct Interpreter {
    root: Env,
    options: Options,
    depth: usize,

    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl Interpreter {
    /// Interpreter with only the kernel bound in its root.
    pub fn new() -> Self {
        Self::kernel(Options {
            load_prelude: false,
            ..Default::default()
        })
    }

    /// Interpreter with the kernel and prelude bound in its root.
    pub fn with_prelude() -> Result<Self, Error> {
        Self::from_options(Options::default())
    }

    pub fn from_options(options: Options) -> Result<Self, Error> {
        let load_prelude = options.load_prelude;
        let mut interpreter = Self::kernel(options);
        if load_prelude {
            interpreter.load_prelude()?;
        }
        Ok(interpreter)
    }

    fn kernel(options: Options) -> Self {
        let root = Environment::root();
        for symbol in &[Symbol::nil(), Symbol::t()] {
            root.insert(symbol.clone(), symbol.clone().into());
        }
        for (name, form) in SPECIAL_FORMS.iter() {
            root.insert(Symbol::new(name), (*form).into());
        }
        for (name, builtin) in BUILTINS.iter() {
            root.insert(Symbol::new(name), (*builtin).into());
        }
        info!(
            "Kernel ready: {} special forms, {} builtins, max depth {}",
            SPECIAL_FORMS.len(),
            BUILTINS.len(),
            options.max_depth
        );

        Interpreter {
            root,
            options,
            depth: 0,

            input: Box::new(io::BufReader::new(io::stdin())),
            output: Box::new(io::stdout()),
        }
    }

    fn load_prelude(&mut self) -> Result<(), Error> {
        let count = self.run(PRELUDE)?.len();
        info!("Loaded prelude: {} definitions", count);
        Ok(())
    }

    pub fn with_io(mut self, input: Box<dyn BufRead>, output: Box<dyn Write>) -> Self {
        self.input = input;
        self.output = output;
        self
    }

    pub fn set_input(&mut self, input: Box<dyn BufRead>) {
        self.input = input;
    }

    pub fn set_output(&mut self, output: Box<dyn Write>) {
        self.output = output;
    }

    pub fn root(&self) -> &Env {
        &self.root
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn parse<S: AsRef<str>>(&self, text: S) -> Result<Vec<Sexp>, ParseError> {
        parse(text)
    }

    /// Evaluates every top-level expression of text in the root; the first
    /// failure aborts the rest.
    pub fn run<S: AsRef<str>>(&mut self, text: S) -> Result<Vec<Sexp>, Error> {
        let mut results = Vec::new();
        for sexp in parse(text)? {
            results.push(self.eval_root(&sexp)?);
        }
        Ok(results)
    }

    /// Evaluates every top-level expression of text in the root, each
    /// independently of the others' failures.
    pub fn run_each<S: AsRef<str>>(&mut self, text: S) -> Result<Vec<Ret>, ParseError> {
        let sexps = parse(text)?;
        Ok(sexps.iter().map(|sexp| self.eval_root(sexp)).collect())
    }

    pub fn eval_root(&mut self, sexp: &Sexp) -> Ret {
        let root = self.root.clone();
        self.eval(sexp, &root)
    }

    pub fn eval(&mut self, sexp: &Sexp, env: &Env) -> Ret {
        match sexp {
            Sexp::Symbol(symbol) => env.lookup(symbol),
            Sexp::Cons(_) => {
                if self.depth >= self.options.max_depth {
                    return err!(StackExhausted { depth: self.depth });
                }
                self.depth += 1;
                let res = ensure_sufficient_stack(|| self.eval_form(sexp, env));
                self.depth -= 1;
                res.map_err(|mut err| {
                    err.push_frame(sexp);
                    err
                })
            }
            _ => Ok(sexp.clone()),
        }
    }

    fn eval_form(&mut self, form: &Sexp, env: &Env) -> Ret {
        debug!("Evaluating: {}", form);
        let (car, operands) = match form {
            Sexp::Cons(cons) => (cons.car(), cons.cdr()),
            _ => return Ok(form.clone()),
        };

        let operator = self.eval(car, env)?;
        match &operator {
            Sexp::SpecialForm(special) => special.call(to_args(operands)?, env, self),
            Sexp::BuiltIn(_) | Sexp::Procedure(_) => {
                let args = self.evlis(operands, env)?;
                self.apply(&operator, args)
            }
            _ => err!(NotCallable(operator.clone())),
        }
    }

    /// Evaluates each element of a list, left to right.
    fn evlis(&mut self, operands: &Sexp, env: &Env) -> Result<Args, LangErr> {
        let mut args = Vec::new();
        for (operand, proper) in operands {
            if !proper {
                return err!(InvalidSexp(operands.clone()));
            }
            args.push(self.eval(operand, env)?);
        }
        Ok(args)
    }

    /// Applies a BuiltIn or Procedure to already-evaluated arguments.
    pub fn apply(&mut self, operator: &Sexp, args: Args) -> Ret {
        match operator {
            Sexp::BuiltIn(builtin) => builtin.call(args, self),
            Sexp::Procedure(procedure) => {
                let params = procedure.params();
                if args.len() != params.len() {
                    return err!(WrongArgumentCount {
                        given: args.len(),
                        expected: ExpectedCount::Exactly(params.len()),
                    });
                }

                let frame = Environment::child(procedure.env());
                for (param, arg) in params.iter().zip(args) {
                    trace!("bind param: {} -> {}", param, arg);
                    frame.define(param.clone(), arg)?;
                }
                self.eval_body(procedure.body(), &frame)
            }
            _ => err!(NotCallable(operator.clone())),
        }
    }

    /// Evaluates body in order, returning the last value; nil if empty.
    pub(crate) fn eval_body(&mut self, body: &[Sexp], env: &Env) -> Ret {
        let mut result = Sexp::nil();
        for sexp in body {
            result = self.eval(sexp, env)?;
        }
        Ok(result)
    }

    pub(crate) fn input(&mut self) -> &mut dyn BufRead {
        &mut *self.input
    }

    pub(crate) fn output(&mut self) -> &mut dyn Write {
        &mut *self.output
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

// Procedures defined at top level close over the root they are bound in.
impl Drop for Interpreter {
    fn drop(&mut self) {
        self.root.clear();
    }
}


/// Elements of a proper list, unevaluated.
pub(crate) fn to_args(list: &Sexp) -> Result<Args, LangErr> {
    let mut args = Vec::new();
    for (elem, proper) in list {
        if !proper {
            return err!(InvalidSexp(list.clone()));
        }
        args.push(elem.clone());
    }
    Ok(args)
}


#[cfg(test)]
#[path = "./interpreter_test.rs"]
mod interpreter_test;
