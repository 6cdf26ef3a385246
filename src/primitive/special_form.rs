//! Representation of special forms.

use std::fmt;

use super::builtin::Args;
use crate::env::Env;
use crate::interpreter::Interpreter;
use crate::lang_err::Ret;


/// Native form that receives its operands unevaluated, along with the
/// environment of the application, and decides what to evaluate itself.
#[derive(Clone, Copy)]
pub struct SpecialForm {
    name: &'static str,
    fun: fn(Args, &Env, &mut Interpreter) -> Ret,
}

impl SpecialForm {
    pub fn new(name: &'static str, fun: fn(Args, &Env, &mut Interpreter) -> Ret) -> SpecialForm {
        SpecialForm { name, fun }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn call(&self, operands: Args, env: &Env, interpreter: &mut Interpreter) -> Ret {
        (self.fun)(operands, env, interpreter)
    }
}

impl PartialEq for SpecialForm {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for SpecialForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[special-form {} @ {:p}]", self.name, &self.fun)
    }
}

impl fmt::Display for SpecialForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[special-form {}]", self.name)
    }
}

impl_try_from!(SpecialForm => SpecialForm);
