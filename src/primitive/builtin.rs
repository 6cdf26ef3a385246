//! Representation of builtin methods.

use std::fmt;

use crate::interpreter::Interpreter;
use crate::lang_err::Ret;
use crate::sexp::Sexp;


pub type Args = Vec<Sexp>;

/// Native function whose arguments are evaluated before the call.
#[derive(Clone, Copy)]
pub struct BuiltIn {
    name: &'static str,
    fun: fn(Args, &mut Interpreter) -> Ret,
}

impl BuiltIn {
    pub fn new(name: &'static str, fun: fn(Args, &mut Interpreter) -> Ret) -> BuiltIn {
        BuiltIn { name, fun }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn call(&self, args: Args, interpreter: &mut Interpreter) -> Ret {
        (self.fun)(args, interpreter)
    }
}

impl PartialEq for BuiltIn {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[builtin {} @ {:p}]", self.name, &self.fun)
    }
}

impl fmt::Display for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[builtin {}]", self.name)
    }
}

impl_try_from!(BuiltIn => BuiltIn);
