//! A small Lisp: S-exp reader, lexically scoped tree-walking evaluator, and
//! a kernel of builtins.
//!
//! Note that the library never installs a logger; clients should take care
//! of that themselves. See:
//!   https://github.com/rust-lang/log#in-executables.

#[macro_use]
pub mod primitive;
#[macro_use]
pub mod lang_err;
#[macro_use]
pub mod sexp;
#[macro_use]
mod builtins;

pub mod env;
pub mod error;
pub mod interpreter;
pub mod options;
pub mod parser;
pub mod printer;
pub mod token;

mod lisp_prelude;
mod special_forms;
mod stack;

pub use interpreter::Interpreter;
pub use parser::parse;

pub mod prelude {
    pub use crate::env::{Env, Environment};
    pub use crate::error::Error;
    pub use crate::interpreter::Interpreter;
    pub use crate::lang_err::{ErrKind, ExpectedCount, LangErr, Ret};
    pub use crate::options::Options;
    pub use crate::parser::{parse, ParseError, ParseErrorReason};
    pub use crate::primitive::prelude::*;
    pub use crate::sexp::{Cons, ConsList, Sexp};
    // Macros.
    pub use crate::list;
}
