//! Representation of the non-Cons values of the language.

#[macro_use]
mod try_from_helper;

pub mod builtin;
pub mod number;
pub mod procedure;
pub mod special_form;
pub mod symbol;

pub use self::builtin::{Args, BuiltIn};
pub use self::number::Number;
pub use self::procedure::Procedure;
pub use self::special_form::SpecialForm;
pub use self::symbol::{Symbol, ToSymbol};


pub mod prelude {
    pub use super::{Args, BuiltIn, Number, Procedure, SpecialForm, Symbol, ToSymbol};
}
