//! Module for representing S-exps.

use std::convert::Infallible;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use super::cons::Cons;
use super::cons_list::ConsList;
use crate::parser::{parse, ParseError};
use crate::primitive::prelude::*;
use crate::stack::ensure_sufficient_stack;


/// Every value of the language, both code and data.
#[derive(Clone)]
pub enum Sexp {
    Symbol(Symbol),
    Number(Number),
    Cons(Rc<Cons>),
    Procedure(Rc<Procedure>),
    BuiltIn(BuiltIn),
    SpecialForm(SpecialForm),
}

pub struct SexpIter<'a> {
    current: Option<&'a Sexp>,
}


impl Sexp {
    pub fn nil() -> Sexp {
        Sexp::Symbol(Symbol::nil())
    }

    pub fn t() -> Sexp {
        Sexp::Symbol(Symbol::t())
    }

    /// t or nil.
    pub fn from_bool(b: bool) -> Sexp {
        if b {
            Sexp::t()
        } else {
            Sexp::nil()
        }
    }

    pub fn cons(car: Sexp, cdr: Sexp) -> Sexp {
        Sexp::Cons(Rc::new(Cons::new(car, cdr)))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Sexp::Symbol(symbol) if symbol.is_nil())
    }

    /// Everything but nil is true, including 0.
    pub fn is_truthy(&self) -> bool {
        !self.is_nil()
    }

    pub fn is_cons(&self) -> bool {
        matches!(self, Sexp::Cons(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Sexp::Number(_))
    }

    /// Symbols and Numbers; callables are not atoms.
    pub fn is_atom(&self) -> bool {
        matches!(self, Sexp::Symbol(_) | Sexp::Number(_))
    }

    pub fn car(&self) -> Option<&Sexp> {
        match self {
            Sexp::Cons(cons) => Some(cons.car()),
            _ => None,
        }
    }

    pub fn cdr(&self) -> Option<&Sexp> {
        match self {
            Sexp::Cons(cons) => Some(cons.cdr()),
            _ => None,
        }
    }

    /// Identity for Cons cells and Procedures, value equality otherwise.
    pub fn eql(&self, other: &Sexp) -> bool {
        match (self, other) {
            (Sexp::Cons(a), Sexp::Cons(b)) => Rc::ptr_eq(a, b),
            (Sexp::Procedure(a), Sexp::Procedure(b)) => Rc::ptr_eq(a, b),
            _ => self == other,
        }
    }

    pub fn iter(&self) -> SexpIter {
        SexpIter {
            current: Some(self),
        }
    }

    /// Writes self in list notation, delegating atoms and parens to the
    /// provided writers so callers can decorate them.
    pub fn write_list<W, F, P>(
        &self,
        w: &mut W,
        depth: usize,
        write_atom: &mut F,
        write_paren: &mut P,
    ) -> fmt::Result
    where
        W: fmt::Write,
        F: FnMut(&mut W, &Sexp, usize) -> fmt::Result,
        P: FnMut(&mut W, &str, usize) -> fmt::Result,
    {
        if !self.is_cons() {
            return write_atom(w, self, depth);
        }

        write_paren(w, "(", depth)?;
        for (i, (val, proper)) in self.iter().enumerate() {
            if i > 0 {
                if proper {
                    write!(w, " ")?;
                } else {
                    write!(w, " . ")?;
                }
            }
            ensure_sufficient_stack(|| val.write_list(w, depth + 1, write_atom, write_paren))?;
        }
        write_paren(w, ")", depth)
    }
}


impl<'a> Iterator for SexpIter<'a> {
    // (Sexp, proper).
    //
    // proper is false only for the final cdr of an improper list (or for a
    // non-nil atom being iterated directly); it is necessarily the last
    // element.
    type Item = (&'a Sexp, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let sexp = self.current?;
        match sexp {
            Sexp::Cons(cons) => {
                self.current = Some(cons.cdr());
                Some((cons.car(), true))
            }
            _ if sexp.is_nil() => {
                self.current = None;
                None
            }
            _ => {
                self.current = None;
                Some((sexp, false))
            }
        }
    }
}

impl<'a> IntoIterator for &'a Sexp {
    type Item = (&'a Sexp, bool);
    type IntoIter = SexpIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Structural equality. Language-level eql is Sexp::eql.
impl PartialEq for Sexp {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Sexp::Symbol(a), Sexp::Symbol(b)) => a == b,
            (Sexp::Number(a), Sexp::Number(b)) => a == b,
            (Sexp::BuiltIn(a), Sexp::BuiltIn(b)) => a == b,
            (Sexp::SpecialForm(a), Sexp::SpecialForm(b)) => a == b,
            (Sexp::Procedure(a), Sexp::Procedure(b)) => Rc::ptr_eq(a, b),
            (Sexp::Cons(_), Sexp::Cons(_)) => {
                // Walk the spine iteratively; only nesting recurses.
                let (mut a, mut b) = (self, other);
                loop {
                    match (a, b) {
                        (Sexp::Cons(x), Sexp::Cons(y)) => {
                            if Rc::ptr_eq(x, y) {
                                return true;
                            }
                            if !ensure_sufficient_stack(|| x.car() == y.car()) {
                                return false;
                            }
                            a = x.cdr();
                            b = y.cdr();
                        }
                        _ => return a == b,
                    }
                }
            }
            _ => false,
        }
    }
}

impl Default for Sexp {
    fn default() -> Self {
        Sexp::nil()
    }
}

impl fmt::Display for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_list(
            f,
            0,
            &mut |writer, atom, _depth| match atom {
                Sexp::Symbol(symbol) => write!(writer, "{}", symbol),
                Sexp::Number(num) => write!(writer, "{}", num),
                Sexp::Procedure(procedure) => write!(writer, "{}", procedure),
                Sexp::BuiltIn(builtin) => write!(writer, "{}", builtin),
                Sexp::SpecialForm(form) => write!(writer, "{}", form),
                Sexp::Cons(_) => unreachable!(),
            },
            &mut |writer, paren, _depth| write!(writer, "{}", paren),
        )
    }
}

impl fmt::Debug for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self, f)
    }
}


/// Parses the first expression of s; empty input is nil.
impl FromStr for Sexp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse(s)?.into_iter().next().unwrap_or_default())
    }
}

impl<T: Into<Sexp>> From<Vec<T>> for Sexp {
    fn from(vec: Vec<T>) -> Self {
        let mut list = ConsList::new();
        for value in vec {
            list.append(value);
        }
        list.release()
    }
}

impl<'a, T: Into<Sexp> + Clone> From<&'a Vec<T>> for Sexp {
    fn from(vec: &'a Vec<T>) -> Self {
        let mut list = ConsList::new();
        for value in vec {
            list.append(value.clone());
        }
        list.release()
    }
}

// Lets Sexp itself be a target of break_args!.
impl From<Infallible> for Sexp {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

impl From<Cons> for Sexp {
    fn from(cons: Cons) -> Self {
        Sexp::Cons(Rc::new(cons))
    }
}

impl From<Procedure> for Sexp {
    fn from(procedure: Procedure) -> Self {
        Sexp::Procedure(Rc::new(procedure))
    }
}

// Impl From<T> over payload types.
macro_rules! sexp_from {
    ($from:ident, $($tail:tt)*) => {
        impl From<$from> for Sexp {
            fn from(elem: $from) -> Self {
                Sexp::$from(elem)
            }
        }
        sexp_from!($($tail)*);
    };
    () => {};
}

sexp_from!(Number, Symbol, BuiltIn, SpecialForm,);


#[cfg(test)]
#[path = "./sexp_test.rs"]
mod sexp_test;
