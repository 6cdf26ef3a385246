//! Module for constructing lists as S-exps front to back without
//! building in reverse by hand.

use super::sexp::Sexp;


#[derive(Debug, Default)]
pub struct ConsList {
    elems: Vec<Sexp>,
}

impl ConsList {
    pub fn new() -> ConsList {
        ConsList { elems: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn append<T: Into<Sexp>>(&mut self, val: T) {
        self.elems.push(val.into());
    }

    /// Proper list of the appended elements; nil if there are none.
    pub fn release(self) -> Sexp {
        self.release_with_tail(Sexp::nil())
    }

    /// List of the appended elements whose final cdr is tail.
    pub fn release_with_tail(self, tail: Sexp) -> Sexp {
        self.elems
            .into_iter()
            .rev()
            .fold(tail, |cdr, car| Sexp::cons(car, cdr))
    }
}
