use std::mem;
use std::rc::Rc;

use super::sexp::Sexp;


/// Pair cell. Immutable once built; lists share structure through Rc.
#[derive(Clone, Debug, PartialEq)]
pub struct Cons {
    car: Sexp,
    cdr: Sexp,
}

impl Cons {
    pub fn new(car: Sexp, cdr: Sexp) -> Cons {
        Cons { car, cdr }
    }

    pub fn car(&self) -> &Sexp {
        &self.car
    }

    pub fn cdr(&self) -> &Sexp {
        &self.cdr
    }

    pub fn consume(mut self) -> (Sexp, Sexp) {
        (take_placeholder(&mut self.car), take_placeholder(&mut self.cdr))
    }
}

// Long or deeply nested lists would otherwise be freed one recursive drop
// per cell.
impl Drop for Cons {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        if self.car.is_cons() {
            pending.push(take_placeholder(&mut self.car));
        }
        let mut next = take_placeholder(&mut self.cdr);
        loop {
            while let Sexp::Cons(rc) = next {
                match Rc::try_unwrap(rc) {
                    Ok(mut cons) => {
                        if cons.car.is_cons() {
                            pending.push(take_placeholder(&mut cons.car));
                        }
                        next = take_placeholder(&mut cons.cdr);
                    }
                    Err(_) => break,
                }
            }
            match pending.pop() {
                Some(sexp) => next = sexp,
                None => break,
            }
        }
    }
}

// Empty Symbol; unlike nil, needs no allocation.
fn take_placeholder(sexp: &mut Sexp) -> Sexp {
    mem::replace(sexp, Sexp::Symbol(Default::default()))
}

impl_try_from!(Cons => Rc<Cons>);
