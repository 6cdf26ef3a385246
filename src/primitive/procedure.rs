use std::fmt;
use std::rc::Rc;

use derive_getters::Getters;

use super::Symbol;
use crate::env::Env;
use crate::sexp::Sexp;


/// User abstraction created by lambda.
///
/// Holds the environment it was created in rather than the one it is called
/// from; this is what makes scoping lexical.
#[derive(Getters)]
pub struct Procedure {
    params: Vec<Symbol>,
    body: Vec<Sexp>,
    env: Env,
}

impl Procedure {
    pub fn new(params: Vec<Symbol>, body: Vec<Sexp>, env: Env) -> Procedure {
        Procedure { params, body, env }
    }

    pub(crate) fn into_parts(self) -> (Vec<Symbol>, Vec<Sexp>, Env) {
        (self.params, self.body, self.env)
    }
}


// Env may (indirectly) hold this Procedure, so neither impl descends into it.
impl fmt::Debug for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[lambda {:?} @ {:p}]", self.params, self)
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[lambda (")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", param)?;
        }
        write!(f, ")]")
    }
}

impl_try_from!(Procedure => Rc<Procedure>);
