//! Lexical frames of bindings.

use log::trace;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::mem;
use std::rc::Rc;

use crate::lang_err::LangErr;
use crate::primitive::Symbol;
use crate::sexp::Sexp;


pub type Env = Rc<Environment>;

/// One frame of Symbol bindings, chained to the frame it was created in.
///
/// Frames are shared by every Procedure that closed over them, so bindings
/// are interior-mutable; a frame is only ever grown or updated, never
/// emptied.
pub struct Environment {
    parent: Option<Env>,
    bindings: RefCell<HashMap<Symbol, Sexp>>,
}

impl Environment {
    pub(crate) fn root() -> Env {
        Rc::new(Environment {
            parent: None,
            bindings: Default::default(),
        })
    }

    pub(crate) fn child(parent: &Env) -> Env {
        Rc::new(Environment {
            parent: Some(parent.clone()),
            bindings: Default::default(),
        })
    }

    pub fn parent(&self) -> Option<&Env> {
        self.parent.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Value of the innermost binding of symbol along the chain.
    pub fn lookup(&self, symbol: &Symbol) -> Result<Sexp, LangErr> {
        let mut frame = self;
        loop {
            if let Some(value) = frame.bindings.borrow().get(symbol) {
                return Ok(value.clone());
            }
            match &frame.parent {
                Some(parent) => frame = parent,
                None => return err!(UnboundSymbol(symbol.clone())),
            }
        }
    }

    /// Binds symbol in this frame only. Fails if already bound here.
    pub fn define(&self, symbol: Symbol, value: Sexp) -> Result<(), LangErr> {
        let mut bindings = self.bindings.borrow_mut();
        if bindings.contains_key(&symbol) {
            return err!(AlreadyBoundSymbol(symbol));
        }
        trace!("define: {} -> {}", symbol, value);
        bindings.insert(symbol, value);
        Ok(())
    }

    /// Replaces the innermost existing binding of symbol.
    pub fn assign(&self, symbol: &Symbol, value: Sexp) -> Result<(), LangErr> {
        let mut frame = self;
        while !frame.is_bound_here(symbol) {
            match &frame.parent {
                Some(parent) => frame = parent,
                None => return err!(UnboundSymbol(symbol.clone())),
            }
        }

        trace!("assign: {} -> {}", symbol, value);
        // Old value is freed only once the frame is no longer borrowed.
        let old = frame.bindings.borrow_mut().insert(symbol.clone(), value);
        release(old.into_iter().collect(), Vec::new());
        Ok(())
    }

    /// Binds symbol in this frame, replacing any existing binding.
    pub(crate) fn insert(&self, symbol: Symbol, value: Sexp) {
        self.bindings.borrow_mut().insert(symbol, value);
    }

    /// Drops every binding of this frame.
    ///
    /// Closures defined here capture the frame they are stored in; clearing
    /// is what lets such a frame be freed.
    pub(crate) fn clear(&self) {
        let bindings = mem::take(&mut *self.bindings.borrow_mut());
        release(bindings.into_iter().map(|(_, value)| value).collect(), Vec::new());
    }

    pub fn is_bound_here(&self, symbol: &Symbol) -> bool {
        self.bindings.borrow().contains_key(symbol)
    }

    /// Every Symbol visible from this frame, innermost first, deduplicated.
    pub fn symbols(&self) -> Vec<Symbol> {
        let mut res = Vec::new();
        let mut frame = Some(self);
        while let Some(curr) = frame {
            let mut names = curr.bindings.borrow().keys().cloned().collect::<Vec<_>>();
            names.sort();
            for name in names {
                if !res.contains(&name) {
                    res.push(name);
                }
            }
            frame = curr.parent.as_deref();
        }
        res
    }
}

// Frames hold closures that hold frames, to any depth; freeing them one
// nested drop per link would exhaust the stack.
impl Drop for Environment {
    fn drop(&mut self) {
        let values = self
            .bindings
            .get_mut()
            .drain()
            .map(|(_, value)| value)
            .collect();
        release(values, self.parent.take().into_iter().collect());
    }
}

/// Frees values and frames with a work-list, descending only into what is
/// uniquely owned. Everything still shared elsewhere just loses a reference.
fn release(mut values: Vec<Sexp>, mut frames: Vec<Env>) {
    loop {
        if let Some(frame) = frames.pop() {
            if let Ok(mut env) = Rc::try_unwrap(frame) {
                values.extend(env.bindings.get_mut().drain().map(|(_, value)| value));
                frames.extend(env.parent.take());
            }
            continue;
        }

        match values.pop() {
            Some(Sexp::Procedure(procedure)) => {
                if let Ok(procedure) = Rc::try_unwrap(procedure) {
                    let (_, body, env) = procedure.into_parts();
                    values.extend(body);
                    frames.push(env);
                }
            }
            Some(Sexp::Cons(cons)) => {
                if let Ok(cons) = Rc::try_unwrap(cons) {
                    let (car, cdr) = cons.consume();
                    values.push(car);
                    values.push(cdr);
                }
            }
            Some(_) => {}
            None => break,
        }
    }
}

// Bindings may hold Procedures closing over this frame.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[env {} bindings, root: {} @ {:p}]",
            self.bindings.borrow().len(),
            self.is_root(),
            self
        )
    }
}


#[cfg(test)]
#[path = "./environment_test.rs"]
mod environment_test;
