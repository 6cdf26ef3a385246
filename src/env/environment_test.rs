use super::*;

use std::rc::Rc;

use crate::lang_err::ErrKind;
use crate::primitive::{Procedure, ToSymbol};


#[test]
fn shadowing() {
    let root = Environment::root();
    root.define("a".to_symbol(), 1.into()).unwrap();
    let child = Environment::child(&root);
    child.define("a".to_symbol(), 2.into()).unwrap();

    assert_eq!(child.lookup(&"a".to_symbol()).unwrap(), Sexp::from(2));
    assert_eq!(root.lookup(&"a".to_symbol()).unwrap(), Sexp::from(1));
    assert!(!child.is_root());
    assert!(child.parent().unwrap().is_root());
}

#[test]
fn define_twice() {
    let root = Environment::root();
    root.define("a".to_symbol(), 1.into()).unwrap();
    let err = root.define("a".to_symbol(), 2.into()).unwrap_err();
    assert!(matches!(err.kind(), ErrKind::AlreadyBoundSymbol(s) if s.as_str() == "a"));
    assert_eq!(root.lookup(&"a".to_symbol()).unwrap(), Sexp::from(1));
}

#[test]
fn assign_nearest() {
    let root = Environment::root();
    root.define("a".to_symbol(), 1.into()).unwrap();
    let child = Environment::child(&root);
    child.assign(&"a".to_symbol(), 5.into()).unwrap();

    assert!(!child.is_bound_here(&"a".to_symbol()));
    assert_eq!(root.lookup(&"a".to_symbol()).unwrap(), Sexp::from(5));
}

#[test]
fn unbound() {
    let root = Environment::root();
    let child = Environment::child(&root);
    assert!(matches!(
        child.lookup(&"x".to_symbol()).unwrap_err().kind(),
        ErrKind::UnboundSymbol(_)
    ));
    assert!(matches!(
        child.assign(&"x".to_symbol(), 1.into()).unwrap_err().kind(),
        ErrKind::UnboundSymbol(_)
    ));
}

#[test]
fn visible_symbols() {
    let root = Environment::root();
    root.define("b".to_symbol(), 1.into()).unwrap();
    root.define("a".to_symbol(), 1.into()).unwrap();
    let child = Environment::child(&root);
    child.define("c".to_symbol(), 1.into()).unwrap();
    child.define("a".to_symbol(), 1.into()).unwrap();

    let names: Vec<String> = child.symbols().iter().map(|s| s.to_string()).collect();
    assert_eq!(names, vec!["a", "c", "b"]);
}

// Each closure's frame holds the previous closure.
fn closure_chain(root: &Env, links: usize, in_list: bool) -> Sexp {
    let mut prev = Sexp::nil();
    for _ in 0..links {
        let frame = Environment::child(root);
        let held = if in_list {
            Sexp::cons(prev, Sexp::nil())
        } else {
            prev
        };
        frame.define("p".to_symbol(), held).unwrap();
        prev = Procedure::new(vec![], vec!["p".to_symbol().into()], frame).into();
    }
    prev
}

#[test]
fn drop_closure_chain() {
    let root = Environment::root();
    root.define("g".to_symbol(), closure_chain(&root, 100_000, false))
        .unwrap();
    root.assign(&"g".to_symbol(), Sexp::nil()).unwrap();
    assert_eq!(root.lookup(&"g".to_symbol()).unwrap(), Sexp::nil());
    assert_eq!(Rc::strong_count(&root), 1);
}

#[test]
fn drop_closure_chain_through_lists() {
    let root = Environment::root();
    let chain = closure_chain(&root, 100_000, true);
    drop(chain);
    assert_eq!(Rc::strong_count(&root), 1);
}

#[test]
fn clear_frees_self_capturing_frame() {
    let root = Environment::root();
    let f = Procedure::new(vec![], vec![], root.clone());
    root.define("f".to_symbol(), f.into()).unwrap();
    let weak = Rc::downgrade(&root);
    assert_eq!(Rc::strong_count(&root), 2);

    root.clear();
    assert!(!root.is_bound_here(&"f".to_symbol()));
    drop(root);
    assert!(weak.upgrade().is_none());
}
