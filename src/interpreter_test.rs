use super::*;

use std::rc::Rc;

use crate::lang_err::ErrKind;
use crate::primitive::ToSymbol;


fn last(interpreter: &mut Interpreter, text: &str) -> Ret {
    interpreter
        .run_each(text)
        .unwrap()
        .pop()
        .unwrap_or_else(|| Ok(Sexp::nil()))
}

fn eval_str(text: &str) -> Ret {
    last(&mut Interpreter::new(), text)
}

#[test]
fn self_evaluating() {
    assert_eq!(eval_str("12").unwrap(), Sexp::from(12));
    assert_eq!(eval_str("nil").unwrap(), Sexp::nil());
    assert_eq!(eval_str("t").unwrap(), Sexp::t());
    assert!(matches!(eval_str("+").unwrap(), Sexp::BuiltIn(_)));
    assert!(matches!(eval_str("quote").unwrap(), Sexp::SpecialForm(_)));
}

#[test]
fn unbound_symbol() {
    let err = eval_str("qux").unwrap_err();
    assert!(matches!(err.kind(), ErrKind::UnboundSymbol(s) if s.as_str() == "qux"));
}

#[test]
fn not_callable() {
    assert!(matches!(
        eval_str("(1 2)").unwrap_err().kind(),
        ErrKind::NotCallable(_)
    ));
    assert!(matches!(
        eval_str("('(a) 2)").unwrap_err().kind(),
        ErrKind::NotCallable(_)
    ));
}

#[test]
fn operands_evaluated_left_to_right() {
    let mut interpreter = Interpreter::new();
    let res = last(
        &mut interpreter,
        "(define x 1) (cons (assign x 2) (cons x nil))",
    );
    assert_eq!(res.unwrap().to_string(), "(x 2)");
}

#[test]
fn apply_arity() {
    let mut interpreter = Interpreter::new();
    let err = last(&mut interpreter, "((lambda (a b) a) 1)").unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrKind::WrongArgumentCount {
            given: 1,
            expected: ExpectedCount::Exactly(2)
        }
    ));
}

#[test]
fn empty_body_is_nil() {
    assert_eq!(eval_str("((lambda ()))").unwrap(), Sexp::nil());
}

#[test]
fn lexical_scope() {
    let mut interpreter = Interpreter::new();
    let res = last(
        &mut interpreter,
        "(define x 'global)
         (define get-x (lambda () x))
         ((lambda (x) (get-x)) 'local)",
    );
    assert_eq!(res.unwrap(), Sexp::from("global".to_symbol()));
}

#[test]
fn stack_exhausted() {
    let mut interpreter = Interpreter::from_options(Options {
        max_depth: 500,
        load_prelude: false,
    })
    .unwrap();
    let res = last(
        &mut interpreter,
        "(define loop (lambda (n) (loop (+ n 1)))) (loop 0)",
    );
    let err = res.unwrap_err();
    assert!(matches!(err.kind(), ErrKind::StackExhausted { depth: 500 }));
    assert!(!err.trace().is_empty());

    // Depth unwinds fully after a failure.
    assert_eq!(last(&mut interpreter, "(+ 1 2)").unwrap(), Sexp::from(3));
}

#[test]
fn run_stops_at_first_failure() {
    let mut interpreter = Interpreter::new();
    assert!(interpreter.run("(define a 1) (car a) (define b 2)").is_err());
    assert!(interpreter.root().lookup(&"a".to_symbol()).is_ok());
    assert!(interpreter.root().lookup(&"b".to_symbol()).is_err());
}

#[test]
fn run_each_continues() {
    let mut interpreter = Interpreter::new();
    let results = interpreter.run_each("(define a 1) (car a) (define b 2)").unwrap();
    assert_eq!(results.len(), 3);
    assert!(results[1].is_err());
    assert!(interpreter.root().lookup(&"b".to_symbol()).is_ok());
    assert!(interpreter.run_each("(a").is_err());
}

#[test]
fn improper_operands() {
    let mut interpreter = Interpreter::new();
    let form = Sexp::cons(
        "+".to_symbol().into(),
        Sexp::cons(1.into(), 2.into()),
    );
    let err = interpreter.eval_root(&form).unwrap_err();
    assert!(matches!(err.kind(), ErrKind::InvalidSexp(_)));
}

#[test]
fn independent_roots() {
    let mut a = Interpreter::new();
    let mut b = Interpreter::new();
    a.run("(define x 1)").unwrap();
    assert!(b.run("x").is_err());
    assert!(b.run("(define x 2)").is_ok());
}

#[test]
fn root_freed_with_interpreter() {
    let mut interpreter = Interpreter::with_prelude().unwrap();
    interpreter
        .run("(define counter (let ((n 0)) (lambda () (assign n (+ n 1)) n)))")
        .unwrap();
    let root = Rc::downgrade(interpreter.root());
    drop(interpreter);
    assert!(root.upgrade().is_none());
}

#[test]
fn reassigned_closure_chain() {
    let mut interpreter = Interpreter::new();
    interpreter.run("(define g nil)").unwrap();
    for _ in 0..20_000 {
        interpreter
            .run("(assign g (let ((p g)) (lambda () p)))")
            .unwrap();
    }
    assert!(matches!(
        last(&mut interpreter, "g").unwrap(),
        Sexp::Procedure(_)
    ));
    assert_eq!(
        last(&mut interpreter, "(assign g nil) g").unwrap(),
        Sexp::nil()
    );
}
