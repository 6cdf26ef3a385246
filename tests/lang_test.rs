mod common;

use ylisp::lang_err::ErrKind;
use ylisp::primitive::{Number, ToSymbol};
use ylisp::sexp::Sexp;


#[test]
fn basic_arithmetic() {
    let mut interpreter = common::setup().unwrap();

    let results = common::results(&mut interpreter, "(+ 1 2) (+ 2 2)");
    assert_eq!(results, vec![Number::from(3).into(), Number::from(4).into()]);

    let results = common::results(
        &mut interpreter,
        "(* (+ 1 1) 3)
         (/ (- 1 1) 2)
         (- 4.5)",
    );
    assert_eq!(
        results,
        vec![
            Number::from(6).into(),
            Number::from(0).into(),
            "-4.5".parse::<Sexp>().unwrap()
        ]
    );
}

#[test]
fn print_parse_inverse() {
    let mut interpreter = common::setup().unwrap();
    for text in &["(a b c)", "(a (b (c)) 1.5 -2)", "(quote x)", "nil"] {
        let results = common::results(&mut interpreter, format!("'{}", text));
        assert_eq!(results[0].to_string(), *text);
    }
}

#[test]
fn nested_quote() {
    let mut interpreter = common::setup().unwrap();
    common::validate(
        &mut interpreter,
        "(tree-equal '''''qux '(quote (quote (quote (quote qux)))))",
        "t",
    );
    common::validate(&mut interpreter, "(car ''(one two))", "quote");
    common::validate(&mut interpreter, "(not ''abc)", "nil");
}

#[test]
fn prelude_logic() {
    let mut interpreter = common::setup().unwrap();
    common::validate(&mut interpreter, "(and nil t)", "nil");
    common::validate(&mut interpreter, "(and t t)", "t");
    let (or1, or2, or3, or4) = ("(or nil nil)", "(or t nil)", "(or nil t)", "(or t t)");
    common::validate(
        &mut interpreter,
        format!("(and (and (not {}) {}) (and {} {}))", or1, or2, or3, or4),
        "t",
    );
    common::validate(&mut interpreter, "(>= 7777 7777)", "t");
    common::validate(&mut interpreter, "(<= 7777 7777)", "t");
    common::validate(&mut interpreter, "(< 7777 7777)", "nil");
    common::validate(&mut interpreter, "(< 7776 7777)", "t");
}

#[test]
fn tree_equal() {
    let mut interpreter = common::setup().unwrap();
    common::results(&mut interpreter, "(define x 'a) (define y 'b)");
    common::validate(
        &mut interpreter,
        "(tree-equal (cons 'a (cons (cons 'b (cons 'c nil)) (cons 'd nil))) '(a (b c) d))",
        "t",
    );
    common::validate(&mut interpreter, "(tree-equal '(a b) (cons x (cons y nil)))", "t");
    common::validate(&mut interpreter, "(tree-equal '(a '(b c) d) '(a (quote (b c)) d))", "t");

    // Reflexive, symmetric, and sensitive to content and nesting.
    common::results(&mut interpreter, "(define l '(1 (2 3) 4))");
    common::validate(&mut interpreter, "(tree-equal l l)", "t");
    common::validate(&mut interpreter, "(tree-equal '(1 2) '(1 2 3))", "nil");
    common::validate(&mut interpreter, "(tree-equal '(1 2 3) '(1 2))", "nil");
    common::validate(&mut interpreter, "(tree-equal '(1 (2) 3) '(1 2 3))", "nil");
    common::validate(&mut interpreter, "(eql '(one two) '(one two))", "nil");
}

#[test]
fn library_procedures() {
    let mut interpreter = common::setup().unwrap();
    common::validate(
        &mut interpreter,
        "(reduce + 0 (map length '((a b c d) (d e f) (g h i j k))))",
        "12",
    );
    common::validate(&mut interpreter, "(tree-equal (reverse '(qux quux)) '(quux qux))", "t");
    common::validate(&mut interpreter, "(length (append (range 1 5) (range 1 3)))", "8");
    common::validate(&mut interpreter, "(append '(qux quux) '(1 2 3))", "(qux quux 1 2 3)");
    common::validate(&mut interpreter, "(range 3 1)", "nil");
    common::validate(&mut interpreter, "(reduce - 10 '(1 2 3))", "4");
}

#[test]
fn closures() {
    let mut interpreter = common::setup().unwrap();
    common::results(
        &mut interpreter,
        "(define double (lambda (x) (+ x x)))
         (define quadruple (lambda (x) (double (double x))))
         (define evenp (lambda (x) (if (eql x 0) t (oddp (- x 1)))))
         (define oddp (lambda (x) (if (eql x 0) nil (evenp (- x 1)))))",
    );
    common::validate(
        &mut interpreter,
        "(and (eql (quadruple 8) 32) (eql (quadruple 1.1) 4.4))",
        "t",
    );
    common::validate(&mut interpreter, "(and (oddp 15) (evenp 18))", "t");
}

#[test]
fn independent_accumulators() {
    let mut interpreter = common::setup().unwrap();
    common::results(
        &mut interpreter,
        "(define acc-gen (lambda () (let ((acc 0)) (lambda (x) (assign acc (+ acc x)) acc))))
         (define acc1 (acc-gen))
         (define acc2 (acc-gen))
         (acc1 5)
         (acc2 7)
         (acc1 3)",
    );
    common::validate(&mut interpreter, "(and (eql (acc1 1) 9) (eql (acc2 1) 8))", "t");
}

#[test]
fn let_vs_letrec() {
    let mut interpreter = common::setup().unwrap();
    common::results(&mut interpreter, "(define f (lambda (x) 1))");
    common::validate(
        &mut interpreter,
        "(let ((f (lambda (n) (if (eql n 0) 1 (* n (f (- n 1))))))) (f 7))",
        "7",
    );
    common::validate(
        &mut interpreter,
        "(letrec ((f (lambda (n) (if (eql n 0) 1 (* n (f (- n 1))))))) (f 7))",
        "5040",
    );
}

#[test]
fn binding_failures_keep_root() {
    let mut interpreter = common::setup().unwrap();
    let results = common::results_with_errors(
        &mut interpreter,
        "(define x 4)
         (define x 5)
         (assign nope 1)
         (assign x 3)
         x",
    );
    assert!(matches!(
        results[1].as_ref().unwrap_err().kind(),
        ErrKind::AlreadyBoundSymbol(s) if s.as_str() == "x"
    ));
    assert!(matches!(
        results[2].as_ref().unwrap_err().kind(),
        ErrKind::UnboundSymbol(s) if s.as_str() == "nope"
    ));
    assert_eq!(results[3].as_ref().unwrap(), &Sexp::from("x".to_symbol()));
    assert_eq!(results[4].as_ref().unwrap(), &Sexp::from(3));
    common::validate(&mut interpreter, "(car '(a b))", "a");
}

#[test]
fn deep_recursion_exhausts() {
    let mut interpreter = common::setup().unwrap();
    let results = common::results_with_errors(
        &mut interpreter,
        "(define forever (lambda (n) (+ 1 (forever n))))
         (forever 0)",
    );
    let err = results[1].as_ref().unwrap_err();
    assert!(matches!(err.kind(), ErrKind::StackExhausted { .. }));
    assert!(err.to_string().contains("Stack exhausted"));

    // Still usable afterwards.
    common::validate(&mut interpreter, "(length (range 1 100))", "100");
}

#[test]
fn error_trace() {
    let mut interpreter = common::setup().unwrap();
    let results = common::results_with_errors(&mut interpreter, "(+ 1 (car (cdr '(a))))");
    let err = results[0].as_ref().unwrap_err();
    assert!(matches!(err.kind(), ErrKind::NotSupported { .. }));
    let trace = err.trace().iter().map(|s| s.to_string()).collect::<Vec<_>>();
    assert_eq!(trace, vec!["(car (cdr (quote (a))))", "(+ 1 (car (cdr (quote (a)))))"]);
}
