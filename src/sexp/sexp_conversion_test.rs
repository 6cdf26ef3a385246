use crate::lang_err::ErrKind;
use crate::primitive::{Args, Number, Symbol, ToSymbol};
use crate::sexp::Sexp;


#[test]
fn list_macro() {
    let l = list!("a".to_symbol(), (Number::from(1), ("b".to_symbol(),),), 2,);
    assert_eq!(l, "(a (1 (b)) 2)".parse().unwrap());
    assert!(list!().is_nil());
}

#[test]
fn break_symbols() {
    let args: Args = vec!["test".to_symbol().into(), "ing".to_symbol().into()];
    let (a, b) = break_args!(args => (Symbol, Symbol)).unwrap();
    assert_eq!(a.as_str(), "test");
    assert_eq!(b.as_str(), "ing");
}

#[test]
fn break_mixed() {
    let args: Args = vec![
        "lambda".to_symbol().into(),
        "(a b)".parse().unwrap(),
        4.into(),
    ];
    let (command, params, body) = break_args!(args => (Symbol, Sexp, Sexp)).unwrap();
    assert_eq!(command.as_str(), "lambda");
    assert_eq!(params.car(), Some(&Sexp::from("a".to_symbol())));
    assert_eq!(body, Sexp::from(4));
}

#[test]
fn wrong_type() {
    let args: Args = vec![1.into()];
    let err = break_args!(args => (Symbol)).unwrap_err();
    assert!(matches!(err.kind(), ErrKind::InvalidArgument { .. }));
}

#[test]
fn wrong_count() {
    let args: Args = vec![1.into(), 2.into()];
    let err = break_args!(args => (Number)).unwrap_err();
    assert!(matches!(err.kind(), ErrKind::WrongArgumentCount { given: 2, .. }));
}
