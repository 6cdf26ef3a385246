use ylisp::lang_err::LangErr;
use ylisp::sexp::Sexp;
use ylisp::Interpreter;


pub fn setup() -> Result<Interpreter, String> {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}

    match Interpreter::with_prelude() {
        Ok(interpreter) => Ok(interpreter),
        Err(err) => Err(format!("{}", err)),
    }
}

pub fn results<S: AsRef<str>>(interpreter: &mut Interpreter, s: S) -> Vec<Sexp> {
    interpreter
        .run_each(s)
        .unwrap()
        .into_iter()
        .map(|e| e.unwrap())
        .collect::<Vec<_>>()
}

pub fn results_with_errors<S: AsRef<str>>(
    interpreter: &mut Interpreter,
    s: S,
) -> Vec<Result<Sexp, LangErr>> {
    interpreter.run_each(s).unwrap()
}

/// Value of the last expression in s, compared against expected (itself
/// parsed, not evaluated).
pub fn validate<S: AsRef<str>>(interpreter: &mut Interpreter, s: S, expected: &str) {
    let results = results(interpreter, s.as_ref());
    let expected = expected.parse::<Sexp>().unwrap();
    assert_eq!(results.last(), Some(&expected), "{}", s.as_ref());
}
