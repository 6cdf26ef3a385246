//! Runtime errors of the language.

use std::borrow::Cow;
use std::fmt;

use self::ErrKind::*;
use self::ExpectedCount::*;
use crate::parser::ParseError;
use crate::primitive::Symbol;
use crate::sexp::Sexp;


/// Creates an Err(LangErr) from an ErrKind variant.
///
/// Called as:  err!(UnboundSymbol(symbol)).
macro_rules! err {
    ($($kind:tt)+) => {
        Err($crate::lang_err::LangErr::empty_trace(
            $crate::lang_err::ErrKind::$($kind)+,
        ))
    };
}

/// Frames kept in a LangErr's trace; outer frames beyond this are dropped.
const MAX_TRACE: usize = 16;

pub type Ret = Result<Sexp, LangErr>;

#[derive(Debug)]
pub struct LangErr {
    kind: ErrKind,
    // Innermost form first.
    trace: Vec<Sexp>,
}

#[derive(Debug)]
pub enum ErrKind {
    UnboundSymbol(Symbol),
    NotCallable(Sexp),
    NotSupported {
        given: Sexp,
        operation: &'static str,
    },
    WrongArgumentCount {
        given: usize,
        expected: ExpectedCount,
    },
    AlreadyBoundSymbol(Symbol),
    InvalidArgument {
        given: Sexp,
        expected: Cow<'static, str>,
    },
    InvalidSexp(Sexp),
    DivideByZero,
    StackExhausted {
        depth: usize,
    },
    Io(String),
    Read(ParseError),
    /// Raised by (exit); drivers stop when they see it.
    Exit,
}

#[derive(Debug, PartialEq)]
pub enum ExpectedCount {
    Exactly(usize),
    AtLeast(usize),
    AtMost(usize),
}

impl LangErr {
    // Prefer using err! for convenience.
    pub fn empty_trace(kind: ErrKind) -> Self {
        Self {
            kind,
            trace: Vec::new(),
        }
    }

    pub fn kind(&self) -> &ErrKind {
        &self.kind
    }

    pub fn consume(self) -> ErrKind {
        self.kind
    }

    pub fn trace(&self) -> &[Sexp] {
        &self.trace
    }

    pub fn is_exit(&self) -> bool {
        matches!(self.kind, Exit)
    }

    /// Records form as enclosing the failure, while room remains.
    pub fn push_frame(&mut self, form: &Sexp) {
        if self.trace.len() < MAX_TRACE {
            self.trace.push(form.clone());
        }
    }
}


impl fmt::Display for LangErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Lang Error] ")?;
        match &self.kind {
            UnboundSymbol(symbol) => write!(f, "Unbound symbol: \"{}\"", symbol),
            NotCallable(given) => write!(f, "Not callable: {}", given),
            NotSupported { given, operation } => {
                write!(f, "Operation {} not supported on: {}", operation, given)
            }
            WrongArgumentCount { given, expected } => write!(
                f,
                "Wrong argument count: given {}, expected {}",
                given, expected
            ),
            AlreadyBoundSymbol(symbol) => write!(f, "Already bound symbol: \"{}\"", symbol),
            InvalidArgument { given, expected } => write!(
                f,
                "Invalid argument: given {}, expected {}",
                given, expected
            ),
            InvalidSexp(val) => write!(f, "Invalid S-exp for evaluation: {}", val),
            DivideByZero => write!(f, "Division by zero"),
            StackExhausted { depth } => write!(f, "Stack exhausted at depth {}", depth),
            Io(msg) => write!(f, "IO failure: {}", msg),
            Read(err) => write!(f, "Read failure: {}", err),
            Exit => write!(f, "Exit requested"),
        }?;

        for (i, frame) in self.trace.iter().enumerate() {
            write!(f, "\n{})  {}", i, frame)?;
        }
        Ok(())
    }
}

impl std::error::Error for LangErr {}

impl fmt::Display for ExpectedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            Exactly(exactly) => write!(f, "{}", exactly),
            AtLeast(minimum) => write!(f, "at least {}", minimum),
            AtMost(maximum) => write!(f, "at most {}", maximum),
        };
    }
}
