//! Errors of the whole pipeline, from text to value.

use std::fmt;

use crate::lang_err::LangErr;
use crate::parser::ParseError;


#[derive(Debug)]
pub enum Error {
    Parse(ParseError),
    Lang(LangErr),
}

impl Error {
    pub fn is_exit(&self) -> bool {
        matches!(self, Error::Lang(err) if err.is_exit())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "{}", err),
            Error::Lang(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(err) => Some(err),
            Error::Lang(err) => Some(err),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<LangErr> for Error {
    fn from(err: LangErr) -> Self {
        Error::Lang(err)
    }
}
