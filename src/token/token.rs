use std::fmt;


#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    ParenOpen,
    ParenClose,
    Quote,
    Literal(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub col: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize, col: usize) -> Token {
        Token { kind, line, col }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenKind::Literal(text) => write!(f, "{} @ ({}, {})", text, self.line, self.col),
            _ => write!(f, "{:?} @ ({}, {})", self.kind, self.line, self.col),
        }
    }
}
