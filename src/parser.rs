//! Module for parsing source text into S-exps.

use std::fmt;
use std::str::FromStr;

use crate::primitive::{Number, ToSymbol};
use crate::sexp::{ConsList, Sexp};
use crate::stack::ensure_sufficient_stack;
use crate::token::{lex, Token, TokenKind};

use self::ParseErrorReason::*;


#[derive(Clone, Debug, PartialEq)]
pub enum ParseErrorReason {
    UnmatchedOpen,
    UnmatchedClose,
    DanglingQuote,
    UnexpectedToken,
    UnexpectedEnd,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParseError {
    reason: ParseErrorReason,
    token: Option<Token>,
}

impl ParseError {
    fn new(reason: ParseErrorReason, token: Option<Token>) -> Self {
        Self { reason, token }
    }

    pub fn reason(&self) -> &ParseErrorReason {
        &self.reason
    }

    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }
}


/// Parses every top-level expression of text, in order.
pub fn parse<S: AsRef<str>>(text: S) -> Result<Vec<Sexp>, ParseError> {
    group(lex(text))?
        .into_iter()
        .map(|mut tokens| {
            let mut pos = 0;
            build(&mut tokens, &mut pos)
        })
        .collect()
}

/// Partitions tokens into one group per top-level expression.
fn group(tokens: Vec<Token>) -> Result<Vec<Vec<Token>>, ParseError> {
    let mut groups = Vec::new();
    let mut current = Vec::new();
    let mut balance: usize = 0;
    for token in tokens {
        match token.kind {
            TokenKind::ParenOpen => balance += 1,
            TokenKind::ParenClose => {
                if balance == 0 {
                    return Err(ParseError::new(UnmatchedClose, Some(token)));
                }
                balance -= 1;
            }
            _ => {}
        }

        let closes = balance == 0 && token.kind != TokenKind::Quote;
        current.push(token);
        if closes {
            groups.push(std::mem::take(&mut current));
        }
    }

    if balance > 0 {
        let open = current
            .into_iter()
            .find(|token| token.kind == TokenKind::ParenOpen);
        return Err(ParseError::new(UnmatchedOpen, open));
    }
    if let Some(quote) = current.pop() {
        return Err(ParseError::new(DanglingQuote, Some(quote)));
    }
    Ok(groups)
}

/// Builds the expression starting at tokens[*pos], leaving pos just past it.
///
/// Iterates along each list and recurses only into nested expressions.
fn build(tokens: &mut Vec<Token>, pos: &mut usize) -> Result<Sexp, ParseError> {
    let kind = match tokens.get(*pos) {
        Some(token) => &token.kind,
        None => return Err(ParseError::new(UnexpectedEnd, tokens.last().cloned())),
    };

    match kind {
        TokenKind::Literal(text) => {
            let atom = atom(text);
            *pos += 1;
            Ok(atom)
        }
        TokenKind::Quote => {
            expand_quote(tokens, *pos)?;
            build(tokens, pos)
        }
        TokenKind::ParenClose => Err(ParseError::new(
            UnexpectedToken,
            Some(tokens[*pos].clone()),
        )),
        TokenKind::ParenOpen => {
            *pos += 1;
            let mut list = ConsList::new();
            loop {
                match tokens.get(*pos).map(|token| &token.kind) {
                    Some(TokenKind::ParenClose) => {
                        *pos += 1;
                        return Ok(list.release());
                    }
                    Some(_) => {
                        let elem = ensure_sufficient_stack(|| build(tokens, pos))?;
                        list.append(elem);
                    }
                    None => {
                        return Err(ParseError::new(UnexpectedEnd, tokens.last().cloned()));
                    }
                }
            }
        }
    }
}

/// Rewrites the ' at tokens[at] into (quote <expr>) in place.
fn expand_quote(tokens: &mut Vec<Token>, at: usize) -> Result<(), ParseError> {
    let quote = tokens[at].clone();
    let dangling = || ParseError::new(DanglingQuote, Some(quote.clone()));

    // Skip nested quotes; they are expanded when their turn comes.
    let mut end = at + 1;
    while let Some(TokenKind::Quote) = tokens.get(end).map(|token| &token.kind) {
        end += 1;
    }
    match tokens.get(end).map(|token| &token.kind) {
        Some(TokenKind::Literal(_)) => {}
        Some(TokenKind::ParenOpen) => {
            let mut balance: usize = 0;
            loop {
                match tokens.get(end).map(|token| &token.kind) {
                    Some(TokenKind::ParenOpen) => balance += 1,
                    Some(TokenKind::ParenClose) => {
                        balance -= 1;
                        if balance == 0 {
                            break;
                        }
                    }
                    Some(_) => {}
                    None => return Err(dangling()),
                }
                end += 1;
            }
        }
        _ => return Err(dangling()),
    }

    let (line, col) = (quote.line, quote.col);
    tokens.insert(end + 1, Token::new(TokenKind::ParenClose, line, col));
    tokens.insert(
        at + 1,
        Token::new(TokenKind::Literal("quote".to_string()), line, col),
    );
    tokens[at].kind = TokenKind::ParenOpen;
    Ok(())
}

/// Number if text looks numeric and parses as one; Symbol otherwise.
fn atom(text: &str) -> Sexp {
    let numeric = text
        .chars()
        .next()
        .map_or(false, |c| c.is_ascii_digit() || c == '-');
    if numeric {
        if let Ok(num) = Number::from_str(text) {
            return num.into();
        }
    }
    text.to_symbol().into()
}


impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Parse Error] ")?;
        match self.reason {
            UnmatchedOpen => write!(f, "Unmatched open paren"),
            UnmatchedClose => write!(f, "Unmatched close paren"),
            DanglingQuote => write!(f, "Nothing to quote"),
            UnexpectedToken => write!(f, "Unexpected token"),
            UnexpectedEnd => write!(f, "Unexpected end of input"),
        }?;
        if let Some(token) = &self.token {
            write!(f, ": {}", token)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}


#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;
