//! Module for breaking source text into tokens.

use std::collections::VecDeque;

use super::token::{Token, TokenKind};


/// Accumulates Tokens given text, one line at a time.
///
/// Tracks paren depth across calls so that interactive callers can tell
/// whether the input so far forms complete top-level expressions.
#[derive(Debug, Default)]
pub struct Tokenizer {
    depth: usize,
    started_quote: bool,

    line_count: usize,
    tokens: VecDeque<Token>,
}

/// Single left-to-right scan of text into Tokens. Never fails; malformed
/// input is left for the parser to report.
pub fn lex<S: AsRef<str>>(text: S) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.tokenize(text);
    tokenizer.tokens.into()
}


impl Tokenizer {
    pub fn new() -> Self {
        Default::default()
    }

    /// Drops pending Tokens and depth, keeping the line count.
    pub fn clear(&mut self) {
        self.depth = 0;
        self.started_quote = false;

        self.tokens.clear();
    }

    pub fn depth(&self) -> usize {
        // Don't return 0 if in quote.
        std::cmp::max(self.depth, self.started_quote as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn drain(&mut self) -> Vec<Token> {
        self.tokens.drain(..).collect()
    }

    pub fn tokenize<S: AsRef<str>>(&mut self, input: S) {
        for line in input.as_ref().split('\n') {
            self.tokenize_line(line);
        }
    }

    fn tokenize_line(&mut self, line: &str) {
        let mut start: usize = 0;
        let mut empty = true;
        for (i, c) in line.char_indices() {
            if c.is_whitespace() {
                if !empty {
                    self.push_literal(&line[start..i], start);
                    empty = true;
                }
                continue;
            }

            // Once a quote has been started, any following token will
            // suffice as far as depth calculation goes.
            self.started_quote = false;

            let kind = match c {
                '(' => {
                    self.depth += 1;
                    TokenKind::ParenOpen
                }
                ')' => {
                    self.depth = self.depth.saturating_sub(1);
                    TokenKind::ParenClose
                }
                '\'' => {
                    self.started_quote = true;
                    TokenKind::Quote
                }
                _ => {
                    if empty {
                        empty = false;
                        start = i;
                    }
                    continue;
                }
            };

            if !empty {
                self.push_literal(&line[start..i], start);
                empty = true;
            }
            self.tokens.push_back(Token::new(kind, self.line_count, i));
        }

        // EOL flushes any literal in progress.
        if !empty {
            self.push_literal(&line[start..], start);
        }
        self.line_count += 1;
    }

    fn push_literal(&mut self, text: &str, start: usize) {
        self.tokens.push_back(Token::new(
            TokenKind::Literal(text.to_string()),
            self.line_count,
            start,
        ));
    }
}


#[cfg(test)]
#[path = "./tokenizer_test.rs"]
mod tokenizer_test;
