use rustyline::completion::{Candidate, Completer};
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hint, Hinter};
use rustyline::line_buffer::LineBuffer;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::env::Env;
use crate::primitive::Symbol;


// Rustyline Helper for InteractiveStream.
pub struct InteractiveHelper {
    root: Env,
}

pub struct InteractiveCandidate {
    symbol: Symbol,
}

impl InteractiveHelper {
    pub fn new(root: Env) -> Self {
        Self { root }
    }

    fn symbols_with_prefix(&self, prefix: &str) -> Vec<Symbol> {
        let mut res = self
            .root
            .symbols()
            .into_iter()
            .filter(|symbol| symbol.as_str().starts_with(prefix))
            .collect::<Vec<_>>();
        res.sort();
        res
    }

    fn word_bounds(&self, line: &str, pos: usize) -> (usize, usize) {
        let mut start: usize = 0;
        let mut end: usize = line.len();
        for (i, c) in line.char_indices() {
            if c.is_whitespace() || c == '(' || c == ')' || c == '\'' {
                if i < pos {
                    start = i + 1;
                } else {
                    end = i;
                    break;
                }
            }
        }
        (start, end)
    }
}


impl Completer for InteractiveHelper {
    type Candidate = InteractiveCandidate;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, end) = self.word_bounds(line, pos);
        let symbols = self.symbols_with_prefix(&line[start..end]);
        Ok((
            start,
            symbols
                .into_iter()
                .map(|symbol| InteractiveCandidate { symbol })
                .collect(),
        ))
    }

    fn update(&self, line: &mut LineBuffer, _: usize, elected: &str) {
        let (start, end) = self.word_bounds(line.as_str(), line.pos());
        line.delete_range(start..end);
        line.insert_str(start, elected);
        line.set_pos(start + elected.len());
    }
}


impl Helper for InteractiveHelper {}
impl Hinter for InteractiveHelper {
    type Hint = InteractiveCandidate;
}
impl Highlighter for InteractiveHelper {}
impl Validator for InteractiveHelper {}


impl Candidate for InteractiveCandidate {
    fn display(&self) -> &str {
        self.symbol.as_str()
    }

    fn replacement(&self) -> &str {
        self.symbol.as_str()
    }
}

impl Hint for InteractiveCandidate {
    fn display(&self) -> &str {
        self.symbol.as_str()
    }

    fn completion(&self) -> Option<&str> {
        Some(self.symbol.as_str())
    }
}
