use log::warn;
use rustyline::error::ReadlineError;
use rustyline::Editor;

use super::interactive_helper::InteractiveHelper;
use super::tokenizer::Tokenizer;
use crate::env::Env;


/// Line-edited source of complete top-level inputs.
///
/// Lines are accumulated until their parens balance; each item is the text
/// of one or more complete top-level expressions.
pub struct InteractiveStream {
    editor: Editor<InteractiveHelper>,
    tokenizer: Tokenizer,

    curr_expr: String,
    count: usize,
}

impl InteractiveStream {
    pub fn new(root: Env) -> InteractiveStream {
        let mut editor = Editor::<InteractiveHelper>::new();
        editor.set_helper(Some(InteractiveHelper::new(root)));

        InteractiveStream {
            editor,
            tokenizer: Tokenizer::new(),

            curr_expr: String::default(),
            count: 1,
        }
    }

    fn prompt(&self) -> String {
        match self.tokenizer.depth() {
            0 => format!("[{}]> ", self.count),
            depth => format!("..{}", "  ".repeat(depth)),
        }
    }
}


impl Iterator for InteractiveStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            match self.editor.readline(&self.prompt()) {
                Ok(line) => {
                    // Insert whitespace only if we don't already have any and
                    // we haven't just opened or are about to close a list.
                    let needs_space = match self.curr_expr.chars().next_back() {
                        Some(c) => !c.is_whitespace() && c != '(' && !line.starts_with(')'),
                        None => false,
                    };
                    if needs_space {
                        self.curr_expr.push(' ');
                    }
                    self.curr_expr += &line;
                    self.tokenizer.tokenize(&line);

                    if self.tokenizer.depth() > 0 {
                        continue;
                    }
                    let has_tokens = !self.tokenizer.is_empty();
                    self.tokenizer.clear();
                    let expr = std::mem::take(&mut self.curr_expr);
                    if !has_tokens {
                        continue;
                    }

                    self.editor.add_history_entry(expr.as_str());
                    self.count += 1;
                    return Some(expr);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    // Enable ^C to cancel an expression mid-parse.
                    self.tokenizer.clear();
                    self.curr_expr.clear();
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    self.tokenizer.clear();
                    return None;
                }
                Err(err) => {
                    warn!("[Readline Error]: {:?}", err);
                    self.tokenizer.clear();
                    self.curr_expr.clear();
                    continue;
                }
            }
        }
    }
}
