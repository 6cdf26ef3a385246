//! Basic REPL; single-threaded, one root environment per run.
//!
//! Run as:              `RUST_LOG=info cargo run --example repl`.
//! Run a file as:       `cargo run --example repl -- path/to/file.lisp`.
//! Kernel only:         `cargo run --example repl -- --no-prelude`.

use clap::{Arg, Command};
use colored::*;
use log::{warn, LevelFilter};
use std::fs;

use ylisp::lang_err::LangErr;
use ylisp::options::Options;
use ylisp::printer::print_sexp;
use ylisp::sexp::Sexp;
use ylisp::token::InteractiveStream;
use ylisp::Interpreter;


fn main() -> Result<(), String> {
    // Setup logging.
    env_logger::Builder::from_default_env()
        .filter_module("rustyline", LevelFilter::Warn)
        .init();

    // Parse args.
    let matches = Command::new("ylisp REPL")
        .version("0.1")
        .about("Bare-bones single-threaded Lisp REPL")
        .arg(
            Arg::new("max-depth")
                .short('d')
                .long("max-depth")
                .takes_value(true)
                .help("Nested evaluations allowed before giving up"),
        )
        .arg(
            Arg::new("no-prelude")
                .long("no-prelude")
                .help("Only bind the kernel in the root environment"),
        )
        .arg(
            Arg::new("FILE")
                .index(1)
                .help("Evaluate FILE instead of reading interactively"),
        )
        .get_matches();

    let mut options = Options::default();
    if let Some(depth) = matches.value_of("max-depth") {
        options.max_depth = match depth.parse() {
            Ok(depth) => depth,
            Err(err) => return Err(format!("Invalid max depth {}: {}", depth, err)),
        };
    }
    options.load_prelude = !matches.is_present("no-prelude");

    let mut interpreter = match Interpreter::from_options(options) {
        Ok(interpreter) => interpreter,
        Err(err) => return Err(format!("{}", err)),
    };

    match matches.value_of("FILE") {
        Some(path) => run_file(&mut interpreter, path),
        None => {
            run_interactive(&mut interpreter);
            Ok(())
        }
    }
}

fn run_interactive(interpreter: &mut Interpreter) {
    let stream = InteractiveStream::new(interpreter.root().clone());
    for input in stream {
        let results = match interpreter.run_each(&input) {
            Ok(results) => results,
            Err(err) => {
                println!("{}", err.to_string().red());
                println!("");
                continue;
            }
        };

        for result in &results {
            print_result(result);
            if let Err(err) = result {
                if err.is_exit() {
                    return;
                }
            }
        }
        println!("");
    }
}

// Any failure is fatal to the whole file.
fn run_file(interpreter: &mut Interpreter, path: &str) -> Result<(), String> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => return Err(format!("Reading {} failed: {}", path, err)),
    };

    match interpreter.run(text) {
        Ok(_) => Ok(()),
        Err(err) if err.is_exit() => Ok(()),
        Err(err) => {
            warn!("Evaluation of {} failed", path);
            Err(format!("{}", err))
        }
    }
}

fn print_result(result: &Result<Sexp, LangErr>) {
    match result {
        Ok(val) => {
            print!("-> ");
            print_sexp(val);
            println!("");
        }
        Err(err) if err.is_exit() => {}
        Err(err) => {
            println!("{}", err.to_string().red());
        }
    }
}
