//! Terminal rendering of S-exps, with parens colored by depth.

use colored::*;
use std::fmt;

use crate::sexp::Sexp;


fn paren_color(depth: usize) -> (u8, u8, u8) {
    match depth % 6 {
        0 => (0, 255, 204),
        1 => (204, 51, 0),
        2 => (153, 255, 102),
        3 => (153, 102, 255),
        4 => (255, 255, 102),
        _ => (255, 179, 179),
    }
}

pub fn write_colored<W: fmt::Write>(w: &mut W, sexp: &Sexp) -> fmt::Result {
    sexp.write_list(
        w,
        0,
        &mut |writer, atom, _depth| match atom {
            Sexp::Procedure(_) | Sexp::BuiltIn(_) | Sexp::SpecialForm(_) => {
                write!(writer, "{}", atom.to_string().as_str().italic())
            }
            _ => write!(writer, "{}", atom),
        },
        &mut |writer, paren, depth| {
            let (r, g, b) = paren_color(depth);
            write!(writer, "{}", paren.truecolor(r, g, b))
        },
    )
}

pub fn colored_string(sexp: &Sexp) -> String {
    let mut s = String::new();
    // Writing to a String never fails.
    let _ = write_colored(&mut s, sexp);
    s
}

pub fn print_sexp(sexp: &Sexp) {
    print!("{}", colored_string(sexp));
}
