//! Native functions bound in every root environment.

use lazy_static::lazy_static;
use std::collections::HashMap;
use std::io::{BufRead, Write};

use crate::interpreter::Interpreter;
use crate::lang_err::{LangErr, Ret};
use crate::parser::parse;
use crate::primitive::{Args, BuiltIn, Number};
use crate::sexp::Sexp;


/// Builds a name -> $kind map from name: fn pairs.
macro_rules! builtins {
    [$kind:ident; $($n:tt : $x:expr),+ $(,)?] => {
        {
            let mut m = HashMap::new();
            $(
                m.insert($n, $kind::new($n, $x));
            )+
            m
        }
    };
}

lazy_static! {
    pub static ref BUILTINS: HashMap<&'static str, BuiltIn> = builtins![
        BuiltIn;
        "cons": cons,
        "car": car,
        "cdr": cdr,
        "not": not,
        "eql": eql,
        "nullp": nullp,
        "consp": consp,
        "atomp": atomp,
        "numberp": numberp,
        "+": add,
        "-": sub,
        "*": mul,
        "/": div,
        ">": gt,
        "mod": modulo,
        "print": print,
        "println": println,
        "read": read,
        "exit": exit,
    ];
}


fn cons(args: Args, _interpreter: &mut Interpreter) -> Ret {
    let (car, cdr) = break_args!(args => (Sexp, Sexp))?;
    Ok(Sexp::cons(car, cdr))
}

fn car(args: Args, _interpreter: &mut Interpreter) -> Ret {
    let (list,) = break_args!(args => (Sexp))?;
    match list {
        Sexp::Cons(cons) => Ok(cons.car().clone()),
        given => err!(NotSupported {
            given,
            operation: "car",
        }),
    }
}

fn cdr(args: Args, _interpreter: &mut Interpreter) -> Ret {
    let (list,) = break_args!(args => (Sexp))?;
    match list {
        Sexp::Cons(cons) => Ok(cons.cdr().clone()),
        given => err!(NotSupported {
            given,
            operation: "cdr",
        }),
    }
}

fn not(args: Args, _interpreter: &mut Interpreter) -> Ret {
    let (val,) = break_args!(args => (Sexp))?;
    Ok(Sexp::from_bool(val.is_nil()))
}

fn eql(args: Args, _interpreter: &mut Interpreter) -> Ret {
    let (a, b) = break_args!(args => (Sexp, Sexp))?;
    Ok(Sexp::from_bool(a.eql(&b)))
}

fn nullp(args: Args, _interpreter: &mut Interpreter) -> Ret {
    let (val,) = break_args!(args => (Sexp))?;
    Ok(Sexp::from_bool(val.is_nil()))
}

fn consp(args: Args, _interpreter: &mut Interpreter) -> Ret {
    let (val,) = break_args!(args => (Sexp))?;
    Ok(Sexp::from_bool(val.is_cons()))
}

fn atomp(args: Args, _interpreter: &mut Interpreter) -> Ret {
    let (val,) = break_args!(args => (Sexp))?;
    Ok(Sexp::from_bool(val.is_atom()))
}

fn numberp(args: Args, _interpreter: &mut Interpreter) -> Ret {
    let (val,) = break_args!(args => (Sexp))?;
    Ok(Sexp::from_bool(val.is_number()))
}


fn number(arg: Sexp, operation: &'static str) -> Result<Number, LangErr> {
    match arg {
        Sexp::Number(num) => Ok(num),
        given => err!(NotSupported { given, operation }),
    }
}

fn add(args: Args, _interpreter: &mut Interpreter) -> Ret {
    let mut curr = Number::zero();
    for arg in args {
        curr += number(arg, "+")?;
    }
    Ok(curr.into())
}

fn sub(args: Args, _interpreter: &mut Interpreter) -> Ret {
    let mut iter = args.into_iter();
    let mut curr = match iter.next() {
        Some(first) => number(first, "-")?,
        None => return Ok(Number::zero().into()),
    };
    let mut negate = true;
    for arg in iter {
        negate = false;
        curr -= number(arg, "-")?;
    }

    if negate {
        curr = -curr;
    }
    Ok(curr.into())
}

fn mul(args: Args, _interpreter: &mut Interpreter) -> Ret {
    let mut curr = Number::one();
    for arg in args {
        curr *= number(arg, "*")?;
    }
    Ok(curr.into())
}

fn div(args: Args, _interpreter: &mut Interpreter) -> Ret {
    let mut iter = args.into_iter();
    let mut curr = match iter.next() {
        Some(first) => number(first, "/")?,
        None => return Ok(Number::one().into()),
    };
    let mut reciprocal = true;
    for arg in iter {
        reciprocal = false;
        curr = match curr.checked_div(&number(arg, "/")?) {
            Some(quotient) => quotient,
            None => return err!(DivideByZero),
        };
    }

    if reciprocal {
        curr = match curr.recip() {
            Some(recip) => recip,
            None => return err!(DivideByZero),
        };
    }
    Ok(curr.into())
}

fn gt(args: Args, _interpreter: &mut Interpreter) -> Ret {
    let (a, b) = break_args!(args => (Sexp, Sexp))?;
    let (a, b) = (number(a, ">")?, number(b, ">")?);
    Ok(Sexp::from_bool(a > b))
}

fn modulo(args: Args, _interpreter: &mut Interpreter) -> Ret {
    let (a, b) = break_args!(args => (Sexp, Sexp))?;
    let (a, b) = (number(a, "mod")?, number(b, "mod")?);
    match a.checked_rem(&b) {
        Some(rem) => Ok(rem.into()),
        None => err!(DivideByZero),
    }
}


fn print(args: Args, interpreter: &mut Interpreter) -> Ret {
    let (val,) = break_args!(args => (Sexp))?;
    write_out(interpreter, &val, false)
}

fn println(args: Args, interpreter: &mut Interpreter) -> Ret {
    let (val,) = break_args!(args => (Sexp))?;
    write_out(interpreter, &val, true)
}

fn write_out(interpreter: &mut Interpreter, val: &Sexp, newline: bool) -> Ret {
    let output = interpreter.output();
    let res = if newline {
        writeln!(output, "{}", val)
    } else {
        write!(output, "{}", val)
    };
    if let Err(err) = res.and_then(|_| output.flush()) {
        return err!(Io(err.to_string()));
    }
    Ok(Sexp::nil())
}

/// Parses the first expression of the next input line.
fn read(args: Args, interpreter: &mut Interpreter) -> Ret {
    break_args!(args => ())?;
    let mut line = String::new();
    match interpreter.input().read_line(&mut line) {
        Ok(0) => return err!(Io("end of input".to_string())),
        Ok(_) => {}
        Err(err) => return err!(Io(err.to_string())),
    }

    match parse(&line) {
        Ok(sexps) => Ok(sexps.into_iter().next().unwrap_or_default()),
        Err(err) => err!(Read(err)),
    }
}

fn exit(args: Args, _interpreter: &mut Interpreter) -> Ret {
    break_args!(args => ())?;
    err!(Exit)
}


#[cfg(test)]
#[path = "./builtins_test.rs"]
mod builtins_test;
