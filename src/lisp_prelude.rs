//! Library procedures written in the language itself, loaded into the root
//! after the kernel.

pub const PRELUDE: &str = include_str!("./prelude.lisp");
