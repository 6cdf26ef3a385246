use std::borrow::Borrow;
use std::fmt;


/// Name of a binding or a piece of quoted data.
///
/// Symbols compare by name; two Symbols built from the same text are the same
/// Symbol no matter where they came from.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Symbol(String);

pub trait ToSymbol {
    fn to_symbol(&self) -> Symbol;
}

impl Symbol {
    pub fn new<S: AsRef<str>>(sym: S) -> Symbol {
        Symbol(sym.as_ref().to_string())
    }

    pub fn nil() -> Symbol {
        Symbol::new("nil")
    }

    pub fn t() -> Symbol {
        Symbol::new("t")
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_nil(&self) -> bool {
        self.0 == "nil"
    }
}


impl<S: AsRef<str>> ToSymbol for S {
    fn to_symbol(&self) -> Symbol {
        Symbol::new(self)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<String> for Symbol {
    fn borrow(&self) -> &String {
        &self.0
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl_try_from!(Symbol => Symbol);
