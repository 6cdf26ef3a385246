/// Construction-time settings of an Interpreter.
#[derive(Clone, Debug)]
pub struct Options {
    /// Nested evaluations allowed before StackExhausted is raised.
    pub max_depth: usize,
    pub load_prelude: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            max_depth: 10_000,
            load_prelude: true,
        }
    }
}
