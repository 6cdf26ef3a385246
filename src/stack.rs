//! Host stack growth for the recursive parts of parsing and evaluation.

/// Runs f, first growing the stack onto the heap if little of it remains.
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    // Kept free before recursing.
    const RED_ZONE: usize = 100 * 1024;
    // Allocated per growth.
    const STACK_PER_RECURSION: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
