//! Native stack growth for the recursive parser and evaluator
//!
//! Parsing and evaluation recurse once per nesting level of the source, and
//! so does dropping the syntax tree. Wrapping each level in
//! [`ensure_sufficient_stack`] lets deeply nested input (or deep user
//! recursion up to the configured call-depth limit) run on any thread,
//! including 2MB test threads.

/// Grow the stack when less than this remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhausted.
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_closure_result() {
        let result: Result<i64, &str> = ensure_sufficient_stack(|| Ok(7));
        assert_eq!(result, Ok(7));
    }

    #[test]
    fn test_deep_recursion() {
        fn depth(n: u64) -> u64 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
        }

        assert_eq!(depth(50_000), 50_000);
    }
}
