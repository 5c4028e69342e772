//! Compiling a pattern string into an immutable, reusable [`Pattern`].

use crate::error::{CompileError, Status};
use crate::limits::Limits;
use crate::parser;
use crate::state::{State, StateId, StateStore};

/// An immutable compiled NFA.
///
/// Owns its state arena and the id of the whole expression's start state.
/// Has no mutating operations, so it may be read concurrently by any
/// number of [`crate::Matcher`]s as long as the matchers themselves are
/// not shared — ordinary `Sync`/non-`Sync` auto-trait derivation, not a
/// hand-written guarantee.
#[derive(Debug)]
pub struct Pattern {
    states: StateStore,
    start: StateId,
}

impl Pattern {
    pub(crate) fn state(&self, id: StateId) -> &State {
        self.states.get(id)
    }

    pub(crate) fn start(&self) -> StateId {
        self.start
    }

    /// Number of NFA states in this pattern's arena, including the
    /// reserved null placeholder at index 0.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }
}

/// Compile `pattern` into an NFA, using [`Limits::default()`].
///
/// On success, returns the compiled pattern and the byte offset just past
/// the last byte the parser consumed (this need not be the whole pattern
/// length — the parser stops wherever its grammar stops, and does not
/// itself reject trailing input; see the parser's tests). On failure,
/// returns a [`CompileError`] naming the [`Status`] and the offset of the
/// failure.
pub fn compile(pattern: &str) -> Result<(Pattern, usize), CompileError> {
    compile_with_limits(pattern, Limits::default())
}

/// As [`compile`], with caller-supplied [`Limits`] for parser recursion
/// depth and maximum pattern length.
pub fn compile_with_limits(
    pattern: &str,
    limits: Limits,
) -> Result<(Pattern, usize), CompileError> {
    let (result, offset) = parser::parse(pattern.as_bytes(), limits);
    match result {
        Ok((states, fragment)) => {
            let compiled = Pattern { states, start: fragment.start };
            tracing::debug!(
                target: "tnfa::compile",
                pattern_len = pattern.len(),
                state_count = compiled.state_count(),
                "compiled pattern",
            );
            Ok((compiled, offset))
        }
        Err(status) => {
            tracing::warn!(
                target: "tnfa::compile",
                %status,
                offset,
                "failed to compile pattern",
            );
            Err(CompileError { status, offset })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Status;

    #[test]
    fn compiling_a_literal_succeeds() {
        let (pattern, offset) = compile("abc").expect("should compile");
        assert_eq!(offset, 3);
        assert!(pattern.state_count() > 1);
    }

    #[test]
    fn compile_error_carries_status_and_offset() {
        let err = compile("(a").unwrap_err();
        assert_eq!(err.status, Status::ExpectedRParen);
        assert_eq!(err.offset, 2);
    }

    #[test]
    fn limits_reject_oversized_patterns() {
        let huge = "a".repeat(10);
        let limits = Limits { max_pattern_len: 5, ..Limits::default() };
        let err = compile_with_limits(&huge, limits).unwrap_err();
        assert_eq!(err.status, Status::NoMemory);
    }
}
