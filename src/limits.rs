//! Compile-time tunables. This is the engine's entire configuration
//! surface — there is no file format or environment-variable reading
//! anywhere in this crate.

/// Bounds on parser recursion depth and pattern length, checked while
/// compiling a pattern.
///
/// Exceeding either bound surfaces as [`crate::Status::NoMemory`]: the
/// closed error enum has no dedicated "pattern too complex" variant, and
/// exhausting a recursion budget is the same resource exhaustion the
/// engine's error taxonomy models as an allocation failure (see the
/// crate's design notes on `NoMemory` reachability).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum nesting depth of `Expr`/`Term`/`Atom` productions, and the
    /// maximum length of a flat concatenation chain.
    pub max_depth: u32,
    /// Maximum pattern length in bytes.
    pub max_pattern_len: usize,
}

impl Default for Limits {
    /// Generous defaults that do not constrain any pattern a human would
    /// write by hand.
    fn default() -> Self {
        Limits { max_depth: 512, max_pattern_len: 64 * 1024 }
    }
}
