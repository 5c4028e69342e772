//! Recursive-descent parser over the engine's grammar. Each production
//! either succeeds and advances the cursor past what it consumed, or fails
//! with a specific [`Status`] and leaves the cursor on the offending byte.
//!
//! ```text
//! Expr    ::= Term ('|' Expr)?
//! Term    ::= Factor Term?
//! Factor  ::= Atom ('*' | '+' | '?')?
//! Atom    ::= Char | '.' | '(' Expr ')' | '[' Set ']'
//! Set     ::= '^'? Range Range*
//! Range   ::= Element ('-' Element)?
//! Char    ::= Escape | [#x20-#x7E] - Special
//! Element ::= [#x20-#x7E] - ']' | '\]'
//! Escape  ::= '\' (Special | '-')
//! Special ::= '(' | ')' | '*' | '+' | '.' | '?' | '[' | ']'
//!           | '^' | '{' | '|' | '}'
//! ```

use crate::error::Status;
use crate::limits::Limits;
use crate::nfa::{self, Fragment};
use crate::state::{StateStore, MAX_CHAR, MIN_CHAR};

type PResult<T> = Result<T, Status>;

/// Parse `bytes` as a whole pattern, building its NFA in a fresh
/// [`StateStore`]. Returns the parse result paired with the offset the
/// cursor stopped at — set unconditionally, on both the success and
/// error paths, so callers always know how much of the pattern was
/// consumed.
pub(crate) fn parse(
    bytes: &[u8],
    limits: Limits,
) -> (PResult<(StateStore, Fragment)>, usize) {
    if bytes.len() > limits.max_pattern_len {
        return (Err(Status::NoMemory), 0);
    }

    let mut parser = Parser::new(bytes, limits);
    let result = parser.read_expr();
    let offset = parser.input.offset;
    (result.map(move |fragment| (parser.states, fragment)), offset)
}

/// Cursor over a pattern's bytes.
///
/// The engine's character set is a strict subset of ASCII, so operating
/// byte-wise over `&[u8]` is lossless and sidesteps UTF-8 decoding
/// entirely in the hot path.
struct Input<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Input<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Input { bytes, offset: 0 }
    }

    /// The current byte, or `0` past the end of input — standing in for
    /// a C NUL terminator. `0x00` falls outside the supported character
    /// class, so it can never be confused with a legal pattern byte.
    fn peek(&self) -> u8 {
        self.bytes.get(self.offset).copied().unwrap_or(0)
    }

    /// The byte one past `peek`, used only to resolve the ambiguity of
    /// `-` immediately before `]` inside a bracket set.
    fn peekahead(&self) -> u8 {
        self.bytes.get(self.offset + 1).copied().unwrap_or(0)
    }

    fn eat(&mut self) -> u8 {
        let c = self.peek();
        self.offset += 1;
        c
    }
}

fn is_special(c: u8) -> bool {
    matches!(
        c,
        b'(' | b')' | b'*' | b'+' | b'.' | b'?' | b'[' | b']' | b'^' | b'{' | b'|' | b'}'
    )
}

struct Parser<'a> {
    input: Input<'a>,
    states: StateStore,
    limits: Limits,
    depth: u32,
}

impl<'a> Parser<'a> {
    fn new(bytes: &'a [u8], limits: Limits) -> Self {
        Parser { input: Input::new(bytes), states: StateStore::new(), limits, depth: 0 }
    }

    /// Bounds recursion depth across nested groups, alternation, and flat
    /// concatenation chains (`read_term` recurses once per atom in a
    /// sequence). Not part of the original engine's contract; an ambient
    /// addition so a pathological pattern can't blow the call stack.
    fn recurse<T>(&mut self, f: impl FnOnce(&mut Self) -> PResult<T>) -> PResult<T> {
        self.depth += 1;
        if self.depth > self.limits.max_depth {
            self.depth -= 1;
            return Err(Status::NoMemory);
        }
        let result = f(self);
        self.depth -= 1;
        result
    }

    // Escape ::= '\' (Special | '-')
    fn read_escape(&mut self) -> PResult<u8> {
        debug_assert_eq!(self.input.peek(), b'\\');
        self.input.eat();
        let c = self.input.peek();
        if is_special(c) || c == b'-' {
            Ok(self.input.eat())
        } else {
            Err(Status::ExpectedSpecial)
        }
    }

    // Char ::= Escape | [#x20-#x7E] - Special
    fn read_char(&mut self) -> PResult<u8> {
        let c = self.input.peek();
        if c == 0 {
            return Err(Status::UnexpectedEnd);
        }
        if c == b'\\' {
            return self.read_escape();
        }
        if is_special(c) {
            return Err(Status::UnexpectedSpecial);
        }
        if (MIN_CHAR..=MAX_CHAR).contains(&c) {
            return Ok(self.input.eat());
        }
        Err(Status::ExpectedChar)
    }

    // Element ::= ([#x20-#x7E] - ']') | ('\' ']')
    fn read_element(&mut self) -> PResult<u8> {
        let c = self.input.peek();
        if c == 0 {
            return Err(Status::UnexpectedEnd);
        }
        if c == b']' {
            return Err(Status::UnexpectedSpecial);
        }
        if c == b'\\' {
            self.input.eat();
            if self.input.peek() != b']' {
                return Err(Status::ExpectedRBracket);
            }
            return Ok(self.input.eat());
        }
        if (MIN_CHAR..=MAX_CHAR).contains(&c) {
            return Ok(self.input.eat());
        }
        Err(Status::ExpectedElement)
    }

    // Dot ::= '.'
    fn read_dot(&mut self) -> Fragment {
        debug_assert_eq!(self.input.peek(), b'.');
        self.input.eat();
        let end = self.states.match_state();
        let start = self.states.range_state(MIN_CHAR, MAX_CHAR, end);
        Fragment::new(start, end)
    }

    // Range ::= Element ('-' Element)?
    //
    // The '-' is only special if followed by an element other than ']';
    // a '-' immediately before ']' is a literal (e.g. "[+-]").
    fn read_range(&mut self, negated: bool) -> PResult<Fragment> {
        let min = self.read_element()?;
        let mut max = min;
        if self.input.peek() == b'-' && self.input.peekahead() != b']' {
            self.input.eat();
            max = self.read_element()?;
        }
        if max < min {
            return Err(Status::UnorderedRange);
        }

        let end = self.states.match_state();
        if negated {
            // MIN_CHAR < min and max < MAX_CHAR never wrap: min/max are
            // already bounded to [MIN_CHAR, MAX_CHAR] by read_element.
            // When min == MIN_CHAR (or max == MAX_CHAR) the corresponding
            // half is an intentionally vacuous range (low_max < MIN_CHAR
            // or high_min > MAX_CHAR) that matches nothing.
            let low_max = min - 1;
            let high_min = max + 1;
            let low = self.states.range_state(MIN_CHAR, low_max, end);
            let high = self.states.range_state(high_min, MAX_CHAR, end);
            let fork = self.states.split_state(low, high);
            Ok(Fragment::new(fork, end))
        } else {
            let start = self.states.range_state(min, max, end);
            Ok(Fragment::new(start, end))
        }
    }

    // Set ::= '^'? Range Range*
    fn read_set(&mut self) -> PResult<Fragment> {
        let negated = if self.input.peek() == b'^' {
            self.input.eat();
            true
        } else {
            false
        };

        let mut set = self.read_range(negated)?;
        while self.input.peek() != b']' {
            let range = self.read_range(negated)?;
            set = nfa::alternate(&mut self.states, set, range);
        }
        Ok(set)
    }

    // Atom ::= Char | '.' | '(' Expr ')' | '[' Set ']'
    fn read_atom(&mut self) -> PResult<Fragment> {
        self.recurse(Self::read_atom_uncounted)
    }

    fn read_atom_uncounted(&mut self) -> PResult<Fragment> {
        let c = self.input.peek();

        if c == b'(' {
            self.input.eat();
            let inner = self.read_expr()?;
            if self.input.peek() != b')' {
                return Err(Status::ExpectedRParen);
            }
            self.input.eat();
            return Ok(inner);
        }

        if c == b'.' {
            return Ok(self.read_dot());
        }

        if c == b'[' {
            self.input.eat();
            let set = self.read_set()?;
            self.input.eat(); // the ']' that ended read_set's loop
            return Ok(set);
        }

        let c = self.read_char()?;
        let end = self.states.match_state();
        let start = self.states.range_state(c, c, end);
        Ok(Fragment::new(start, end))
    }

    // Factor ::= Atom ('*' | '+' | '?')?
    fn read_factor(&mut self) -> PResult<Fragment> {
        let atom = self.read_atom()?;
        match self.input.peek() {
            b'*' => {
                self.input.eat();
                Ok(nfa::star(&mut self.states, atom))
            }
            b'+' => {
                self.input.eat();
                Ok(nfa::plus(&mut self.states, atom))
            }
            b'?' => {
                self.input.eat();
                Ok(nfa::question(&mut self.states, atom))
            }
            _ => Ok(atom),
        }
    }

    // Term ::= Factor Term?
    fn read_term(&mut self) -> PResult<Fragment> {
        self.recurse(Self::read_term_uncounted)
    }

    fn read_term_uncounted(&mut self) -> PResult<Fragment> {
        let factor = self.read_factor()?;
        match self.input.peek() {
            0 | b')' | b'|' => Ok(factor),
            _ => {
                let term = self.read_term()?;
                Ok(nfa::concat(&mut self.states, factor, term))
            }
        }
    }

    // Expr ::= Term ('|' Expr)?
    fn read_expr(&mut self) -> PResult<Fragment> {
        self.recurse(Self::read_expr_uncounted)
    }

    fn read_expr_uncounted(&mut self) -> PResult<Fragment> {
        let term = self.read_term()?;
        if self.input.peek() == b'|' {
            self.input.eat();
            let expr = self.read_expr()?;
            Ok(nfa::alternate(&mut self.states, term, expr))
        } else {
            Ok(term)
        }
    }
}
