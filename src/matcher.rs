//! Matching: a two-frontier NFA simulation bound to one [`Pattern`].

use crate::pattern::Pattern;
use crate::state::{State, StateId, NULL};

/// Sentinel meaning "never entered in any iteration", distinct from every
/// real iteration index (iteration indices start at 0 and are reset to 0
/// at the start of every [`Matcher::is_match`] call).
const NEVER: usize = usize::MAX;

/// Simulates a [`Pattern`]'s NFA against input strings.
///
/// Bound to one pattern, reusable across many calls to [`is_match`].
/// Construction sizes two frontier buffers and an auxiliary "last entered
/// at iteration" array to the pattern's state count; matching itself
/// never allocates and never fails — all fallible work happens at
/// compile time (see [`crate::compile`]).
///
/// [`is_match`]: Matcher::is_match
#[derive(Debug)]
pub struct Matcher<'p> {
    pattern: &'p Pattern,
    // Two frontiers of active state ids, indexed by `phase` (0 or 1) and
    // swapped each input byte rather than copied.
    active: [Vec<StateId>; 2],
    // last_active[s] == i means state `s` was already entered during
    // iteration `i`, so `enter_state` can skip it without searching the
    // frontier list.
    last_active: Box<[usize]>,
}

impl<'p> Matcher<'p> {
    /// Create a matcher bound to `pattern`.
    pub fn new(pattern: &'p Pattern) -> Self {
        let n = pattern.state_count();
        tracing::trace!(target: "tnfa::matcher", state_count = n, "constructing matcher");
        Matcher {
            pattern,
            active: [Vec::with_capacity(n), Vec::with_capacity(n)],
            last_active: vec![NEVER; n].into_boxed_slice(),
        }
    }

    /// Returns whether `string` fully matches this matcher's pattern.
    ///
    /// Matching is always whole-string: there is no anchoring flag and no
    /// partial-match mode, because the engine performs neither (see the
    /// crate's non-goals). Calling this repeatedly with different inputs
    /// on the same matcher is equivalent to constructing a fresh matcher
    /// for each call — every call resets the frontiers and the
    /// last-active bookkeeping before doing any work.
    pub fn is_match(&mut self, string: &str) -> bool {
        for list in &mut self.active {
            list.clear();
        }
        self.last_active.fill(NEVER);

        let mut phase = 0usize;
        self.enter_state(self.pattern.start(), 0, phase);

        for (i, &byte) in string.as_bytes().iter().enumerate() {
            let next_phase = 1 - phase;
            self.active[next_phase].clear();

            let mut j = 0;
            while j < self.active[phase].len() {
                let id = self.active[phase][j];
                if let State::Range { min, max, next1 } = *self.pattern.state(id) {
                    if min <= byte && byte <= max {
                        self.enter_state(next1, i + 1, next_phase);
                    }
                }
                j += 1;
            }

            phase = next_phase;
        }

        self.active[phase]
            .iter()
            .any(|&id| matches!(self.pattern.state(id), State::Match))
    }

    /// Epsilon closure: add `id`, and transitively every state reachable
    /// from it by epsilon (split) arcs, to `self.active[phase]`. Visits
    /// each state at most once per `step`, bounding closure cost by the
    /// pattern's state count.
    fn enter_state(&mut self, id: StateId, step: usize, phase: usize) {
        if id == NULL || self.last_active[id as usize] == step {
            return;
        }
        self.last_active[id as usize] = step;

        match *self.pattern.state(id) {
            State::Split { next1, next2 } => {
                self.enter_state(next1, step, phase);
                self.enter_state(next2, step, phase);
            }
            State::Match | State::Range { .. } => {
                self.active[phase].push(id);
            }
        }
    }
}
