//! The state arena: NFA states stored in a single append-only vector and
//! referenced by integer id rather than by pointer, so the (necessarily
//! cyclic, for `*`/`+`) NFA graph lives in one flat allocation.

/// Identifies a state within a [`StateStore`].
///
/// Index `0` is reserved and never assigned to a real state, so a
/// `StateId` doubles as its own "null" sentinel without an `Option`
/// wrapper — this is what lets a [`crate::nfa::Fragment`]'s out-arcs be
/// left unset until a combinator patches them in.
pub type StateId = u32;

/// The reserved null state id.
pub const NULL: StateId = 0;

/// Inclusive lower bound of the supported character class (printable
/// ASCII).
pub const MIN_CHAR: u8 = 0x20;

/// Inclusive upper bound of the supported character class (printable
/// ASCII).
pub const MAX_CHAR: u8 = 0x7E;

/// A single NFA state.
///
/// The original engine this is modeled on represents a state as a
/// four-field record (`next1`, `next2`, `min`, `max`) with two reserved
/// sentinel values of `min` distinguishing match/split states from
/// labeled range states, because C has no tagged unions. Rust does, so
/// the three variants are represented directly and illegal combinations
/// (e.g. a match state with successors) are simply unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Terminal state with no successors. A string matches iff a `Match`
    /// state is active in the frontier after the last input byte.
    Match,
    /// Up to two epsilon (unlabeled) out-arcs; either may be [`NULL`].
    Split { next1: StateId, next2: StateId },
    /// A single labeled out-arc to `next1`, taken iff the input byte `c`
    /// satisfies `min <= c <= max`.
    ///
    /// `min` may exceed `max` for states synthesized to represent a
    /// vacuous (never-matching) arc at the edge of the character class —
    /// see the negated-range construction in [`crate::parser`].
    Range { min: u8, max: u8, next1: StateId },
}

/// Append-only arena of [`State`]s, indexed by [`StateId`].
///
/// States are never removed, and are mutated only by the NFA combinators
/// rewriting a fragment's `end` state in place (see [`crate::nfa`]) — the
/// store itself only ever grows.
#[derive(Debug, Default)]
pub struct StateStore {
    states: Vec<State>,
}

impl StateStore {
    /// Create a store already containing the reserved null placeholder at
    /// index 0, so no real state is ever assigned id 0.
    pub fn new() -> Self {
        let mut states = Vec::new();
        states.push(State::Split { next1: NULL, next2: NULL });
        StateStore { states }
    }

    /// Append `state`, returning its freshly assigned id.
    pub fn add(&mut self, state: State) -> StateId {
        let id = self.states.len();
        self.states.push(state);
        StateId::try_from(id).expect("state arena exceeds u32::MAX entries")
    }

    pub fn match_state(&mut self) -> StateId {
        self.add(State::Match)
    }

    pub fn split_state(&mut self, next1: StateId, next2: StateId) -> StateId {
        self.add(State::Split { next1, next2 })
    }

    pub fn range_state(&mut self, min: u8, max: u8, next1: StateId) -> StateId {
        self.add(State::Range { min, max, next1 })
    }

    /// Overwrite the state at `id` in place. Used by the combinators to
    /// turn a fragment's `end` state into the split that continues the
    /// construction, per Thompson's in-place patching technique (no
    /// separate patch list).
    pub fn rewrite(&mut self, id: StateId, state: State) {
        self.states[id as usize] = state;
    }

    pub fn get(&self, id: StateId) -> &State {
        &self.states[id as usize]
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_reserves_null_id() {
        let store = StateStore::new();
        assert_eq!(store.len(), 1);
        assert_eq!(*store.get(NULL), State::Split { next1: NULL, next2: NULL });
    }

    #[test]
    fn add_assigns_increasing_ids() {
        let mut store = StateStore::new();
        let a = store.match_state();
        let b = store.match_state();
        assert_eq!(a, 1);
        assert_eq!(b, 2);
    }

    #[test]
    fn rewrite_replaces_state_in_place() {
        let mut store = StateStore::new();
        let id = store.match_state();
        store.rewrite(id, State::Split { next1: 5, next2: 6 });
        assert_eq!(*store.get(id), State::Split { next1: 5, next2: 6 });
    }
}
