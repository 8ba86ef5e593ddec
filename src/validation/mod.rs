//! Well-formedness checks and the validated-automaton wrapper.
//!
//! [`validate`] runs the fixed check order below and stops at the first
//! violation:
//!
//! 1. token character-set conformance (and the `eps` reservation)
//! 2. referential integrity of initial, accepting, and transition endpoints
//! 3. no duplicate raw transition triples
//! 4. determinism (declared-deterministic automata only), fused with
//! 5. reachability of every state from the initial state
//!
//! Steps 4 and 5 share a single iterative depth-first traversal, so
//! validation is O(states + transitions). The traversal uses an explicit
//! stack and a visited arena indexed by [`StateId`].

use crate::automaton::{Fsa, FsaKind, StateId, EPS};
use crate::error::{FsaError, Result};
use rustc_hash::{FxHashMap, FxHashSet};

/// A validated automaton.
///
/// Values of this type are produced only by [`validate`]; holding one is
/// proof that every invariant of the model has been checked. The synthesizer
/// accepts only this type.
#[derive(Debug, Clone)]
pub struct ValidatedFsa {
    fsa: Fsa,
    index: FxHashMap<String, StateId>,
    initial_id: StateId,
    accepting_ids: Vec<StateId>,
}

impl ValidatedFsa {
    /// States in declaration order.
    pub fn states(&self) -> &[String] {
        self.fsa.states()
    }

    /// Alphabet in declaration order.
    pub fn alphabet(&self) -> &[String] {
        self.fsa.alphabet()
    }

    /// The initial state.
    pub fn initial(&self) -> &str {
        self.fsa.initial()
    }

    /// Accepting states in declaration order.
    pub fn accepting(&self) -> &[String] {
        self.fsa.accepting()
    }

    /// Merged outgoing edges of `state`; see
    /// [`Fsa::transitions_from`](crate::automaton::Fsa::transitions_from).
    pub fn transitions_from(&self, state: &str) -> &[crate::automaton::SymbolEdges] {
        self.fsa.transitions_from(state)
    }

    /// Index of a declared state in the enumeration order.
    pub fn state_id(&self, state: &str) -> Option<StateId> {
        self.index.get(state).copied()
    }

    pub(crate) fn initial_id(&self) -> StateId {
        self.initial_id
    }

    pub(crate) fn accepting_ids(&self) -> &[StateId] {
        &self.accepting_ids
    }

    /// Run the automaton over a sequence of symbols.
    ///
    /// Subset simulation: the current state set starts at the initial state
    /// and is stepped through the merged table once per input symbol. The
    /// input is accepted iff the final set contains an accepting state.
    /// Symbols outside the alphabet have no targets, so they reject.
    pub fn accepts(&self, input: &[&str]) -> bool {
        let states = self.fsa.states();
        let mut current: FxHashSet<StateId> = FxHashSet::default();
        current.insert(self.initial_id);

        for symbol in input {
            let mut next: FxHashSet<StateId> = FxHashSet::default();
            for &s in &current {
                for target in self.fsa.targets(&states[s], symbol) {
                    if let Some(id) = self.state_id(target) {
                        next.insert(id);
                    }
                }
            }
            if next.is_empty() {
                return false;
            }
            current = next;
        }

        current.iter().any(|&s| self.accepting_ids.contains(&s))
    }
}

fn valid_token(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn check_token(token: &str, role: &str) -> Result<()> {
    if valid_token(token) {
        Ok(())
    } else {
        Err(FsaError::MalformedInput(format!(
            "{role} token '{token}' is not a word over letters, digits and '_'"
        )))
    }
}

/// Check an assembled automaton and wrap it as a [`ValidatedFsa`].
///
/// See the module documentation for the check order. The first violation is
/// returned as the corresponding [`FsaError`] kind; nothing is aggregated.
pub fn validate(fsa: Fsa) -> Result<ValidatedFsa> {
    // 1. structural: token shapes, eps reservation
    for state in fsa.states() {
        check_token(state, "state")?;
    }
    for symbol in fsa.alphabet() {
        check_token(symbol, "alphabet")?;
        if symbol == EPS {
            return Err(FsaError::MalformedInput(format!(
                "'{EPS}' is reserved for the empty string and may not appear in the alphabet"
            )));
        }
    }
    check_token(fsa.initial(), "initial state")?;
    for state in fsa.accepting() {
        check_token(state, "accepting state")?;
    }
    for record in fsa.records() {
        check_token(&record.from, "transition source")?;
        check_token(&record.through, "transition symbol")?;
        check_token(&record.to, "transition target")?;
    }

    // 2. referential integrity
    let index: FxHashMap<String, StateId> = fsa
        .states()
        .iter()
        .enumerate()
        .map(|(i, s)| (s.clone(), i))
        .collect();
    let symbols: FxHashSet<&str> = fsa.alphabet().iter().map(String::as_str).collect();

    let initial_id = *index
        .get(fsa.initial())
        .ok_or_else(|| FsaError::UnknownState(fsa.initial().to_owned()))?;
    let accepting_ids = fsa
        .accepting()
        .iter()
        .map(|a| {
            index
                .get(a)
                .copied()
                .ok_or_else(|| FsaError::UnknownState(a.clone()))
        })
        .collect::<Result<Vec<StateId>>>()?;
    for record in fsa.records() {
        if !index.contains_key(&record.from) {
            return Err(FsaError::UnknownState(record.from.clone()));
        }
        if !index.contains_key(&record.to) {
            return Err(FsaError::UnknownState(record.to.clone()));
        }
        if !symbols.contains(record.through.as_str()) {
            return Err(FsaError::UnknownSymbol(record.through.clone()));
        }
    }

    // 3. duplicate raw triples are a format error, not silently merged
    let mut seen: FxHashSet<(&str, &str, &str)> = FxHashSet::default();
    for record in fsa.records() {
        if !seen.insert((&record.from, &record.through, &record.to)) {
            return Err(FsaError::MalformedInput(format!(
                "duplicate transition '{}>{}>{}'",
                record.from, record.through, record.to
            )));
        }
    }

    // 4 + 5. one depth-first pass: determinism at every visited state,
    // then full reachability
    let states = fsa.states();
    let mut visited = vec![false; states.len()];
    let mut stack: Vec<StateId> = vec![initial_id];
    visited[initial_id] = true;

    while let Some(s) = stack.pop() {
        for edge in fsa.transitions_from(&states[s]) {
            if fsa.kind() == FsaKind::Deterministic && edge.targets().len() > 1 {
                return Err(FsaError::NonDeterministic {
                    state: states[s].clone(),
                    symbol: edge.through().to_owned(),
                });
            }
            for target in edge.targets() {
                // endpoints were resolved in step 2
                if let Some(&id) = index.get(target) {
                    if !visited[id] {
                        visited[id] = true;
                        stack.push(id);
                    }
                }
            }
        }
    }

    if visited.iter().any(|&v| !v) {
        return Err(FsaError::DisjointAutomaton);
    }

    Ok(ValidatedFsa {
        fsa,
        index,
        initial_id,
        accepting_ids,
    })
}
