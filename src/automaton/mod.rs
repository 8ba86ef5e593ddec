//! Automaton model: states, alphabet, and the merged transition table.
//!
//! The model performs structural assembly only: repeated `(from, symbol)`
//! pairs are merged into a single record whose target set is the union of
//! the destinations, and every collection keeps first-seen declaration order
//! so downstream output is reproducible. Business-rule validation lives in
//! [`crate::validation`].

use crate::error::{FsaError, Result};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Index of a state in declaration order.
pub type StateId = usize;

/// Reserved empty-string marker.
///
/// Never part of a declared alphabet; the synthesizer introduces it as the
/// self-loop identity of every state.
pub const EPS: &str = "eps";

/// Whether the automaton is declared deterministic.
///
/// The kind is declared by the description, never inferred. The validator
/// checks the declaration against the actual transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsaKind {
    /// At most one target per (state, symbol) pair.
    Deterministic,
    /// Possibly multiple targets per (state, symbol) pair.
    NonDeterministic,
}

impl FromStr for FsaKind {
    type Err = FsaError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "deterministic" => Ok(FsaKind::Deterministic),
            "non-deterministic" => Ok(FsaKind::NonDeterministic),
            other => Err(FsaError::MalformedInput(format!(
                "unknown automaton kind '{other}'"
            ))),
        }
    }
}

impl fmt::Display for FsaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsaKind::Deterministic => f.write_str("deterministic"),
            FsaKind::NonDeterministic => f.write_str("non-deterministic"),
        }
    }
}

/// One raw `from > symbol > to` transition as supplied by the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRecord {
    /// Source state.
    pub from: String,
    /// Transition symbol.
    pub through: String,
    /// Target state.
    pub to: String,
}

impl TransitionRecord {
    /// Create a record from the three tokens of a transition entry.
    pub fn new(
        from: impl Into<String>,
        through: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            through: through.into(),
            to: to.into(),
        }
    }
}

/// Merged targets of one state over one symbol, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEdges {
    through: String,
    to: SmallVec<[String; 2]>,
}

impl SymbolEdges {
    /// The transition symbol.
    pub fn through(&self) -> &str {
        &self.through
    }

    /// Target states, first-seen order, duplicates dropped.
    pub fn targets(&self) -> &[String] {
        &self.to
    }

    fn push(&mut self, to: &str) {
        if !self.to.iter().any(|t| t == to) {
            self.to.push(to.to_owned());
        }
    }
}

/// An assembled (but not yet validated) finite-state automaton.
///
/// Built once from a loader-supplied record set, then treated as immutable.
/// Construction only establishes what is needed to assemble the merged
/// table; pass the value to [`crate::validation::validate`] before synthesis.
#[derive(Debug, Clone)]
pub struct Fsa {
    kind: FsaKind,
    states: Vec<String>,
    alphabet: Vec<String>,
    initial: String,
    accepting: Vec<String>,
    records: Vec<TransitionRecord>,
    table: Vec<(String, Vec<SymbolEdges>)>,
}

impl Fsa {
    /// Assemble an automaton from raw records.
    ///
    /// Duplicate entries within `states`, `alphabet`, and `accepting` are
    /// dropped first-seen; repeated `(from, symbol)` transition pairs are
    /// merged into one target set. The record list may be empty (a
    /// single-state automaton has no edges); the sets may not:
    ///
    /// # Errors
    ///
    /// - [`FsaError::MalformedInput`] if `states` or `alphabet` is empty
    /// - [`FsaError::UndefinedInitialState`] if `initial` is blank
    /// - [`FsaError::EmptyAcceptingSet`] if `accepting` is empty
    pub fn new(
        kind: FsaKind,
        states: Vec<String>,
        alphabet: Vec<String>,
        initial: String,
        accepting: Vec<String>,
        records: Vec<TransitionRecord>,
    ) -> Result<Self> {
        if states.is_empty() {
            return Err(FsaError::MalformedInput("set of states is empty".into()));
        }
        if alphabet.is_empty() {
            return Err(FsaError::MalformedInput("alphabet is empty".into()));
        }
        if initial.is_empty() {
            return Err(FsaError::UndefinedInitialState);
        }
        if accepting.is_empty() {
            return Err(FsaError::EmptyAcceptingSet);
        }

        let mut table: Vec<(String, Vec<SymbolEdges>)> = Vec::new();
        for record in &records {
            let row_idx = match table.iter().position(|(from, _)| *from == record.from) {
                Some(idx) => idx,
                None => {
                    table.push((record.from.clone(), Vec::new()));
                    table.len() - 1
                }
            };
            let row = &mut table[row_idx].1;
            match row.iter_mut().find(|e| e.through == record.through) {
                Some(edge) => edge.push(&record.to),
                None => {
                    let mut edge = SymbolEdges {
                        through: record.through.clone(),
                        to: SmallVec::new(),
                    };
                    edge.push(&record.to);
                    row.push(edge);
                }
            }
        }

        Ok(Self {
            kind,
            states: dedup_first_seen(states),
            alphabet: dedup_first_seen(alphabet),
            initial,
            accepting: dedup_first_seen(accepting),
            records,
            table,
        })
    }

    /// Declared kind.
    pub fn kind(&self) -> FsaKind {
        self.kind
    }

    /// States in declaration order. This is the enumeration the synthesizer
    /// threads through the elimination loop.
    pub fn states(&self) -> &[String] {
        &self.states
    }

    /// Alphabet in declaration order.
    pub fn alphabet(&self) -> &[String] {
        &self.alphabet
    }

    /// The initial state.
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// Accepting states in declaration order.
    pub fn accepting(&self) -> &[String] {
        &self.accepting
    }

    /// Raw transition records as supplied, before merging.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    /// Merged outgoing edges of `state`, one entry per symbol, first-seen
    /// order. Empty for states without outgoing transitions.
    pub fn transitions_from(&self, state: &str) -> &[SymbolEdges] {
        self.table
            .iter()
            .find(|(from, _)| from == state)
            .map(|(_, row)| row.as_slice())
            .unwrap_or(&[])
    }

    /// Merged targets of `from` over `through`, or an empty slice.
    pub fn targets(&self, from: &str, through: &str) -> &[String] {
        self.transitions_from(from)
            .iter()
            .find(|e| e.through == through)
            .map(SymbolEdges::targets)
            .unwrap_or(&[])
    }
}

fn dedup_first_seen(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}
