//! Error types shared by the loader, the model, and the validator.

use thiserror::Error;

/// Errors that can occur while assembling or validating an automaton.
///
/// The enumeration is closed: every failure surfaced by the crate is one of
/// these kinds. Validation reports the first violation it encounters under
/// the fixed check order and stops; no partial results are produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FsaError {
    /// The description violates the declaration grammar (empty required
    /// field, blank or ill-formed token, duplicate raw transition triple).
    #[error("input is malformed: {0}")]
    MalformedInput(String),

    /// The initial-state declaration is empty.
    #[error("initial state is not defined")]
    UndefinedInitialState,

    /// The accepting-state set is declared but empty.
    #[error("set of accepting states is empty")]
    EmptyAcceptingSet,

    /// A referenced state is not in the declared set of states.
    #[error("state '{0}' is not in the set of states")]
    UnknownState(String),

    /// A transition symbol is not in the declared alphabet.
    #[error("transition symbol '{0}' is not in the alphabet")]
    UnknownSymbol(String),

    /// The automaton is declared deterministic but some (state, symbol)
    /// pair has more than one target.
    #[error("FSA is non-deterministic: state '{state}' has multiple targets over '{symbol}'")]
    NonDeterministic {
        /// State at which the violation was observed.
        state: String,
        /// Symbol with more than one recorded target.
        symbol: String,
    },

    /// Some declared state is unreachable from the initial state.
    #[error("some states are disjoint: not reachable from the initial state")]
    DisjointAutomaton,
}

/// A specialized `Result` type for automaton operations.
pub type Result<T> = std::result::Result<T, FsaError>;
