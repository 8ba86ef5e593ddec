//! # libkleene
//!
//! Translation of finite-state automata into equivalent regular expressions
//! using the transitive-closure state-elimination construction.
//!
//! A translation runs in three stages: an automaton is assembled from raw
//! records (or decoded from the six-declaration text format), validated, and
//! handed to the synthesizer, which emits a regular expression over the
//! automaton's alphabet plus the `eps` empty-string atom. The synthesizer
//! only accepts validated automata, so an unvalidated value can never reach
//! it.
//!
//! ## Example
//!
//! ```rust,ignore
//! use libkleene::prelude::*;
//!
//! let fsa = parse_description(
//!     "type=[non-deterministic]\n\
//!      states=[q0,q1]\n\
//!      alphabet=[0,1]\n\
//!      initial=[q0]\n\
//!      accepting=[q1]\n\
//!      transitions=[q0>0>q0,q0>1>q1]",
//! )?;
//! let fsa = validate(fsa)?;
//! println!("{}", synthesize(&fsa));
//! ```
//!
//! Each call owns its automaton and produces its own string; the crate keeps
//! no global state, so independent translations may run on independent
//! threads.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod automaton;
pub mod error;
pub mod format;
pub mod regex;
pub mod validation;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::automaton::{Fsa, FsaKind, TransitionRecord};
    pub use crate::error::FsaError;
    pub use crate::format::parse_description;
    pub use crate::regex::synthesize;
    pub use crate::validation::{validate, ValidatedFsa};
}
