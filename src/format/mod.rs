//! Reader for the serialized automaton description.
//!
//! The format is six declarations in fixed order, one per line, each a
//! bracketed `name=[...]` form with comma-separated tokens:
//!
//! ```text
//! type=[non-deterministic]
//! states=[q0,q1]
//! alphabet=[0,1]
//! initial=[q0]
//! accepting=[q1]
//! transitions=[q0>0>q0,q0>1>q1]
//! ```
//!
//! The reader is purely syntactic: it decodes the declarations and hands the
//! record set to the model. Membership, determinism, reachability, and
//! duplicate-triple checks belong to [`crate::validation`].

use crate::automaton::{Fsa, FsaKind, TransitionRecord};
use crate::error::{FsaError, Result};

/// Decode a six-declaration description into an assembled [`Fsa`].
///
/// # Errors
///
/// [`FsaError::MalformedInput`] for any violation of the line grammar: a
/// missing or misnamed declaration, a blank list entry, an unknown kind
/// literal, a transition entry that is not exactly `from>symbol>to`, an
/// empty transitions list, or trailing content after the six lines. An empty
/// initial declaration is [`FsaError::UndefinedInitialState`]; an empty
/// accepting list is [`FsaError::EmptyAcceptingSet`].
pub fn parse_description(input: &str) -> Result<Fsa> {
    let mut lines = input.lines();

    let kind: FsaKind = unwrap_line(next_line(&mut lines, "type")?, "type")?.parse()?;
    let states = split_list(
        unwrap_line(next_line(&mut lines, "states")?, "states")?,
        "states",
    )?;
    let alphabet = split_list(
        unwrap_line(next_line(&mut lines, "alphabet")?, "alphabet")?,
        "alphabet",
    )?;

    let initial = unwrap_line(next_line(&mut lines, "initial")?, "initial")?;
    if initial.contains(',') {
        return Err(FsaError::MalformedInput(
            "the initial declaration must name a single state".into(),
        ));
    }

    let accepting = split_list(
        unwrap_line(next_line(&mut lines, "accepting")?, "accepting")?,
        "accepting",
    )?;

    let entries = split_list(
        unwrap_line(next_line(&mut lines, "transitions")?, "transitions")?,
        "transitions",
    )?;
    if entries.is_empty() {
        return Err(FsaError::MalformedInput(
            "the transitions declaration is empty".into(),
        ));
    }
    let records = entries
        .iter()
        .map(|e| parse_record(e))
        .collect::<Result<Vec<TransitionRecord>>>()?;

    if lines.any(|l| !l.trim().is_empty()) {
        return Err(FsaError::MalformedInput(
            "unexpected content after the transitions declaration".into(),
        ));
    }

    Fsa::new(kind, states, alphabet, initial.to_owned(), accepting, records)
}

fn next_line<'a>(lines: &mut std::str::Lines<'a>, key: &str) -> Result<&'a str> {
    lines
        .next()
        .ok_or_else(|| FsaError::MalformedInput(format!("missing '{key}' declaration")))
}

/// Strip `key=[` and `]` from a declaration line, tolerating a trailing
/// carriage return.
fn unwrap_line<'a>(line: &'a str, key: &str) -> Result<&'a str> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    line.strip_prefix(key)
        .and_then(|rest| rest.strip_prefix("=["))
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| FsaError::MalformedInput(format!("expected a '{key}=[...]' declaration")))
}

/// Split a bracketed body into tokens. An empty body is an empty list; a
/// blank entry between commas is a grammar violation.
fn split_list(body: &str, key: &str) -> Result<Vec<String>> {
    if body.is_empty() {
        return Ok(Vec::new());
    }
    let items: Vec<String> = body.split(',').map(str::to_owned).collect();
    if items.iter().any(|t| t.is_empty()) {
        return Err(FsaError::MalformedInput(format!(
            "blank entry in the '{key}' declaration"
        )));
    }
    Ok(items)
}

fn parse_record(entry: &str) -> Result<TransitionRecord> {
    let mut parts = entry.split('>');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(from), Some(through), Some(to), None)
            if !from.is_empty() && !through.is_empty() && !to.is_empty() =>
        {
            Ok(TransitionRecord::new(from, through, to))
        }
        _ => Err(FsaError::MalformedInput(format!(
            "transition '{entry}' is not of the form from>symbol>to"
        ))),
    }
}
