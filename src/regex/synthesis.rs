//! Transitive-closure state elimination.
//!
//! R⁽ᵏ⁾(i, j) holds an expression for exactly the paths from state i to
//! state j whose intermediate states are drawn from the first k states of
//! the enumeration. Round k folds state k in as a hub:
//!
//! ```text
//! R⁽ᵏ⁾(i,j) = (R⁽ᵏ⁻¹⁾(i,k))(R⁽ᵏ⁻¹⁾(k,k))*(R⁽ᵏ⁻¹⁾(k,j)) | (R⁽ᵏ⁻¹⁾(i,j))
//! ```
//!
//! After all states have served as hubs the answer is read off the row of
//! the initial state at the accepting-state columns.

use super::Term;
use crate::automaton::EPS;
use crate::validation::ValidatedFsa;

/// Translate a validated automaton into an equivalent regular expression.
///
/// The output uses alternation `|`, implicit concatenation, postfix `*`
/// over parenthesized groups, and the `eps` atom for the empty string. Every
/// starred or alternated sub-expression is parenthesized at the point of
/// combination, so no operator precedence is relied upon. The text depends
/// only on declaration order; repeated calls yield byte-identical strings.
/// The expression denotes exactly the accepted language and is not
/// simplified.
pub fn synthesize(fsa: &ValidatedFsa) -> String {
    let n = fsa.states().len();
    let mut r = base_matrix(fsa);

    for k in 0..n {
        let mut next = vec![Term::Empty; n * n];
        for i in 0..n {
            for j in 0..n {
                next[i * n + j] =
                    eliminate(&r[i * n + k], &r[k * n + k], &r[k * n + j], &r[i * n + j]);
            }
        }
        r = next;
    }

    let init = fsa.initial_id();
    let mut parts: Vec<&str> = Vec::with_capacity(fsa.accepting_ids().len());
    for &a in fsa.accepting_ids() {
        // reachability of a from the initial state guarantees a non-empty
        // closure cell
        if let Term::Expr(text) = &r[init * n + a] {
            parts.push(text);
        }
    }
    format!("({})", parts.join(")|("))
}

/// R⁽⁰⁾: for each ordered pair (i, j), the alternation of the symbols on
/// edges i→j, plus `eps` on the diagonal. Pairs without edges are the empty
/// language, not a placeholder token.
fn base_matrix(fsa: &ValidatedFsa) -> Vec<Term> {
    let n = fsa.states().len();
    let mut symbols: Vec<Vec<&str>> = vec![Vec::new(); n * n];

    for (i, state) in fsa.states().iter().enumerate() {
        for edge in fsa.transitions_from(state) {
            for target in edge.targets() {
                if let Some(j) = fsa.state_id(target) {
                    symbols[i * n + j].push(edge.through());
                }
            }
        }
    }
    for i in 0..n {
        symbols[i * n + i].push(EPS);
    }

    symbols
        .into_iter()
        .map(|syms| {
            if syms.is_empty() {
                Term::Empty
            } else {
                Term::Expr(syms.join("|"))
            }
        })
        .collect()
}

/// One cell of the inductive step.
///
/// The via-term exists only when all three of its factors are non-empty; an
/// empty factor annihilates the whole concatenation. The direct term is
/// carried over parenthesized. Neither term present means the cell stays
/// the empty language.
fn eliminate(ik: &Term, kk: &Term, kj: &Term, direct: &Term) -> Term {
    use Term::{Empty, Expr};

    let via = match (ik, kk, kj) {
        (Expr(a), Expr(b), Expr(c)) => Some(format!("({a})({b})*({c})")),
        _ => None,
    };
    match (via, direct) {
        (Some(v), Expr(d)) => Expr(format!("{v}|({d})")),
        (Some(v), Empty) => Expr(v),
        (None, Expr(d)) => Expr(format!("({d})")),
        (None, Empty) => Empty,
    }
}
