//! Test-side regex oracle.
//!
//! Parses a synthesized regular expression and interprets it as an
//! epsilon-NFA over symbol tokens, independently of the code under test.
//! The grammar is the synthesizer's output contract: alternation `|`,
//! implicit concatenation, postfix `*`, full parenthesization, and the
//! `eps` atom for the empty string. Symbols are `[A-Za-z0-9_]+` tokens.

use std::collections::HashSet;

/// Parsed regular expression over symbol tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ast {
    Eps,
    Sym(String),
    Alt(Vec<Ast>),
    Cat(Vec<Ast>),
    Star(Box<Ast>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Tok {
    Sym(String),
    Open,
    Close,
    Pipe,
    Star,
}

fn tokenize(text: &str) -> Vec<Tok> {
    let mut toks = Vec::new();
    let mut chars = text.chars().peekable();
    while let Some(&c) = chars.peek() {
        match c {
            '(' => {
                chars.next();
                toks.push(Tok::Open);
            }
            ')' => {
                chars.next();
                toks.push(Tok::Close);
            }
            '|' => {
                chars.next();
                toks.push(Tok::Pipe);
            }
            '*' => {
                chars.next();
                toks.push(Tok::Star);
            }
            c if c.is_ascii_alphanumeric() || c == '_' => {
                let mut sym = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_ascii_alphanumeric() || c == '_' {
                        sym.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                toks.push(Tok::Sym(sym));
            }
            other => panic!("unexpected character {other:?} in regex"),
        }
    }
    toks
}

struct Parser {
    tokens: Vec<Tok>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Tok> {
        self.tokens.get(self.pos)
    }

    fn alt(&mut self) -> Ast {
        let mut branches = vec![self.cat()];
        while self.peek() == Some(&Tok::Pipe) {
            self.pos += 1;
            branches.push(self.cat());
        }
        if branches.len() == 1 {
            branches.remove(0)
        } else {
            Ast::Alt(branches)
        }
    }

    fn cat(&mut self) -> Ast {
        let mut factors = Vec::new();
        while matches!(self.peek(), Some(Tok::Open) | Some(Tok::Sym(_))) {
            factors.push(self.factor());
        }
        match factors.len() {
            0 => Ast::Eps,
            1 => factors.remove(0),
            _ => Ast::Cat(factors),
        }
    }

    fn factor(&mut self) -> Ast {
        let mut node = self.atom();
        while self.peek() == Some(&Tok::Star) {
            self.pos += 1;
            node = Ast::Star(Box::new(node));
        }
        node
    }

    fn atom(&mut self) -> Ast {
        match self.tokens.get(self.pos).cloned() {
            Some(Tok::Open) => {
                self.pos += 1;
                let inner = self.alt();
                assert_eq!(
                    self.tokens.get(self.pos),
                    Some(&Tok::Close),
                    "unbalanced parentheses"
                );
                self.pos += 1;
                inner
            }
            Some(Tok::Sym(sym)) => {
                self.pos += 1;
                if sym == "eps" {
                    Ast::Eps
                } else {
                    Ast::Sym(sym)
                }
            }
            other => panic!("unexpected token {other:?}"),
        }
    }
}

pub fn parse_regex(text: &str) -> Ast {
    let mut parser = Parser {
        tokens: tokenize(text),
        pos: 0,
    };
    let ast = parser.alt();
    assert_eq!(
        parser.pos,
        parser.tokens.len(),
        "trailing tokens in regex {text:?}"
    );
    ast
}

/// Epsilon-NFA from the Thompson construction. `matches` runs the standard
/// closure simulation, so nullable starred groups cannot loop.
pub struct Nfa {
    eps: Vec<Vec<usize>>,
    sym: Vec<Vec<(String, usize)>>,
    start: usize,
    accept: usize,
}

pub fn compile(ast: &Ast) -> Nfa {
    let mut nfa = Nfa {
        eps: Vec::new(),
        sym: Vec::new(),
        start: 0,
        accept: 0,
    };
    let (start, accept) = build(ast, &mut nfa);
    nfa.start = start;
    nfa.accept = accept;
    nfa
}

fn new_state(nfa: &mut Nfa) -> usize {
    nfa.eps.push(Vec::new());
    nfa.sym.push(Vec::new());
    nfa.eps.len() - 1
}

fn build(ast: &Ast, nfa: &mut Nfa) -> (usize, usize) {
    match ast {
        Ast::Eps => {
            let s = new_state(nfa);
            let a = new_state(nfa);
            nfa.eps[s].push(a);
            (s, a)
        }
        Ast::Sym(sym) => {
            let s = new_state(nfa);
            let a = new_state(nfa);
            nfa.sym[s].push((sym.clone(), a));
            (s, a)
        }
        Ast::Alt(branches) => {
            let s = new_state(nfa);
            let a = new_state(nfa);
            for branch in branches {
                let (bs, ba) = build(branch, nfa);
                nfa.eps[s].push(bs);
                nfa.eps[ba].push(a);
            }
            (s, a)
        }
        Ast::Cat(factors) => {
            let s = new_state(nfa);
            let mut tail = s;
            for factor in factors {
                let (fs, fa) = build(factor, nfa);
                nfa.eps[tail].push(fs);
                tail = fa;
            }
            (s, tail)
        }
        Ast::Star(inner) => {
            let s = new_state(nfa);
            let a = new_state(nfa);
            let (is, ia) = build(inner, nfa);
            nfa.eps[s].push(is);
            nfa.eps[s].push(a);
            nfa.eps[ia].push(is);
            nfa.eps[ia].push(a);
            (s, a)
        }
    }
}

impl Nfa {
    fn closure(&self, set: &mut HashSet<usize>) {
        let mut stack: Vec<usize> = set.iter().copied().collect();
        while let Some(s) = stack.pop() {
            for &next in &self.eps[s] {
                if set.insert(next) {
                    stack.push(next);
                }
            }
        }
    }

    pub fn matches(&self, input: &[&str]) -> bool {
        let mut current = HashSet::from([self.start]);
        self.closure(&mut current);

        for token in input {
            let mut next = HashSet::new();
            for &s in &current {
                for (sym, dest) in &self.sym[s] {
                    if sym == token {
                        next.insert(*dest);
                    }
                }
            }
            self.closure(&mut next);
            if next.is_empty() {
                return false;
            }
            current = next;
        }

        current.contains(&self.accept)
    }
}

/// Does a synthesized regular expression match the given symbol sequence?
pub fn regex_matches(regex: &str, input: &[&str]) -> bool {
    compile(&parse_regex(regex)).matches(input)
}
