//! rematch: a small regular-expression engine with two matching backends.
//!
//! A pattern string is parsed into an [`Ast`] ([`parse`]) and matched
//! against a complete text by either of two functionally-equivalent
//! backends:
//!
//! - [`backtrack`] - lazy, greedy-ordered backtracking straight over the
//!   AST, with duplicate-state pruning;
//! - [`nfa`] - a Thompson-style automaton where bounded repetitions
//!   (`{m,n}`) are counter nodes carrying per-path iteration counts, plus
//!   a set-of-states simulator.
//!
//! Both answer the same question: does the pattern match the *whole*
//! text. The [`Regex`] facade compiles once and exposes both.
//!
//! Supported syntax: literals, `.`, `|`, `(...)`, `*`, `+`, `{n}`,
//! `{n,}`, `{n,m}`. No character classes, anchors, backreferences, or
//! capture groups.
//!
//! ```
//! use rematch::Regex;
//!
//! let re = Regex::new("(a|b)c{2,3}").unwrap();
//! assert!(re.is_match("bcc"));
//! assert!(!re.is_match("bc"));
//! ```
//!
//! The engine is single-threaded and synchronous; the only configuration
//! is the process-wide repeat limit (see [`set_repeat_limit`]), which
//! bounds how many iterations any quantifier will ever realize.

mod arena;
mod ast;

pub mod backtrack;
pub mod nfa;
pub mod parser;

#[cfg(test)]
mod samples;

pub use arena::{Edge, EdgeLabel, Node, NodeArena, NodeId};
pub use ast::Ast;
pub use nfa::{build, Nfa};
pub use parser::{parse, ParseError, ParseErrorKind};

use std::sync::OnceLock;

/// Repeat limit used when [`set_repeat_limit`] was never called.
pub const DEFAULT_REPEAT_LIMIT: usize = 1000;

fn repeat_limit_cell() -> &'static OnceLock<usize> {
    static LIMIT: OnceLock<usize> = OnceLock::new();
    &LIMIT
}

/// Configure the process-wide repeat limit.
///
/// The limit bounds realized repetitions everywhere: the parser rejects
/// quantifiers whose minimum exceeds it, and both matchers clamp
/// unbounded or oversized maxima to it. It can be set once, before any
/// parsing or matching, and is read-only afterwards.
///
/// Returns `false` if `limit` is zero or the limit was already fixed
/// (by an earlier call, or implicitly by the first read).
pub fn set_repeat_limit(limit: usize) -> bool {
    limit > 0 && repeat_limit_cell().set(limit).is_ok()
}

/// The configured repeat limit, fixing the default on first read.
pub fn repeat_limit() -> usize {
    *repeat_limit_cell().get_or_init(|| DEFAULT_REPEAT_LIMIT)
}

/// A compiled pattern: the parsed AST plus its NFA, built once.
///
/// Read-only after construction, so clones can be handed to other
/// threads freely.
#[derive(Debug, Clone)]
pub struct Regex {
    ast: Ast,
    nfa: Nfa,
}

impl Regex {
    /// Parse and compile a pattern.
    pub fn new(pattern: &str) -> Result<Regex, ParseError> {
        let ast = parse(pattern)?;
        let nfa = build(&ast);
        Ok(Regex { ast, nfa })
    }

    /// Whether the pattern matches the whole text, via the automaton
    /// backend.
    pub fn is_match(&self, text: &str) -> bool {
        self.nfa.full_match(text)
    }

    /// Whether the pattern matches the whole text, via the backtracking
    /// backend. Always agrees with [`is_match`](Self::is_match).
    pub fn is_match_backtracking(&self, text: &str) -> bool {
        backtrack::full_match(&self.ast, text)
    }

    /// The parsed pattern tree.
    pub fn ast(&self) -> &Ast {
        &self.ast
    }
}
