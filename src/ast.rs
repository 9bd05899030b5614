//! The abstract syntax tree produced by parsing a pattern.
//!
//! `Ast` is a closed sum type: every consumer (both matchers and the NFA
//! builder) matches on it exhaustively, so adding a variant is a
//! compile-time event everywhere it matters. Nodes own their children
//! outright; the tree has no sharing and no cycles.

/// A parsed regular-expression node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ast {
    /// Matches the zero-length string.
    Empty,
    /// Matches exactly one occurrence of the character.
    Literal(char),
    /// Matches any single character.
    Dot,
    /// Matches the left node, then the right node at the resulting
    /// position.
    Concat(Box<Ast>, Box<Ast>),
    /// Matches the left node or the right node; both are tried.
    Alternation(Box<Ast>, Box<Ast>),
    /// Matches the child between `min` and `max` times, inclusive.
    ///
    /// `max == None` means unbounded; the parser guarantees
    /// `min <= max` when a bound is present. Matchers clamp the
    /// effective maximum to the configured repeat limit.
    Repeat {
        node: Box<Ast>,
        min: usize,
        max: Option<usize>,
    },
}

impl Ast {
    /// Concatenation constructor, boxing both children.
    pub fn concat(left: Ast, right: Ast) -> Ast {
        Ast::Concat(Box::new(left), Box::new(right))
    }

    /// Alternation constructor, boxing both children.
    pub fn alternation(left: Ast, right: Ast) -> Ast {
        Ast::Alternation(Box::new(left), Box::new(right))
    }

    /// Repetition constructor.
    pub fn repeat(node: Ast, min: usize, max: Option<usize>) -> Ast {
        debug_assert!(max.map_or(true, |m| min <= m));
        Ast::Repeat {
            node: Box::new(node),
            min,
            max,
        }
    }
}
