//! Pattern parsing.
//!
//! This module parses regex strings into an [`Ast`] for the matching
//! backends. The grammar, precedence low to high:
//!
//! - alternation: `concat ('|' concat)*`, left-associative
//! - concatenation: zero or more atoms (zero atoms is `Empty`)
//! - atom: `(...)` group, `.`, or a single literal character, followed by
//!   an optional postfix quantifier `*`, `+`, `{n}`, `{n,}`, `{n,m}`
//!
//! Supported:
//! - `.` matches any character
//! - `|` alternation
//! - `(...)` grouping
//! - `+` one-or-more quantifier
//! - `*` zero-or-more quantifier
//! - `{n,m}` range quantifiers
//!
//! No character classes, anchors, or escapes; every character other than
//! the operators above is a literal.

use crate::ast::Ast;
use crate::repeat_limit;

/// Why a parse failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A quantifier with no atom before it, e.g. `*a`.
    NothingToRepeat,
    /// A `(` that is never closed.
    UnbalancedParenthesis,
    /// A `)` with no matching `(` at the top level.
    UnexpectedCloseParen,
    /// `{` not followed by a decimal integer.
    ExpectedInteger,
    /// `{...` that is never closed by `}`.
    UnbalancedBrace,
    /// Quantifier bounds with `max < min`, e.g. `a{2,1}`.
    MinGreaterThanMax,
    /// Quantifier minimum above the configured repeat limit.
    RepetitionTooLarge,
}

impl ParseErrorKind {
    fn reason(self) -> &'static str {
        match self {
            ParseErrorKind::NothingToRepeat => "nothing to repeat",
            ParseErrorKind::UnbalancedParenthesis => "unbalanced parenthesis",
            ParseErrorKind::UnexpectedCloseParen => "unexpected closing parenthesis",
            ParseErrorKind::ExpectedInteger => "expected integer",
            ParseErrorKind::UnbalancedBrace => "unbalanced brace",
            ParseErrorKind::MinGreaterThanMax => "min repeat greater than max repeat",
            ParseErrorKind::RepetitionTooLarge => "repetition count too large",
        }
    }
}

/// Error type for pattern parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Character offset into the pattern where the problem was detected.
    pub offset: usize,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at offset {}", self.kind.reason(), self.offset)
    }
}

impl std::error::Error for ParseError {}

/// Parser cursor over the pattern characters.
struct Cursor {
    chars: Vec<char>,
    index: usize,
}

impl Cursor {
    fn new(pattern: &str) -> Self {
        Self {
            chars: pattern.chars().collect(),
            index: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.index += 1;
        }
        c
    }

    fn is_empty(&self) -> bool {
        self.index >= self.chars.len()
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            kind,
            offset: self.index,
        }
    }
}

/// Parse a pattern string into an [`Ast`].
///
/// The empty pattern parses to [`Ast::Empty`]. On failure no partial tree
/// is returned.
pub fn parse(pattern: &str) -> Result<Ast, ParseError> {
    let mut cur = Cursor::new(pattern);
    let node = parse_alternation(&mut cur)?;
    if !cur.is_empty() {
        // parse_alternation only stops early at a ')', and a ')' here has
        // no matching '('.
        return Err(cur.error(ParseErrorKind::UnexpectedCloseParen));
    }
    Ok(node)
}

/// `concat ('|' concat)*`, left-associative.
fn parse_alternation(cur: &mut Cursor) -> Result<Ast, ParseError> {
    let mut prev = parse_concat(cur)?;
    while let Some(c) = cur.peek() {
        if c == ')' {
            // Return to the enclosing group (or to parse(), which rejects
            // a stray ')').
            break;
        }
        debug_assert_eq!(c, '|');
        cur.bump();
        let node = parse_concat(cur)?;
        prev = Ast::alternation(prev, node);
    }
    Ok(prev)
}

/// Zero or more atoms; zero atoms is the empty string (this is how an
/// empty alternative like the right side of `a|` is represented).
fn parse_concat(cur: &mut Cursor) -> Result<Ast, ParseError> {
    let mut prev: Option<Ast> = None;
    while let Some(c) = cur.peek() {
        if c == '|' || c == ')' {
            break;
        }
        let node = parse_atom(cur)?;
        prev = Some(match prev {
            None => node,
            Some(p) => Ast::concat(p, node),
        });
    }
    Ok(prev.unwrap_or(Ast::Empty))
}

/// A single atom plus its optional postfix quantifier.
fn parse_atom(cur: &mut Cursor) -> Result<Ast, ParseError> {
    let node = match cur.bump() {
        Some('(') => {
            let node = parse_alternation(cur)?;
            if cur.peek() == Some(')') {
                cur.bump();
            } else {
                return Err(cur.error(ParseErrorKind::UnbalancedParenthesis));
            }
            node
        }
        Some('.') => Ast::Dot,
        Some('*') | Some('+') | Some('{') => {
            return Err(ParseError {
                kind: ParseErrorKind::NothingToRepeat,
                offset: cur.index - 1,
            });
        }
        Some(c) => Ast::Literal(c),
        // parse_concat never calls in with an exhausted cursor.
        None => return Err(cur.error(ParseErrorKind::NothingToRepeat)),
    };
    parse_postfix(cur, node)
}

/// `a*`, `a+`, `a{n}`, `a{n,}`, `a{n,m}`, or no quantifier at all.
fn parse_postfix(cur: &mut Cursor, node: Ast) -> Result<Ast, ParseError> {
    let (min, max) = match cur.peek() {
        Some('*') => {
            cur.bump();
            (0, None)
        }
        Some('+') => {
            cur.bump();
            (1, None)
        }
        Some('{') => {
            cur.bump();
            parse_bounds(cur)?
        }
        _ => return Ok(node),
    };

    if let Some(m) = max {
        if m < min {
            return Err(cur.error(ParseErrorKind::MinGreaterThanMax));
        }
    }
    if min > repeat_limit() {
        return Err(cur.error(ParseErrorKind::RepetitionTooLarge));
    }
    Ok(Ast::repeat(node, min, max))
}

/// The bounds inside `{...}`; the opening brace is already consumed.
fn parse_bounds(cur: &mut Cursor) -> Result<(usize, Option<usize>), ParseError> {
    let min = match parse_int(cur) {
        Some(n) => n,
        None => return Err(cur.error(ParseErrorKind::ExpectedInteger)),
    };
    let max = if cur.peek() == Some(',') {
        cur.bump();
        // Digits absent after the comma mean "no upper bound".
        parse_int(cur)
    } else {
        Some(min)
    };
    if cur.peek() == Some('}') {
        cur.bump();
    } else {
        return Err(cur.error(ParseErrorKind::UnbalancedBrace));
    }
    Ok((min, max))
}

/// A maximal run of ASCII decimal digits, or `None` if there are none.
/// Saturates instead of overflowing; a saturated value is far above any
/// permitted repeat limit and gets rejected by the limit check.
fn parse_int(cur: &mut Cursor) -> Option<usize> {
    let mut value: usize = 0;
    let mut any = false;
    while let Some(c) = cur.peek() {
        let Some(digit) = c.to_digit(10) else { break };
        cur.bump();
        value = value.saturating_mul(10).saturating_add(digit as usize);
        any = true;
    }
    any.then_some(value)
}
