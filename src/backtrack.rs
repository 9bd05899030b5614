//! Backtracking matcher.
//!
//! Matches a text against an [`Ast`] directly, by enumerating every end
//! position reachable from a start position. The sequence is ordered
//! greedy-first: candidates that consumed more repetitions come before
//! shorter ones, and an alternation's left branch comes before its right.
//!
//! The sequence is always finite (repetition counts are clamped to the
//! configured repeat limit and the text is finite), so it is materialized
//! as a `Vec` rather than streamed. Matching never fails: any (AST, text)
//! pair produces a definite answer.

use rustc_hash::FxHashSet;

use crate::ast::Ast;
use crate::repeat_limit;

/// All end positions reachable by matching `ast` against `text` starting
/// at `start`, in greedy-first order.
pub fn match_ends(ast: &Ast, text: &[char], start: usize) -> Vec<usize> {
    match ast {
        Ast::Empty => vec![start],
        Ast::Literal(c) => match text.get(start) {
            Some(t) if t == c => vec![start + 1],
            _ => Vec::new(),
        },
        Ast::Dot => {
            if start < text.len() {
                vec![start + 1]
            } else {
                Vec::new()
            }
        }
        Ast::Concat(left, right) => match_concat(left, right, text, start),
        Ast::Alternation(left, right) => {
            // Left branch first; no dedup across branches, order matters.
            let mut ends = match_ends(left, text, start);
            ends.extend(match_ends(right, text, start));
            ends
        }
        Ast::Repeat { node, min, max } => match_repeat(node, *min, *max, text, start),
    }
}

/// `left` then `right`. Each distinct end position of `left` is expanded
/// through `right` once: a duplicate left end would only reproduce a
/// suffix sequence that is already in the output.
fn match_concat(left: &Ast, right: &Ast, text: &[char], start: usize) -> Vec<usize> {
    let mut seen: FxHashSet<usize> = FxHashSet::default();
    let mut ends = Vec::new();
    for mid in match_ends(left, text, start) {
        if seen.insert(mid) {
            ends.extend(match_ends(right, text, mid));
        }
    }
    ends
}

/// Between `min` and `max` repetitions of `node`, most repetitions first.
///
/// The frontier holds the positions reachable after exactly `reps`
/// repetitions. Each iteration is deduplicated internally, and positions
/// reached while `reps` is within `[min, max]` are emitted (once). The
/// loop stops early when an iteration discovers no position never seen
/// before: at that point the reachable set is closed and every emittable
/// position has been emitted, which is what terminates zero-width bodies
/// like `(a*)*` well before the clamped max.
fn match_repeat(
    node: &Ast,
    min: usize,
    max: Option<usize>,
    text: &[char],
    start: usize,
) -> Vec<usize> {
    let limit = repeat_limit();
    let max = max.map_or(limit, |m| m.min(limit));

    let mut output = Vec::new();
    let mut emitted: FxHashSet<usize> = FxHashSet::default();
    let mut reached: FxHashSet<usize> = FxHashSet::default();
    reached.insert(start);

    if min == 0 {
        output.push(start);
        emitted.insert(start);
    }

    let mut frontier = vec![start];
    for reps in 1..=max {
        let mut next = Vec::new();
        let mut next_seen: FxHashSet<usize> = FxHashSet::default();
        for &pos in &frontier {
            for end in match_ends(node, text, pos) {
                if next_seen.insert(end) {
                    next.push(end);
                }
            }
        }
        if next.is_empty() {
            break;
        }

        if reps >= min {
            for &end in &next {
                if emitted.insert(end) {
                    output.push(end);
                }
            }
        }

        let mut any_new = false;
        for &end in &next {
            any_new |= reached.insert(end);
        }
        if !any_new && reps >= min {
            break;
        }
        frontier = next;
    }

    // Discovery order is fewest repetitions first; the contract is the
    // reverse.
    output.reverse();
    output
}

/// Whether `ast` matches the whole of `text`.
///
/// Scans the full candidate sequence for an end equal to the text length,
/// so the answer agrees with the NFA backend even when the most-greedy
/// candidate overshoots (`(a|ab)b` on `"ab"`).
pub fn full_match(ast: &Ast, text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    match_ends(ast, &chars, 0).into_iter().any(|end| end == chars.len())
}
