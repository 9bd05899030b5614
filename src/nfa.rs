//! NFA building and simulation.
//!
//! [`build`] compiles an [`Ast`] into a graph of arena nodes where every
//! path from the start node to the end node, consuming the labeled
//! transitions along the way, is exactly a match. Bounded repetitions
//! become counter nodes instead of unrolled copies: a single loop in the
//! graph plus a per-path iteration count carried by the simulation.
//!
//! The simulator tracks a set of `(node, counters)` pairs. Both halves
//! form the identity of a state: two paths can sit on the same node with
//! different outstanding loop counts (nested or overlapping repeats) and
//! must stay distinct. Counter nodes are resolved the moment they are
//! reached during closure and never persist in the active set.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::arena::{EdgeLabel, Node, NodeArena, NodeId};
use crate::ast::Ast;
use crate::repeat_limit;

/// Per-path loop iteration counts, keyed by counter-node id.
///
/// A sorted association list with structural equality and hashing, so it
/// can form half of a composite set key. Updates return a new set; the
/// lists stay tiny (one entry per *currently open* repeat on this path).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CounterSet(SmallVec<[(NodeId, usize); 2]>);

impl CounterSet {
    /// Iterations completed for `counter` on this path; 0 if the loop has
    /// not been entered.
    fn get(&self, counter: NodeId) -> usize {
        match self.0.binary_search_by_key(&counter, |&(id, _)| id) {
            Ok(i) => self.0[i].1,
            Err(_) => 0,
        }
    }

    /// Copy of this set with `counter` set to `count`.
    fn with(&self, counter: NodeId, count: usize) -> Self {
        let mut entries = self.0.clone();
        match entries.binary_search_by_key(&counter, |&(id, _)| id) {
            Ok(i) => entries[i].1 = count,
            Err(i) => entries.insert(i, (counter, count)),
        }
        CounterSet(entries)
    }

    /// Copy of this set with `counter` removed.
    fn without(&self, counter: NodeId) -> Self {
        let mut entries = self.0.clone();
        if let Ok(i) = entries.binary_search_by_key(&counter, |&(id, _)| id) {
            entries.remove(i);
        }
        CounterSet(entries)
    }

    /// No loop on this path is still open.
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One active simulation state: a graph position plus the open loop
/// counts of the path that reached it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SimState {
    node: NodeId,
    counters: CounterSet,
}

/// A compiled NFA: the owning arena plus its entry and accept nodes.
#[derive(Debug, Clone)]
pub struct Nfa {
    arena: NodeArena,
    start: NodeId,
    end: NodeId,
}

/// Compile an AST into an [`Nfa`].
pub fn build(ast: &Ast) -> Nfa {
    let mut arena = NodeArena::new();
    let start = arena.alloc();
    let end = arena.alloc();
    build_between(ast, &mut arena, start, end);
    Nfa { arena, start, end }
}

/// Build the sub-graph matching `ast` between `entry` and `exit`.
fn build_between(ast: &Ast, arena: &mut NodeArena, entry: NodeId, exit: NodeId) {
    match ast {
        Ast::Empty => arena.add_edge(entry, EdgeLabel::Epsilon, exit),
        Ast::Literal(c) => arena.add_edge(entry, EdgeLabel::Char(*c), exit),
        Ast::Dot => arena.add_edge(entry, EdgeLabel::Any, exit),
        Ast::Concat(left, right) => {
            let mid = arena.alloc();
            build_between(left, arena, entry, mid);
            build_between(right, arena, mid, exit);
        }
        Ast::Alternation(left, right) => {
            // Two parallel sub-graphs between the same pair of nodes.
            build_between(left, arena, entry, exit);
            build_between(right, arena, entry, exit);
        }
        Ast::Repeat { node, min, max } => {
            let limit = repeat_limit();
            let max = max.map_or(limit, |m| m.min(limit));
            let loop_entry = arena.alloc();
            let counter = arena.alloc_counter(loop_entry, exit, *min, max);
            build_between(node, arena, loop_entry, counter);
            arena.add_edge(entry, EdgeLabel::Epsilon, loop_entry);
            if *min == 0 {
                // Skip the loop entirely.
                arena.add_edge(entry, EdgeLabel::Epsilon, exit);
            }
        }
    }
}

impl Nfa {
    /// Whether the NFA matches the whole of `text`.
    pub fn full_match(&self, text: &str) -> bool {
        let mut active: FxHashSet<SimState> = FxHashSet::default();
        let mut work: Vec<SimState> = Vec::new();

        self.add_state(self.start, CounterSet::default(), &mut active, &mut work);
        self.close(&mut active, &mut work);

        for ch in text.chars() {
            let mut next: FxHashSet<SimState> = FxHashSet::default();
            for state in &active {
                let Node::Trans(edges) = &self.arena[state.node] else {
                    unreachable!("counter nodes are resolved during closure");
                };
                for &(label, dest) in edges.iter() {
                    let consumes = match label {
                        EdgeLabel::Char(c) => c == ch,
                        EdgeLabel::Any => true,
                        EdgeLabel::Epsilon => false,
                    };
                    if consumes {
                        self.add_state(dest, state.counters.clone(), &mut next, &mut work);
                    }
                }
            }
            active = next;
            self.close(&mut active, &mut work);
            if active.is_empty() {
                return false;
            }
        }

        // A live counter means an unfinished loop, which only happens on
        // paths that never reached a valid exit.
        active.contains(&SimState {
            node: self.end,
            counters: CounterSet::default(),
        })
    }

    /// Add a state to `set`, resolving counter nodes on the spot.
    ///
    /// A counter node never becomes a member of the set: reaching one
    /// completes an iteration of its loop, so it immediately forks into
    /// "go around again" (count bumped) and/or "leave the loop" (count
    /// dropped). Transition nodes are queued on `work` for epsilon
    /// expansion by [`close`](Self::close).
    fn add_state(
        &self,
        node: NodeId,
        counters: CounterSet,
        set: &mut FxHashSet<SimState>,
        work: &mut Vec<SimState>,
    ) {
        match self.arena[node] {
            Node::Counter {
                loop_entry,
                exit,
                min,
                max,
            } => {
                let new_count = counters.get(node) + 1;
                if new_count <= max {
                    self.add_state(loop_entry, counters.with(node, new_count), set, work);
                }
                if min <= new_count && new_count <= max {
                    // The counter is gone outside its own loop.
                    self.add_state(exit, counters.without(node), set, work);
                }
            }
            Node::Trans(_) => {
                let state = SimState { node, counters };
                if !set.contains(&state) {
                    set.insert(state.clone());
                    work.push(state);
                }
            }
        }
    }

    /// Epsilon/counter closure: drain `work`, following epsilon edges and
    /// resolving any counter node they lead to, until no new state turns
    /// up. Runs before the first character and after every consumed one.
    fn close(&self, set: &mut FxHashSet<SimState>, work: &mut Vec<SimState>) {
        while let Some(state) = work.pop() {
            let Node::Trans(edges) = &self.arena[state.node] else {
                unreachable!("only transition nodes are queued");
            };
            for &(label, dest) in edges.iter() {
                if label == EdgeLabel::Epsilon {
                    self.add_state(dest, state.counters.clone(), set, work);
                }
            }
        }
    }

    /// Number of nodes in the compiled graph.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }
}
