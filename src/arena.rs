//! Arena-based node allocation for the NFA graph.
//!
//! Repeat loops give the graph genuine cycles (the counter node points
//! back at the loop entry), and alternation gives it forward-shared
//! destinations, so nodes cannot own each other by value. A single arena
//! owns every node for the lifetime of one compiled NFA; nodes reference
//! each other by index. `NodeId` is just a `u32`, so cyclic references
//! cost nothing and node identity is stable, which the simulator relies
//! on when it keys counter values by counter-node id.

use smallvec::SmallVec;

/// A node identifier - an index into the arena.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// What an edge consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeLabel {
    /// Always traversable, consumes nothing.
    Epsilon,
    /// Consumes exactly this character.
    Char(char),
    /// Consumes any one character.
    Any,
}

/// An outgoing edge.
pub type Edge = (EdgeLabel, NodeId);

/// A node in the NFA graph.
#[derive(Debug, Clone)]
pub enum Node {
    /// An ordered collection of outgoing edges.
    Trans(SmallVec<[Edge; 2]>),
    /// The loop-control point of a repetition. Never persisted in the
    /// simulator's active set; resolved during closure.
    Counter {
        /// Entry node of the loop body (back-edge target).
        loop_entry: NodeId,
        /// Where to continue after the loop.
        exit: NodeId,
        /// Minimum iterations before the loop may be exited.
        min: usize,
        /// Maximum iterations, already clamped to the repeat limit.
        max: usize,
    },
}

impl Node {
    /// The edge list of a transition node.
    ///
    /// Panics on a counter node: only the builder calls this, and it only
    /// ever wires edges out of transition nodes.
    fn edges_mut(&mut self) -> &mut SmallVec<[Edge; 2]> {
        match self {
            Node::Trans(edges) => edges,
            Node::Counter { .. } => panic!("counter nodes have no outgoing edges"),
        }
    }
}

/// Arena owning every node of one compiled NFA.
///
/// Read-only after construction; the simulator only ever indexes into it.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh transition node with no edges.
    pub(crate) fn alloc(&mut self) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::Trans(SmallVec::new()));
        id
    }

    /// Allocate a counter node.
    pub(crate) fn alloc_counter(
        &mut self,
        loop_entry: NodeId,
        exit: NodeId,
        min: usize,
        max: usize,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::Counter {
            loop_entry,
            exit,
            min,
            max,
        });
        id
    }

    /// Add an edge from `from` to `to`.
    pub(crate) fn add_edge(&mut self, from: NodeId, label: EdgeLabel, to: NodeId) {
        self.nodes[from.index()].edges_mut().push((label, to));
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl std::ops::Index<NodeId> for NodeArena {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.index()]
    }
}
