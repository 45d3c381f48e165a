/*!
Traversal iterators over a [`LabelGraph`].

Both searches visit only the component reachable from the start vertex and
expand neighbors in canonical (ascending) order. The depth-first iterator
keeps an explicit stack of neighbor cursors instead of recursing, so deep
chain graphs cannot exhaust the call stack; it yields the exact preorder a
recursive implementation would produce.
*/

use std::collections::VecDeque;

use super::*;

/// Depth-first preorder iterator with an explicit frame stack.
///
/// Each frame is `(vertex, neighbor cursor)`; a vertex is yielded when its
/// frame is pushed.
pub struct DepthFirst<'a> {
    graph: &'a LabelGraph,
    visited: NodeBitSet,
    stack: Vec<(Node, usize)>,
    first: Option<Node>,
}

/// Breadth-first iterator using a FIFO queue.
///
/// Vertices are marked visited when enqueued and yielded when dequeued.
pub struct BreadthFirst<'a> {
    graph: &'a LabelGraph,
    visited: NodeBitSet,
    queue: VecDeque<Node>,
}

impl<'a> DepthFirst<'a> {
    /// Creates a new traversal starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a LabelGraph, start: Node) -> Self {
        Self::with_visited(graph, start, graph.vertex_bitset_unset())
    }

    /// Like [`DepthFirst::new`], but resumes on an externally owned visited
    /// set. Used to sweep component by component.
    pub fn with_visited(graph: &'a LabelGraph, start: Node, mut visited: NodeBitSet) -> Self {
        visited.set_bit(start);
        Self {
            graph,
            visited,
            stack: vec![(start, 0)],
            first: Some(start),
        }
    }

    /// Hands the visited set back after the traversal is exhausted
    pub fn into_visited(self) -> NodeBitSet {
        self.visited
    }
}

impl Iterator for DepthFirst<'_> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.first.take() {
            return Some(start);
        }

        loop {
            let (v, cursor) = *self.stack.last()?;

            if let Some(&to) = self.graph.neighbor_slice(v).get(cursor) {
                if let Some(frame) = self.stack.last_mut() {
                    frame.1 += 1;
                }
                if !self.visited.set_bit(to) {
                    self.stack.push((to, 0));
                    return Some(to);
                }
            } else {
                self.stack.pop();
            }
        }
    }
}

impl<'a> BreadthFirst<'a> {
    /// Creates a new traversal starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a LabelGraph, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            queue: VecDeque::from(vec![start]),
        }
    }
}

impl Iterator for BreadthFirst<'_> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;
        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.queue.push_back(v);
            }
        }
        Some(u)
    }
}

/// Exposes the traversal iterators as methods on the graph itself
pub trait Traversal {
    /// Depth-first visitation order from `start`
    fn dfs(&self, start: Node) -> DepthFirst<'_>;

    /// Breadth-first visitation order from `start`
    fn bfs(&self, start: Node) -> BreadthFirst<'_>;
}

impl Traversal for LabelGraph {
    fn dfs(&self, start: Node) -> DepthFirst<'_> {
        DepthFirst::new(self, start)
    }

    fn bfs(&self, start: Node) -> BreadthFirst<'_> {
        BreadthFirst::new(self, start)
    }
}
