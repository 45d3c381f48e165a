/*!
Bridge search: a single low-link DFS per unvisited root, over the undirected
view of the graph (callers build with `symmetrize_directed`).

An edge `(v, to)` is a bridge iff `low[to] > tin[v]`, i.e. nothing in `to`'s
subtree reaches back above `v`. Every neighbor equal to the immediate parent
is skipped, so parallel edges back to the parent never count as back-edges
and a duplicated edge is still reported as a bridge.
*/

use super::*;

pub trait Bridges {
    /// Returns all bridges as dense index pairs in DFS discovery order
    fn compute_bridges(&self) -> Vec<(Node, Node)>;
}

impl Bridges for LabelGraph {
    fn compute_bridges(&self) -> Vec<(Node, Node)> {
        BridgeSearch::new(self).compute()
    }
}

#[derive(Clone, Copy)]
struct Frame {
    v: Node,
    parent: Option<Node>,
    cursor: usize,
}

struct BridgeSearch<'a> {
    graph: &'a LabelGraph,
    visited: NodeBitSet,
    tin: Vec<Node>,
    low: Vec<Node>,
    time: Node,
    bridges: Vec<(Node, Node)>,
}

impl<'a> BridgeSearch<'a> {
    fn new(graph: &'a LabelGraph) -> Self {
        let n = graph.len();
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            tin: vec![0; n],
            low: vec![0; n],
            time: 0,
            bridges: Vec::new(),
        }
    }

    fn compute(mut self) -> Vec<(Node, Node)> {
        for root in self.graph.vertices() {
            if !self.visited.get_bit(root) {
                self.search_from(root);
            }
        }
        self.bridges
    }

    fn discover(&mut self, v: Node) {
        self.visited.set_bit(v);
        self.time += 1;
        self.tin[v as usize] = self.time;
        self.low[v as usize] = self.time;
    }

    /// Explicit-stack rendition of the recursive low-link DFS: a frame pauses
    /// at its cursor while the child subtree below it completes.
    fn search_from(&mut self, root: Node) {
        let mut stack = vec![Frame {
            v: root,
            parent: None,
            cursor: 0,
        }];
        self.discover(root);

        while let Some(&Frame { v, parent, cursor }) = stack.last() {
            if let Some(&to) = self.graph.neighbor_slice(v).get(cursor) {
                if let Some(frame) = stack.last_mut() {
                    frame.cursor += 1;
                }
                if Some(to) == parent {
                    continue;
                }
                if self.visited.get_bit(to) {
                    // back-edge
                    self.low[v as usize] = self.low[v as usize].min(self.tin[to as usize]);
                } else {
                    self.discover(to);
                    stack.push(Frame {
                        v: to,
                        parent: Some(v),
                        cursor: 0,
                    });
                }
            } else {
                stack.pop();
                if let Some(p) = parent {
                    self.low[p as usize] = self.low[p as usize].min(self.low[v as usize]);
                    if self.low[v as usize] > self.tin[p as usize] {
                        self.bridges.push((p, v));
                    }
                }
            }
        }
    }
}
