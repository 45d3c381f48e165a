/*!
Articulation-point (cutpoint) search. Shares the low-link DFS skeleton with
the bridge search but runs as an independent pass.

A non-root `v` is a cutpoint iff some DFS-tree child `to` satisfies
`low[to] >= tin[v]`; the root of a DFS tree is a cutpoint iff it has more
than one tree child.
*/

use super::*;

pub trait Cutpoints {
    /// Returns the articulation points as a bitset over dense indices
    fn compute_cutpoints(&self) -> NodeBitSet;
}

impl Cutpoints for LabelGraph {
    fn compute_cutpoints(&self) -> NodeBitSet {
        CutpointSearch::new(self).compute()
    }
}

#[derive(Clone, Copy)]
struct Frame {
    v: Node,
    parent: Option<Node>,
    cursor: usize,
}

struct CutpointSearch<'a> {
    graph: &'a LabelGraph,
    visited: NodeBitSet,
    tin: Vec<Node>,
    low: Vec<Node>,
    time: Node,
    cutpoints: NodeBitSet,
}

impl<'a> CutpointSearch<'a> {
    fn new(graph: &'a LabelGraph) -> Self {
        let n = graph.len();
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            tin: vec![0; n],
            low: vec![0; n],
            time: 0,
            cutpoints: graph.vertex_bitset_unset(),
        }
    }

    fn compute(mut self) -> NodeBitSet {
        for root in self.graph.vertices() {
            if !self.visited.get_bit(root) {
                self.search_from(root);
            }
        }
        self.cutpoints
    }

    fn discover(&mut self, v: Node) {
        self.visited.set_bit(v);
        self.time += 1;
        self.tin[v as usize] = self.time;
        self.low[v as usize] = self.time;
    }

    fn search_from(&mut self, root: Node) {
        let mut stack = vec![Frame {
            v: root,
            parent: None,
            cursor: 0,
        }];
        self.discover(root);
        let mut root_children = 0u32;

        while let Some(&Frame { v, parent, cursor }) = stack.last() {
            if let Some(&to) = self.graph.neighbor_slice(v).get(cursor) {
                if let Some(frame) = stack.last_mut() {
                    frame.cursor += 1;
                }
                if Some(to) == parent {
                    continue;
                }
                if self.visited.get_bit(to) {
                    self.low[v as usize] = self.low[v as usize].min(self.tin[to as usize]);
                } else {
                    self.discover(to);
                    if v == root {
                        root_children += 1;
                    }
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
                    if self.low[v as usize] >= self.tin[p as usize] && p != root {
                        self.cutpoints.set_bit(p);
                    }
                }
            }
        }

        if root_children > 1 {
            self.cutpoints.set_bit(root);
        }
    }
}
