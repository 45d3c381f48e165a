/*!
# Labelled Graph Representation

A [`LabelGraph`] stores its canonically sorted label table once and keeps all
adjacency as dense `Node` indices. Ascending index order therefore *is*
canonical label order, which makes the "next unvisited vertex" order of the
analyzers reproducible across identical inputs.

Neighbor lists keep duplicates and self-loops exactly as the input declared
them; each list is sorted ascending after construction.
*/

use fxhash::FxHashMap;

use crate::{label::VertexLabel, node::*};

/// An immutable labelled (multi-)graph, built fresh for every query by
/// [`GraphBuilder`](crate::parse::GraphBuilder).
#[derive(Clone)]
pub struct LabelGraph {
    /// All labels in canonical ascending order
    labels: Vec<VertexLabel>,
    /// Inverse of `labels`
    index: FxHashMap<VertexLabel, Node>,
    /// Out-neighbors per vertex, each list sorted ascending, duplicates kept
    adj: Vec<Vec<Node>>,
    /// Number of input lines with at least two tokens across both blocks
    num_edge_lines: NumEdges,
}

impl LabelGraph {
    /// `labels` must be sorted and duplicate-free; `adj[u]` must only contain
    /// indices `< labels.len()`.
    pub(crate) fn from_parts(
        labels: Vec<VertexLabel>,
        adj: Vec<Vec<Node>>,
        num_edge_lines: NumEdges,
    ) -> Self {
        let index = labels
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, label)| (label, i as Node))
            .collect();

        Self {
            labels,
            index,
            adj,
            num_edge_lines,
        }
    }

    /// Returns the number of vertices of the graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }

    /// Returns the number of vertices as usize
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns an iterator over V in canonical order.
    pub fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        0..self.number_of_nodes()
    }

    /// Returns an empty bitset with one entry per vertex
    pub fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns the sorted neighbor list of `u`.
    /// ** Panics if `u >= n` **
    pub fn neighbor_slice(&self, u: Node) -> &[Node] {
        &self.adj[u as usize]
    }

    /// Returns an iterator over the out-neighbors of `u` in canonical order.
    /// ** Panics if `u >= n` **
    pub fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.adj[u as usize].iter().copied()
    }

    /// Returns the number of out-neighbors of `u`, counting duplicates.
    /// ** Panics if `u >= n` **
    pub fn degree_of(&self, u: Node) -> NumNodes {
        self.adj[u as usize].len() as NumNodes
    }

    /// Returns the label of `u`.
    /// ** Panics if `u >= n` **
    pub fn label_of(&self, u: Node) -> &VertexLabel {
        &self.labels[u as usize]
    }

    /// Returns an iterator over all labels in canonical order.
    pub fn labels(&self) -> impl Iterator<Item = &VertexLabel> + '_ {
        self.labels.iter()
    }

    /// Returns the dense index of `label` if it exists in the graph.
    pub fn index_of(&self, label: &VertexLabel) -> Option<Node> {
        self.index.get(label).copied()
    }

    /// Returns *true* if the key space was promoted to integers
    pub fn is_numeric(&self) -> bool {
        matches!(self.labels.first(), Some(VertexLabel::Int(_)))
    }

    /// Resolves a raw start-vertex token against the graph's label kind:
    /// on a promoted graph the token is parsed as an integer first.
    pub fn resolve(&self, token: &str) -> Option<Node> {
        if self.is_numeric() {
            let value = token.trim().parse::<u64>().ok()?;
            self.index_of(&VertexLabel::Int(value))
        } else {
            self.index_of(&VertexLabel::Text(token.to_owned()))
        }
    }

    /// Number of input lines with >= 2 tokens across both edge blocks.
    /// This counts declared edges (including duplicates), not adjacency size.
    pub fn num_edge_lines(&self) -> NumEdges {
        self.num_edge_lines
    }
}
