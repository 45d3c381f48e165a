/*!
# Edge-Block Parsing

Builds a [`LabelGraph`] from two raw text blocks: undirected edges first, then
directed edges. Each non-empty line is a whitespace-separated token list:

- `u v` declares an edge (a third or later token is an ignored weight),
- a single token declares an isolated vertex,
- an empty or whitespace-only line is skipped.

Later lines additively extend a vertex's neighbor list; duplicates and
self-loops are kept. After both blocks are folded in, the key space is
promoted to integers iff every label qualifies as an integer literal, and
keys plus neighbor lists are brought into canonical ascending order.
*/

use fxhash::FxHashMap;
use itertools::Itertools;
use smallvec::SmallVec;

use crate::{
    graph::LabelGraph,
    label::{parse_numeric, VertexLabel},
    node::*,
};

/// Configurable builder turning the two edge blocks into a [`LabelGraph`]
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    /// Insert the reverse of every directed edge as well. The low-link
    /// analyses need this undirected view; plain queries leave it off.
    symmetrize_directed: bool,
}

impl GraphBuilder {
    /// Creates a new (default) builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates whether directed edges are mirrored into the target's list
    pub fn symmetrize_directed(mut self, yes: bool) -> Self {
        self.symmetrize_directed = yes;
        self
    }

    /// Parses both blocks and returns the canonicalized graph
    pub fn build(&self, undirected: &str, directed: &str) -> LabelGraph {
        let mut adj: FxHashMap<String, Vec<String>> = FxHashMap::default();
        let mut num_edge_lines: NumEdges = 0;

        fold_block(&mut adj, &mut num_edge_lines, undirected, true);
        fold_block(&mut adj, &mut num_edge_lines, directed, self.symmetrize_directed);

        // every referenced token is a key, so the keys are the label union
        let numeric = adj.keys().all(|token| parse_numeric(token).is_some());

        let labels = adj
            .keys()
            .map(|token| VertexLabel::of_token(token, numeric))
            .sorted()
            .collect_vec();

        let index: FxHashMap<&VertexLabel, Node> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label, i as Node))
            .collect();

        let dense_adj = labels
            .iter()
            .map(|label| {
                let mut neighbors = adj
                    .get(&label.to_string())
                    .into_iter()
                    .flatten()
                    .filter_map(|token| {
                        index.get(&VertexLabel::of_token(token, numeric)).copied()
                    })
                    .collect_vec();
                neighbors.sort_unstable();
                neighbors
            })
            .collect_vec();

        LabelGraph::from_parts(labels, dense_adj, num_edge_lines)
    }
}

/// Folds one text block into the token-level adjacency map. `reciprocal`
/// mirrors every edge into the target's list (always on for the undirected
/// block); without it the target still becomes a key with an empty list.
fn fold_block(
    adj: &mut FxHashMap<String, Vec<String>>,
    num_edge_lines: &mut NumEdges,
    block: &str,
    reciprocal: bool,
) {
    for line in block.lines() {
        let tokens: SmallVec<[&str; 4]> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => {}
            [v] => {
                adj.entry((*v).to_owned()).or_default();
            }
            [u, v, ..] => {
                *num_edge_lines += 1;
                adj.entry((*u).to_owned()).or_default().push((*v).to_owned());
                if reciprocal {
                    adj.entry((*v).to_owned()).or_default().push((*u).to_owned());
                } else {
                    adj.entry((*v).to_owned()).or_default();
                }
            }
        }
    }
}
