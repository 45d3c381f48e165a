/*!
`lgraphs` parses textual edge-list descriptions of a graph and answers a
fixed set of structural queries:

- number of connected components,
- circuit rank,
- vertex degree table,
- depth-first and breadth-first visitation order,
- articulation points (cutpoints),
- bridges.

# Input

Two free-text blocks: *undirected edges* and *directed edges*. Each non-empty
line is a whitespace-separated token list — `u v` declares an edge (extra
tokens such as weights are ignored), a single token declares an isolated
vertex, blank lines are skipped. Labels may be arbitrary text; when *every*
label is a non-negative integer literal without a leading zero the whole key
space is promoted to integers and ordered numerically, otherwise labels stay
text and order lexicographically. That canonical order drives all iteration,
so results are reproducible across identical inputs.

# Usage

The [`query`] module is the external surface: one function per query, each a
pure function of its text inputs.

```rust
use lgraphs::query;

let undirected = "1 2\n2 3\n3 1";
assert_eq!(query::components(undirected, ""), 1);
assert_eq!(query::circuit_rank(undirected, ""), 1);
assert!(query::bridges(undirected, "").is_empty());
```

For finer control, build a [`graph::LabelGraph`] with
[`parse::GraphBuilder`] and run the [`algo`] traits directly.

# Design

Every query rebuilds the graph fresh from the raw text; no state survives a
call. Traversals and the low-link searches use explicit stacks, so deep chain
graphs cannot exhaust the call stack. Malformed lines are skipped silently;
the only reported error is an unknown start vertex
([`error::Error::UnknownStartVertex`]).
*/

pub mod algo;
pub mod error;
pub mod graph;
pub mod label;
pub mod node;
pub mod parse;
pub mod query;

/// Definitions for labels, dense indices, the graph representation and the
/// builder.
pub mod prelude {
    pub use super::{
        error::{Error, Result},
        graph::LabelGraph,
        label::VertexLabel,
        node::*,
        parse::GraphBuilder,
    };
}
