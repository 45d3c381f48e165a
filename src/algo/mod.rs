/*!
# Graph Algorithms

Structural analyses over a built [`LabelGraph`](crate::graph::LabelGraph).
All algorithms are re-exported at the top level of this module:

- [`traversal`]: DFS and BFS visitation-order iterators,
- [`connectivity`]: connected-component count and circuit rank,
- [`bridges`] / [`cutpoints`]: two independent low-link DFS passes.

Every analysis is call-scoped: visited sets and discovery records are created
per invocation and dropped with it.
*/

mod bridges;
mod connectivity;
mod cutpoints;
mod traversal;

use crate::{graph::LabelGraph, node::*};

pub use bridges::*;
pub use connectivity::*;
pub use cutpoints::*;
pub use traversal::*;
