/*!
Connected-component counting and circuit rank.

Components are computed over whatever adjacency the builder produced: edges
from the undirected block are symmetric, directed edges connect one way only
unless the graph was built with `symmetrize_directed`.
*/

use super::*;

pub trait Connectivity {
    /// Number of maximal connected subsets, by repeated DFS over unvisited
    /// vertices in canonical order
    fn component_count(&self) -> NumNodes;

    /// `E - V + C` where `E` is the number of declared edge lines, `V` the
    /// vertex count and `C` the component count. Meaningful for undirected
    /// multigraphs; purely-directed input is not special-cased.
    fn circuit_rank(&self) -> i64;
}

impl Connectivity for LabelGraph {
    fn component_count(&self) -> NumNodes {
        let mut visited = self.vertex_bitset_unset();
        let mut count = 0;

        for u in self.vertices() {
            if visited.get_bit(u) {
                continue;
            }
            count += 1;

            let mut sweep = DepthFirst::with_visited(self, u, visited);
            sweep.by_ref().for_each(drop);
            visited = sweep.into_visited();
        }

        count
    }

    fn circuit_rank(&self) -> i64 {
        i64::from(self.num_edge_lines()) - self.len() as i64
            + i64::from(self.component_count())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parse::GraphBuilder;
    use itertools::Itertools;
    use rand::{seq::SliceRandom, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn build(undirected: &str, directed: &str) -> LabelGraph {
        GraphBuilder::new().build(undirected, directed)
    }

    #[test]
    fn empty_input_has_no_components() {
        assert_eq!(build("", "").component_count(), 0);
    }

    #[test]
    fn isolated_vertices_are_their_own_components() {
        assert_eq!(build("a\nb\nc", "").component_count(), 3);
    }

    #[test]
    fn triangle_is_one_component_with_rank_one() {
        let graph = build("1 2\n2 3\n3 1", "");
        assert_eq!(graph.component_count(), 1);
        assert_eq!(graph.circuit_rank(), 1);
    }

    #[test]
    fn four_cycle_has_circuit_rank_one() {
        let graph = build("1 2\n2 3\n3 4\n4 1", "");
        assert_eq!(graph.component_count(), 1);
        assert_eq!(graph.circuit_rank(), 1);
    }

    #[test]
    fn tree_has_circuit_rank_zero() {
        let graph = build("a b\nb c\nb d", "");
        assert_eq!(graph.component_count(), 1);
        assert_eq!(graph.circuit_rank(), 0);
    }

    #[test]
    fn one_way_edge_does_not_merge_components_backwards() {
        // b cannot reach a, but the sweep starts at a and covers both
        let graph = build("", "a b");
        assert_eq!(graph.component_count(), 1);

        // from b's side only: two sweeps
        let graph = build("", "b a\nb c");
        assert_eq!(graph.component_count(), 2);
    }

    #[test]
    fn component_count_is_invariant_under_line_reordering() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        let mut lines = vec!["1 2", "2 3", "5 6", "7", "8 9", "9 1"];
        let expected = build(&lines.iter().join("\n"), "").component_count();

        for _ in 0..20 {
            lines.shuffle(rng);
            assert_eq!(build(&lines.iter().join("\n"), "").component_count(), expected);
        }
    }
}
