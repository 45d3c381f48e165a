/*!
# Query Entry Points

One function per structural query. Each call is a pure function of the two
raw edge blocks (plus a start-vertex token for the traversals): the graph and
all auxiliary state are rebuilt from the text, used once and dropped. Nothing
is cached between calls.
*/

use fxhash::FxHashMap;
use itertools::Itertools;
use smallvec::SmallVec;
use tracing::debug;

use crate::{
    algo::{Bridges, Connectivity, Cutpoints, Traversal},
    error::{Error, Result},
    graph::LabelGraph,
    label::{parse_numeric, VertexLabel},
    node::*,
    parse::GraphBuilder,
};

/// Counts connected components. Directed edges connect one way only here;
/// they are not reciprocated for this query.
pub fn components(undirected: &str, directed: &str) -> NumNodes {
    let graph = GraphBuilder::new().build(undirected, directed);
    let count = graph.component_count();
    debug!(vertices = graph.len(), components = count, "component query");
    count
}

/// Circuit rank `E - V + C` of the described multigraph
pub fn circuit_rank(undirected: &str, directed: &str) -> i64 {
    let graph = GraphBuilder::new().build(undirected, directed);
    let rank = graph.circuit_rank();
    debug!(
        edges = graph.num_edge_lines(),
        vertices = graph.len(),
        rank,
        "circuit rank query"
    );
    rank
}

/// Degree table, computed directly from the raw blocks: every edge line
/// increments both endpoints by one (regardless of block), an isolated
/// declaration pins the vertex at degree zero. Sorted numerically when every
/// key of *this table* is an integer literal, lexicographically otherwise.
pub fn degrees(undirected: &str, directed: &str) -> Vec<(VertexLabel, NumEdges)> {
    let mut table: FxHashMap<&str, NumEdges> = FxHashMap::default();

    for line in undirected.lines().chain(directed.lines()) {
        let tokens: SmallVec<[&str; 4]> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => {}
            [v] => {
                table.entry(v).or_insert(0);
            }
            [u, v, ..] => {
                *table.entry(u).or_insert(0) += 1;
                *table.entry(v).or_insert(0) += 1;
            }
        }
    }

    let numeric = table.keys().all(|token| parse_numeric(token).is_some());
    debug!(vertices = table.len(), numeric, "degree query");

    table
        .into_iter()
        .map(|(token, degree)| (VertexLabel::of_token(token, numeric), degree))
        .sorted()
        .collect_vec()
}

/// Depth-first visitation order from `start`, as display strings.
/// Fails closed when `start` is not a vertex of the graph.
pub fn depth_first_search(start: &str, undirected: &str, directed: &str) -> Result<Vec<String>> {
    let graph = GraphBuilder::new().build(undirected, directed);
    let s = resolve_start(&graph, start)?;
    let order = graph
        .dfs(s)
        .map(|u| graph.label_of(u).to_string())
        .collect_vec();
    debug!(start, visited = order.len(), "dfs query");
    Ok(order)
}

/// Breadth-first visitation order from `start`, as display strings.
/// Fails closed when `start` is not a vertex of the graph.
pub fn breadth_first_search(start: &str, undirected: &str, directed: &str) -> Result<Vec<String>> {
    let graph = GraphBuilder::new().build(undirected, directed);
    let s = resolve_start(&graph, start)?;
    let order = graph
        .bfs(s)
        .map(|u| graph.label_of(u).to_string())
        .collect_vec();
    debug!(start, visited = order.len(), "bfs query");
    Ok(order)
}

/// Articulation points of the undirected view (directed edges are forced
/// symmetric), deduplicated, in canonical vertex order.
pub fn cutpoints(undirected: &str, directed: &str) -> Vec<VertexLabel> {
    let graph = GraphBuilder::new()
        .symmetrize_directed(true)
        .build(undirected, directed);
    let cuts = graph.compute_cutpoints();
    let result = graph
        .vertices()
        .filter(|&u| cuts.get_bit(u))
        .map(|u| graph.label_of(u).clone())
        .collect_vec();
    debug!(vertices = graph.len(), cutpoints = result.len(), "cutpoint query");
    result
}

/// Bridges of the undirected view, as label pairs in DFS discovery order
pub fn bridges(undirected: &str, directed: &str) -> Vec<(VertexLabel, VertexLabel)> {
    let graph = GraphBuilder::new()
        .symmetrize_directed(true)
        .build(undirected, directed);
    let result = graph
        .compute_bridges()
        .into_iter()
        .map(|(u, v)| (graph.label_of(u).clone(), graph.label_of(v).clone()))
        .collect_vec();
    debug!(vertices = graph.len(), bridges = result.len(), "bridge query");
    result
}

fn resolve_start(graph: &LabelGraph, start: &str) -> Result<Node> {
    graph
        .resolve(start)
        .ok_or_else(|| Error::UnknownStartVertex(start.to_owned()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn triangle_scenario() {
        let und = "1 2\n2 3\n3 1";

        assert_eq!(components(und, ""), 1);
        assert_eq!(circuit_rank(und, ""), 1);
        assert_eq!(bridges(und, ""), vec![]);
        assert_eq!(cutpoints(und, ""), vec![]);
        assert_eq!(degrees(und, ""), vec![
            (VertexLabel::Int(1), 2),
            (VertexLabel::Int(2), 2),
            (VertexLabel::Int(3), 2),
        ]);
    }

    #[test]
    fn two_edge_path_scenario() {
        let und = "a b\nb c";

        let bs = bridges(und, "");
        assert_eq!(bs.len(), 2);
        assert!(bs.contains(&(
            VertexLabel::Text("a".into()),
            VertexLabel::Text("b".into())
        )) || bs.contains(&(
            VertexLabel::Text("b".into()),
            VertexLabel::Text("a".into())
        )));

        assert_eq!(cutpoints(und, ""), vec![VertexLabel::Text("b".into())]);
    }

    #[test]
    fn traversals_render_labels_back_to_text() {
        let und = "1 2\n2 3";

        assert_eq!(
            depth_first_search("1", und, "").unwrap(),
            vec!["1", "2", "3"]
        );
        assert_eq!(
            breadth_first_search("2", und, "").unwrap(),
            vec!["2", "1", "3"]
        );
    }

    #[test]
    fn unknown_start_vertex_fails_closed() {
        assert_eq!(
            depth_first_search("z", "a b", ""),
            Err(Error::UnknownStartVertex("z".into()))
        );
        assert_eq!(
            breadth_first_search("9", "1 2", ""),
            Err(Error::UnknownStartVertex("9".into()))
        );
    }

    #[test]
    fn degree_table_counts_lines_not_adjacency() {
        // directed lines count like undirected ones, self-loops count twice,
        // isolated declarations pin degree zero
        let und = "a a\nx";
        let dir = "a b";

        assert_eq!(degrees(und, dir), vec![
            (VertexLabel::Text("a".into()), 3),
            (VertexLabel::Text("b".into()), 1),
            (VertexLabel::Text("x".into()), 0),
        ]);
    }

    #[test]
    fn degree_table_decides_its_own_ordering() {
        assert_eq!(degrees("2 10\n1 2", ""), vec![
            (VertexLabel::Int(1), 1),
            (VertexLabel::Int(2), 2),
            (VertexLabel::Int(10), 1),
        ]);
    }

    #[test]
    fn empty_input_yields_empty_results() {
        assert_eq!(components("", ""), 0);
        assert_eq!(circuit_rank("", ""), 0);
        assert_eq!(degrees("", ""), vec![]);
        assert_eq!(bridges("", ""), vec![]);
        assert_eq!(cutpoints("", ""), vec![]);
    }
}
