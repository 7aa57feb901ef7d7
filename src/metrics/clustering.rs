//! Clustering coefficient computation

use crate::graph::Graph;

/// Local clustering coefficient of one node.
///
/// The fraction of the node's neighbour pairs that are themselves connected.
/// Nodes with degree below 2 have no neighbour pairs and score 0.
pub fn local_clustering(graph: &Graph, node: u32) -> f64 {
    let neighbors = graph.neighbors(node);
    let degree = neighbors.len();
    if degree < 2 {
        return 0.0;
    }

    let mut closed = 0usize;
    for i in 0..degree {
        for j in (i + 1)..degree {
            if graph.has_edge(neighbors[i], neighbors[j]) {
                closed += 1;
            }
        }
    }

    let pairs = degree * (degree - 1) / 2;
    closed as f64 / pairs as f64
}

/// Average clustering coefficient: the unweighted mean of the local
/// coefficient over all nodes, isolated and degree-1 nodes included.
pub fn average_clustering(graph: &Graph) -> f64 {
    let node_count = graph.node_count();
    if node_count == 0 {
        return 0.0;
    }

    let total: f64 = (0..node_count as u32)
        .map(|node| local_clustering(graph, node))
        .sum();
    total / node_count as f64
}
