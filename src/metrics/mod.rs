//! Network metric computation module

pub mod clustering;
pub mod components;
pub mod embedding;
pub mod paths;

use serde::Serialize;

use crate::error::EmptyGraphError;
use crate::graph::Graph;

pub use embedding::CircularEmbedding;
pub use paths::AveragePathLength;

/// Structural metrics of one generated network
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkMetrics {
    /// Mean local clustering coefficient over all nodes
    pub clustering_coefficient: f64,

    /// Mean shortest-path length, possibly restricted to the largest component
    pub average_path_length: AveragePathLength,

    /// Degree of each node, in node order
    pub degree_sequence: Vec<usize>,

    /// Euclidean length of each edge under the circular embedding, in edge
    /// iteration order
    pub link_lengths: Vec<f64>,
}

/// Compute every metric for a graph.
///
/// Reads the graph without modifying it, so repeated calls return identical
/// results. Fails only when the graph has no nodes.
pub fn analyze(graph: &Graph) -> Result<NetworkMetrics, EmptyGraphError> {
    if graph.node_count() == 0 {
        return Err(EmptyGraphError);
    }

    let clustering_coefficient = clustering::average_clustering(graph);
    let average_path_length = paths::average_path_length(graph);
    let degree_sequence = (0..graph.node_count() as u32)
        .map(|node| graph.degree(node))
        .collect();
    let embedding = CircularEmbedding::new(graph.node_count());
    let link_lengths = embedding.link_lengths(graph);

    log::debug!(
        "analyzed graph: clustering={:.4}, path_length={:.4}",
        clustering_coefficient,
        average_path_length.length()
    );

    Ok(NetworkMetrics {
        clustering_coefficient,
        average_path_length,
        degree_sequence,
        link_lengths,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate_seeded, GenerationParams};

    #[test]
    fn analyze_rejects_the_empty_graph() {
        let graph = Graph::empty(0);
        assert_eq!(analyze(&graph), Err(EmptyGraphError));
    }

    #[test]
    fn single_node_graph_yields_zeroed_metrics() {
        let graph = Graph::empty(1);
        let metrics = analyze(&graph).unwrap();
        assert_eq!(metrics.clustering_coefficient, 0.0);
        assert_eq!(
            metrics.average_path_length,
            AveragePathLength::Connected { length: 0.0 }
        );
        assert_eq!(metrics.degree_sequence, vec![0]);
        assert!(metrics.link_lengths.is_empty());
    }

    #[test]
    fn triangle_metrics_are_exact() {
        let graph = Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
        let metrics = analyze(&graph).unwrap();
        assert_eq!(metrics.clustering_coefficient, 1.0);
        assert_eq!(
            metrics.average_path_length,
            AveragePathLength::Connected { length: 1.0 }
        );
        assert_eq!(metrics.degree_sequence, vec![2, 2, 2]);
    }

    #[test]
    fn unrewired_ring_matches_the_known_closed_forms() {
        // k = 4 ring on 10 nodes: local clustering 1/2 everywhere, mean
        // distance 5/3 over the 45 node pairs
        let params = GenerationParams::new(10, 4, 0.0).unwrap();
        let graph = generate_seeded(&params, Some(0));
        let metrics = analyze(&graph).unwrap();

        assert!((metrics.clustering_coefficient - 0.5).abs() < 1e-12);
        assert!(!metrics.average_path_length.is_component_restricted());
        assert!((metrics.average_path_length.length() - 5.0 / 3.0).abs() < 1e-12);
        assert_eq!(metrics.degree_sequence, vec![4; 10]);
        assert_eq!(metrics.link_lengths.len(), graph.edge_count());
    }

    #[test]
    fn minimal_ring_is_a_fully_clustered_triangle() {
        // with n = 3 every node is saturated, so no beta can rewire anything
        let params = GenerationParams::new(3, 2, 0.5).unwrap();
        let graph = generate_seeded(&params, Some(8));
        let metrics = analyze(&graph).unwrap();
        assert_eq!(metrics.clustering_coefficient, 1.0);
        assert_eq!(
            metrics.average_path_length,
            AveragePathLength::Connected { length: 1.0 }
        );
    }

    #[test]
    fn equal_sized_components_fall_back_deterministically() {
        // two disjoint triangles; the one holding node 0 wins the tie
        let graph =
            Graph::from_edges(6, &[(3, 4), (4, 5), (3, 5), (0, 1), (1, 2), (0, 2)]).unwrap();
        let metrics = analyze(&graph).unwrap();
        assert_eq!(
            metrics.average_path_length,
            AveragePathLength::LargestComponent {
                length: 1.0,
                component_nodes: 3,
            }
        );
    }

    #[test]
    fn disconnected_graph_is_flagged_in_the_result() {
        // triangle, lone edge, isolated node
        let graph = Graph::from_edges(6, &[(0, 1), (1, 2), (0, 2), (3, 4)]).unwrap();
        let metrics = analyze(&graph).unwrap();
        assert_eq!(
            metrics.average_path_length,
            AveragePathLength::LargestComponent {
                length: 1.0,
                component_nodes: 3,
            }
        );
        assert_eq!(metrics.degree_sequence, vec![2, 2, 2, 1, 1, 0]);
    }

    #[test]
    fn analyze_is_idempotent() {
        let params = GenerationParams::new(30, 4, 0.4).unwrap();
        let graph = generate_seeded(&params, Some(99));
        let first = analyze(&graph).unwrap();
        let second = analyze(&graph).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn ring_link_lengths_are_uniform_chords() {
        let params = GenerationParams::new(10, 2, 0.0).unwrap();
        let graph = generate_seeded(&params, Some(0));
        let metrics = analyze(&graph).unwrap();

        let chord = 2.0 * (std::f64::consts::PI / 10.0).sin();
        assert_eq!(metrics.link_lengths.len(), 10);
        for length in &metrics.link_lengths {
            assert!((length - chord).abs() < 1e-12);
        }
    }
}
