//! Circular node embedding for geometric edge lengths

use std::f64::consts::PI;

use crate::graph::Graph;

/// Deterministic layout placing node `i` at angle `2*pi*i/n` on the unit
/// circle. Edge lengths under this embedding are straight-line chords.
#[derive(Debug, Clone)]
pub struct CircularEmbedding {
    positions: Vec<(f64, f64)>,
}

impl CircularEmbedding {
    /// Lay out `node_count` nodes evenly around the unit circle
    pub fn new(node_count: usize) -> Self {
        let positions = (0..node_count)
            .map(|i| {
                let angle = 2.0 * PI * i as f64 / node_count as f64;
                (angle.cos(), angle.sin())
            })
            .collect();
        Self { positions }
    }

    /// Cartesian position of a node
    pub fn position(&self, node: u32) -> (f64, f64) {
        self.positions[node as usize]
    }

    /// Euclidean distance between two node positions
    pub fn distance(&self, u: u32, v: u32) -> f64 {
        let (ux, uy) = self.positions[u as usize];
        let (vx, vy) = self.positions[v as usize];
        ((ux - vx).powi(2) + (uy - vy).powi(2)).sqrt()
    }

    /// Length of every edge, in the graph's edge iteration order
    pub fn link_lengths(&self, graph: &Graph) -> Vec<f64> {
        graph.edges().map(|(u, v)| self.distance(u, v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_nodes_land_on_the_axes() {
        let embedding = CircularEmbedding::new(4);
        let expected = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];
        for (node, &(x, y)) in expected.iter().enumerate() {
            let (px, py) = embedding.position(node as u32);
            assert!((px - x).abs() < 1e-9, "node {} x: {}", node, px);
            assert!((py - y).abs() < 1e-9, "node {} y: {}", node, py);
        }
    }

    #[test]
    fn chord_lengths_follow_the_ring_offset() {
        let embedding = CircularEmbedding::new(10);
        for offset in 1..=5u32 {
            let expected = 2.0 * (PI * f64::from(offset) / 10.0).sin();
            assert!((embedding.distance(0, offset) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn opposite_nodes_span_the_diameter() {
        let embedding = CircularEmbedding::new(4);
        assert!((embedding.distance(0, 2) - 2.0).abs() < 1e-12);
        assert!((embedding.distance(1, 3) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn link_lengths_follow_edge_iteration_order() {
        let graph = Graph::from_edges(4, &[(0, 2), (0, 1)]).unwrap();
        let embedding = CircularEmbedding::new(4);
        let lengths = embedding.link_lengths(&graph);
        assert_eq!(lengths.len(), 2);
        // edges iterate as (0, 1) then (0, 2)
        assert!((lengths[0] - 2.0_f64.sqrt()).abs() < 1e-12);
        assert!((lengths[1] - 2.0).abs() < 1e-12);
    }
}
