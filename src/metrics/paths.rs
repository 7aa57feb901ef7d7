//! Shortest-path metrics over unweighted graphs

use std::collections::VecDeque;

use serde::Serialize;

use crate::graph::Graph;
use crate::metrics::components;

/// Average shortest-path length, with an explicit marker when the graph was
/// disconnected and the mean had to be restricted to the largest component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum AveragePathLength {
    /// The graph is connected; the mean covers every node pair
    Connected { length: f64 },

    /// The graph is disconnected; the mean covers pairs inside the largest
    /// component, which holds `component_nodes` of the graph's nodes
    LargestComponent { length: f64, component_nodes: usize },
}

impl AveragePathLength {
    /// The mean path length, whatever its scope
    pub fn length(&self) -> f64 {
        match *self {
            Self::Connected { length } => length,
            Self::LargestComponent { length, .. } => length,
        }
    }

    /// Whether the mean was restricted to the largest component
    pub fn is_component_restricted(&self) -> bool {
        matches!(self, Self::LargestComponent { .. })
    }
}

/// BFS hop distances from `start`; `None` marks unreachable nodes
pub fn bfs_distances(graph: &Graph, start: u32) -> Vec<Option<u32>> {
    let mut distances = vec![None; graph.node_count()];
    distances[start as usize] = Some(0);

    let mut queue: VecDeque<(u32, u32)> = VecDeque::new();
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        for &neighbor in graph.neighbors(current) {
            if distances[neighbor as usize].is_none() {
                distances[neighbor as usize] = Some(depth + 1);
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    distances
}

/// Mean BFS distance over unordered pairs drawn from `members`.
///
/// Fewer than two members leaves no pairs; the mean is then 0.
fn mean_distance(graph: &Graph, members: &[u32]) -> f64 {
    if members.len() < 2 {
        return 0.0;
    }

    let mut total: u64 = 0;
    for &source in members {
        let distances = bfs_distances(graph, source);
        for &other in members {
            if other > source {
                // members of one component are mutually reachable
                if let Some(d) = distances[other as usize] {
                    total += u64::from(d);
                }
            }
        }
    }

    let pairs = members.len() * (members.len() - 1) / 2;
    total as f64 / pairs as f64
}

/// Average shortest-path length of the graph.
///
/// A connected graph averages over all node pairs. A disconnected graph
/// falls back to the largest component and says so in the result.
pub fn average_path_length(graph: &Graph) -> AveragePathLength {
    let components = components::connected_components(graph);
    match components.as_slice() {
        [] => AveragePathLength::Connected { length: 0.0 },
        [only] => AveragePathLength::Connected {
            length: mean_distance(graph, only),
        },
        _ => {
            let largest = components::largest_component(&components);
            log::debug!(
                "graph is disconnected ({} components), restricting path length to {} nodes",
                components.len(),
                largest.len()
            );
            AveragePathLength::LargestComponent {
                length: mean_distance(graph, largest),
                component_nodes: largest.len(),
            }
        }
    }
}
