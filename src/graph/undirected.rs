//! Adjacency-list representation of a simple undirected graph

use anyhow::{anyhow, Result};

/// Simple undirected graph over nodes `0..node_count`.
///
/// Edges form a set: no self-loops, no parallel edges. Each adjacency list is
/// kept sorted so membership checks run as binary searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    /// Number of nodes, fixed at construction
    node_count: usize,

    /// Sorted neighbour list per node; symmetric by construction
    adjacency: Vec<Vec<u32>>,

    /// Number of undirected edges
    edge_count: usize,
}

impl Graph {
    /// Create a graph with `node_count` nodes and no edges
    pub fn empty(node_count: usize) -> Self {
        Self {
            node_count,
            adjacency: vec![Vec::new(); node_count],
            edge_count: 0,
        }
    }

    /// Build a graph from explicit endpoint pairs.
    ///
    /// Self-loops and endpoints outside `0..node_count` are rejected.
    /// Duplicate pairs (in either orientation) collapse to a single edge.
    pub fn from_edges(node_count: usize, edges: &[(u32, u32)]) -> Result<Self> {
        let mut graph = Self::empty(node_count);
        for &(u, v) in edges {
            if u == v {
                return Err(anyhow!("self-loop on node {} is not allowed", u));
            }
            if u as usize >= node_count || v as usize >= node_count {
                return Err(anyhow!(
                    "edge ({}, {}) references a node outside 0..{}",
                    u,
                    v,
                    node_count
                ));
            }
            graph.add_edge(u, v);
        }
        Ok(graph)
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Sorted neighbours of a node
    pub fn neighbors(&self, node: u32) -> &[u32] {
        &self.adjacency[node as usize]
    }

    /// Degree of a node
    pub fn degree(&self, node: u32) -> usize {
        self.adjacency[node as usize].len()
    }

    /// Check whether an edge connects `u` and `v`
    pub fn has_edge(&self, u: u32, v: u32) -> bool {
        self.adjacency[u as usize].binary_search(&v).is_ok()
    }

    /// Insert the edge `{u, v}`, keeping both adjacency lists sorted.
    ///
    /// Returns `false` without modifying the graph when the edge already
    /// exists or `u == v`.
    pub(crate) fn add_edge(&mut self, u: u32, v: u32) -> bool {
        if u == v {
            return false;
        }
        match self.adjacency[u as usize].binary_search(&v) {
            Ok(_) => false,
            Err(pos) => {
                self.adjacency[u as usize].insert(pos, v);
                // symmetric list cannot already hold u if v was absent above
                if let Err(pos) = self.adjacency[v as usize].binary_search(&u) {
                    self.adjacency[v as usize].insert(pos, u);
                }
                self.edge_count += 1;
                true
            }
        }
    }

    /// Remove the edge `{u, v}` if present; returns whether anything changed
    pub(crate) fn remove_edge(&mut self, u: u32, v: u32) -> bool {
        match self.adjacency[u as usize].binary_search(&v) {
            Ok(pos) => {
                self.adjacency[u as usize].remove(pos);
                if let Ok(pos) = self.adjacency[v as usize].binary_search(&u) {
                    self.adjacency[v as usize].remove(pos);
                }
                self.edge_count -= 1;
                true
            }
            Err(_) => false,
        }
    }

    /// Iterate every edge exactly once as `(u, v)` with `u < v`, ascending
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, neighbors)| {
            let u = u as u32;
            neighbors
                .iter()
                .copied()
                .filter(move |&v| u < v)
                .map(move |v| (u, v))
        })
    }
}
