//! Connected component detection

use std::collections::HashMap;

use crate::graph::Graph;

/// Union-Find data structure for connected component analysis
pub struct DisjointSets {
    /// Parent pointers (parent[i] = parent of node i)
    parent: Vec<u32>,

    /// Rank/size of each set (for union by rank)
    rank: Vec<u32>,
}

impl DisjointSets {
    /// Create a new DisjointSets with each node in its own set
    pub fn new(size: usize) -> Self {
        let mut parent = Vec::with_capacity(size);
        let mut rank = Vec::with_capacity(size);
        for i in 0..size {
            parent.push(i as u32);
            rank.push(1);
        }
        Self { parent, rank }
    }

    /// Find the root of the set containing x with path compression
    pub fn find(&mut self, x: u32) -> u32 {
        let px = self.parent[x as usize];
        if px != x {
            self.parent[x as usize] = self.find(px);
        }
        self.parent[x as usize]
    }

    /// Union the sets containing x and y
    pub fn union(&mut self, x: u32, y: u32) {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return;
        }

        // union by rank: attach smaller tree under root of larger tree
        let rank_x = self.rank[root_x as usize];
        let rank_y = self.rank[root_y as usize];

        if rank_x > rank_y {
            self.parent[root_y as usize] = root_x;
            self.rank[root_x as usize] += self.rank[root_y as usize];
        } else {
            self.parent[root_x as usize] = root_y;
            self.rank[root_y as usize] += self.rank[root_x as usize];
        }
    }
}

/// Connected components as sorted member lists.
///
/// Members of each component appear in ascending node order, and the
/// components themselves are ordered by their smallest member.
pub fn connected_components(graph: &Graph) -> Vec<Vec<u32>> {
    let mut sets = DisjointSets::new(graph.node_count());
    for (u, v) in graph.edges() {
        sets.union(u, v);
    }

    let mut by_root: HashMap<u32, Vec<u32>> = HashMap::new();
    for node in 0..graph.node_count() as u32 {
        let root = sets.find(node);
        by_root.entry(root).or_default().push(node);
    }

    let mut components: Vec<Vec<u32>> = by_root.into_values().collect();
    // nodes were visited in ascending order, so each first member is the minimum
    components.sort_by_key(|members| members[0]);
    components
}

/// Largest component by member count.
///
/// Ties go to the component containing the smallest node id.
pub fn largest_component(components: &[Vec<u32>]) -> &[u32] {
    components
        .iter()
        .max_by_key(|members| {
            let min_id = members.first().copied().unwrap_or(u32::MAX);
            (members.len(), std::cmp::Reverse(min_id))
        })
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disjoint_sets_track_merges() {
        let mut sets = DisjointSets::new(6);
        sets.union(0, 1);
        sets.union(1, 2);
        sets.union(4, 5);

        assert_eq!(sets.find(0), sets.find(2));
        assert_eq!(sets.find(4), sets.find(5));
        assert_ne!(sets.find(0), sets.find(3));
        assert_ne!(sets.find(2), sets.find(4));
    }

    #[test]
    fn edgeless_graph_splits_into_singletons() {
        let graph = Graph::empty(3);
        let components = connected_components(&graph);
        assert_eq!(components, vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn components_are_ordered_by_smallest_member() {
        let graph = Graph::from_edges(6, &[(3, 4), (0, 5), (1, 2)]).unwrap();
        let components = connected_components(&graph);
        assert_eq!(components, vec![vec![0, 5], vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn largest_component_wins_by_size() {
        let graph = Graph::from_edges(6, &[(0, 1), (2, 3), (3, 4), (2, 4)]).unwrap();
        let components = connected_components(&graph);
        assert_eq!(largest_component(&components), &[2, 3, 4]);
    }

    #[test]
    fn size_ties_go_to_the_smallest_node_id() {
        // two triangles of equal size
        let graph =
            Graph::from_edges(6, &[(3, 4), (4, 5), (3, 5), (0, 1), (1, 2), (0, 2)]).unwrap();
        let components = connected_components(&graph);
        assert_eq!(largest_component(&components), &[0, 1, 2]);
    }
}
