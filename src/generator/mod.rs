//! Watts-Strogatz small-world network generation

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::InvalidParameter;
use crate::graph::Graph;

/// Validated parameter set for one generation run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    /// Number of nodes on the ring
    nodes: usize,

    /// Mean degree of the initial lattice; even, below the node count
    degree: usize,

    /// Per-edge rewiring probability in [0, 1]
    beta: f64,
}

impl GenerationParams {
    /// Validate `(n, k, beta)` and build a parameter set.
    ///
    /// Requires `n >= 3`, `k` even and smaller than `n`, and a finite `beta`
    /// in `[0, 1]`. `k = 0` is accepted and produces an edgeless graph.
    pub fn new(nodes: usize, degree: usize, beta: f64) -> Result<Self, InvalidParameter> {
        if nodes < 3 {
            return Err(InvalidParameter::NodeCountTooSmall { got: nodes });
        }
        if degree % 2 != 0 {
            return Err(InvalidParameter::DegreeOdd { got: degree });
        }
        if degree >= nodes {
            return Err(InvalidParameter::DegreeTooLarge {
                k: degree,
                n: nodes,
            });
        }
        if !beta.is_finite() || !(0.0..=1.0).contains(&beta) {
            return Err(InvalidParameter::BetaOutOfRange { got: beta });
        }
        Ok(Self {
            nodes,
            degree,
            beta,
        })
    }

    /// Number of nodes on the ring
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Mean degree of the initial lattice
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Per-edge rewiring probability
    pub fn beta(&self) -> f64 {
        self.beta
    }
}

/// Ring lattice: node `i` connects to `(i + j) % n` for `j` in `1..=k/2`
fn ring_lattice(nodes: usize, degree: usize) -> Graph {
    let mut graph = Graph::empty(nodes);
    for i in 0..nodes {
        for j in 1..=degree / 2 {
            graph.add_edge(i as u32, ((i + j) % nodes) as u32);
        }
    }
    graph
}

/// Generate a Watts-Strogatz graph from the given rng.
///
/// Starts from the ring lattice, then walks lattice edges node by node and
/// offset by offset, rewiring each with probability `beta`. The rewired
/// endpoint keeps `i` and moves the far end to a target drawn uniformly from
/// the nodes not equal to and not already adjacent to `i`. The edge count is
/// preserved: every rewire removes one edge and inserts one.
pub fn generate<R: Rng>(params: &GenerationParams, rng: &mut R) -> Graph {
    let n = params.nodes;
    let half_k = params.degree / 2;
    let beta = params.beta;

    let mut graph = ring_lattice(n, params.degree);
    let mut rewired = 0usize;

    for i in 0..n {
        for j in 1..=half_k {
            // one coin per lattice edge, drawn even when beta is 0
            let coin: f64 = rng.gen();
            if coin >= beta {
                continue;
            }
            let source = i as u32;
            // a node adjacent to every other node has nowhere to rewire
            if graph.degree(source) == n - 1 {
                continue;
            }
            let old_target = ((i + j) % n) as u32;
            let new_target = loop {
                let candidate = rng.gen_range(0..n) as u32;
                if candidate != source && !graph.has_edge(source, candidate) {
                    break candidate;
                }
            };
            graph.remove_edge(source, old_target);
            graph.add_edge(source, new_target);
            rewired += 1;
        }
    }

    log::debug!(
        "generated graph: n={}, k={}, beta={}, rewired {}/{} lattice edges",
        n,
        params.degree,
        beta,
        rewired,
        n * half_k
    );

    graph
}

/// Generate from a seed, or from entropy when `seed` is `None`.
///
/// Equal seeds and equal parameters always produce the same graph.
pub fn generate_seeded(params: &GenerationParams, seed: Option<u64>) -> Graph {
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    generate(params, &mut rng)
}
