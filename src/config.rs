//! Configuration management for the generator

use std::ops::RangeInclusive;

use anyhow::{anyhow, Result};

/// Supported node counts for a generation run
pub const NODE_RANGE: RangeInclusive<usize> = 10..=1000;

/// Supported mean degrees for a generation run
pub const DEGREE_RANGE: RangeInclusive<usize> = 2..=50;

/// Run configuration assembled from the command line
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of nodes on the ring
    pub nodes: usize,

    /// Mean degree of the initial lattice
    pub degree: usize,

    /// Per-edge rewiring probability
    pub beta: f64,

    /// Seed for reproducible runs; a random seed is drawn when absent
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nodes: 100,
            degree: 4,
            beta: 0.1,
            seed: None,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(nodes: usize, degree: usize, beta: f64, seed: Option<u64>) -> Self {
        Self {
            nodes,
            degree,
            beta,
            seed,
        }
    }

    /// Check the configuration against the supported parameter ranges.
    ///
    /// These bounds are tighter than what the generator itself accepts; they
    /// keep command-line runs inside well-tested territory.
    pub fn validate(&self) -> Result<()> {
        if !NODE_RANGE.contains(&self.nodes) {
            return Err(anyhow!(
                "--nodes must lie in {}..={}, got {}",
                NODE_RANGE.start(),
                NODE_RANGE.end(),
                self.nodes
            ));
        }
        if !DEGREE_RANGE.contains(&self.degree) {
            return Err(anyhow!(
                "--degree must lie in {}..={}, got {}",
                DEGREE_RANGE.start(),
                DEGREE_RANGE.end(),
                self.degree
            ));
        }
        if self.degree % 2 != 0 {
            return Err(anyhow!("--degree must be even, got {}", self.degree));
        }
        if self.degree >= self.nodes {
            return Err(anyhow!(
                "--degree must be smaller than --nodes, got {} with {} nodes",
                self.degree,
                self.nodes
            ));
        }
        if !self.beta.is_finite() || !(0.0..=1.0).contains(&self.beta) {
            return Err(anyhow!("--beta must lie in [0, 1], got {}", self.beta));
        }
        Ok(())
    }
}
