//! Beta sweep experiments over many generations

use anyhow::{anyhow, Result};
use rayon::prelude::*;

use crate::generator::{self, GenerationParams};
use crate::metrics;

/// Smallest non-zero beta on the sweep grid
const SWEEP_BETA_MIN: f64 = 1e-4;

/// Largest beta on the sweep grid
const SWEEP_BETA_MAX: f64 = 1.0;

// splitmix64 mixing constants
const SEED_SPACING: u64 = 0x9E37_79B9_7F4A_7C15;
const MIX_MULT_A: u64 = 0xBF58_476D_1CE4_E5B9;
const MIX_MULT_B: u64 = 0x94D0_49BB_1331_11EB;

/// Aggregated metrics for one beta value of a sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    /// Rewiring probability of this point
    pub beta: f64,

    /// Mean clustering coefficient over the trials
    pub clustering: f64,

    /// Mean average path length over the trials
    pub path_length: f64,

    /// Clustering divided by the beta = 0 baseline
    pub normalized_clustering: f64,

    /// Path length divided by the beta = 0 baseline
    pub normalized_path_length: f64,
}

fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(SEED_SPACING);
    state = (state ^ (state >> 30)).wrapping_mul(MIX_MULT_A);
    state = (state ^ (state >> 27)).wrapping_mul(MIX_MULT_B);
    state ^ (state >> 31)
}

/// Derive the seed for run `run_index` of a batch rooted at `base_seed`.
///
/// Consecutive run indices map to well-separated seeds, so trials that run
/// in parallel never share an rng stream.
pub fn derive_seed(base_seed: u64, run_index: u64) -> u64 {
    splitmix64(base_seed ^ run_index.wrapping_add(1).wrapping_mul(SEED_SPACING))
}

/// Log-spaced grid from `SWEEP_BETA_MIN` to `SWEEP_BETA_MAX` inclusive
fn beta_grid(points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![SWEEP_BETA_MAX],
        _ => {
            let span = (SWEEP_BETA_MAX / SWEEP_BETA_MIN).log10();
            (0..points)
                .map(|p| {
                    let exponent = span * p as f64 / (points - 1) as f64;
                    // clamp the top of the grid against rounding past 1
                    (SWEEP_BETA_MIN * 10f64.powf(exponent)).min(SWEEP_BETA_MAX)
                })
                .collect()
        }
    }
}

/// Ratio against the baseline; NaN when the baseline metric is zero
fn normalize(value: f64, baseline: f64) -> f64 {
    if baseline > 0.0 {
        value / baseline
    } else {
        f64::NAN
    }
}

/// Mean clustering and path length over `trials` seeded generations
fn average_metrics(
    nodes: usize,
    degree: usize,
    beta: f64,
    trials: usize,
    base_seed: u64,
    run_offset: u64,
) -> Result<(f64, f64)> {
    let params = GenerationParams::new(nodes, degree, beta)?;

    let mut clustering_sum = 0.0;
    let mut length_sum = 0.0;
    for trial in 0..trials as u64 {
        let seed = derive_seed(base_seed, run_offset + trial);
        let graph = generator::generate_seeded(&params, Some(seed));
        let run = metrics::analyze(&graph)?;
        clustering_sum += run.clustering_coefficient;
        length_sum += run.average_path_length.length();
    }

    Ok((clustering_sum / trials as f64, length_sum / trials as f64))
}

/// Sweep beta over a log-spaced grid, averaging metrics over `trials`
/// generations per point.
///
/// The first returned point is the beta = 0 baseline; the normalized columns
/// of every point divide by that baseline. Points run in parallel, each trial
/// on its own derived seed, and repeated sweeps with equal inputs return
/// identical results.
pub fn beta_sweep(
    nodes: usize,
    degree: usize,
    points: usize,
    trials: usize,
    base_seed: u64,
) -> Result<Vec<SweepPoint>> {
    if trials == 0 {
        return Err(anyhow!("trials must be at least 1"));
    }

    log::info!(
        "Sweeping {} beta values in [{}, {}] with {} trials each",
        points,
        SWEEP_BETA_MIN,
        SWEEP_BETA_MAX,
        trials
    );

    let (baseline_clustering, baseline_length) =
        average_metrics(nodes, degree, 0.0, trials, base_seed, 0)?;

    let mut results = vec![SweepPoint {
        beta: 0.0,
        clustering: baseline_clustering,
        path_length: baseline_length,
        normalized_clustering: normalize(baseline_clustering, baseline_clustering),
        normalized_path_length: normalize(baseline_length, baseline_length),
    }];

    let betas = beta_grid(points);
    let swept: Result<Vec<SweepPoint>> = betas
        .par_iter()
        .enumerate()
        .map(|(index, &beta)| {
            let run_offset = (index as u64 + 1) * trials as u64;
            let (clustering, path_length) =
                average_metrics(nodes, degree, beta, trials, base_seed, run_offset)?;
            Ok(SweepPoint {
                beta,
                clustering,
                path_length,
                normalized_clustering: normalize(clustering, baseline_clustering),
                normalized_path_length: normalize(path_length, baseline_length),
            })
        })
        .collect();
    results.extend(swept?);

    log::info!("Sweep complete: {} points", results.len());

    Ok(results)
}
