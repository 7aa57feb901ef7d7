//! Result export module

use anyhow::Result;
use crate::generator::GenerationParams;
use crate::graph::Graph;
use crate::metrics::{CircularEmbedding, NetworkMetrics};
use crate::sweep::SweepPoint;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use serde_json::{json, to_string_pretty};

/// Save generation results to the specified directory
pub fn save_results(
    graph: &Graph,
    metrics: &NetworkMetrics,
    params: &GenerationParams,
    seed: u64,
    output_dir: &str,
) -> Result<()> {
    log::info!("Saving results to {}", output_dir);

    // Ensure output directory exists
    fs::create_dir_all(output_dir)?;

    // Save the metric summary
    save_summary(graph, metrics, params, seed, output_dir)?;

    // Save per-node and aggregated degree data
    save_degree_data(metrics, output_dir)?;

    // Save geometric edge lengths
    save_link_lengths(graph, metrics, output_dir)?;

    // Save the network itself for external visualization tools
    save_graphml(graph, output_dir)?;

    log::info!("Results saved successfully");

    Ok(())
}

/// Save summary information
fn save_summary(
    graph: &Graph,
    metrics: &NetworkMetrics,
    params: &GenerationParams,
    seed: u64,
    output_dir: &str,
) -> Result<()> {
    log::info!("Saving summary information");

    let path = Path::new(output_dir).join("summary.json");
    let mut file = File::create(path)?;

    let link_stats = summary_stats(&metrics.link_lengths);

    // Create summary object
    let summary = json!({
        "parameters": {
            "nodes": params.nodes(),
            "degree": params.degree(),
            "beta": params.beta(),
            "seed": seed,
        },
        "graph": {
            "node_count": graph.node_count(),
            "edge_count": graph.edge_count(),
            "avg_degree": 2.0 * graph.edge_count() as f64 / graph.node_count() as f64,
        },
        "metrics": {
            "clustering_coefficient": metrics.clustering_coefficient,
            "average_path_length": metrics.average_path_length,
            "link_lengths": link_stats.map(|(min, mean, max)| json!({
                "min": min,
                "mean": mean,
                "max": max,
            })),
        }
    });

    file.write_all(to_string_pretty(&summary)?.as_bytes())?;

    Ok(())
}

/// Save per-node degrees and the degree distribution
fn save_degree_data(metrics: &NetworkMetrics, output_dir: &str) -> Result<()> {
    log::info!("Saving degree data");

    let degrees_path = Path::new(output_dir).join("degrees.csv");
    let mut degrees_file = File::create(degrees_path)?;

    writeln!(degrees_file, "node,degree")?;
    for (node, degree) in metrics.degree_sequence.iter().enumerate() {
        writeln!(degrees_file, "{},{}", node, degree)?;
    }

    let histogram = degree_histogram(&metrics.degree_sequence);
    let dist_path = Path::new(output_dir).join("degree_distribution.csv");
    let mut dist_file = File::create(dist_path)?;

    writeln!(dist_file, "degree,count")?;
    for (degree, count) in histogram.iter().enumerate() {
        writeln!(dist_file, "{},{}", degree, count)?;
    }

    Ok(())
}

/// Save the Euclidean length of every edge under the circular layout
fn save_link_lengths(graph: &Graph, metrics: &NetworkMetrics, output_dir: &str) -> Result<()> {
    log::info!("Saving link lengths");

    let path = Path::new(output_dir).join("link_lengths.csv");
    let mut file = File::create(path)?;

    writeln!(file, "source,target,length")?;
    for ((u, v), length) in graph.edges().zip(metrics.link_lengths.iter()) {
        writeln!(file, "{},{},{:.6}", u, v, length)?;
    }

    Ok(())
}

/// Save the network as GraphML with circular layout coordinates
fn save_graphml(graph: &Graph, output_dir: &str) -> Result<()> {
    log::info!("Saving GraphML network file");

    let path = Path::new(output_dir).join("network.graphml");
    let mut file = File::create(path)?;

    let embedding = CircularEmbedding::new(graph.node_count());

    // Write GraphML header
    writeln!(file, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(file, "<graphml xmlns=\"http://graphml.graphdrawing.org/xmlns\">")?;
    writeln!(file, "  <key id=\"x\" for=\"node\" attr.name=\"x\" attr.type=\"double\"/>")?;
    writeln!(file, "  <key id=\"y\" for=\"node\" attr.name=\"y\" attr.type=\"double\"/>")?;
    writeln!(file, "  <graph id=\"G\" edgedefault=\"undirected\">")?;

    // Write nodes with their layout positions
    for node in 0..graph.node_count() as u32 {
        let (x, y) = embedding.position(node);
        writeln!(
            file,
            "    <node id=\"n{}\">\n      <data key=\"x\">{:.6}</data>\n      <data key=\"y\">{:.6}</data>\n    </node>",
            node, x, y
        )?;
    }

    // Write edges
    let mut edge_id = 0;
    for (u, v) in graph.edges() {
        writeln!(
            file,
            "    <edge id=\"e{}\" source=\"n{}\" target=\"n{}\"/>",
            edge_id, u, v
        )?;
        edge_id += 1;
    }

    // Write GraphML footer
    writeln!(file, "  </graph>")?;
    writeln!(file, "</graphml>")?;

    Ok(())
}

/// Save beta sweep results as CSV for external plotting
pub fn save_sweep(points: &[SweepPoint], output_dir: &str) -> Result<()> {
    log::info!("Saving sweep results for {} beta values", points.len());

    fs::create_dir_all(output_dir)?;

    let path = Path::new(output_dir).join("sweep.csv");
    let mut file = File::create(path)?;

    writeln!(
        file,
        "beta,clustering,path_length,normalized_clustering,normalized_path_length"
    )?;
    for point in points {
        writeln!(
            file,
            "{},{:.6},{:.6},{:.6},{:.6}",
            point.beta,
            point.clustering,
            point.path_length,
            point.normalized_clustering,
            point.normalized_path_length
        )?;
    }

    Ok(())
}

/// Count of nodes per degree value, indexed by degree
pub fn degree_histogram(degrees: &[usize]) -> Vec<usize> {
    let max_degree = degrees.iter().copied().max().unwrap_or(0);
    let mut counts = vec![0usize; max_degree + 1];
    for &degree in degrees {
        counts[degree] += 1;
    }
    counts
}

/// Minimum, mean, and maximum of a value list; `None` when empty
fn summary_stats(values: &[f64]) -> Option<(f64, f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for &value in values {
        min = min.min(value);
        max = max.max(value);
        sum += value;
    }
    Some((min, sum / values.len() as f64, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_seeded;
    use crate::metrics::analyze;
    use std::path::PathBuf;

    fn temp_output_dir(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!("smallworld-{}-{}", label, std::process::id()))
    }

    #[test]
    fn degree_histogram_counts_by_degree() {
        assert_eq!(degree_histogram(&[2, 2, 3, 0]), vec![1, 0, 2, 1]);
        assert_eq!(degree_histogram(&[]), vec![0]);
    }

    #[test]
    fn summary_stats_cover_the_range() {
        let (min, mean, max) = summary_stats(&[1.0, 2.0, 6.0]).unwrap();
        assert_eq!(min, 1.0);
        assert_eq!(mean, 3.0);
        assert_eq!(max, 6.0);
        assert!(summary_stats(&[]).is_none());
    }

    #[test]
    fn save_results_writes_every_output_file() {
        let params = GenerationParams::new(12, 4, 0.2).unwrap();
        let graph = generate_seeded(&params, Some(5));
        let metrics = analyze(&graph).unwrap();

        let dir = temp_output_dir("results");
        let dir_str = dir.to_string_lossy().into_owned();
        save_results(&graph, &metrics, &params, 5, &dir_str).unwrap();

        for name in [
            "summary.json",
            "degrees.csv",
            "degree_distribution.csv",
            "link_lengths.csv",
            "network.graphml",
        ] {
            assert!(dir.join(name).exists(), "missing {}", name);
        }

        let summary: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.join("summary.json")).unwrap()).unwrap();
        assert_eq!(summary["parameters"]["nodes"], 12);
        assert_eq!(summary["parameters"]["seed"], 5);
        assert_eq!(summary["graph"]["edge_count"], 24);
        assert!(summary["metrics"]["clustering_coefficient"].is_number());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn save_sweep_writes_one_row_per_point() {
        let points = vec![
            SweepPoint {
                beta: 0.0,
                clustering: 0.5,
                path_length: 1.6,
                normalized_clustering: 1.0,
                normalized_path_length: 1.0,
            },
            SweepPoint {
                beta: 0.5,
                clustering: 0.25,
                path_length: 1.2,
                normalized_clustering: 0.5,
                normalized_path_length: 0.75,
            },
        ];

        let dir = temp_output_dir("sweep");
        let dir_str = dir.to_string_lossy().into_owned();
        save_sweep(&points, &dir_str).unwrap();

        let contents = fs::read_to_string(dir.join("sweep.csv")).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("beta,"));
        assert!(lines[1].starts_with("0,"));
        assert!(lines[2].starts_with("0.5,"));

        let _ = fs::remove_dir_all(&dir);
    }
}
