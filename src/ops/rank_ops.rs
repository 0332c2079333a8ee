use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::MailnetResult;
use crate::model::CommunicationGraph;
use crate::validation;

/// Parameters of the weighted random-walk ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Probability of following an edge rather than teleporting.
    pub damping: f64,
    pub max_iterations: usize,
    /// Per-node convergence tolerance; the iteration stops once the L1
    /// change drops below `node_count * tolerance`.
    pub tolerance: f64,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

impl RankConfig {
    pub fn validate(&self) -> MailnetResult<()> {
        validation::unit_interval(self.damping, "damping")?;
        validation::positive(self.max_iterations, "max_iterations")?;
        validation::positive_finite(self.tolerance, "tolerance")?;
        Ok(())
    }
}

/// Weighted PageRank over the graph.
///
/// Each node passes `damping` of its rank along its out-edges in proportion
/// to edge weight. Rank held by nodes without out-edges is spread uniformly,
/// as is the teleport share `1 - damping`. The returned scores are
/// non-negative and sum to 1. An empty graph yields an empty map.
pub fn importance_scores(
    graph: &CommunicationGraph,
    config: &RankConfig,
) -> MailnetResult<BTreeMap<String, f64>> {
    config.validate()?;

    let n = graph.node_count();
    if n == 0 {
        return Ok(BTreeMap::new());
    }

    let names: Vec<&str> = graph.nodes().collect();
    let index: HashMap<&str, usize> = names
        .iter()
        .enumerate()
        .map(|(i, &name)| (name, i))
        .collect();

    let mut out_weight = vec![0u64; n];
    let mut links: Vec<(usize, usize, f64)> = Vec::with_capacity(graph.edge_count());
    for edge in graph.edges() {
        let from = index[edge.sender];
        let to = index[edge.receiver];
        out_weight[from] += edge.weight;
        links.push((from, to, edge.weight as f64));
    }
    for link in &mut links {
        link.2 /= out_weight[link.0] as f64;
    }
    let dangling: Vec<usize> = (0..n).filter(|&i| out_weight[i] == 0).collect();

    let uniform = 1.0 / n as f64;
    let mut rank = vec![uniform; n];
    let mut converged = false;

    for iteration in 1..=config.max_iterations {
        let dangling_mass: f64 = dangling.iter().map(|&i| rank[i]).sum();
        let base = ((1.0 - config.damping) + config.damping * dangling_mass) * uniform;

        let mut next = vec![base; n];
        for &(from, to, share) in &links {
            next[to] += config.damping * rank[from] * share;
        }

        let delta: f64 = next.iter().zip(&rank).map(|(a, b)| (a - b).abs()).sum();
        rank = next;

        if delta < n as f64 * config.tolerance {
            debug!(iterations = iteration, delta, "ranking converged");
            converged = true;
            break;
        }
    }

    if !converged {
        warn!(
            max_iterations = config.max_iterations,
            "ranking did not converge; using last iterate"
        );
    }

    let total: f64 = rank.iter().sum();
    Ok(names
        .into_iter()
        .zip(rank)
        .map(|(name, value)| (name.to_string(), value / total))
        .collect())
}

/// Scores the graph and attaches each score as the node's importance.
/// Edges and weights are left as they are.
pub fn score(mut graph: CommunicationGraph, config: &RankConfig) -> MailnetResult<CommunicationGraph> {
    let scores = importance_scores(&graph, config)?;
    for (node, value) in &scores {
        graph.set_importance(node, *value);
    }

    info!(nodes = scores.len(), "importance scores attached");
    Ok(graph)
}
