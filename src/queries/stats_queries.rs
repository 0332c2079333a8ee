use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{MailnetError, MailnetResult};
use crate::model::CommunicationGraph;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    /// Sum of edge weights.
    pub total_messages: u64,
    pub self_loops: usize,
    /// Heaviest edge as (sender, receiver, weight); the first in sender order wins ties.
    pub heaviest_edge: Option<(String, String, u64)>,
}

pub fn stats(graph: &CommunicationGraph) -> GraphStats {
    let mut heaviest: Option<(String, String, u64)> = None;
    for edge in graph.edges() {
        if heaviest.as_ref().map_or(true, |(_, _, w)| edge.weight > *w) {
            heaviest = Some((edge.sender.to_string(), edge.receiver.to_string(), edge.weight));
        }
    }

    GraphStats {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        total_messages: graph.total_weight(),
        self_loops: graph.edges().filter(|e| e.is_self_loop()).count(),
        heaviest_edge: heaviest,
    }
}

/// Five-number summary of a sample, as drawn by a box plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxSummary {
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Importance of identities that sent at least one message versus those that
/// received at least one. An identity can appear on both sides.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportanceDistribution {
    pub senders: Option<BoxSummary>,
    pub receivers: Option<BoxSummary>,
}

pub fn distribution(graph: &CommunicationGraph) -> MailnetResult<ImportanceDistribution> {
    let senders: BTreeSet<&str> = graph.edges().map(|e| e.sender).collect();
    let receivers: BTreeSet<&str> = graph.edges().map(|e| e.receiver).collect();

    Ok(ImportanceDistribution {
        senders: box_summary(importances(graph, &senders)?),
        receivers: box_summary(importances(graph, &receivers)?),
    })
}

fn importances(graph: &CommunicationGraph, nodes: &BTreeSet<&str>) -> MailnetResult<Vec<f64>> {
    nodes
        .iter()
        .map(|node| graph.importance(node).ok_or(MailnetError::NotScored))
        .collect()
}

/// Quartiles use linear interpolation between closest ranks.
pub fn box_summary(mut values: Vec<f64>) -> Option<BoxSummary> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);

    Some(BoxSummary {
        count: values.len(),
        min: values[0],
        q1: quantile(&values, 0.25),
        median: quantile(&values, 0.5),
        q3: quantile(&values, 0.75),
        max: values[values.len() - 1],
    })
}

fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}
