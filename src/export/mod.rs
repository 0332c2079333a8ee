//! Data feeds for external renderers: the scored graph as JSON and the
//! ranking as CSV.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::error::MailnetResult;
use crate::model::CommunicationGraph;
use crate::queries::rank_queries;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeExport {
    pub id: String,
    pub importance: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeExport {
    pub source: String,
    pub target: String,
    pub weight: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphExport {
    pub generated_at: DateTime<Utc>,
    pub nodes: Vec<NodeExport>,
    pub edges: Vec<EdgeExport>,
}

pub fn graph_export(graph: &CommunicationGraph) -> GraphExport {
    GraphExport {
        generated_at: Utc::now(),
        nodes: graph
            .node_importances()
            .map(|(id, importance)| NodeExport {
                id: id.to_string(),
                importance,
            })
            .collect(),
        edges: graph
            .edges()
            .map(|edge| EdgeExport {
                source: edge.sender.to_string(),
                target: edge.receiver.to_string(),
                weight: edge.weight,
            })
            .collect(),
    }
}

pub fn write_graph_json(graph: &CommunicationGraph, path: &Path) -> MailnetResult<()> {
    let json = serde_json::to_string_pretty(&graph_export(graph))?;
    std::fs::write(path, json)?;
    info!(path = %path.display(), nodes = graph.node_count(), "graph exported");
    Ok(())
}

/// Writes `rank,identity,importance` rows, most important first.
pub fn write_rankings_csv(graph: &CommunicationGraph, path: &Path) -> MailnetResult<()> {
    let rows = rank_queries::ranked(graph)?;
    let mut wtr = csv::Writer::from_path(path)?;
    for row in &rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    info!(path = %path.display(), rows = rows.len(), "rankings exported");
    Ok(())
}
