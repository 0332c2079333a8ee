use serde::Serialize;

use crate::error::{MailnetError, MailnetResult};
use crate::model::CommunicationGraph;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedIdentity {
    pub rank: usize,
    pub identity: String,
    pub importance: f64,
}

/// All identities by descending importance, ties broken by name. Ranks start at 1.
pub fn ranked(graph: &CommunicationGraph) -> MailnetResult<Vec<RankedIdentity>> {
    let mut scored = Vec::with_capacity(graph.node_count());
    for (node, importance) in graph.node_importances() {
        let importance = importance.ok_or(MailnetError::NotScored)?;
        scored.push((node, importance));
    }

    scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    Ok(scored
        .into_iter()
        .enumerate()
        .map(|(i, (node, importance))| RankedIdentity {
            rank: i + 1,
            identity: node.to_string(),
            importance,
        })
        .collect())
}

pub fn top_n(graph: &CommunicationGraph, n: usize) -> MailnetResult<Vec<RankedIdentity>> {
    let mut all = ranked(graph)?;
    all.truncate(n);
    Ok(all)
}
