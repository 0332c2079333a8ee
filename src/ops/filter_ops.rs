use tracing::info;

use crate::error::{MailnetError, MailnetResult};
use crate::model::CommunicationGraph;
use crate::validation;

/// Induced subgraph of the nodes whose importance is at least `threshold`.
///
/// The input graph is untouched. Edges with a dropped endpoint are dropped
/// too. A threshold of 0 keeps every node; anything above 1 keeps none.
pub fn filter_by_importance(
    graph: &CommunicationGraph,
    threshold: f64,
) -> MailnetResult<CommunicationGraph> {
    let threshold = validation::non_negative_finite(threshold, "threshold")?;
    if !graph.is_scored() {
        return Err(MailnetError::NotScored);
    }

    let filtered = graph.induced(|_, importance| importance.is_some_and(|value| value >= threshold));

    info!(
        threshold,
        kept_nodes = filtered.node_count(),
        dropped_nodes = graph.node_count() - filtered.node_count(),
        kept_edges = filtered.edge_count(),
        "graph filtered by importance"
    );
    Ok(filtered)
}
