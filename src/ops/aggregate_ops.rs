use std::collections::BTreeMap;

use tracing::info;

use crate::model::{CommunicationGraph, EmailRecord};
use crate::ops::identity_ops::IdentityResolver;

/// Counts each ordered (sender, receiver) pair and materializes the counts
/// as weighted edges. The result depends only on the multiset of pairs, not
/// on their order. Self-loops are counted like any other pair.
pub fn aggregate<I, S, R>(pairs: I) -> CommunicationGraph
where
    I: IntoIterator<Item = (S, R)>,
    S: Into<String>,
    R: Into<String>,
{
    let mut counts: BTreeMap<(String, String), u64> = BTreeMap::new();
    for (sender, receiver) in pairs {
        *counts.entry((sender.into(), receiver.into())).or_insert(0) += 1;
    }

    let mut graph = CommunicationGraph::new();
    for ((sender, receiver), weight) in counts {
        graph.add_edge(sender, receiver, weight);
    }
    graph
}

/// Resolves both endpoints of every email and aggregates them into a graph.
pub fn build_graph(emails: &[EmailRecord], resolver: &IdentityResolver) -> CommunicationGraph {
    let pairs = emails.iter().map(|email| {
        (
            resolver.resolve(email.from.as_deref()),
            resolver.resolve(email.to.as_deref()),
        )
    });
    let graph = aggregate(pairs);

    info!(
        emails = emails.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "communication graph built"
    );
    graph
}
