use tracing::info;

use crate::error::MailnetResult;
use crate::model::CommunicationGraph;
use crate::ops::aggregate_ops;
use crate::ops::filter_ops;
use crate::ops::identity_ops::IdentityResolver;
use crate::ops::rank_ops::{self, RankConfig};
use crate::source::RecordSet;

/// Result of one run: the scored full graph and its filtered view.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub graph: CommunicationGraph,
    pub filtered: CommunicationGraph,
    pub threshold: f64,
}

/// Normalize, aggregate, score, filter.
pub fn analyze(records: &RecordSet, rank: &RankConfig, threshold: f64) -> MailnetResult<Analysis> {
    let resolver = IdentityResolver::new(&records.aliases, &records.persons);
    info!(
        emails = records.emails.len(),
        aliases = resolver.alias_count(),
        persons = resolver.person_count(),
        "resolving identities"
    );
    let graph = aggregate_ops::build_graph(&records.emails, &resolver);
    let graph = rank_ops::score(graph, rank)?;
    let filtered = filter_ops::filter_by_importance(&graph, threshold)?;

    Ok(Analysis {
        graph,
        filtered,
        threshold,
    })
}
