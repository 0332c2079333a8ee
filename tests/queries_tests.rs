use mailnet::error::MailnetError;
use mailnet::model::*;
use mailnet::ops::aggregate_ops::aggregate;
use mailnet::ops::rank_ops::{score, RankConfig};
use mailnet::queries::*;

fn scored(pairs: &[(&str, &str)]) -> CommunicationGraph {
    score(aggregate(pairs.iter().copied()), &RankConfig::default()).unwrap()
}

// ==========================================================================
// RANK QUERIES
// ==========================================================================

#[test]
fn ranked_orders_by_importance_descending() {
    let graph = scored(&[("a", "hub"), ("b", "hub"), ("c", "hub"), ("hub", "a")]);
    let rows = rank_queries::ranked(&graph).unwrap();

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].identity, "hub");
    assert_eq!(rows[0].rank, 1);
    assert!(rows.windows(2).all(|w| w[0].importance >= w[1].importance));
    assert_eq!(rows.last().unwrap().rank, 4);
}

#[test]
fn ties_are_broken_by_name() {
    let graph = scored(&[("c", "a"), ("a", "b"), ("b", "c")]);
    let names: Vec<String> = rank_queries::ranked(&graph)
        .unwrap()
        .into_iter()
        .map(|r| r.identity)
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn top_n_truncates() {
    let graph = scored(&[("a", "b"), ("c", "b"), ("d", "b")]);
    assert_eq!(rank_queries::top_n(&graph, 2).unwrap().len(), 2);
    assert_eq!(rank_queries::top_n(&graph, 10).unwrap().len(), 4);
}

#[test]
fn ranking_unscored_graph_fails() {
    let graph = aggregate([("a", "b")]);
    assert!(matches!(
        rank_queries::ranked(&graph),
        Err(MailnetError::NotScored)
    ));
}

// ==========================================================================
// STATS QUERIES
// ==========================================================================

#[test]
fn stats_counts_messages_and_self_loops() {
    let graph = aggregate([("a", "b"), ("a", "b"), ("a", "b"), ("b", "b"), ("c", "a")]);
    let s = stats_queries::stats(&graph);

    assert_eq!(s.node_count, 3);
    assert_eq!(s.edge_count, 3);
    assert_eq!(s.total_messages, 5);
    assert_eq!(s.self_loops, 1);
    assert_eq!(s.heaviest_edge, Some(("a".into(), "b".into(), 3)));
}

#[test]
fn stats_of_empty_graph() {
    let s = stats_queries::stats(&CommunicationGraph::new());
    assert_eq!(s.node_count, 0);
    assert_eq!(s.total_messages, 0);
    assert_eq!(s.heaviest_edge, None);
}

#[test]
fn distribution_splits_senders_and_receivers() {
    let graph = scored(&[("a", "hub"), ("b", "hub"), ("hub", "hub")]);
    let dist = stats_queries::distribution(&graph).unwrap();

    let senders = dist.senders.unwrap();
    let receivers = dist.receivers.unwrap();
    assert_eq!(senders.count, 3);
    assert_eq!(receivers.count, 1);
    assert_eq!(receivers.min, graph.importance("hub").unwrap());
    assert!(senders.min <= senders.median && senders.median <= senders.max);
}

#[test]
fn distribution_of_empty_graph_has_no_boxes() {
    let graph = score(CommunicationGraph::new(), &RankConfig::default()).unwrap();
    let dist = stats_queries::distribution(&graph).unwrap();
    assert_eq!(dist.senders, None);
    assert_eq!(dist.receivers, None);
}
