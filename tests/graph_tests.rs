use mailnet::error::MailnetError;
use mailnet::model::*;
use mailnet::ops::aggregate_ops::{aggregate, build_graph};
use mailnet::ops::filter_ops::filter_by_importance;
use mailnet::ops::identity_ops::IdentityResolver;
use mailnet::ops::rank_ops::{score, RankConfig};

fn scored(pairs: &[(&str, &str)]) -> CommunicationGraph {
    score(aggregate(pairs.iter().copied()), &RankConfig::default()).unwrap()
}

// ==========================================================================
// AGGREGATION
// ==========================================================================

#[test]
fn single_email_becomes_single_edge() {
    let aliases = vec![Alias::new("hclinton".into(), Id::new("P1"))];
    let persons = vec![Person::new(Id::new("P1"), "Hillary Clinton".into())];
    let resolver = IdentityResolver::new(&aliases, &persons);
    let emails = vec![EmailRecord::new(
        Some("HClinton@example.com"),
        Some("unknown@nowhere.com"),
    )];

    let graph = build_graph(&emails, &resolver);
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.weight("Hillary Clinton", "unknown"), Some(1));
    assert_eq!(graph.weight("unknown", "Hillary Clinton"), None);
}

#[test]
fn repeated_pair_increments_weight() {
    let graph = aggregate([("a", "b"), ("a", "b")]);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.weight("a", "b"), Some(2));
    assert_eq!(graph.total_weight(), 2);
}

#[test]
fn direction_matters() {
    let graph = aggregate([("a", "b"), ("b", "a"), ("a", "b")]);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.weight("a", "b"), Some(2));
    assert_eq!(graph.weight("b", "a"), Some(1));
}

#[test]
fn self_addressed_email_is_a_self_loop() {
    let resolver = IdentityResolver::default();
    let emails = vec![EmailRecord::new(Some("me@home.org"), Some("ME@work.org"))];

    let graph = build_graph(&emails, &resolver);
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.weight("me", "me"), Some(1));
    assert!(graph.edges().all(|e| e.is_self_loop()));
}

#[test]
fn missing_endpoints_aggregate_under_nan() {
    let resolver = IdentityResolver::default();
    let emails = vec![
        EmailRecord::new(Some("a@x"), None),
        EmailRecord::new(None, Some("a@y")),
    ];

    let graph = build_graph(&emails, &resolver);
    assert_eq!(graph.weight("a", "nan"), Some(1));
    assert_eq!(graph.weight("nan", "a"), Some(1));
}

#[test]
fn aggregation_ignores_input_order() {
    let pairs = vec![
        ("a", "b"),
        ("b", "c"),
        ("a", "b"),
        ("c", "c"),
        ("c", "a"),
        ("a", "b"),
    ];
    let forward = aggregate(pairs.iter().copied());
    let backward = aggregate(pairs.iter().rev().copied());

    let mut rotated = pairs.clone();
    rotated.rotate_left(4);
    let rotated = aggregate(rotated);

    assert_eq!(forward, backward);
    assert_eq!(forward, rotated);
}

#[test]
fn no_records_give_empty_graph() {
    let graph = aggregate(Vec::<(String, String)>::new());
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn zero_weight_edge_is_not_added() {
    let mut graph = CommunicationGraph::new();
    graph.add_edge("a", "b", 0);
    assert!(graph.is_empty());
}

// ==========================================================================
// THRESHOLD FILTER
// ==========================================================================

#[test]
fn threshold_zero_keeps_everything() {
    let graph = scored(&[("a", "b"), ("b", "c"), ("c", "a"), ("d", "a")]);
    let filtered = filter_by_importance(&graph, 0.0).unwrap();
    assert_eq!(filtered, graph);
}

#[test]
fn threshold_above_one_keeps_nothing() {
    let graph = scored(&[("a", "b"), ("b", "a")]);
    let filtered = filter_by_importance(&graph, 1.01).unwrap();
    assert!(filtered.is_empty());
    assert_eq!(filtered.edge_count(), 0);
}

#[test]
fn filter_drops_edges_touching_removed_nodes() {
    // "d" only sends, so it holds the teleport minimum and falls below the cut.
    let graph = scored(&[("a", "b"), ("b", "a"), ("d", "a"), ("d", "b")]);
    let d = graph.importance("d").unwrap();
    let a = graph.importance("a").unwrap();
    assert!(d < a);

    let filtered = filter_by_importance(&graph, (d + a) / 2.0).unwrap();
    assert!(!filtered.contains_node("d"));
    assert!(filtered.contains_node("a"));
    assert!(filtered.contains_node("b"));
    assert_eq!(filtered.edge_count(), 2);
    assert_eq!(filtered.weight("d", "a"), None);
    assert_eq!(filtered.importance("a"), graph.importance("a"));
}

#[test]
fn filter_leaves_input_untouched() {
    let graph = scored(&[("a", "b"), ("c", "b")]);
    let before = graph.clone();
    let _ = filter_by_importance(&graph, 0.5).unwrap();
    assert_eq!(graph, before);
}

#[test]
fn filter_rejects_unscored_graph() {
    let graph = aggregate([("a", "b")]);
    let err = filter_by_importance(&graph, 0.1).unwrap_err();
    assert!(matches!(err, MailnetError::NotScored));
}

#[test]
fn filter_rejects_invalid_threshold() {
    let graph = scored(&[("a", "b")]);
    assert!(filter_by_importance(&graph, -0.5).is_err());
    assert!(filter_by_importance(&graph, f64::NAN).is_err());
}
