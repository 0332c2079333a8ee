use std::collections::BTreeMap;

/// A directed edge view: `weight` counts the messages sent from `sender` to `receiver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<'a> {
    pub sender: &'a str,
    pub receiver: &'a str,
    pub weight: u64,
}

impl Edge<'_> {
    pub fn is_self_loop(&self) -> bool {
        self.sender == self.receiver
    }
}

/// Weighted directed communication graph between identities.
///
/// Parallel messages collapse into a single edge whose weight is the message
/// count, so every stored weight is at least 1. Nodes carry an `importance`
/// once the graph has been scored. Both maps are ordered, which keeps every
/// iteration (and therefore every report and export) deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommunicationGraph {
    nodes: BTreeMap<String, Option<f64>>,
    edges: BTreeMap<(String, String), u64>,
}

impl CommunicationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `weight` messages from `sender` to `receiver`, creating both
    /// endpoints if needed. A zero weight adds nothing.
    pub fn add_edge(&mut self, sender: impl Into<String>, receiver: impl Into<String>, weight: u64) {
        if weight == 0 {
            return;
        }
        let sender = sender.into();
        let receiver = receiver.into();
        self.nodes.entry(sender.clone()).or_insert(None);
        self.nodes.entry(receiver.clone()).or_insert(None);
        *self.edges.entry((sender, receiver)).or_insert(0) += weight;
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, node: &str) -> bool {
        self.nodes.contains_key(node)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.keys().map(String::as_str)
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> + '_ {
        self.edges.iter().map(|((sender, receiver), &weight)| Edge {
            sender,
            receiver,
            weight,
        })
    }

    pub fn weight(&self, sender: &str, receiver: &str) -> Option<u64> {
        self.edges
            .get(&(sender.to_string(), receiver.to_string()))
            .copied()
    }

    /// Sum of all edge weights, i.e. the number of messages aggregated.
    pub fn total_weight(&self) -> u64 {
        self.edges.values().sum()
    }

    pub fn importance(&self, node: &str) -> Option<f64> {
        self.nodes.get(node).copied().flatten()
    }

    /// Nodes paired with their importance (`None` before scoring).
    pub fn node_importances(&self) -> impl Iterator<Item = (&str, Option<f64>)> + '_ {
        self.nodes.iter().map(|(node, &importance)| (node.as_str(), importance))
    }

    /// True when every node has an importance. An empty graph counts as scored.
    pub fn is_scored(&self) -> bool {
        self.nodes.values().all(Option::is_some)
    }

    pub(crate) fn set_importance(&mut self, node: &str, importance: f64) {
        if let Some(slot) = self.nodes.get_mut(node) {
            *slot = Some(importance);
        }
    }

    /// Induced subgraph over the nodes accepted by `keep`. Edges survive only
    /// when both endpoints do; node attributes are carried over unchanged.
    pub(crate) fn induced<F>(&self, mut keep: F) -> CommunicationGraph
    where
        F: FnMut(&str, Option<f64>) -> bool,
    {
        let nodes: BTreeMap<String, Option<f64>> = self
            .nodes
            .iter()
            .filter(|(node, importance)| keep(node.as_str(), **importance))
            .map(|(node, importance)| (node.clone(), *importance))
            .collect();

        let edges = self
            .edges
            .iter()
            .filter(|((sender, receiver), _)| {
                nodes.contains_key(sender) && nodes.contains_key(receiver)
            })
            .map(|(pair, &weight)| (pair.clone(), weight))
            .collect();

        CommunicationGraph { nodes, edges }
    }
}
