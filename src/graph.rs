//! Undirected graph with labelled nodes and an ordered edge list.

use std::collections::HashMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Index of a node inside its `Graph`. Nodes are compared by identity, never by label text.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Undirected graph built incrementally.
///
/// Edges are kept in insertion order, and that order decides the order in which
/// neighbours are enumerated. Parallel edges are allowed and kept.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    labels: Vec<String>,
    index: HashMap<String, NodeId>,
    edges: Vec<(NodeId, NodeId)>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with the next free automatic label: A, B, ..., Z, AA, AB, ...
    pub fn add_node(&mut self) -> NodeId {
        let mut n = self.labels.len();
        while self.index.contains_key(&auto_label(n)) {
            n += 1;
        }
        self.insert(auto_label(n))
    }

    /// Add a node with an explicit label. Labels must be unique.
    pub fn add_labeled_node(&mut self, label: &str) -> Result<NodeId> {
        if self.index.contains_key(label) {
            return Err(Error::DuplicateLabel(label.to_string()));
        }
        Ok(self.insert(label.to_string()))
    }

    fn insert(&mut self, label: String) -> NodeId {
        let id = NodeId(self.labels.len());
        self.index.insert(label.clone(), id);
        self.labels.push(label);
        id
    }

    /// Connect two distinct nodes. Connecting the same pair twice adds a parallel edge.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<()> {
        self.check(a)?;
        self.check(b)?;
        if a == b {
            return Err(Error::SelfLoop(self.labels[a.0].clone()));
        }
        self.edges.push((a, b));
        Ok(())
    }

    /// Look a node up by label
    pub fn node(&self, label: &str) -> Result<NodeId> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| Error::UnknownNode(label.to_string()))
    }

    pub fn check(&self, id: NodeId) -> Result<()> {
        if id.0 < self.labels.len() {
            Ok(())
        } else {
            Err(Error::NodeOutOfRange(id.0))
        }
    }

    /// The label of a node. Panics if `id` belongs to another graph.
    pub fn label(&self, id: NodeId) -> &str {
        &self.labels[id.0]
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The first node created, which the demos used as the default start.
    pub fn first_node(&self) -> Option<NodeId> {
        (!self.is_empty()).then_some(NodeId(0))
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.labels.len()).map(NodeId)
    }

    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    /// Every edge touching `id` contributes its other endpoint, in edge-list order.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.edges.iter().filter_map(move |&(a, b)| {
            if a == id {
                Some(b)
            } else if b == id {
                Some(a)
            } else {
                None
            }
        })
    }

    pub fn to_snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.labels.clone(),
            edges: self
                .edges
                .iter()
                .map(|&(a, b)| (self.labels[a.0].clone(), self.labels[b.0].clone()))
                .collect(),
            heuristics: HeuristicTable::default(),
        }
    }
}

/// Bijective base-26 labels
fn auto_label(mut n: usize) -> String {
    let mut label = Vec::new();
    loop {
        label.push(b'A' + (n % 26) as u8);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    label.reverse();
    String::from_utf8(label).unwrap_or_default()
}

/// Estimated cost per node label, owned by the caller and shared by reference with searches.
/// Labels without an entry score 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeuristicTable(HashMap<String, f64>);

impl HeuristicTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, label: &str, value: f64) {
        self.0.insert(label.to_string(), value);
    }

    pub fn remove(&mut self, label: &str) -> Option<f64> {
        self.0.remove(label)
    }

    pub fn get(&self, label: &str) -> f64 {
        self.0.get(label).copied().unwrap_or(0.0)
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for HeuristicTable {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Serializable graph for loading from and saving to JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<String>,
    pub edges: Vec<(String, String)>,
    #[serde(default)]
    pub heuristics: HeuristicTable,
}

impl GraphSnapshot {
    pub fn to_graph(&self) -> Result<Graph> {
        let mut graph = Graph::new();
        for label in &self.nodes {
            graph.add_labeled_node(label)?;
        }
        for (a, b) in &self.edges {
            graph.add_edge(graph.node(a)?, graph.node(b)?)?;
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn automatic_labels_follow_creation_order() {
        let mut g = Graph::new();
        let ids: Vec<_> = (0..28).map(|_| g.add_node()).collect();
        assert_eq!(g.label(ids[0]), "A");
        assert_eq!(g.label(ids[25]), "Z");
        assert_eq!(g.label(ids[26]), "AA");
        assert_eq!(g.label(ids[27]), "AB");
        assert_eq!(g.node("C").unwrap(), ids[2]);
    }

    #[test]
    fn automatic_label_skips_taken_names() {
        let mut g = Graph::new();
        g.add_labeled_node("B").unwrap();
        let second = g.add_node();
        assert_eq!(g.label(second), "C");
    }

    #[test]
    fn neighbors_follow_edge_order_and_keep_parallel_edges() {
        let mut g = Graph::new();
        let a = g.add_node();
        let b = g.add_node();
        let c = g.add_node();
        g.add_edge(c, a).unwrap();
        g.add_edge(a, b).unwrap();
        g.add_edge(b, a).unwrap();
        assert_eq!(g.neighbors(a).collect::<Vec<_>>(), vec![c, b, b]);
        assert_eq!(g.neighbors(c).collect::<Vec<_>>(), vec![a]);
    }

    #[test]
    fn rejects_bad_edges() {
        let mut g = Graph::new();
        let a = g.add_node();
        assert_eq!(g.add_edge(a, a), Err(Error::SelfLoop("A".into())));
        assert_eq!(g.add_edge(a, NodeId(7)), Err(Error::NodeOutOfRange(7)));
        assert_eq!(g.node("Q"), Err(Error::UnknownNode("Q".into())));
        assert_eq!(
            g.add_labeled_node("A"),
            Err(Error::DuplicateLabel("A".into()))
        );
    }

    #[test]
    fn missing_heuristic_is_zero() {
        let mut h: HeuristicTable = [("A", 4.0)].into_iter().collect();
        assert_eq!(h.get("A"), 4.0);
        assert_eq!(h.get("B"), 0.0);
        h.set("B", -2.5);
        assert_eq!(h.get("B"), -2.5);
        assert_eq!(h.remove("A"), Some(4.0));
        assert_eq!(h.get("A"), 0.0);
    }

    #[test]
    fn snapshot_from_json() {
        let json = r#"{
            "nodes": ["S", "A", "G"],
            "edges": [["S", "A"], ["A", "G"]],
            "heuristics": {"S": 5, "A": 2}
        }"#;
        let snapshot: GraphSnapshot = serde_json::from_str(json).unwrap();
        let g = snapshot.to_graph().unwrap();
        assert_eq!(g.len(), 3);
        assert_eq!(g.edges().len(), 2);
        assert_eq!(snapshot.heuristics.get("A"), 2.0);
        assert_eq!(snapshot.heuristics.get("G"), 0.0);

        let round = g.to_snapshot();
        assert_eq!(round.nodes, snapshot.nodes);
        assert_eq!(round.edges, snapshot.edges);
    }

    #[test]
    fn snapshot_with_unknown_endpoint_fails() {
        let snapshot = GraphSnapshot {
            nodes: vec!["A".into()],
            edges: vec![("A".into(), "B".into())],
            heuristics: HeuristicTable::default(),
        };
        assert_eq!(
            snapshot.to_graph().unwrap_err(),
            Error::UnknownNode("B".into())
        );
    }
}
