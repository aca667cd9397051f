//! Graph traversals through the public API
use std::collections::{HashMap, HashSet, VecDeque};

use searchlab::error::Error;
use searchlab::graph::{Graph, GraphSnapshot, NodeId};
use searchlab::search::{best_first, bfs, dfs, BestFirst, Bfs, SearchOutcome, Traversal};

const SAMPLE: &str = r#"{
    "nodes": ["A", "B", "C", "D", "E", "F", "G", "H"],
    "edges": [["A", "B"], ["A", "C"], ["B", "D"], ["C", "D"], ["D", "E"], ["E", "F"], ["C", "F"], ["G", "H"]],
    "heuristics": {"A": 9, "B": 3, "C": 6, "D": 4, "E": 2, "F": 0}
}"#;

fn sample() -> (Graph, GraphSnapshot) {
    let snapshot: GraphSnapshot = serde_json::from_str(SAMPLE).unwrap();
    (snapshot.to_graph().unwrap(), snapshot)
}

fn hops(g: &Graph, start: NodeId) -> HashMap<NodeId, usize> {
    let mut dist = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    while let Some(n) = queue.pop_front() {
        for m in g.neighbors(n) {
            if !dist.contains_key(&m) {
                dist.insert(m, dist[&n] + 1);
                queue.push_back(m);
            }
        }
    }
    dist
}

#[test]
fn bfs_emits_reachable_nodes_by_hop_count() {
    let (g, _) = sample();
    let a = g.node("A").unwrap();
    let order = bfs(&g, a).unwrap();
    let dist = hops(&g, a);
    assert_eq!(order.len(), dist.len());
    assert!(order.windows(2).all(|w| dist[&w[0]] <= dist[&w[1]]));
    let labels: Vec<_> = order.iter().map(|&n| g.label(n)).collect();
    assert_eq!(labels, ["A", "B", "C", "D", "F", "E"]);
}

#[test]
fn dfs_visits_each_reachable_node_once() {
    let (g, _) = sample();
    let order = dfs(&g, g.node("A").unwrap()).unwrap();
    let unique: HashSet<_> = order.iter().collect();
    assert_eq!(unique.len(), order.len());
    let labels: Vec<_> = order.iter().map(|&n| g.label(n)).collect();
    assert_eq!(labels, ["A", "B", "D", "C", "F", "E"]);
}

#[test]
fn disconnected_part_is_never_reached() {
    let (g, _) = sample();
    let order = bfs(&g, g.node("G").unwrap()).unwrap();
    assert_eq!(order, vec![g.node("G").unwrap(), g.node("H").unwrap()]);
}

#[test]
fn best_first_reaches_the_goal_greedily() {
    let (g, snapshot) = sample();
    let trace = best_first(&g, g.node("A").unwrap(), g.node("F").unwrap(), &snapshot.heuristics).unwrap();
    assert!(trace.found());
    let labels: Vec<_> = trace.visited.iter().map(|&n| g.label(n)).collect();
    assert_eq!(labels, ["A", "B", "D", "E", "F"]);
}

#[test]
fn best_first_reports_missing_path() {
    let (g, snapshot) = sample();
    let mut search = BestFirst::new(&g, g.node("A").unwrap(), g.node("H").unwrap(), &snapshot.heuristics).unwrap();
    let visited = search.by_ref().count();
    assert_eq!(visited, 6);
    assert_eq!(search.outcome(), SearchOutcome::NoPath);
}

#[test]
fn unknown_start_is_an_error() {
    let (g, _) = sample();
    assert_eq!(g.node("Q"), Err(Error::UnknownNode("Q".into())));
    assert_eq!(bfs(&g, NodeId(42)), Err(Error::NodeOutOfRange(42)));
}

#[test]
fn restart_replays_the_same_trace() {
    let (g, _) = sample();
    let mut walk = Bfs::new(&g, g.node("C").unwrap()).unwrap();
    let first: Vec<_> = walk.by_ref().take(3).map(|s| s.node).collect();
    walk.restart();
    assert!(walk.visited().is_empty());
    let second: Vec<_> = walk.by_ref().take(3).map(|s| s.node).collect();
    assert_eq!(first, second);
}
