use log::debug;

use super::Traversal;
use crate::error::Result;
use crate::graph::{Graph, HeuristicTable, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    InProgress,
    GoalReached,
    /// The frontier ran dry before the goal was visited
    NoPath,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BestFirstStep {
    pub node: NodeId,
    /// Heuristic value of `node`
    pub score: f64,
    /// Frontier after `node` was expanded, in insertion order
    pub frontier: Vec<NodeId>,
}

/// Greedy best-first search.
///
/// Each step stably sorts the whole frontier by heuristic value and pops the front, so
/// ties go to whichever node entered the frontier first. The frontier may hold a node
/// several times; the visited check at pop time decides whether it is expanded.
pub struct BestFirst<'g, 'h> {
    graph: &'g Graph,
    heuristics: &'h HeuristicTable,
    start: NodeId,
    goal: NodeId,
    frontier: Vec<NodeId>,
    visited: Vec<bool>,
    order: Vec<NodeId>,
    outcome: SearchOutcome,
}

impl<'g, 'h> BestFirst<'g, 'h> {
    pub fn new(
        graph: &'g Graph,
        start: NodeId,
        goal: NodeId,
        heuristics: &'h HeuristicTable,
    ) -> Result<Self> {
        graph.check(start)?;
        graph.check(goal)?;
        let mut search = BestFirst {
            graph,
            heuristics,
            start,
            goal,
            frontier: Vec::new(),
            visited: vec![false; graph.len()],
            order: Vec::new(),
            outcome: SearchOutcome::InProgress,
        };
        search.restart();
        Ok(search)
    }

    pub fn outcome(&self) -> SearchOutcome {
        self.outcome
    }

    pub fn frontier(&self) -> &[NodeId] {
        &self.frontier
    }

    fn score(&self, node: NodeId) -> f64 {
        self.heuristics.get(self.graph.label(node))
    }
}

impl Iterator for BestFirst<'_, '_> {
    type Item = BestFirstStep;

    fn next(&mut self) -> Option<BestFirstStep> {
        if self.outcome != SearchOutcome::InProgress {
            return None;
        }
        let (graph, heuristics) = (self.graph, self.heuristics);
        loop {
            if self.frontier.is_empty() {
                debug!("best-first search exhausted without reaching {}", graph.label(self.goal));
                self.outcome = SearchOutcome::NoPath;
                return None;
            }
            self.frontier.sort_by(|a, b| {
                heuristics
                    .get(graph.label(*a))
                    .total_cmp(&heuristics.get(graph.label(*b)))
            });
            let node = self.frontier.remove(0);
            if self.visited[node.0] {
                continue;
            }
            self.visited[node.0] = true;
            self.order.push(node);
            debug!("best-first visits {}", graph.label(node));

            if node == self.goal {
                self.outcome = SearchOutcome::GoalReached;
            } else {
                for neighbor in graph.neighbors(node) {
                    if !self.visited[neighbor.0] {
                        self.frontier.push(neighbor);
                    }
                }
            }
            return Some(BestFirstStep {
                node,
                score: self.score(node),
                frontier: self.frontier.clone(),
            });
        }
    }
}

impl Traversal for BestFirst<'_, '_> {
    fn restart(&mut self) {
        self.frontier.clear();
        self.visited.iter_mut().for_each(|v| *v = false);
        self.order.clear();
        self.outcome = SearchOutcome::InProgress;
        self.frontier.push(self.start);
    }

    fn visited(&self) -> &[NodeId] {
        &self.order
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BestFirstTrace {
    pub visited: Vec<NodeId>,
    pub outcome: SearchOutcome,
}

impl BestFirstTrace {
    pub fn found(&self) -> bool {
        self.outcome == SearchOutcome::GoalReached
    }
}

/// Run a best-first search to completion. Not finding the goal is a normal outcome,
/// the partial trace is returned either way.
pub fn best_first(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    heuristics: &HeuristicTable,
) -> Result<BestFirstTrace> {
    let mut search = BestFirst::new(graph, start, goal, heuristics)?;
    let visited = search.by_ref().map(|step| step.node).collect();
    Ok(BestFirstTrace {
        visited,
        outcome: search.outcome(),
    })
}
