use std::collections::VecDeque;

use log::debug;

use super::Traversal;
use crate::error::Result;
use crate::graph::{Graph, NodeId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsStep {
    pub node: NodeId,
    /// The queue after `node` was expanded, front first
    pub queue: Vec<NodeId>,
}

/// Breadth-first traversal.
///
/// Nodes are marked as seen when they are enqueued, so no node is ever queued twice.
pub struct Bfs<'g> {
    graph: &'g Graph,
    start: NodeId,
    queue: VecDeque<NodeId>,
    seen: Vec<bool>,
    order: Vec<NodeId>,
}

impl<'g> Bfs<'g> {
    pub fn new(graph: &'g Graph, start: NodeId) -> Result<Self> {
        graph.check(start)?;
        let mut bfs = Bfs {
            graph,
            start,
            queue: VecDeque::with_capacity(graph.len()),
            seen: vec![false; graph.len()],
            order: Vec::with_capacity(graph.len()),
        };
        bfs.restart();
        Ok(bfs)
    }
}

impl Iterator for Bfs<'_> {
    type Item = BfsStep;

    fn next(&mut self) -> Option<BfsStep> {
        let node = self.queue.pop_front()?;
        self.order.push(node);
        for neighbor in self.graph.neighbors(node) {
            if !self.seen[neighbor.0] {
                self.seen[neighbor.0] = true;
                self.queue.push_back(neighbor);
            }
        }
        debug!("bfs visits {}", self.graph.label(node));
        Some(BfsStep {
            node,
            queue: self.queue.iter().copied().collect(),
        })
    }
}

impl Traversal for Bfs<'_> {
    fn restart(&mut self) {
        self.queue.clear();
        self.seen.iter_mut().for_each(|s| *s = false);
        self.order.clear();
        self.seen[self.start.0] = true;
        self.queue.push_back(self.start);
    }

    fn visited(&self) -> &[NodeId] {
        &self.order
    }
}

/// Every node reachable from `start`, in breadth-first order.
pub fn bfs(graph: &Graph, start: NodeId) -> Result<Vec<NodeId>> {
    Ok(Bfs::new(graph, start)?.map(|step| step.node).collect())
}
