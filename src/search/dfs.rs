use log::debug;

use super::Traversal;
use crate::error::Result;
use crate::graph::{Graph, NodeId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsStep {
    pub node: NodeId,
    /// Neighbours pushed after visiting `node`, in push order (the last one is explored next)
    pub pushed: Vec<NodeId>,
}

/// Depth-first traversal with an explicit stack.
///
/// A node may sit on the stack several times, it is emitted on its first pop only.
/// Neighbours are pushed in reverse edge-list order so they pop in edge-list order.
pub struct Dfs<'g> {
    graph: &'g Graph,
    start: NodeId,
    stack: Vec<NodeId>,
    visited: Vec<bool>,
    order: Vec<NodeId>,
}

impl<'g> Dfs<'g> {
    pub fn new(graph: &'g Graph, start: NodeId) -> Result<Self> {
        graph.check(start)?;
        let mut dfs = Dfs {
            graph,
            start,
            stack: Vec::new(),
            visited: vec![false; graph.len()],
            order: Vec::with_capacity(graph.len()),
        };
        dfs.restart();
        Ok(dfs)
    }

    /// Current stack contents, bottom first
    pub fn stack(&self) -> &[NodeId] {
        &self.stack
    }
}

impl Iterator for Dfs<'_> {
    type Item = DfsStep;

    fn next(&mut self) -> Option<DfsStep> {
        loop {
            let node = self.stack.pop()?;
            if self.visited[node.0] {
                continue;
            }
            self.visited[node.0] = true;
            self.order.push(node);

            let mut pushed: Vec<NodeId> = self
                .graph
                .neighbors(node)
                .filter(|n| !self.visited[n.0])
                .collect();
            pushed.reverse();
            self.stack.extend_from_slice(&pushed);
            debug!("dfs visits {}", self.graph.label(node));
            return Some(DfsStep { node, pushed });
        }
    }
}

impl Traversal for Dfs<'_> {
    fn restart(&mut self) {
        self.stack.clear();
        self.visited.iter_mut().for_each(|v| *v = false);
        self.order.clear();
        self.stack.push(self.start);
    }

    fn visited(&self) -> &[NodeId] {
        &self.order
    }
}

/// Every node reachable from `start`, in depth-first pre-order.
pub fn dfs(graph: &Graph, start: NodeId) -> Result<Vec<NodeId>> {
    Ok(Dfs::new(graph, start)?.map(|step| step.node).collect())
}
