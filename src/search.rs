//! Graph traversals driven one step at a time.
//!
//! Every traversal is an `Iterator` whose items are the nodes it emits together with a
//! snapshot of its frontier, so a caller can render the search at its own pace. Dropping
//! a traversal cancels it; calling `restart` starts it over from the initial frontier.

use crate::graph::NodeId;

pub mod best_first;
pub mod bfs;
pub mod dfs;

pub use best_first::{best_first, BestFirst, BestFirstStep, BestFirstTrace, SearchOutcome};
pub use bfs::{bfs, Bfs, BfsStep};
pub use dfs::{dfs, Dfs, DfsStep};

pub trait Traversal: Iterator {
    /// Forget all progress and start over from the start node.
    fn restart(&mut self);
    /// Nodes emitted so far, in emission order.
    fn visited(&self) -> &[NodeId];
}
