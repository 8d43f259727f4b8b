use alloc::vec::Vec;

use crate::edge::EdgeIndex;

/// A node of the flow graph: the edges incident to it (as either endpoint), in the order they
/// were added to the graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    edges: Vec<EdgeIndex>,
}

impl Node {
    pub(crate) fn push(&mut self, edge: EdgeIndex) {
        self.edges.push(edge);
    }

    pub fn edges(&self) -> &[EdgeIndex] {
        &self.edges
    }
}
