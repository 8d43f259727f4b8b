use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use crate::capacity::Capacity;
use crate::edge::{Edge, EdgeIndex};
use crate::error::Error;
use crate::id::Id;
use crate::node::Node;

/// A directed, capacitated graph.
///
/// Nodes are created implicitly the first time an edge references them. The graph keeps the
/// global edge list and each node's incidence list in insertion order, which fixes the order in
/// which the augmenting path search explores the graph.
#[derive(Clone, Debug)]
pub struct FlowGraph<N, C> {
    nodes: BTreeMap<N, Node>,
    edges: Vec<Edge<N, C>>,
}

impl<N, C> Default for FlowGraph<N, C> {
    fn default() -> Self {
        Self {
            nodes: BTreeMap::new(),
            edges: Vec::new(),
        }
    }
}

impl<N: Id, C: Capacity> FlowGraph<N, C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from `(start, end, capacity)` triples, failing on the first invalid one.
    pub fn from_edges<I>(edges: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (N, N, C)>,
    {
        edges
            .into_iter()
            .try_fold(Self::new(), |mut acc, (start, end, capacity)| {
                acc.add_edge(start, end, capacity)?;
                Ok(acc)
            })
    }

    /// Builds a graph from the edges of a petgraph graph, with capacities given by `capacity`.
    ///
    /// Nodes without edges are not part of the resulting graph.
    pub fn from_graph<G, F>(g: G, mut capacity: F) -> Result<Self, Error>
    where
        G: IntoEdgeReferences<NodeId = N>,
        F: FnMut(G::EdgeRef) -> C,
    {
        g.edge_references().try_fold(Self::new(), |mut acc, e| {
            acc.add_edge(e.source(), e.target(), capacity(e))?;
            Ok(acc)
        })
    }

    /// Adds the edge `start -> end`, creating either node on first reference.
    pub fn add_edge(&mut self, start: N, end: N, capacity: C) -> Result<EdgeIndex, Error> {
        let edge = Edge::new(start, end, capacity)?;
        let idx = EdgeIndex(self.edges.len());

        self.nodes
            .entry(edge.start().clone())
            .or_default()
            .push(idx);
        // a self-loop is listed once in its node's incidence list
        if !edge.is_self_loop() {
            self.nodes.entry(edge.end().clone()).or_default().push(idx);
        }
        self.edges.push(edge);

        Ok(idx)
    }

    pub fn node(&self, id: &N) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// The graph's own copy of the identifier `id`.
    pub(crate) fn node_key(&self, id: &N) -> Option<&N> {
        self.nodes.get_key_value(id).map(|(k, _)| k)
    }

    pub fn contains_node(&self, id: &N) -> bool {
        self.nodes.contains_key(id)
    }

    /// All edges in insertion order; `edges()[i]` is the edge with handle `i`.
    pub fn edges(&self) -> &[Edge<N, C>] {
        &self.edges
    }

    pub fn edge(&self, idx: EdgeIndex) -> Option<&Edge<N, C>> {
        self.edges.get(idx.0)
    }

    pub fn edge_indices(&self) -> impl Iterator<Item = EdgeIndex> {
        (0..self.edges.len()).map(EdgeIndex)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The edges incident to `id` in incidence order.
    pub fn incident_edges<'a>(
        &'a self,
        id: &N,
    ) -> Result<impl Iterator<Item = (EdgeIndex, &'a Edge<N, C>)> + 'a, Error> {
        let node = self.node(id).ok_or_else(|| Error::node_not_found(id))?;
        Ok(node.edges().iter().map(move |&idx| (idx, &self.edges[idx.0])))
    }
}
