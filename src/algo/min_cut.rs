use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::algo::bfs::reachable;
use crate::capacity::Capacity;
use crate::edge::EdgeIndex;
use crate::error::Error;
use crate::flow::Flow;
use crate::graph::FlowGraph;
use crate::id::Id;

/// An edge cut separating the nodes reachable from the source from all others.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinCut<N, C> {
    /// Nodes on the source side of the cut.
    pub source_side: BTreeSet<N>,
    /// Edges leading from the source side to the other side, in insertion order.
    pub edges: Vec<EdgeIndex>,
    /// Sum of the capacities of `edges`.
    pub capacity: C,
}

/// Derives the cut from the residual graph of `flow`.
///
/// When `flow` is maximum the sink is not on the source side, every cut edge is saturated, and the
/// cut capacity equals the flow value.
pub fn min_cut<N: Id, C: Capacity>(
    graph: &FlowGraph<N, C>,
    flow: &Flow<C>,
    source: &N,
) -> Result<MinCut<N, C>, Error> {
    let source_side: BTreeSet<N> = reachable(graph, source, flow)?
        .into_iter()
        .cloned()
        .collect();

    let edges: Vec<_> = graph
        .edge_indices()
        .zip(graph.edges())
        .filter(|(_, e)| source_side.contains(e.start()) && !source_side.contains(e.end()))
        .map(|(idx, _)| idx)
        .collect();

    let capacity = edges.iter().try_fold(C::zero(), |acc, idx| {
        acc.checked_add(&graph.edges()[idx.0].capacity())
            .ok_or(Error::ArithmeticOverflow)
    })?;

    Ok(MinCut {
        source_side,
        edges,
        capacity,
    })
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::algo::edmonds_karp::compute_max_flow;

    #[test]
    fn cut_matches_flow_value() {
        let g = FlowGraph::from_edges(vec![(1, 2, 4), (1, 3, 2), (2, 4, 1), (2, 3, 3), (3, 4, 6)])
            .unwrap();
        let flow = compute_max_flow(&g, &1, &4).unwrap();
        let cut = min_cut(&g, &flow, &1).unwrap();

        assert_eq!(cut.source_side, BTreeSet::from([1]));
        assert_eq!(cut.edges, vec![EdgeIndex(0), EdgeIndex(1)]);
        assert_eq!(cut.capacity, 6);
        assert_eq!(flow.value(&g, &1), Ok(cut.capacity));
    }

    #[test]
    fn disconnected_sink() {
        let g = FlowGraph::from_edges(vec![("s", "a", 3u32), ("b", "t", 3)]).unwrap();
        let flow = compute_max_flow(&g, &"s", &"t").unwrap();
        let cut = min_cut(&g, &flow, &"s").unwrap();

        assert_eq!(cut.source_side, BTreeSet::from(["s", "a"]));
        assert!(cut.edges.is_empty());
        assert_eq!(cut.capacity, 0);
    }
}
