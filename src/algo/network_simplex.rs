use alloc::collections::BTreeMap;
use alloc::format;
use core::cmp::min;

use mcmf::{Capacity as McmfCapacity, Cost, GraphBuilder, Vertex};
use num_traits::{NumCast, ToPrimitive};

use crate::algo::MaxFlow;
use crate::capacity::Capacity;
use crate::error::Error;
use crate::flow::Flow;
use crate::graph::FlowGraph;
use crate::id::Id;

/// Max flow through LEMON's network simplex (via the `mcmf` crate) with all costs set to zero.
///
/// The total capacity leaving the source must fit into an `i32`; larger edge capacities are
/// clamped to it. The flow found on a node pair is spread over that pair's
/// parallel edges in insertion order.
#[derive(Clone, Debug, Default)]
pub struct NetworkSimplex;

impl<N, C> MaxFlow<N, C> for NetworkSimplex
where
    N: Id,
    C: Capacity + ToPrimitive + NumCast,
{
    type Error = Error;

    fn max_flow(
        &mut self,
        graph: &FlowGraph<N, C>,
        source: &N,
        sink: &N,
    ) -> Result<Flow<C>, Self::Error> {
        for n in [source, sink] {
            if !graph.contains_node(n) {
                return Err(Error::node_not_found(n));
            }
        }

        let mut flow = Flow::zero(graph);
        if source == sink {
            return Ok(flow);
        }

        // no edge of a maximum flow needs more than what can leave the source, which also bounds
        // every amount LEMON computes with
        let bound = graph
            .incident_edges(source)?
            .filter(|(_, e)| e.start() == source && !e.is_self_loop())
            .try_fold(C::zero(), |acc, (_, e)| acc.checked_add(&e.capacity()))
            .and_then(|bound| bound.to_i32().map(|limit| (bound, limit)));
        let Some((bound, limit)) = bound else {
            return Err(Error::AlgoSpecific(format!(
                "capacity leaving {source:?} does not fit into i32"
            )));
        };

        let mut g = GraphBuilder::<N>::new();
        for e in graph.edges().iter().filter(|e| !e.is_self_loop()) {
            let capacity = min(e.capacity(), bound).to_i32().ok_or_else(|| {
                Error::AlgoSpecific(format!("capacity {} does not fit into i32", e.capacity()))
            })?;
            g.add_edge(
                Vertex::Node(e.start().clone()),
                Vertex::Node(e.end().clone()),
                McmfCapacity(capacity),
                Cost(0),
            );
        }
        g.add_edge(
            Vertex::Source,
            Vertex::Node(source.clone()),
            McmfCapacity(limit),
            Cost(0),
        );
        g.add_edge(
            Vertex::Node(sink.clone()),
            Vertex::Sink,
            McmfCapacity(limit),
            Cost(0),
        );

        let (_, paths) = g.mcmf();

        // total flow per ordered node pair
        let mut pairs = BTreeMap::<(N, N), u64>::new();
        for path in &paths {
            for f in &path.flows {
                if let (Vertex::Node(a), Vertex::Node(b)) = (&f.a, &f.b) {
                    let amount = u64::try_from(f.amount).unwrap_or_default();
                    *pairs.entry((a.clone(), b.clone())).or_default() += amount;
                }
            }
        }

        for (idx, e) in graph.edge_indices().zip(graph.edges()) {
            let Some(remaining) = pairs.get_mut(&(e.start().clone(), e.end().clone())) else {
                continue;
            };
            let capacity = e.capacity().to_u64().unwrap_or(u64::MAX);
            let used = min(*remaining, capacity);
            *remaining -= used;
            flow.set(idx, <C as NumCast>::from(used).ok_or(Error::ArithmeticOverflow)?);
        }

        Ok(flow)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;
    use crate::algo::edmonds_karp::compute_max_flow;
    use crate::flow::check;

    fn assert_same_value(edges: Vec<(i32, i32, i64)>, source: i32, sink: i32, expected: i64) {
        let g = FlowGraph::from_edges(edges).unwrap();
        let flow = NetworkSimplex.max_flow(&g, &source, &sink).unwrap();

        assert_eq!(check(&g, &flow, &source, &sink), Ok(()));
        assert_eq!(flow.value(&g, &source), Ok(expected));

        let reference = compute_max_flow(&g, &source, &sink).unwrap();
        assert_eq!(reference.value(&g, &source), Ok(expected));
    }

    #[test]
    fn four_nodes() {
        assert_same_value(
            vec![(1, 2, 4), (1, 3, 2), (2, 4, 1), (2, 3, 3), (3, 4, 6)],
            1,
            4,
            6,
        );
    }

    #[test]
    fn textbook_eight_nodes() {
        assert_same_value(
            vec![
                (0, 1, 38),
                (0, 2, 1),
                (0, 6, 2),
                (1, 2, 8),
                (1, 4, 13),
                (1, 3, 10),
                (2, 3, 26),
                (3, 6, 24),
                (3, 5, 8),
                (3, 7, 1),
                (4, 2, 2),
                (4, 7, 7),
                (4, 5, 1),
                (5, 7, 7),
                (6, 7, 27),
            ],
            0,
            7,
            31,
        );
    }

    #[test]
    fn unbounded_capacities_are_clamped() {
        assert_same_value(
            vec![
                (1, 3, 0),
                (1, 2, 6),
                (1, 4, 5),
                (1, 5, 5),
                (2, 4, 3),
                (2, 5, 1),
                (2, 6, 3),
                (3, 2, 3),
                (3, 4, i64::MAX),
                (3, 5, 2),
                (3, 6, 9),
                (4, 3, i64::MAX),
                (4, 6, 0),
                (5, 4, 3),
                (5, 6, 4),
            ],
            1,
            6,
            16,
        );
    }

    #[test]
    fn source_capacity_beyond_i32_is_an_error() {
        let max = i64::from(i32::MAX);
        let g = FlowGraph::from_edges(vec![(0, 1, max), (0, 1, max)]).unwrap();
        assert!(matches!(
            NetworkSimplex.max_flow(&g, &0, &1),
            Err(Error::AlgoSpecific(_))
        ));
    }

    #[test]
    fn unknown_nodes_and_source_equals_sink() {
        let g = FlowGraph::from_edges(vec![(1, 2, 5i64)]).unwrap();
        assert!(matches!(
            NetworkSimplex.max_flow(&g, &3, &2),
            Err(Error::NodeNotFound(_))
        ));
        let flow = NetworkSimplex.max_flow(&g, &1, &1).unwrap();
        assert_eq!(flow, Flow::zero(&g));
    }
}
