use alloc::vec::Vec;
use core::cmp::min;

use itertools::Itertools;

use crate::algo::bfs::augmenting_path;
use crate::algo::MaxFlow;
use crate::capacity::Capacity;
use crate::edge::{Direction, EdgeIndex};
use crate::error::Error;
use crate::flow::Flow;
use crate::graph::FlowGraph;
use crate::id::Id;

/// The Edmonds-Karp algorithm: Ford-Fulkerson with shortest augmenting paths.
#[derive(Clone, Debug, Default)]
pub struct EdmondsKarp {
    augmentations: usize,
}

impl EdmondsKarp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of augmenting paths applied by the last run.
    pub fn augmentations(&self) -> usize {
        self.augmentations
    }
}

impl<N: Id, C: Capacity> MaxFlow<N, C> for EdmondsKarp {
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

        self.augmentations = 0;
        let mut flow = Flow::zero(graph);

        // nothing has to move for a node to reach itself
        if source == sink {
            log::debug!("source equals sink {source:?}, returning zero flow");
            return Ok(flow);
        }

        while let Some(path) = augmenting_path(graph, source, sink, &flow)? {
            let steps = orient(graph, source, &path);

            let bottleneck = steps.iter().try_fold(C::max_value(), |acc, &(idx, dir)| {
                Ok::<_, Error>(min(acc, flow.residual(idx, &graph.edges()[idx.0], dir)?))
            })?;
            if bottleneck == C::zero() {
                // unreachable as long as the search only follows residual edges
                break;
            }

            log::trace!(
                "augmenting path: {}",
                path.iter().map(|idx| &graph.edges()[idx.0]).join(", ")
            );

            for (idx, dir) in steps {
                flow.push(idx, dir, bottleneck)?;
            }

            self.augmentations += 1;
            log::debug!(
                "augmentation {}: {} edges, bottleneck {bottleneck}",
                self.augmentations,
                path.len()
            );
        }

        log::info!(
            "max flow {source:?} -> {sink:?} found after {} augmentations",
            self.augmentations
        );

        Ok(flow)
    }
}

/// Pairs every edge of a path starting at `source` with the direction the path traverses it in.
fn orient<N: Id, C: Capacity>(
    graph: &FlowGraph<N, C>,
    source: &N,
    path: &[EdgeIndex],
) -> Vec<(EdgeIndex, Direction)> {
    let mut current = source;
    path.iter()
        .map(|&idx| {
            let e = &graph.edges()[idx.0];
            let dir = e.direction_from(current).unwrap_or(Direction::Backward);
            current = e.head(dir);
            (idx, dir)
        })
        .collect()
}

/// Computes a maximum flow from `source` to `sink` using the Edmonds-Karp algorithm.
///
/// Returns the flow on every edge. `source == sink` yields the zero flow. Fails if either node is
/// not in the graph, or if pushing flow overflows the capacity type.
pub fn compute_max_flow<N: Id, C: Capacity>(
    graph: &FlowGraph<N, C>,
    source: &N,
    sink: &N,
) -> Result<Flow<C>, Error> {
    EdmondsKarp::new().max_flow(graph, source, sink)
}
