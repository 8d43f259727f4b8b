use core::fmt::Debug;

pub mod bfs;
pub mod edmonds_karp;
pub mod min_cut;
#[cfg(feature = "lemon-cpp")]
pub mod network_simplex;

use crate::flow::Flow;
use crate::graph::FlowGraph;

/// A maximum flow algorithm.
pub trait MaxFlow<N, C> {
    type Error: Debug;

    /// Run the algorithm over the specified graph and return a maximum `source`-`sink` flow,
    /// i.e. the amount of every edge's capacity that is used.
    fn max_flow(
        &mut self,
        graph: &FlowGraph<N, C>,
        source: &N,
        sink: &N,
    ) -> Result<Flow<C>, Self::Error>;
}
