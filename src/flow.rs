use alloc::collections::BTreeMap;
use alloc::format;
use alloc::vec::Vec;
use core::ops::Index;

use crate::capacity::Capacity;
use crate::edge::{Direction, Edge, EdgeIndex};
use crate::error::Error;
use crate::graph::FlowGraph;
use crate::id::Id;

/// The flow assigned to every edge of a graph, i.e. the part of each edge's capacity that is used.
///
/// The value of an edge is the net flow from its `start` to its `end`. Flow already pushed forward
/// can be cancelled by traversing the edge backward, so no reverse edges are stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flow<C> {
    used: Vec<C>,
}

impl<C: Capacity> Flow<C> {
    /// The all-zero flow over the edges of `graph`.
    pub fn zero<N: Id>(graph: &FlowGraph<N, C>) -> Self {
        Self {
            used: graph.edges().iter().map(|_| C::zero()).collect(),
        }
    }

    /// Panics if `idx` is not an edge of the graph this flow was created for.
    pub fn get(&self, idx: EdgeIndex) -> C {
        self.used[idx.0]
    }

    pub fn set(&mut self, idx: EdgeIndex, value: C) {
        self.used[idx.0] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (EdgeIndex, C)> + '_ {
        self.used
            .iter()
            .enumerate()
            .map(|(i, used)| (EdgeIndex(i), *used))
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Whether flow can still be pushed over `edge` in direction `dir`.
    pub fn has_residual<N>(&self, idx: EdgeIndex, edge: &Edge<N, C>, dir: Direction) -> bool {
        match dir {
            Direction::Forward => self.get(idx) < edge.capacity(),
            Direction::Backward => self.get(idx) > C::zero(),
        }
    }

    /// The residual capacity of `edge` in direction `dir`.
    pub fn residual<N>(
        &self,
        idx: EdgeIndex,
        edge: &Edge<N, C>,
        dir: Direction,
    ) -> Result<C, Error> {
        match dir {
            Direction::Forward => edge
                .capacity()
                .checked_sub(&self.get(idx))
                .ok_or(Error::ArithmeticOverflow),
            Direction::Backward => Ok(self.get(idx)),
        }
    }

    /// Pushes `amount` over the edge in direction `dir`; a backward push cancels flow.
    pub fn push(&mut self, idx: EdgeIndex, dir: Direction, amount: C) -> Result<(), Error> {
        let used = self.get(idx);
        let used = match dir {
            Direction::Forward => used.checked_add(&amount),
            Direction::Backward => used.checked_sub(&amount),
        }
        .ok_or(Error::ArithmeticOverflow)?;
        self.set(idx, used);
        Ok(())
    }

    /// The value of the flow: the sum of flow on the edges leaving `source`, taken from the
    /// source's incidence list.
    pub fn value<N: Id>(&self, graph: &FlowGraph<N, C>, source: &N) -> Result<C, Error> {
        graph
            .incident_edges(source)?
            .filter(|(_, e)| e.start() == source)
            .try_fold(C::zero(), |acc, (idx, _)| {
                acc.checked_add(&self.get(idx))
                    .ok_or(Error::ArithmeticOverflow)
            })
    }
}

impl<C> Index<EdgeIndex> for Flow<C> {
    type Output = C;

    fn index(&self, idx: EdgeIndex) -> &Self::Output {
        &self.used[idx.0]
    }
}

/// The realized flow value of `flow` out of `source`. See [`Flow::value`].
pub fn total_flow<N: Id, C: Capacity>(
    flow: &Flow<C>,
    graph: &FlowGraph<N, C>,
    source: &N,
) -> Result<C, Error> {
    flow.value(graph, source)
}

/// Checks that `flow` is a valid `source`-`sink` flow on `graph`: every edge carries between zero
/// and its capacity, and every other node forwards exactly what it receives.
pub fn check<N: Id, C: Capacity>(
    graph: &FlowGraph<N, C>,
    flow: &Flow<C>,
    source: &N,
    sink: &N,
) -> Result<(), Error> {
    if flow.len() != graph.edge_count() {
        return Err(Error::AlgoSpecific(format!(
            "flow covers {} edges, graph has {}",
            flow.len(),
            graph.edge_count()
        )));
    }

    if let Some((idx, _)) = graph
        .edge_indices()
        .zip(graph.edges())
        .find(|(idx, e)| flow[*idx] < C::zero() || flow[*idx] > e.capacity())
    {
        return Err(Error::CapacityExceeded(idx));
    }

    // (inflow, outflow) per node
    let balance = graph.edge_indices().zip(graph.edges()).try_fold(
        BTreeMap::<&N, (C, C)>::new(),
        |mut acc, (idx, e)| {
            let (_, out) = acc.entry(e.start()).or_insert((C::zero(), C::zero()));
            *out = out.checked_add(&flow[idx]).ok_or(Error::ArithmeticOverflow)?;
            let (inc, _) = acc.entry(e.end()).or_insert((C::zero(), C::zero()));
            *inc = inc.checked_add(&flow[idx]).ok_or(Error::ArithmeticOverflow)?;
            Ok::<_, Error>(acc)
        },
    )?;

    match balance
        .into_iter()
        .find(|(n, (inc, out))| *n != source && *n != sink && inc != out)
    {
        Some((n, _)) => Err(Error::ConservationViolated(format!("{n:?}"))),
        None => Ok(()),
    }
}
