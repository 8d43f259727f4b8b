use core::fmt;

use serde::{Deserialize, Serialize};

use crate::capacity::Capacity;
use crate::error::Error;

/// Handle of an edge: its position in the graph's insertion order.
///
/// Edges are distinguished by handle, so parallel edges with identical endpoints and capacity are
/// tracked independently.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeIndex(pub(crate) usize);

impl EdgeIndex {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The direction an edge is traversed in by a path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// From `start` to `end`, consuming spare capacity.
    Forward,
    /// From `end` to `start`, cancelling flow already pushed.
    Backward,
}

/// A directed edge `start -> end` with a fixed capacity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "RawEdge<N, C>",
    bound(deserialize = "N: Deserialize<'de>, C: Capacity + Deserialize<'de>")
)]
pub struct Edge<N, C> {
    start: N,
    end: N,
    capacity: C,
}

impl<N, C: Capacity> Edge<N, C> {
    pub fn new(start: N, end: N, capacity: C) -> Result<Self, Error> {
        if capacity < C::zero() {
            Err(Error::NegativeCapacity)
        } else {
            Ok(Self {
                start,
                end,
                capacity,
            })
        }
    }
}

impl<N, C: Copy> Edge<N, C> {
    pub fn start(&self) -> &N {
        &self.start
    }

    pub fn end(&self) -> &N {
        &self.end
    }

    pub fn capacity(&self) -> C {
        self.capacity
    }
}

impl<N: PartialEq, C> Edge<N, C> {
    pub fn is_self_loop(&self) -> bool {
        self.start == self.end
    }

    /// The direction of a traversal leaving `from`, or `None` if `from` is not an endpoint.
    /// A forward traversal is preferred when both endpoints match.
    pub fn direction_from(&self, from: &N) -> Option<Direction> {
        if &self.start == from {
            Some(Direction::Forward)
        } else if &self.end == from {
            Some(Direction::Backward)
        } else {
            None
        }
    }

    /// The node reached by traversing the edge in `dir`.
    pub fn head(&self, dir: Direction) -> &N {
        match dir {
            Direction::Forward => &self.end,
            Direction::Backward => &self.start,
        }
    }
}

impl<N: fmt::Debug, C: fmt::Display> fmt::Display for Edge<N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}->{:?}({})", self.start, self.end, self.capacity)
    }
}

/// An unvalidated edge record, e.g. a row of an input file.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
pub struct RawEdge<N, C> {
    pub start: N,
    pub end: N,
    pub capacity: C,
}

impl<N, C: Capacity> TryFrom<RawEdge<N, C>> for Edge<N, C> {
    type Error = Error;

    fn try_from(e: RawEdge<N, C>) -> Result<Self, Self::Error> {
        Self::new(e.start, e.end, e.capacity)
    }
}

impl<N, C> From<Edge<N, C>> for RawEdge<N, C> {
    fn from(e: Edge<N, C>) -> Self {
        Self {
            start: e.start,
            end: e.end,
            capacity: e.capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_capacity_is_rejected() {
        assert_eq!(Edge::new(1, 2, -1i32), Err(Error::NegativeCapacity));
        assert!(Edge::new(1, 2, 0i32).is_ok());
        assert!(Edge::new(1, 2, i32::MAX).is_ok());
    }

    #[test]
    fn direction_from_endpoints() {
        let e = Edge::new('a', 'b', 3u32).unwrap();
        assert!(!e.is_self_loop());
        assert_eq!(e.direction_from(&'a'), Some(Direction::Forward));
        assert_eq!(e.direction_from(&'b'), Some(Direction::Backward));
        assert_eq!(e.direction_from(&'c'), None);
        assert_eq!(e.head(Direction::Backward), &'a');
    }

    #[test]
    fn raw_edge_conversion() {
        let raw = RawEdge {
            start: 4,
            end: 5,
            capacity: -7i64,
        };
        assert_eq!(Edge::try_from(raw), Err(Error::NegativeCapacity));
    }
}
