use alloc::format;
use alloc::string::String;
use core::fmt::Debug;

use displaydoc::Display;

use crate::edge::EdgeIndex;

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Error {
    /// Invalid edge capacity, expected non-negative value
    NegativeCapacity,
    /// Node `{0}` not found in graph
    NodeNotFound(String),
    /// Arithmetic overflow while accumulating flow
    ArithmeticOverflow,
    /// Flow on edge {0} is negative or exceeds its capacity
    CapacityExceeded(EdgeIndex),
    /// Flow is not conserved at node `{0}`
    ConservationViolated(String),
    /// Max flow algorithm specific error: {0}
    AlgoSpecific(String),
}

impl Error {
    pub(crate) fn node_not_found<N: Debug>(id: &N) -> Self {
        Self::NodeNotFound(format!("{id:?}"))
    }
}

impl core::error::Error for Error {}
