use core::fmt::Debug;

/// A trait representing a node identifier.
///
/// Identifiers are compared by value through `Ord`; two identifiers denote the same node iff they
/// compare equal. Every `Clone + Ord + Debug` type is an identifier, including petgraph's
/// `NodeIndex` and composite keys such as tuples.
pub trait Id: Clone + Ord + Debug {}

impl<T: Clone + Ord + Debug> Id for T {}
