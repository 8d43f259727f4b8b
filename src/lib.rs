//! Maximum flow between a source and a sink of a directed, capacitated graph, computed with the
//! Edmonds-Karp refinement of the Ford-Fulkerson method.
//!
//! ```
//! use edmonds_karp::{compute_max_flow, total_flow, FlowGraph};
//!
//! let mut g = FlowGraph::new();
//! g.add_edge(1, 2, 4u32).unwrap();
//! g.add_edge(1, 3, 2).unwrap();
//! g.add_edge(2, 4, 1).unwrap();
//! g.add_edge(2, 3, 3).unwrap();
//! g.add_edge(3, 4, 6).unwrap();
//!
//! let flow = compute_max_flow(&g, &1, &4).unwrap();
//! assert_eq!(total_flow(&flow, &g, &1), Ok(6));
//! ```

#![no_std]
#![deny(
    warnings,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod algo;
pub mod capacity;
pub mod edge;
pub mod error;
pub mod flow;
pub mod graph;
pub mod id;
pub mod node;

pub use crate::algo::bfs::augmenting_path;
pub use crate::algo::edmonds_karp::{compute_max_flow, EdmondsKarp};
pub use crate::algo::min_cut::{min_cut, MinCut};
#[cfg(feature = "lemon-cpp")]
pub use crate::algo::network_simplex::NetworkSimplex;
pub use crate::algo::MaxFlow;
pub use crate::capacity::Capacity;
pub use crate::edge::{Direction, Edge, EdgeIndex, RawEdge};
pub use crate::error::Error;
pub use crate::flow::{check, total_flow, Flow};
pub use crate::graph::FlowGraph;
pub use crate::id::Id;
pub use crate::node::Node;
