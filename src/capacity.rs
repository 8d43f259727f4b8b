use core::fmt::{Debug, Display};

use num_traits::{Bounded, CheckedAdd, CheckedSub, Zero};

/// A trait representing an edge capacity (and flow amount) which is typically an integer.
///
/// `Bounded::max_value()` is accepted as a capacity and acts as an unbounded edge.
pub trait Capacity:
    Copy + Ord + Zero + Bounded + CheckedAdd + CheckedSub + Debug + Display + Default
{
}

impl Capacity for i32 {}

impl Capacity for i64 {}

impl Capacity for i128 {}

impl Capacity for u32 {}

impl Capacity for u64 {}

impl Capacity for u128 {}

impl Capacity for usize {}
