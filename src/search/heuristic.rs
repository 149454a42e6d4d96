use std::fmt::{self, Display};

use derive_more::{From, Into};

use crate::num_traits::Weight;

/// Estimated remaining cost from a vertex to the goal.
///
/// A* only returns optimal paths when the estimate never exceeds the true
/// remaining cost; nothing checks this.
pub trait Heuristic<V, W> {
    fn estimate(&self, v: &V) -> W;
}

impl<V, W, F: Fn(&V) -> W> Heuristic<V, W> for F {
    fn estimate(&self, v: &V) -> W {
        self(v)
    }
}

/// Estimates zero everywhere, which turns A* into Dijkstra.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zero;

impl<V, W: Weight> Heuristic<V, W> for Zero {
    fn estimate(&self, _: &V) -> W {
        W::zero()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, From, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2d<N> {
    pub x: N,
    pub y: N,
}

impl<N> Point2d<N> {
    pub fn new(x: N, y: N) -> Self {
        Point2d { x, y }
    }
}

impl<N: Weight> Point2d<N> {
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x.to_f64() - other.x.to_f64();
        let dy = self.y.to_f64() - other.y.to_f64();
        dx.hypot(dy)
    }
}

impl<N: Display> Display for Point2d<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Straight-line distance to a fixed goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Euclidean<N> {
    goal: Point2d<N>,
}

pub fn euclidean<N>(goal: Point2d<N>) -> Euclidean<N> {
    Euclidean { goal }
}

impl<N: Weight, W: Weight> Heuristic<Point2d<N>, W> for Euclidean<N> {
    fn estimate(&self, v: &Point2d<N>) -> W {
        W::from_f64(v.distance(&self.goal))
    }
}
