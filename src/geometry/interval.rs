// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Intervals on the shared order axis.
//!
//! Every placed vertex claims a half-open span `[left, right)` of a single
//! horizontal line. Vertices whose spans overlap are drawn next to each other;
//! a span that ends before another begins is strictly to its left.

use std::fmt;

/// A half-open interval `[left, right)`.
///
/// `left <= right` is expected but not enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub left: f64,
    pub right: f64,
}

impl Interval {
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// The common part of two intervals, or `None` if they do not overlap.
    pub fn intersection(&self, other: &Interval) -> Option<Interval> {
        if self.left >= other.right || other.left >= self.right {
            return None;
        }
        Some(Interval::new(
            self.left.max(other.left),
            self.right.min(other.right),
        ))
    }

    /// `true` if this interval ends strictly before `other` begins.
    pub fn precedes(&self, other: &Interval) -> bool {
        self.right < other.left
    }
}

impl Default for Interval {
    /// The unit interval `[0, 1)`.
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

/// An interval claimed by a vertex.
///
/// The vertex is a [`VertexId`](crate::geometry::VertexId) inside the search
/// and the caller's own vertex type in a [`Solution`](crate::Solution).
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalForVertex<V> {
    pub vertex: V,
    pub interval: Interval,
}

impl<V> IntervalForVertex<V> {
    pub fn new(vertex: V, left: f64, right: f64) -> Self {
        Self {
            vertex,
            interval: Interval::new(left, right),
        }
    }

    /// A vertex with the unit interval `[0, 1)`, not yet positioned.
    pub fn unplaced(vertex: V) -> Self {
        Self {
            vertex,
            interval: Interval::default(),
        }
    }

    pub fn left(&self) -> f64 {
        self.interval.left
    }

    pub fn right(&self) -> f64 {
        self.interval.right
    }

    /// Replace the vertex payload, keeping the interval.
    pub fn map_vertex<W>(self, f: impl FnOnce(V) -> W) -> IntervalForVertex<W> {
        IntervalForVertex {
            vertex: f(self.vertex),
            interval: self.interval,
        }
    }
}

impl<V: fmt::Display> fmt::Display for IntervalForVertex<V> {
    /// Format as "i[A> 0.5:2.5]".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "i[{}> {:?}:{:?}]",
            self.vertex, self.interval.left, self.interval.right
        )
    }
}
