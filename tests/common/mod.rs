// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use pedigree_sandwich::{IntervalForVertex, Realization, SandwichInstance, Solution};

pub type Pair = (&'static str, &'static str);

/// Build an instance over string vertices, panicking on bad input.
pub fn instance(vertices: &[&'static str], required: &[Pair], forbidden: &[Pair]) -> SandwichInstance<&'static str> {
    SandwichInstance::from_sets(
        vertices.iter().copied(),
        required.iter().copied(),
        forbidden.iter().copied(),
    )
    .unwrap()
}

/// Vertices named "n00", "n01", ... so that string order matches numeric order.
pub fn numbered(count: usize) -> Vec<&'static str> {
    (0..count)
        .map(|i| -> &'static str { Box::leak(format!("n{:02}", i).into_boxed_str()) })
        .collect()
}

/// Placement order of a solution.
pub fn order<V: Clone>(intervals: &[IntervalForVertex<V>]) -> Vec<V> {
    intervals.iter().map(|i| i.vertex.clone()).collect()
}

fn overlap<V>(a: &IntervalForVertex<V>, b: &IntervalForVertex<V>) -> bool {
    a.interval.intersection(&b.interval).is_some()
}

/// Check `solution` against `instance`.
///
/// - every vertex is placed exactly once
/// - every required pair overlaps
/// - no forbidden pair that survived relaxation overlaps
/// - replaying the placement order through [`Realization::extend`] with
///   the surviving forbidden edges admits every step and reproduces the
///   same intervals
pub fn assert_valid(instance: &SandwichInstance<&'static str>, solution: &Solution<&'static str>, max_width: usize) {
    let intervals = &solution.intervals;
    assert_eq!(intervals.len(), instance.len(), "every vertex placed");

    let mut placed = order(intervals);
    placed.sort_unstable();
    placed.dedup();
    assert_eq!(placed.len(), instance.len(), "no vertex placed twice");

    let find = |vertex: &str| {
        intervals
            .iter()
            .find(|i| i.vertex == vertex)
            .unwrap_or_else(|| panic!("{} not placed", vertex))
    };

    for edge in instance.required_graph().edges() {
        let (a, b) = instance.endpoints(edge);
        if a != b {
            assert!(overlap(find(a), find(b)), "required ({}, {}) do not overlap", a, b);
        }
    }

    let removed: Vec<_> = solution
        .removed_edges
        .iter()
        .map(|(a, b)| instance.edge(a, b).unwrap())
        .collect();
    let relaxed = instance.without_forbidden_edges(&removed);
    for edge in relaxed.forbidden_graph().edges() {
        let (a, b) = relaxed.endpoints(edge);
        if a == b {
            continue;
        }
        assert!(!overlap(find(a), find(b)), "forbidden ({}, {}) overlap", a, b);
    }

    if intervals.is_empty() {
        return;
    }
    let ids: Vec<_> = intervals
        .iter()
        .map(|i| relaxed.id_of(&i.vertex).unwrap())
        .collect();
    let mut realization = Realization::singleton(
        relaxed.required_graph(),
        relaxed.forbidden_graph(),
        ids[0],
        max_width,
    );
    for &id in &ids[1..] {
        assert!(
            realization.active_vertices().len() < max_width,
            "width bound broken before {}",
            relaxed.vertex(id)
        );
        assert!(
            realization.extend(id),
            "replay rejected {} after {}",
            relaxed.vertex(id),
            realization.describe(|placed| relaxed.vertex(placed))
        );
    }

    for (replayed, given) in realization.intervals().iter().zip(intervals) {
        assert_eq!(replayed.interval, given.interval);
    }
}
