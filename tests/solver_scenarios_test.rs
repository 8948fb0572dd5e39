// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end scenarios for the sandwich solver.
//!
//! Each scenario builds an instance, solves it, and checks the result with
//! [`common::assert_valid`], which replays the placement order.

mod common;

use common::{assert_valid, instance, numbered, order};
use itertools::Itertools;
use pedigree_sandwich::engine::Counters;
use pedigree_sandwich::{
    InstanceFile, SandwichError, SandwichSolver, SolverConfig, DEFAULT_MAX_WIDTH, MAX_ITERATIONS,
};

const PATH: &[common::Pair] = &[("A", "B"), ("B", "C")];
const TRIANGLE: &[common::Pair] = &[("A", "B"), ("B", "C"), ("A", "C")];

#[test]
fn test_path() {
    let path = instance(&["A", "B", "C"], PATH, &[]);
    let solution = SandwichSolver::default().solve(&path).unwrap();

    assert_eq!(order(&solution.intervals), vec!["C", "B", "A"]);
    let spans: Vec<(f64, f64)> = solution
        .intervals
        .iter()
        .map(|i| (i.left(), i.right()))
        .collect();
    assert_eq!(spans, vec![(0.0, 2.5), (1.5, 4.0), (3.0, 4.0)]);
    assert_valid(&path, &solution, DEFAULT_MAX_WIDTH);
}

#[test]
fn test_triangle_needs_width_three() {
    let triangle = instance(&["A", "B", "C"], TRIANGLE, &[]);

    for width in [1, 2] {
        let mut solver = SandwichSolver::new(SolverConfig::default().with_max_width(width));
        assert!(solver.solve(&triangle).is_none(), "width {}", width);
    }

    let solution = SandwichSolver::default().solve(&triangle).unwrap();
    assert_eq!(order(&solution.intervals), vec!["C", "B", "A"]);
    assert_valid(&triangle, &solution, DEFAULT_MAX_WIDTH);
}

#[test]
fn test_unsatisfiable_even_after_relaxation() {
    let triangle = instance(&["A", "B", "C"], TRIANGLE, &[("A", "B")]);
    let mut solver = SandwichSolver::new(SolverConfig::default().with_max_width(1));

    assert!(solver.solve(&triangle).is_none());
    // The original search plus one attempt without (A, B).
    assert_eq!(solver.statistics().get(Counters::Searches), 2);
    assert_eq!(solver.statistics().get(Counters::Relaxations), 1);
}

#[test]
fn test_nuclear_family() {
    // Persons, one mating unit, one sibship unit.
    let family = instance(
        &["dad", "mom", "m", "s", "kid"],
        &[("dad", "m"), ("mom", "m"), ("m", "s"), ("s", "kid")],
        &[("dad", "kid"), ("mom", "kid")],
    );
    let mut solver = SandwichSolver::default();
    let solution = solver.solve(&family).unwrap();

    assert!(!solution.is_relaxed());
    assert_eq!(order(&solution.intervals), vec!["s", "mom", "m", "kid", "dad"]);
    assert_eq!(solver.statistics().get(Counters::Iterations), 4);
    assert_valid(&family, &solution, DEFAULT_MAX_WIDTH);
}

#[test]
fn test_deterministic() {
    let forward = instance(
        &["dad", "mom", "m", "s", "kid"],
        &[("dad", "m"), ("mom", "m"), ("m", "s"), ("s", "kid")],
        &[("dad", "kid")],
    );
    let shuffled = instance(
        &["kid", "s", "mom", "m", "dad"],
        &[("kid", "s"), ("s", "m"), ("m", "mom"), ("m", "dad")],
        &[("kid", "dad")],
    );

    let mut solver = SandwichSolver::default();
    let first = solver.solve(&forward).unwrap();
    let second = solver.solve(&forward).unwrap();
    let third = solver.solve(&shuffled).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.intervals, third.intervals);
}

#[test]
fn test_relaxation_is_minimal() {
    let vertices = ["A", "B", "C", "D"];
    let required = [("A", "B"), ("A", "C"), ("A", "D"), ("B", "C")];
    let forbidden = [("A", "B"), ("A", "C"), ("B", "C"), ("C", "D")];
    let crowded = instance(&vertices, &required, &forbidden);

    let mut solver = SandwichSolver::default();
    let solution = solver.solve(&crowded).unwrap();
    assert!(solution.is_relaxed());
    assert_valid(&crowded, &solution, DEFAULT_MAX_WIDTH);

    // No smaller removal works.
    let edges = crowded.forbidden_graph().edges();
    for count in 0..solution.removed_edges.len() {
        for removed in edges.iter().copied().combinations(count) {
            let relaxed = crowded.without_forbidden_edges(&removed);
            assert!(
                SandwichSolver::default().try_solve(&relaxed).is_none(),
                "removing {:?} already works",
                removed
            );
        }
    }
}

#[test]
fn test_removed_edges_reported_as_caller_vertices() {
    let tied = instance(&["A", "B", "C"], &[("A", "B"), ("A", "C")], &[("A", "B"), ("B", "C")]);
    let solution = SandwichSolver::default().solve(&tied).unwrap();

    assert_eq!(solution.removed_edges, vec![("A", "B")]);
    assert_valid(&tied, &solution, DEFAULT_MAX_WIDTH);
}

#[test]
fn test_iteration_cap_then_relaxation() {
    // One pair that is both required and forbidden, buried among isolated
    // vertices: the reachable placed sets outnumber the default cap.
    let vertices = numbered(16);
    let pair = [(vertices[0], vertices[1])];
    let buried = instance(&vertices, &pair, &pair);

    let mut solver = SandwichSolver::default();
    let solution = solver.solve(&buried).unwrap();

    // The first search stopped at the cap, the relaxed one finished early.
    assert_eq!(solver.statistics().get(Counters::Bailouts), 1);
    assert!(solver.statistics().get(Counters::Iterations) >= MAX_ITERATIONS as u64);
    assert!(solver.statistics().get(Counters::Iterations) < 2 * MAX_ITERATIONS as u64);
    assert_eq!(solution.removed_edges, vec![(vertices[0], vertices[1])]);
    assert_eq!(solution.intervals.len(), 16);
    assert_valid(&buried, &solution, DEFAULT_MAX_WIDTH);
}

#[test]
fn test_configured_iteration_cap() {
    let vertices = numbered(8);
    let pair = [(vertices[0], vertices[1])];
    let buried = instance(&vertices, &pair, &pair);

    let config = SolverConfig::default()
        .with_max_iterations(25)
        .with_relaxation(false);
    let mut solver = SandwichSolver::new(config);

    assert!(solver.solve(&buried).is_none());
    assert_eq!(solver.statistics().get(Counters::Iterations), 25);
    assert_eq!(solver.statistics().get(Counters::Bailouts), 1);
}

#[test]
fn test_empty_and_single_instances() {
    let empty = instance(&[], &[], &[]);
    let mut solver = SandwichSolver::default();
    assert!(solver.solve(&empty).is_none());
    assert!(solver.try_solve(&empty).is_none());
    assert_eq!(solver.statistics().get(Counters::Iterations), 0);

    let single = instance(&["only"], &[], &[]);
    let solution = SandwichSolver::default().solve(&single).unwrap();
    assert_eq!(order(&solution.intervals), vec!["only"]);
    assert_eq!((solution.intervals[0].left(), solution.intervals[0].right()), (0.0, 1.0));
}

#[test]
fn test_json_instance() {
    let json = r#"{
        "vertices": ["dad", "mom", "m", "s", "kid"],
        "required": [["dad", "m"], ["mom", "m"], ["m", "s"], ["s", "kid"]],
        "forbidden": [["dad", "kid"], ["mom", "kid"]]
    }"#;
    let instance = InstanceFile::from_json(json).unwrap().into_instance().unwrap();
    let solution = SandwichSolver::default().solve(&instance).unwrap();

    let placed: Vec<&str> = solution.vertices().map(String::as_str).collect();
    assert_eq!(placed, vec!["s", "mom", "m", "kid", "dad"]);
}

#[test]
fn test_json_instance_from_disk() {
    let file = InstanceFile {
        vertices: vec!["A".into(), "B".into()],
        required: vec![("A".into(), "B".into())],
        forbidden: Vec::new(),
    };
    let path = std::env::temp_dir().join(format!("sandwich-{}.json", std::process::id()));
    std::fs::write(&path, file.to_json().unwrap()).unwrap();

    let loaded = InstanceFile::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded, file);

    let solution = SandwichSolver::default().solve(&loaded.into_instance().unwrap()).unwrap();
    let placed: Vec<&str> = solution.vertices().map(String::as_str).collect();
    assert_eq!(placed, vec!["B", "A"]);
}

#[test]
fn test_unknown_vertex_in_file() {
    let json = r#"{"vertices": ["A"], "required": [["A", "Z"]]}"#;
    let result = InstanceFile::from_json(json).unwrap().into_instance();
    assert!(matches!(result, Err(SandwichError::UnknownVertex { .. })));
}

#[test]
fn test_missing_file() {
    let result = InstanceFile::load("/nonexistent/sandwich.json");
    assert!(matches!(result, Err(SandwichError::Io(_))));
}
