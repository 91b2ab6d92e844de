//! Ear-clipping triangulation tests.
//!
//! These tests check the triangle-count and area invariants on convex,
//! concave and clockwise inputs, plus the graceful handling of degenerate
//! loops.

use glam::Vec3;
use polymesh_geometry::{
    Outline, PolyMesh, Triangulation, TriangulationStatus, signed_area, triangle_area,
    triangulate,
};
use std::f32::consts::TAU;

fn covered_area(points: &[Vec3], tri: &Triangulation) -> f32 {
    tri.triangles()
        .map(|[a, b, c]| triangle_area(points[a as usize], points[b as usize], points[c as usize]))
        .sum()
}

fn regular_polygon(sides: usize, radius: f32) -> Vec<Vec3> {
    (0..sides)
        .map(|i| {
            let angle = i as f32 / sides as f32 * TAU;
            Vec3::new(angle.cos() * radius, angle.sin() * radius, 0.0)
        })
        .collect()
}

fn star(tips: usize, outer: f32, inner: f32) -> Vec<Vec3> {
    (0..tips * 2)
        .map(|i| {
            let angle = 0.3 + i as f32 / (tips * 2) as f32 * TAU;
            let radius = if i % 2 == 0 { outer } else { inner };
            Vec3::new(angle.cos() * radius, angle.sin() * radius, 0.0)
        })
        .collect()
}

fn scaled(points: Vec<Vec3>, scale: f32) -> Vec<Vec3> {
    points.into_iter().map(|p| p * scale).collect()
}

fn assert_full_triangulation(points: &[Vec3]) {
    let tri = triangulate(points);
    let expected_area = signed_area(points).abs();

    assert_eq!(tri.status, TriangulationStatus::Complete);
    assert_eq!(tri.indices.len() % 3, 0);
    assert_eq!(tri.triangle_count(), points.len() - 2);
    assert!(
        (covered_area(points, &tri) - expected_area).abs() <= expected_area * 1e-4,
        "covered {} expected {}",
        covered_area(points, &tri),
        expected_area
    );
    assert!(tri.indices.iter().all(|&i| (i as usize) < points.len()));
}

// ====================
// Scenarios
// ====================

#[test]
fn test_unit_square_two_triangles() {
    let points = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ];
    let tri = triangulate(&points);

    assert_eq!(tri.triangle_count(), 2);
    assert!((covered_area(&points, &tri) - 1.0).abs() < 1e-6);
}

#[test]
fn test_triangle_references_all_indices() {
    let points = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(1.0, 2.0, 0.0),
    ];
    let tri = triangulate(&points);

    assert_eq!(tri.triangle_count(), 1);
    let mut sorted = tri.indices.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![0, 1, 2]);
    assert!((covered_area(&points, &tri) - 2.0).abs() < 1e-6);
}

// ====================
// Invariants
// ====================

#[test]
fn test_regular_polygons() {
    for sides in 3..=64 {
        assert_full_triangulation(&regular_polygon(sides, 1.0));
    }
}

#[test]
fn test_clockwise_input_is_normalised() {
    for sides in [3, 5, 12] {
        let mut points = regular_polygon(sides, 2.0);
        points.reverse();
        assert!(signed_area(&points) < 0.0);
        assert_full_triangulation(&points);
    }
}

#[test]
fn test_concave_l_shape() {
    let points = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(2.0, 1.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(1.0, 2.0, 0.0),
        Vec3::new(0.0, 2.0, 0.0),
    ];
    assert_full_triangulation(&points);
    assert!((signed_area(&points) - 3.0).abs() < 1e-6);
}

#[test]
fn test_star_outline() {
    assert_full_triangulation(&star(5, 1.0, 0.5));
    assert_full_triangulation(&star(9, 3.0, 1.2));
}

#[test]
fn test_result_independent_of_scale() {
    for scale in [1e-4, 1.0, 1e4] {
        for sides in [3, 4, 7, 32] {
            assert_full_triangulation(&scaled(regular_polygon(sides, 1.0), scale));
        }
        assert_full_triangulation(&scaled(star(5, 1.0, 0.5), scale));
        assert_full_triangulation(&scaled(star(9, 3.0, 1.2), scale));
    }
}

#[test]
fn test_tiny_square_renders_two_triangles() {
    let points = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1e-4, 0.0, 0.0),
        Vec3::new(1e-4, 1e-4, 0.0),
        Vec3::new(0.0, 1e-4, 0.0),
    ];
    let mut mesh = PolyMesh::from_outline(Outline::from_points(points));
    let report = mesh.rebuild();

    assert_eq!(report.status, TriangulationStatus::Complete);
    assert_eq!(report.triangles, 2);
}

#[test]
fn test_depth_does_not_affect_result() {
    let flat = star(6, 1.0, 0.45);
    let lifted: Vec<Vec3> = flat.iter().map(|p| *p + Vec3::new(0.0, 0.0, 7.5)).collect();
    assert_eq!(triangulate(&flat).indices, triangulate(&lifted).indices);
}

#[test]
fn test_output_is_deterministic() {
    let points = star(7, 2.0, 0.8);
    assert_eq!(triangulate(&points), triangulate(&points));
}

// ====================
// Degenerate input
// ====================

#[test]
fn test_fewer_than_three_points() {
    for len in 0..3 {
        let points = vec![Vec3::ONE; len];
        let tri = triangulate(&points);
        assert!(tri.indices.is_empty());
        assert_eq!(tri.status, TriangulationStatus::Degenerate);
    }
}

#[test]
fn test_collinear_loop_terminates_empty() {
    let points: Vec<Vec3> = (0..8).map(|i| Vec3::new(i as f32, 0.0, 0.0)).collect();
    let tri = triangulate(&points);

    assert!(tri.indices.is_empty());
    assert_eq!(tri.status, TriangulationStatus::Stalled { remaining: 8 });
    assert!(tri.into_result().is_err());
}

#[test]
fn test_self_intersecting_loop_terminates() {
    // A bow tie: the result may be partial but must stay well formed.
    let points = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(2.0, 2.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(0.0, 2.0, 0.0),
    ];
    let tri = triangulate(&points);
    assert_eq!(tri.indices.len() % 3, 0);
    assert!(tri.triangle_count() <= 2);
}
