//! Ear-clipping triangulation for small simple polygons.
//!
//! Works on a ring of vertex indices walked counter-clockwise. Each step clips
//! one "ear" (a non-reflex corner whose triangle holds no reflex vertex), so a
//! polygon with `n` vertices always yields `n - 2` triangles.
//!
//! Degenerate input (duplicate or collinear points, which the beam quad always
//! has) never fails: when no proper ear exists we clip a tangential corner, or
//! the first corner, and keep going.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Corner {
    Convex,
    Reflex,
    Tangential,
}

/// Twice the signed area; positive for counter-clockwise winding.
pub fn signed_area_x2(vertices: &[Vec2]) -> f32 {
    let n = vertices.len();
    (0..n)
        .map(|i| vertices[i].perp_dot(vertices[(i + 1) % n]))
        .sum()
}

/// Triangulate `vertices` into index triples.
///
/// Triangles are wound counter-clockwise. Fewer than three vertices, or more
/// than `u16` indices can address, produce an empty list.
pub fn triangulate(vertices: &[Vec2]) -> Vec<[u16; 3]> {
    let n = vertices.len();
    if n < 3 {
        return Vec::new();
    }
    if u16::try_from(n - 1).is_err() {
        warn!("polygon with {n} vertices exceeds u16 indices; not triangulated");
        return Vec::new();
    }

    let mut ring: Vec<u16> = (0..n).map(|i| i as u16).collect();
    if signed_area_x2(vertices) < 0.0 {
        ring.reverse();
    }

    let mut corners: Vec<Corner> = (0..n).map(|i| classify(vertices, &ring, i)).collect();
    let mut triangles = Vec::with_capacity(n - 2);

    while ring.len() > 3 {
        let ear = find_ear(vertices, &ring, &corners);
        let (prev, next) = neighbours(ring.len(), ear);
        triangles.push([ring[prev], ring[ear], ring[next]]);

        ring.remove(ear);
        corners.remove(ear);

        // Only the two corners adjacent to the clipped one change shape.
        let (prev, next) = (prev_of(ring.len(), ear), ear % ring.len());
        corners[prev] = classify(vertices, &ring, prev);
        corners[next] = classify(vertices, &ring, next);
    }

    triangles.push([ring[0], ring[1], ring[2]]);
    triangles
}

#[inline]
fn prev_of(len: usize, i: usize) -> usize {
    (i + len - 1) % len
}

#[inline]
fn neighbours(len: usize, i: usize) -> (usize, usize) {
    (prev_of(len, i), (i + 1) % len)
}

#[inline]
fn corner_points(vertices: &[Vec2], ring: &[u16], i: usize) -> (Vec2, Vec2, Vec2) {
    let (prev, next) = neighbours(ring.len(), i);
    (
        vertices[ring[prev] as usize],
        vertices[ring[i] as usize],
        vertices[ring[next] as usize],
    )
}

fn classify(vertices: &[Vec2], ring: &[u16], i: usize) -> Corner {
    let (a, b, c) = corner_points(vertices, ring, i);
    let turn = (b - a).perp_dot(c - b);
    if turn > 0.0 {
        Corner::Convex
    } else if turn < 0.0 {
        Corner::Reflex
    } else {
        Corner::Tangential
    }
}

fn find_ear(vertices: &[Vec2], ring: &[u16], corners: &[Corner]) -> usize {
    (0..ring.len())
        .find(|&i| corners[i] != Corner::Reflex && is_ear(vertices, ring, corners, i))
        .or_else(|| corners.iter().position(|c| *c == Corner::Tangential))
        .unwrap_or(0)
}

fn is_ear(vertices: &[Vec2], ring: &[u16], corners: &[Corner], i: usize) -> bool {
    let (prev, next) = neighbours(ring.len(), i);
    let (a, b, c) = corner_points(vertices, ring, i);

    // Only a reflex vertex can poke into a candidate ear.
    !(0..ring.len())
        .filter(|&j| j != prev && j != i && j != next && corners[j] == Corner::Reflex)
        .any(|j| triangle_contains(a, b, c, vertices[ring[j] as usize]))
}

/// Inclusive point-in-triangle test for a counter-clockwise triangle.
#[inline]
fn triangle_contains(a: Vec2, b: Vec2, c: Vec2, p: Vec2) -> bool {
    (b - a).perp_dot(p - a) >= 0.0 && (c - b).perp_dot(p - b) >= 0.0 && (a - c).perp_dot(p - c) >= 0.0
}
