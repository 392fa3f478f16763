// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the fractr crate.

//! Conversion of a finished [`Drawing`](crate::cursor::Drawing) into vertex and index lists.
//! Vertices are not deduplicated.

use crate::{FractrError, cursor::Polygon};
use vector_traits::glam::{DVec2, Vec3};

#[inline]
fn to_vec3(v: DVec2) -> Result<Vec3, FractrError> {
    if !v.is_finite() {
        return Err(FractrError::FloatNotFinite(format!(
            "The turtle produced a non-finite vertex: {v:?}"
        )));
    }
    Ok(Vec3::new(v.x as f32, v.y as f32, 0.0))
}

/// Two vertices and one index pair per segment
pub(super) fn line_chunks(segments: &[[DVec2; 2]]) -> Result<(Vec<Vec3>, Vec<usize>), FractrError> {
    let mut vertices = Vec::with_capacity(segments.len() * 2);
    for [from, to] in segments {
        vertices.push(to_vec3(*from)?);
        vertices.push(to_vec3(*to)?);
    }
    let indices = (0..vertices.len()).collect();
    Ok((vertices, indices))
}

/// Triangulates every fill region, index triples refer into the returned vertex list.
pub(super) fn triangulate_polygons(
    polygons: &[Polygon],
) -> Result<(Vec<Vec3>, Vec<usize>), FractrError> {
    let mut vertices = Vec::<Vec3>::new();
    let mut indices = Vec::<usize>::new();
    let mut flattened_coords = Vec::<f64>::new();

    for polygon in polygons {
        let offset = vertices.len();
        for v in polygon {
            vertices.push(to_vec3(*v)?);
        }
        match polygon.len() {
            0..=2 => {
                tracing::trace!("skipping a fill region with {} vertices", polygon.len());
                vertices.truncate(offset);
            }
            3 => indices.extend(offset..offset + 3),
            _ => {
                flattened_coords.clear();
                for v in polygon {
                    flattened_coords.push(v.x);
                    flattened_coords.push(v.y);
                }
                let triangulation = earcutr::earcut(&flattened_coords, &[], 2)?;
                indices.extend(triangulation.into_iter().map(|i| offset + i));
            }
        }
    }
    Ok((vertices, indices))
}
