// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the fractr crate.

use super::Cursor;
use smallvec::{SmallVec, smallvec};
use vector_traits::glam::DVec2;

/// A closed fill region. The closing vertex is not repeated.
pub type Polygon = SmallVec<[DVec2; 8]>;

/// Relative tolerance used when deciding if a fill path returned to its first vertex.
const CLOSE_EPSILON: f64 = 1e-9;

/// Everything a [`Turtle`] traced
#[derive(Debug, Default, Clone)]
pub struct Drawing {
    /// line segments drawn with the pen down
    pub segments: Vec<[DVec2; 2]>,
    /// closed fill regions
    pub polygons: Vec<Polygon>,
}

/// A cursor that keeps track of the geometry it traces.
#[derive(Debug, Clone)]
pub struct Turtle {
    pub(super) position: DVec2,
    /// degrees in `[0, 360)`, 0° is +x and angles grow counter-clockwise
    pub(super) heading: f64,
    pub(super) pen_down: bool,
    /// The fill region being collected, if fill mode is on
    pub(super) fill: Option<Polygon>,
    pub(super) drawing: Drawing,
}

impl Turtle {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.position
    }

    #[inline]
    pub fn heading(&self) -> f64 {
        self.heading
    }

    #[inline]
    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    #[inline]
    pub fn is_filling(&self) -> bool {
        self.fill.is_some()
    }

    pub fn segments(&self) -> &[[DVec2; 2]] {
        &self.drawing.segments
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.drawing.polygons
    }

    /// The unit vector of the current heading
    #[inline]
    fn direction(&self) -> DVec2 {
        let (s, c) = self.heading.to_radians().sin_cos();
        DVec2::new(c, s)
    }

    /// The axis aligned bounding box (min, max) of all segments and fill regions.
    /// Returns None if nothing has been drawn.
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        self.drawing
            .segments
            .iter()
            .flatten()
            .chain(self.drawing.polygons.iter().flatten())
            .fold(None, |acc, p| match acc {
                None => Some((*p, *p)),
                Some((min, max)) => Some((min.min(*p), max.max(*p))),
            })
    }

    /// Consumes the turtle, any open fill region is closed first.
    pub fn into_drawing(mut self) -> Drawing {
        if self.fill.is_some() {
            self.fill(false);
        }
        self.drawing
    }

    fn close_fill(&mut self, mut polygon: Polygon) {
        if polygon.len() > 1 {
            let first = polygon[0];
            let last = polygon[polygon.len() - 1];
            let tolerance = CLOSE_EPSILON * (1.0 + first.abs().max_element());
            if first.abs_diff_eq(last, tolerance) {
                let _ = polygon.pop();
            }
        }
        if polygon.len() < 3 || Self::is_flat(&polygon) {
            tracing::trace!("dropping a degenerate fill region of {} vertices", polygon.len());
            return;
        }
        self.drawing.polygons.push(polygon);
    }

    /// True if the region encloses no area, e.g. a path that only went back and forth or
    /// one traced with a zero size.
    fn is_flat(polygon: &[DVec2]) -> bool {
        let (min, max) = polygon.iter().fold(
            (DVec2::splat(f64::INFINITY), DVec2::splat(f64::NEG_INFINITY)),
            |(min, max), p| (min.min(*p), max.max(*p)),
        );
        let extent = (max - min).max_element();
        if extent <= 0.0 {
            return true;
        }
        // shoelace, doubled
        let area2: f64 = polygon
            .iter()
            .zip(polygon.iter().cycle().skip(1))
            .map(|(a, b)| a.perp_dot(*b))
            .sum();
        area2.abs() <= CLOSE_EPSILON * extent * extent
    }
}

impl Cursor for Turtle {
    fn forward(&mut self, length: f64) {
        let p0 = self.position;
        self.position += self.direction() * length;
        if self.pen_down {
            self.drawing.segments.push([p0, self.position]);
        }
        if let Some(polygon) = self.fill.as_mut() {
            polygon.push(self.position);
        }
    }

    fn left(&mut self, degrees: f64) {
        let heading = (self.heading + degrees).rem_euclid(360.0);
        // rem_euclid() may round tiny negative values up to exactly 360.0
        self.heading = if heading >= 360.0 { 0.0 } else { heading };
    }

    fn pen_up(&mut self) {
        self.pen_down = false;
    }

    fn pen_down(&mut self) {
        self.pen_down = true;
    }

    fn fill(&mut self, active: bool) {
        match (active, self.fill.take()) {
            (true, previous) => {
                if previous.is_some() {
                    tracing::trace!("fill(true) while filling, restarting the fill region");
                }
                self.fill = Some(smallvec![self.position]);
            }
            (false, Some(polygon)) => self.close_fill(polygon),
            (false, None) => tracing::trace!("fill(false) without an active fill region"),
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
