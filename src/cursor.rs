// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the fractr crate.

//! The turtle capability set the fractal generators draw with, and two implementations:
//! a [`Turtle`] that tracks the traced geometry and a [`CommandRecorder`] that keeps the
//! raw command stream.

mod impls;
mod recorder;
mod turtle;

pub use recorder::{CommandRecorder, DrawCommand};
pub use turtle::{Drawing, Polygon, Turtle};

use std::ops::{Deref, DerefMut};

/// A relative 2D drawing pointer.
///
/// All angles are in degrees, and all turns are relative to the current heading.
/// `forward` always moves the cursor, the pen state only decides if the move leaves a mark.
pub trait Cursor {
    /// Move along the current heading. A negative length moves backwards.
    fn forward(&mut self, length: f64);

    fn backward(&mut self, length: f64) {
        self.forward(-length)
    }

    /// Turn counter-clockwise
    fn left(&mut self, degrees: f64);

    /// Turn clockwise
    fn right(&mut self, degrees: f64) {
        self.left(-degrees)
    }

    fn pen_up(&mut self);

    fn pen_down(&mut self);

    /// Start (`true`) or stop (`false`) collecting the traced path as a filled region.
    fn fill(&mut self, active: bool);

    /// Back to the origin, heading 0° (along +x), pen down and no fill.
    fn reset(&mut self);
}

/// The chirality of the asymmetric curves (dragon, Gosper, arrowhead, hexaflake).
///
/// `Clockwise` is the `+1` (or `true`) flag, `CounterClockwise` is `-1` (or `false`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    /// `+1.0` for clockwise, `-1.0` for counter-clockwise
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Orientation::Clockwise => 1.0,
            Orientation::CounterClockwise => -1.0,
        }
    }

    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
        }
    }
}

/// Keeps a cursor in fill mode for as long as the scope lives.
///
/// `fill(true)` is sent on creation (only if `active`), and the matching `fill(false)` is
/// sent when the scope is dropped, so an early return can never leave the fill open.
pub struct FillScope<'a, C: Cursor + ?Sized> {
    cursor: &'a mut C,
    active: bool,
}

impl<'a, C: Cursor + ?Sized> FillScope<'a, C> {
    pub fn new(cursor: &'a mut C, active: bool) -> Self {
        if active {
            cursor.fill(true);
        }
        Self { cursor, active }
    }
}

impl<C: Cursor + ?Sized> Deref for FillScope<'_, C> {
    type Target = C;

    fn deref(&self) -> &Self::Target {
        self.cursor
    }
}

impl<C: Cursor + ?Sized> DerefMut for FillScope<'_, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.cursor
    }
}

impl<C: Cursor + ?Sized> Drop for FillScope<'_, C> {
    fn drop(&mut self) {
        if self.active {
            self.cursor.fill(false);
        }
    }
}

/// A square traced clockwise from the current position. Position and heading are restored.
pub fn draw_square<C: Cursor + ?Sized>(cursor: &mut C, size: f64, fill: bool) {
    let mut scope = FillScope::new(cursor, fill);
    for _ in 0..4 {
        scope.forward(size);
        scope.right(90.0);
    }
}

/// An equilateral triangle traced clockwise from the current position. Position and heading
/// are restored.
pub fn draw_triangle<C: Cursor + ?Sized>(cursor: &mut C, size: f64, fill: bool) {
    let mut scope = FillScope::new(cursor, fill);
    for _ in 0..3 {
        scope.forward(size);
        scope.right(120.0);
    }
}
