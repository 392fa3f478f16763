// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the fractr crate.

use crate::cursor::{Cursor, Orientation};
use std::f64::consts::SQRT_2;

/// The Heighway dragon curve.
/// <http://en.wikipedia.org/wiki/Dragon_curve>
///
/// Every level is made of `2^level` right-angle units of two moves each. The end point is
/// always `size * √2` along the initial heading, and the heading is restored.
/// The first child is always clockwise and the second counter-clockwise, whatever the
/// orientation of the parent.
pub fn dragon<C: Cursor + ?Sized>(cursor: &mut C, size: f64, level: i32, orientation: Orientation) {
    let d = orientation.sign();
    cursor.pen_down();
    cursor.right(d * 45.0);
    if level < 1 {
        cursor.forward(size);
        cursor.left(d * 90.0);
        cursor.forward(size);
    } else {
        dragon(cursor, size / SQRT_2, level - 1, Orientation::Clockwise);
        cursor.left(d * 90.0);
        dragon(cursor, size / SQRT_2, level - 1, Orientation::CounterClockwise);
    }
    cursor.right(d * 45.0);
}
