// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the fractr crate.

use crate::cursor::{Cursor, Orientation, draw_triangle};

/// The Sierpinski triangle.
/// <https://en.wikipedia.org/wiki/Sierpinski_triangle>
///
/// The triangle stands on the current heading with its left corner at the cursor. Draws
/// `3^level` filled triangles and returns to the start, heading unchanged.
pub fn sierpinski<C: Cursor + ?Sized>(cursor: &mut C, size: f64, level: i32) {
    if level < 1 {
        cursor.left(60.0);
        draw_triangle(cursor, size, true);
        cursor.right(60.0);
    } else {
        let half = size / 2.0;
        // left corner
        sierpinski(cursor, half, level - 1);
        // top corner
        cursor.left(60.0);
        cursor.forward(half);
        cursor.right(60.0);
        sierpinski(cursor, half, level - 1);
        cursor.left(60.0);
        cursor.backward(half);
        cursor.right(60.0);
        // right corner
        cursor.forward(half);
        sierpinski(cursor, half, level - 1);
        cursor.backward(half);
    }
}

/// The Sierpinski arrowhead curve.
/// <https://en.wikipedia.org/wiki/Sierpi%C5%84ski_arrowhead_curve>
///
/// The orientation alternates between the outer and the middle child. A clockwise curve
/// ends `2 * size` ahead of the start, a counter-clockwise one `2 * size` behind it (all
/// its moves are made backwards).
pub fn sierpinski_arrowhead<C: Cursor + ?Sized>(
    cursor: &mut C,
    size: f64,
    level: i32,
    orientation: Orientation,
) {
    let d = orientation.sign();
    if level < 1 {
        cursor.left(60.0 * d);
        cursor.forward(size * d);
        cursor.right(60.0 * d);
        cursor.forward(size * d);
        cursor.right(60.0 * d);
        cursor.forward(size * d);
        cursor.left(60.0 * d);
    } else {
        let half = size / 2.0;
        cursor.right(120.0 * d);
        sierpinski_arrowhead(cursor, half, level - 1, orientation.flip());
        cursor.left(120.0 * d);
        sierpinski_arrowhead(cursor, half, level - 1, orientation);
        cursor.left(120.0 * d);
        sierpinski_arrowhead(cursor, half, level - 1, orientation.flip());
        cursor.right(120.0 * d);
    }
}
