// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the fractr crate.

use crate::cursor::{Cursor, draw_square};
use std::f64::consts::FRAC_1_SQRT_2;

/// The Pythagoras tree.
/// <http://en.wikipedia.org/wiki/Pythagoras_tree_%28fractal%29>
///
/// A filled square followed by two children of side `size * √2 / 2`, each standing at 45°
/// on one of the legs of the right isosceles triangle raised on the square's top edge.
/// Draws `2^(level+1) - 1` squares and returns to the start, heading unchanged.
pub fn pythagoras<C: Cursor + ?Sized>(cursor: &mut C, size: f64, level: i32) {
    draw_square(cursor, size, true);
    if level < 1 {
        return;
    }
    let child = size * FRAC_1_SQRT_2;

    // left child
    cursor.left(135.0);
    cursor.forward(child);
    cursor.right(90.0);
    pythagoras(cursor, child, level - 1);
    cursor.left(90.0);
    cursor.backward(child);
    cursor.right(135.0);

    // right child, reached over the apex of the triangle
    cursor.forward(size);
    cursor.left(135.0);
    cursor.forward(child);
    cursor.right(90.0);
    cursor.forward(child);
    cursor.right(90.0);
    pythagoras(cursor, child, level - 1);
    cursor.left(90.0);
    cursor.backward(child);
    cursor.left(90.0);
    cursor.backward(child);
    cursor.right(135.0);
    cursor.backward(size);
}
