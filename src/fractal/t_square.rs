// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the fractr crate.

use crate::cursor::{Cursor, draw_square};

/// The T-square fractal.
/// <http://en.wikipedia.org/wiki/T-Square_%28fractal%29>
///
/// A filled square below and to the right of the cursor, with a half sized T-square centred
/// on each of its four corners. Draws `(4^(level+1) - 1) / 3` squares and returns to the
/// start, heading unchanged, pen down.
pub fn t_square<C: Cursor + ?Sized>(cursor: &mut C, size: f64, level: i32) {
    draw_square(cursor, size, true);
    if level < 1 {
        return;
    }
    let quarter = size / 4.0;
    let half = size / 2.0;

    // to the top-left corner of the child centred on our top-left corner
    cursor.backward(quarter);
    cursor.left(90.0);
    cursor.forward(quarter);
    cursor.right(90.0);
    t_square(cursor, half, level - 1);

    // top-right
    cursor.pen_up();
    cursor.forward(size);
    cursor.pen_down();
    t_square(cursor, half, level - 1);

    // bottom-right
    cursor.right(90.0);
    cursor.forward(size);
    cursor.left(90.0);
    t_square(cursor, half, level - 1);

    // bottom-left
    cursor.backward(size);
    t_square(cursor, half, level - 1);

    cursor.left(90.0);
    cursor.pen_up();
    cursor.forward(3.0 * quarter);
    cursor.pen_down();
    cursor.right(90.0);
    cursor.forward(quarter);
}
