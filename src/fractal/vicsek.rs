// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the fractr crate.

//! The two forms of the Vicsek fractal. Both split the `size`×`size` box below and to the
//! right of the cursor into a 3×3 grid and keep five of the cells.
//!
//! Both forms start and end in the top-left corner of the box, heading unchanged, with the
//! pen up.

use crate::cursor::{Cursor, draw_square};

/// One kept cell: a filled square at the base level, a smaller copy otherwise
fn saltire_cell<C: Cursor + ?Sized>(cursor: &mut C, cell: f64, level: i32) {
    if level < 1 {
        draw_square(cursor, cell, true);
    } else {
        vicsek_saltire(cursor, cell, level - 1);
    }
}

fn cross_cell<C: Cursor + ?Sized>(cursor: &mut C, cell: f64, level: i32) {
    if level < 1 {
        draw_square(cursor, cell, true);
    } else {
        vicsek_cross(cursor, cell, level - 1);
    }
}

/// The saltire (X shaped) form: the four corners and the centre
pub fn vicsek_saltire<C: Cursor + ?Sized>(cursor: &mut C, size: f64, level: i32) {
    let cell = size / 3.0;

    // top row, left and right corners
    cursor.pen_down();
    saltire_cell(cursor, cell, level);
    cursor.pen_up();
    cursor.forward(2.0 * cell);
    cursor.pen_down();
    saltire_cell(cursor, cell, level);
    cursor.pen_up();
    cursor.backward(2.0 * cell);

    // centre
    cursor.right(90.0);
    cursor.forward(cell);
    cursor.left(90.0);
    cursor.forward(cell);
    cursor.pen_down();
    saltire_cell(cursor, cell, level);
    cursor.pen_up();
    cursor.backward(cell);

    // bottom row, left and right corners
    cursor.right(90.0);
    cursor.forward(cell);
    cursor.left(90.0);
    cursor.pen_down();
    saltire_cell(cursor, cell, level);
    cursor.pen_up();
    cursor.forward(2.0 * cell);
    cursor.pen_down();
    saltire_cell(cursor, cell, level);
    cursor.pen_up();
    cursor.backward(2.0 * cell);

    // back to the top-left corner
    cursor.left(90.0);
    cursor.forward(2.0 * cell);
    cursor.right(90.0);
}

/// The cross (+ shaped) form: the four edge midpoints and the centre.
///
/// At the base level the moves between the middle row cells are made with the pen down,
/// they run along the cell borders. Deeper levels lift the pen in each sub-call.
pub fn vicsek_cross<C: Cursor + ?Sized>(cursor: &mut C, size: f64, level: i32) {
    let cell = size / 3.0;

    // top middle
    cursor.pen_up();
    cursor.forward(cell);
    cursor.pen_down();
    cross_cell(cursor, cell, level);
    cursor.pen_up();
    cursor.backward(cell);

    // middle row, left to right
    cursor.right(90.0);
    cursor.forward(cell);
    cursor.left(90.0);
    cursor.pen_down();
    cross_cell(cursor, cell, level);
    cursor.forward(cell);
    cross_cell(cursor, cell, level);
    cursor.forward(cell);
    cross_cell(cursor, cell, level);
    cursor.backward(cell);

    // bottom middle
    cursor.right(90.0);
    cursor.forward(cell);
    cursor.left(90.0);
    cross_cell(cursor, cell, level);

    // back to the top-left corner
    cursor.pen_up();
    cursor.left(90.0);
    cursor.forward(2.0 * cell);
    cursor.right(90.0);
    cursor.backward(cell);
}
