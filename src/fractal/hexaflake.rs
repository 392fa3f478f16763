// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the fractr crate.

use crate::cursor::{Cursor, FillScope, Orientation};

/// A filled regular hexagon, traced from the cursor turning 60° the `orientation` way after
/// every side. Position and heading are restored.
fn draw_hexagon<C: Cursor + ?Sized>(cursor: &mut C, size: f64, orientation: Orientation) {
    let d = orientation.sign();
    let mut scope = FillScope::new(cursor, true);
    for _ in 0..6 {
        scope.forward(size);
        scope.right(60.0 * d);
    }
}

/// The hexaflake.
/// <https://en.wikipedia.org/wiki/Hexaflake>
///
/// The outline is the hexagon of side `size` that [`draw_hexagon`] would trace from the
/// cursor. Each level replaces a hexagon by seven of a third the side: one in the centre and
/// one in every corner. A corner child shares the corner vertex with its parent, so it is
/// drawn from that vertex with the heading of the parent edge leaving it. Draws `7^level`
/// hexagons and returns to the start, heading unchanged, pen down.
pub fn hexaflake<C: Cursor + ?Sized>(
    cursor: &mut C,
    size: f64,
    level: i32,
    orientation: Orientation,
) {
    if level < 1 {
        draw_hexagon(cursor, size, orientation);
        return;
    }
    let d = orientation.sign();
    let child = size / 3.0;

    // walk the perimeter, one child per corner
    for _ in 0..6 {
        hexaflake(cursor, child, level - 1, orientation);
        cursor.pen_up();
        cursor.forward(size);
        cursor.pen_down();
        cursor.right(60.0 * d);
    }

    // the centre child starts two thirds of the way from the first corner to the centre
    cursor.pen_up();
    cursor.right(60.0 * d);
    cursor.forward(2.0 * child);
    cursor.left(60.0 * d);
    cursor.pen_down();
    hexaflake(cursor, child, level - 1, orientation);
    cursor.pen_up();
    cursor.right(60.0 * d);
    cursor.backward(2.0 * child);
    cursor.left(60.0 * d);
    cursor.pen_down();
}
