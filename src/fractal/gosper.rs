// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the fractr crate.

use crate::cursor::{Cursor, Orientation};

const SCALE: f64 = 2.5;

/// The Gosper curve.
/// <http://en.wikipedia.org/wiki/Gosper_curve>
///
/// Both orientations of the base unit trace six moves (one of them double length) between
/// the same two end points, so the two can be mixed freely in the recursion. The heading is
/// unchanged on return.
pub fn gosper<C: Cursor + ?Sized>(
    cursor: &mut C,
    size: f64,
    level: i32,
    orientation: Orientation,
) {
    use Orientation::{Clockwise as Cw, CounterClockwise as Ccw};

    if level < 1 {
        match orientation {
            Cw => {
                cursor.right(60.0);
                cursor.forward(size);
                cursor.left(60.0);
                cursor.forward(2.0 * size);
                cursor.left(120.0);
                cursor.forward(size);
                cursor.left(60.0);
                cursor.forward(size);
                cursor.right(120.0);
                cursor.forward(size);
                cursor.right(60.0);
                cursor.forward(size);
            }
            Ccw => {
                cursor.forward(size);
                cursor.left(60.0);
                cursor.forward(size);
                cursor.left(120.0);
                cursor.forward(size);
                cursor.right(60.0);
                cursor.forward(size);
                cursor.right(120.0);
                cursor.forward(2.0 * size);
                cursor.right(60.0);
                cursor.forward(size);
                cursor.left(60.0);
            }
        }
        return;
    }

    let size = size / SCALE;
    let level = level - 1;
    match orientation {
        Cw => {
            cursor.right(60.0);
            gosper(cursor, size, level, Ccw);
            cursor.left(60.0);
            gosper(cursor, size, level, Cw);
            gosper(cursor, size, level, Cw);
            cursor.left(120.0);
            gosper(cursor, size, level, Cw);
            cursor.left(60.0);
            gosper(cursor, size, level, Ccw);
            cursor.right(120.0);
            gosper(cursor, size, level, Ccw);
            cursor.right(60.0);
            gosper(cursor, size, level, Cw);
        }
        Ccw => {
            gosper(cursor, size, level, Ccw);
            cursor.left(60.0);
            gosper(cursor, size, level, Cw);
            cursor.left(120.0);
            gosper(cursor, size, level, Cw);
            cursor.right(60.0);
            gosper(cursor, size, level, Ccw);
            cursor.right(120.0);
            gosper(cursor, size, level, Ccw);
            gosper(cursor, size, level, Ccw);
            cursor.right(60.0);
            gosper(cursor, size, level, Cw);
            cursor.left(60.0);
        }
    }
}

/// Six [`gosper`] sides turning 60° clockwise after each, a closed figure at every level.
pub fn full_gosper<C: Cursor + ?Sized>(
    cursor: &mut C,
    size: f64,
    level: i32,
    orientation: Orientation,
) {
    for _ in 0..6 {
        gosper(cursor, size, level, orientation);
        cursor.right(60.0);
    }
}
