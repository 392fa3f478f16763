// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the fractr crate.

use crate::cursor::Cursor;

/// One side of the Koch snowflake.
/// <http://en.wikipedia.org/wiki/Koch_snowflake>
///
/// Draws `4^level` segments of length `size / 3^level`, ending `size` further along the
/// initial heading with the heading unchanged.
pub fn koch<C: Cursor + ?Sized>(cursor: &mut C, size: f64, level: i32) {
    if level < 1 {
        cursor.forward(size);
    } else {
        let size = size / 3.0;
        koch(cursor, size, level - 1);
        cursor.left(60.0);
        koch(cursor, size, level - 1);
        cursor.right(120.0);
        koch(cursor, size, level - 1);
        cursor.left(60.0);
        koch(cursor, size, level - 1);
    }
}

/// The full Koch snowflake: three [`koch`] sides, turning 120° clockwise after each.
pub fn full_koch<C: Cursor + ?Sized>(cursor: &mut C, size: f64, level: i32) {
    for _ in 0..3 {
        koch(cursor, size, level);
        cursor.right(120.0);
    }
}
