// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the fractr crate.

use crate::cursor::Cursor;

/// The Lévy C-curve.
/// <http://en.wikipedia.org/wiki/C-curve>
///
/// The halves are scaled by 1/2, not 1/√2, so the chord shrinks by √2/2 for every level.
pub fn c_curve<C: Cursor + ?Sized>(cursor: &mut C, size: f64, level: i32) {
    if level < 1 {
        cursor.forward(size);
    } else {
        cursor.left(45.0);
        c_curve(cursor, size / 2.0, level - 1);
        cursor.right(90.0);
        c_curve(cursor, size / 2.0, level - 1);
        cursor.left(45.0);
    }
}
