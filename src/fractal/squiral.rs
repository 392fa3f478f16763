// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the fractr crate.

use crate::cursor::Cursor;

/// A square spiral, each arm `size` shorter than the previous one.
pub fn squiral<C: Cursor + ?Sized>(cursor: &mut C, size: f64, level: i32) {
    if level < 1 {
        cursor.forward(size);
    } else {
        cursor.forward(size * f64::from(level));
        cursor.right(90.0);
        squiral(cursor, size, level - 1);
    }
}
