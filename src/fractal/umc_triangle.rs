// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the fractr crate.

//! Two triangle studies built around angle bisectors. Neither scales `size` between
//! levels, they halve the construction `angle` instead.
//!
//! Lengths are divided by `cos(angle)`, so an `angle` of 90° gives non-finite moves.

use crate::cursor::Cursor;

#[inline]
fn cos_deg(angle: f64) -> f64 {
    angle.to_radians().cos()
}

#[inline]
fn sin_deg(angle: f64) -> f64 {
    angle.to_radians().sin()
}

/// A "uniform mass centre" triangle: the three sides with a spur along each bisector.
///
/// The base unit makes nine moves and a net turn of 360°.
pub fn umc_triangle<C: Cursor + ?Sized>(cursor: &mut C, size: f64, angle: f64, level: i32) {
    let half_angle = angle / 2.0;
    let obtuse = 180.0 - angle * 2.0;
    let leg = size / (2.0 * cos_deg(angle));

    if level < 1 {
        let spur = size / (2.0 * cos_deg(half_angle));
        let apex_spur = leg * sin_deg(half_angle) / sin_deg(180.0 - half_angle - obtuse / 2.0);

        cursor.forward(size);
        cursor.left(180.0 - angle + half_angle);
        cursor.forward(spur);
        cursor.backward(spur);
        cursor.right(half_angle);

        cursor.forward(leg);
        cursor.left(180.0 - obtuse + obtuse / 2.0);
        cursor.forward(apex_spur);
        cursor.backward(apex_spur);
        cursor.right(obtuse / 2.0);

        cursor.forward(leg);
        cursor.left(180.0 - angle + half_angle);
        cursor.forward(spur);
        cursor.backward(spur);
        cursor.right(half_angle);
    } else {
        for _ in 0..3 {
            umc_triangle(cursor, size, half_angle, level - 1);
            cursor.forward(size);
            cursor.forward(leg);
            cursor.forward(leg);
        }
    }
}

/// The happy accident found while building [`umc_triangle`]: three sides, each followed by
/// an exterior turn and a spur, repeated three times per level with a halved angle.
pub fn accidental_triangle<C: Cursor + ?Sized>(cursor: &mut C, size: f64, angle: f64, level: i32) {
    let half_angle = angle / 2.0;
    if level < 1 {
        let obtuse = 180.0 - angle;
        let spur = size / (2.0 * cos_deg(half_angle));
        for _ in 0..3 {
            cursor.forward(size);
            cursor.left(obtuse);
            cursor.forward(spur);
            cursor.backward(spur);
            cursor.right(half_angle);
        }
    } else {
        for _ in 0..3 {
            accidental_triangle(cursor, size, half_angle, level - 1);
        }
    }
}
