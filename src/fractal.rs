// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the fractr crate.

//! The fractal generators.
//!
//! Every generator recurses directly on the call stack until `level < 1`, where it draws its
//! base unit. Neither `size` nor `level` is validated: a negative level simply draws the
//! base unit and a non-positive size draws a degenerate (or mirrored) figure.

mod c_curve;
mod dragon;
mod gosper;
mod hexaflake;
mod koch;
mod pythagoras;
mod sierpinski;
mod squiral;
mod t_square;
#[cfg(test)]
mod tests;
mod umc_triangle;
mod vicsek;

pub use c_curve::c_curve;
pub use dragon::dragon;
pub use gosper::{full_gosper, gosper};
pub use hexaflake::hexaflake;
pub use koch::{full_koch, koch};
pub use pythagoras::pythagoras;
pub use sierpinski::{sierpinski, sierpinski_arrowhead};
pub use squiral::squiral;
pub use t_square::t_square;
pub use umc_triangle::{accidental_triangle, umc_triangle};
pub use vicsek::{vicsek_cross, vicsek_saltire};

use crate::{
    FractrError,
    cursor::{Cursor, Orientation},
};

/// The angle used by the UMC and accidental triangles when none is given
pub const DEFAULT_TRIANGLE_ANGLE: f64 = 60.0;

/// A fractal family together with its shape parameters, everything but size and level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fractal {
    Koch,
    FullKoch,
    CCurve,
    Squiral,
    Gosper(Orientation),
    FullGosper(Orientation),
    VicsekCross,
    VicsekSaltire,
    Dragon(Orientation),
    Sierpinski,
    SierpinskiArrowhead(Orientation),
    TSquare,
    Pythagoras,
    Hexaflake(Orientation),
    UmcTriangle { angle: f64 },
    AccidentalTriangle { angle: f64 },
}

impl Fractal {
    /// Every name accepted by [`Fractal::new`]
    pub const NAMES: [&'static str; 16] = [
        "koch",
        "full_koch",
        "c_curve",
        "squiral",
        "gosper",
        "full_gosper",
        "vicsek_cross",
        "vicsek_saltire",
        "dragon",
        "sierpinski",
        "sierpinski_arrowhead",
        "t_square",
        "pythagoras",
        "hexaflake",
        "umc_triangle",
        "accidental_triangle",
    ];

    /// Look up a family by name. `orientation` and `angle` are ignored by the families that
    /// have no use for them.
    pub fn new(name: &str, orientation: Orientation, angle: f64) -> Result<Self, FractrError> {
        Ok(match name {
            "koch" => Fractal::Koch,
            "full_koch" => Fractal::FullKoch,
            "c_curve" => Fractal::CCurve,
            "squiral" => Fractal::Squiral,
            "gosper" => Fractal::Gosper(orientation),
            "full_gosper" => Fractal::FullGosper(orientation),
            "vicsek_cross" => Fractal::VicsekCross,
            "vicsek_saltire" => Fractal::VicsekSaltire,
            "dragon" => Fractal::Dragon(orientation),
            "sierpinski" => Fractal::Sierpinski,
            "sierpinski_arrowhead" => Fractal::SierpinskiArrowhead(orientation),
            "t_square" => Fractal::TSquare,
            "pythagoras" => Fractal::Pythagoras,
            "hexaflake" => Fractal::Hexaflake(orientation),
            "umc_triangle" => Fractal::UmcTriangle { angle },
            "accidental_triangle" => Fractal::AccidentalTriangle { angle },
            unknown => Err(FractrError::InvalidParameter(format!(
                "Unknown fractal:{unknown}"
            )))?,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Fractal::Koch => "koch",
            Fractal::FullKoch => "full_koch",
            Fractal::CCurve => "c_curve",
            Fractal::Squiral => "squiral",
            Fractal::Gosper(_) => "gosper",
            Fractal::FullGosper(_) => "full_gosper",
            Fractal::VicsekCross => "vicsek_cross",
            Fractal::VicsekSaltire => "vicsek_saltire",
            Fractal::Dragon(_) => "dragon",
            Fractal::Sierpinski => "sierpinski",
            Fractal::SierpinskiArrowhead(_) => "sierpinski_arrowhead",
            Fractal::TSquare => "t_square",
            Fractal::Pythagoras => "pythagoras",
            Fractal::Hexaflake(_) => "hexaflake",
            Fractal::UmcTriangle { .. } => "umc_triangle",
            Fractal::AccidentalTriangle { .. } => "accidental_triangle",
        }
    }

    /// True for the families that fill polygons rather than trace a path
    pub fn is_area(&self) -> bool {
        matches!(
            self,
            Fractal::VicsekCross
                | Fractal::VicsekSaltire
                | Fractal::Sierpinski
                | Fractal::TSquare
                | Fractal::Pythagoras
                | Fractal::Hexaflake(_)
        )
    }

    /// An upper bound of the cursor operations [`Fractal::draw`] sends at `level`,
    /// saturating at `u64::MAX`.
    ///
    /// Every family is `base * branches^level` or below, squiral is linear in the level.
    pub fn estimated_moves(&self, level: i32) -> u64 {
        let level = u32::try_from(level).unwrap_or(0);
        let (base, branches): (u64, u64) = match self {
            Fractal::Koch => (2, 4),
            Fractal::FullKoch => (9, 4),
            Fractal::CCurve => (4, 2),
            Fractal::Squiral => return 2_u64.saturating_mul(u64::from(level) + 1),
            Fractal::Gosper(_) => (14, 7),
            Fractal::FullGosper(_) => (6 * 15, 7),
            Fractal::VicsekCross | Fractal::VicsekSaltire => (100, 5),
            Fractal::Dragon(_) => (8, 2),
            Fractal::Sierpinski => (16, 3),
            Fractal::SierpinskiArrowhead(_) => (12, 3),
            Fractal::TSquare => (24, 4),
            Fractal::Pythagoras => (40, 2),
            Fractal::Hexaflake(_) => (32, 7),
            Fractal::UmcTriangle { .. } => (30, 3),
            Fractal::AccidentalTriangle { .. } => (15, 3),
        };
        base.saturating_mul(branches.saturating_pow(level))
    }

    /// Draw the fractal onto `cursor`, starting from wherever the cursor is.
    pub fn draw<C: Cursor + ?Sized>(&self, cursor: &mut C, size: f64, level: i32) {
        match *self {
            Fractal::Koch => koch(cursor, size, level),
            Fractal::FullKoch => full_koch(cursor, size, level),
            Fractal::CCurve => c_curve(cursor, size, level),
            Fractal::Squiral => squiral(cursor, size, level),
            Fractal::Gosper(o) => gosper(cursor, size, level, o),
            Fractal::FullGosper(o) => full_gosper(cursor, size, level, o),
            Fractal::VicsekCross => vicsek_cross(cursor, size, level),
            Fractal::VicsekSaltire => vicsek_saltire(cursor, size, level),
            Fractal::Dragon(o) => dragon(cursor, size, level, o),
            Fractal::Sierpinski => sierpinski(cursor, size, level),
            Fractal::SierpinskiArrowhead(o) => sierpinski_arrowhead(cursor, size, level, o),
            Fractal::TSquare => t_square(cursor, size, level),
            Fractal::Pythagoras => pythagoras(cursor, size, level),
            Fractal::Hexaflake(o) => hexaflake(cursor, size, level, o),
            Fractal::UmcTriangle { angle } => umc_triangle(cursor, size, angle, level),
            Fractal::AccidentalTriangle { angle } => {
                accidental_triangle(cursor, size, angle, level)
            }
        }
    }
}
