// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the fractr crate.

//! A module containing boilerplate implementations of standard traits such as Default, From etc etc

use super::{DrawCommand, Drawing, Orientation, Turtle};
use crate::FractrError;
use std::{fmt, ops::Neg, str::FromStr};
use vector_traits::glam::DVec2;

impl Default for Turtle {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            heading: 0.0,
            pen_down: true,
            fill: None,
            drawing: Drawing::default(),
        }
    }
}

impl From<bool> for Orientation {
    /// `true` is clockwise, matching the `+1` convention
    fn from(clockwise: bool) -> Self {
        if clockwise {
            Orientation::Clockwise
        } else {
            Orientation::CounterClockwise
        }
    }
}

impl Neg for Orientation {
    type Output = Orientation;

    fn neg(self) -> Self::Output {
        self.flip()
    }
}

impl FromStr for Orientation {
    type Err = FractrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cw" | "clockwise" | "1" | "+1" | "true" => Ok(Orientation::Clockwise),
            "ccw" | "counterclockwise" | "counter_clockwise" | "-1" | "false" => {
                Ok(Orientation::CounterClockwise)
            }
            other => Err(FractrError::InvalidParameter(format!(
                "Unknown orientation: {{\"{other}\"}}"
            ))),
        }
    }
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::Forward(distance) => write!(f, "fd {distance}"),
            DrawCommand::TurnLeft(angle) => write!(f, "lt {angle}"),
            DrawCommand::TurnRight(angle) => write!(f, "rt {angle}"),
            DrawCommand::PenUp => f.write_str("pu"),
            DrawCommand::PenDown => f.write_str("pd"),
            DrawCommand::BeginFill => f.write_str("begin_fill"),
            DrawCommand::EndFill => f.write_str("end_fill"),
            DrawCommand::Reset => f.write_str("reset"),
        }
    }
}
