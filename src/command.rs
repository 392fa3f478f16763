// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2023, 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the fractr crate.

//! A string keyed entry point: pick a fractal by name, draw it with a [`Turtle`] and get the
//! result back as plain mesh data.

mod impls;
mod mesh;

use crate::{
    FractrError,
    cursor::{Orientation, Turtle},
    fractal::{DEFAULT_TRIANGLE_ANGLE, Fractal},
};
use std::{collections::HashMap, fmt, time};
use vector_traits::glam::Vec3;

/// The deepest level accepted unless the `max_level` option says otherwise.
/// The generators recurse on the call stack.
pub const DEFAULT_MAX_LEVEL: u32 = 10;

/// The largest [`Fractal::estimated_moves`] accepted unless the `max_moves` option says
/// otherwise. Every move may store a segment or a polygon vertex.
pub const DEFAULT_MAX_MOVES: u64 = 1 << 24;

pub const COMMAND_TAG: &str = "command";
pub const SIZE_TAG: &str = "size";
pub const LEVEL_TAG: &str = "level";
pub const ORIENTATION_TAG: &str = "orientation";
pub const ANGLE_TAG: &str = "angle";
pub const MAX_LEVEL_TAG: &str = "max_level";
pub const MAX_MOVES_TAG: &str = "max_moves";
pub const SEGMENT_COUNT_TAG: &str = "segment.count";
pub const POLYGON_COUNT_TAG: &str = "polygon.count";

pub trait Options {
    /// Will return an option parsed as a `T` or an Err.
    /// A missing option falls back to `default`, if there is one.
    fn get_mandatory_parsed_option<T: std::str::FromStr>(
        &self,
        key: &str,
        default: Option<T>,
    ) -> Result<T, FractrError>;

    /// Will return an option parsed as a `T` or None.
    /// If the option is missing None is returned, if it there but if it can't be parsed an error
    /// will be returned.
    fn get_parsed_option<T: std::str::FromStr>(&self, key: &str) -> Result<Option<T>, FractrError>;

    /// Returns the &str value of an option, or an Err is it does not exists
    fn get_mandatory_option(&self, key: &str) -> Result<&str, FractrError>;

    /// Returns true if the option exists
    fn does_option_exist(&self, key: &str) -> Result<bool, FractrError>;
}

pub type ConfigType = HashMap<String, String>;

/// vertices, indices and the return options
pub type CommandResult = (Vec<Vec3>, Vec<usize>, ConfigType);

/// How the returned indices should be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshFormat {
    /// Index pairs, one per line segment
    LineChunks,
    /// Index triples, one per triangle
    Triangulated,
}

impl MeshFormat {
    pub const MESH_FORMAT_TAG: &'static str = "mesh.format";
}

impl fmt::Display for MeshFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MeshFormat::LineChunks => "line_chunks",
            MeshFormat::Triangulated => "triangulated",
        })
    }
}

/// Builds the [`Fractal`] described by the options
fn fractal_from_config(config: &ConfigType) -> Result<Fractal, FractrError> {
    let name = config.get_mandatory_option(COMMAND_TAG)?;
    let orientation: Orientation =
        config.get_mandatory_parsed_option(ORIENTATION_TAG, Some(Orientation::Clockwise))?;
    let mut fractal = Fractal::new(name, orientation, DEFAULT_TRIANGLE_ANGLE)?;
    // only the triangle studies look at the angle
    if let Fractal::UmcTriangle { angle } | Fractal::AccidentalTriangle { angle } = &mut fractal
    {
        *angle = config.get_mandatory_parsed_option(ANGLE_TAG, Some(DEFAULT_TRIANGLE_ANGLE))?;
        if !angle.is_finite() {
            return Err(FractrError::FloatNotFinite(format!(
                "The {ANGLE_TAG} was not finite: {angle}"
            )));
        }
    }
    Ok(fractal)
}

/// Draws the fractal named by the `command` option.
///
/// Curve families are returned as [`MeshFormat::LineChunks`], area families as
/// [`MeshFormat::Triangulated`] fill regions.
pub fn process_command(config: ConfigType) -> Result<CommandResult, FractrError> {
    let fractal = fractal_from_config(&config)?;
    let size: f64 = config.get_mandatory_parsed_option(SIZE_TAG, None)?;
    let level: i32 = config.get_mandatory_parsed_option(LEVEL_TAG, None)?;
    let max_level: u32 = config.get_mandatory_parsed_option(MAX_LEVEL_TAG, Some(DEFAULT_MAX_LEVEL))?;
    let max_moves: u64 = config.get_mandatory_parsed_option(MAX_MOVES_TAG, Some(DEFAULT_MAX_MOVES))?;

    if !size.is_finite() {
        return Err(FractrError::FloatNotFinite(format!(
            "The {SIZE_TAG} was not finite: {size}"
        )));
    }
    if i64::from(level) > i64::from(max_level) {
        return Err(FractrError::InvalidParameter(format!(
            "The {LEVEL_TAG} {level} is deeper than the allowed {MAX_LEVEL_TAG} {max_level}"
        )));
    }
    let estimated_moves = fractal.estimated_moves(level);
    if estimated_moves > max_moves {
        return Err(FractrError::InvalidParameter(format!(
            "{} at {LEVEL_TAG} {level} needs about {estimated_moves} moves, more than the allowed {MAX_MOVES_TAG} {max_moves}",
            fractal.name()
        )));
    }

    tracing::debug!(
        "drawing {} with size:{} level:{}",
        fractal.name(),
        size,
        level
    );
    let now = time::Instant::now();
    let mut turtle = Turtle::new();
    fractal.draw(&mut turtle, size, level);
    let drawing = turtle.into_drawing();
    tracing::debug!(
        "{} drew {} segments and {} fill regions in {:?}",
        fractal.name(),
        drawing.segments.len(),
        drawing.polygons.len(),
        now.elapsed()
    );

    let (vertices, indices, format) = if fractal.is_area() {
        let (vertices, indices) = mesh::triangulate_polygons(&drawing.polygons)?;
        (vertices, indices, MeshFormat::Triangulated)
    } else {
        let (vertices, indices) = mesh::line_chunks(&drawing.segments)?;
        (vertices, indices, MeshFormat::LineChunks)
    };
    if indices.is_empty() {
        return Err(FractrError::NoData(format!(
            "{} did not generate any geometry",
            fractal.name()
        )));
    }

    let mut return_config = ConfigType::new();
    let _ = return_config.insert(MeshFormat::MESH_FORMAT_TAG.to_string(), format.to_string());
    let _ = return_config.insert(
        SEGMENT_COUNT_TAG.to_string(),
        drawing.segments.len().to_string(),
    );
    let _ = return_config.insert(
        POLYGON_COUNT_TAG.to_string(),
        drawing.polygons.len().to_string(),
    );
    tracing::debug!(
        "{} operation returning {} vertices as {}",
        fractal.name(),
        vertices.len(),
        format
    );
    Ok((vertices, indices, return_config))
}
