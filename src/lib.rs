// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2023, 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the fractr crate.

#![deny(
    rust_2018_compatibility,
    rust_2018_idioms,
    nonstandard_style,
    unused,
    future_incompatible,
    non_camel_case_types,
    unused_parens,
    non_upper_case_globals,
    unused_qualifications,
    unused_results,
    unused_imports,
    unused_variables,
    bare_trait_objects,
    ellipsis_inclusive_range_patterns,
    elided_lifetimes_in_paths
)]
#![warn(clippy::explicit_into_iter_loop)]

//! Recursive fractal generators driving a 2D turtle.
//!
//! Every generator is a plain recursive function over `(size, level[, orientation])` that
//! emits forward/turn/pen/fill operations against a [`cursor::Cursor`]. Nothing is rendered
//! here: a cursor either records the commands ([`cursor::CommandRecorder`]) or tracks the
//! geometry they trace ([`cursor::Turtle`]). The [`command`] module wraps it all in a
//! string-keyed option map that returns plain line or triangle mesh data.
//!
//! The generators recurse directly; a level of 10-12 is about as deep as any of them is
//! useful, and the command layer refuses anything deeper than `max_level`.

pub mod command;
pub mod cursor;
pub mod fractal;

pub mod prelude {
    pub use crate::{
        FractrError,
        command::{CommandResult, ConfigType, process_command},
        cursor::{CommandRecorder, Cursor, DrawCommand, FillScope, Orientation, Turtle},
        fractal::Fractal,
    };
}

#[derive(thiserror::Error, Debug)]
pub enum FractrError {
    #[error(transparent)]
    EarcutrError(#[from] earcutr::Error),

    #[error("Invalid float value: {0}")]
    FloatNotFinite(String),

    #[error("Invalid input data: {0}")]
    InvalidParameter(String),

    #[error("Missing input data: {0}")]
    NoData(String),

    #[error("Missing parameter: {0}")]
    MissingParameter(String),
}
