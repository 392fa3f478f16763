// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the fractr crate.

use super::Cursor;

/// One turtle operation, as sent by a fractal generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// A negative distance is a backward move
    Forward(f64),
    TurnLeft(f64),
    TurnRight(f64),
    PenUp,
    PenDown,
    BeginFill,
    EndFill,
    Reset,
}

impl DrawCommand {
    /// Apply this command to another cursor
    pub fn apply<C: Cursor + ?Sized>(&self, cursor: &mut C) {
        match self {
            DrawCommand::Forward(distance) => cursor.forward(*distance),
            DrawCommand::TurnLeft(angle) => cursor.left(*angle),
            DrawCommand::TurnRight(angle) => cursor.right(*angle),
            DrawCommand::PenUp => cursor.pen_up(),
            DrawCommand::PenDown => cursor.pen_down(),
            DrawCommand::BeginFill => cursor.fill(true),
            DrawCommand::EndFill => cursor.fill(false),
            DrawCommand::Reset => cursor.reset(),
        }
    }
}

/// A cursor that only remembers what it was told to do.
#[derive(Debug, Default, Clone)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of `Forward` commands, backward moves included
    pub fn forward_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Forward(_)))
            .count()
    }

    /// Number of fill regions started
    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::BeginFill))
            .count()
    }

    /// The signed sum of all turns, counter-clockwise positive
    pub fn turn_sum(&self) -> f64 {
        self.commands
            .iter()
            .map(|c| match c {
                DrawCommand::TurnLeft(angle) => *angle,
                DrawCommand::TurnRight(angle) => -*angle,
                _ => 0.0,
            })
            .sum()
    }

    /// Replay the recorded commands onto another cursor
    pub fn replay<C: Cursor + ?Sized>(&self, cursor: &mut C) {
        self.commands.iter().for_each(|c| c.apply(cursor));
    }
}

impl Cursor for CommandRecorder {
    fn forward(&mut self, length: f64) {
        self.commands.push(DrawCommand::Forward(length));
    }

    fn left(&mut self, degrees: f64) {
        self.commands.push(DrawCommand::TurnLeft(degrees));
    }

    fn right(&mut self, degrees: f64) {
        self.commands.push(DrawCommand::TurnRight(degrees));
    }

    fn pen_up(&mut self) {
        self.commands.push(DrawCommand::PenUp);
    }

    fn pen_down(&mut self) {
        self.commands.push(DrawCommand::PenDown);
    }

    fn fill(&mut self, active: bool) {
        self.commands.push(if active {
            DrawCommand::BeginFill
        } else {
            DrawCommand::EndFill
        });
    }

    fn reset(&mut self) {
        self.commands.push(DrawCommand::Reset);
    }
}
