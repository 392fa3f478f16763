// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the fractr crate.

use super::*;
use crate::cursor::{CommandRecorder, DrawCommand, Turtle};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::f64::consts::{FRAC_1_SQRT_2, SQRT_2};
use vector_traits::glam::DVec2;
use DrawCommand::{Forward, TurnLeft, TurnRight};
use Orientation::{Clockwise as Cw, CounterClockwise as Ccw};

fn recorded(draw: impl FnOnce(&mut CommandRecorder)) -> CommandRecorder {
    let mut recorder = CommandRecorder::new();
    draw(&mut recorder);
    recorder
}

fn traced(draw: impl FnOnce(&mut Turtle)) -> Turtle {
    let mut turtle = Turtle::new();
    draw(&mut turtle);
    turtle
}

fn assert_near(expected: DVec2, actual: DVec2, tolerance: f64) {
    assert!(
        expected.abs_diff_eq(actual, tolerance),
        "expected {expected:?}, got {actual:?}"
    );
}

/// the angular distance between the turtle heading and 0°
fn heading_error(turtle: &Turtle) -> f64 {
    let h = turtle.heading();
    h.min(360.0 - h)
}

fn assert_closed(turtle: &Turtle, size: f64) {
    assert_near(DVec2::ZERO, turtle.position(), 1e-9 * size.abs().max(1.0));
    assert!(heading_error(turtle) < 1e-9, "heading {}", turtle.heading());
}

#[test]
fn test_koch_level_0() {
    let recorder = recorded(|c| koch(c, 300.0, 0));
    assert_eq!(&[Forward(300.0)], recorder.commands());
}

#[test]
fn test_koch_level_1() {
    let recorder = recorded(|c| koch(c, 300.0, 1));
    assert_eq!(
        &[
            Forward(100.0),
            TurnLeft(60.0),
            Forward(100.0),
            TurnRight(120.0),
            Forward(100.0),
            TurnLeft(60.0),
            Forward(100.0),
        ],
        recorder.commands()
    );
}

#[test]
fn test_koch_scaling() {
    for level in 0..6 {
        let recorder = recorded(|c| koch(c, 300.0, level));
        assert_eq!(4_usize.pow(level as u32), recorder.forward_count());
        assert_eq!(0.0, recorder.turn_sum());
        let expected = 300.0 / 3_f64.powi(level);
        for command in recorder.commands() {
            if let Forward(length) = command {
                assert!((length - expected).abs() < 1e-9);
            }
        }
        // every level ends where the straight base segment ends
        let turtle = traced(|c| koch(c, 300.0, level));
        assert_near(DVec2::new(300.0, 0.0), turtle.position(), 1e-9);
        assert!(heading_error(&turtle) < 1e-9);
    }
}

#[test]
fn test_full_koch_is_closed() {
    for level in 0..5 {
        let turtle = traced(|c| full_koch(c, 300.0, level));
        assert_closed(&turtle, 300.0);
        assert_eq!(3 * 4_usize.pow(level as u32), turtle.segments().len());
    }
}

#[test]
fn test_negative_level_is_base_case() {
    assert_eq!(&[Forward(42.0)], recorded(|c| koch(c, 42.0, -3)).commands());
    assert_eq!(2, recorded(|c| dragon(c, 42.0, -1, Cw)).forward_count());
    assert_eq!(1, recorded(|c| sierpinski(c, 42.0, -7)).fill_count());
}

#[test]
fn test_non_positive_size_is_accepted() {
    let turtle = traced(|c| koch(c, -9.0, 2));
    assert_near(DVec2::new(-9.0, 0.0), turtle.position(), 1e-9);
    let turtle = traced(|c| full_koch(c, 0.0, 2));
    assert_near(DVec2::ZERO, turtle.position(), 1e-12);
}

#[test]
fn test_zero_size_area_fractals_fill_nothing() {
    for fractal in [
        Fractal::Sierpinski,
        Fractal::VicsekCross,
        Fractal::TSquare,
        Fractal::Pythagoras,
        Fractal::Hexaflake(Ccw),
    ] {
        let recorder = recorded(|c| fractal.draw(c, 0.0, 1));
        assert!(recorder.fill_count() > 0);
        let turtle = traced(|c| fractal.draw(c, 0.0, 1));
        assert!(turtle.polygons().is_empty(), "{}", fractal.name());
    }
}

#[test]
fn test_c_curve() {
    for level in 0..10 {
        let recorder = recorded(|c| c_curve(c, 1800.0, level));
        assert_eq!(2_usize.pow(level as u32), recorder.forward_count());
        assert_eq!(0.0, recorder.turn_sum());

        let turtle = traced(|c| c_curve(c, 1800.0, level));
        let chord = 1800.0 * FRAC_1_SQRT_2.powi(level);
        assert_near(DVec2::new(chord, 0.0), turtle.position(), 1e-8);
        assert!(heading_error(&turtle) < 1e-9);
    }
}

#[test]
fn test_squiral() {
    let recorder = recorded(|c| squiral(c, 10.0, 3));
    assert_eq!(
        &[
            Forward(30.0),
            TurnRight(90.0),
            Forward(20.0),
            TurnRight(90.0),
            Forward(10.0),
            TurnRight(90.0),
            Forward(10.0),
        ],
        recorder.commands()
    );
    let turtle = traced(|c| squiral(c, 10.0, 3));
    assert_near(DVec2::new(20.0, -10.0), turtle.position(), 1e-9);
}

#[test]
fn test_gosper_base_units_share_end_points() {
    let expected = DVec2::new(2.5, 3_f64.sqrt() / 2.0) * 10.0;
    for orientation in [Cw, Ccw] {
        let turtle = traced(|c| gosper(c, 10.0, 0, orientation));
        assert_near(expected, turtle.position(), 1e-9);
        assert!(heading_error(&turtle) < 1e-9);
    }
}

#[test]
fn test_gosper_scaling() {
    for orientation in [Cw, Ccw] {
        for level in 0..4 {
            let recorder = recorded(|c| gosper(c, 100.0, level, orientation));
            assert_eq!(6 * 7_usize.pow(level as u32), recorder.forward_count());
            assert_eq!(0.0, recorder.turn_sum());
        }
    }
}

#[test]
fn test_full_gosper_is_closed() {
    for orientation in [Cw, Ccw] {
        for level in 0..4 {
            let turtle = traced(|c| full_gosper(c, 100.0, level, orientation));
            assert_closed(&turtle, 100.0);
            assert_eq!(36 * 7_usize.pow(level as u32), turtle.segments().len());
        }
    }
}

#[test]
fn test_vicsek_is_closed() {
    for level in 0..4 {
        let squares = 5_usize.pow(level as u32 + 1);

        let turtle = traced(|c| vicsek_saltire(c, 250.0, level));
        assert_closed(&turtle, 250.0);
        assert!(!turtle.is_pen_down());
        assert_eq!(squares, turtle.polygons().len());

        let turtle = traced(|c| vicsek_cross(c, 250.0, level));
        assert_closed(&turtle, 250.0);
        assert!(!turtle.is_pen_down());
        assert_eq!(squares, turtle.polygons().len());

        assert_eq!(squares, recorded(|c| vicsek_cross(c, 250.0, level)).fill_count());
    }
}

#[test]
fn test_vicsek_saltire_squares() {
    let turtle = traced(|c| vicsek_saltire(c, 3.0, 0));
    let (min, max) = turtle.bounds().unwrap();
    assert_near(DVec2::new(0.0, -3.0), min, 1e-9);
    assert_near(DVec2::new(3.0, 0.0), max, 1e-9);
    // the top-left corner of every kept cell
    let mut corners: Vec<(i64, i64)> = turtle
        .polygons()
        .iter()
        .map(|p| (p[0].x.round() as i64, p[0].y.round() as i64))
        .collect();
    corners.sort();
    assert_eq!(vec![(0, -2), (0, 0), (1, -1), (2, -2), (2, 0)], corners);
}

#[test]
fn test_vicsek_cross_squares() {
    let turtle = traced(|c| vicsek_cross(c, 3.0, 0));
    let mut corners: Vec<(i64, i64)> = turtle
        .polygons()
        .iter()
        .map(|p| (p[0].x.round() as i64, p[0].y.round() as i64))
        .collect();
    corners.sort();
    assert_eq!(vec![(0, -1), (1, -2), (1, -1), (1, 0), (2, -1)], corners);
}

#[test]
fn test_dragon_level_3() {
    for orientation in [Cw, Ccw] {
        let recorder = recorded(|c| dragon(c, 100.0, 3, orientation));
        // eight right-angle units of two moves each
        assert_eq!(16, recorder.forward_count());
        assert_eq!(0.0, recorder.turn_sum());
        let unit = 100.0 / (2.0 * SQRT_2);
        for command in recorder.commands() {
            if let Forward(length) = command {
                assert!((length - unit).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn test_dragon_end_point_is_level_independent() {
    for orientation in [Cw, Ccw] {
        for level in 0..10 {
            let turtle = traced(|c| dragon(c, 100.0, level, orientation));
            assert_near(DVec2::new(100.0 * SQRT_2, 0.0), turtle.position(), 1e-9);
            assert!(heading_error(&turtle) < 1e-9);
            assert_eq!(2_usize.pow(level as u32 + 1), turtle.segments().len());
        }
    }
}

#[test]
fn test_dragon_base_unit_is_mirrored() {
    let cw = traced(|c| dragon(c, 1.0, 0, Cw));
    let ccw = traced(|c| dragon(c, 1.0, 0, Ccw));
    let corner_cw = cw.segments()[0][1];
    let corner_ccw = ccw.segments()[0][1];
    assert_near(DVec2::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2), corner_cw, 1e-12);
    assert_near(DVec2::new(corner_cw.x, -corner_cw.y), corner_ccw, 1e-12);
}

#[test]
fn test_sierpinski_level_2() {
    let recorder = recorded(|c| sierpinski(c, 300.0, 2));
    assert_eq!(9, recorder.fill_count());

    let turtle = traced(|c| sierpinski(c, 300.0, 2));
    assert_closed(&turtle, 300.0);
    assert_eq!(9, turtle.polygons().len());
    assert!(turtle.polygons().iter().all(|p| p.len() == 3));
    let (min, max) = turtle.bounds().unwrap();
    assert_near(DVec2::ZERO, min, 1e-9);
    assert_near(DVec2::new(300.0, 150.0 * 3_f64.sqrt()), max, 1e-9);
}

#[test]
fn test_sierpinski_scaling() {
    for level in 0..6 {
        let recorder = recorded(|c| sierpinski(c, 300.0, level));
        assert_eq!(3_usize.pow(level as u32), recorder.fill_count());
        let turtle = traced(|c| sierpinski(c, 300.0, level));
        assert_closed(&turtle, 300.0);
    }
}

#[test]
fn test_sierpinski_arrowhead() {
    for orientation in [Cw, Ccw] {
        for level in 0..6 {
            let recorder = recorded(|c| sierpinski_arrowhead(c, 64.0, level, orientation));
            assert_eq!(3_usize.pow(level as u32 + 1), recorder.forward_count());
            assert_eq!(0.0, recorder.turn_sum());

            let turtle = traced(|c| sierpinski_arrowhead(c, 64.0, level, orientation));
            let expected = DVec2::new(2.0 * 64.0 * orientation.sign(), 0.0);
            assert_near(expected, turtle.position(), 1e-9);
            assert!(heading_error(&turtle) < 1e-9);
        }
    }
}

#[test]
fn test_t_square() {
    for level in 0..5 {
        let squares = (4_usize.pow(level as u32 + 1) - 1) / 3;
        assert_eq!(squares, recorded(|c| t_square(c, 200.0, level)).fill_count());
        let turtle = traced(|c| t_square(c, 200.0, level));
        assert_closed(&turtle, 200.0);
        assert!(turtle.is_pen_down());
        assert_eq!(squares, turtle.polygons().len());
    }
    let turtle = traced(|c| t_square(c, 4.0, 1));
    let (min, max) = turtle.bounds().unwrap();
    assert_near(DVec2::new(-1.0, -5.0), min, 1e-9);
    assert_near(DVec2::new(5.0, 1.0), max, 1e-9);
}

#[test]
fn test_pythagoras() {
    for level in 0..8 {
        let squares = 2_usize.pow(level as u32 + 1) - 1;
        assert_eq!(squares, recorded(|c| pythagoras(c, 100.0, level)).fill_count());
        let turtle = traced(|c| pythagoras(c, 100.0, level));
        assert_closed(&turtle, 100.0);
        assert_eq!(squares, turtle.polygons().len());
    }
    // the two children meet at the apex of the triangle on top of the trunk
    let turtle = traced(|c| pythagoras(c, 2.0, 1));
    let (min, max) = turtle.bounds().unwrap();
    assert_near(DVec2::new(-1.0, -2.0), min, 1e-9);
    assert_near(DVec2::new(3.0, 2.0), max, 1e-9);
}

#[test]
fn test_hexaflake() {
    let size = 150.0;
    let height = size * 3_f64.sqrt();
    for orientation in [Cw, Ccw] {
        let (expected_min, expected_max) = match orientation {
            Cw => (DVec2::new(-size / 2.0, -height), DVec2::new(1.5 * size, 0.0)),
            Ccw => (DVec2::new(-size / 2.0, 0.0), DVec2::new(1.5 * size, height)),
        };
        for level in 0..4 {
            let hexagons = 7_usize.pow(level as u32);
            assert_eq!(
                hexagons,
                recorded(|c| hexaflake(c, size, level, orientation)).fill_count()
            );
            let turtle = traced(|c| hexaflake(c, size, level, orientation));
            assert_closed(&turtle, size);
            assert!(turtle.is_pen_down());
            assert_eq!(hexagons, turtle.polygons().len());
            assert!(turtle.polygons().iter().all(|p| p.len() == 6));
            // the corner children reach the parent corners at every level
            let (min, max) = turtle.bounds().unwrap();
            assert_near(expected_min, min, 1e-7);
            assert_near(expected_max, max, 1e-7);
        }
    }
}

#[test]
fn test_umc_triangle() {
    let recorder = recorded(|c| umc_triangle(c, 100.0, 60.0, 0));
    assert_eq!(9, recorder.forward_count());
    assert_eq!(360.0, recorder.turn_sum());
    let turtle = traced(|c| umc_triangle(c, 100.0, 60.0, 0));
    assert!(heading_error(&turtle) < 1e-9);

    assert_eq!(36, recorded(|c| umc_triangle(c, 100.0, 60.0, 1)).forward_count());
    assert_eq!(117, recorded(|c| umc_triangle(c, 100.0, 60.0, 2)).forward_count());
}

#[test]
fn test_accidental_triangle() {
    for level in 0..4 {
        let recorder = recorded(|c| accidental_triangle(c, 100.0, 60.0, level));
        assert_eq!(9 * 3_usize.pow(level as u32), recorder.forward_count());
    }
}

#[test]
fn test_fractal_names() -> Result<(), FractrError> {
    for name in Fractal::NAMES {
        let fractal = Fractal::new(name, Ccw, 45.0)?;
        assert_eq!(name, fractal.name());
    }
    assert_eq!(Fractal::Dragon(Ccw), Fractal::new("dragon", Ccw, 0.0)?);
    assert_eq!(
        Fractal::UmcTriangle { angle: 45.0 },
        Fractal::new("umc_triangle", Cw, 45.0)?
    );
    assert!(Fractal::new("mandelbrot", Cw, 0.0).is_err());
    assert!(Fractal::Sierpinski.is_area());
    assert!(!Fractal::Koch.is_area());
    Ok(())
}

#[test]
fn test_reset_makes_drawing_history_independent() -> Result<(), FractrError> {
    for name in Fractal::NAMES {
        let fractal = Fractal::new(name, Cw, DEFAULT_TRIANGLE_ANGLE)?;

        let fresh = traced(|c| fractal.draw(c, 30.0, 0));

        let mut used = Turtle::new();
        used.pen_up();
        used.left(33.0);
        used.forward(12.0);
        used.fill(true);
        used.reset();
        fractal.draw(&mut used, 30.0, 0);

        assert_near(fresh.position(), used.position(), 1e-12);
        assert_eq!(fresh.heading(), used.heading());
        assert_eq!(fresh.segments().len(), used.segments().len());
        assert_eq!(fresh.polygons().len(), used.polygons().len());
    }
    // the straight curves move exactly `size` at level 0
    for fractal in [Fractal::Koch, Fractal::CCurve, Fractal::Squiral] {
        let mut turtle = Turtle::new();
        turtle.right(71.0);
        turtle.forward(3.0);
        turtle.reset();
        fractal.draw(&mut turtle, 30.0, 0);
        assert_near(DVec2::new(30.0, 0.0), turtle.position(), 1e-12);
    }
    Ok(())
}

#[test]
fn test_replayed_drawing_matches() {
    let recorder = recorded(|c| pythagoras(c, 50.0, 4));
    let mut replayed = Turtle::new();
    recorder.replay(&mut replayed);
    let direct = traced(|c| pythagoras(c, 50.0, 4));
    assert_eq!(direct.segments().len(), replayed.segments().len());
    assert_eq!(direct.polygons().len(), replayed.polygons().len());
    assert_eq!(direct.bounds(), replayed.bounds());
}

#[test]
fn test_estimated_moves_is_an_upper_bound() -> Result<(), FractrError> {
    for name in Fractal::NAMES {
        let fractal = Fractal::new(name, Ccw, DEFAULT_TRIANGLE_ANGLE)?;
        for level in -1..5 {
            let recorder = recorded(|c| fractal.draw(c, 10.0, level));
            let estimate = fractal.estimated_moves(level);
            assert!(
                recorder.commands().len() as u64 <= estimate,
                "{name} at level {level}: {} > {estimate}",
                recorder.commands().len()
            );
            // within one order of magnitude
            assert!(estimate <= 10 * recorder.commands().len() as u64, "{name}");
        }
    }
    assert_eq!(u64::MAX, Fractal::Hexaflake(Cw).estimated_moves(i32::MAX));
    Ok(())
}

#[test]
fn test_closed_figures_random_sizes() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..25 {
        let size = rng.random_range(0.5..1000.0);
        let level = rng.random_range(0..4);
        for fractal in [
            Fractal::FullKoch,
            Fractal::FullGosper(Ccw),
            Fractal::VicsekCross,
            Fractal::VicsekSaltire,
            Fractal::Sierpinski,
            Fractal::TSquare,
            Fractal::Pythagoras,
            Fractal::Hexaflake(Cw),
        ] {
            let turtle = traced(|c| fractal.draw(c, size, level));
            assert_closed(&turtle, size);
        }
    }
}
