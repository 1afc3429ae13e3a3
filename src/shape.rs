//! Animated shape records. Every dynamic element on the canvas is one
//! `Shape`: shared position/color/motion fields plus a `ShapeKind` tag
//! carrying the type-specific geometry. Update behavior is dispatched by
//! matching on the kind; drawing happens in the web layer with the same
//! dispatch.

use rand::Rng;

use crate::conductor::{ConductorState, CONDUCTOR_DEPTH};
use crate::palette::Palette;

/// Shape variants. All but `Conductor` come out of the random factory.
#[derive(Debug, Clone)]
pub enum ShapeKind {
    Circle,
    Arc { start: f64, span: f64 },
    Rect,
    Ring { thickness: f64 },
    Triangle,
    Blob { points: u32, seed: f64 },
    Line { len: f64, thin: f64 },
    Conductor(ConductorState),
}

#[derive(Debug, Clone)]
pub struct Shape {
    pub kind: ShapeKind,
    /// Nominal anchor; drawing adds the orbit offset.
    pub x: f64,
    pub y: f64,
    /// Orbit offset, recomputed each frame from the frame count.
    pub ox: f64,
    pub oy: f64,
    pub size: f64,
    pub size_amp: f64,
    pub hue: f64,
    pub sat: f64,
    pub bri: f64,
    pub alpha: f64,
    /// Rotation in degrees; the web layer converts when drawing.
    pub rot: f64,
    pub rot_speed: f64,
    /// Draw-order key only, not a coordinate.
    pub depth: f64,
    pub stroke_weight: f64,
    /// Per-shape animation phase speed.
    pub speed: f64,
}

impl Shape {
    /// Build one shape of a uniformly random dynamic kind, with randomized
    /// geometry, palette-derived hue and motion parameters.
    pub fn random(rng: &mut impl Rng, palette: &Palette, width: f64, height: f64) -> Self {
        let kind = match rng.gen_range(0..7) {
            0 => ShapeKind::Circle,
            1 => ShapeKind::Arc {
                start: rng.gen_range(0.0..360.0),
                span: rng.gen_range(30.0..260.0),
            },
            2 => ShapeKind::Rect,
            3 => ShapeKind::Ring { thickness: rng.gen_range(6.0..28.0) },
            4 => ShapeKind::Triangle,
            5 => ShapeKind::Blob {
                points: rng.gen_range(5..12),
                seed: rng.gen_range(0.0..1000.0),
            },
            _ => ShapeKind::Line {
                // narrow windows can push width*0.6 under the 80px floor
                len: rng.gen_range(80.0..(width * 0.6).max(81.0)),
                thin: rng.gen_range(1.0..8.0),
            },
        };

        Self {
            kind,
            x: rng.gen_range(0.0..width),
            y: rng.gen_range(0.0..height),
            ox: 0.0,
            oy: 0.0,
            size: rng.gen_range(30.0..220.0),
            size_amp: rng.gen_range(0.6..1.6),
            hue: palette.pick_hue(rng),
            sat: rng.gen_range(60.0..100.0),
            bri: rng.gen_range(60.0..100.0),
            alpha: rng.gen_range(0.35..0.95),
            rot: rng.gen_range(0.0..360.0),
            rot_speed: rng.gen_range(-0.2..0.6),
            depth: rng.gen_range(-10.0..10.0),
            stroke_weight: rng.gen_range(0.0..8.0),
            speed: rng.gen_range(0.001..0.01),
        }
    }

    /// Build the conductor overlay shape at its fixed depth.
    pub fn conductor(rng: &mut impl Rng, width: f64, height: f64) -> Self {
        Self {
            kind: ShapeKind::Conductor(ConductorState::generate(rng, width, height)),
            x: 0.0,
            y: 0.0,
            ox: 0.0,
            oy: 0.0,
            size: 0.0,
            size_amp: 0.0,
            hue: 0.0,
            sat: 70.0,
            bri: 95.0,
            alpha: 1.0,
            rot: 0.0,
            rot_speed: 0.0,
            depth: CONDUCTOR_DEPTH,
            stroke_weight: 2.5,
            speed: 0.0,
        }
    }

    /// Advance one frame. The orbit offsets are pure functions of the frame
    /// count, the shape's depth (as a phase offset) and its phase speed, so
    /// motion is smooth and desynchronized without per-frame randomness.
    pub fn update(&mut self, frame: u64) {
        let f = frame as f64;
        match &mut self.kind {
            ShapeKind::Circle => {
                let t = f * self.speed;
                self.ox = ((self.x + f * 0.2) * 0.001 + self.depth).sin() * 50.0;
                self.oy = ((self.y + f * 0.2) * 0.001 + self.depth).cos() * 50.0;
                // ease toward a breathing target driven by size_amp
                self.size =
                    self.size * 0.995 + self.size_amp * 60.0 * (0.005 + 0.002 * (t * 6.0).sin());
                self.rot += self.rot_speed;
            }
            ShapeKind::Arc { .. } => {
                self.rot += self.rot_speed;
                self.ox = 30.0 * (f * self.speed * 2.0 + self.depth).sin();
                self.oy = 30.0 * (f * self.speed * 1.5 + self.depth).cos();
            }
            ShapeKind::Rect => {
                self.rot += self.rot_speed;
                self.ox = 50.0 * (f * self.speed * 0.6 + self.depth).sin();
                self.oy = 50.0 * (f * self.speed * 0.9 + self.depth).cos();
            }
            ShapeKind::Ring { .. } => {
                self.rot += self.rot_speed * 0.6;
                self.ox = 60.0 * (f * self.speed * 0.4 + self.depth * 0.5).sin();
                self.oy = 60.0 * (f * self.speed * 0.8 + self.depth * 0.3).cos();
            }
            ShapeKind::Triangle => {
                self.rot += self.rot_speed;
                self.ox = 40.0 * (f * self.speed * 1.2 + self.depth).sin();
                self.oy = 40.0 * (f * self.speed * 1.1 + self.depth).cos();
            }
            ShapeKind::Blob { seed, .. } => {
                self.rot += self.rot_speed * 0.5;
                *seed += 0.002;
                self.ox = 30.0 * (f * self.speed * 2.0 + self.depth).sin();
                self.oy = 30.0 * (f * self.speed * 1.3 + self.depth).cos();
            }
            ShapeKind::Line { .. } => {
                self.rot += self.rot_speed * 0.2;
                self.ox = 80.0 * (f * self.speed * 0.3 + self.depth).sin();
                self.oy = 80.0 * (f * self.speed * 0.6 + self.depth).cos();
            }
            ShapeKind::Conductor(state) => state.update(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_shapes(seed: u64, n: usize) -> Vec<Shape> {
        let mut rng = StdRng::seed_from_u64(seed);
        let palette = Palette::choose(&mut rng);
        (0..n)
            .map(|_| Shape::random(&mut rng, &palette, 1024.0, 768.0))
            .collect()
    }

    #[test]
    fn factory_fields_stay_in_contract_ranges() {
        for shape in sample_shapes(19, 700) {
            assert!((0.0..360.0).contains(&shape.hue));
            assert!((0.0..=1.0).contains(&shape.alpha));
            assert!(shape.size > 0.0);
            assert!((0.0..1024.0).contains(&shape.x));
            assert!((0.0..768.0).contains(&shape.y));
            assert!((-10.0..10.0).contains(&shape.depth));
            assert!((-0.2..0.6).contains(&shape.rot_speed));
            assert!((0.001..0.01).contains(&shape.speed));
            match shape.kind {
                ShapeKind::Arc { start, span } => {
                    assert!((0.0..360.0).contains(&start));
                    assert!((30.0..260.0).contains(&span));
                }
                ShapeKind::Ring { thickness } => assert!(thickness > 0.0),
                ShapeKind::Blob { points, seed } => {
                    assert!((5..12).contains(&points));
                    assert!(seed >= 0.0);
                }
                ShapeKind::Line { len, thin } => {
                    assert!(len > 0.0);
                    assert!(thin > 0.0);
                }
                ShapeKind::Conductor(_) => panic!("factory must not produce a conductor"),
                _ => {}
            }
        }
    }

    #[test]
    fn factory_tolerates_narrow_canvases() {
        // 120px is valid host geometry; the line length floor must not
        // produce an empty sampling range
        let mut rng = StdRng::seed_from_u64(13);
        let palette = Palette::choose(&mut rng);
        for _ in 0..300 {
            let shape = Shape::random(&mut rng, &palette, 120.0, 600.0);
            if let ShapeKind::Line { len, .. } = shape.kind {
                assert!(len >= 80.0 && len > 0.0);
            }
        }
    }

    #[test]
    fn factory_covers_all_seven_kinds() {
        let shapes = sample_shapes(23, 700);
        let mut seen = [false; 7];
        for shape in &shapes {
            let idx = match shape.kind {
                ShapeKind::Circle => 0,
                ShapeKind::Arc { .. } => 1,
                ShapeKind::Rect => 2,
                ShapeKind::Ring { .. } => 3,
                ShapeKind::Triangle => 4,
                ShapeKind::Blob { .. } => 5,
                ShapeKind::Line { .. } => 6,
                ShapeKind::Conductor(_) => unreachable!(),
            };
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "missing kinds after 700 draws: {seen:?}");
    }

    #[test]
    fn circle_breathing_keeps_size_positive() {
        let mut rng = StdRng::seed_from_u64(2);
        let palette = Palette::choose(&mut rng);
        let mut shape = loop {
            let s = Shape::random(&mut rng, &palette, 800.0, 600.0);
            if matches!(s.kind, ShapeKind::Circle) {
                break s;
            }
        };
        for frame in 0..5_000 {
            shape.update(frame);
            assert!(shape.size > 0.0, "size collapsed at frame {frame}");
        }
    }

    #[test]
    fn update_is_a_pure_function_of_frame() {
        let mut a = sample_shapes(31, 1).pop().unwrap();
        let mut b = a.clone();
        a.update(240);
        b.update(240);
        assert_eq!(a.ox, b.ox);
        assert_eq!(a.oy, b.oy);
        assert_eq!(a.rot, b.rot);
    }

    #[test]
    fn blob_seed_advances_each_frame() {
        let mut rng = StdRng::seed_from_u64(8);
        let palette = Palette::choose(&mut rng);
        let mut shape = loop {
            let s = Shape::random(&mut rng, &palette, 800.0, 600.0);
            if matches!(s.kind, ShapeKind::Blob { .. }) {
                break s;
            }
        };
        let before = match shape.kind {
            ShapeKind::Blob { seed, .. } => seed,
            _ => unreachable!(),
        };
        shape.update(1);
        let after = match shape.kind {
            ShapeKind::Blob { seed, .. } => seed,
            _ => unreachable!(),
        };
        assert!(after > before);
    }
}
