//! One composition session: the working palette, the background
//! description, the bounded shape population and the frame counter. The web
//! layer owns a single `Session` and drives it from the animation-frame and
//! pointer callbacks.

use std::collections::VecDeque;

use rand::Rng;

use crate::background::Background;
use crate::palette::Palette;
use crate::shape::Shape;

/// Shapes created at session start, before the conductor is added.
pub const INITIAL_SHAPES: usize = 30;

/// A splash burst fires every this many frames.
pub const SPLASH_INTERVAL: u64 = 240;

/// Shapes spawned per splash burst.
pub const SPLASH_COUNT: usize = 18;

/// Population bound checked after a splash, and the size pruned down to.
/// Deliberately distinct from `POINTER_CAP`; the two interactions bound the
/// population independently.
pub const SPLASH_PRUNE_THRESHOLD: usize = 120;
pub const SPLASH_PRUNE_TARGET: usize = 100;

/// Hard population cap enforced on pointer presses.
pub const POINTER_CAP: usize = 160;

pub struct Session {
    width: f64,
    height: f64,
    frame: u64,
    palette: Palette,
    background: Background,
    /// Insertion-ordered population, oldest at the front. Eviction always
    /// pops the front; draw order is computed separately per frame.
    shapes: VecDeque<Shape>,
}

impl Session {
    /// Start a session: choose the palette, paint the background
    /// description, seed the initial population and the conductor.
    pub fn new(rng: &mut impl Rng, width: f64, height: f64) -> Self {
        let palette = Palette::choose(rng);
        let background = Background::generate(rng, width, height);

        let mut shapes = VecDeque::with_capacity(POINTER_CAP + SPLASH_COUNT);
        for _ in 0..INITIAL_SHAPES {
            shapes.push_back(Shape::random(rng, &palette, width, height));
        }
        shapes.push_back(Shape::conductor(rng, width, height));

        log::info!("session started at {width:.0}x{height:.0} with {} shapes", shapes.len());

        Self { width, height, frame: 0, palette, background, shapes }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn shapes(&self) -> &VecDeque<Shape> {
        &self.shapes
    }

    /// Advance one frame: update every shape, then fire the periodic splash
    /// burst when due.
    pub fn tick(&mut self, rng: &mut impl Rng) {
        self.frame += 1;
        for shape in &mut self.shapes {
            shape.update(self.frame);
        }
        if self.frame % SPLASH_INTERVAL == 0 {
            self.splash(rng);
        }
    }

    /// Indices of the population in draw order: ascending depth, stable for
    /// equal depths so same-depth shapes keep their insertion layering.
    pub fn draw_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.shapes.len()).collect();
        order.sort_by(|&a, &b| self.shapes[a].depth.total_cmp(&self.shapes[b].depth));
        order
    }

    /// Burst of small elevated shapes clustered around a random focus point
    /// in the central region of the canvas. Returns the focus. If the burst
    /// pushes the population past the threshold, only the most recent
    /// `SPLASH_PRUNE_TARGET` shapes are kept.
    pub fn splash(&mut self, rng: &mut impl Rng) -> (f64, f64) {
        let cx = rng.gen_range(self.width * 0.15..self.width * 0.85);
        let cy = rng.gen_range(self.height * 0.1..self.height * 0.9);

        for _ in 0..SPLASH_COUNT {
            let mut shape = Shape::random(rng, &self.palette, self.width, self.height);
            shape.x = cx + rng.gen_range(-60.0..60.0);
            shape.y = cy + rng.gen_range(-60.0..60.0);
            shape.size = rng.gen_range(8.0..50.0);
            shape.alpha = rng.gen_range(0.5..1.0);
            shape.depth = 25.0 + rng.gen_range(0.0..10.0);
            shape.rot_speed = rng.gen_range(-4.0..4.0);
            self.shapes.push_back(shape);
        }

        if self.shapes.len() > SPLASH_PRUNE_THRESHOLD {
            while self.shapes.len() > SPLASH_PRUNE_TARGET {
                self.shapes.pop_front();
            }
        }

        log::debug!(
            "splash at ({cx:.0},{cy:.0}), population {}",
            self.shapes.len()
        );
        (cx, cy)
    }

    /// Plant one prominent shape at the pointer location. The population is
    /// capped at `POINTER_CAP` with single-oldest eviction.
    pub fn pointer_press(&mut self, rng: &mut impl Rng, x: f64, y: f64) {
        let mut shape = Shape::random(rng, &self.palette, self.width, self.height);
        shape.x = x;
        shape.y = y;
        shape.size = rng.gen_range(60.0..260.0);
        shape.depth = 40.0;
        shape.alpha = 0.95;
        shape.rot_speed = rng.gen_range(-2.0..2.0);
        self.shapes.push_back(shape);

        if self.shapes.len() > POINTER_CAP {
            self.shapes.pop_front();
        }
    }

    /// The canvas changed size: regenerate the background description at
    /// the new dimensions. Must run before the next frame is drawn so the
    /// cached raster never lags the canvas.
    pub fn resize(&mut self, rng: &mut impl Rng, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.background = Background::generate(rng, width, height);
        log::info!("resized to {width:.0}x{height:.0}, background regenerated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn initial_population_is_thirty_plus_conductor() {
        let mut rng = StdRng::seed_from_u64(4);
        let session = Session::new(&mut rng, 800.0, 600.0);
        assert_eq!(session.shapes().len(), INITIAL_SHAPES + 1);
        let conductors = session
            .shapes()
            .iter()
            .filter(|s| matches!(s.kind, crate::shape::ShapeKind::Conductor(_)))
            .count();
        assert_eq!(conductors, 1);
    }

    #[test]
    fn draw_order_is_stable_for_equal_depths() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut session = Session::new(&mut rng, 800.0, 600.0);
        // flatten a run of depths so stability is observable
        for shape in session.shapes.iter_mut().take(10) {
            shape.depth = 5.0;
        }
        let order = session.draw_order();
        let flat: Vec<usize> = order.iter().copied().filter(|&i| i < 10).collect();
        let mut sorted = flat.clone();
        sorted.sort_unstable();
        assert_eq!(flat, sorted, "equal-depth shapes must keep insertion order");
    }
}
