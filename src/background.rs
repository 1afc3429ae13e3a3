//! Static painted background. Generated once per session (and again on
//! every resize) as a pure description of base wash, soft speckles and
//! paper grain, which the web layer rasterizes into an offscreen canvas.

use rand::Rng;

use crate::color::Hsba;

const SPECKLES: usize = 4000;
const GRAINS: usize = 120;

/// One soft-alpha ellipse of wash texture.
#[derive(Debug, Clone, Copy)]
pub struct Speckle {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub color: Hsba,
}

/// One large outlined ellipse of paper grain.
#[derive(Debug, Clone, Copy)]
pub struct Grain {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

#[derive(Debug, Clone)]
pub struct Background {
    width: f64,
    height: f64,
    base: Hsba,
    speckles: Vec<Speckle>,
    grains: Vec<Grain>,
}

impl Background {
    /// Generate the background description for the given canvas size.
    pub fn generate(rng: &mut impl Rng, width: f64, height: f64) -> Self {
        // warm, bright wash
        let base = Hsba::new(rng.gen_range(10.0..50.0), 30.0, rng.gen_range(90.0..98.0), 1.0);

        let speckles = (0..SPECKLES)
            .map(|_| {
                let s = rng.gen_range(0.5..6.0);
                Speckle {
                    x: rng.gen_range(0.0..width),
                    y: rng.gen_range(0.0..height),
                    w: s,
                    h: s * rng.gen_range(0.5..1.5),
                    color: Hsba::new(
                        base.h + rng.gen_range(-20.0..20.0),
                        20.0,
                        100.0,
                        rng.gen_range(0.02..0.08),
                    ),
                }
            })
            .collect();

        let grains = (0..GRAINS)
            .map(|_| Grain {
                x: rng.gen_range(0.0..width),
                y: rng.gen_range(0.0..height),
                w: rng.gen_range(30.0..300.0),
                h: rng.gen_range(10.0..80.0),
            })
            .collect();

        Self { width, height, base, speckles, grains }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn base(&self) -> Hsba {
        self.base
    }

    pub fn speckles(&self) -> &[Speckle] {
        &self.speckles
    }

    pub fn grains(&self) -> &[Grain] {
        &self.grains
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generates_the_full_texture_population() {
        let mut rng = StdRng::seed_from_u64(1);
        let bg = Background::generate(&mut rng, 800.0, 600.0);
        assert_eq!(bg.speckles().len(), 4000);
        assert_eq!(bg.grains().len(), 120);
        assert_eq!(bg.width(), 800.0);
        assert_eq!(bg.height(), 600.0);
    }

    #[test]
    fn wash_is_warm_and_bright() {
        let mut rng = StdRng::seed_from_u64(2);
        let bg = Background::generate(&mut rng, 640.0, 480.0);
        assert!((10.0..50.0).contains(&bg.base().h));
        assert!((90.0..98.0).contains(&bg.base().b));
        assert_eq!(bg.base().a, 1.0);
    }

    #[test]
    fn speckles_are_soft_and_on_canvas() {
        let mut rng = StdRng::seed_from_u64(3);
        let bg = Background::generate(&mut rng, 800.0, 600.0);
        for s in bg.speckles() {
            assert!((0.0..800.0).contains(&s.x));
            assert!((0.0..600.0).contains(&s.y));
            assert!(s.w > 0.0 && s.h > 0.0);
            assert!((0.02..0.08).contains(&s.color.a));
        }
    }
}
