//! Session palette. One of a small set of fixed palettes is chosen at
//! startup, shuffled once, and read-only afterwards; every dynamic shape
//! derives its hue from it.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::color::{wrap_hue, Hsba};

const PALETTES: [[&str; 6]; 4] = [
    ["#1b3b6f", "#f94144", "#f3722c", "#f9c74f", "#90be6d", "#577590"],
    ["#0b3d91", "#ff6b6b", "#ffd93d", "#6bc1ff", "#7d5fff", "#ff9f1c"],
    ["#061a40", "#ff8fab", "#ffd6a5", "#7be495", "#4cc9f0", "#7209b7"],
    ["#071a52", "#ff5d8f", "#ffd166", "#06d6a0", "#118ab2", "#073b4c"],
];

/// Maximum hue jitter applied when sampling a shape hue, in degrees.
const HUE_JITTER: f64 = 12.0;

/// An immutable working palette for one session.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Hsba>,
}

impl Palette {
    /// Pick one of the fixed palettes uniformly and return a
    /// shuffled copy as the session's working palette.
    pub fn choose(rng: &mut impl Rng) -> Self {
        let set = PALETTES[rng.gen_range(0..PALETTES.len())];
        let mut colors: Vec<Hsba> = set.iter().map(|hex| Hsba::from_hex(hex)).collect();
        colors.shuffle(rng);
        Self { colors }
    }

    pub fn colors(&self) -> &[Hsba] {
        &self.colors
    }

    /// Sample one palette color's hue, jittered by up to ±12 degrees and
    /// wrapped into [0,360).
    pub fn pick_hue(&self, rng: &mut impl Rng) -> f64 {
        let base = self.colors[rng.gen_range(0..self.colors.len())];
        wrap_hue(base.h + rng.gen_range(-HUE_JITTER..=HUE_JITTER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn chosen_palette_is_a_permutation_of_a_fixed_set() {
        let mut rng = StdRng::seed_from_u64(7);
        let palette = Palette::choose(&mut rng);
        assert_eq!(palette.colors().len(), 6);

        let mut got: Vec<String> = palette.colors().iter().map(|c| c.to_css()).collect();
        got.sort();
        let matched = PALETTES.iter().any(|set| {
            let mut want: Vec<String> =
                set.iter().map(|hex| Hsba::from_hex(hex).to_css()).collect();
            want.sort();
            want == got
        });
        assert!(matched, "shuffled palette is not a permutation of any fixed set");
    }

    #[test]
    fn picked_hues_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let palette = Palette::choose(&mut rng);
        for _ in 0..500 {
            let h = palette.pick_hue(&mut rng);
            assert!((0.0..360.0).contains(&h), "hue out of range: {h}");
        }
    }

    #[test]
    fn picked_hue_is_near_some_palette_color() {
        let mut rng = StdRng::seed_from_u64(3);
        let palette = Palette::choose(&mut rng);
        for _ in 0..200 {
            let h = palette.pick_hue(&mut rng);
            let near = palette.colors().iter().any(|c| {
                let d = (c.h - h).abs();
                d.min(360.0 - d) <= HUE_JITTER + 1e-9
            });
            assert!(near, "hue {h} further than jitter from every palette color");
        }
    }
}
