//! HSB color support. The composition works in hue/saturation/brightness
//! with alpha (hue 0-360, sat/bri 0-100, alpha 0-1) and converts to RGBA
//! only at the canvas boundary.

/// A color in HSB space with alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsba {
    pub h: f64,
    pub s: f64,
    pub b: f64,
    pub a: f64,
}

impl Hsba {
    pub fn new(h: f64, s: f64, b: f64, a: f64) -> Self {
        Self { h: wrap_hue(h), s, b, a }
    }

    /// Parse a `#rrggbb` hex string. Malformed input falls back to black;
    /// the palette tables are the only callers and are compile-time fixed.
    pub fn from_hex(hex: &str) -> Self {
        let hex = hex.trim_start_matches('#');
        let parse = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        if hex.len() < 6 {
            return Self::new(0.0, 0.0, 0.0, 1.0);
        }
        let (r, g, b) = (parse(0), parse(2), parse(4));
        let (h, s, v) = rgb_to_hsb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
        Self::new(h, s, v, 1.0)
    }

    /// Same color with the hue rotated by `deg`, wrapped into [0,360).
    pub fn shift_hue(self, deg: f64) -> Self {
        Self { h: wrap_hue(self.h + deg), ..self }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba(...)` string for the canvas fill/stroke styles.
    pub fn to_css(self) -> String {
        let (r, g, b) = hsb_to_rgb(self.h, self.s, self.b);
        format!(
            "rgba({},{},{},{:.3})",
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
            self.a
        )
    }
}

/// Wrap an angle in degrees into [0,360).
pub fn wrap_hue(h: f64) -> f64 {
    h.rem_euclid(360.0)
}

fn hsb_to_rgb(h: f64, s: f64, b: f64) -> (f64, f64, f64) {
    let s = (s / 100.0).clamp(0.0, 1.0);
    let v = (b / 100.0).clamp(0.0, 1.0);
    let h = wrap_hue(h) / 60.0;
    let i = h.floor();
    let f = h - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i as u32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

fn rgb_to_hsb(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let s = if max == 0.0 { 0.0 } else { delta / max };
    (wrap_hue(h), s * 100.0, max * 100.0)
}
