//! 2D value noise for the organic blob silhouettes. The browser host has no
//! coherent-noise primitive, so a small lattice hash with smoothstep
//! interpolation stands in. Output is in [0,1] and varies smoothly in both
//! inputs.

/// Sample coherent noise at (x, y).
pub fn noise2(x: f64, y: f64) -> f64 {
    let xi = x.floor() as i64;
    let yi = y.floor() as i64;

    let xf = x - xi as f64;
    let yf = y - yi as f64;

    let a = hash2(xi, yi);
    let b = hash2(xi + 1, yi);
    let c = hash2(xi, yi + 1);
    let d = hash2(xi + 1, yi + 1);

    let u = smoothstep(xf);
    let v = smoothstep(yf);

    let ab = lerp(a, b, u);
    let cd = lerp(c, d, u);
    lerp(ab, cd, v)
}

fn smoothstep(x: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    x * x * (3.0 - 2.0 * x)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn hash2(x: i64, y: i64) -> f64 {
    let mut n = x.wrapping_mul(374_761_393).wrapping_add(y.wrapping_mul(668_265_263));
    n = (n ^ (n >> 13)).wrapping_mul(1_274_126_177);
    n ^= n >> 16;
    (n & 0x7fff_ffff) as f64 / 0x7fff_ffff as f64
}
