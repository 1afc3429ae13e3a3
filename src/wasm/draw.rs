//! Canvas 2D painting for every shape kind plus the cached background and
//! the vignette. All geometry comes from the pure composition modules; this
//! file only translates it into context calls.

use std::f64::consts::TAU;

use rand::Rng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::background::Background;
use crate::color::Hsba;
use crate::noise::noise2;
use crate::palette::Palette;
use crate::shape::{Shape, ShapeKind};

pub fn context_of(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or("2d context not supported")?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(Into::into)
}

/// Rasterize the background description into a fresh offscreen canvas. Runs
/// once per session and once per resize; every frame just blits the result.
pub fn paint_background(
    document: &Document,
    bg: &Background,
) -> Result<HtmlCanvasElement, JsValue> {
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()?;
    canvas.set_width(bg.width() as u32);
    canvas.set_height(bg.height() as u32);
    let ctx = context_of(&canvas)?;

    ctx.set_fill_style_str(&bg.base().to_css());
    ctx.fill_rect(0.0, 0.0, bg.width(), bg.height());

    for s in bg.speckles() {
        ctx.set_fill_style_str(&s.color.to_css());
        ctx.begin_path();
        ctx.ellipse(s.x, s.y, s.w / 2.0, s.h / 2.0, 0.0, 0.0, TAU)?;
        ctx.fill();
    }

    ctx.set_line_width(1.0);
    ctx.set_stroke_style_str("rgba(255,255,255,0.02)");
    for g in bg.grains() {
        ctx.begin_path();
        ctx.ellipse(g.x, g.y, g.w / 2.0, g.h / 2.0, 0.0, 0.0, TAU)?;
        ctx.stroke();
    }

    Ok(canvas)
}

/// Translucent multiply-blended rounded rectangle inset from the edges.
pub fn vignette(ctx: &CanvasRenderingContext2d, width: f64, height: f64) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_global_composite_operation("multiply")?;
    ctx.set_fill_style_str("rgba(0,0,0,0.06)");
    rounded_rect(ctx, width * 0.05, height * 0.05, width * 0.9, height * 0.9, 30.0)?;
    ctx.fill();
    ctx.restore();
    Ok(())
}

/// Draw one shape at its current animation state.
pub fn draw_shape(
    ctx: &CanvasRenderingContext2d,
    shape: &Shape,
    frame: u64,
    palette: &Palette,
    rng: &mut impl Rng,
) -> Result<(), JsValue> {
    if let ShapeKind::Conductor(state) = &shape.kind {
        return draw_conductor(ctx, shape, state.points(), frame, palette, rng);
    }

    let fill = Hsba::new(shape.hue, shape.sat, shape.bri, shape.alpha);
    ctx.save();
    ctx.translate(shape.x + shape.ox, shape.y + shape.oy)?;
    ctx.rotate(shape.rot.to_radians())?;

    match &shape.kind {
        ShapeKind::Circle => {
            ctx.set_fill_style_str(&fill.to_css());
            ctx.begin_path();
            ctx.arc(0.0, 0.0, shape.size / 2.0, 0.0, TAU)?;
            ctx.fill();
            // concentric inner disc, hue-shifted and a touch brighter
            let inner = Hsba::new(
                shape.hue + 30.0,
                (shape.sat - 10.0).max(0.0),
                (shape.bri + 10.0).min(100.0),
                shape.alpha * 0.9,
            );
            ctx.set_fill_style_str(&inner.to_css());
            ctx.begin_path();
            ctx.arc(0.0, 0.0, shape.size * 0.55 / 2.0, 0.0, TAU)?;
            ctx.fill();
        }
        ShapeKind::Arc { start, span } => {
            ctx.set_stroke_style_str(&fill.to_css());
            ctx.set_line_width(shape.stroke_weight.max(1.0));
            ctx.begin_path();
            ctx.arc(
                0.0,
                0.0,
                shape.size / 2.0,
                start.to_radians(),
                (start + span).to_radians(),
            )?;
            ctx.stroke();
            // dot anchored at the trailing end of the arc
            let a = (start + span).to_radians();
            let dot = Hsba::new(shape.hue + 180.0, shape.sat, 90.0, shape.alpha);
            ctx.set_fill_style_str(&dot.to_css());
            ctx.begin_path();
            ctx.arc(
                a.cos() * shape.size / 2.0,
                a.sin() * shape.size / 2.0,
                shape.size * 0.025,
                0.0,
                TAU,
            )?;
            ctx.fill();
        }
        ShapeKind::Rect => {
            let (w, h) = (shape.size, shape.size * 0.6);
            ctx.set_fill_style_str(&fill.with_alpha(shape.alpha * 0.9).to_css());
            rounded_rect(ctx, -w / 2.0, -h / 2.0, w, h, shape.size * 0.08)?;
            ctx.fill();
            // diagonal stripe
            let stripe = Hsba::new(shape.hue + 210.0, shape.sat, shape.bri, shape.alpha * 0.6);
            ctx.set_fill_style_str(&stripe.to_css());
            ctx.rotate(20f64.to_radians())?;
            let (sw, sh) = (shape.size * 0.6, shape.size * 0.18);
            rounded_rect(ctx, -sw / 2.0, -sh / 2.0, sw, sh, shape.size * 0.06)?;
            ctx.fill();
        }
        ShapeKind::Ring { thickness } => {
            ctx.set_stroke_style_str(&fill.to_css());
            ctx.set_line_width(*thickness);
            ctx.begin_path();
            ctx.arc(0.0, 0.0, shape.size / 2.0, 0.0, TAU)?;
            ctx.stroke();
        }
        ShapeKind::Triangle => {
            ctx.set_fill_style_str(&fill.to_css());
            ctx.begin_path();
            ctx.move_to(-shape.size * 0.5, shape.size * 0.5);
            ctx.line_to(shape.size * 0.6, shape.size * 0.1);
            ctx.line_to(-shape.size * 0.1, -shape.size * 0.6);
            ctx.close_path();
            ctx.fill();
        }
        ShapeKind::Blob { points, seed } => {
            ctx.set_fill_style_str(&fill.with_alpha(shape.alpha * 0.9).to_css());
            ctx.begin_path();
            for i in 0..*points {
                let theta = i as f64 * TAU / *points as f64;
                let r = shape.size
                    * (0.4 + noise2(theta.cos() + seed, theta.sin() + seed) * 0.8);
                let (px, py) = (theta.cos() * r, theta.sin() * r);
                if i == 0 {
                    ctx.move_to(px, py);
                } else {
                    ctx.line_to(px, py);
                }
            }
            ctx.close_path();
            ctx.fill();
        }
        ShapeKind::Line { len, thin } => {
            ctx.set_stroke_style_str(&fill.to_css());
            ctx.set_line_width(*thin);
            ctx.begin_path();
            ctx.move_to(-len / 2.0, 0.0);
            ctx.line_to(len / 2.0, 0.0);
            ctx.stroke();
        }
        ShapeKind::Conductor(_) => unreachable!("handled above"),
    }

    ctx.restore();
    Ok(())
}

/// Three overlaid soft strands through the conductor's control points. The
/// rendered positions get a per-frame jitter on top of the stored points.
fn draw_conductor(
    ctx: &CanvasRenderingContext2d,
    shape: &Shape,
    points: &[(f64, f64)],
    frame: u64,
    palette: &Palette,
    rng: &mut impl Rng,
) -> Result<(), JsValue> {
    let f = frame as f64;
    let jittered: Vec<(f64, f64)> = points
        .iter()
        .map(|&(px, py)| {
            (
                px + 20.0 * (f * 0.01 + px * 0.0005).sin(),
                py + 20.0 * (f * 0.008 + py * 0.0006).cos(),
            )
        })
        .collect();

    ctx.save();
    ctx.set_line_width(shape.stroke_weight);
    for strand in 0..3 {
        let hue_shift = (strand as f64 * 30.0 + f * 0.02) % 360.0;
        let color = Hsba::new(
            palette.pick_hue(rng) + hue_shift,
            shape.sat,
            shape.bri,
            0.08 + strand as f64 * 0.06,
        );
        ctx.set_stroke_style_str(&color.to_css());
        curve_through(ctx, &jittered);
        ctx.stroke();
    }
    ctx.restore();
    Ok(())
}

/// Smooth Catmull-Rom interpolation through all points, expressed as cubic
/// beziers with clamped endpoints.
fn curve_through(ctx: &CanvasRenderingContext2d, pts: &[(f64, f64)]) {
    if pts.len() < 2 {
        return;
    }
    ctx.begin_path();
    ctx.move_to(pts[0].0, pts[0].1);
    for i in 0..pts.len() - 1 {
        let p0 = pts[i.saturating_sub(1)];
        let p1 = pts[i];
        let p2 = pts[i + 1];
        let p3 = pts[(i + 2).min(pts.len() - 1)];
        let c1 = (p1.0 + (p2.0 - p0.0) / 6.0, p1.1 + (p2.1 - p0.1) / 6.0);
        let c2 = (p2.0 - (p3.0 - p1.0) / 6.0, p2.1 - (p3.1 - p1.1) / 6.0);
        ctx.bezier_curve_to(c1.0, c1.1, c2.0, c2.1, p2.0, p2.1);
    }
}

fn rounded_rect(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    r: f64,
) -> Result<(), JsValue> {
    let r = r.min(w / 2.0).min(h / 2.0);
    ctx.begin_path();
    ctx.move_to(x + r, y);
    ctx.arc_to(x + w, y, x + w, y + h, r)?;
    ctx.arc_to(x + w, y + h, x, y + h, r)?;
    ctx.arc_to(x, y + h, x, y, r)?;
    ctx.arc_to(x, y, x + w, y, r)?;
    ctx.close_path();
    Ok(())
}
