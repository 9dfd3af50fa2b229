use image::RgbaImage;

use crate::error::IconError;
use crate::raster::{Color, Painter, Point};

/// Largest canvas the renderer will allocate.
pub const MAX_ICON_SIZE: u32 = 8192;

pub const BG_COLOR: Color = [30, 30, 40];
pub const VIGNETTE: Color = [40, 40, 55];
pub const CRAB_BODY: Color = [220, 80, 40];
pub const CRAB_DARK: Color = [170, 55, 25];
pub const CRAB_HIGHLIGHT: Color = [240, 130, 70];
pub const CLAW_COLOR: Color = [200, 65, 35];
pub const EYE_WHITE: Color = [240, 240, 240];
pub const EYE_PUPIL: Color = [20, 20, 30];
pub const CHAT_COLOR: Color = [100, 200, 255];

/// Leg anchors on the left side as (x, y) fractions of the canvas.
const LEGS: [(f64, f64); 3] = [(0.18, 0.48), (0.14, 0.55), (0.13, 0.63)];

#[derive(Debug, Clone, Copy)]
enum Side {
    Left,
    Right,
}

impl Side {
    const BOTH: [Side; 2] = [Side::Left, Side::Right];

    fn sign(self) -> f64 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Scales fractional layout constants to one canvas size.
#[derive(Debug, Clone, Copy)]
struct Scale {
    s: i32,
    sf: f64,
}

impl Scale {
    fn of(v: f64) -> i32 {
        v as i32
    }

    fn frac(&self, f: f64) -> i32 {
        Self::of(self.sf * f)
    }

    /// Stroke width that never drops below `min` at small sizes.
    fn stroke(&self, divisor: i32, min: i32) -> i32 {
        (self.s / divisor).max(min)
    }
}

/// Draw the crab icon on a fresh `size` x `size` RGBA canvas.
///
/// Every coordinate is a fixed fraction of `size`, so the result scales
/// uniformly and is identical for identical input.
pub fn render_crab(size: u32) -> Result<RgbaImage, IconError> {
    if size == 0 || size > MAX_ICON_SIZE {
        return Err(IconError::InvalidSize { size, max: MAX_ICON_SIZE });
    }

    let mut img = RgbaImage::new(size, size);
    let mut p = Painter::new(&mut img);
    let sc = Scale { s: size as i32, sf: size as f64 };
    let s = sc.s;

    // Background plus a soft disc behind the crab
    p.fill(BG_COLOR);
    let r = sc.frac(0.42);
    p.ellipse((s / 2, s / 2), r, r, VIGNETTE);

    let center = (s / 2, sc.frac(0.52));

    for side in Side::BOTH {
        draw_legs(&mut p, sc, center, side);
    }
    for side in Side::BOTH {
        draw_claw(&mut p, sc, center, side);
    }

    let body_ry = draw_body(&mut p, sc, center);

    for side in Side::BOTH {
        draw_eye(&mut p, sc, center, body_ry, side);
    }

    draw_chat_bubble(&mut p, sc, center);

    Ok(img)
}

fn draw_legs(p: &mut Painter<'_>, sc: Scale, (cx, _): Point, side: Side) {
    let sign = side.sign();
    let cx = cx as f64;
    let leg_w = sc.stroke(50, 3);
    let foot_w = sc.stroke(60, 2);

    for (lx, ly) in LEGS {
        let hip = (Scale::of(cx + sign * sc.sf * 0.15), sc.frac(ly));
        let knee_x = match side {
            Side::Left => sc.frac(lx),
            Side::Right => sc.frac(1.0 - lx),
        };
        let knee = (knee_x, sc.frac(ly + 0.08));
        p.line(hip, knee, leg_w, CRAB_DARK);

        let foot = (
            Scale::of(knee.0 as f64 + sign * sc.sf * 0.02),
            Scale::of(knee.1 as f64 + sc.sf * 0.03),
        );
        p.line(knee, foot, foot_w, CRAB_DARK);
    }
}

fn draw_claw(p: &mut Painter<'_>, sc: Scale, (cx, cy): Point, side: Side) {
    let sign = side.sign();
    let (cx, cy) = (cx as f64, cy as f64);
    let at = |dx: f64, dy: f64| -> Point {
        (Scale::of(cx + sign * sc.sf * dx), Scale::of(cy - sc.sf * dy))
    };
    let arm_w = sc.stroke(30, 4);

    let shoulder = at(0.16, 0.04);
    let elbow = at(0.28, 0.16);
    let wrist = at(0.32, 0.26);
    p.line(shoulder, elbow, arm_w, CLAW_COLOR);
    p.line(elbow, wrist, arm_w, CLAW_COLOR);

    // Pincer: two overlapping ovals, the upper one pushed outward
    let r = sc.frac(0.055);
    let rf = r as f64;
    let (wx, wy) = (wrist.0 as f64, wrist.1 as f64);
    let upper = (Scale::of(wx + sign * rf * 0.3), Scale::of(wy - rf * 0.5));
    p.ellipse(upper, r, Scale::of(rf * 0.7), CRAB_BODY);
    let lower = (Scale::of(wx - sign * rf * 0.3), Scale::of(wy + rf * 0.3));
    p.ellipse(lower, r, Scale::of(rf * 0.6), CRAB_BODY);
}

/// Shell, highlight and texture arcs. Returns the shell's vertical radius,
/// which the eye stalks hang off.
fn draw_body(p: &mut Painter<'_>, sc: Scale, (cx, cy): Point) -> i32 {
    let rx = sc.frac(0.20);
    let ry = sc.frac(0.15);
    p.ellipse((cx, cy), rx, ry, CRAB_BODY);

    let (rxf, ryf) = (rx as f64, ry as f64);
    let (cxf, cyf) = (cx as f64, cy as f64);
    let highlight = (Scale::of(cxf - rxf * 0.15), Scale::of(cyf - ryf * 0.25));
    p.ellipse(highlight, Scale::of(rxf * 0.6), Scale::of(ryf * 0.5), CRAB_HIGHLIGHT);

    let arc_w = sc.stroke(200, 1);
    let x0 = Scale::of(cxf - rxf * 0.5);
    let x1 = Scale::of(cxf + rxf * 0.5);
    for i in 0..3 {
        let top = Scale::of(cyf - ryf * 0.1 + i as f64 * ryf * 0.35);
        let bottom = Scale::of(top as f64 + ryf * 0.3);
        p.lower_arc((x0, top), (x1, bottom), arc_w, CRAB_DARK);
    }

    ry
}

fn draw_eye(p: &mut Painter<'_>, sc: Scale, (cx, cy): Point, body_ry: i32, side: Side) {
    let sign = side.sign();
    let (cx, top_of_body) = (cx as f64, (cy - body_ry) as f64);

    let base = (
        Scale::of(cx + sign * sc.sf * 0.08),
        Scale::of(top_of_body + sc.sf * 0.01),
    );
    let tip = (
        Scale::of(cx + sign * sc.sf * 0.11),
        Scale::of(top_of_body - sc.sf * 0.06),
    );
    p.line(base, tip, sc.stroke(60, 3), CRAB_DARK);

    let r = sc.frac(0.03);
    p.ellipse(tip, r, r, EYE_WHITE);

    // Pupils look one pixel inward
    let pupil_r = Scale::of(r as f64 * 0.55);
    let pupil = (tip.0 - sign as i32, tip.1);
    p.ellipse(pupil, pupil_r, pupil_r, EYE_PUPIL);
}

fn draw_chat_bubble(p: &mut Painter<'_>, sc: Scale, (cx, cy): Point) {
    let (cx, cy) = (cx as f64, cy as f64);
    let bx = Scale::of(cx + sc.sf * 0.22);
    let by = Scale::of(cy - sc.sf * 0.22);
    let rx = sc.frac(0.09);
    let ry = sc.frac(0.065);
    p.ellipse((bx, by), rx, ry, CHAT_COLOR);

    let (bxf, byf, rxf, ryf) = (bx as f64, by as f64, rx as f64, ry as f64);
    p.triangle(
        [
            (Scale::of(bxf - rxf * 0.5), Scale::of(byf + ryf * 0.7)),
            (Scale::of(bxf - rxf), Scale::of(byf + ryf * 1.5)),
            (bx, Scale::of(byf + ryf * 0.9)),
        ],
        CHAT_COLOR,
    );

    // "typing" dots punched out in the background color
    let dot_r = sc.frac(0.012);
    for i in 0..3 {
        let dx = Scale::of(bxf - sc.sf * 0.03 + i as f64 * sc.sf * 0.03);
        p.ellipse((dx, by), dot_r, dot_r, BG_COLOR);
    }
}
