use std::ops::Range;

use image::{Rgba, RgbaImage};

pub type Color = [u8; 3];
pub type Point = (i32, i32);

/// Immediate-mode drawing on an RGBA canvas.
///
/// Coordinates are integer pixel positions; a shape covers every pixel whose
/// center falls inside it. Everything is clipped to the canvas, so features
/// may hang off the edge at tiny sizes. All paint is opaque.
pub struct Painter<'a> {
    img: &'a mut RgbaImage,
}

impl<'a> Painter<'a> {
    pub fn new(img: &'a mut RgbaImage) -> Self {
        Self { img }
    }

    pub fn fill(&mut self, color: Color) {
        let px = opaque(color);
        for p in self.img.pixels_mut() {
            *p = px;
        }
    }

    /// Filled ellipse inside the inclusive box `[cx - rx, cx + rx] x [cy - ry, cy + ry]`.
    pub fn ellipse(&mut self, center: Point, rx: i32, ry: i32, color: Color) {
        let (cx, cy) = center_f(center);
        let a = rx.max(0) as f32 + 0.5;
        let b = ry.max(0) as f32 + 0.5;
        self.paint_region(cx - a, cy - b, cx + a, cy + b, color, |x, y| {
            let nx = (x - cx) / a;
            let ny = (y - cy) / b;
            nx * nx + ny * ny <= 1.0
        });
    }

    /// Stroke of the given width with flat ends.
    pub fn line(&mut self, from: Point, to: Point, width: i32, color: Color) {
        let (ax, ay) = center_f(from);
        let (bx, by) = center_f(to);
        let half = width.max(1) as f32 / 2.0;
        let (dx, dy) = (bx - ax, by - ay);
        let len_sq = dx * dx + dy * dy;
        let (lo_x, hi_x) = (ax.min(bx) - half, ax.max(bx) + half);
        let (lo_y, hi_y) = (ay.min(by) - half, ay.max(by) + half);

        if len_sq == 0.0 {
            self.paint_region(lo_x, lo_y, hi_x, hi_y, color, |x, y| {
                (x - ax).powi(2) + (y - ay).powi(2) <= half * half
            });
            return;
        }

        let len = len_sq.sqrt();
        self.paint_region(lo_x, lo_y, hi_x, hi_y, color, |x, y| {
            let t = ((x - ax) * dx + (y - ay) * dy) / len_sq;
            (0.0..=1.0).contains(&t) && cross(dx, dy, x - ax, y - ay).abs() / len <= half
        });
    }

    pub fn triangle(&mut self, pts: [Point; 3], color: Color) {
        let [p1, p2, p3] = pts.map(center_f);
        let lo_x = p1.0.min(p2.0).min(p3.0);
        let hi_x = p1.0.max(p2.0).max(p3.0);
        let lo_y = p1.1.min(p2.1).min(p3.1);
        let hi_y = p1.1.max(p2.1).max(p3.1);
        self.paint_region(lo_x, lo_y, hi_x, hi_y, color, |x, y| {
            point_in_triangle(x, y, p1, p2, p3)
        });
    }

    /// Lower half (0 to 180 degrees, clockwise from three o'clock) of the
    /// ellipse inscribed in the inclusive box, stroked inward by `width`.
    pub fn lower_arc(&mut self, top_left: Point, bottom_right: Point, width: i32, color: Color) {
        let (x0, x1) = (top_left.0.min(bottom_right.0), top_left.0.max(bottom_right.0));
        let (y0, y1) = (top_left.1.min(bottom_right.1), top_left.1.max(bottom_right.1));
        let cx = (x0 + x1 + 1) as f32 / 2.0;
        let cy = (y0 + y1 + 1) as f32 / 2.0;
        let a = (x1 - x0 + 1) as f32 / 2.0;
        let b = (y1 - y0 + 1) as f32 / 2.0;
        let w = width.max(1) as f32;
        let (ia, ib) = (a - w, b - w);

        self.paint_region(x0 as f32, cy, (x1 + 1) as f32, (y1 + 1) as f32, color, |x, y| {
            let (dx, dy) = (x - cx, y - cy);
            if dy < 0.0 || (dx / a).powi(2) + (dy / b).powi(2) > 1.0 {
                return false;
            }
            ia <= 0.0 || ib <= 0.0 || (dx / ia).powi(2) + (dy / ib).powi(2) >= 1.0
        });
    }

    fn paint_region(
        &mut self,
        lo_x: f32,
        lo_y: f32,
        hi_x: f32,
        hi_y: f32,
        color: Color,
        inside: impl Fn(f32, f32) -> bool,
    ) {
        let px = opaque(color);
        let xs = clip(lo_x, hi_x, self.img.width());
        for y in clip(lo_y, hi_y, self.img.height()) {
            for x in xs.clone() {
                if inside(x as f32 + 0.5, y as f32 + 0.5) {
                    self.img.put_pixel(x, y, px);
                }
            }
        }
    }
}

fn opaque([r, g, b]: Color) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}

#[inline]
fn center_f((x, y): Point) -> (f32, f32) {
    (x as f32 + 0.5, y as f32 + 0.5)
}

/// Pixel rows/columns that may have a center inside `[lo, hi]`.
fn clip(lo: f32, hi: f32, limit: u32) -> Range<u32> {
    let start = (lo.floor() as i64).clamp(0, limit as i64) as u32;
    let end = (hi.ceil() as i64 + 1).clamp(0, limit as i64) as u32;
    start..end.max(start)
}

#[inline]
fn cross(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    ax * by - ay * bx
}

fn point_in_triangle(px: f32, py: f32, p1: (f32, f32), p2: (f32, f32), p3: (f32, f32)) -> bool {
    let (x1, y1) = p1;
    let (x2, y2) = p2;
    let (x3, y3) = p3;
    let c1 = cross(x2 - x1, y2 - y1, px - x1, py - y1);
    let c2 = cross(x3 - x2, y3 - y2, px - x2, py - y2);
    let c3 = cross(x1 - x3, y1 - y3, px - x3, py - y3);
    let has_neg = (c1 < 0.0) || (c2 < 0.0) || (c3 < 0.0);
    let has_pos = (c1 > 0.0) || (c2 > 0.0) || (c3 > 0.0);
    !(has_neg && has_pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = [255, 0, 0];
    const BLACK: Color = [0, 0, 0];

    fn canvas(size: u32) -> RgbaImage {
        let mut img = RgbaImage::new(size, size);
        Painter::new(&mut img).fill(BLACK);
        img
    }

    fn is(img: &RgbaImage, x: u32, y: u32, color: Color) -> bool {
        img.get_pixel(x, y).0 == opaque(color).0
    }

    #[test]
    fn fill_is_opaque() {
        let img = canvas(4);
        assert!(img.pixels().all(|p| p.0 == [0, 0, 0, 255]));
    }

    #[test]
    fn ellipse_covers_its_box_and_nothing_outside() {
        let mut img = canvas(20);
        Painter::new(&mut img).ellipse((10, 10), 4, 2, RED);
        assert!(is(&img, 10, 10, RED));
        assert!(is(&img, 6, 10, RED));
        assert!(is(&img, 14, 10, RED));
        assert!(is(&img, 10, 8, RED));
        assert!(is(&img, 10, 12, RED));
        assert!(!is(&img, 5, 10, RED));
        assert!(!is(&img, 10, 7, RED));
        assert!(!is(&img, 6, 8, RED));
    }

    #[test]
    fn zero_radius_ellipse_is_one_pixel() {
        let mut img = canvas(5);
        Painter::new(&mut img).ellipse((2, 2), 0, 0, RED);
        let painted = img.pixels().filter(|p| p.0 == [255, 0, 0, 255]).count();
        assert_eq!(painted, 1);
        assert!(is(&img, 2, 2, RED));
    }

    #[test]
    fn shapes_are_clipped_to_canvas() {
        let mut img = canvas(8);
        let mut p = Painter::new(&mut img);
        p.ellipse((-3, -3), 6, 6, RED);
        p.line((-10, 4), (20, 4), 3, RED);
        p.triangle([(-5, -5), (20, 0), (0, 20)], RED);
        assert!(is(&img, 0, 0, RED));
        assert!(is(&img, 7, 4, RED));
    }

    #[test]
    fn horizontal_line_has_requested_width() {
        let mut img = canvas(20);
        Painter::new(&mut img).line((2, 10), (17, 10), 3, RED);
        assert!(is(&img, 10, 9, RED));
        assert!(is(&img, 10, 10, RED));
        assert!(is(&img, 10, 11, RED));
        assert!(!is(&img, 10, 8, RED));
        assert!(!is(&img, 10, 12, RED));
        // flat ends
        assert!(is(&img, 2, 10, RED));
        assert!(!is(&img, 1, 10, RED));
        assert!(!is(&img, 18, 10, RED));
    }

    #[test]
    fn diagonal_line_hits_both_endpoints() {
        let mut img = canvas(20);
        Painter::new(&mut img).line((3, 3), (15, 12), 2, RED);
        assert!(is(&img, 3, 3, RED));
        assert!(is(&img, 15, 12, RED));
        assert!(is(&img, 9, 7, RED) || is(&img, 9, 8, RED));
        assert!(!is(&img, 15, 3, RED));
    }

    #[test]
    fn triangle_fills_interior_only() {
        let mut img = canvas(20);
        Painter::new(&mut img).triangle([(2, 2), (17, 2), (2, 17)], RED);
        assert!(is(&img, 4, 4, RED));
        assert!(is(&img, 2, 17, RED));
        assert!(!is(&img, 15, 15, RED));
    }

    #[test]
    fn lower_arc_skips_upper_half_and_interior() {
        let mut img = canvas(30);
        Painter::new(&mut img).lower_arc((5, 5), (24, 24), 2, RED);
        // bottom of the ring
        assert!(is(&img, 15, 24, RED));
        assert!(is(&img, 15, 23, RED));
        // top of the ring is not drawn
        assert!(!is(&img, 15, 5, RED));
        // interior stays untouched
        assert!(!is(&img, 15, 18, RED));
        // sides at the horizontal diameter
        assert!(is(&img, 5, 15, RED));
        assert!(is(&img, 24, 15, RED));
    }

    #[test]
    fn point_in_triangle_accepts_either_winding() {
        let (a, b, c) = ((0.0, 0.0), (10.0, 0.0), (0.0, 10.0));
        assert!(point_in_triangle(2.0, 2.0, a, b, c));
        assert!(point_in_triangle(2.0, 2.0, a, c, b));
        assert!(!point_in_triangle(8.0, 8.0, a, b, c));
    }
}
