//! Pixel-level drawing on an RGB image.
//!
//! Coordinates are signed so shapes may hang off the edge; out-of-bounds
//! pixels are clipped silently.

use crate::font;
use image::{Rgb, RgbImage};

pub type Color = Rgb<u8>;

pub const WHITE: Color = Rgb([255, 255, 255]);
pub const BLACK: Color = Rgb([0, 0, 0]);
pub const GRID: Color = Rgb([222, 222, 222]);
pub const AXIS: Color = Rgb([60, 60, 60]);
pub const BLUE: Color = Rgb([31, 119, 180]);
pub const DARK_BLUE: Color = Rgb([0, 0, 139]);
pub const ORANGE: Color = Rgb([255, 127, 14]);
pub const GREEN: Color = Rgb([44, 160, 44]);
pub const DARK_GREEN: Color = Rgb([0, 100, 0]);
pub const RED: Color = Rgb([214, 39, 40]);
pub const PURPLE: Color = Rgb([148, 103, 189]);
pub const GRAY: Color = Rgb([128, 128, 128]);
pub const WHEAT: Color = Rgb([245, 222, 179]);

/// Linear blend from `a` (t = 0) to `b` (t = 1). Stands in for alpha when
/// drawing on a white background.
pub fn mix(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let channel = |x: u8, y: u8| (f32::from(x) + (f32::from(y) - f32::from(x)) * t).round() as u8;
    Rgb([channel(a[0], b[0]), channel(a[1], b[1]), channel(a[2], b[2])])
}

/// Translucent-looking variant of `color` on white, `alpha` in `[0, 1]`.
pub fn faded(color: Color, alpha: f32) -> Color {
    mix(WHITE, color, alpha)
}

/// Pixel rectangle: left, top, width, height.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + to_i32(self.w)
    }

    pub fn bottom(&self) -> i32 {
        self.y + to_i32(self.h)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink by `margin` on every side, never below zero size.
    pub fn inset(&self, margin: u32) -> Self {
        let m = to_i32(margin);
        Self {
            x: self.x + m,
            y: self.y + m,
            w: self.w.saturating_sub(2 * margin),
            h: self.h.saturating_sub(2 * margin),
        }
    }
}

pub struct Canvas {
    image: RgbImage,
    clip: Option<Rect>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self { image: RgbImage::from_pixel(width, height, background), clip: None }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Run `draw` with every pixel outside `rect` discarded.
    pub fn clipped<R>(&mut self, rect: Rect, draw: impl FnOnce(&mut Self) -> R) -> R {
        let previous = self.clip.replace(rect);
        let out = draw(self);
        self.clip = previous;
        out
    }

    pub fn put(&mut self, x: i32, y: i32, color: Color) {
        if self.clip.is_some_and(|clip| !clip.contains(x, y)) {
            return;
        }
        if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
            if x < self.image.width() && y < self.image.height() {
                self.image.put_pixel(x, y, color);
            }
        }
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        let (w, h) = (to_i32(width), to_i32(height));
        for yy in y..y.saturating_add(h) {
            for xx in x..x.saturating_add(w) {
                self.put(xx, yy, color);
            }
        }
    }

    pub fn stroke_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        if width == 0 || height == 0 {
            return;
        }
        let (right, bottom) = (x + to_i32(width) - 1, y + to_i32(height) - 1);
        self.line(x, y, right, y, color);
        self.line(x, bottom, right, bottom, color);
        self.line(x, y, x, bottom, color);
        self.line(right, y, right, bottom, color);
    }

    /// Bresenham line, both endpoints included.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let (dx, dy) = (i64::from(x1.abs_diff(x0)), -i64::from(y1.abs_diff(y0)));
        let (sx, sy) = (step_toward(x0, x1), step_toward(y0, y1));
        let (mut x, mut y, mut err) = (x0, y0, dx + dy);
        loop {
            self.put(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Line of `thickness` pixels, thickened perpendicular to its dominant
    /// direction.
    pub fn thick_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, thickness: u32, color: Color) {
        let t = to_i32(thickness.max(1));
        let steep = y1.abs_diff(y0) > x1.abs_diff(x0);
        for offset in -(t - 1) / 2..=t / 2 {
            if steep {
                self.line(x0.saturating_add(offset), y0, x1.saturating_add(offset), y1, color);
            } else {
                self.line(x0, y0.saturating_add(offset), x1, y1.saturating_add(offset), color);
            }
        }
    }

    /// Axis-aligned dashed line with `dash`-pixel dashes and gaps.
    pub fn dashed_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, dash: u32, color: Color) {
        let dash = to_i32(dash.max(1));
        let length = (x1 - x0).abs().max((y1 - y0).abs());
        let (sx, sy) = ((x1 - x0).signum(), (y1 - y0).signum());
        let mut i = 0;
        while i <= length {
            let end = (i + dash - 1).min(length);
            self.line(x0 + sx * i, y0 + sy * i, x0 + sx * end, y0 + sy * end, color);
            i += 2 * dash;
        }
    }

    /// Draw `text` with its top-left corner at `(x, y)`. Returns the pixel
    /// width drawn.
    pub fn text(&mut self, x: i32, y: i32, text: &str, scale: u32, color: Color) -> u32 {
        let scale = scale.max(1);
        let s = to_i32(scale);
        let mut pen = x;
        for c in text.chars() {
            for (row, bits) in font::glyph(c).iter().enumerate() {
                for col in 0..font::GLYPH_WIDTH {
                    if bits & (0x10 >> col) != 0 {
                        let px = pen + to_i32(col) * s;
                        let py = y + to_i32(u32::try_from(row).unwrap_or(0)) * s;
                        self.fill_rect(px, py, scale, scale, color);
                    }
                }
            }
            pen += to_i32(font::ADVANCE) * s;
        }
        font::text_width(text, scale)
    }

    /// Draw `text` horizontally centered on `center_x`.
    pub fn text_centered(&mut self, center_x: i32, y: i32, text: &str, scale: u32, color: Color) {
        let width = to_i32(font::text_width(text, scale.max(1)));
        self.text(center_x - width / 2, y, text, scale, color);
    }

    /// Draw `text` bottom-to-top, for y-axis labels. `(x, y)` is the bottom
    /// left corner of the rotated text.
    pub fn text_vertical(&mut self, x: i32, y: i32, text: &str, scale: u32, color: Color) {
        let scale = scale.max(1);
        let s = to_i32(scale);
        let mut pen = y;
        for c in text.chars() {
            for (row, bits) in font::glyph(c).iter().enumerate() {
                for col in 0..font::GLYPH_WIDTH {
                    if bits & (0x10 >> col) != 0 {
                        let px = x + to_i32(u32::try_from(row).unwrap_or(0)) * s;
                        let py = pen - to_i32(col) * s - s;
                        self.fill_rect(px, py, scale, scale, color);
                    }
                }
            }
            pen -= to_i32(font::ADVANCE) * s;
        }
    }
}

fn step_toward(from: i32, to: i32) -> i32 {
    match to.cmp(&from) {
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => 1,
    }
}

pub(crate) fn to_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_includes_both_endpoints() {
        let mut canvas = Canvas::new(10, 10, WHITE);
        canvas.line(1, 1, 8, 5, BLACK);
        assert_eq!(*canvas.image().get_pixel(1, 1), BLACK);
        assert_eq!(*canvas.image().get_pixel(8, 5), BLACK);
    }

    #[test]
    fn drawing_off_canvas_is_clipped() {
        let mut canvas = Canvas::new(4, 4, WHITE);
        canvas.line(-10, -10, 20, 20, BLACK);
        canvas.fill_rect(-5, 2, 100, 100, RED);
        assert_eq!(*canvas.image().get_pixel(3, 3), RED);
        assert_eq!(*canvas.image().get_pixel(0, 0), BLACK);
    }

    #[test]
    fn dashed_line_leaves_gaps() {
        let mut canvas = Canvas::new(20, 1, WHITE);
        canvas.dashed_line(0, 0, 19, 0, 3, BLACK);
        let row: Vec<bool> = (0..20).map(|x| *canvas.image().get_pixel(x, 0) == BLACK).collect();
        assert!(row[0] && row[2]);
        assert!(!row[3] && !row[5]);
        assert!(row[6]);
    }

    #[test]
    fn text_draws_pixels_and_reports_width() {
        let mut canvas = Canvas::new(40, 10, WHITE);
        let width = canvas.text(0, 0, "HI", 1, BLACK);
        assert_eq!(width, 11);
        assert_eq!(*canvas.image().get_pixel(0, 0), BLACK);
        assert_eq!(*canvas.image().get_pixel(5, 0), WHITE);
    }

    #[test]
    fn clipping_discards_outside_pixels() {
        let mut canvas = Canvas::new(10, 10, WHITE);
        canvas.clipped(Rect::new(2, 2, 4, 4), |c| c.fill_rect(0, 0, 10, 10, BLACK));
        assert_eq!(*canvas.image().get_pixel(1, 1), WHITE);
        assert_eq!(*canvas.image().get_pixel(2, 2), BLACK);
        assert_eq!(*canvas.image().get_pixel(6, 6), WHITE);
        canvas.put(9, 9, RED);
        assert_eq!(*canvas.image().get_pixel(9, 9), RED);
    }

    #[test]
    fn mix_blends_channels() {
        assert_eq!(mix(BLACK, WHITE, 0.0), BLACK);
        assert_eq!(mix(BLACK, WHITE, 1.0), WHITE);
        assert_eq!(faded(RED, 1.0), RED);
        assert_eq!(mix(BLACK, WHITE, 0.5), Rgb([128, 128, 128]));
    }
}
