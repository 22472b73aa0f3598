use super::canvas::Canvas;
use super::paint::{BLACK, Paint, Rgb};
use std::ops::Range;

/// Side length of the square scene, in scene units.
pub const SCENE_SIZE: f64 = 300.0;

/// What the scene renderer needs from a drawing surface. All coordinates are scene units.
pub trait Surface {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, paint: &Paint) {
        self.fill_polygon(&[(x, y), (x + w, y), (x + w, y + h), (x, y + h)], paint);
    }

    /// Fill a closed polygon (even-odd rule). Fewer than three points draws nothing.
    fn fill_polygon(&mut self, points: &[(f64, f64)], paint: &Paint);

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, paint: &Paint);

    /// Blend `color` over the whole surface at opacity `alpha`.
    fn overlay(&mut self, color: Rgb, alpha: f64);
}

/// Maps the square scene onto a canvas: uniform scale, centred, letterboxed.
/// Each pixel is sampled at its centre, converted back to scene units.
pub struct Viewport<'a> {
    canvas: &'a mut Canvas,
    scale: f64,
    off_x: f64,
    off_y: f64,
}

impl<'a> Viewport<'a> {
    /// Fit the scene into the canvas and clear it, ready for a full redraw.
    pub fn fit(canvas: &'a mut Canvas) -> Self {
        let scale = (canvas.width as f64 / SCENE_SIZE).min(canvas.height as f64 / SCENE_SIZE);
        let off_x = (canvas.width as f64 - SCENE_SIZE * scale) / 2.0;
        let off_y = (canvas.height as f64 - SCENE_SIZE * scale) / 2.0;
        canvas.clear(BLACK);
        Viewport {
            canvas,
            scale,
            off_x,
            off_y,
        }
    }

    #[inline]
    fn scene_x(&self, px: usize) -> f64 {
        (px as f64 + 0.5 - self.off_x) / self.scale
    }

    #[inline]
    fn scene_y(&self, py: usize) -> f64 {
        (py as f64 + 0.5 - self.off_y) / self.scale
    }

    /// Pixels whose centres fall in the scene interval [lo, hi).
    fn pixels(&self, lo: f64, hi: f64, off: f64, limit: usize) -> Range<usize> {
        let start = (lo * self.scale + off - 0.5).ceil().max(0.0) as usize;
        let end = ((hi * self.scale + off - 0.5).ceil().max(0.0) as usize).min(limit);
        start.min(end)..end
    }

    fn fill_span(&mut self, py: usize, sy: f64, x0: f64, x1: f64, paint: &Paint) {
        for px in self.pixels(x0, x1, self.off_x, self.canvas.width) {
            let color = paint.sample(self.scene_x(px), sy);
            self.canvas.set(px, py, color);
        }
    }
}

impl Surface for Viewport<'_> {
    fn fill_polygon(&mut self, points: &[(f64, f64)], paint: &Paint) {
        if points.len() < 3 {
            return;
        }
        let (min_y, max_y) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)));

        let mut crossings: Vec<f64> = Vec::with_capacity(points.len());
        for py in self.pixels(min_y, max_y, self.off_y, self.canvas.height) {
            let sy = self.scene_y(py);
            crossings.clear();
            for (i, &(ax, ay)) in points.iter().enumerate() {
                let (bx, by) = points[(i + 1) % points.len()];
                if (ay <= sy) != (by <= sy) {
                    crossings.push(ax + (sy - ay) * (bx - ax) / (by - ay));
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));
            for pair in crossings.chunks_exact(2) {
                self.fill_span(py, sy, pair[0], pair[1], paint);
            }
        }
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, paint: &Paint) {
        if radius <= 0.0 {
            return;
        }
        for py in self.pixels(cy - radius, cy + radius, self.off_y, self.canvas.height) {
            let sy = self.scene_y(py);
            let dy = sy - cy;
            let half_sq = radius * radius - dy * dy;
            if half_sq < 0.0 {
                continue;
            }
            let half = half_sq.sqrt();
            self.fill_span(py, sy, cx - half, cx + half, paint);
        }
    }

    fn overlay(&mut self, color: Rgb, alpha: f64) {
        self.canvas.blend_all(color, alpha);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::paint::WHITE;
    use crate::render::{ColorMode, RenderMode};

    fn ascii_canvas(cols: usize, rows: usize) -> Canvas {
        Canvas::new(cols, rows, RenderMode::Ascii, ColorMode::TrueColor)
    }

    #[test]
    fn test_fit_letterboxes_wide_canvas() {
        let mut canvas = ascii_canvas(100, 50);
        let vp = Viewport::fit(&mut canvas);
        assert!((vp.scale - 50.0 / 300.0).abs() < 1e-12);
        assert!((vp.off_x - 25.0).abs() < 1e-12);
        assert!(vp.off_y.abs() < 1e-9);
    }

    #[test]
    fn test_full_scene_rect_leaves_letterbox_black() {
        let mut canvas = ascii_canvas(100, 50);
        {
            let mut vp = Viewport::fit(&mut canvas);
            vp.fill_rect(0.0, 0.0, SCENE_SIZE, SCENE_SIZE, &Paint::Solid(WHITE));
        }
        assert_eq!(canvas.get(10, 25), Some(BLACK));
        assert_eq!(canvas.get(50, 25), Some(WHITE));
        assert_eq!(canvas.get(74, 49), Some(WHITE));
        assert_eq!(canvas.get(75, 0), Some(BLACK));
    }

    #[test]
    fn test_triangle_fills_inside_only() {
        let mut canvas = ascii_canvas(300, 300);
        {
            let mut vp = Viewport::fit(&mut canvas);
            vp.fill_polygon(&[(0.0, 0.0), (200.0, 0.0), (0.0, 200.0)], &Paint::Solid(WHITE));
        }
        assert_eq!(canvas.get(20, 20), Some(WHITE));
        assert_eq!(canvas.get(150, 150), Some(BLACK));
    }

    #[test]
    fn test_degenerate_polygon_draws_nothing() {
        let mut canvas = ascii_canvas(30, 30);
        {
            let mut vp = Viewport::fit(&mut canvas);
            vp.fill_polygon(&[(0.0, 0.0), (300.0, 300.0)], &Paint::Solid(WHITE));
        }
        assert!(canvas.colors.iter().all(|&c| c == BLACK));
    }

    #[test]
    fn test_circle_covers_its_radius() {
        let mut canvas = ascii_canvas(300, 300);
        {
            let mut vp = Viewport::fit(&mut canvas);
            vp.fill_circle(150.0, 150.0, 30.0, &Paint::Solid(WHITE));
        }
        assert_eq!(canvas.get(150, 150), Some(WHITE));
        assert_eq!(canvas.get(150, 170), Some(WHITE));
        assert_eq!(canvas.get(150, 185), Some(BLACK));
        assert_eq!(canvas.get(175, 175), Some(BLACK));
    }

    #[test]
    fn test_zero_radius_circle_draws_nothing() {
        let mut canvas = ascii_canvas(30, 30);
        {
            let mut vp = Viewport::fit(&mut canvas);
            vp.fill_circle(150.0, 150.0, 0.0, &Paint::Solid(WHITE));
        }
        assert!(canvas.colors.iter().all(|&c| c == BLACK));
    }

    #[test]
    fn test_overlay_darkens_everything() {
        let mut canvas = ascii_canvas(30, 30);
        {
            let mut vp = Viewport::fit(&mut canvas);
            vp.fill_rect(0.0, 0.0, SCENE_SIZE, SCENE_SIZE, &Paint::Solid(WHITE));
            vp.overlay(BLACK, 1.0);
        }
        assert!(canvas.colors.iter().all(|&c| c == BLACK));
    }
}
