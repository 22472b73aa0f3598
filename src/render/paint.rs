/// An RGB triple. Alpha is handled by the surface, never stored in a colour.
pub type Rgb = (u8, u8, u8);

/// Build a colour from a `0xRRGGBB` literal.
pub const fn hex(v: u32) -> Rgb {
    (((v >> 16) & 0xFF) as u8, ((v >> 8) & 0xFF) as u8, (v & 0xFF) as u8)
}

pub const BLACK: Rgb = (0, 0, 0);
pub const WHITE: Rgb = (255, 255, 255);
pub const GREY: Rgb = (128, 128, 128);
pub const YELLOW: Rgb = (255, 255, 0);

/// A colour stop in a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub t: f64,
    pub color: Rgb,
}

impl ColorStop {
    pub const fn new(t: f64, color: Rgb) -> Self {
        ColorStop { t, color }
    }
}

/// Piecewise-linear gradient between colour stops. Samples by parameter t in 0.0..=1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorGradient {
    stops: Vec<ColorStop>,
}

impl ColorGradient {
    /// Create a gradient from a list of colour stops. Stops should be sorted by t.
    pub fn new(stops: Vec<ColorStop>) -> Self {
        assert!(stops.len() >= 2, "ColorGradient requires at least 2 stops");
        ColorGradient { stops }
    }

    /// Sample the gradient at parameter t (0.0..=1.0).
    pub fn sample(&self, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let first = &self.stops[0];
        if t <= first.t {
            return first.color;
        }
        let last = &self.stops[self.stops.len() - 1];
        if t >= last.t {
            return last.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if t >= a.t && t <= b.t {
                let frac = if b.t > a.t { (t - a.t) / (b.t - a.t) } else { 0.0 };
                let lerp = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * frac).round() as u8;
                return (
                    lerp(a.color.0, b.color.0),
                    lerp(a.color.1, b.color.1),
                    lerp(a.color.2, b.color.2),
                );
            }
        }
        last.color
    }
}

/// Gradient laid along the axis from `start` to `end`, in scene units.
/// Points before `start` take the first stop, points past `end` the last.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: (f64, f64),
    pub end: (f64, f64),
    pub gradient: ColorGradient,
}

impl LinearGradient {
    pub fn new(start: (f64, f64), end: (f64, f64), stops: Vec<ColorStop>) -> Self {
        LinearGradient {
            start,
            end,
            gradient: ColorGradient::new(stops),
        }
    }

    /// Colour at scene point (x, y): projection onto the gradient axis.
    pub fn sample(&self, x: f64, y: f64) -> Rgb {
        let dx = self.end.0 - self.start.0;
        let dy = self.end.1 - self.start.1;
        let len_sq = dx * dx + dy * dy;
        if len_sq < 1e-12 {
            return self.gradient.sample(0.0);
        }
        let t = ((x - self.start.0) * dx + (y - self.start.1) * dy) / len_sq;
        self.gradient.sample(t)
    }
}

/// How a shape is filled.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Rgb),
    Linear(LinearGradient),
}

impl Paint {
    #[inline]
    pub fn sample(&self, x: f64, y: f64) -> Rgb {
        match self {
            Paint::Solid(c) => *c,
            Paint::Linear(g) => g.sample(x, y),
        }
    }
}

impl From<Rgb> for Paint {
    fn from(c: Rgb) -> Self {
        Paint::Solid(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_splits_channels() {
        assert_eq!(hex(0x3861A1), (0x38, 0x61, 0xA1));
        assert_eq!(hex(0xDDDDDD), (0xDD, 0xDD, 0xDD));
    }

    #[test]
    fn test_gradient_endpoints_and_midpoint() {
        let g = ColorGradient::new(vec![ColorStop::new(0.0, BLACK), ColorStop::new(1.0, WHITE)]);
        assert_eq!(g.sample(-1.0), BLACK);
        assert_eq!(g.sample(2.0), WHITE);
        assert_eq!(g.sample(0.5), (128, 128, 128));
    }

    #[test]
    fn test_three_stop_gradient_peaks_in_the_middle() {
        let g = ColorGradient::new(vec![
            ColorStop::new(0.0, GREY),
            ColorStop::new(0.5, WHITE),
            ColorStop::new(1.0, GREY),
        ]);
        assert_eq!(g.sample(0.5), WHITE);
        assert_eq!(g.sample(0.0), g.sample(1.0));
    }

    #[test]
    fn test_linear_gradient_projects_onto_axis() {
        let lg = LinearGradient::new(
            (0.0, 0.0),
            (100.0, 0.0),
            vec![ColorStop::new(0.0, BLACK), ColorStop::new(1.0, WHITE)],
        );
        // Vertical offset does not matter for a horizontal axis
        assert_eq!(lg.sample(50.0, 0.0), lg.sample(50.0, 999.0));
        assert_eq!(lg.sample(-10.0, 3.0), BLACK);
        assert_eq!(lg.sample(150.0, 3.0), WHITE);
    }

    #[test]
    fn test_degenerate_axis_uses_first_stop() {
        let lg = LinearGradient::new(
            (5.0, 5.0),
            (5.0, 5.0),
            vec![ColorStop::new(0.0, YELLOW), ColorStop::new(1.0, WHITE)],
        );
        assert_eq!(lg.sample(40.0, 40.0), YELLOW);
    }
}
