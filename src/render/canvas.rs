use super::paint::{BLACK, Rgb};
use crossterm::style::Color;

/// How pixels are turned into terminal characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RenderMode {
    /// Half-block characters ▀ with separate fg/bg colours (1x2 per cell)
    HalfBlock,
    /// Plain ASCII characters with luminance density mapping
    Ascii,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// No color — monochrome
    Mono,
    /// ANSI 16 colors
    Ansi16,
    /// 256-color palette
    Ansi256,
    /// 24-bit true color (RGB)
    TrueColor,
}

/// An RGB pixel buffer that gets rendered to terminal characters.
/// Coordinates are in "sub-cell" pixel space.
pub struct Canvas {
    /// Width in pixels (sub-cell)
    pub width: usize,
    /// Height in pixels (sub-cell)
    pub height: usize,
    pub colors: Vec<Rgb>,
    pub render_mode: RenderMode,
    pub color_mode: ColorMode,
    /// Color quantization step (0 = off, 4/8/16 = round RGB to nearest N).
    pub color_quant: u8,
}

impl Canvas {
    pub fn new(
        term_cols: usize,
        term_rows: usize,
        render_mode: RenderMode,
        color_mode: ColorMode,
    ) -> Self {
        let (px_w, px_h) = match render_mode {
            RenderMode::HalfBlock => (term_cols, term_rows * 2),
            RenderMode::Ascii => (term_cols, term_rows),
        };
        Canvas {
            width: px_w,
            height: px_h,
            colors: vec![BLACK; px_w * px_h],
            render_mode,
            color_mode,
            color_quant: 0,
        }
    }

    pub fn clear(&mut self, color: Rgb) {
        self.colors.fill(color);
    }

    #[inline]
    #[allow(dead_code)]
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        (x < self.width && y < self.height).then(|| self.colors[y * self.width + x])
    }

    /// Set a pixel. Bounds-checked.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) {
        if x < self.width && y < self.height {
            self.colors[y * self.width + x] = color;
        }
    }

    /// Mix `color` over every pixel with opacity `alpha` (0.0..=1.0).
    pub fn blend_all(&mut self, color: Rgb, alpha: f64) {
        let a = alpha.clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }
        for c in &mut self.colors {
            *c = mix(*c, color, a);
        }
    }

    /// Terminal dimensions needed for this canvas
    pub fn term_size(&self) -> (usize, usize) {
        match self.render_mode {
            RenderMode::HalfBlock => (self.width, self.height / 2),
            RenderMode::Ascii => (self.width, self.height),
        }
    }

    /// Render the canvas to a string buffer for output
    pub fn render(&self) -> String {
        match self.render_mode {
            RenderMode::HalfBlock => super::halfblock::render(self),
            RenderMode::Ascii => self.render_ascii(),
        }
    }

    fn render_ascii(&self) -> String {
        const CHARS: &[u8] = b" .:-=+*#%@";
        let (cols, rows) = self.term_size();
        let mut out = String::with_capacity(cols * rows * 10);
        let use_color = self.color_mode != ColorMode::Mono;
        let mut last_fg = String::new();

        for row in 0..rows {
            for col in 0..cols {
                let (r, g, b) = self.colors[row * self.width + col];
                let ci = (luminance((r, g, b)) * (CHARS.len() - 1) as f64).round() as usize;
                let ch = CHARS[ci.min(CHARS.len() - 1)] as char;

                if use_color {
                    let fg = color_to_fg(self.map_color(r, g, b));
                    if fg != last_fg {
                        out.push_str("\x1b[");
                        out.push_str(&fg);
                        out.push('m');
                        last_fg = fg;
                    }
                }
                out.push(ch);
            }
            if use_color {
                out.push_str("\x1b[0m");
                last_fg.clear();
            }
            out.push_str("\x1b[");
            out.push_str(&(row + 2).to_string());
            out.push_str(";1H");
        }
        out
    }

    pub fn map_color(&self, r: u8, g: u8, b: u8) -> Color {
        // Quantize first so neighbouring cells collapse onto the same escape sequence
        let (r, g, b) = if self.color_quant > 1 {
            let q = self.color_quant as u16;
            (
                ((r as u16 + q / 2) / q * q).min(255) as u8,
                ((g as u16 + q / 2) / q * q).min(255) as u8,
                ((b as u16 + q / 2) / q * q).min(255) as u8,
            )
        } else {
            (r, g, b)
        };
        match self.color_mode {
            ColorMode::Mono => Color::White,
            ColorMode::TrueColor => Color::Rgb { r, g, b },
            ColorMode::Ansi256 => {
                let idx = 16 + (36 * (r as u16 / 51)) + (6 * (g as u16 / 51)) + (b as u16 / 51);
                Color::AnsiValue(idx as u8)
            }
            ColorMode::Ansi16 => {
                let brightness = (r as u16 + g as u16 + b as u16) / 3;
                if brightness < 48 {
                    Color::Black
                } else if r > g && r > b {
                    if brightness > 170 { Color::Red } else { Color::DarkRed }
                } else if g > r && g > b {
                    if brightness > 170 { Color::Green } else { Color::DarkGreen }
                } else if b > r && b > g {
                    if brightness > 170 { Color::Blue } else { Color::DarkBlue }
                } else if r == g && g > b {
                    if brightness > 150 { Color::Yellow } else { Color::DarkYellow }
                } else if brightness > 200 {
                    Color::White
                } else if brightness > 110 {
                    Color::Grey
                } else {
                    Color::DarkGrey
                }
            }
        }
    }
}

/// Linear mix of `base` towards `over` by `a`.
#[inline]
pub fn mix(base: Rgb, over: Rgb, a: f64) -> Rgb {
    let ch = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * a).round().clamp(0.0, 255.0) as u8;
    (ch(base.0, over.0), ch(base.1, over.1), ch(base.2, over.2))
}

/// Perceived brightness in 0.0..=1.0 (Rec. 601 weights).
#[inline]
pub fn luminance((r, g, b): Rgb) -> f64 {
    (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) / 255.0
}

pub fn color_to_fg(color: Color) -> String {
    match color {
        Color::Rgb { r, g, b } => format!("38;2;{};{};{}", r, g, b),
        Color::AnsiValue(v) => format!("38;5;{}", v),
        Color::Black => "30".into(),
        Color::DarkRed => "31".into(),
        Color::DarkGreen => "32".into(),
        Color::DarkYellow => "33".into(),
        Color::DarkBlue => "34".into(),
        Color::DarkMagenta => "35".into(),
        Color::DarkCyan => "36".into(),
        Color::Grey => "37".into(),
        Color::DarkGrey => "90".into(),
        Color::Red => "91".into(),
        Color::Green => "92".into(),
        Color::Yellow => "93".into(),
        Color::Blue => "94".into(),
        Color::Magenta => "95".into(),
        Color::Cyan => "96".into(),
        Color::White => "97".into(),
        _ => "37".into(),
    }
}
