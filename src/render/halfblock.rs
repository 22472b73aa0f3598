use super::canvas::{Canvas, ColorMode, color_to_fg, luminance};
use crossterm::style::Color;

fn color_to_bg(color: Color) -> String {
    match color {
        Color::Rgb { r, g, b } => format!("48;2;{};{};{}", r, g, b),
        Color::AnsiValue(v) => format!("48;5;{}", v),
        Color::Black => "40".into(),
        Color::DarkRed => "41".into(),
        Color::DarkGreen => "42".into(),
        Color::DarkYellow => "43".into(),
        Color::DarkBlue => "44".into(),
        Color::DarkMagenta => "45".into(),
        Color::DarkCyan => "46".into(),
        Color::Grey => "47".into(),
        Color::DarkGrey => "100".into(),
        Color::Red => "101".into(),
        Color::Green => "102".into(),
        Color::Yellow => "103".into(),
        Color::Blue => "104".into(),
        Color::Magenta => "105".into(),
        Color::Cyan => "106".into(),
        Color::White => "107".into(),
        _ => "40".into(),
    }
}

/// Luminance above which a pixel counts as "ink" in monochrome output.
const MONO_THRESHOLD: f64 = 0.5;

/// Every cell is a ▀ whose foreground is the upper pixel and background the lower one.
/// The scene is fully painted, so there is no transparent background to skip.
pub fn render(canvas: &Canvas) -> String {
    let term_cols = canvas.width;
    let term_rows = canvas.height / 2;
    let mut out = String::with_capacity(term_cols * term_rows * 12);

    let mut last_fg = String::new();
    let mut last_bg = String::new();

    for row in 0..term_rows {
        for col in 0..term_cols {
            let top = canvas.colors[row * 2 * canvas.width + col];
            let bot = canvas.colors[(row * 2 + 1) * canvas.width + col];

            if canvas.color_mode == ColorMode::Mono {
                match (luminance(top) > MONO_THRESHOLD, luminance(bot) > MONO_THRESHOLD) {
                    (true, true) => out.push('█'),
                    (true, false) => out.push('▀'),
                    (false, true) => out.push('▄'),
                    (false, false) => out.push(' '),
                }
                continue;
            }

            let fg = color_to_fg(canvas.map_color(top.0, top.1, top.2));
            let bg = color_to_bg(canvas.map_color(bot.0, bot.1, bot.2));
            let fg_changed = fg != last_fg;
            let bg_changed = bg != last_bg;

            if fg_changed || bg_changed {
                out.push_str("\x1b[");
                match (fg_changed, bg_changed) {
                    (true, true) => {
                        out.push_str(&fg);
                        out.push(';');
                        out.push_str(&bg);
                    }
                    (true, false) => out.push_str(&fg),
                    _ => out.push_str(&bg),
                }
                out.push('m');
            }
            if fg_changed {
                last_fg = fg;
            }
            if bg_changed {
                last_bg = bg;
            }
            out.push('▀');
        }
        // Reset at end of row
        if canvas.color_mode != ColorMode::Mono {
            out.push_str("\x1b[0m");
            last_fg.clear();
            last_bg.clear();
        }
        out.push_str("\x1b[");
        out.push_str(&(row + 2).to_string());
        out.push_str(";1H");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderMode;
    use crate::render::paint::{BLACK, WHITE};

    #[test]
    fn test_mono_picks_block_by_pixel_pair() {
        let mut c = Canvas::new(4, 1, RenderMode::HalfBlock, ColorMode::Mono);
        c.set(0, 0, WHITE);
        c.set(0, 1, WHITE);
        c.set(1, 0, WHITE);
        c.set(2, 1, WHITE);
        let out = render(&c);
        assert!(out.starts_with("█▀▄ "));
    }

    #[test]
    fn test_truecolor_emits_each_colour_pair_once_per_run() {
        let mut c = Canvas::new(3, 1, RenderMode::HalfBlock, ColorMode::TrueColor);
        for x in 0..3 {
            c.set(x, 0, WHITE);
            c.set(x, 1, BLACK);
        }
        let out = render(&c);
        assert_eq!(out.matches("38;2;255;255;255;48;2;0;0;0m").count(), 1);
        assert_eq!(out.matches('▀').count(), 3);
    }
}
