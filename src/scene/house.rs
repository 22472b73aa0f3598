use super::daynight::Lighting;
use super::geometry::{self, HOUSE_OFFSET, Layer};
use super::smoke::SmokeSystem;
use crate::render::paint::{BLACK, GREY, WHITE, YELLOW};
use crate::render::{ColorStop, LinearGradient, Paint, SCENE_SIZE, Surface};

/// Paint the whole scene back to front. The smoke goes behind the chimney so puffs
/// appear to leave its mouth; the darkness overlay goes over everything.
pub fn draw_scene<S: Surface + ?Sized>(surface: &mut S, lighting: &Lighting, smoke: &SmokeSystem) {
    draw_background(surface);
    fill_layers(surface, geometry::WALLS);
    draw_windows(surface, lighting);
    fill_layers(surface, geometry::DOOR);
    fill_layers(surface, geometry::ROOF);
    fill_layers(surface, geometry::ROOF_TRIM);
    smoke.render(surface);
    fill_layers(surface, geometry::CHIMNEY);
    fill_layers(surface, geometry::FOLIAGE);
    surface.overlay(BLACK, lighting.overlay_alpha);
}

fn draw_background<S: Surface + ?Sized>(surface: &mut S) {
    let sky = Paint::Linear(LinearGradient::new(
        (0.0, 0.0),
        (SCENE_SIZE, SCENE_SIZE),
        vec![
            ColorStop::new(0.0, geometry::SKY_TOP),
            ColorStop::new(1.0, geometry::SKY_BOTTOM),
        ],
    ));
    surface.fill_rect(0.0, 0.0, SCENE_SIZE, SCENE_SIZE, &sky);
    surface.fill_rect(
        0.0,
        geometry::GROUND_Y,
        SCENE_SIZE,
        SCENE_SIZE - geometry::GROUND_Y,
        &Paint::Solid(geometry::GROUND),
    );
}

#[inline]
fn to_scene((x, y): (f64, f64)) -> (f64, f64) {
    (x + HOUSE_OFFSET.0, y + HOUSE_OFFSET.1)
}

fn fill_local<S: Surface + ?Sized>(surface: &mut S, points: &[(f64, f64)], paint: &Paint) {
    let shifted: Vec<(f64, f64)> = points.iter().copied().map(to_scene).collect();
    surface.fill_polygon(&shifted, paint);
}

fn fill_layers<S: Surface + ?Sized>(surface: &mut S, layers: &[Layer]) {
    for layer in layers {
        let paint = Paint::Solid(layer.color);
        for polygon in layer.polygons {
            fill_local(surface, polygon, &paint);
        }
    }
}

/// Glass runs diagonally from the top-left to the bottom-right corner.
fn glass_paint(window: &[(f64, f64); 4], lighting: &Lighting) -> Paint {
    let stops = match (lighting.is_night, lighting.lights_on) {
        (true, true) => vec![ColorStop::new(0.0, WHITE), ColorStop::new(1.0, YELLOW)],
        (true, false) => vec![ColorStop::new(0.0, GREY), ColorStop::new(1.0, BLACK)],
        (false, _) => vec![
            ColorStop::new(0.0, GREY),
            ColorStop::new(0.5, WHITE),
            ColorStop::new(1.0, GREY),
        ],
    };
    Paint::Linear(LinearGradient::new(to_scene(window[0]), to_scene(window[2]), stops))
}

/// Left and right shutters, `width` wide along the window's top edge and as tall as
/// the window. A sloped top edge skews both shutters to match.
pub fn shutters(window: &[(f64, f64); 4], width: f64) -> [[(f64, f64); 4]; 2] {
    let [p0, p1, p2, p3] = *window;
    let dx = p1.0 - p0.0;
    let dy = p1.1 - p0.1;
    let ratio = (dx * dx + dy * dy).sqrt() / width;
    let (off_x, off_y) = (dx / ratio, dy / ratio);
    let height = p3.1 - p0.1;

    let left = (p0.0 + off_x, p0.1 - off_y);
    let right = (p1.0 - off_x, p1.1 + off_y);
    [
        [p0, left, (left.0, left.1 + height), p3],
        [right, p1, p2, (right.0, right.1 + height)],
    ]
}

fn draw_windows<S: Surface + ?Sized>(surface: &mut S, lighting: &Lighting) {
    let shutter = Paint::Solid(geometry::SHUTTER_COLOR);
    for window in &geometry::WINDOWS {
        fill_local(surface, window, &glass_paint(window, lighting));
        for side in shutters(window, geometry::SHUTTER_WIDTH) {
            fill_local(surface, &side, &shutter);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Canvas, ColorMode, RenderMode, Rgb, Viewport};
    use crate::scene::daynight::DayNight;
    use crate::scene::smoke::SmokeParams;

    #[derive(Debug, PartialEq)]
    enum Op {
        Polygon(Vec<(f64, f64)>, Paint),
        Circle(f64, f64, f64),
        Overlay(Rgb, f64),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Surface for Recorder {
        fn fill_polygon(&mut self, points: &[(f64, f64)], paint: &Paint) {
            self.ops.push(Op::Polygon(points.to_vec(), paint.clone()));
        }

        fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, _paint: &Paint) {
            self.ops.push(Op::Circle(cx, cy, radius));
        }

        fn overlay(&mut self, color: Rgb, alpha: f64) {
            self.ops.push(Op::Overlay(color, alpha));
        }
    }

    fn still_smoke(ticks: usize) -> SmokeSystem {
        let mut smoke = SmokeSystem::with_uniform(SmokeParams::default(), || 0.4);
        for _ in 0..ticks {
            smoke.step_with(|| 0.4);
        }
        smoke
    }

    fn record(lighting: Lighting, smoke: &SmokeSystem) -> Vec<Op> {
        let mut rec = Recorder::default();
        draw_scene(&mut rec, &lighting, smoke);
        rec.ops
    }

    fn is_solid(op: &Op, color: Rgb) -> bool {
        matches!(op, Op::Polygon(_, Paint::Solid(c)) if *c == color)
    }

    /// Glass colours sampled at 0, 1/4, 1/2, 3/4 and 1 along the first window's gradient.
    fn glass_samples(ops: &[Op]) -> Vec<Rgb> {
        let first = to_scene(geometry::WINDOWS[0][0]);
        let glass = ops
            .iter()
            .find_map(|op| match op {
                Op::Polygon(pts, Paint::Linear(g)) if pts[0] == first => Some(g),
                _ => None,
            })
            .expect("window glass not drawn");
        (0..=4).map(|i| glass.gradient.sample(i as f64 / 4.0)).collect()
    }

    #[test]
    fn test_overlay_is_drawn_last_with_time_based_alpha() {
        let ops = record(Lighting::at(0.75), &still_smoke(0));
        assert_eq!(ops.last(), Some(&Op::Overlay(BLACK, 0.5)));
    }

    #[test]
    fn test_background_is_drawn_first_and_covers_the_scene() {
        let ops = record(Lighting::at(0.0), &still_smoke(0));
        match &ops[0] {
            Op::Polygon(pts, Paint::Linear(_)) => {
                assert_eq!(pts[0], (0.0, 0.0));
                assert_eq!(pts[2], (SCENE_SIZE, SCENE_SIZE));
            }
            other => panic!("unexpected first op {other:?}"),
        }
    }

    #[test]
    fn test_fresh_smoke_draws_no_circles() {
        let ops = record(Lighting::at(0.0), &still_smoke(0));
        assert!(!ops.iter().any(|op| matches!(op, Op::Circle(..))));
    }

    #[test]
    fn test_smoke_circles_match_visible_points_and_sit_behind_chimney() {
        let smoke = still_smoke(3);
        let ops = record(Lighting::at(0.0), &smoke);
        let circles: Vec<usize> = ops
            .iter()
            .enumerate()
            .filter(|(_, op)| matches!(op, Op::Circle(..)))
            .map(|(i, _)| i)
            .collect();
        // age 3: indices 0 and 1 are visible (3 > 0, 3 > 1.5, but not 3 > 3)
        assert_eq!(circles.len(), 2);
        let chimney = ops
            .iter()
            .position(|op| is_solid(op, geometry::CHIMNEY_LIGHT))
            .unwrap();
        assert!(circles.iter().all(|&i| i < chimney));
        match ops[circles[0]] {
            Op::Circle(x, y, r) => {
                assert!((x - 125.4).abs() < 1e-9);
                assert!((y - 150.6).abs() < 1e-9);
                assert!((r - 0.6).abs() < 1e-9);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_daytime_glass_is_bright_in_the_middle() {
        let glass = glass_samples(&record(Lighting::at(0.1), &still_smoke(0)));
        assert_eq!(glass[0], GREY);
        assert_eq!(glass[2], WHITE);
        assert_eq!(glass[4], GREY);
    }

    #[test]
    fn test_evening_glass_is_lit() {
        let glass = glass_samples(&record(Lighting::at(0.5), &still_smoke(0)));
        assert_eq!(glass[0], WHITE);
        assert_eq!(glass[4], YELLOW);
    }

    #[test]
    fn test_midnight_glass_is_dark() {
        let glass = glass_samples(&record(Lighting::at(0.9), &still_smoke(0)));
        assert_eq!(glass[0], GREY);
        assert_eq!(glass[4], BLACK);
    }

    #[test]
    fn test_shutters_on_a_level_window() {
        let [left, right] = shutters(&geometry::WINDOWS[0], 4.0);
        assert_eq!(left, [(223.0, 126.0), (227.0, 126.0), (227.0, 140.0), (223.0, 140.0)]);
        assert_eq!(right, [(238.0, 126.0), (242.0, 126.0), (242.0, 140.0), (238.0, 140.0)]);
    }

    #[test]
    fn test_every_window_gets_glass_and_two_shutters() {
        let ops = record(Lighting::at(0.0), &still_smoke(0));
        let shutters = ops
            .iter()
            .filter(|op| is_solid(op, geometry::SHUTTER_COLOR))
            .count();
        assert_eq!(shutters, geometry::WINDOWS.len() * 2);
    }

    #[test]
    fn test_midnight_canvas_is_darker_than_noon() {
        let smoke = still_smoke(40);
        let brightness = |time: f64| {
            let mut canvas = Canvas::new(60, 30, RenderMode::HalfBlock, ColorMode::TrueColor);
            {
                let mut vp = Viewport::fit(&mut canvas);
                draw_scene(&mut vp, &Lighting::at(time), &smoke);
            }
            canvas
                .colors
                .iter()
                .map(|&(r, g, b)| r as u64 + g as u64 + b as u64)
                .sum::<u64>()
        };
        assert!(brightness(1.0) < brightness(0.0));
    }

    #[test]
    fn test_noon_sky_pixel_is_sky_coloured() {
        let dn = DayNight::new(0.01);
        let mut canvas = Canvas::new(60, 30, RenderMode::HalfBlock, ColorMode::TrueColor);
        {
            let mut vp = Viewport::fit(&mut canvas);
            draw_scene(&mut vp, &dn.lighting(), &still_smoke(0));
        }
        // Top-left corner of the scene is the start of the sky gradient
        let (r, g, b) = canvas.get(0, 0).unwrap();
        let (sr, sg, sb) = geometry::SKY_TOP;
        assert!(r.abs_diff(sr) <= 3 && g.abs_diff(sg) <= 3 && b.abs_diff(sb) <= 3);
    }
}
