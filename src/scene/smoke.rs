use crate::render::paint::{GREY, WHITE};
use crate::render::{ColorStop, LinearGradient, Paint, Surface};
use rand::RngExt;
use std::collections::VecDeque;

/// Horizontal offsets of a freshly emitted puff, at the chimney mouth.
const SHORT_PUFF: [f64; 3] = [123.0, 126.0, 128.0];
/// Trailing offsets appended on a winning coin flip.
const PUFF_TAIL: [f64; 2] = [131.0, 133.0];
/// Initial vertical band. Element 0 is the "top" label despite being the larger value.
const PUFF_BAND: [f64; 2] = [153.0, 147.0];

/// Tunables for smoke drift and lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmokeParams {
    /// Horizontal drift per tick
    pub drift_x: f64,
    /// Vertical drift per tick (negative = rising)
    pub drift_y: f64,
    /// Half-width of the per-puff jitter range
    pub jitter: f64,
    /// Puff radius is `age / radius_divisor`
    pub radius_divisor: f64,
    /// A new puff is emitted once the newest puff's leading point passes this x
    pub spawn_x: f64,
    /// The oldest puff is dropped once its leading point passes this x
    pub retire_x: f64,
}

impl Default for SmokeParams {
    fn default() -> Self {
        SmokeParams {
            drift_x: 0.8,
            drift_y: -0.8,
            jitter: 0.4,
            radius_divisor: 5.0,
            spawn_x: 150.0,
            retire_x: crate::render::SCENE_SIZE,
        }
    }
}

/// One emitted unit of smoke: a cluster of points sharing a vertical band and an age.
#[derive(Debug, Clone, PartialEq)]
pub struct Puff {
    points: Vec<f64>,
    band: [f64; 2],
    age: u32,
}

impl Puff {
    /// A puff at the chimney, three points wide or five when `long`.
    pub fn new(long: bool) -> Self {
        let mut points = SHORT_PUFF.to_vec();
        if long {
            points.extend_from_slice(&PUFF_TAIL);
        }
        Puff {
            points,
            band: PUFF_BAND,
            age: 0,
        }
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn band(&self) -> [f64; 2] {
        self.band
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Horizontal position of the first point.
    pub fn leading_x(&self) -> f64 {
        self.points[0]
    }

    pub fn radius(&self, divisor: f64) -> f64 {
        self.age as f64 / divisor
    }

    fn drift(&mut self, dx: f64, dy: f64) {
        for x in &mut self.points {
            *x += dx;
        }
        for y in &mut self.band {
            *y += dy;
        }
        self.age += 1;
    }

    /// Centres of the points drawn this tick. Point `i` shows once `age > 1.5 * i`;
    /// visible points alternate between the two band values, starting with element 0,
    /// and rise by two units per index so the plume thins as it climbs.
    pub fn visible_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let age = self.age as f64;
        self.points
            .iter()
            .enumerate()
            .filter(move |&(i, _)| age > i as f64 * 1.5)
            .enumerate()
            .map(move |(shown, (i, &x))| (x, self.band[shown % 2] - i as f64 * 2.0))
    }
}

/// Ordered puffs, oldest first. Never empty.
pub struct SmokeSystem {
    puffs: VecDeque<Puff>,
    params: SmokeParams,
    paint: Paint,
}

impl SmokeSystem {
    /// Seed the system with a single puff.
    pub fn new<R: RngExt>(params: SmokeParams, rng: &mut R) -> Self {
        Self::with_uniform(params, || rng.random::<f64>())
    }

    /// Seed the system using `uniform` (values in 0.0..1.0) for the first coin flip.
    pub fn with_uniform(params: SmokeParams, mut uniform: impl FnMut() -> f64) -> Self {
        let mut puffs = VecDeque::with_capacity(8);
        puffs.push_back(Puff::new(uniform() > 0.5));
        SmokeSystem {
            puffs,
            params,
            paint: Paint::Linear(LinearGradient::new(
                (0.0, 0.0),
                (290.0, 0.0),
                vec![ColorStop::new(0.0, GREY), ColorStop::new(1.0, WHITE)],
            )),
        }
    }

    pub fn puffs(&self) -> impl ExactSizeIterator<Item = &Puff> {
        self.puffs.iter()
    }

    pub fn puff_count(&self) -> usize {
        self.puffs.len()
    }

    /// Advance one tick, drawing randomness from `rng`.
    pub fn step<R: RngExt>(&mut self, rng: &mut R) {
        self.step_with(|| rng.random::<f64>());
    }

    /// Advance one tick: drift every puff, then maybe spawn, then maybe retire.
    /// `uniform` must yield values in 0.0..1.0; it is called once per puff for jitter
    /// and once more if a puff is spawned.
    pub fn step_with(&mut self, mut uniform: impl FnMut() -> f64) {
        let p = self.params;
        for puff in &mut self.puffs {
            // One jitter per puff keeps its points together while puffs wander apart
            let jitter = if p.jitter > 0.0 {
                uniform() % (2.0 * p.jitter) - p.jitter
            } else {
                0.0
            };
            puff.drift(p.drift_x + jitter, p.drift_y + jitter);
        }

        if self.newest().leading_x() > p.spawn_x {
            self.puffs.push_back(Puff::new(uniform() > 0.5));
        }
        if self.oldest().leading_x() > p.retire_x {
            self.puffs.pop_front();
        }
        assert!(!self.puffs.is_empty(), "smoke collection must never be empty");
    }

    fn newest(&self) -> &Puff {
        self.puffs.back().expect("smoke collection must never be empty")
    }

    fn oldest(&self) -> &Puff {
        self.puffs.front().expect("smoke collection must never be empty")
    }

    /// Draw every visible point of every puff as a gradient-filled circle.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        for puff in &self.puffs {
            let radius = puff.radius(self.params.radius_divisor);
            for (x, y) in puff.visible_points() {
                surface.fill_circle(x, y, radius, &self.paint);
            }
        }
    }
}
