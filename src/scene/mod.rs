pub mod daynight;
pub mod geometry;
pub mod house;
pub mod smoke;

use crate::render::Surface;
use daynight::{DayNight, Lighting};
use rand::SeedableRng;
use rand::rngs::StdRng;
use smoke::{SmokeParams, SmokeSystem};

/// The house with its chimney smoke and day/night cycle.
/// Owns all animation state; one `tick` is one animation step.
pub struct HouseScene {
    smoke: SmokeSystem,
    day_night: DayNight,
    rng: StdRng,
    ticks: u64,
}

impl HouseScene {
    /// Fresh scene at noon with a single puff at the chimney.
    pub fn new(smoke: SmokeParams, time_step: f64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        HouseScene {
            smoke: SmokeSystem::new(smoke, &mut rng),
            day_night: DayNight::new(time_step),
            rng,
            ticks: 0,
        }
    }

    /// Advance smoke, then time of day.
    pub fn tick(&mut self) {
        self.smoke.step(&mut self.rng);
        self.day_night.step();
        self.ticks += 1;
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        house::draw_scene(surface, &self.lighting(), &self.smoke);
    }

    pub fn lighting(&self) -> Lighting {
        self.day_night.lighting()
    }

    /// True while heading towards midnight.
    pub fn darkening(&self) -> bool {
        self.day_night.increasing()
    }

    pub fn puff_count(&self) -> usize {
        self.smoke.puff_count()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
