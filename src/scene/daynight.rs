/// Time of day above which the scene counts as night.
const NIGHT_FROM: f64 = 0.3;
/// Time of day at which the house lights go out again.
const LIGHTS_OUT: f64 = 0.8;
/// Overlay opacity is `time / OVERLAY_DIVISOR`, so full night never goes fully black.
const OVERLAY_DIVISOR: f64 = 1.5;

/// Triangle-wave oscillator over [0, 1]: 0 is noon, 1 is midnight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayNight {
    time: f64,
    increasing: bool,
    step: f64,
}

impl DayNight {
    /// Start at noon, heading towards midnight.
    pub fn new(step: f64) -> Self {
        DayNight {
            time: 0.0,
            increasing: true,
            step,
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn increasing(&self) -> bool {
        self.increasing
    }

    /// Advance by one step, reflecting off either bound and reversing direction.
    pub fn step(&mut self) {
        if self.increasing {
            let next = self.time + self.step;
            if next > 1.0 {
                self.time = 1.0 - (next - 1.0);
                self.increasing = false;
            } else {
                self.time = next;
            }
        } else {
            let next = self.time - self.step;
            if next < 0.0 {
                self.time = -next;
                self.increasing = true;
            } else {
                self.time = next;
            }
        }
    }

    pub fn lighting(&self) -> Lighting {
        Lighting::at(self.time)
    }
}

/// Lighting derived from a time of day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub time: f64,
    pub is_night: bool,
    pub lights_on: bool,
    /// Opacity of the black overlay drawn over the finished scene
    pub overlay_alpha: f64,
}

impl Lighting {
    pub fn at(time: f64) -> Self {
        let is_night = time > NIGHT_FROM;
        Lighting {
            time,
            is_night,
            lights_on: is_night && time < LIGHTS_OUT,
            overlay_alpha: time / OVERLAY_DIVISOR,
        }
    }

    /// Short label for the status bar.
    pub fn phase(&self) -> &'static str {
        match (self.is_night, self.lights_on) {
            (false, _) => "day",
            (true, true) => "evening",
            (true, false) => "night",
        }
    }
}
