//! Day/night cycle: a scalar time-of-day driving sun position, light
//! intensities, and sky color.
//!
//! Everything here is a pure function of `time`; the render collaborator
//! reads the sampled lighting each frame and applies it to its directional
//! light, ambient light, and sky.

use glam::Vec3;

/// Sun orbit radius on the Z axis, meters.
const SUN_DISTANCE: f32 = 300.0;
/// Peak sun height, meters.
const MAX_SUN_HEIGHT: f32 = 200.0;
/// Sun height below which it is fully night.
const HORIZON_Y: f32 = -30.0;
/// Sun height at which daylight is fully established.
const FULL_DAY_Y: f32 = 50.0;

const NIGHT_SKY: [f32; 3] = [0.0, 0.0, 0.063]; // #000010
const DAY_SKY: [f32; 3] = [0.529, 0.808, 0.922]; // #87CEEB
const DAWN_DUSK_SKY: [f32; 3] = [1.0, 0.843, 0.631]; // #FFD7A1
const DAY_SUN: [f32; 3] = [1.0, 1.0, 1.0];
const DAWN_DUSK_SUN: [f32; 3] = [1.0, 0.667, 0.4]; // #FFAA66

fn lerp_color(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    let t = t.clamp(0.0, 1.0);
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

/// Lighting parameters for one moment of the cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyLighting {
    /// World position of the sun light.
    pub sun_position: Vec3,
    /// Directional light intensity, 0 at night up to 1.2 at full day.
    pub sun_intensity: f32,
    /// Directional light color.
    pub sun_color: [f32; 3],
    /// Ambient light intensity.
    pub ambient_intensity: f32,
    /// Sky background color.
    pub sky_color: [f32; 3],
}

/// Deterministic periodic time of day. `time` wraps in [0, 1):
/// 0 is midnight, 0.25 puts the sun at its peak.
#[derive(Debug, Clone, Copy)]
pub struct DayNightCycle {
    time: f32,
    /// Fraction of a full cycle per second.
    pub speed: f32,
}

impl Default for DayNightCycle {
    fn default() -> Self {
        Self {
            time: 0.25,
            speed: 0.005,
        }
    }
}

impl DayNightCycle {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            ..Default::default()
        }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// Advance the cycle; time wraps modulo 1.
    pub fn advance(&mut self, dt: f32) {
        self.time = (self.time + dt * self.speed).rem_euclid(1.0);
    }

    /// Sample lighting for the current time.
    pub fn sample(&self) -> SkyLighting {
        let angle = self.time * std::f32::consts::TAU;
        let sun_position = Vec3::new(0.0, angle.sin() * MAX_SUN_HEIGHT, angle.cos() * SUN_DISTANCE);
        let sun_height = sun_position.y;

        // Below the horizon band: full night.
        let mut lighting = SkyLighting {
            sun_position,
            sun_intensity: 0.0,
            sun_color: DAWN_DUSK_SUN,
            ambient_intensity: 0.05,
            sky_color: NIGHT_SKY,
        };

        if sun_height > HORIZON_Y {
            let transition = ((sun_height - HORIZON_Y) / (FULL_DAY_Y - HORIZON_Y)).clamp(0.0, 1.0);
            lighting.sun_intensity = transition * 1.2;
            lighting.ambient_intensity = 0.05 + transition * 0.35;
            lighting.sun_color =
                lerp_color(DAWN_DUSK_SUN, DAY_SUN, (sun_height / FULL_DAY_Y).clamp(0.0, 1.0));

            // Sky blends night -> dawn/dusk through the horizon band, then
            // dawn/dusk -> day as the sun climbs.
            lighting.sky_color = if sun_height > FULL_DAY_Y * 0.5 {
                let t = (sun_height - FULL_DAY_Y * 0.5) / (MAX_SUN_HEIGHT - FULL_DAY_Y * 0.5);
                lerp_color(DAWN_DUSK_SKY, DAY_SKY, t)
            } else {
                lerp_color(NIGHT_SKY, DAWN_DUSK_SKY, transition)
            };
        }

        lighting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Time wraps modulo 1 and never goes negative.
    #[test]
    fn time_wraps() {
        let mut cycle = DayNightCycle::new(0.5);
        cycle.advance(1.9); // 0.25 + 0.95 = 1.2 -> 0.2
        assert!((cycle.time() - 0.2).abs() < 1e-5);
    }

    /// Sampling is a pure function of time: same time, same lighting.
    #[test]
    fn sample_is_deterministic() {
        let a = DayNightCycle::default().sample();
        let b = DayNightCycle::default().sample();
        assert_eq!(a, b);
    }

    /// At the default start (sun at peak) it is full day: max intensity,
    /// white sun, high sun position.
    #[test]
    fn peak_is_full_day() {
        let lighting = DayNightCycle::default().sample();
        assert!((lighting.sun_position.y - MAX_SUN_HEIGHT).abs() < 1e-3);
        assert!((lighting.sun_intensity - 1.2).abs() < 1e-5);
        for (c, expected) in lighting.sun_color.iter().zip(DAY_SUN) {
            assert!((c - expected).abs() < 1e-5);
        }
        assert!((lighting.ambient_intensity - 0.4).abs() < 1e-5);
    }

    /// At time 0.75 the sun is at its lowest: night sky, zero sun.
    #[test]
    fn trough_is_night() {
        let mut cycle = DayNightCycle::new(0.005);
        cycle.advance(0.5 / 0.005); // advance half a cycle
        let lighting = cycle.sample();
        assert!(lighting.sun_position.y < HORIZON_Y);
        assert_eq!(lighting.sun_intensity, 0.0);
        assert_eq!(lighting.sky_color, NIGHT_SKY);
        assert!((lighting.ambient_intensity - 0.05).abs() < 1e-6);
    }

    /// Crossing the horizon band blends intensity monotonically.
    #[test]
    fn dawn_ramps_intensity() {
        // Find two times shortly after the sun passes the horizon going up.
        let mut cycle = DayNightCycle::new(1.0);
        let mut prev = None;
        let mut saw_ramp = false;
        for _ in 0..400 {
            cycle.advance(1.0 / 400.0);
            let s = cycle.sample();
            if let Some(p) = prev {
                if s.sun_intensity > p && s.sun_intensity < 1.2 {
                    saw_ramp = true;
                }
            }
            prev = Some(s.sun_intensity);
        }
        assert!(saw_ramp, "expected a partial-intensity dawn/dusk sample");
    }
}
