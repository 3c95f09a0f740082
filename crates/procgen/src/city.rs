//! City block layout: a jittered grid of box buildings, road pads, and
//! streetlights.

use glam::Vec3;
use noise::{NoiseFn, Perlin};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// City generation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityConfig {
    /// Layout seed; the same seed always produces the same city.
    #[serde(default)]
    pub seed: u64,
    /// Cells per side of the city grid.
    #[serde(default = "default_grid_size")]
    pub grid_size: i32,
    /// Distance between cell centers, meters.
    #[serde(default = "default_spacing")]
    pub spacing: f32,
    /// Chance a cell holds a building; the rest become road pads.
    #[serde(default = "default_building_probability")]
    pub building_probability: f32,
    /// Nominal building footprint side, meters (varies ±20%).
    #[serde(default = "default_base_size")]
    pub base_size: f32,
    /// Minimum building height, meters.
    #[serde(default = "default_min_height")]
    pub min_height: f32,
    /// Additional random height on top of the minimum, meters.
    #[serde(default = "default_height_variance")]
    pub height_variance: f32,
    /// Chance a building cell also gets a streetlight.
    #[serde(default = "default_streetlight_chance")]
    pub streetlight_chance: f32,
}

fn default_grid_size() -> i32 {
    10
}
fn default_spacing() -> f32 {
    150.0
}
fn default_building_probability() -> f32 {
    0.7
}
fn default_base_size() -> f32 {
    40.0
}
fn default_min_height() -> f32 {
    20.0
}
fn default_height_variance() -> f32 {
    80.0
}
fn default_streetlight_chance() -> f32 {
    0.2
}

impl Default for CityConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            grid_size: default_grid_size(),
            spacing: default_spacing(),
            building_probability: default_building_probability(),
            base_size: default_base_size(),
            min_height: default_min_height(),
            height_variance: default_height_variance(),
            streetlight_chance: default_streetlight_chance(),
        }
    }
}

/// A box building: collision obstacle + mesh description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Building {
    /// World position of the box center (height/2 above the ground).
    pub center: Vec3,
    /// Half sizes in X, Y, Z.
    pub half_extents: Vec3,
}

/// A streetlight beside a building: thin pole plus a lamp at the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Streetlight {
    /// Base of the pole on the ground.
    pub base: Vec3,
    /// Pole height, meters.
    pub pole_height: f32,
}

/// A flat road pad filling a cell with no building. Render-only; the
/// ground plane underneath does the colliding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadPad {
    /// Center of the pad, slightly above the ground to avoid z-fighting.
    pub center: Vec3,
    /// Half size of the square pad.
    pub half_size: f32,
}

/// The generated city.
#[derive(Debug, Clone, Default)]
pub struct CityLayout {
    pub buildings: Vec<Building>,
    pub streetlights: Vec<Streetlight>,
    pub roads: Vec<RoadPad>,
}

impl CityLayout {
    /// Generate a city from the config. Deterministic per seed.
    pub fn generate(config: &CityConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        // Downtown profile: buildings near the center run taller.
        let district = Perlin::new(config.seed as u32);

        let mut layout = Self::default();
        let half_grid = config.grid_size / 2;
        let extent = config.grid_size as f32 * config.spacing;

        for i in -half_grid..half_grid {
            for j in -half_grid..half_grid {
                let cell_x = i as f32 * config.spacing;
                let cell_z = j as f32 * config.spacing;

                if rng.gen::<f32>() < config.building_probability {
                    // District factor in [0.5, 1.5]: Perlin over cell
                    // coordinates, stretched so neighborhoods share height.
                    let d = district.get([
                        f64::from(cell_x / extent * 3.0),
                        f64::from(cell_z / extent * 3.0),
                    ]) as f32;
                    let district_factor = 1.0 + d * 0.5;

                    let height = (config.min_height
                        + rng.gen::<f32>() * config.height_variance)
                        * district_factor;
                    let width = config.base_size * (0.8 + rng.gen::<f32>() * 0.4);
                    let depth = config.base_size * (0.8 + rng.gen::<f32>() * 0.4);

                    // Jitter the building inside its cell.
                    let x = cell_x + (rng.gen::<f32>() - 0.5) * config.spacing * 0.3;
                    let z = cell_z + (rng.gen::<f32>() - 0.5) * config.spacing * 0.3;

                    layout.buildings.push(Building {
                        center: Vec3::new(x, height / 2.0, z),
                        half_extents: Vec3::new(width / 2.0, height / 2.0, depth / 2.0),
                    });

                    if rng.gen::<f32>() < config.streetlight_chance {
                        layout.streetlights.push(Streetlight {
                            base: Vec3::new(x + width / 2.0 + 5.0, 0.0, z),
                            pole_height: 10.0,
                        });
                    }
                } else {
                    layout.roads.push(RoadPad {
                        center: Vec3::new(cell_x, 0.05, cell_z),
                        half_size: config.spacing * 0.4,
                    });
                }
            }
        }

        log::info!(
            "generated city: {} buildings, {} streetlights, {} road pads (seed {})",
            layout.buildings.len(),
            layout.streetlights.len(),
            layout.roads.len(),
            config.seed
        );
        layout
    }
}
