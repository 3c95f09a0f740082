//! Skylane - arcade city flier: flight dynamics, stall handling, and a
//! procedural night-and-day city, driven headless from a real-time loop.

mod camera;
mod config;
mod day_night;
mod hud;
mod sim;

use std::thread;
use std::time::Duration;

use anyhow::Result;
use engine_core::Time;
use input::{ElementState, KeyCode};

use config::GameConfig;
use sim::Simulation;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║                         Skylane                           ║");
    println!("╠══════════════════════════════════════════════════════════╣");
    println!("║  CONTROLS:                                                ║");
    println!("║    W/S - Throttle up/down   │  A/D - Bank and turn        ║");
    println!("║    R   - Reset to spawn                                   ║");
    println!("╠══════════════════════════════════════════════════════════╣");
    println!("║  FEATURES:                                                ║");
    println!("║    - Arcade lift/drag flight model with stall behavior    ║");
    println!("║    - Procedurally generated city with day/night cycle     ║");
    println!("║    - Fixed-timestep physics under a variable frame rate   ║");
    println!("╚══════════════════════════════════════════════════════════╝");

    log::info!("Starting Skylane");

    let config = GameConfig::load();
    if !std::path::Path::new("skylane.ron").exists() {
        // First run: write the defaults out so they can be tweaked.
        config.save();
    }
    let demo_seconds = config.demo_seconds;
    let mut sim = Simulation::new(config);
    log::info!(
        "city: {} buildings, {} streetlights, {} road pads",
        sim.city().buildings.len(),
        sim.city().streetlights.len(),
        sim.city().roads.len()
    );
    let mut time = Time::new();

    // Headless demo: hold full throttle and report telemetry once a second.
    // A windowed frontend would forward real events here instead.
    sim.input_mut()
        .process_keyboard(KeyCode::KeyW, ElementState::Pressed);

    let mut next_report = 1.0_f32;
    while time.elapsed_seconds() < demo_seconds {
        time.update();
        sim.tick(time.delta_seconds());

        if time.elapsed_seconds() >= next_report {
            next_report += 1.0;
            let hud = sim.hud();
            let pose = sim.camera_pose();
            let light = sim.lighting();
            log::info!(
                "t={:5.1}s  thr {:3.0}%  {:5.1} kt  {:6.1} ft  hdg {:6.1}°{}{}",
                time.elapsed_seconds(),
                hud.throttle_percent,
                hud.speed_knots,
                hud.altitude_feet,
                hud.heading.to_degrees(),
                if hud.stall_warning { "  STALL" } else { "" },
                if hud.hard_impact { "  IMPACT" } else { "" },
            );
            log::debug!(
                "camera at {:?}, sun intensity {:.2} ({} impacts this tick)",
                pose.position,
                light.sun_intensity,
                sim.impacts().len()
            );
        }

        sim.input_mut().begin_frame();
        thread::sleep(Duration::from_millis(16));
    }

    log::info!(
        "demo finished after {:.1}s over {} frames",
        time.elapsed_seconds(),
        time.frame_count()
    );
    Ok(())
}
