//! Bouncing Balls headless driver
//!
//! Owns the clock the way an animation loop would: frames of `FRAME_DT`
//! feed an accumulator that is drained in fixed simulation steps.
//!
//! Usage: `bouncing-balls [CONFIG.json] [SECONDS]`

use std::process::ExitCode;

use bouncing_balls::consts::{FRAME_DT, MAX_SUBSTEPS};
use bouncing_balls::{SimConfig, Simulation};

/// Default simulated duration in seconds
const DEFAULT_SECONDS: f64 = 10.0;
/// Simulation step (twice the frame rate)
const SIM_DT: f64 = FRAME_DT / 2.0;

struct Driver {
    sim: Simulation,
    accumulator: f64,
}

impl Driver {
    fn new(sim: Simulation) -> Self {
        Self {
            sim,
            accumulator: 0.0,
        }
    }

    /// Run simulation steps for one rendered frame
    fn update(&mut self, frame_dt: f64) {
        self.accumulator += frame_dt.min(0.1);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.sim.advance(SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
    }
}

fn parse_args() -> Result<(SimConfig, f64), String> {
    let mut config = SimConfig::default();
    let mut seconds = DEFAULT_SECONDS;

    for arg in std::env::args().skip(1) {
        if let Ok(value) = arg.parse::<f64>() {
            if !(value.is_finite() && value >= 0.0) {
                return Err(format!("duration must be a non-negative number, got {arg}"));
            }
            seconds = value;
        } else {
            config = SimConfig::load(&arg).map_err(|e| format!("{arg}: {e}"))?;
        }
    }

    Ok((config, seconds))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (config, seconds) = match parse_args() {
        Ok(parsed) => parsed,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let sim = match Simulation::from_config(&config) {
        Ok(sim) => sim,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "Running {} balls for {seconds}s (start energy {})",
        sim.balls().len(),
        sim.start_energy()
    );

    let mut driver = Driver::new(sim);
    let frames = (seconds / FRAME_DT).round() as u64;
    for _ in 0..frames {
        driver.update(FRAME_DT);
    }

    let sim = &driver.sim;
    let monitor = sim.energy_monitor();
    log::info!(
        "Finished after {} steps: energy {} (baseline {}), error range [{}, {}]",
        sim.frame(),
        sim.total_energy(),
        sim.start_energy(),
        monitor.min_error(),
        monitor.max_error()
    );

    match sim.snapshot_json() {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
