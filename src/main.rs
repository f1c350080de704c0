use gravsim::{bench_gravity, bench_step, bench_step_curve};
use gravsim::{load_scenario, step, Scenario};
use gravsim::{run_2d, run_3d};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file name, resolved under the `scenarios/` directory
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Run this many ticks without a window and print the final state
    #[arg(long)]
    steps: Option<u64>,

    /// Run the benchmark sweeps instead of the viewer
    #[arg(long)]
    bench: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_step();
        bench_step_curve();
        return Ok(());
    }

    let path = scenario_path(&args.file_name);
    let cfg = load_scenario(&path)
        .with_context(|| format!("loading scenario {}", path.display()))?;
    let three_d = cfg.visual.three_d;
    let mut scenario = Scenario::build(&cfg)?;

    if let Some(ticks) = args.steps {
        run_headless(&mut scenario, ticks);
        return Ok(());
    }

    if three_d {
        run_3d(scenario, path);
    } else {
        run_2d(scenario, path);
    }

    Ok(())
}

/// Advance the scenario without a window and print the final body states.
fn run_headless(scenario: &mut Scenario, ticks: u64) {
    let Scenario {
        system,
        parameters,
        forces,
        jitter,
        styles,
        ..
    } = scenario;

    let dt = parameters.h0;
    for _ in 0..ticks {
        step(system, forces, parameters, jitter, dt);
    }

    info!("ran {} ticks, t = {:.3}", ticks, system.t);
    for (body, style) in system.bodies().iter().zip(styles.iter()) {
        println!(
            "{:<10} x = ({:+.4}, {:+.4}, {:+.4})  v = ({:+.4}, {:+.4}, {:+.4})",
            style.name, body.x.x, body.x.y, body.x.z, body.v.x, body.v.y, body.v.z,
        );
    }
}
