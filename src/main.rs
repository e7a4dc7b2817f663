use solsim::{Scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(&file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let scenario_cfg = load_scenario_from_yaml()?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    let energy_initial = scenario.ephemeris.total_energy(scenario.integrator.state());

    scenario.run()?;

    let state = scenario.integrator.state();
    let energy_final = scenario.ephemeris.total_energy(state);
    let steps = scenario
        .recorder
        .trajectories()
        .first()
        .map(|t| t.len())
        .unwrap_or(0);

    tracing::info!(
        steps,
        time = state.time,
        energy_drift = ((energy_final - energy_initial) / energy_initial).abs(),
        "integration finished"
    );

    for (body, q) in scenario.ephemeris.bodies().iter().zip(&state.positions) {
        tracing::info!("{:10} at [{:+.6e}, {:+.6e}, {:+.6e}] m", body.name, q.x, q.y, q.z);
    }

    Ok(())
}
