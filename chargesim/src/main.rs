use chargesim::{ScenarioConfig, Scenario};
use chargesim::{run_2d, bench_step};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Run this many steps without a window, then log a summary
    #[arg(long)]
    headless: Option<u64>,

    /// Time the step function for growing particle counts
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path).with_context(|| format!("failed to open {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn run_headless(mut scenario: Scenario, steps: u64) {
    scenario.run_steps(steps);

    let sim = &scenario.simulation;
    info!("{} frames, t = {:.3}, {} particles left", sim.frame(), sim.time(), sim.len());
    for p in sim.particles() {
        info!(
            "particle {}: x = ({:.3}, {:.3}), v = ({:.3}, {:.3})",
            p.id(),
            p.position().x(),
            p.position().y(),
            p.velocity().x(),
            p.velocity().y()
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        env_logger::init();
        bench_step()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;

    match args.headless {
        // Bevy installs its own logger, only the headless path needs one
        Some(steps) => {
            env_logger::init();
            let scenario = Scenario::build_scenario(scenario_cfg)?;
            run_headless(scenario, steps);
        }
        None => {
            let scenario = Scenario::build_scenario(scenario_cfg)?;
            run_2d(scenario);
        }
    }

    Ok(())
}
