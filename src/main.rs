use fallsim::{Scenario, ScenarioConfig};
use fallsim::{bench_update, run_vis};

use clap::Parser;
use anyhow::Result;
use simple_logger::SimpleLogger;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "bounce.yaml")]
    file_name: String,

    /// Time raw integration ticks instead of running the viewer
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    let args = Args::parse();

    if args.bench {
        bench_update();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let window = scenario_cfg.window.clone();

    // Any configuration precondition violation (non-positive mass, bad
    // elasticity, bad timestep) is fatal here, before any window exists
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    run_vis(scenario, window);

    Ok(())
}
