use astrosim::bench_step_curve;
use astrosim::{Scenario, ScenarioConfig};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, Level};

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "astrosim", about = "Discrete gravity simulation of stars and planets")]
struct Args {
    /// Number of steps to simulate (overrides the scenario file)
    steps: Option<u64>,

    /// YAML scenario, looked up under `scenarios/` unless the path exists as given.
    /// Without it, bodies are read from stdin as `<P|S> <name> <x> <y> <z>` records
    #[arg(short, long)]
    file: Option<String>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Time System::step over growing system sizes and print a CSV
    #[arg(long)]
    bench: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let given = PathBuf::from(file_name);
    if given.exists() {
        return given;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<Scenario> {
    let mut scenario = match &args.file {
        Some(file_name) => {
            let path = scenario_path(file_name);
            let file = File::open(&path)
                .with_context(|| format!("failed to open scenario {}", path.display()))?;
            let cfg = ScenarioConfig::from_reader(BufReader::new(file))
                .with_context(|| format!("failed to parse scenario {}", path.display()))?;
            info!(path = %path.display(), bodies = cfg.bodies.len(), "loaded scenario");
            Scenario::from_config(cfg)?
        }
        None => {
            if args.steps.is_none() {
                bail!("missing STEPS: give a step count or a scenario file");
            }
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read bodies from stdin")?;
            Scenario::from_text(&text, args.steps)?
        }
    };

    scenario.override_steps(args.steps);

    Ok(scenario)
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(io::stderr)
        .init();

    if args.bench {
        bench_step_curve()?;
        return Ok(());
    }

    let mut scenario = load_scenario(&args)?;
    scenario.run();

    print!("{}", scenario.system);

    Ok(())
}
