use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::Local;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{info, warn};

use innsim_config::InnsimConfig;
use innsim_core::catalog::RoomCatalog;
use innsim_core::clock::SimulationClock;
use innsim_core::stats::CategoryStatsMode;
use innsim_simulator::sink::{ConsoleSink, NullSink, TracingSink};
use innsim_simulator::{OccupancyReport, Scenario, ScriptedEventDriver, Simulator};
use innsim_telemetry::{EventLogger, MetricsRecorder};

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Configuration file; defaults to config/innsim.yaml when present
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one simulation and print its events and statistics
    Simulate(SimulateArgs),
    /// Run many seeded simulations and check inventory accounting
    Sweep(SweepArgs),
    /// Print the room catalog
    Catalog(CatalogArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatsModeArg {
    Literal,
    ByCategory,
}

impl From<StatsModeArg> for CategoryStatsMode {
    fn from(arg: StatsModeArg) -> Self {
        match arg {
            StatsModeArg::Literal => CategoryStatsMode::Literal,
            StatsModeArg::ByCategory => CategoryStatsMode::ByCategory,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Rooms per category
    #[arg(long)]
    pub rooms: Option<u32>,
    /// Simulated days
    #[arg(long)]
    pub days: Option<u32>,
    #[arg(long)]
    pub seed: Option<u64>,
    /// How per-category occupancy is computed
    #[arg(long, value_enum)]
    pub category_stats: Option<StatsModeArg>,
    /// Save the executed ticks as a scenario file
    #[arg(long)]
    pub record: Option<PathBuf>,
    /// Replay ticks from a scenario file instead of drawing them
    #[arg(long, conflicts_with = "record")]
    pub replay: Option<PathBuf>,
    /// Print the report as JSON instead of the event stream
    #[arg(long, default_value_t = false)]
    pub json: bool,
    /// Print Prometheus metrics after the run
    #[arg(long, default_value_t = false)]
    pub metrics: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SweepArgs {
    /// Seed of the first run; each following run adds one
    #[arg(long, default_value_t = 1)]
    pub seed: u64,
    #[arg(long, default_value_t = 100)]
    pub iterations: u64,
    #[arg(long)]
    pub rooms: Option<u32>,
    #[arg(long)]
    pub days: Option<u32>,
}

#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    #[arg(long)]
    pub rooms: Option<u32>,
}

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => InnsimConfig::load_from_path(path),
        None => InnsimConfig::load(),
    }
    .context("loading configuration")?;

    EventLogger::init(&config.telemetry.log_level);

    match cli.command {
        Commands::Simulate(args) => run_simulate(config, args),
        Commands::Sweep(args) => run_sweep(config, args),
        Commands::Catalog(args) => run_catalog(config, args),
    }
}

fn run_simulate(mut config: InnsimConfig, args: SimulateArgs) -> anyhow::Result<()> {
    let scenario = args
        .replay
        .as_ref()
        .map(Scenario::load_from_path)
        .transpose()
        .context("loading scenario")?;

    let sim = &mut config.simulation;
    if let Some(rooms) = args.rooms {
        sim.num_rooms = rooms;
    }
    if let Some(days) = args.days {
        sim.num_days = days;
    }
    if let Some(mode) = args.category_stats {
        sim.category_stats = mode.into();
    }
    sim.seed = args
        .seed
        .or_else(|| scenario.as_ref().and_then(|s| s.seed))
        .or(sim.seed);
    let start = scenario
        .as_ref()
        .and_then(|s| s.start)
        .or(sim.start)
        .unwrap_or_else(|| Local::now().naive_local());

    EventLogger::log_run_start(sim.num_rooms, sim.num_days, sim.seed);

    let mut simulator = Simulator::from_config(sim);
    let metrics = if args.metrics || config.telemetry.metrics {
        let metrics = MetricsRecorder::new()?;
        simulator = simulator.with_metrics(metrics.clone());
        Some(metrics)
    } else {
        None
    };

    let num_days = sim.num_days;
    let mut console = ConsoleSink::new(io::stdout().lock());
    let mut log = TracingSink;
    let sink: &mut dyn innsim_core::output::OutputSink = if args.json {
        &mut log
    } else {
        &mut console
    };

    let report = match scenario {
        Some(scenario) => {
            info!(ticks = scenario.ticks.len(), "Replaying scenario");
            let clock = SimulationClock::new(start, num_days)?;
            let mut driver = ScriptedEventDriver::new(clock, scenario);
            simulator.run_with_driver(&mut driver, num_days, sink)?
        }
        None => simulator.run(start, num_days, sink)?,
    };

    let exposition = metrics.map(|m| m.gather_metrics()).transpose()?;
    write_run_output(
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        &report,
        args.json,
        exposition.as_deref(),
    )?;

    if let Some(path) = args.record {
        Scenario::record(sim.seed, start, simulator.history())
            .save_to_path(&path)
            .with_context(|| format!("saving scenario to {}", path.display()))?;
        info!(path = %path.display(), "Scenario recorded");
    }
    Ok(())
}

/// Writes the JSON report and the metrics exposition. With `json` set,
/// stdout carries only the JSON document and metrics go to `err`.
fn write_run_output<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    report: &OccupancyReport,
    json: bool,
    metrics: Option<&str>,
) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
    }
    if let Some(text) = metrics {
        if json {
            write!(err, "{text}")?;
        } else {
            write!(out, "{text}")?;
        }
    }
    Ok(())
}

fn run_sweep(config: InnsimConfig, args: SweepArgs) -> anyhow::Result<()> {
    let num_rooms = args.rooms.unwrap_or(config.simulation.num_rooms);
    let num_days = args.days.unwrap_or(config.simulation.num_days);
    let start = config
        .simulation
        .start
        .unwrap_or_else(|| Local::now().naive_local());

    info!(seed = args.seed, iterations = args.iterations, "Starting sweep");

    let mut unavailable = 0u64;
    for offset in 0..args.iterations {
        let seed = args.seed.wrapping_add(offset);
        let mut simulator = Simulator::seeded(num_rooms, Some(seed))
            .with_category_stats(config.simulation.category_stats);
        let report = simulator.run(start, num_days, &mut NullSink)?;

        for room in simulator.hotel().catalog().iter() {
            let confirmed = simulator.stats().confirmed_for(room.category());
            if room.reserved() != confirmed {
                bail!(
                    "seed {seed}: {} has {} rooms reserved but {} confirmed bookings",
                    room.category(),
                    room.reserved(),
                    confirmed
                );
            }
        }

        match &report.overall {
            Ok(percent) => info!(seed, occupancy = %percent, "Run complete"),
            Err(err) => {
                unavailable += 1;
                warn!(seed, "Run complete: {err}");
            }
        }
    }

    info!(
        runs = args.iterations,
        unavailable, "Sweep finished, inventory accounting consistent"
    );
    Ok(())
}

fn run_catalog(config: InnsimConfig, args: CatalogArgs) -> anyhow::Result<()> {
    let catalog = RoomCatalog::new(args.rooms.unwrap_or(config.simulation.num_rooms));
    let mut out = io::stdout().lock();
    for room in catalog.iter() {
        writeln!(out, "{room}")?;
    }
    Ok(())
}
