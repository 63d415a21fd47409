//! depot — console demo for the rust_rdv multi-robot rendezvous simulation.
//!
//! Three robots navigate a shelving-lined depot floor to a common charging
//! bay, discovering the layout's choke points as they go.  Pass a scenario
//! file path as the first argument to run your own layout; the embedded
//! floor plan is used otherwise.
//!
//! Writes `tick_summaries.csv`, `robot_stats.csv`, `robot_traces.csv`, and
//! `metrics.log` into `./output`.

mod render;

use std::io::Cursor;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use rdv_agent::Robot;
use rdv_core::{Pos, RobotId, SimConfig, Tick};
use rdv_grid::{load_scenario, load_scenario_reader, Grid, Manhattan, Scenario};
use rdv_output::{CsvWriter, MetricsLog, OutputWriter, SimOutputObserver};
use rdv_sim::{RunReport, SimBuilder, SimObserver};

use render::render_frame;

// ── Embedded scenario ─────────────────────────────────────────────────────────

/// Depot floor: 8 x 12 cells, three robots meeting at the charging bay.
const FLOOR_PLAN: &str = "\
// depot floor
8 12
3
0 0    // robot 0: inbound dock
11 0   // robot 1: outbound dock
0 7    // robot 2: staging area
6 4    // charging bay
000000000000
001111110000
000000010000
011110010010
000000000010
010011110010
010000000000
000000000000
";

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints frames and conflict events to the console while forwarding every
/// hook to the CSV output observer.
struct DepotObserver<W: OutputWriter> {
    truth: Grid,
    rendezvous: Pos,
    output: SimOutputObserver<W>,
}

impl<W: OutputWriter> SimObserver for DepotObserver<W> {
    fn on_conflict(&mut self, tick: Tick, robot: RobotId, cell: Pos, waits: u32) {
        println!("{tick}: {robot} waiting due to conflict at {cell} (wait count: {waits})");
    }

    fn on_forced_replan(&mut self, tick: Tick, robot: RobotId) {
        println!("{tick}: {robot} forcing re-plan after waiting");
    }

    fn on_tick_end(&mut self, tick: Tick, robots: &[Robot]) {
        println!("-- {tick} --");
        print!("{}", render_frame(&self.truth, robots, self.rendezvous));
        self.output.on_tick_end(tick, robots);
    }

    fn on_sim_end(&mut self, report: &RunReport, robots: &[Robot]) {
        self.output.on_sim_end(report, robots);
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let scenario = match std::env::args().nth(1) {
        Some(path) => load_scenario(Path::new(&path))?,
        None => load_scenario_reader(Cursor::new(FLOOR_PLAN))?,
    };
    print_scenario(&scenario);

    let output_dir = Path::new("output");
    std::fs::create_dir_all(output_dir)?;

    let config = SimConfig::default();
    let mut sim = SimBuilder::from_scenario(config, scenario, Manhattan).build()?;

    let mut observer = DepotObserver {
        truth: sim.truth.clone(),
        rendezvous: sim.rendezvous,
        output: SimOutputObserver::new(CsvWriter::new(output_dir)?),
    };
    let report = sim.run(&mut observer);
    if let Some(e) = observer.output.take_error() {
        eprintln!("output error: {e}");
    }

    print_summary(&report, &sim.robots);
    write_metrics(&output_dir.join("metrics.log"), &report, &sim.robots)?;
    Ok(())
}

fn print_scenario(scenario: &Scenario) {
    println!("Environment loaded:");
    println!("  dimensions: {} rows x {} cols", scenario.grid.rows, scenario.grid.cols);
    println!("  rendezvous: {}", scenario.rendezvous);
    for (i, start) in scenario.starts.iter().enumerate() {
        println!("  robot {i}:    {start}");
    }
    println!("  obstacles:  {}", scenario.grid.blocked_cells().count());
}

fn print_summary(report: &RunReport, robots: &[Robot]) {
    let outcome = if report.completed { "completed" } else { "timed out" };
    println!(
        "Simulation {outcome} after {} ticks ({:.2} ms).",
        report.ticks_executed,
        report.elapsed.as_secs_f64() * 1e3,
    );
    for robot in robots {
        println!(
            "  {}: steps {}, re-plans {}, shared {}, received {}",
            robot.id, robot.steps_taken, robot.replans, robot.obstacles_shared, robot.obstacles_received,
        );
    }
}

fn write_metrics(path: &Path, report: &RunReport, robots: &[Robot]) -> Result<()> {
    let log = MetricsLog::new(path);

    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    log.log(&[("Simulation Run", format!("unix {stamp}"))])?;

    log.log(&[
        ("Total Simulation Ticks", report.ticks_executed.to_string()),
        (
            "Total Execution Time (sec)",
            format!("{:.2}", report.elapsed.as_secs_f64()),
        ),
    ])?;

    for robot in robots {
        let header = format!("Robot {} Stats", robot.id.0);
        log.log(&[
            (header.as_str(), String::new()),
            ("Steps Taken", robot.steps_taken.to_string()),
            ("Replans", robot.replans.to_string()),
        ])?;
    }
    Ok(())
}
