use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::Level;

use bz_oscillator::config::AppConfig;
use bz_oscillator::io::{csv, json, TrajectorySummary};
use bz_oscillator::sim::{self, linspace, RunConfig, RunResult};
use bz_oscillator::types::SimConfig;

/// Belousov-Zhabotinsky oscillator, integrated with fixed-step RK4
#[derive(Parser, Debug)]
#[command(name = "bz-oscillator", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// JSON file with `sim` and `run` sections
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Step size
    #[arg(long, global = true)]
    h: Option<f64>,

    /// Time horizon
    #[arg(long, global = true)]
    t_max: Option<f64>,

    /// Write samples as CSV (sweeps append the run number)
    #[arg(long, global = true)]
    csv: Option<PathBuf>,

    /// Write the summary as JSON (sweeps append the run number)
    #[arg(long, global = true)]
    json: Option<PathBuf>,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// One parameter pair
    Single {
        #[arg(long, default_value_t = 1000.0)]
        a: f64,
        #[arg(long, default_value_t = 652.0)]
        b: f64,
    },
    /// Evenly spaced parameter pairs, zipped by index
    Sweep {
        #[arg(long, default_value_t = 100.0)]
        a_start: f64,
        #[arg(long, default_value_t = 1000.0)]
        a_end: f64,
        #[arg(long, default_value_t = 100.0)]
        b_start: f64,
        #[arg(long, default_value_t = 650.0)]
        b_end: f64,
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let config = resolve_config(&cli)?;
    let results = sim::run(&config.run, &config.sim)?;
    let is_sweep = results.len() > 1;

    println!();
    println!("====================================================================");
    println!("  BZ OSCILLATOR — fixed-step RK4");
    println!("====================================================================");
    println!(
        "  h = {}   t_max = {}   steps = {}   runs = {}",
        config.sim.h,
        config.sim.t_max,
        config.sim.steps(),
        results.len()
    );

    for result in &results {
        if is_sweep && result.index % 2 == 0 {
            println!();
            println!(
                "  ── Figure {} ─────────────────────────────────────────────────────",
                result.index / 2 + 1
            );
        }

        let summary = TrajectorySummary::from_trajectory(&result.trajectory);
        print_run(result, &summary, &config.sim);

        if let Some(path) = &cli.csv {
            let path = output_path(path, result.index, is_sweep);
            csv::write_trajectory_file(&path, &result.trajectory)
                .with_context(|| format!("writing trajectory CSV to {}", path.display()))?;
        }
        if let Some(path) = &cli.json {
            let path = output_path(path, result.index, is_sweep);
            json::write_summary_file(&path, &result.params, &summary)
                .with_context(|| format!("writing summary JSON to {}", path.display()))?;
        }
    }

    println!("====================================================================");
    println!();
    Ok(())
}

/// Config file (or defaults), then subcommand, then step/horizon flags.
fn resolve_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };

    match cli.command {
        Some(Command::Single { a, b }) => config.run = RunConfig::SingleRun { a, b },
        Some(Command::Sweep {
            a_start,
            a_end,
            b_start,
            b_end,
            count,
        }) => {
            config.run = RunConfig::Sweep {
                a_values: linspace(a_start, a_end, count),
                b_values: linspace(b_start, b_end, count),
            }
        }
        None => {}
    }

    if let Some(h) = cli.h {
        config.sim.h = h;
    }
    if let Some(t_max) = cli.t_max {
        config.sim.t_max = t_max;
    }
    Ok(config)
}

/// `out.csv` becomes `out_3.csv` for the third run of a sweep.
fn output_path(path: &Path, index: usize, is_sweep: bool) -> PathBuf {
    if !is_sweep {
        return path.to_path_buf();
    }
    let stem = path.file_stem().map_or_else(|| "run".into(), |s| s.to_string_lossy());
    let name = match path.extension() {
        Some(ext) => format!("{}_{}.{}", stem, index + 1, ext.to_string_lossy()),
        None => format!("{}_{}", stem, index + 1),
    };
    path.with_file_name(name)
}

fn print_run(result: &RunResult, summary: &TrajectorySummary, config: &SimConfig) {
    let p = result.params;
    let traj = &result.trajectory;
    let start = traj.initial_state();

    println!();
    println!("  Run {}: a = {:.1}, b = {:.1}", result.index + 1, p.a, p.b);
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Initial:     x0 = {:>12.4}    y0 = {:>14.4}", start.x, start.y);
    println!(
        "  Range x:     {:>12} .. {:<12}",
        show(summary.x_min),
        show(summary.x_max)
    );
    println!(
        "  Range y:     {:>12} .. {:<12}",
        show(summary.y_min),
        show(summary.y_max)
    );
    println!(
        "  Final:       x = {:>12}    y = {:>14}   (t = {:.2})",
        show(summary.x_final),
        show(summary.y_final),
        summary.t_end
    );
    match summary.mean_period {
        Some(period) => println!(
            "  Peaks:       {:>4}    mean period {:.4}",
            summary.peaks, period
        ),
        None => println!("  Peaks:       {:>4}", summary.peaks),
    }
    if summary.diverged {
        println!("  WARNING: trajectory diverged (h = {})", config.h);
    }

    println!();
    println!("  {:>9}  {:>14}  {:>16}", "t", "x(t)", "y(t)");
    println!("  {}", "─".repeat(44));

    let sample_interval = (traj.len() / 20).max(1);
    for (i, (t, x, y)) in traj.samples().enumerate() {
        if i % sample_interval == 0 || i == traj.len() - 1 {
            println!("  {:>9.3}  {:>14.6}  {:>16.6}", t, x, y);
        }
    }
}

/// Four decimals, or `n/a` for a value lost to divergence.
fn show(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.4}", v))
}
