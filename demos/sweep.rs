use bz_oscillator::io::TrajectorySummary;
use bz_oscillator::sim::{self, RunConfig};
use bz_oscillator::types::SimConfig;

fn main() {
    let sweep = RunConfig::default_sweep();
    let config = SimConfig::default();

    let runs = match sim::run(&sweep, &config) {
        Ok(runs) => runs,
        Err(err) => {
            eprintln!("sweep failed: {err}");
            return;
        }
    };

    println!("=== Parameter sweep ({} runs) ===\n", runs.len());
    println!(
        "{:>4}  {:>8}  {:>8}  {:>10}  {:>10}  {:>6}",
        "run", "a", "b", "x_min", "x_max", "peaks"
    );
    for run in &runs {
        let s = TrajectorySummary::from_trajectory(&run.trajectory);
        println!(
            "{:>4}  {:>8.1}  {:>8.1}  {:>10.4}  {:>10.4}  {:>6}",
            run.index + 1,
            run.params.a,
            run.params.b,
            s.x_min.unwrap_or(f64::NAN),
            s.x_max.unwrap_or(f64::NAN),
            s.peaks
        );
    }
}
