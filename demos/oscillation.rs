use bz_oscillator::io::TrajectorySummary;
use bz_oscillator::sim;

fn main() {
    println!("=== BZ oscillation: a = 1000, b = 652 ===\n");

    let (a, b) = (1000.0, 652.0);
    let (x0, y0) = (a / 5.0, 1.0 + a * a / 25.0);

    let traj = match sim::integrate(x0, y0, a, b, 0.01, 10.0) {
        Ok(traj) => traj,
        Err(err) => {
            eprintln!("integration failed: {err}");
            return;
        }
    };
    let summary = TrajectorySummary::from_trajectory(&traj);

    println!("Samples:     {}", summary.samples);
    println!("x range:     {:?} .. {:?}", summary.x_min, summary.x_max);
    println!("y range:     {:?} .. {:?}", summary.y_min, summary.y_max);
    println!("x peaks:     {}", summary.peaks);
    if let Some(period) = summary.mean_period {
        println!("Mean period: {:.4}", period);
    }
    println!();

    // Every 100th sample
    println!("{:>7}  {:>12}  {:>14}", "t", "x", "y");
    for (t, x, y) in traj.samples().step_by(100) {
        println!("{:>7.2}  {:>12.6}  {:>14.6}", t, x, y);
    }
}
