use std::io::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dynamics::state::Params;
use crate::error::Result;
use crate::sim::Trajectory;

/// Summary statistics computed from one trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySummary {
    pub samples: usize,
    pub t_end: f64,
    // `None` once the series holds a non-finite sample.
    pub x_min: Option<f64>,
    pub x_max: Option<f64>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
    pub x_final: Option<f64>,
    pub y_final: Option<f64>,
    /// Strict local maxima of x(t).
    pub peaks: usize,
    /// Mean spacing between successive x peaks, if there are at least two.
    pub mean_period: Option<f64>,
    pub diverged: bool,
}

impl TrajectorySummary {
    pub fn from_trajectory(trajectory: &Trajectory) -> Self {
        let (t, x, y) = (trajectory.time(), trajectory.x(), trajectory.y());

        let (x_min, x_max) = range(x).unzip();
        let (y_min, y_max) = range(y).unzip();

        let peak_times: Vec<f64> = x
            .windows(3)
            .enumerate()
            .filter(|(_, w)| w[0] < w[1] && w[1] > w[2])
            .map(|(i, _)| t[i + 1])
            .collect();

        let mean_period = (peak_times.len() >= 2).then(|| {
            (peak_times[peak_times.len() - 1] - peak_times[0]) / (peak_times.len() - 1) as f64
        });

        let last = trajectory.final_state();

        TrajectorySummary {
            samples: trajectory.len(),
            t_end: t[t.len() - 1],
            x_min,
            x_max,
            y_min,
            y_max,
            x_final: finite(last.x),
            y_final: finite(last.y),
            peaks: peak_times.len(),
            mean_period,
            diverged: !trajectory.is_finite(),
        }
    }
}

/// `(min, max)` of a series, or `None` if any sample is non-finite.
fn range(v: &[f64]) -> Option<(f64, f64)> {
    v.iter().try_fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &s| {
        s.is_finite().then(|| (lo.min(s), hi.max(s)))
    })
}

fn finite(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}

#[derive(Serialize)]
struct Report<'a> {
    params: &'a Params,
    summary: &'a TrajectorySummary,
}

/// Write the summary for one parameter pair as pretty JSON.
pub fn write_summary<W: Write>(
    writer: &mut W,
    params: &Params,
    summary: &TrajectorySummary,
) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &Report { params, summary })?;
    writeln!(writer)?;
    Ok(())
}

/// Write summary JSON to a file.
pub fn write_summary_file(
    path: impl AsRef<Path>,
    params: &Params,
    summary: &TrajectorySummary,
) -> Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_summary(&mut file, params, summary)?;
    file.flush()?;
    Ok(())
}
