use std::io::{self, Write};
use std::path::Path;

use crate::sim::Trajectory;

/// Write trajectory samples as CSV.
///
/// Columns: t, x, y
pub fn write_trajectory<W: Write>(writer: &mut W, trajectory: &Trajectory) -> io::Result<()> {
    writeln!(writer, "t,x,y")?;

    for (t, x, y) in trajectory.samples() {
        writeln!(writer, "{:.6},{:.9},{:.9}", t, x, y)?;
    }

    Ok(())
}

/// Write trajectory to a CSV file at the given path.
pub fn write_trajectory_file(path: impl AsRef<Path>, trajectory: &Trajectory) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_trajectory(&mut file, trajectory)?;
    file.flush()
}
