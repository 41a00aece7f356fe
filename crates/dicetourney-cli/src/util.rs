use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use dicetourney_engine::Roster;
use serde::Serialize;

use crate::schema::roster::RosterFile;

/// Write `value` as pretty JSON to `output_path`, or to stdout when no path
/// is given
pub fn save_json<T>(value: &T, output_path: Option<&Path>) -> anyhow::Result<()>
where
    T: Serialize,
{
    let Some(path) = output_path else {
        return write_json(io::stdout().lock(), value).context("Failed to write JSON to stdout");
    };
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    write_json(BufWriter::new(file), value)
        .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
    tracing::info!(output = %path.display(), "Wrote JSON");
    Ok(())
}

fn write_json<W, T>(mut writer: W, value: &T) -> io::Result<()>
where
    W: Write,
    T: Serialize,
{
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()
}

/// Read a roster file and rebuild the roster it describes
///
/// Fails if the file cannot be opened or parsed, or if it contains a roll
/// outside 1..=6
pub fn read_roster_file(path: &Path) -> anyhow::Result<Roster> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open roster file: {}", path.display()))?;
    let file: RosterFile = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse roster JSON file: {}", path.display()))?;
    let roster = file
        .to_roster()
        .with_context(|| format!("Invalid roster file: {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        participants = roster.len(),
        "Loaded roster"
    );
    Ok(roster)
}
