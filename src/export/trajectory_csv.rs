//! CSV export of trajectories and grids

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use serde::Serialize;

use crate::{error::Result, maze::Grid, types::TrajectoryRecord, Error};

/// One flattened CSV row; the column set is the wire contract with the
/// external plotting collaborator.
#[derive(Debug, Serialize)]
struct TrajectoryRow {
    episode: usize,
    step: usize,
    row: usize,
    col: usize,
}

/// Write visited positions to a CSV file with columns
/// `episode,step,row,col`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_trajectories<P: AsRef<Path>>(path: P, records: &[TrajectoryRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    for record in records {
        writer.serialize(TrajectoryRow {
            episode: record.episode_index,
            step: record.step_index,
            row: record.position.row,
            col: record.position.col,
        })?;
    }

    writer.flush()?;
    Ok(())
}

/// Write a grid to a CSV file in the wire encoding, one row per grid row,
/// no header.
pub fn write_grid_csv<P: AsRef<Path>>(path: P, grid: &Grid) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for row in grid.to_codes() {
        let line = row
            .iter()
            .map(|code| code.to_string())
            .collect::<Vec<_>>()
            .join(",");
        writeln!(writer, "{line}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Read a grid from a wire-encoded CSV file as written by
/// [`write_grid_csv`].
///
/// # Errors
///
/// Returns an error on unreadable files, malformed numbers, unknown cell
/// codes, ragged rows, or missing/duplicated start and goal markers.
pub fn read_grid_csv<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut codes: Vec<Vec<i8>> = Vec::new();
    for (row, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mut row_codes = Vec::new();
        for (col, token) in line.split(',').enumerate() {
            let token = token.trim();
            // Accept float formatting such as "-1.0"; numpy's savetxt
            // writes grids that way.
            let value = token
                .parse::<i8>()
                .or_else(|_| token.parse::<f64>().map(|v| v as i8))
                .map_err(|_| Error::InvalidGridToken {
                    token: token.to_string(),
                    row,
                    col,
                })?;
            row_codes.push(value);
        }
        codes.push(row_codes);
    }

    Grid::from_codes(&codes)
}
