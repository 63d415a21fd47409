//! Plain-text scenario loader.
//!
//! # File format
//!
//! ```text
//! <rows> <cols>
//! <number_of_robots>
//! <robot_x> <robot_y>          // one line per robot
//! <rendezvous_x> <rendezvous_y>
//! <grid row>                   // `rows` lines of '0' (free) / '1' (blocked)
//! ```
//!
//! `//` starts a comment (whole-line or trailing); blank lines are skipped.
//! The first grid line is row `y = 0`.
//!
//! Validation is fatal at load time: malformed numbers, a robot count that
//! does not match the listed positions, a grid whose row count does not
//! match the declared dimensions, ragged rows, and unknown cell characters
//! all fail before any simulation state exists.

use std::io::Read;
use std::path::Path;

use rdv_core::Pos;

use crate::{Cell, Grid, GridError, GridResult};

// ── Scenario ──────────────────────────────────────────────────────────────────

/// A fully validated environment description: the ground-truth grid, the
/// common rendezvous cell, and one starting position per robot.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub grid: Grid,
    pub rendezvous: Pos,
    pub starts: Vec<Pos>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a scenario from a file.
pub fn load_scenario(path: &Path) -> GridResult<Scenario> {
    let file = std::fs::File::open(path)?;
    load_scenario_reader(file)
}

/// Like [`load_scenario`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded scenario text.
pub fn load_scenario_reader<R: Read>(mut reader: R) -> GridResult<Scenario> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_scenario(&text)
}

// ── Parsing ───────────────────────────────────────────────────────────────────

fn parse_scenario(text: &str) -> GridResult<Scenario> {
    // Strip comments and blank lines up front; everything below indexes into
    // this cleaned view.
    let lines: Vec<&str> = text
        .lines()
        .map(|l| l.split("//").next().unwrap_or("").trim())
        .filter(|l| !l.is_empty())
        .collect();

    if lines.len() < 4 {
        return Err(GridError::Parse(
            "scenario must contain dimensions, robot count, positions, a rendezvous point, and grid rows".into(),
        ));
    }

    let (rows, cols) = parse_dimensions(lines[0])?;
    let robot_count = lines[1]
        .parse::<usize>()
        .map_err(|_| GridError::Parse(format!("invalid robot count {:?}", lines[1])))?;

    // Positions + rendezvous follow; anything missing here is a robot-count
    // mismatch, not a generic truncation.
    let body = &lines[2..];
    if body.len() < robot_count + 1 {
        return Err(GridError::RobotCount {
            declared: robot_count,
            got: body.len().saturating_sub(1),
        });
    }

    let starts = body[..robot_count]
        .iter()
        .map(|l| parse_pos(l))
        .collect::<GridResult<Vec<Pos>>>()?;
    let rendezvous = parse_pos(body[robot_count])?;

    let grid_lines = &body[robot_count + 1..];
    if grid_lines.len() != rows {
        return Err(GridError::GridRows {
            declared: rows,
            got: grid_lines.len(),
        });
    }

    let mut grid = Grid::new(rows, cols);
    for (y, line) in grid_lines.iter().enumerate() {
        let width = line.chars().count();
        if width != cols {
            return Err(GridError::RaggedRow {
                row: y,
                expected: cols,
                got: width,
            });
        }
        for (x, ch) in line.chars().enumerate() {
            match ch {
                '0' => {}
                '1' => grid.set(Pos::new(x as i32, y as i32), Cell::Blocked),
                _ => return Err(GridError::BadCell { row: y, ch }),
            }
        }
    }

    Ok(Scenario {
        grid,
        rendezvous,
        starts,
    })
}

fn parse_dimensions(line: &str) -> GridResult<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let rows = parse_field::<usize>(&mut parts, "grid rows")?;
    let cols = parse_field::<usize>(&mut parts, "grid cols")?;
    if rows == 0 || cols == 0 {
        return Err(GridError::Parse(format!(
            "grid dimensions must be positive, got {rows}x{cols}"
        )));
    }
    Ok((rows, cols))
}

fn parse_pos(line: &str) -> GridResult<Pos> {
    let mut parts = line.split_whitespace();
    let x = parse_field::<i32>(&mut parts, "x coordinate")?;
    let y = parse_field::<i32>(&mut parts, "y coordinate")?;
    Ok(Pos::new(x, y))
}

fn parse_field<'a, T: std::str::FromStr>(
    parts: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> GridResult<T> {
    let raw = parts
        .next()
        .ok_or_else(|| GridError::Parse(format!("missing {what}")))?;
    raw.parse::<T>()
        .map_err(|_| GridError::Parse(format!("invalid {what} {raw:?}")))
}
