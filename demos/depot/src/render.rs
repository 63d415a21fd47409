//! Console frame rendering.

use rdv_agent::Robot;
use rdv_core::Pos;
use rdv_grid::{Cell, Grid};

/// Render one frame: free cells `.`, obstacles `#`, the rendezvous `X`, and
/// each robot as the last digit of its id.  When robots co-occupy a cell the
/// lowest id is drawn.
pub fn render_frame(truth: &Grid, robots: &[Robot], rendezvous: Pos) -> String {
    let mut out = String::with_capacity((truth.cols + 1) * truth.rows);
    for y in 0..truth.rows {
        for x in 0..truth.cols {
            let pos = Pos::new(x as i32, y as i32);
            let ch = if let Some(robot) = robots.iter().find(|r| r.position == pos) {
                char::from_digit(robot.id.0 % 10, 10).unwrap_or('R')
            } else if pos == rendezvous {
                'X'
            } else {
                match truth.cell(pos) {
                    Some(Cell::Blocked) => '#',
                    _ => '.',
                }
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
