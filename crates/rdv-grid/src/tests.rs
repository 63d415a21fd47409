//! Unit tests for rdv-grid.

use rdv_core::Pos;

use crate::{astar, Cell, Grid};

fn p(x: i32, y: i32) -> Pos {
    Pos::new(x, y)
}

/// Build a grid from `#`/`.` rows (top row first).
fn grid_from(rows: &[&str]) -> Grid {
    let mut grid = Grid::new(rows.len(), rows[0].len());
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            if ch == '#' {
                grid.set(p(x as i32, y as i32), Cell::Blocked);
            }
        }
    }
    grid
}

// ── Grid model ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid_tests {
    use super::*;

    #[test]
    fn bounds_checks() {
        let g = Grid::new(3, 4); // 3 rows, 4 cols
        assert!(g.in_bounds(p(0, 0)));
        assert!(g.in_bounds(p(3, 2)));
        assert!(!g.in_bounds(p(4, 2)));
        assert!(!g.in_bounds(p(3, 3)));
        assert!(!g.in_bounds(p(-1, 0)));
    }

    #[test]
    fn is_free_false_out_of_range() {
        let g = Grid::new(2, 2);
        assert!(g.is_free(p(1, 1)));
        assert!(!g.is_free(p(2, 0)));
        assert!(!g.is_free(p(0, -1)));
    }

    #[test]
    fn set_and_read_back() {
        let mut g = Grid::new(2, 2);
        g.set(p(1, 0), Cell::Blocked);
        assert_eq!(g.cell(p(1, 0)), Some(Cell::Blocked));
        assert!(!g.is_free(p(1, 0)));
        g.set(p(1, 0), Cell::Free);
        assert!(g.is_free(p(1, 0)));
    }

    #[test]
    fn out_of_range_set_ignored() {
        let mut g = Grid::new(2, 2);
        g.set(p(5, 5), Cell::Blocked);
        assert_eq!(g.blocked_cells().count(), 0);
    }

    #[test]
    fn neighbors_in_fixed_order() {
        let g = Grid::new(3, 3);
        let n: Vec<Pos> = g.neighbors4(p(1, 1)).collect();
        assert_eq!(n, vec![p(2, 1), p(0, 1), p(1, 2), p(1, 0)]);
    }

    #[test]
    fn neighbors_exclude_blocked_and_out_of_bounds() {
        let g = grid_from(&[
            ".#.", //
            "...", //
            ".#.",
        ]);
        let n: Vec<Pos> = g.neighbors4(p(1, 1)).collect();
        assert_eq!(n, vec![p(2, 1), p(0, 1)]);

        // Corner cell: only two candidates are in bounds at all.
        let n: Vec<Pos> = g.neighbors4(p(0, 0)).collect();
        assert_eq!(n, vec![p(0, 1)]); // (1,0) is blocked
    }

    #[test]
    fn adjacent_includes_blocked() {
        let g = grid_from(&[
            ".#.", //
            "...", //
            "...",
        ]);
        let n: Vec<Pos> = g.adjacent4(p(1, 1)).collect();
        assert_eq!(n, vec![p(2, 1), p(0, 1), p(1, 2), p(1, 0)]);
    }

    #[test]
    fn display_renders_rows() {
        let g = grid_from(&["..#", "..."]);
        assert_eq!(g.to_string(), "..#\n...\n");
    }
}

// ── Search engine ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod search_tests {
    use super::*;
    use crate::{Euclidean, Heuristic, Manhattan};

    /// Every consecutive pair is 4-adjacent and every entry is free.
    fn assert_valid_path(path: &[Pos], grid: &Grid) {
        for pair in path.windows(2) {
            assert_eq!(
                pair[0].manhattan(pair[1]),
                1,
                "{} -> {} not adjacent",
                pair[0],
                pair[1]
            );
        }
        for &pos in path {
            assert!(grid.is_free(pos), "{pos} not free");
        }
    }

    #[test]
    fn empty_grid_path_length_is_manhattan_plus_one() {
        let g = Grid::new(6, 6);
        for (start, goal) in [(p(0, 0), p(5, 5)), (p(2, 1), p(2, 4)), (p(4, 0), p(0, 3))] {
            let path = astar(&g, start, goal, &Manhattan).unwrap();
            assert_eq!(path.len() as u32, start.manhattan(goal) + 1);
            assert_eq!(path[0], start);
            assert_eq!(*path.last().unwrap(), goal);
            assert_valid_path(&path, &g);
        }
    }

    #[test]
    fn start_equals_goal_is_singleton() {
        let g = Grid::new(3, 3);
        assert_eq!(astar(&g, p(1, 1), p(1, 1), &Manhattan), Some(vec![p(1, 1)]));
    }

    #[test]
    fn detour_around_wall_is_optimal() {
        // Vertical wall with a gap at the bottom.
        let g = grid_from(&[
            "..#..", //
            "..#..", //
            "..#..", //
            "..#..", //
            ".....",
        ]);
        let path = astar(&g, p(0, 0), p(4, 0), &Manhattan).unwrap();
        assert_valid_path(&path, &g);
        // Down 4, across 4, up 4 = 12 steps, 13 cells.
        assert_eq!(path.len(), 13);
    }

    #[test]
    fn euclidean_also_finds_optimal_path() {
        let g = grid_from(&[
            "..#..", //
            "..#..", //
            ".....", //
        ]);
        let manhattan = astar(&g, p(0, 0), p(4, 0), &Manhattan).unwrap();
        let euclidean = astar(&g, p(0, 0), p(4, 0), &Euclidean).unwrap();
        assert_valid_path(&euclidean, &g);
        assert_eq!(manhattan.len(), euclidean.len());
    }

    #[test]
    fn enclosed_goal_returns_none() {
        let g = grid_from(&[
            ".....", //
            ".###.", //
            ".#.#.", //
            ".###.", //
            ".....",
        ]);
        assert_eq!(astar(&g, p(0, 0), p(2, 2), &Manhattan), None);
    }

    #[test]
    fn blocked_goal_exhausts_to_none() {
        let mut g = Grid::new(3, 3);
        g.set(p(2, 2), Cell::Blocked);
        assert_eq!(astar(&g, p(0, 0), p(2, 2), &Manhattan), None);
    }

    #[test]
    fn blocked_start_still_expands() {
        // The start cell itself is blocked; the search must still reach the
        // goal through the start's free neighbors.
        let mut g = Grid::new(3, 3);
        g.set(p(0, 0), Cell::Blocked);
        let path = astar(&g, p(0, 0), p(2, 0), &Manhattan).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], p(0, 0));
    }

    #[test]
    fn out_of_bounds_start_returns_none() {
        let g = Grid::new(3, 3);
        assert_eq!(astar(&g, p(-1, 0), p(2, 2), &Manhattan), None);
    }

    #[test]
    fn deterministic_across_runs() {
        let g = grid_from(&[
            ".....", //
            ".#.#.", //
            ".....", //
        ]);
        let a = astar(&g, p(0, 0), p(4, 2), &Manhattan).unwrap();
        let b = astar(&g, p(0, 0), p(4, 2), &Manhattan).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn heuristic_estimates() {
        use crate::STEP_COST;
        assert_eq!(Manhattan.estimate(p(0, 0), p(3, 4)), 7 * STEP_COST);
        let e = Euclidean.estimate(p(0, 0), p(3, 4));
        assert_eq!(e, 5 * STEP_COST);
        // Euclidean never exceeds Manhattan.
        assert!(Euclidean.estimate(p(0, 0), p(2, 2)) <= Manhattan.estimate(p(0, 0), p(2, 2)));
    }
}

// ── Scenario loader ───────────────────────────────────────────────────────────

#[cfg(test)]
mod loader_tests {
    use super::*;
    use crate::{load_scenario_reader, GridError};
    use std::io::Cursor;

    const GOOD: &str = "\
3 4
2
0 0
3 2
2 1
0000
0110
0000
";

    #[test]
    fn loads_valid_scenario() {
        let s = load_scenario_reader(Cursor::new(GOOD)).unwrap();
        assert_eq!(s.grid.rows, 3);
        assert_eq!(s.grid.cols, 4);
        assert_eq!(s.starts, vec![p(0, 0), p(3, 2)]);
        assert_eq!(s.rendezvous, p(2, 1));
        assert!(!s.grid.is_free(p(1, 1)));
        assert!(!s.grid.is_free(p(2, 1)));
        assert!(s.grid.is_free(p(0, 1)));
    }

    #[test]
    fn comments_and_blank_lines_skipped() {
        let text = "\
// a scenario
2 2  // dimensions

1
0 0
1 1
00
00
";
        let s = load_scenario_reader(Cursor::new(text)).unwrap();
        assert_eq!(s.starts.len(), 1);
        assert_eq!(s.rendezvous, p(1, 1));
    }

    #[test]
    fn robot_count_mismatch_rejected() {
        // Declares 3 robots but only one position line fits before EOF.
        let text = "3 4\n3\n0 0\n1 1\n";
        let err = load_scenario_reader(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, GridError::RobotCount { declared: 3, .. }), "{err}");
    }

    #[test]
    fn grid_row_mismatch_rejected() {
        let text = "3 4\n1\n0 0\n2 1\n0000\n0000\n";
        let err = load_scenario_reader(Cursor::new(text)).unwrap_err();
        assert!(
            matches!(err, GridError::GridRows { declared: 3, got: 2 }),
            "{err}"
        );
    }

    #[test]
    fn ragged_row_rejected() {
        let text = "2 4\n1\n0 0\n2 1\n0000\n000\n";
        let err = load_scenario_reader(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, GridError::RaggedRow { row: 1, .. }), "{err}");
    }

    #[test]
    fn bad_cell_char_rejected() {
        let text = "1 3\n1\n0 0\n2 0\n0x0\n";
        let err = load_scenario_reader(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, GridError::BadCell { ch: 'x', .. }), "{err}");
    }

    #[test]
    fn zero_dimensions_rejected() {
        let text = "0 4\n1\n0 0\n2 1\n0000\n";
        let err = load_scenario_reader(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, GridError::Parse(_)), "{err}");
    }

    #[test]
    fn malformed_number_rejected() {
        let text = "3 four\n1\n0 0\n2 1\n0000\n0000\n0000\n";
        let err = load_scenario_reader(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, GridError::Parse(_)), "{err}");
    }
}
