//! Plain data row types written by output backends.

use rdv_agent::Robot;

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick: u64,
    /// Robots still working toward the rendezvous at tick end.
    pub active_robots: u64,
    /// Robots that have reached the rendezvous.
    pub finished_robots: u64,
}

/// End-of-run statistics for one robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobotStatsRow {
    pub robot_id: u32,
    pub x: i32,
    pub y: i32,
    pub finished: bool,
    pub steps_taken: u64,
    pub replans: u64,
    pub obstacles_shared: u64,
    pub obstacles_received: u64,
}

impl RobotStatsRow {
    pub fn from_robot(robot: &Robot) -> Self {
        Self {
            robot_id: robot.id.0,
            x: robot.position.x,
            y: robot.position.y,
            finished: robot.finished,
            steps_taken: robot.steps_taken,
            replans: robot.replans,
            obstacles_shared: robot.obstacles_shared,
            obstacles_received: robot.obstacles_received,
        }
    }
}

/// One visited cell in a robot's historical trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceRow {
    pub robot_id: u32,
    /// Zero-based index into the trace; 0 is the starting cell.
    pub seq: u64,
    pub x: i32,
    pub y: i32,
}
