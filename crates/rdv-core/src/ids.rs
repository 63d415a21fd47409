//! Strongly typed robot identifier.

use std::fmt;

/// Index of a robot, assigned densely from 0 in construction order.
///
/// The id doubles as the robot's fixed priority: **lower id = higher
/// priority**.  The coordinator processes robots in ascending id order and
/// earlier-processed robots win contested cells, so this ordering is
/// application logic, not an incidental iteration artifact.
///
/// The inner integer is `pub` to allow direct indexing into parallel `Vec`s
/// via `id.0 as usize`, but callers should prefer the `.index()` helper for
/// clarity.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RobotId(pub u32);

impl RobotId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RobotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RobotId({})", self.0)
    }
}

impl From<RobotId> for usize {
    #[inline(always)]
    fn from(id: RobotId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for RobotId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<RobotId, Self::Error> {
        u32::try_from(n).map(RobotId)
    }
}
