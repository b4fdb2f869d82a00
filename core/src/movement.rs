use serde::{Deserialize, Serialize};

use crate::*;

/// Outcome of asking to step in a direction
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Passage was open, the token now stands on these coordinates
    Moved(Coord2),
    /// A wall was in the way, nothing changed
    Blocked,
}

impl MoveOutcome {
    /// Whether this outcome changed the current position
    pub const fn has_update(self) -> bool {
        match self {
            Self::Moved(_) => true,
            Self::Blocked => false,
        }
    }

    /// Where the token stands after the move was attempted from `from`
    pub const fn destination(self, from: Coord2) -> Coord2 {
        match self {
            Self::Moved(to) => to,
            Self::Blocked => from,
        }
    }
}

/// Checks the wall bit of `cell` facing `direction` and resolves the step.
///
/// A walled side, including the grid boundary, is a silent no-op rather than an error.
pub fn validate_move(grid: &Grid, cell: &Cell, direction: Direction) -> MoveOutcome {
    if cell.has_wall(direction) {
        log::trace!("Blocked {:?} at {:?}", direction, cell.coords());
        return MoveOutcome::Blocked;
    }

    match grid.neighbor(cell.coords(), direction) {
        Some(to) => {
            log::trace!("Moved {:?} from {:?} to {:?}", direction, cell.coords(), to);
            MoveOutcome::Moved(to)
        }
        None => {
            log::warn!(
                "Open {:?} wall at {:?} leads off the grid",
                direction,
                cell.coords()
            );
            MoveOutcome::Blocked
        }
    }
}
