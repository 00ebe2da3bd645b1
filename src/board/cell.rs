//! A single grid cell

use super::Player;

/// Owner and orb count of one cell.
///
/// `owner` is `None` exactly when `count` is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    owner: Option<Player>,
    count: u8,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        owner: None,
        count: 0,
    };

    /// Cell holding `count` orbs of `owner`; a zero count yields an empty cell.
    #[inline]
    pub fn new(owner: Player, count: u8) -> Self {
        if count == 0 {
            Self::EMPTY
        } else {
            Self {
                owner: Some(owner),
                count,
            }
        }
    }

    #[inline]
    pub fn owner(self) -> Option<Player> {
        self.owner
    }

    #[inline]
    pub fn count(self) -> u8 {
        self.count
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.owner.is_none()
    }

    #[inline]
    pub fn is_owned_by(self, player: Player) -> bool {
        self.owner == Some(player)
    }

    /// Empty or already owned by `player`
    #[inline]
    pub fn accepts(self, player: Player) -> bool {
        self.owner.map_or(true, |owner| owner == player)
    }

    /// One more orb, captured for `player`
    #[inline]
    pub(crate) fn with_orb(self, player: Player) -> Self {
        Self {
            owner: Some(player),
            count: self.count + 1,
        }
    }
}
