use crate::{Tile, TileSupply, TurnError, RACK_CAPACITY};
use smallvec::SmallVec;
use std::ops::Deref;

/// A vector of [tiles](Tile) held by one player.
///
/// Order only matters for the slot indexes used to pick a [tile](Tile) and to put it back on
/// [rollback](crate::TurnController::rollback). Removing a [tile](Tile) shifts every later slot
/// down by one.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Rack {
    tiles: SmallVec<[Tile; RACK_CAPACITY]>,
}

impl Rack {
    /// # Returns
    ///
    /// An empty [`Rack`].
    pub fn new() -> Rack {
        Rack::default()
    }

    /// Draws from `supply` until the rack holds `target_len` [tiles](Tile) or the supply is
    /// empty, whichever comes first. Does nothing when the rack is already full.
    ///
    /// # Returns
    ///
    /// The number of [tiles](Tile) drawn.
    pub fn draw_into(&mut self, supply: &mut TileSupply, target_len: usize) -> usize {
        let before = self.tiles.len();
        while self.tiles.len() < target_len {
            let Some(tile) = supply.draw() else {
                break;
            };
            self.tiles.push(tile);
        }
        self.tiles.len() - before
    }

    /// Removes the [tile](Tile) at `slot` and shifts later slots down.
    ///
    /// # Errors
    ///
    /// * [TurnError::SlotOutOfRange] when `slot` is greater than or equal to the rack length.
    pub fn remove_at(&mut self, slot: usize) -> Result<Tile, TurnError> {
        self.check_slot(slot)?;
        Ok(self.tiles.remove(slot))
    }

    /// Inserts `tile` at `slot` and shifts later slots up. Undoing removals in reverse order
    /// restores the original order exactly.
    ///
    /// # Errors
    ///
    /// * [TurnError::SlotOutOfRange] when `slot` is greater than the rack length.
    pub fn insert_at(&mut self, slot: usize, tile: Tile) -> Result<(), TurnError> {
        if slot > self.tiles.len() {
            return Err(TurnError::SlotOutOfRange {
                slot,
                rack_len: self.tiles.len(),
            });
        }
        self.tiles.insert(slot, tile);
        Ok(())
    }

    /// # Errors
    ///
    /// * [TurnError::SlotOutOfRange] when `slot` does not hold a [tile](Tile).
    pub fn check_slot(&self, slot: usize) -> Result<Tile, TurnError> {
        self.tiles
            .get(slot)
            .copied()
            .ok_or(TurnError::SlotOutOfRange {
                slot,
                rack_len: self.tiles.len(),
            })
    }

    /// # Returns
    ///
    /// The [tiles](Tile) in slot order.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

impl Deref for Rack {
    type Target = [Tile];

    fn deref(&self) -> &[Tile] {
        &self.tiles
    }
}

impl FromIterator<Tile> for Rack {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Rack {
        Rack {
            tiles: iter.into_iter().collect(),
        }
    }
}

impl Extend<Tile> for Rack {
    fn extend<I: IntoIterator<Item = Tile>>(&mut self, iter: I) {
        self.tiles.extend(iter);
    }
}
