use crate::{Tile, TileDistribution};
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use tap::Tap;
use tracing::debug;

/// This is a bag of all the [tiles](Tile) that haven't been drawn by any player yet.
///
/// Draws are without replacement, so the supply only ever shrinks. An empty supply is not an
/// error: [draw](TileSupply::draw) simply returns [None] and racks stay short.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TileSupply {
    /// Shuffled [tiles](Tile), drawn from the back.
    tiles: Vec<Tile>,
}

impl TileSupply {
    /// Builds every copy of every [tile](Tile) from `distribution` and shuffles them with
    /// the thread local random number generator.
    ///
    /// # See Also
    ///
    /// * [TileSupply::new_with_rng]
    pub fn new(distribution: &TileDistribution) -> TileSupply {
        TileSupply::new_with_rng(distribution, &mut rand::thread_rng())
    }

    /// Builds every copy of every [tile](Tile) from `distribution` and shuffles them
    /// uniformly with `rng`.
    ///
    /// # Arguments
    ///
    /// * `distribution`: The number of copies of each [tile](Tile).
    /// * `rng`: The source of randomness, consumed once for the shuffle.
    pub fn new_with_rng<R: Rng + ?Sized>(distribution: &TileDistribution, rng: &mut R) -> TileSupply {
        let tiles = distribution
            .tiles()
            .collect_vec()
            .tap_mut(|tiles| tiles.shuffle(rng));
        debug!(tiles = tiles.len(), "filled tile supply");
        TileSupply { tiles }
    }

    /// Wraps `tiles` without shuffling. The last [tile](Tile) is drawn first.
    pub fn from_tiles(tiles: Vec<Tile>) -> TileSupply {
        TileSupply { tiles }
    }

    /// Removes one [tile](Tile) from the supply.
    ///
    /// # Returns
    ///
    /// The drawn [tile](Tile) or [None] when the supply is empty.
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    /// # Returns
    ///
    /// The number of [tiles](Tile) left to draw.
    #[inline]
    pub fn remaining_count(&self) -> usize {
        self.tiles.len()
    }

    /// # Returns
    ///
    /// Whether no [tiles](Tile) are left to draw.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
