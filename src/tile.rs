use num_derive::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::iter;

/// The number of [`Letter`] variants. 26 letters from `A` to `Z`.
pub const LETTERS_LEN: usize = 26;

/// Describes one of the 26 alphabetic symbols printed on a [`Tile`] or placed on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, FromPrimitive)]
pub enum Letter {
    /// `0`.
    A = 0,
    /// `1`.
    B = 1,
    /// `2`.
    C = 2,
    /// `3`.
    D = 3,
    /// `4`.
    E = 4,
    /// `5`.
    F = 5,
    /// `6`.
    G = 6,
    /// `7`.
    H = 7,
    /// `8`.
    I = 8,
    /// `9`.
    J = 9,
    /// `10`.
    K = 10,
    /// `11`.
    L = 11,
    /// `12`.
    M = 12,
    /// `13`.
    N = 13,
    /// `14`.
    O = 14,
    /// `15`.
    P = 15,
    /// `16`.
    Q = 16,
    /// `17`.
    R = 17,
    /// `18`.
    S = 18,
    /// `19`.
    T = 19,
    /// `20`.
    U = 20,
    /// `21`.
    V = 21,
    /// `22`.
    W = 22,
    /// `23`.
    X = 23,
    /// `24`.
    Y = 24,
    /// `25`.
    Z = 25,
}

/// Points earned by each [`Letter`] in alphabetical order.
const LETTER_POINTS: [usize; LETTERS_LEN] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// Copies of each [`Letter`] in the default bag in alphabetical order.
const LETTER_COUNTS: [usize; LETTERS_LEN] = [
    9, 2, 2, 4, 12, 2, 3, 2, 9, 1, 1, 4, 2, 6, 8, 2, 1, 6, 4, 6, 4, 2, 2, 1, 2, 1,
];

/// Copies of the blank [`Tile`] in the default bag.
const BLANK_COUNT: usize = 2;

impl Letter {
    /// # Returns
    ///
    /// An array of all [`Letter`] variants in alphabetical order.
    #[inline]
    pub fn letters() -> [Letter; LETTERS_LEN] {
        use Letter::*;
        [
            A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
        ]
    }

    /// Parses a single alphabetic character in either case.
    ///
    /// # Returns
    ///
    /// The matching [`Letter`] or [`None`] if `char` is not an ASCII letter.
    pub fn from_char(char: char) -> Option<Letter> {
        if !char.is_ascii_alphabetic() {
            return None;
        }
        let index = (char.to_ascii_uppercase() as u8 - b'A') as usize;
        num::FromPrimitive::from_usize(index)
    }

    /// # Returns
    ///
    /// The upper case character of the [`Letter`].
    #[inline]
    pub fn as_char(self) -> char {
        (b'A' + self as u8) as char
    }

    /// # Returns
    ///
    /// The points earned when the [`Letter`] is played from a lettered [`Tile`].
    #[inline]
    pub fn points(self) -> usize {
        LETTER_POINTS[self as usize]
    }
}

impl Distribution<Letter> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Letter {
        let index = rng.gen_range(0..LETTERS_LEN);
        num::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            dbg!(index, LETTERS_LEN);
            unreachable!(
                "index ({:?}) should be matched since letters cover all indexes \
                in range 0..LETTERS_LEN (0..{:?}).",
                index, LETTERS_LEN
            );
        })
    }
}

/// Describes a tile held in a rack or waiting in the supply.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Tile {
    /// A tile printed with a [`Letter`].
    Letter(Letter),
    /// A wildcard tile worth `0` points which is assigned a [`Letter`] when it is staged.
    Blank,
}

impl Tile {
    /// # Returns
    ///
    /// `0` for [`Tile::Blank`], otherwise the points of the printed [`Letter`].
    #[inline]
    pub fn points(self) -> usize {
        match self {
            Tile::Letter(letter) => letter.points(),
            Tile::Blank => 0,
        }
    }
}

impl From<Letter> for Tile {
    fn from(letter: Letter) -> Tile {
        Tile::Letter(letter)
    }
}

impl Distribution<Tile> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Tile {
        // one extra slot for the blank
        if rng.gen_range(0..=LETTERS_LEN) == LETTERS_LEN {
            Tile::Blank
        } else {
            Tile::Letter(rng.gen())
        }
    }
}

/// A resolved [`Letter`] on the board and whether it came from a [blank](Tile::Blank).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PlacedLetter {
    /// The letter shown on the board.
    pub letter: Letter,
    /// Whether the letter was assigned to a [blank](Tile::Blank) at placement time.
    pub blank: bool,
}

impl PlacedLetter {
    /// # Returns
    ///
    /// A [`PlacedLetter`] played from a lettered [`Tile`].
    pub fn lettered(letter: Letter) -> PlacedLetter {
        PlacedLetter {
            letter,
            blank: false,
        }
    }

    /// # Returns
    ///
    /// A [`PlacedLetter`] played from a [blank](Tile::Blank) resolved to `letter`.
    pub fn blank(letter: Letter) -> PlacedLetter {
        PlacedLetter {
            letter,
            blank: true,
        }
    }

    /// # Returns
    ///
    /// `0` when played from a [blank](Tile::Blank) regardless of the resolved letter,
    /// otherwise the points of the letter.
    #[inline]
    pub fn points(self) -> usize {
        if self.blank {
            0
        } else {
            self.letter.points()
        }
    }
}

/// The number of copies of every [`Letter`] and of the [blank](Tile::Blank) used to fill
/// a [`TileSupply`](crate::TileSupply).
///
/// The [default](TileDistribution::default) is the classic 100 tile table with `2` blanks.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct TileDistribution {
    /// Copies of each [`Letter`] in alphabetical order.
    pub counts: [usize; LETTERS_LEN],
    /// Copies of the [blank](Tile::Blank).
    pub blanks: usize,
}

impl Default for TileDistribution {
    fn default() -> Self {
        TileDistribution {
            counts: LETTER_COUNTS,
            blanks: BLANK_COUNT,
        }
    }
}

impl TileDistribution {
    /// # Returns
    ///
    /// A distribution holding only the given copies, with every other count at `0`.
    pub fn from_counts(counts: impl IntoIterator<Item = (Tile, usize)>) -> TileDistribution {
        let mut distribution = TileDistribution {
            counts: [0; LETTERS_LEN],
            blanks: 0,
        };
        for (tile, count) in counts {
            match tile {
                Tile::Letter(letter) => distribution.counts[letter as usize] += count,
                Tile::Blank => distribution.blanks += count,
            }
        }
        distribution
    }

    /// # Returns
    ///
    /// The number of copies of `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        match tile {
            Tile::Letter(letter) => self.counts[letter as usize],
            Tile::Blank => self.blanks,
        }
    }

    /// # Returns
    ///
    /// The sum of all counts, which is the size of a freshly built supply.
    pub fn total(&self) -> usize {
        self.counts.iter().sum::<usize>() + self.blanks
    }

    /// # Returns
    ///
    /// An [iterator](Iterator) over every copy of every [`Tile`], letters first in
    /// alphabetical order and blanks last.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        Letter::letters()
            .into_iter()
            .flat_map(|letter| iter::repeat(Tile::Letter(letter)).take(self.count(letter.into())))
            .chain(iter::repeat(Tile::Blank).take(self.blanks))
    }
}
