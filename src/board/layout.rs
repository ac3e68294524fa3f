//! Board layout: squares and the two player paths.
//!
//! ## Standard Board
//!
//! Three columns by eight rows. The middle column holds the eight shared
//! squares; each outer column holds six squares private to one player (rows
//! 2 and 3 are missing). Every private square is safe, private rows 1 and 7
//! are rosettas, and `shared-4` is both a rosetta and a fort.
//!
//! ```text
//!   black   shared   white
//!   b-0 S    s-0    w-0 S      row 0
//!   b-1 SR   s-1    w-1 SR     row 1
//!            s-2               row 2
//!            s-3               row 3
//!   b-4 S    s-4 RF w-4 S      row 4
//!   b-5 S    s-5    w-5 S      row 5
//!   b-6 S    s-6    w-6 S      row 6
//!   b-7 SR   s-7    w-7 SR     row 7
//! ```
//!
//! Both paths enter at own row 4, run down to own row 7, climb the shared
//! column from row 7 to row 0, then finish on own rows 0 and 1.

use derive_more::{Display, Error};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::square::{Square, SquareFlags, SquareId};
use crate::core::{PlayerId, PlayerMap};

/// Errors from building a board out of explicit paths.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// A path has no squares.
    #[display("{player} has an empty path")]
    EmptyPath {
        /// Owner of the path.
        player: PlayerId,
    },
    /// Two squares share an id.
    #[display("square id {id} is defined twice")]
    DuplicateSquare {
        /// The repeated id.
        id: SquareId,
    },
    /// A path references a square that was not supplied.
    #[display("{player}'s path references unknown {id}")]
    UnknownSquare {
        /// Owner of the path.
        player: PlayerId,
        /// The missing id.
        id: SquareId,
    },
    /// A square appears twice in one path.
    #[display("{player}'s path visits {id} twice")]
    RepeatedSquare {
        /// Owner of the path.
        player: PlayerId,
        /// The repeated id.
        id: SquareId,
    },
    /// A path does not fit in a `u8` index.
    #[display("{player}'s path is too long ({len} squares)")]
    PathTooLong {
        /// Owner of the path.
        player: PlayerId,
        /// Its length.
        len: usize,
    },
}

/// Squares plus one ordered path per player.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    squares: FxHashMap<SquareId, Square>,
    paths: PlayerMap<Vec<SquareId>>,
}

const SHARED: u8 = 0;
const BLACK: u8 = 8;
const WHITE: u8 = 14;
const PRIVATE_ROWS: [u8; 6] = [0, 1, 4, 5, 6, 7];

impl Board {
    /// The fixed board used for play.
    #[must_use]
    pub fn standard() -> Self {
        let mut squares = FxHashMap::default();

        for row in 0..8u8 {
            let flags = if row == 4 {
                SquareFlags::PLAIN.rosetta().fort()
            } else {
                SquareFlags::PLAIN
            };
            let id = SquareId(SHARED + row);
            squares.insert(id, Square::new(id, format!("shared-{row}"), flags));
        }

        for (base, side) in [(BLACK, "black"), (WHITE, "white")] {
            for (offset, &row) in PRIVATE_ROWS.iter().enumerate() {
                let mut flags = SquareFlags::PLAIN.safe();
                if row == 1 || row == 7 {
                    flags = flags.rosetta();
                }
                let id = SquareId(base + offset as u8);
                squares.insert(id, Square::new(id, format!("{side}-{row}"), flags));
            }
        }

        let paths = PlayerMap::new(|player| {
            let base = if player == PlayerId::FIRST { BLACK } else { WHITE };
            let private = |row: u8| {
                let offset = PRIVATE_ROWS.iter().position(|&r| r == row).unwrap_or(0);
                SquareId(base + offset as u8)
            };

            let mut path: Vec<SquareId> = [4, 5, 6, 7].into_iter().map(private).collect();
            path.extend((0..8u8).rev().map(|row| SquareId(SHARED + row)));
            path.extend([0, 1].into_iter().map(private));
            path
        });

        Self { squares, paths }
    }

    /// Build a board from explicit squares and paths.
    ///
    /// ```
    /// use rust_ur::board::{Board, Square, SquareFlags, SquareId};
    /// use rust_ur::core::PlayerMap;
    ///
    /// let squares = vec![
    ///     Square::new(SquareId(0), "a", SquareFlags::PLAIN),
    ///     Square::new(SquareId(1), "b", SquareFlags::PLAIN.rosetta()),
    /// ];
    /// let paths = PlayerMap::with_value(vec![SquareId(0), SquareId(1)]);
    /// let board = Board::from_paths(squares, paths).unwrap();
    /// assert_eq!(board.path_len(rust_ur::core::PlayerId::FIRST), 2);
    /// ```
    pub fn from_paths(
        squares: Vec<Square>,
        paths: PlayerMap<Vec<SquareId>>,
    ) -> Result<Self, BoardError> {
        let mut by_id = FxHashMap::default();
        for square in squares {
            let id = square.id();
            if by_id.insert(id, square).is_some() {
                return Err(BoardError::DuplicateSquare { id });
            }
        }

        for (player, path) in paths.iter() {
            if path.is_empty() {
                return Err(BoardError::EmptyPath { player });
            }
            if path.len() > u8::MAX as usize {
                return Err(BoardError::PathTooLong {
                    player,
                    len: path.len(),
                });
            }
            let mut visited = FxHashSet::default();
            for &id in path {
                if !by_id.contains_key(&id) {
                    return Err(BoardError::UnknownSquare { player, id });
                }
                if !visited.insert(id) {
                    return Err(BoardError::RepeatedSquare { player, id });
                }
            }
        }

        Ok(Self {
            squares: by_id,
            paths,
        })
    }

    /// Number of squares in a player's path. Moving exactly one step past
    /// the last square finishes a piece.
    #[must_use]
    pub fn path_len(&self, player: PlayerId) -> u8 {
        self.paths[player].len() as u8
    }

    /// The ordered square ids of a player's path.
    #[must_use]
    pub fn path(&self, player: PlayerId) -> &[SquareId] {
        &self.paths[player]
    }

    /// The square at `index` of a player's path.
    #[must_use]
    pub fn square_at(&self, player: PlayerId, index: u8) -> Option<&Square> {
        let id = self.paths.try_get(player)?.get(index as usize)?;
        self.squares.get(id)
    }

    /// Look up a square by id.
    #[must_use]
    pub fn square(&self, id: SquareId) -> Option<&Square> {
        self.squares.get(&id)
    }

    /// Look up a square by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Square> {
        self.squares.values().find(|s| s.name() == name)
    }

    /// Index of a square in a player's path, if the path visits it.
    #[must_use]
    pub fn index_of(&self, player: PlayerId, id: SquareId) -> Option<u8> {
        self.paths
            .try_get(player)?
            .iter()
            .position(|&s| s == id)
            .map(|i| i as u8)
    }

    /// All squares, ordered by id.
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        let mut all: Vec<&Square> = self.squares.values().collect();
        all.sort_by_key(|s| s.id());
        all.into_iter()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
