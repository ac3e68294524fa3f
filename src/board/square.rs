//! Track squares.

use serde::{Deserialize, Serialize};

/// Square identifier, unique across the whole board.
///
/// Two players' paths may list the same `SquareId` at different indices.
/// Occupancy is always decided by this identity, never by path index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SquareId(pub u8);

impl SquareId {
    /// Create a new square ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for SquareId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Square({})", self.0)
    }
}

/// Special properties of a square. Independent of each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SquareFlags {
    /// Landing here with a non-finishing move grants another roll.
    pub rosetta: bool,
    /// Occupants cannot be captured.
    pub fort: bool,
    /// Occupants cannot be captured.
    pub safe: bool,
}

impl SquareFlags {
    /// No special properties.
    pub const PLAIN: SquareFlags = SquareFlags {
        rosetta: false,
        fort: false,
        safe: false,
    };

    /// Mark as rosetta.
    #[must_use]
    pub const fn rosetta(mut self) -> Self {
        self.rosetta = true;
        self
    }

    /// Mark as fort.
    #[must_use]
    pub const fn fort(mut self) -> Self {
        self.fort = true;
        self
    }

    /// Mark as safe.
    #[must_use]
    pub const fn safe(mut self) -> Self {
        self.safe = true;
        self
    }

    /// Whether an opposing occupant here is out of reach.
    #[must_use]
    pub const fn is_protected(self) -> bool {
        self.safe || self.fort
    }
}

/// A square on the board. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    id: SquareId,
    name: String,
    flags: SquareFlags,
}

impl Square {
    /// Create a square.
    pub fn new(id: SquareId, name: impl Into<String>, flags: SquareFlags) -> Self {
        Self {
            id,
            name: name.into(),
            flags,
        }
    }

    /// Identity of this square.
    #[must_use]
    pub fn id(&self) -> SquareId {
        self.id
    }

    /// Human-readable name, e.g. `shared-4`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Special properties.
    #[must_use]
    pub fn flags(&self) -> SquareFlags {
        self.flags
    }

    #[must_use]
    pub fn is_rosetta(&self) -> bool {
        self.flags.rosetta
    }

    #[must_use]
    pub fn is_fort(&self) -> bool {
        self.flags.fort
    }

    #[must_use]
    pub fn is_safe(&self) -> bool {
        self.flags.safe
    }
}
