//! Tetrahedral dice.
//!
//! A roll throws `count` dice with faces `1..=faces`. Every face at or above
//! `success_threshold` counts as one success, and the number of successes is
//! how many squares a piece may move. With the default four 4-sided dice and
//! a threshold of 3, exactly half the faces succeed, which gives the
//! binomial(4, 0.5) spread of 0-4 steps of the traditional four-coin throw.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rng::GameRng;

/// Dice parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceConfig {
    /// Dice thrown per roll.
    pub count: u8,
    /// Faces per die, numbered from 1.
    pub faces: u8,
    /// Lowest face that counts as a success.
    pub success_threshold: u8,
}

impl Default for DiceConfig {
    fn default() -> Self {
        Self {
            count: 4,
            faces: 4,
            success_threshold: 3,
        }
    }
}

/// One throw of the dice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    /// Raw face values in throw order.
    pub faces: SmallVec<[u8; 4]>,
    /// Count of faces at or above the success threshold.
    pub successes: u8,
}

impl DiceRoll {
    /// Build a roll from known faces.
    ///
    /// ```
    /// use rust_ur::core::DiceRoll;
    ///
    /// let roll = DiceRoll::from_faces(&[1, 3, 4, 2], 3);
    /// assert_eq!(roll.successes, 2);
    /// ```
    #[must_use]
    pub fn from_faces(faces: &[u8], success_threshold: u8) -> Self {
        let successes = faces.iter().filter(|&&f| f >= success_threshold).count() as u8;
        Self {
            faces: SmallVec::from_slice(faces),
            successes,
        }
    }

    /// A roll with exactly `successes` successes on standard dice.
    ///
    /// Successful dice show 4, the rest show 1. Used for scripted turns.
    #[must_use]
    pub fn with_successes(successes: u8) -> Self {
        let successes = successes.min(4);
        let faces: SmallVec<[u8; 4]> = (0..4).map(|i| if i < successes { 4 } else { 1 }).collect();
        Self { faces, successes }
    }

    /// Step count granted by this roll.
    #[must_use]
    pub fn steps(&self) -> u8 {
        self.successes
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces: Vec<String> = self.faces.iter().map(u8::to_string).collect();
        write!(f, "{} ({})", self.successes, faces.join(", "))
    }
}

/// The dice set used by a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dice {
    config: DiceConfig,
}

impl Dice {
    /// Create dice from configuration.
    #[must_use]
    pub fn new(config: DiceConfig) -> Self {
        Self { config }
    }

    /// The configuration of these dice.
    #[must_use]
    pub fn config(&self) -> DiceConfig {
        self.config
    }

    /// Throw all dice.
    pub fn roll(&self, rng: &mut GameRng) -> DiceRoll {
        let faces: SmallVec<[u8; 4]> = (0..self.config.count)
            .map(|_| rng.roll_die(self.config.faces))
            .collect();
        DiceRoll::from_faces(&faces, self.config.success_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_returns_four_dice() {
        let dice = Dice::default();
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            let roll = dice.roll(&mut rng);
            assert_eq!(roll.faces.len(), 4);
            assert!(roll.faces.iter().all(|f| (1..=4).contains(f)));
            assert!(roll.successes <= 4);
            assert_eq!(
                roll.successes as usize,
                roll.faces.iter().filter(|&&f| f >= 3).count()
            );
        }
    }

    #[test]
    fn test_all_high_faces_are_four_successes() {
        let roll = DiceRoll::from_faces(&[4, 4, 3, 3], 3);
        assert_eq!(roll.successes, 4);
        assert_eq!(roll.steps(), 4);
    }

    #[test]
    fn test_with_successes() {
        for n in 0..=4 {
            let roll = DiceRoll::with_successes(n);
            assert_eq!(roll.successes, n);
            assert_eq!(roll, DiceRoll::from_faces(&roll.faces, 3));
        }
    }

    #[test]
    fn test_distribution_is_roughly_binomial() {
        let dice = Dice::default();
        let mut rng = GameRng::new(99);
        let mut counts = [0u32; 5];

        for _ in 0..16_000 {
            counts[dice.roll(&mut rng).successes as usize] += 1;
        }

        // Expected 1000, 4000, 6000, 4000, 1000
        assert!((700..1300).contains(&counts[0]));
        assert!((5400..6600).contains(&counts[2]));
        assert!((700..1300).contains(&counts[4]));
    }

    #[test]
    fn test_display() {
        let roll = DiceRoll::from_faces(&[1, 3, 4, 2], 3);
        assert_eq!(roll.to_string(), "2 (1, 3, 4, 2)");
    }
}
