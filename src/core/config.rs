//! Game configuration.
//!
//! The defaults are the standard Bondtolva rules: six-card hands dealt in
//! packets of three, first to twelve points wins.

use serde::{Deserialize, Serialize};

use super::error::Violation;
use crate::cards::DECK_SIZE;

/// Configurable game parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cumulative score that ends the game.
    pub target_score: u32,

    /// Cards dealt to each player at the start of a round.
    pub hand_size: usize,

    /// Cards handed out per packet when dealing.
    pub packet_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_score: 12,
            hand_size: 6,
            packet_size: 3,
        }
    }
}

impl GameConfig {
    pub fn with_target_score(mut self, target: u32) -> Self {
        self.target_score = target;
        self
    }

    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    pub fn with_packet_size(mut self, size: usize) -> Self {
        self.packet_size = size;
        self
    }

    /// Cards left in the stock after dealing.
    #[must_use]
    pub fn stock_size(&self) -> usize {
        DECK_SIZE.saturating_sub(2 * self.hand_size)
    }

    /// Check that a round can be dealt and played with these parameters.
    pub fn validate(&self) -> Result<(), Violation> {
        if self.target_score == 0 {
            return Err(Violation::InvalidConfig("target score must be positive".into()));
        }
        if self.packet_size == 0 || self.hand_size == 0 || self.hand_size % self.packet_size != 0 {
            return Err(Violation::InvalidConfig(format!(
                "hand size {} must be a positive multiple of packet size {}",
                self.hand_size, self.packet_size
            )));
        }
        if 2 * self.hand_size >= DECK_SIZE {
            return Err(Violation::InvalidConfig(format!(
                "hand size {} leaves no stock",
                self.hand_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.target_score, 12);
        assert_eq!(config.hand_size, 6);
        assert_eq!(config.packet_size, 3);
        assert_eq!(config.stock_size(), 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_target_score(7)
            .with_hand_size(4)
            .with_packet_size(2);

        assert_eq!(config.target_score, 7);
        assert_eq!(config.stock_size(), 12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_failures() {
        let bad = [
            GameConfig::default().with_target_score(0),
            GameConfig::default().with_packet_size(0),
            GameConfig::default().with_packet_size(4),
            GameConfig::default().with_hand_size(10).with_packet_size(5),
        ];
        for config in bad {
            assert!(
                matches!(config.validate(), Err(Violation::InvalidConfig(_))),
                "{config:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_target_score(21);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
