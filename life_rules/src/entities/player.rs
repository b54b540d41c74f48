//! Player definition.

use serde::Serialize;

use super::{ActionSubscriber, PlayerId, Point, PositionDelta};
use crate::error::RulesError;
use crate::mechanics::{Buff, BuffSet, BuffsDelta, StatsDelta, StatsDeltaMultiply};

/// A player on the roster. All state is private and only changes through
/// [`ActionSubscriber`] or the validated setters.
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    id: PlayerId,
    nickname: String,
    level: u32,
    health: u32,
    buffs: BuffSet,
    position: Point,
    /// Where the player joined the game.
    checkpoint: Point,
}

impl Player {
    pub const MAX_NICKNAME_LENGTH: usize = 30;
    pub const MAX_LEVEL: u32 = 256;
    pub const MAX_HEALTH: u32 = 1000;

    /// Create a player at full health.
    pub fn new(nickname: impl Into<String>, level: u32, position: Point) -> Result<Self, RulesError> {
        let nickname = nickname.into();
        Self::validate_nickname(&nickname)?;
        if level > Self::MAX_LEVEL {
            return Err(RulesError::LevelTooHigh {
                max: Self::MAX_LEVEL,
                actual: level,
            });
        }

        Ok(Self {
            id: PlayerId::new(),
            nickname,
            level,
            health: Self::MAX_HEALTH,
            buffs: BuffSet::new(),
            position,
            checkpoint: position,
        })
    }

    fn validate_nickname(nickname: &str) -> Result<(), RulesError> {
        let length = nickname.chars().count();
        if length > Self::MAX_NICKNAME_LENGTH {
            return Err(RulesError::NicknameTooLong {
                max: Self::MAX_NICKNAME_LENGTH,
                actual: length,
            });
        }
        Ok(())
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn checkpoint(&self) -> Point {
        self.checkpoint
    }

    pub fn buffs(&self) -> &BuffSet {
        &self.buffs
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Rename the player, keeping the nickname length invariant.
    pub fn set_nickname(&mut self, nickname: impl Into<String>) -> Result<(), RulesError> {
        let nickname = nickname.into();
        Self::validate_nickname(&nickname)?;
        self.nickname = nickname;
        Ok(())
    }

    /// Buff descriptions concatenated in set order.
    pub fn buffs_descriptor(&self) -> String {
        self.buffs.iter().map(Buff::description).collect()
    }

    /// One-line status: nickname, level, health, position and buffs.
    pub fn description(&self) -> String {
        format!(
            "🤫 {} {} {} {} {}",
            self.nickname,
            self.level,
            self.health,
            self.position,
            self.buffs_descriptor()
        )
    }

    /// Product of the multipliers of every held buff.
    pub fn combined_effect(&self) -> StatsDeltaMultiply {
        self.buffs.iter().fold(StatsDeltaMultiply::IDENTITY, |acc, buff| {
            let effect = buff.effect();
            StatsDeltaMultiply {
                multiply_level: acc.multiply_level * effect.multiply_level,
                multiply_health: acc.multiply_health * effect.multiply_health,
            }
        })
    }
}

impl ActionSubscriber for Player {
    fn apply_stats(&mut self, stats: &StatsDelta) {
        let level = i64::from(self.level) + i64::from(stats.delta_level);
        self.level = level.rem_euclid(i64::from(Self::MAX_LEVEL) + 1) as u32;

        let health = i64::from(self.health) + i64::from(stats.delta_health);
        self.health = health.clamp(0, i64::from(Self::MAX_HEALTH)) as u32;
    }

    fn apply_buffs(&mut self, buffs: &BuffsDelta) {
        self.buffs.retain(|buff| !buffs.remove.contains(buff));
        self.buffs.extend(buffs.add.iter().cloned());
    }

    fn apply_position(&mut self, position: &PositionDelta) {
        self.position = self.position.translate(*position);
    }

    fn subscriber_description(&self) -> String {
        self.nickname.clone()
    }

    fn health(&self) -> u32 {
        self.health
    }
}
