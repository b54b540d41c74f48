//! Game mechanics: stat deltas, buff multipliers and buff sets.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::error::RulesError;

/// Additive change to a player's level and health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatsDelta {
    pub delta_level: i32,
    pub delta_health: i32,
}

/// Multiplicative effect carried by a buff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsDeltaMultiply {
    pub multiply_level: f32,
    pub multiply_health: f32,
}

impl StatsDeltaMultiply {
    pub const IDENTITY: Self = Self {
        multiply_level: 1.0,
        multiply_health: 1.0,
    };

    pub const fn new(multiply_level: f32, multiply_health: f32) -> Self {
        Self {
            multiply_level,
            multiply_health,
        }
    }
}

/// A named effect a player can hold.
///
/// Two buffs are the same buff when their descriptions match. Sets order
/// buffs by description length in characters first.
#[derive(Debug, Clone, Serialize)]
pub struct Buff {
    effect: StatsDeltaMultiply,
    description: String,
}

impl Buff {
    pub const MAX_DESCRIPTION_LENGTH: usize = 30;
    pub const MAX_BUFF_SUM: f32 = 10.0;

    pub fn new(effect: StatsDeltaMultiply, description: impl Into<String>) -> Result<Self, RulesError> {
        let description = description.into();
        let length = description.chars().count();
        if length > Self::MAX_DESCRIPTION_LENGTH {
            return Err(RulesError::DescriptionTooLong {
                max: Self::MAX_DESCRIPTION_LENGTH,
                actual: length,
            });
        }

        let sum = effect.multiply_level + effect.multiply_health;
        if sum > Self::MAX_BUFF_SUM {
            return Err(RulesError::BuffSumTooHigh {
                max: Self::MAX_BUFF_SUM,
                actual: sum,
            });
        }

        Ok(Self { effect, description })
    }

    /// Magical herb found while wandering.
    pub fn herb() -> Self {
        Self::catalogue(StatsDeltaMultiply::new(1.5, 1.5), "🌿")
    }

    pub fn coffee() -> Self {
        Self::catalogue(StatsDeltaMultiply::new(1.3, 1.3), "☕")
    }

    /// Left behind by a failed suicide potion: levelling slows to a crawl.
    pub fn bad_potion() -> Self {
        Self::catalogue(StatsDeltaMultiply::new(0.1, 1.0), "🧪⚰️")
    }

    // Catalogue entries are known to satisfy both limits.
    fn catalogue(effect: StatsDeltaMultiply, description: &str) -> Self {
        Self {
            effect,
            description: description.to_owned(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn effect(&self) -> StatsDeltaMultiply {
        self.effect
    }
}

impl PartialEq for Buff {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description
    }
}

impl Eq for Buff {}

impl PartialOrd for Buff {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Buff {
    fn cmp(&self, other: &Self) -> Ordering {
        self.description
            .chars()
            .count()
            .cmp(&other.description.chars().count())
            .then_with(|| self.description.cmp(&other.description))
    }
}

pub type BuffSet = BTreeSet<Buff>;

/// Buffs to take away and buffs to grant, applied in that order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuffsDelta {
    pub add: BuffSet,
    pub remove: BuffSet,
}

impl BuffsDelta {
    pub fn adding(buff: Buff) -> Self {
        Self {
            add: BuffSet::from([buff]),
            remove: BuffSet::new(),
        }
    }

    pub fn removing(buff: Buff) -> Self {
        Self {
            add: BuffSet::new(),
            remove: BuffSet::from([buff]),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }
}
