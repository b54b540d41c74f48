//! Validation errors raised when constructing or renaming rule entities.

use thiserror::Error;

/// A value broke one of the class invariants of a player or buff.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RulesError {
    #[error("nickname length greater than max. Expected at most {max}, got {actual}")]
    NicknameTooLong { max: usize, actual: usize },

    #[error("level greater than max. Expected at most {max}, got {actual}")]
    LevelTooHigh { max: u32, actual: u32 },

    #[error("buff description length greater than max. Expected at most {max}, got {actual}")]
    DescriptionTooLong { max: usize, actual: usize },

    #[error("buff sum greater than max. Expected at most {max}, got {actual}")]
    BuffSumTooHigh { max: f32, actual: f32 },
}
