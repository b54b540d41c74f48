//! The interface actions talk to when they change a player.

use super::PositionDelta;
use crate::mechanics::{BuffsDelta, StatsDelta};

/// Anything that can receive the effects of an action.
///
/// Actions never touch player fields directly; they build deltas and hand
/// them to a subscriber, which decides how to apply them.
pub trait ActionSubscriber {
    fn apply_stats(&mut self, stats: &StatsDelta);

    fn apply_buffs(&mut self, buffs: &BuffsDelta);

    fn apply_position(&mut self, position: &PositionDelta);

    /// Short name used in action messages and menu entries.
    fn subscriber_description(&self) -> String;

    fn health(&self) -> u32;
}
