//! Menu actions and the context they run in.
//!
//! Each action is bound to one subscriber when it is put on the menu, but it
//! is handed that subscriber only for the duration of [`Action::execute`].

mod movement;
mod suicide;

pub use movement::*;
pub use suicide::*;

use std::io::Write;

use life_rules::{ActionSubscriber, PositionDelta};

use crate::error::GameError;
use crate::rng::GameRng;

/// Everything an action may use besides its subscriber.
pub struct TurnContext<'a> {
    pub rng: &'a mut GameRng,
    pub out: &'a mut dyn Write,
}

impl<'a> TurnContext<'a> {
    pub fn new(rng: &'a mut GameRng, out: &'a mut dyn Write) -> Self {
        Self { rng, out }
    }

    /// A delta with both components drawn from `[0, limit)`.
    pub fn random_delta(&mut self, limit: i32) -> PositionDelta {
        let x = self.rng.gen_range(0..limit);
        let y = self.rng.gen_range(0..limit);
        PositionDelta { x, y }
    }
}

/// A command that changes a subscriber.
pub trait Action {
    fn execute(&self, subscriber: &mut dyn ActionSubscriber, ctx: &mut TurnContext<'_>) -> Result<(), GameError>;

    /// Menu text for this action when bound to `subscriber`.
    fn description(&self, subscriber: &dyn ActionSubscriber) -> String;
}

#[cfg(test)]
pub(crate) mod testing {
    use life_rules::{ActionSubscriber, BuffSet, BuffsDelta, PositionDelta, StatsDelta};

    /// Subscriber that records every delta it receives.
    #[derive(Default)]
    pub struct Recorder {
        pub stats: Vec<StatsDelta>,
        pub buffs: Vec<BuffsDelta>,
        pub positions: Vec<PositionDelta>,
        pub held: BuffSet,
    }

    impl ActionSubscriber for Recorder {
        fn apply_stats(&mut self, stats: &StatsDelta) {
            self.stats.push(*stats);
        }

        fn apply_buffs(&mut self, buffs: &BuffsDelta) {
            self.held.extend(buffs.add.iter().cloned());
            self.buffs.push(buffs.clone());
        }

        fn apply_position(&mut self, position: &PositionDelta) {
            self.positions.push(*position);
        }

        fn subscriber_description(&self) -> String {
            "recorder".to_owned()
        }

        fn health(&self) -> u32 {
            if self.stats.is_empty() {
                1000
            } else {
                0
            }
        }
    }
}
