//! Movement actions. `Jog` replaces the walking behaviour of `Move`;
//! `MountainJog` runs a `Jog` and adds to it.

use std::io::Write;

use life_rules::{ActionSubscriber, Buff, BuffsDelta};

use super::{Action, TurnContext};
use crate::error::GameError;

/// A short walk that may pick up a herb or a coffee on the way.
#[derive(Debug, Clone, Copy, Default)]
pub struct Move;

impl Move {
    pub const RAND_LIMIT: i32 = 12;
}

impl Action for Move {
    fn execute(&self, subscriber: &mut dyn ActionSubscriber, ctx: &mut TurnContext<'_>) -> Result<(), GameError> {
        let name = subscriber.subscriber_description();
        writeln!(ctx.out, "🚶🏻‍♂️ Moved player {name}")?;

        let delta = ctx.random_delta(Self::RAND_LIMIT);
        let buffs = match delta.x % 3 {
            0 => {
                writeln!(ctx.out, "{name} found magical herb in the Himalayas 🌿")?;
                BuffsDelta::adding(Buff::herb())
            }
            1 => {
                writeln!(ctx.out, "{name} ordered coffee ☕")?;
                BuffsDelta::adding(Buff::coffee())
            }
            _ => BuffsDelta::default(),
        };

        if !buffs.is_empty() {
            subscriber.apply_buffs(&buffs);
        }
        subscriber.apply_position(&delta);
        Ok(())
    }

    fn description(&self, subscriber: &dyn ActionSubscriber) -> String {
        format!("🚶🏻‍♂️ Move player {}", subscriber.subscriber_description())
    }
}

/// A longer run. No buffs are found while running.
#[derive(Debug, Clone, Copy, Default)]
pub struct Jog;

impl Jog {
    pub const RAND_LIMIT: i32 = 24;
}

impl Action for Jog {
    fn execute(&self, subscriber: &mut dyn ActionSubscriber, ctx: &mut TurnContext<'_>) -> Result<(), GameError> {
        writeln!(ctx.out, "🏃 Player's running {}", subscriber.subscriber_description())?;
        let delta = ctx.random_delta(Self::RAND_LIMIT);
        subscriber.apply_position(&delta);
        Ok(())
    }

    fn description(&self, subscriber: &dyn ActionSubscriber) -> String {
        format!("🏃 Run player {}", subscriber.subscriber_description())
    }
}

/// A jog over the mountains.
#[derive(Debug, Clone, Copy, Default)]
pub struct MountainJog {
    jog: Jog,
}

impl Action for MountainJog {
    fn execute(&self, subscriber: &mut dyn ActionSubscriber, ctx: &mut TurnContext<'_>) -> Result<(), GameError> {
        self.jog.execute(subscriber, ctx)?;
        writeln!(ctx.out, " He/she seems to be running over the mountains!")?;
        Ok(())
    }

    fn description(&self, subscriber: &dyn ActionSubscriber) -> String {
        format!("⛰️ Mountain run player {}", subscriber.subscriber_description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::Recorder;
    use crate::rng::GameRng;

    fn run(action: &dyn Action, seed: u64) -> (Recorder, String) {
        let mut recorder = Recorder::default();
        let mut rng = GameRng::new(seed);
        let mut out = Vec::new();
        let mut ctx = TurnContext::new(&mut rng, &mut out);
        action.execute(&mut recorder, &mut ctx).unwrap();
        (recorder, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_move_stays_in_range_and_matches_buff() {
        for seed in 0..40 {
            let (recorder, out) = run(&Move, seed);
            assert!(out.starts_with("🚶🏻‍♂️ Moved player recorder\n"));
            assert_eq!(recorder.positions.len(), 1);

            let delta = recorder.positions[0];
            assert!((0..Move::RAND_LIMIT).contains(&delta.x));
            assert!((0..Move::RAND_LIMIT).contains(&delta.y));

            match delta.x % 3 {
                0 => {
                    assert_eq!(recorder.buffs.len(), 1);
                    assert!(recorder.buffs[0].add.contains(&Buff::herb()));
                    assert!(out.contains("recorder found magical herb in the Himalayas 🌿"));
                }
                1 => {
                    assert_eq!(recorder.buffs.len(), 1);
                    assert!(recorder.buffs[0].add.contains(&Buff::coffee()));
                    assert!(out.contains("recorder ordered coffee ☕"));
                }
                _ => {
                    assert!(recorder.buffs.is_empty());
                    assert_eq!(out.lines().count(), 1);
                }
            }
        }
    }

    #[test]
    fn test_jog_only_moves() {
        for seed in 0..20 {
            let (recorder, out) = run(&Jog, seed);
            assert_eq!(out, "🏃 Player's running recorder\n");
            assert!(recorder.buffs.is_empty());
            let delta = recorder.positions[0];
            assert!((0..Jog::RAND_LIMIT).contains(&delta.x));
            assert!((0..Jog::RAND_LIMIT).contains(&delta.y));
        }
    }

    #[test]
    fn test_mountain_jog_extends_jog() {
        let (jog, _) = run(&Jog, 5);
        let (mountain, out) = run(&MountainJog::default(), 5);
        assert_eq!(jog.positions, mountain.positions);
        assert_eq!(
            out,
            "🏃 Player's running recorder\n He/she seems to be running over the mountains!\n"
        );
    }

    #[test]
    fn test_descriptions() {
        let recorder = Recorder::default();
        assert_eq!(Move.description(&recorder), "🚶🏻‍♂️ Move player recorder");
        assert_eq!(Jog.description(&recorder), "🏃 Run player recorder");
        assert_eq!(MountainJog::default().description(&recorder), "⛰️ Mountain run player recorder");
    }
}
