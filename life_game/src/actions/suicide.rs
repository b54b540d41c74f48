//! The administrator's way out of the game.

use std::io::Write;

use life_rules::{ActionSubscriber, Buff, BuffsDelta, StatsDelta};

use super::{Action, TurnContext};
use crate::error::GameError;

/// Drink a potion that kills the administrator half of the time.
/// When it fails the administrator is left with a levelling debuff.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminSuicide;

impl AdminSuicide {
    pub const LETHAL: StatsDelta = StatsDelta {
        delta_level: 0,
        delta_health: -10_000,
    };
}

impl Action for AdminSuicide {
    fn execute(&self, subscriber: &mut dyn ActionSubscriber, ctx: &mut TurnContext<'_>) -> Result<(), GameError> {
        if ctx.rng.gen_bool(0.5) {
            writeln!(ctx.out, "gg 🙂")?;
            subscriber.apply_stats(&Self::LETHAL);
        } else {
            writeln!(
                ctx.out,
                "uh oh 🤔 your potion didn't work so you didn't die but you'll level up much slower; you can try this one again 😋"
            )?;
            subscriber.apply_buffs(&BuffsDelta::adding(Buff::bad_potion()));
        }
        Ok(())
    }

    fn description(&self, _subscriber: &dyn ActionSubscriber) -> String {
        "💀 Admin Suicide".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::Recorder;
    use crate::rng::GameRng;
    use life_rules::{Player, Point};

    #[test]
    fn test_outcomes_are_exclusive() {
        let mut rng = GameRng::new(11);
        let (mut deaths, mut potions) = (0, 0);
        for _ in 0..64 {
            let mut recorder = Recorder::default();
            let mut out = Vec::new();
            let mut ctx = TurnContext::new(&mut rng, &mut out);
            AdminSuicide.execute(&mut recorder, &mut ctx).unwrap();
            let out = String::from_utf8(out).unwrap();

            if out.starts_with("gg 🙂") {
                deaths += 1;
                assert_eq!(recorder.stats, vec![AdminSuicide::LETHAL]);
                assert!(recorder.buffs.is_empty());
            } else {
                potions += 1;
                assert!(out.starts_with("uh oh 🤔"));
                assert!(recorder.stats.is_empty());
                assert!(recorder.held.contains(&Buff::bad_potion()));
            }
        }
        assert!(deaths > 0);
        assert!(potions > 0);
    }

    #[test]
    fn test_lethal_delta_zeroes_player_health() {
        let mut player = Player::new("aldrt23", 32, Point::new(3, 2)).unwrap();
        player.apply_stats(&AdminSuicide::LETHAL);
        assert_eq!(player.health(), 0);
    }

    #[test]
    fn test_description() {
        assert_eq!(AdminSuicide.description(&Recorder::default()), "💀 Admin Suicide");
    }
}
