//! The command menu and the turn loop.

use log::{debug, info};
use serde::Serialize;
use std::collections::{BTreeMap, VecDeque};
use std::io::{BufRead, Write};

use life_rules::{Player, PlayerId, Point, Roster, StatsDeltaMultiply};

use crate::actions::{Action, AdminSuicide, Jog, MountainJog, Move, TurnContext};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::rng::GameRng;

const COMMAND_COLUMN_WIDTH: usize = 25;

/// An action on the menu and the player it acts on.
struct Binding {
    target: PlayerId,
    action: Box<dyn Action>,
}

/// Why the turn loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    AdminDied,
    InputClosed,
}

/// A player's final state together with the product of their buffs.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSnapshot {
    #[serde(flatten)]
    pub player: Player,
    pub combined_effect: StatsDeltaMultiply,
}

impl From<&Player> for PlayerSnapshot {
    fn from(player: &Player) -> Self {
        Self {
            player: player.clone(),
            combined_effect: player.combined_effect(),
        }
    }
}

/// Final state of a finished game.
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    pub seed: u64,
    /// Commands that matched a menu entry.
    pub turns: u64,
    pub reason: EndReason,
    pub players: Vec<PlayerSnapshot>,
}

pub struct Game {
    roster: Roster,
    actions: BTreeMap<String, Binding>,
    rng: GameRng,
    turns: u64,
}

impl Game {
    /// Start a game run by `admin`, who gets the `/q` and `/m` commands.
    pub fn new(admin: Player, config: &GameConfig) -> Self {
        let admin_id = admin.id();
        let mut game = Self {
            roster: Roster::new(admin),
            actions: BTreeMap::new(),
            rng: config.rng(),
            turns: 0,
        };
        game.bind("/q".to_owned(), admin_id, AdminSuicide);
        game.bind("/m".to_owned(), admin_id, Move);
        game
    }

    /// The fixed two-player roster: `aldrt23` runs the game, `fersp63` joins.
    pub fn with_default_roster(config: &GameConfig) -> Result<Self, GameError> {
        let mut game = Self::new(Player::new("aldrt23", 32, Point::new(3, 2))?, config);
        game.add(Player::new("fersp63", 16, Point::new(6, 7))?);
        Ok(game)
    }

    /// Bring a player online with their movement commands.
    pub fn add(&mut self, player: Player) -> PlayerId {
        let id = player.id();
        let nickname = player.nickname().to_owned();
        self.bind(format!("/move:{nickname}"), id, Move);
        self.bind(format!("/jog:{nickname}"), id, Jog);
        self.bind(format!("/mjog:{nickname}"), id, MountainJog::default());
        self.roster.add(player)
    }

    fn bind(&mut self, command: String, target: PlayerId, action: impl Action + 'static) {
        self.actions.insert(
            command,
            Binding {
                target,
                action: Box::new(action),
            },
        );
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Menu commands in the order they are listed.
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    /// Play until the admin dies or the input runs out, then print the results.
    pub fn start<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<GameSummary, GameError> {
        info!("starting game with seed {}", self.rng.seed());
        let reason = self.run_loop(input, output)?;
        info!("game over after {} turns: {reason:?}", self.turns);

        writeln!(output, "Game Results: ")?;
        self.print_player_stats(output)?;
        output.flush()?;

        Ok(GameSummary {
            seed: self.rng.seed(),
            turns: self.turns,
            reason,
            players: self.roster.iter().map(PlayerSnapshot::from).collect(),
        })
    }

    fn run_loop<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> Result<EndReason, GameError> {
        writeln!(output, "🤡 Welcome to the game of Life. To quit the game enter `/q`.")?;
        let mut pending = VecDeque::new();

        while self.roster.admin().is_alive() {
            self.print_player_stats(output)?;
            self.print_available_actions(output)?;
            write!(output, "> ")?;
            output.flush()?;

            let Some(command) = next_token(&mut input, &mut pending)? else {
                return Ok(EndReason::InputClosed);
            };
            self.dispatch(&command, output)?;
        }
        Ok(EndReason::AdminDied)
    }

    fn dispatch<W: Write>(&mut self, command: &str, output: &mut W) -> Result<(), GameError> {
        let Some(binding) = self.actions.get(command) else {
            debug!("ignoring unknown command {command:?}");
            return Ok(());
        };
        let Some(player) = self.roster.get_mut(binding.target) else {
            debug!("command {command:?} targets player {} who is not online", binding.target);
            return Ok(());
        };

        debug!("{command} -> {}", binding.action.description(&*player));
        let mut ctx = TurnContext::new(&mut self.rng, output);
        binding.action.execute(player, &mut ctx)?;
        self.turns += 1;
        Ok(())
    }

    fn print_player_stats<W: Write>(&self, output: &mut W) -> Result<(), GameError> {
        for player in self.roster.iter() {
            writeln!(output, "{}", player.description())?;
        }
        Ok(())
    }

    fn print_available_actions<W: Write>(&self, output: &mut W) -> Result<(), GameError> {
        writeln!(output, "Available Actions:")?;
        for (command, binding) in &self.actions {
            if let Some(player) = self.roster.get(binding.target) {
                writeln!(
                    output,
                    "{command:<width$}: {}",
                    binding.action.description(player),
                    width = COMMAND_COLUMN_WIDTH
                )?;
            }
        }
        Ok(())
    }
}

/// Next whitespace-separated token, reading more lines as needed.
fn next_token<R: BufRead>(input: &mut R, pending: &mut VecDeque<String>) -> Result<Option<String>, GameError> {
    loop {
        if let Some(token) = pending.pop_front() {
            return Ok(Some(token));
        }
        let mut line = Vec::new();
        if input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD and fall through as unknown commands.
        let line = String::from_utf8_lossy(&line);
        pending.extend(line.split_whitespace().map(str::to_owned));
    }
}
