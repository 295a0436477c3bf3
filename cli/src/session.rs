use std::fmt;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use sweeper_core::{Board, BoardConfig, BoardError, Difficulty, RevealOutcome};

use crate::command::{Command, HELP};

/// Board shape used when (re)starting a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Preset {
    Difficulty(Difficulty),
    Custom(BoardConfig),
}

impl Preset {
    pub fn config(self) -> BoardConfig {
        match self {
            Self::Difficulty(difficulty) => difficulty.config(),
            Self::Custom(config) => config,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Difficulty(difficulty) => write!(f, "{}", difficulty),
            Self::Custom(config) => write!(
                f,
                "custom {}x{}/{}",
                config.rows(),
                config.cols(),
                config.mines()
            ),
        }
    }
}

/// What the shell should tell the player after a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    None,
    Lost,
    Won,
    NewGame,
    Help,
    Quit,
}

impl Notice {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Lost => Some("Boom! Game over, type `new` to play again."),
            Self::Won => Some("You win!"),
            Self::NewGame => Some("New game started."),
            Self::Help => Some(HELP),
            Self::Quit => None,
        }
    }

    /// Whether the board changed and needs to be drawn again.
    pub fn redraw(&self) -> bool {
        !matches!(self, Self::Help | Self::Quit)
    }
}

/// A run of consecutive games sharing one random source.
pub struct Session {
    preset: Preset,
    rng: SmallRng,
    board: Board,
}

impl Session {
    pub fn new(preset: Preset, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::new(preset.config(), &mut rng);
        Self { preset, rng, board }
    }

    pub fn preset(&self) -> Preset {
        self.preset
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Throws the current board away and deals a fresh one.
    pub fn restart(&mut self, difficulty: Option<Difficulty>) {
        if let Some(difficulty) = difficulty {
            self.preset = Preset::Difficulty(difficulty);
        }
        log::debug!("Restarting with preset {}", self.preset);
        self.board = Board::new(self.preset.config(), &mut self.rng);
    }

    pub fn apply(&mut self, command: Command) -> Result<Notice, BoardError> {
        Ok(match command {
            Command::Reveal(coords) => match self.board.reveal(coords)?.outcome {
                RevealOutcome::HitMine => Notice::Lost,
                RevealOutcome::Won => Notice::Won,
                RevealOutcome::Revealed | RevealOutcome::NoChange => Notice::None,
            },
            Command::Flag(coords) => {
                let outcome = self.board.toggle_flag(coords)?;
                log::trace!("Flag at {:?}: {:?}", coords, outcome);
                Notice::None
            }
            Command::New(difficulty) => {
                self.restart(difficulty);
                Notice::NewGame
            }
            Command::Help => Notice::Help,
            Command::Quit => Notice::Quit,
        })
    }
}
