//! Interactive console game: human against a [`MovePolicy`]

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use crate::engine::MovePolicy;
use crate::{Game, Move, Stone};

use super::board_view::BoardView;
use super::input::{parse_command, Command};
use super::theme::symbol;

/// How a console session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HumanWon,
    AiWon,
    Draw,
    Quit,
}

/// Console session reading moves from `input` and writing to `output`
pub struct Console<R, W, P> {
    game: Game,
    opponent: P,
    human: Stone,
    ai_delay: Duration,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write, P: MovePolicy> Console<R, W, P> {
    /// The human plays whichever color `opponent` does not
    pub fn new(game: Game, opponent: P, input: R, output: W) -> Self {
        let human = opponent.stone().opponent();
        Self {
            game,
            opponent,
            human,
            ai_delay: Duration::ZERO,
            input,
            output,
        }
    }

    /// Pause before each computer move
    pub fn with_ai_delay(mut self, delay: Duration) -> Self {
        self.ai_delay = delay;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Play until the game ends or the human quits
    pub fn run(&mut self) -> io::Result<Outcome> {
        self.print_banner()?;

        while !self.game.is_over() {
            self.print_board()?;

            if self.game.current_player() == self.human {
                if let Some(outcome) = self.human_turn()? {
                    return Ok(outcome);
                }
            } else {
                self.ai_turn()?;
            }
        }

        self.print_board()?;
        if let Some(line) = self.game.winning_line() {
            let (first, last) = (Move::from(line[0]), Move::from(line[line.len() - 1]));
            writeln!(self.output, "Five in a row from {first} to {last}")?;
        }
        let outcome = match self.game.winner() {
            Some(stone) if stone == self.human => {
                writeln!(self.output, "Congratulations! You won!")?;
                Outcome::HumanWon
            }
            Some(_) => {
                writeln!(self.output, "AI wins! Better luck next time!")?;
                Outcome::AiWon
            }
            None => {
                writeln!(self.output, "It's a draw!")?;
                Outcome::Draw
            }
        };
        info!(?outcome, moves = self.game.move_count(), "console game finished");
        Ok(outcome)
    }

    fn print_banner(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to Go-Moku!")?;
        writeln!(
            self.output,
            "You are {}, the AI is {}",
            symbol(self.human),
            symbol(self.opponent.stone())
        )?;
        writeln!(self.output, "Enter moves as row,col (e.g., 4,5)")?;
        writeln!(self.output, "Type 'exit' to quit the game")
    }

    fn print_board(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", BoardView(self.game.board()))?;
        writeln!(self.output)
    }

    /// Returns `Some` if the human ended the session
    fn human_turn(&mut self) -> io::Result<Option<Outcome>> {
        write!(self.output, "Your move (row,col): ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            writeln!(self.output, "Game ended by user.")?;
            return Ok(Some(Outcome::Quit));
        }

        match parse_command(&line) {
            Ok(Command::Quit) => {
                writeln!(self.output, "Game ended by user.")?;
                return Ok(Some(Outcome::Quit));
            }
            Ok(Command::Move(mv)) => {
                if !self.game.play(mv) {
                    debug!(%mv, "move rejected");
                    writeln!(self.output, "Invalid move. Try again.")?;
                }
            }
            Err(err) => {
                debug!(%err, "unparseable input");
                writeln!(
                    self.output,
                    "Invalid input. Please enter row,col (e.g., 4,5) or 'exit' to quit"
                )?;
            }
        }
        Ok(None)
    }

    fn ai_turn(&mut self) -> io::Result<()> {
        writeln!(self.output, "AI is thinking...")?;
        self.output.flush()?;
        if !self.ai_delay.is_zero() {
            thread::sleep(self.ai_delay);
        }

        match self.opponent.play(&mut self.game) {
            Some(mv) => writeln!(self.output, "{} plays {mv}", self.opponent.name()),
            None => Err(io::Error::new(
                io::ErrorKind::Other,
                format!("{} opponent did not move", self.opponent.name()),
            )),
        }
    }
}
