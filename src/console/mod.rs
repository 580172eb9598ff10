//! Line-oriented text front end.
//!
//! Reads commands, forwards square selections to a [`GameController`] and
//! prints what changed. All rules live in the controller; this module only
//! parses and prints.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::ai::JitterSource;
use crate::game::{GameController, MoveHistoryEntry, SelectionOutcome};

pub mod command;
pub mod print;

pub use command::{parse_command, Command, CommandError};

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive session around one controller.
pub struct Console<J: JitterSource> {
    controller: GameController<J>,
    ai_delay: Duration,
}

impl<J: JitterSource> Console<J> {
    /// `ai_delay` is the pause before each computer move.
    pub fn new(controller: GameController<J>, ai_delay: Duration) -> Self {
        Console {
            controller,
            ai_delay,
        }
    }

    #[must_use]
    pub fn controller(&self) -> &GameController<J> {
        &self.controller
    }

    /// Run until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> io::Result<()> {
        writeln!(
            out,
            "You play {}. Type 'help' for commands.",
            self.controller.human_color()
        )?;
        self.show_position(&mut out)?;
        self.drive_ai(&mut out)?;

        for line in input.lines() {
            if self.handle_line(&line?, &mut out)? == Flow::Quit {
                break;
            }
            out.flush()?;
        }
        Ok(())
    }

    /// Execute one command line, then let the computer answer if it is due.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) => {
                writeln!(out, "Error: {e}")?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::Select(square) => {
                let outcome = self.controller.select_square(square);
                self.report(outcome, out)?;
            }
            Command::Move(from, to) => {
                self.controller.deselect();
                match self.controller.select_square(from) {
                    SelectionOutcome::Selected { .. } => {
                        let outcome = self.controller.select_square(to);
                        self.report(outcome, out)?;
                    }
                    outcome => self.report(outcome, out)?,
                }
            }
            Command::Moves(square) => {
                let moves = self.controller.state().legal_moves(square);
                if moves.is_empty() {
                    writeln!(out, "No legal moves from {square}")?;
                } else {
                    let list: Vec<String> = moves.iter().map(ToString::to_string).collect();
                    writeln!(out, "{square}: {}", list.join(" "))?;
                }
            }
            Command::Board => print::print_board(out, &self.controller.snapshot())?,
            Command::History => print::print_history(out, self.controller.state().history())?,
            Command::Captured => print::print_captured(out, &self.controller.snapshot())?,
            Command::Status => print::print_status(out, &self.controller.snapshot())?,
            Command::NewGame => {
                self.controller.reset();
                self.show_position(out)?;
            }
            Command::Help => print::print_help(out)?,
            Command::Quit => return Ok(Flow::Quit),
        }

        self.drive_ai(out)?;
        Ok(Flow::Continue)
    }

    fn report<W: Write>(&self, outcome: SelectionOutcome, out: &mut W) -> io::Result<()> {
        match outcome {
            SelectionOutcome::Selected {
                square,
                destinations,
            } => {
                if destinations.is_empty() {
                    writeln!(out, "{square} selected, but it has no legal moves")?;
                }
                print::print_board(out, &self.controller.snapshot())
            }
            SelectionOutcome::Moved(entry) => self.show_move("You", entry, out),
            SelectionOutcome::Cleared => writeln!(out, "Selection cleared"),
            SelectionOutcome::Ignored => {
                let view = self.controller.snapshot();
                if view.status.is_over() {
                    writeln!(out, "The game is over. Type 'new' to play again.")
                } else if view.active != self.controller.human_color() || view.thinking {
                    writeln!(out, "Not your turn")
                } else {
                    writeln!(out, "Select one of your own pieces")
                }
            }
        }
    }

    fn drive_ai<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if !self.controller.begin_ai_turn() {
            return Ok(());
        }
        print::print_status(out, &self.controller.snapshot())?;
        out.flush()?;
        if !self.ai_delay.is_zero() {
            thread::sleep(self.ai_delay);
        }
        match self.controller.play_ai_turn() {
            Some(entry) => self.show_move("Computer", entry, out),
            None => Ok(()),
        }
    }

    fn show_move<W: Write>(&self, who: &str, entry: MoveHistoryEntry, out: &mut W) -> io::Result<()> {
        writeln!(out, "{who}: {} {entry}", entry.piece)?;
        self.show_position(out)
    }

    fn show_position<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let view = self.controller.snapshot();
        print::print_board(out, &view)?;
        print::print_status(out, &view)
    }
}
