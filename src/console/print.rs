use std::io::{self, Write};

use crate::board::{Color, Square};
use crate::game::{GameStatus, GameView, MoveHistoryEntry};

/// Board with Unicode pieces. The selected square is bracketed and legal
/// destinations are marked with `*` (or `x` when occupied).
pub fn print_board<W: Write>(out: &mut W, view: &GameView) -> io::Result<()> {
    for row in 0..8 {
        write!(out, "{} ", 8 - row)?;
        for col in 0..8 {
            let sq = Square(row, col);
            let piece = view.board.piece_at(sq);
            let glyph = piece.map_or('·', |p| p.symbol());
            if view.selection == Some(sq) {
                write!(out, "[{glyph}]")?;
            } else if view.candidates.contains(&sq) {
                let mark = if piece.is_some() { 'x' } else { '*' };
                write!(out, " {mark} ")?;
            } else {
                write!(out, " {glyph} ")?;
            }
        }
        writeln!(out)?;
    }
    writeln!(out, "   a  b  c  d  e  f  g  h")
}

pub fn print_status<W: Write>(out: &mut W, view: &GameView) -> io::Result<()> {
    match view.status {
        GameStatus::Playing if view.thinking => writeln!(out, "{} is thinking...", view.active),
        GameStatus::Playing if view.board.is_in_check(view.active) => {
            writeln!(out, "{} to move (check)", view.active)
        }
        GameStatus::Playing => writeln!(out, "{} to move", view.active),
        GameStatus::Checkmate { winner } => writeln!(out, "Checkmate! {winner} wins."),
        GameStatus::Stalemate => writeln!(out, "Stalemate. The game is drawn."),
    }
}

/// Move log, one full move (White then Black) per line.
pub fn print_history<W: Write>(out: &mut W, history: &[MoveHistoryEntry]) -> io::Result<()> {
    if history.is_empty() {
        return writeln!(out, "No moves yet");
    }
    for (number, pair) in history.chunks(2).enumerate() {
        write!(out, "{:>3}. {}", number + 1, pair[0])?;
        if let Some(reply) = pair.get(1) {
            write!(out, "   {reply}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn print_captured<W: Write>(out: &mut W, view: &GameView) -> io::Result<()> {
    for capturer in Color::BOTH {
        let taken: String = view
            .captured
            .by(capturer)
            .iter()
            .map(|p| p.symbol())
            .collect();
        writeln!(
            out,
            "{capturer} captured: {} ({} points)",
            if taken.is_empty() { "-" } else { taken.as_str() },
            view.captured.material(capturer)
        )?;
    }
    Ok(())
}

pub fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  <sq> | select <sq>    select a piece, or pick its destination")?;
    writeln!(out, "  move <from> <to>      play a move in one go")?;
    writeln!(out, "  moves <sq>            list legal destinations of a piece")?;
    writeln!(out, "  board | status        show the position / game status")?;
    writeln!(out, "  history | captured    show the move log / captured pieces")?;
    writeln!(out, "  new                   start a new game")?;
    writeln!(out, "  help | quit")
}
