//! Text rendering of the board
//!
//! This module is READ-ONLY - it never modifies simulation state.

use std::fmt::Write;

use crate::core::types::Position;
use crate::world::board::World;

/// Glyph for a cell with nobody in it
pub const EMPTY_CELL: char = '-';

/// Render the board as a character grid
///
/// The first line is a column header and every row starts with its row
/// number, both modulo 10. Occupied cells show the occupant's species symbol,
/// which `Species::validate` keeps to one character.
pub fn render_board(world: &World) -> String {
    let mut out = String::with_capacity((world.cols() + 3) * (world.rows() + 1));

    out.push_str("  ");
    for col in 0..world.cols() {
        let _ = write!(out, "{}", col % 10);
    }
    out.push('\n');

    for row in 0..world.rows() {
        let _ = write!(out, "{} ", row % 10);
        for col in 0..world.cols() {
            let glyph = world
                .creature_at(Position::new(row, col))
                .and_then(|c| c.symbol().chars().next())
                .unwrap_or(EMPTY_CELL);
            out.push(glyph);
        }
        out.push('\n');
    }

    out
}
