//! The walled grid that holds creature occupancy

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::core::error::{DarwinError, Result};
use crate::core::types::{Direction, Position};
use crate::entity::creature::Creature;
use crate::program::species::Species;
use crate::world::view::ActiveView;

/// Fixed-size board, row-major, at most one creature per cell
///
/// Edges are walls: stepping off the grid never wraps around.
#[derive(Debug, Clone)]
pub struct World {
    rows: usize,
    cols: usize,
    board: Vec<Option<Creature>>,
}

impl World {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let cells = match rows.checked_mul(cols) {
            Some(cells) if cells > 0 => cells,
            _ => return Err(DarwinError::InvalidDimensions { rows, cols }),
        };

        Ok(Self {
            rows,
            cols,
            board: vec![None; cells],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Linear slot for a position, `None` when off the board
    #[inline]
    pub fn index_of(&self, position: Position) -> Option<usize> {
        if position.row < self.rows && position.col < self.cols {
            Some(position.row * self.cols + position.col)
        } else {
            None
        }
    }

    #[inline]
    pub fn position_of(&self, slot: usize) -> Position {
        Position::new(slot / self.cols, slot % self.cols)
    }

    /// Slot one step from `slot` towards `facing`; `None` means wall
    pub fn neighbor(&self, slot: usize, facing: Direction) -> Option<usize> {
        let here = self.position_of(slot);
        let (dr, dc) = facing.offset();
        let row = here.row.checked_add_signed(dr)?;
        let col = here.col.checked_add_signed(dc)?;
        self.index_of(Position::new(row, col))
    }

    /// Put a new creature of `species` on the board
    pub fn place(&mut self, species: Rc<Species>, position: Position, facing: Direction) -> Result<()> {
        let slot = self.index_of(position).ok_or(DarwinError::OutOfBounds {
            position,
            rows: self.rows,
            cols: self.cols,
        })?;

        if self.board[slot].is_some() {
            return Err(DarwinError::CellOccupied(position));
        }

        self.board[slot] = Some(Creature::new(species, facing));
        Ok(())
    }

    pub fn creature_at(&self, position: Position) -> Option<&Creature> {
        self.index_of(position).and_then(|slot| self.at_slot(slot))
    }

    pub fn at_slot(&self, slot: usize) -> Option<&Creature> {
        self.board.get(slot).and_then(Option::as_ref)
    }

    pub(crate) fn at_slot_mut(&mut self, slot: usize) -> Option<&mut Creature> {
        self.board.get_mut(slot).and_then(Option::as_mut)
    }

    /// Move the occupant of `from` into `to`, leaving `from` empty
    pub(crate) fn move_occupant(&mut self, from: usize, to: usize) {
        self.board[to] = self.board[from].take();
    }

    /// Occupied slots in scan order
    pub fn occupied_slots(&self) -> Vec<usize> {
        self.board
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_some())
            .map(|(slot, _)| slot)
            .collect()
    }

    pub fn creatures(&self) -> impl Iterator<Item = (Position, &Creature)> + '_ {
        self.board
            .iter()
            .enumerate()
            .filter_map(move |(slot, cell)| cell.as_ref().map(|c| (self.position_of(slot), c)))
    }

    pub fn creature_count(&self) -> usize {
        self.board.iter().filter(|cell| cell.is_some()).count()
    }

    /// Creatures per species symbol
    pub fn census(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for (_, creature) in self.creatures() {
            *counts.entry(creature.symbol().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Capability surface for the creature in `slot` to take its turn
    pub fn view(&mut self, slot: usize) -> Result<ActiveView<'_>> {
        if self.at_slot(slot).is_none() {
            return Err(DarwinError::ScheduleDesync(self.position_of(slot)));
        }
        Ok(ActiveView::new(self, slot))
    }
}
