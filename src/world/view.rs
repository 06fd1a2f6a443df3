//! What a running creature may ask of, and do to, the world

use crate::core::error::{DarwinError, Result};
use crate::core::types::Position;
use crate::entity::creature::Creature;
use crate::world::board::World;

/// Capabilities the interpreter needs during one creature's turn
///
/// Every query is about the cell directly ahead of the active creature.
pub trait WorldView {
    fn active(&self) -> &Creature;

    fn active_mut(&mut self) -> &mut Creature;

    /// Ahead is on the board and unoccupied
    fn is_facing_empty(&self) -> bool;

    /// Ahead is off the board
    fn is_facing_wall(&self) -> bool;

    /// The occupant ahead, if it belongs to another species
    fn enemy_ahead(&self) -> Option<&Creature>;

    /// Move the active creature into the cell ahead
    ///
    /// Callers must have seen `is_facing_empty()`; anything else is an
    /// internal error.
    fn hop(&mut self) -> Result<()>;

    /// Convert the enemy ahead to the active creature's species.
    /// Returns false when there was no enemy to convert.
    fn infect_ahead(&mut self) -> bool;
}

/// View bound to the board slot of the creature whose turn it is
///
/// The slot is a scheduling cursor, not simulation state: it exists only for
/// the duration of the turn and follows the creature when it hops.
pub struct ActiveView<'w> {
    world: &'w mut World,
    slot: usize,
}

impl<'w> ActiveView<'w> {
    /// `slot` must be occupied; `World::view` checks this
    pub(crate) fn new(world: &'w mut World, slot: usize) -> Self {
        Self { world, slot }
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn position(&self) -> Position {
        self.world.position_of(self.slot)
    }

    fn ahead(&self) -> Option<usize> {
        self.world.neighbor(self.slot, self.active().facing())
    }
}

impl WorldView for ActiveView<'_> {
    fn active(&self) -> &Creature {
        self.world
            .at_slot(self.slot)
            .expect("active slot holds the running creature")
    }

    fn active_mut(&mut self) -> &mut Creature {
        self.world
            .at_slot_mut(self.slot)
            .expect("active slot holds the running creature")
    }

    fn is_facing_empty(&self) -> bool {
        matches!(self.ahead(), Some(slot) if self.world.at_slot(slot).is_none())
    }

    fn is_facing_wall(&self) -> bool {
        self.ahead().is_none()
    }

    fn enemy_ahead(&self) -> Option<&Creature> {
        let me = self.active();
        self.ahead()
            .and_then(|slot| self.world.at_slot(slot))
            .filter(|other| me.is_enemy_of(other))
    }

    fn hop(&mut self) -> Result<()> {
        let from = self.position();
        let to = self.ahead().ok_or(DarwinError::HopIntoWall(from))?;
        if self.world.at_slot(to).is_some() {
            return Err(DarwinError::HopIntoOccupied {
                from,
                to: self.world.position_of(to),
            });
        }

        self.world.move_occupant(self.slot, to);
        self.slot = to;
        Ok(())
    }

    fn infect_ahead(&mut self) -> bool {
        let Some(ahead) = self.ahead() else {
            return false;
        };
        let species = self.active().species().clone();

        match self.world.at_slot_mut(ahead) {
            Some(target) if !std::rc::Rc::ptr_eq(target.species(), &species) => {
                target.convert(species);
                true
            }
            _ => false,
        }
    }
}
