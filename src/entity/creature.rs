//! Creature state: species handle, facing and program counter
//!
//! A creature does not know where it is. Its position is the board slot that
//! holds it.

use std::rc::Rc;

use crate::core::error::Result;
use crate::core::types::Direction;
use crate::program::instruction::Instruction;
use crate::program::species::Species;

#[derive(Debug, Clone)]
pub struct Creature {
    species: Rc<Species>,
    pub(crate) facing: Direction,
    pub(crate) program_counter: usize,
}

impl Creature {
    pub fn new(species: Rc<Species>, facing: Direction) -> Self {
        Self {
            species,
            facing,
            program_counter: 0,
        }
    }

    pub fn species(&self) -> &Rc<Species> {
        &self.species
    }

    pub fn symbol(&self) -> &str {
        self.species.symbol()
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn program_counter(&self) -> usize {
        self.program_counter
    }

    /// Friends share the same species allocation
    pub fn is_same_species(&self, other: &Creature) -> bool {
        Rc::ptr_eq(&self.species, &other.species)
    }

    pub fn is_enemy_of(&self, other: &Creature) -> bool {
        !self.is_same_species(other)
    }

    /// Instruction at the current program counter
    pub fn fetch(&self) -> Result<Instruction> {
        self.species.instruction_at(self.program_counter)
    }

    /// Infection: take on `species` and restart its program
    pub fn convert(&mut self, species: Rc<Species>) {
        self.species = species;
        self.program_counter = 0;
    }
}
