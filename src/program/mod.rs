//! Species programs: instructions, species and the text assembler

pub mod assembler;
pub mod instruction;
pub mod species;

pub use assembler::{assemble, assemble_species, disassemble};
pub use instruction::{Instruction, InstructionCategory};
pub use species::Species;
