//! Species: a display symbol plus the program every member runs

use crate::core::error::{DarwinError, Result};
use crate::program::instruction::Instruction;
use crate::render::EMPTY_CELL;

/// A named program shared by every creature of that kind
///
/// Creatures hold an `Rc<Species>`; two species are the same only when they
/// are the same allocation, whatever their symbols say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Species {
    symbol: String,
    program: Vec<Instruction>,
}

impl Species {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            program: Vec::new(),
        }
    }

    pub fn with_program(symbol: impl Into<String>, program: Vec<Instruction>) -> Self {
        Self {
            symbol: symbol.into(),
            program,
        }
    }

    /// Append an instruction (setup only; species are shared read-only once placed)
    pub fn push(&mut self, instruction: Instruction) {
        self.program.push(instruction);
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn program(&self) -> &[Instruction] {
        &self.program
    }

    pub fn len(&self) -> usize {
        self.program.len()
    }

    pub fn is_empty(&self) -> bool {
        self.program.is_empty()
    }

    /// Fetch the instruction at `index`
    ///
    /// An index past the end means the program jumped or fell off its own
    /// end, which is a defect in the program, not something to recover from.
    pub fn instruction_at(&self, index: usize) -> Result<Instruction> {
        self.program
            .get(index)
            .copied()
            .ok_or_else(|| DarwinError::ProgramCounterOutOfRange {
                species: self.symbol.clone(),
                index,
                len: self.program.len(),
            })
    }

    /// Check the symbol is drawable and every jump target lands inside the program
    pub fn validate(&self) -> Result<()> {
        let mut chars = self.symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c != EMPTY_CELL && !c.is_whitespace() => {}
            _ => return Err(DarwinError::InvalidSymbol(self.symbol.clone())),
        }

        if self.program.is_empty() {
            return Err(DarwinError::EmptyProgram(self.symbol.clone()));
        }

        for (at, instruction) in self.program.iter().enumerate() {
            if let Some(target) = instruction.jump_target() {
                if target >= self.program.len() {
                    return Err(DarwinError::JumpTargetOutOfRange {
                        species: self.symbol.clone(),
                        at,
                        target,
                        len: self.program.len(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Program listing, one numbered instruction per line
    pub fn listing(&self) -> String {
        self.program
            .iter()
            .enumerate()
            .map(|(i, instruction)| format!("{:>3}: {}\n", i, instruction))
            .collect()
    }
}
