//! Instruction set for species programs

use serde::{Deserialize, Serialize};
use std::fmt;

/// One instruction of a species program
///
/// Control variants carry an absolute jump target into the same program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    Hop,
    Left,
    Right,
    Infect,
    IfEmpty(usize),
    IfWall(usize),
    IfRandom(usize),
    IfEnemy(usize),
    Go(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionCategory {
    /// Ends the creature's turn
    Action,
    /// Only moves the program counter
    Control,
}

impl Instruction {
    pub fn category(&self) -> InstructionCategory {
        match self {
            Instruction::Hop | Instruction::Left | Instruction::Right | Instruction::Infect => {
                InstructionCategory::Action
            }
            Instruction::IfEmpty(_)
            | Instruction::IfWall(_)
            | Instruction::IfRandom(_)
            | Instruction::IfEnemy(_)
            | Instruction::Go(_) => InstructionCategory::Control,
        }
    }

    pub fn is_action(&self) -> bool {
        self.category() == InstructionCategory::Action
    }

    pub fn is_control(&self) -> bool {
        self.category() == InstructionCategory::Control
    }

    pub fn jump_target(&self) -> Option<usize> {
        match *self {
            Instruction::IfEmpty(n)
            | Instruction::IfWall(n)
            | Instruction::IfRandom(n)
            | Instruction::IfEnemy(n)
            | Instruction::Go(n) => Some(n),
            Instruction::Hop | Instruction::Left | Instruction::Right | Instruction::Infect => None,
        }
    }

    /// Assembler mnemonic without the operand
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Instruction::Hop => "hop",
            Instruction::Left => "left",
            Instruction::Right => "right",
            Instruction::Infect => "infect",
            Instruction::IfEmpty(_) => "if_empty",
            Instruction::IfWall(_) => "if_wall",
            Instruction::IfRandom(_) => "if_random",
            Instruction::IfEnemy(_) => "if_enemy",
            Instruction::Go(_) => "go",
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.jump_target() {
            Some(target) => write!(f, "{} {}", self.mnemonic(), target),
            None => f.write_str(self.mnemonic()),
        }
    }
}
