//! The classic Darwin species

use crate::core::error::{DarwinError, Result};
use crate::program::assembler::assemble_species;
use crate::program::species::Species;

/// Turns in place forever
pub const FOOD: &str = "
left
go 0
";

/// Walks straight until something is in the way
pub const HOPPER: &str = "
hop
go 0
";

/// Infects what it can, otherwise wanders
pub const ROVER: &str = "
if_enemy 9
if_empty 7
if_random 5
left
go 0
right
go 0
hop
go 0
infect
go 0
";

/// Sits still and infects whatever wanders in front of it
pub const TRAP: &str = "
if_enemy 3
left
go 0
infect
go 0
";

/// (name, symbol, program source)
pub const LIBRARY: [(&str, &str, &str); 4] = [
    ("food", "f", FOOD),
    ("hopper", "h", HOPPER),
    ("rover", "r", ROVER),
    ("trap", "t", TRAP),
];

/// Build a library species by name, e.g. `"rover"`
pub fn species(name: &str) -> Result<Species> {
    let (_, symbol, source) = LIBRARY
        .iter()
        .find(|(n, _, _)| n.eq_ignore_ascii_case(name))
        .ok_or_else(|| DarwinError::UnknownSpecies(name.to_string()))?;
    assemble_species(symbol, source)
}

pub fn food() -> Result<Species> {
    species("food")
}

pub fn hopper() -> Result<Species> {
    species("hopper")
}

pub fn rover() -> Result<Species> {
    species("rover")
}

pub fn trap() -> Result<Species> {
    species("trap")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::instruction::Instruction;

    #[test]
    fn test_library_programs_are_valid() {
        for (name, symbol, _) in LIBRARY {
            let built = species(name).unwrap();
            assert_eq!(built.symbol(), symbol);
            assert!(built.validate().is_ok());
        }
    }

    #[test]
    fn test_rover_program() {
        let rover = rover().unwrap();
        assert_eq!(rover.len(), 11);
        assert_eq!(rover.program()[0], Instruction::IfEnemy(9));
        assert_eq!(rover.program()[9], Instruction::Infect);
    }

    #[test]
    fn test_unknown_name() {
        assert!(matches!(species("dragon"), Err(DarwinError::UnknownSpecies(_))));
    }
}
