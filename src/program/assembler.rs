//! Text form of species programs
//!
//! One instruction per line, jump targets are absolute instruction indices:
//!
//! ```text
//! if_enemy 3   # 0
//! left         # 1
//! go 0         # 2
//! infect       # 3
//! go 0         # 4
//! ```
//!
//! Mnemonics are case-insensitive, `#` starts a comment and blank lines are
//! skipped (they do not count as instructions).

use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{digit1, space1};
use nom::combinator::{all_consuming, map, map_res, value};
use nom::sequence::preceded;
use nom::{IResult, Parser};

use crate::core::error::{DarwinError, Result};
use crate::program::instruction::Instruction;
use crate::program::species::Species;

fn operand(input: &str) -> IResult<&str, usize> {
    preceded(space1, map_res(digit1, |digits: &str| digits.parse::<usize>())).parse(input)
}

fn instruction(input: &str) -> IResult<&str, Instruction> {
    alt((
        map(preceded(tag_no_case("if_empty"), operand), Instruction::IfEmpty),
        map(preceded(tag_no_case("if_wall"), operand), Instruction::IfWall),
        map(preceded(tag_no_case("if_random"), operand), Instruction::IfRandom),
        map(preceded(tag_no_case("if_enemy"), operand), Instruction::IfEnemy),
        map(preceded(tag_no_case("go"), operand), Instruction::Go),
        value(Instruction::Hop, tag_no_case("hop")),
        value(Instruction::Left, tag_no_case("left")),
        value(Instruction::Right, tag_no_case("right")),
        value(Instruction::Infect, tag_no_case("infect")),
    ))
    .parse(input)
}

/// Parse a single instruction such as `if_wall 4`
pub fn parse_instruction(text: &str) -> Option<Instruction> {
    all_consuming(instruction)
        .parse(text.trim())
        .ok()
        .map(|(_, parsed)| parsed)
}

/// Assemble program text into a list of instructions
pub fn assemble(source: &str) -> Result<Vec<Instruction>> {
    let mut program = Vec::new();

    for (line_no, line) in source.lines().enumerate() {
        let code = match line.split_once('#') {
            Some((code, _comment)) => code,
            None => line,
        }
        .trim();

        if code.is_empty() {
            continue;
        }

        let parsed = parse_instruction(code).ok_or_else(|| DarwinError::Parse {
            line: line_no + 1,
            message: format!("unrecognised instruction '{}'", code),
        })?;
        program.push(parsed);
    }

    Ok(program)
}

/// Assemble and validate a complete species
pub fn assemble_species(symbol: &str, source: &str) -> Result<Species> {
    let species = Species::with_program(symbol, assemble(source)?);
    species.validate()?;
    Ok(species)
}

/// Inverse of `assemble`: one mnemonic per line
pub fn disassemble(program: &[Instruction]) -> String {
    program
        .iter()
        .map(|instruction| format!("{}\n", instruction))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_trap() {
        let source = "
            # trap
            if_enemy 3
            left
            go 0
            infect
            go 0
        ";
        let program = assemble(source).unwrap();
        assert_eq!(
            program,
            vec![
                Instruction::IfEnemy(3),
                Instruction::Left,
                Instruction::Go(0),
                Instruction::Infect,
                Instruction::Go(0),
            ]
        );
    }

    #[test]
    fn test_mnemonics_case_insensitive() {
        assert_eq!(parse_instruction("HOP"), Some(Instruction::Hop));
        assert_eq!(parse_instruction("If_Random 12"), Some(Instruction::IfRandom(12)));
    }

    #[test]
    fn test_rejects_trailing_garbage_and_missing_operand() {
        assert_eq!(parse_instruction("hopx"), None);
        assert_eq!(parse_instruction("go"), None);
        assert_eq!(parse_instruction("go -1"), None);
        assert_eq!(parse_instruction("left 3"), None);
    }

    #[test]
    fn test_error_reports_source_line() {
        let err = assemble("hop\n\njump 0\n").unwrap_err();
        match err {
            DarwinError::Parse { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("jump 0"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_disassembly_reassembles() {
        let program = vec![
            Instruction::IfEnemy(9),
            Instruction::IfEmpty(7),
            Instruction::IfRandom(5),
            Instruction::IfWall(0),
            Instruction::Right,
            Instruction::Go(0),
        ];
        assert_eq!(assemble(&disassemble(&program)).unwrap(), program);
    }

    #[test]
    fn test_assemble_species_validates_targets() {
        let err = assemble_species("x", "hop\ngo 5\n").unwrap_err();
        assert!(matches!(err, DarwinError::JumpTargetOutOfRange { target: 5, .. }));
    }
}
