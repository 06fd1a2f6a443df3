//! Creature interpreter: runs one creature's turn
//!
//! A turn is a fetch/advance/dispatch loop. The program counter moves past
//! each instruction before it is dispatched, so anything that does not jump
//! falls through to the next instruction. Control instructions keep the loop
//! going; the first action instruction ends the turn whether or not it had any
//! effect.

use serde::Serialize;

use crate::core::error::{DarwinError, Result};
use crate::program::instruction::Instruction;
use crate::simulation::rng::CoinFlip;
use crate::world::view::WorldView;

/// What the turn-ending action did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionOutcome {
    /// Hop into an empty cell
    Moved,
    /// Hop into a wall or an occupied cell
    Blocked,
    /// Left or right
    Turned,
    /// Infect converted the creature ahead
    Infected,
    /// Infect found no enemy ahead
    NoTarget,
}

/// Result of one completed turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    /// The action instruction that ended the turn
    pub instruction: Instruction,
    pub outcome: ActionOutcome,
    /// Instructions fetched, including the final action
    pub steps: usize,
}

/// Run the active creature of `view` until it executes an action
///
/// Fails with `NoProgress` if `step_budget` instructions are fetched without
/// reaching an action, and with `ProgramCounterOutOfRange` if the program
/// jumps or falls off its end.
pub fn take_turn<V, C>(view: &mut V, coin: &mut C, step_budget: usize) -> Result<TurnReport>
where
    V: WorldView + ?Sized,
    C: CoinFlip + ?Sized,
{
    for steps in 1..=step_budget {
        let instruction = {
            let creature = view.active_mut();
            let instruction = creature.fetch()?;
            creature.program_counter += 1;
            instruction
        };

        let outcome = match instruction {
            Instruction::Hop => {
                if view.is_facing_empty() {
                    view.hop()?;
                    Some(ActionOutcome::Moved)
                } else {
                    Some(ActionOutcome::Blocked)
                }
            }
            Instruction::Left => {
                let creature = view.active_mut();
                creature.facing = creature.facing.left();
                Some(ActionOutcome::Turned)
            }
            Instruction::Right => {
                let creature = view.active_mut();
                creature.facing = creature.facing.right();
                Some(ActionOutcome::Turned)
            }
            Instruction::Infect => {
                if view.infect_ahead() {
                    Some(ActionOutcome::Infected)
                } else {
                    Some(ActionOutcome::NoTarget)
                }
            }
            Instruction::IfEmpty(target) => {
                if view.is_facing_empty() {
                    jump(view, target);
                }
                None
            }
            Instruction::IfWall(target) => {
                if view.is_facing_wall() {
                    jump(view, target);
                }
                None
            }
            Instruction::IfRandom(target) => {
                if coin.flip() {
                    jump(view, target);
                }
                None
            }
            Instruction::IfEnemy(target) => {
                if view.enemy_ahead().is_some() {
                    jump(view, target);
                }
                None
            }
            Instruction::Go(target) => {
                jump(view, target);
                None
            }
        };

        if let Some(outcome) = outcome {
            return Ok(TurnReport {
                instruction,
                outcome,
                steps,
            });
        }
    }

    Err(DarwinError::NoProgress {
        species: view.active().symbol().to_string(),
        budget: step_budget,
    })
}

fn jump<V: WorldView + ?Sized>(view: &mut V, target: usize) {
    view.active_mut().program_counter = target;
}
