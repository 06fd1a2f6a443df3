//! Round scheduler
//!
//! Each round snapshots the occupied cells once, in scan order, then lets
//! every queued creature take its turn in that order. Turns run one after
//! another against the live board, so a later creature sees everything an
//! earlier one did this round. In particular a creature converted earlier in
//! the round still takes its queued turn, running its new species' program
//! from the top.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::config::SimulationConfig;
use crate::core::error::{DarwinError, Result};
use crate::core::types::{Direction, Position, Round};
use crate::program::instruction::Instruction;
use crate::simulation::action_execute::{take_turn, ActionOutcome};
use crate::simulation::rng::{CoinFlip, SeededCoin};
use crate::world::board::World;
use crate::world::view::WorldView;

/// Events generated during a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SimulationEvent {
    /// A creature finished its turn
    TurnTaken {
        round: Round,
        species: String,
        from: Position,
        to: Position,
        facing: Direction,
        instruction: Instruction,
        outcome: ActionOutcome,
        steps: usize,
    },
    /// An infection converted the creature at `target`
    Converted {
        round: Round,
        infector: Position,
        target: Position,
        species: String,
    },
}

/// Everything that happened in one round
#[derive(Debug, Clone, Serialize)]
pub struct RoundReport {
    pub round: Round,
    pub events: Vec<SimulationEvent>,
    /// Creatures per species symbol after the round
    pub census: BTreeMap<String, usize>,
}

impl RoundReport {
    pub fn conversions(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SimulationEvent::Converted { .. }))
            .count()
    }
}

/// A world plus the coin and settings that drive it
pub struct Simulation<C: CoinFlip = SeededCoin> {
    world: World,
    coin: C,
    config: SimulationConfig,
    round: Round,
}

impl Simulation<SeededCoin> {
    /// Simulation whose coin is seeded from `config.seed`
    pub fn seeded(world: World, config: SimulationConfig) -> Result<Self> {
        let coin = SeededCoin::new(config.seed);
        Self::new(world, coin, config)
    }
}

impl<C: CoinFlip> Simulation<C> {
    pub fn new(world: World, coin: C, config: SimulationConfig) -> Result<Self> {
        config.validate().map_err(DarwinError::InvalidConfig)?;
        Ok(Self {
            world,
            coin,
            config,
            round: 0,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Rounds completed so far
    pub fn round(&self) -> Round {
        self.round
    }

    /// Run one round over a snapshot of the occupied cells
    pub fn step_round(&mut self) -> Result<RoundReport> {
        self.round += 1;
        let round = self.round;
        let queue = self.world.occupied_slots();
        let mut events = Vec::with_capacity(queue.len());

        for slot in queue {
            let mut view = self.world.view(slot)?;
            let from = view.position();
            let report = take_turn(&mut view, &mut self.coin, self.config.step_budget)?;

            let to_slot = view.slot();
            let to = view.position();
            let facing = view.active().facing();
            let species = view.active().symbol().to_string();

            tracing::debug!(
                round,
                species = %species,
                %from,
                %to,
                instruction = %report.instruction,
                outcome = ?report.outcome,
                steps = report.steps,
                "turn taken"
            );

            events.push(SimulationEvent::TurnTaken {
                round,
                species: species.clone(),
                from,
                to,
                facing,
                instruction: report.instruction,
                outcome: report.outcome,
                steps: report.steps,
            });

            if report.outcome == ActionOutcome::Infected {
                if let Some(target) = self.world.neighbor(to_slot, facing) {
                    events.push(SimulationEvent::Converted {
                        round,
                        infector: to,
                        target: self.world.position_of(target),
                        species,
                    });
                }
            }
        }

        let census = self.world.census();
        tracing::info!(round, creatures = self.world.creature_count(), ?census, "round complete");

        Ok(RoundReport {
            round,
            events,
            census,
        })
    }

    /// Run `rounds` rounds
    ///
    /// `observer` sees the board before the first round (round 0) and after
    /// every round.
    pub fn run<F>(&mut self, rounds: Round, mut observer: F) -> Result<Vec<RoundReport>>
    where
        F: FnMut(Round, &World),
    {
        observer(self.round, &self.world);

        let mut reports = Vec::with_capacity(rounds as usize);
        for _ in 0..rounds {
            let report = self.step_round()?;
            observer(self.round, &self.world);
            reports.push(report);
        }

        Ok(reports)
    }
}
