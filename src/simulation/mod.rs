pub mod action_execute;
pub mod rng;
pub mod tick;

pub use action_execute::{take_turn, ActionOutcome, TurnReport};
pub use rng::{CoinFlip, ScriptedCoin, SeededCoin};
pub use tick::{RoundReport, Simulation, SimulationEvent};
