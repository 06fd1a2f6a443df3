//! Simulation configuration with documented constants

use serde::Deserialize;

/// Configuration for a simulation run
///
/// Scenario files may carry these values in a `[simulation]` table; command
/// line flags override whatever the file says.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of rounds to run after the initial board is reported
    pub rounds: u32,

    /// Maximum instructions a creature may fetch within a single turn
    ///
    /// A turn ends at the first action instruction. Programs that loop
    /// through control instructions only would otherwise never return, so
    /// exhausting this budget aborts the run with `NoProgress`.
    /// The classic species finish a turn in at most four fetches.
    pub step_budget: usize,

    /// Seed for the coin used by `if_random`
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rounds: 5,
            step_budget: 1000,
            seed: 0,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.step_budget == 0 {
            return Err("step_budget must be at least 1".into());
        }

        Ok(())
    }
}
