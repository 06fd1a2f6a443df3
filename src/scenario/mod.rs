//! Ready-to-run worlds: the built-in demo and TOML scenario files

pub mod library;
pub mod loader;

use std::path::Path;
use std::rc::Rc;

use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::core::types::{Direction, Position};
use crate::program::species::Species;
use crate::simulation::tick::Simulation;
use crate::world::board::World;

pub use loader::{load_from_file, load_from_str};

/// A populated world and the settings to run it with
#[derive(Debug)]
pub struct Scenario {
    pub world: World,
    pub config: SimulationConfig,
    /// Every species defined by the scenario, placed or not
    pub species: Vec<Rc<Species>>,
}

impl Scenario {
    /// The classic 8x8 demo: two food and four hoppers for five rounds
    pub fn demo() -> Result<Self> {
        let food = Rc::new(library::food()?);
        let hopper = Rc::new(library::hopper()?);

        let mut world = World::new(8, 8)?;
        world.place(food.clone(), Position::new(0, 0), Direction::East)?;
        world.place(hopper.clone(), Position::new(3, 3), Direction::North)?;
        world.place(hopper.clone(), Position::new(3, 4), Direction::East)?;
        world.place(hopper.clone(), Position::new(4, 4), Direction::South)?;
        world.place(hopper.clone(), Position::new(4, 3), Direction::West)?;
        world.place(food.clone(), Position::new(7, 7), Direction::North)?;

        Ok(Self {
            world,
            config: SimulationConfig {
                rounds: 5,
                ..SimulationConfig::default()
            },
            species: vec![food, hopper],
        })
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        load_from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self> {
        load_from_file(path)
    }

    /// Simulation with a coin seeded from the scenario config
    pub fn into_simulation(self) -> Result<Simulation> {
        Simulation::seeded(self.world, self.config)
    }
}
