//! Load scenarios from TOML files
//!
//! ```toml
//! rows = 8
//! cols = 8
//!
//! [simulation]
//! rounds = 20
//! seed = 7
//!
//! [[species]]
//! library = "rover"
//!
//! [[species]]
//! symbol = "s"
//! program = """
//! if_wall 3
//! hop
//! go 0
//! right
//! go 0
//! """
//!
//! [[creature]]
//! species = "r"
//! row = 0
//! col = 0
//! facing = "east"
//! ```

use ahash::AHashMap;
use serde::Deserialize;
use std::path::Path;
use std::rc::Rc;

use crate::core::config::SimulationConfig;
use crate::core::error::{DarwinError, Result};
use crate::core::types::{Direction, Position};
use crate::program::assembler::assemble_species;
use crate::program::species::Species;
use crate::scenario::{library, Scenario};
use crate::world::board::World;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioFile {
    rows: usize,
    cols: usize,
    #[serde(default)]
    simulation: SimulationConfig,
    #[serde(default)]
    species: Vec<SpeciesEntry>,
    #[serde(default, rename = "creature")]
    creatures: Vec<CreatureEntry>,
}

/// Either a library species (optionally re-symboled) or an inline program
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SpeciesEntry {
    symbol: Option<String>,
    library: Option<String>,
    program: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CreatureEntry {
    species: String,
    row: usize,
    col: usize,
    facing: Direction,
}

impl SpeciesEntry {
    fn build(&self, index: usize) -> Result<Species> {
        match (&self.library, &self.program) {
            (Some(name), None) => {
                let base = library::species(name)?;
                match &self.symbol {
                    Some(symbol) => {
                        let renamed = Species::with_program(symbol.as_str(), base.program().to_vec());
                        renamed.validate()?;
                        Ok(renamed)
                    }
                    None => Ok(base),
                }
            }
            (None, Some(source)) => {
                let symbol = self.symbol.as_deref().ok_or_else(|| {
                    DarwinError::InvalidConfig(format!("species #{} has a program but no symbol", index + 1))
                })?;
                assemble_species(symbol, source)
            }
            _ => Err(DarwinError::InvalidConfig(format!(
                "species #{} needs exactly one of `library` or `program`",
                index + 1
            ))),
        }
    }
}

/// Parse a scenario from TOML text
pub fn load_from_str(text: &str) -> Result<Scenario> {
    let file: ScenarioFile = toml::from_str(text)?;
    file.simulation.validate().map_err(DarwinError::InvalidConfig)?;

    let mut registry: AHashMap<String, Rc<Species>> = AHashMap::new();
    let mut species = Vec::with_capacity(file.species.len());
    for (index, entry) in file.species.iter().enumerate() {
        let built = Rc::new(entry.build(index)?);
        let symbol = built.symbol().to_string();
        if registry.insert(symbol.clone(), built.clone()).is_some() {
            return Err(DarwinError::DuplicateSpecies(symbol));
        }
        species.push(built);
    }

    let mut world = World::new(file.rows, file.cols)?;
    for creature in &file.creatures {
        let kind = registry
            .get(&creature.species)
            .ok_or_else(|| DarwinError::UnknownSpecies(creature.species.clone()))?;
        world.place(kind.clone(), Position::new(creature.row, creature.col), creature.facing)?;
    }

    tracing::info!(
        rows = file.rows,
        cols = file.cols,
        species = species.len(),
        creatures = file.creatures.len(),
        "scenario loaded"
    );

    Ok(Scenario {
        world,
        config: file.simulation,
        species,
    })
}

/// Read and parse a scenario file from disk
pub fn load_from_file(path: &Path) -> Result<Scenario> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}
